//! Declarative field tables and the binder that applies a JSON object to a
//! record.
//!
//! Every bindable record lists its fields once, through [`bind_fields!`], as a
//! table of [`Field`] descriptors. [`Binder::bind`] walks that table, looks up
//! each key in the JSON object and dispatches on the field kind. Absent keys
//! leave the record untouched; kind mismatches degrade to a diagnostic and the
//! type's zero value. Integers that do not fit the field are errors and keep
//! the previous value.

use std::any::TypeId;
use std::borrow::Cow;

use ahash::AHashSet;
use cputune_json::{JsonDiagnostics, Node, Object};
use cputune_schema::TypeTag;
use num_traits::ToPrimitive;

use crate::enums::TuneEnum;

// =============================================================================
// Field descriptors
// =============================================================================

/// Binds one JSON value into part of `R`.
pub type NodeBindFn<R> = fn(&mut Binder<'_>, &Node, &mut R);

/// Binds an enum-valued JSON value; the key is passed for diagnostics.
pub type EnumBindFn<R> = fn(&mut Binder<'_>, &Node, &'static str, &mut R);

/// Binds fields of an embedded base record from the enclosing JSON object.
pub type FlattenBindFn<R> = fn(&mut Binder<'_>, &Object, &mut R);

pub type DescribeFn = fn() -> Vec<FieldInfo>;

pub enum FieldKind<R: 'static> {
    Int(fn(&mut R) -> &mut i32),
    UInt(fn(&mut R) -> &mut u32),
    Bool(fn(&mut R) -> &mut bool),
    Str(fn(&mut R) -> &mut Option<String>),
    Enum(EnumBindFn<R>),
    /// Embedded sub-record.
    Object {
        bind: NodeBindFn<R>,
        describe: DescribeFn,
    },
    /// Shared table behind `Option<Cow<'static, T>>`.
    Shared {
        bind: NodeBindFn<R>,
        describe: DescribeFn,
    },
    /// Fixed-size array of sub-records.
    Array {
        bind: NodeBindFn<R>,
        describe: DescribeFn,
    },
    /// Base record whose fields live in the same JSON object.
    Flatten {
        bind: FlattenBindFn<R>,
        describe: DescribeFn,
    },
}

pub struct Field<R: 'static> {
    /// JSON key. Unused for [`FieldKind::Flatten`].
    pub key: &'static str,
    pub kind: FieldKind<R>,
}

/// A record with a field table.
pub trait Bind: Sized + 'static {
    const FIELDS: &'static [Field<Self>];

    /// The JSON shape the field table accepts.
    fn describe() -> Vec<FieldInfo> {
        let mut infos = Vec::with_capacity(Self::FIELDS.len());
        for field in Self::FIELDS {
            let shape = match &field.kind {
                FieldKind::Int(_) => FieldShape::Leaf(TypeTag::Int),
                FieldKind::UInt(_) => FieldShape::Leaf(TypeTag::UInt),
                FieldKind::Bool(_) => FieldShape::Leaf(TypeTag::Boolean),
                FieldKind::Str(_) => FieldShape::Leaf(TypeTag::String),
                FieldKind::Enum(_) => FieldShape::Leaf(TypeTag::Enum),
                FieldKind::Object { describe, .. } | FieldKind::Shared { describe, .. } => {
                    FieldShape::Object(describe())
                }
                FieldKind::Array { describe, .. } => FieldShape::Array(describe()),
                FieldKind::Flatten { describe, .. } => {
                    infos.extend(describe());
                    continue;
                }
            };
            infos.push(FieldInfo {
                key: field.key,
                shape,
            });
        }
        infos
    }
}

/// Self-description of one bindable key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    pub key: &'static str,
    pub shape: FieldShape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldShape {
    Leaf(TypeTag),
    Object(Vec<FieldInfo>),
    /// Array of objects with the given fields.
    Array(Vec<FieldInfo>),
}

/// Implements [`Bind`] for a record from a list of
/// `"json_key" => kind field[: Type]` entries.
///
/// Kinds: `int`, `uint`, `bool`, `string`, `enum`, `object`, `shared`,
/// `array`, and `_ => flatten field: Base` for an embedded base record.
macro_rules! bind_fields {
    ($record:ident { $($key:tt => $kind:tt $field:ident $(: $ty:ty)?),* $(,)? }) => {
        impl $crate::bind::Bind for $record {
            const FIELDS: &'static [$crate::bind::Field<Self>] = &[
                $(bind_fields!(@field $record, $key, $kind, $field $(, $ty)?)),*
            ];
        }
    };
    (@field $record:ident, $key:literal, int, $field:ident) => {
        $crate::bind::Field::<$record> {
            key: $key,
            kind: $crate::bind::FieldKind::Int({
                fn get(record: &mut $record) -> &mut i32 {
                    &mut record.$field
                }
                get
            }),
        }
    };
    (@field $record:ident, $key:literal, uint, $field:ident) => {
        $crate::bind::Field::<$record> {
            key: $key,
            kind: $crate::bind::FieldKind::UInt({
                fn get(record: &mut $record) -> &mut u32 {
                    &mut record.$field
                }
                get
            }),
        }
    };
    (@field $record:ident, $key:literal, bool, $field:ident) => {
        $crate::bind::Field::<$record> {
            key: $key,
            kind: $crate::bind::FieldKind::Bool({
                fn get(record: &mut $record) -> &mut bool {
                    &mut record.$field
                }
                get
            }),
        }
    };
    (@field $record:ident, $key:literal, string, $field:ident) => {
        $crate::bind::Field::<$record> {
            key: $key,
            kind: $crate::bind::FieldKind::Str({
                fn get(record: &mut $record) -> &mut Option<String> {
                    &mut record.$field
                }
                get
            }),
        }
    };
    (@field $record:ident, $key:literal, enum, $field:ident, $ty:ty) => {
        $crate::bind::Field::<$record> {
            key: $key,
            kind: $crate::bind::FieldKind::Enum({
                fn bind(
                    binder: &mut $crate::bind::Binder<'_>,
                    node: &::cputune_json::Node,
                    key: &'static str,
                    record: &mut $record,
                ) {
                    record.$field = binder.resolve_enum::<$ty>(node, key);
                }
                bind
            }),
        }
    };
    (@field $record:ident, $key:literal, object, $field:ident, $ty:ty) => {
        $crate::bind::Field::<$record> {
            key: $key,
            kind: $crate::bind::FieldKind::Object {
                bind: {
                    fn bind(
                        binder: &mut $crate::bind::Binder<'_>,
                        node: &::cputune_json::Node,
                        record: &mut $record,
                    ) {
                        binder.bind_object::<$ty>(node, &mut record.$field);
                    }
                    bind
                },
                describe: <$ty as $crate::bind::Bind>::describe,
            },
        }
    };
    (@field $record:ident, $key:literal, shared, $field:ident, $ty:ty) => {
        $crate::bind::Field::<$record> {
            key: $key,
            kind: $crate::bind::FieldKind::Shared {
                bind: {
                    fn bind(
                        binder: &mut $crate::bind::Binder<'_>,
                        node: &::cputune_json::Node,
                        record: &mut $record,
                    ) {
                        binder.bind_shared::<$ty>(node, &mut record.$field);
                    }
                    bind
                },
                describe: <$ty as $crate::bind::Bind>::describe,
            },
        }
    };
    (@field $record:ident, $key:literal, array, $field:ident, $ty:ty) => {
        $crate::bind::Field::<$record> {
            key: $key,
            kind: $crate::bind::FieldKind::Array {
                bind: {
                    fn bind(
                        binder: &mut $crate::bind::Binder<'_>,
                        node: &::cputune_json::Node,
                        record: &mut $record,
                    ) {
                        binder.bind_array::<$ty, _>(node, &mut record.$field);
                    }
                    bind
                },
                describe: <$ty as $crate::bind::Bind>::describe,
            },
        }
    };
    (@field $record:ident, _, flatten, $field:ident, $ty:ty) => {
        $crate::bind::Field::<$record> {
            key: "",
            kind: $crate::bind::FieldKind::Flatten {
                bind: {
                    fn bind(
                        binder: &mut $crate::bind::Binder<'_>,
                        object: &::cputune_json::Object,
                        record: &mut $record,
                    ) {
                        binder.bind::<$ty>(object, &mut record.$field);
                    }
                    bind
                },
                describe: <$ty as $crate::bind::Bind>::describe,
            },
        }
    };
}

pub(crate) use bind_fields;

// =============================================================================
// Binder
// =============================================================================

/// How extraction kind mismatches are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MismatchLevel {
    #[default]
    Warning,
    Error,
}

pub const UNSPECIFIED_TABLE_WARNING: &str = "JSON tuning overrides an unspecified structure in the base tuning; fields not provided in JSON will default to 0";

/// Applies JSON objects to records.
///
/// A binder lives for one load. It remembers which shared table types have
/// been overridden so two fields of the same table type are never both
/// replaced within that load.
pub struct Binder<'d> {
    diagnostics: &'d mut dyn JsonDiagnostics,
    level: MismatchLevel,
    claimed: AHashSet<TypeId>,
}

impl<'d> Binder<'d> {
    pub fn new(diagnostics: &'d mut dyn JsonDiagnostics, level: MismatchLevel) -> Self {
        Self {
            diagnostics,
            level,
            claimed: AHashSet::new(),
        }
    }

    /// Bind every field of `R` present in `object`.
    pub fn bind<R: Bind>(&mut self, object: &Object, record: &mut R) {
        for field in R::FIELDS {
            let node = match &field.kind {
                FieldKind::Flatten { bind, .. } => {
                    bind(self, object, record);
                    continue;
                }
                _ => match object.get(field.key) {
                    Some(node) => node,
                    None => continue,
                },
            };
            tracing::trace!(pointer = %node.pointer, "binding field");
            match &field.kind {
                FieldKind::Int(get) => {
                    if let Some(value) = self.extract_int(node) {
                        *get(record) = value;
                    }
                }
                FieldKind::UInt(get) => {
                    if let Some(value) = self.extract_uint(node) {
                        *get(record) = value;
                    }
                }
                FieldKind::Bool(get) => *get(record) = self.extract_bool(node),
                FieldKind::Str(get) => *get(record) = self.extract_string(node),
                FieldKind::Enum(bind) => bind(self, node, field.key, record),
                FieldKind::Object { bind, .. }
                | FieldKind::Shared { bind, .. }
                | FieldKind::Array { bind, .. } => bind(self, node, record),
                FieldKind::Flatten { .. } => {}
            }
        }
    }

    /// Bind into an embedded record. Non-object values are ignored.
    pub fn bind_object<T: Bind>(&mut self, node: &Node, record: &mut T) {
        if let Some(object) = node.as_object() {
            self.bind(object, record);
        }
    }

    /// Bind array elements into `slots` by index.
    ///
    /// Only as many elements as `slots` holds are considered; elements that
    /// are not objects are skipped, and slots past the end of the JSON array
    /// are left alone.
    pub fn bind_array<T: Bind, const N: usize>(&mut self, node: &Node, slots: &mut [T; N]) {
        let Some(items) = node.as_array() else {
            return;
        };
        for (item, slot) in items.iter().zip(slots.iter_mut()) {
            if let Some(object) = item.as_object() {
                self.bind(object, slot);
            }
        }
    }

    /// Bind into a shared table, replacing it with a private copy.
    ///
    /// The first override of a table type in this load claims the type; a
    /// later field of the same type is rejected with an error and left as is.
    pub fn bind_shared<T: Bind + Clone + Default>(
        &mut self,
        node: &Node,
        slot: &mut Option<Cow<'static, T>>,
    ) {
        let Some(object) = node.as_object() else {
            return;
        };
        if !self.claimed.insert(TypeId::of::<T>()) {
            self.diagnostics.error(
                node,
                format!(
                    "storage conflict - multiple shared tables of type '{}' cannot be overridden in one load",
                    short_type_name::<T>()
                ),
            );
            return;
        }
        tracing::trace!(
            pointer = %node.pointer,
            table = short_type_name::<T>(),
            "claimed shared table"
        );
        if slot.is_none() {
            self.diagnostics
                .global_warning(UNSPECIFIED_TABLE_WARNING.to_string());
        }
        let mut copy = slot.as_deref().cloned().unwrap_or_default();
        self.bind(object, &mut copy);
        *slot = Some(Cow::Owned(copy));
    }

    /// Resolve an enum name, falling back to the first mapping entry.
    pub fn resolve_enum<E: TuneEnum>(&mut self, node: &Node, key: &str) -> E {
        let (fallback_name, fallback) = E::fallback();
        let Some(name) = node.as_str() else {
            self.report(node, format!("expected string for enum field {key}"));
            return fallback;
        };
        match E::from_name(name) {
            Some(value) => value,
            None => {
                self.diagnostics.warning(
                    node,
                    format!("{key} not recognized, defaulting to '{fallback_name}'"),
                );
                fallback
            }
        }
    }

    // -------------------------------------------------------------------------
    // Scalar extraction
    // -------------------------------------------------------------------------

    /// Extract an `int` field.
    ///
    /// A kind mismatch yields zero. An integer outside the `i32` range is an
    /// error and yields `None` so the field keeps its previous value. The
    /// validator does not range-check array elements.
    pub fn extract_int(&mut self, node: &Node) -> Option<i32> {
        match node.as_integer() {
            Some(value) => {
                let narrowed = value.to_i32();
                if narrowed.is_none() {
                    self.diagnostics.error(
                        node,
                        format!(
                            "value {value} is out of range for 'int' type [{}, {}]",
                            i32::MIN,
                            i32::MAX
                        ),
                    );
                }
                narrowed
            }
            None => {
                self.mismatch(node, "expected an integer value...");
                Some(0)
            }
        }
    }

    /// Extract a `uint` field. Out-of-range values are handled as in
    /// [`Binder::extract_int`].
    pub fn extract_uint(&mut self, node: &Node) -> Option<u32> {
        match node.as_integer() {
            Some(value) => {
                let narrowed = value.to_u32();
                if narrowed.is_none() {
                    self.diagnostics.error(
                        node,
                        format!(
                            "value {value} is out of range for 'uint' type [0, {}]",
                            u32::MAX
                        ),
                    );
                }
                narrowed
            }
            None => {
                self.mismatch(node, "expected an unsigned integer value...");
                Some(0)
            }
        }
    }

    pub fn extract_bool(&mut self, node: &Node) -> bool {
        node.as_bool().unwrap_or_else(|| {
            self.mismatch(node, "expected a boolean value...");
            false
        })
    }

    pub fn extract_string(&mut self, node: &Node) -> Option<String> {
        match node.as_str() {
            Some(s) => Some(s.to_string()),
            None => {
                self.mismatch(node, "expected a string...");
                None
            }
        }
    }

    /// Report at the configured level without a follow-up note.
    fn report(&mut self, node: &Node, message: String) -> bool {
        match self.level {
            MismatchLevel::Warning => self.diagnostics.warning(node, message),
            MismatchLevel::Error => {
                self.diagnostics.error(node, message);
                true
            }
        }
    }

    fn mismatch(&mut self, node: &Node, expected: &str) {
        if self.report(node, expected.to_string()) {
            self.diagnostics.note(
                node,
                format!("...but got {} instead", node.kind().description()),
            );
        }
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use cputune_json::{ParseOptions, parse};

    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Limits {
        low: i32,
        high: u32,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Extended {
        base: Limits,
        strict: bool,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Record {
        label: Option<String>,
        local: Limits,
        slots: [Limits; 2],
        first: Option<Cow<'static, Limits>>,
        second: Option<Cow<'static, Limits>>,
        extended: Option<Cow<'static, Extended>>,
        policy: crate::enums::LdpStpPolicy,
    }

    bind_fields!(Limits {
        "low" => int low,
        "high" => uint high,
    });

    bind_fields!(Extended {
        _ => flatten base: Limits,
        "strict" => bool strict,
    });

    bind_fields!(Record {
        "label" => string label,
        "local" => object local: Limits,
        "slots" => array slots: Limits,
        "first" => shared first: Limits,
        "second" => shared second: Limits,
        "extended" => shared extended: Extended,
        "policy" => enum policy: crate::enums::LdpStpPolicy,
    });

    static SHARED: Limits = Limits { low: 7, high: 9 };

    #[derive(Default)]
    struct Log {
        entries: Vec<String>,
        suppress_warnings: bool,
    }

    impl JsonDiagnostics for Log {
        fn error(&mut self, node: &Node, message: String) {
            self.entries.push(format!("error {}: {message}", node.pointer));
        }

        fn warning(&mut self, node: &Node, message: String) -> bool {
            if self.suppress_warnings {
                return false;
            }
            self.entries.push(format!("warning {}: {message}", node.pointer));
            true
        }

        fn note(&mut self, node: &Node, message: String) {
            self.entries.push(format!("note {}: {message}", node.pointer));
        }

        fn global_error(&mut self, message: String) {
            self.entries.push(format!("error: {message}"));
        }

        fn global_warning(&mut self, message: String) -> bool {
            self.entries.push(format!("warning: {message}"));
            true
        }

        fn global_note(&mut self, message: String) {
            self.entries.push(format!("note: {message}"));
        }
    }

    fn bind_with(src: &str, record: &mut Record, level: MismatchLevel) -> Vec<String> {
        let root = parse(src, &ParseOptions::default()).unwrap();
        let mut log = Log::default();
        Binder::new(&mut log, level).bind(root.as_object().unwrap(), record);
        log.entries
    }

    fn bind_json(src: &str, record: &mut Record) -> Vec<String> {
        bind_with(src, record, MismatchLevel::Warning)
    }

    #[test]
    fn test_absent_keys_leave_record_untouched() {
        let mut record = Record {
            label: Some("keep".into()),
            first: Some(Cow::Borrowed(&SHARED)),
            ..Default::default()
        };
        let before = record.clone();
        assert!(bind_json(r#"{"unrelated": 1}"#, &mut record).is_empty());
        assert_eq!(record, before);
    }

    #[test]
    fn test_scalars_and_nested() {
        let mut record = Record::default();
        let log = bind_json(
            r#"{"label": "x", "local": {"low": -3, "high": 4}, "policy": "AARCH64_LDP_STP_POLICY_NEVER"}"#,
            &mut record,
        );
        assert!(log.is_empty(), "{log:?}");
        assert_eq!(record.label.as_deref(), Some("x"));
        assert_eq!(record.local, Limits { low: -3, high: 4 });
        assert_eq!(record.policy, crate::enums::LdpStpPolicy::Never);
    }

    #[test]
    fn test_kind_mismatch_warns_notes_and_zeroes() {
        let mut record = Record {
            local: Limits { low: 5, high: 5 },
            ..Default::default()
        };
        let log = bind_json(r#"{"local": {"low": "5", "high": null}}"#, &mut record);
        assert_eq!(
            log,
            vec![
                "warning /local/low: expected an integer value...",
                "note /local/low: ...but got a string instead",
                "warning /local/high: expected an unsigned integer value...",
                "note /local/high: ...but got 'null' instead",
            ]
        );
        assert_eq!(record.local, Limits::default());
    }

    #[test]
    fn test_mismatch_level_error() {
        let mut record = Record::default();
        let log = bind_with(r#"{"label": 16}"#, &mut record, MismatchLevel::Error);
        assert_eq!(
            log,
            vec![
                "error /label: expected a string...",
                "note /label: ...but got an integer instead",
            ]
        );
    }

    #[test]
    fn test_suppressed_warning_skips_note() {
        let root = parse(r#"{"label": 16}"#, &ParseOptions::default()).unwrap();
        let mut log = Log {
            suppress_warnings: true,
            ..Default::default()
        };
        let mut record = Record::default();
        Binder::new(&mut log, MismatchLevel::Warning).bind(root.as_object().unwrap(), &mut record);
        assert!(log.entries.is_empty());
        assert_eq!(record.label, None);
    }

    #[test]
    fn test_out_of_range_array_element_keeps_value() {
        let mut record = Record {
            slots: [Limits { low: 1, high: 2 }, Limits { low: 3, high: 4 }],
            ..Default::default()
        };
        let log = bind_json(
            r#"{"slots": [{"low": 3000000000}, {"low": -8, "high": -1}]}"#,
            &mut record,
        );
        assert_eq!(
            log,
            vec![
                "error /slots/0/low: value 3000000000 is out of range for 'int' type [-2147483648, 2147483647]",
                "error /slots/1/high: value -1 is out of range for 'uint' type [0, 4294967295]",
            ]
        );
        assert_eq!(
            record.slots,
            [Limits { low: 1, high: 2 }, Limits { low: -8, high: 4 }]
        );
    }

    #[test]
    fn test_enum_fallback() {
        let mut record = Record {
            policy: crate::enums::LdpStpPolicy::Always,
            ..Default::default()
        };
        let log = bind_json(r#"{"policy": "null"}"#, &mut record);
        assert_eq!(
            log,
            vec!["warning /policy: policy not recognized, defaulting to 'AARCH64_LDP_STP_POLICY_DEFAULT'"]
        );
        assert_eq!(record.policy, crate::enums::LdpStpPolicy::Default);

        record.policy = crate::enums::LdpStpPolicy::Always;
        let log = bind_json(r#"{"policy": 3}"#, &mut record);
        assert_eq!(log, vec!["warning /policy: expected string for enum field policy"]);
        assert_eq!(record.policy, crate::enums::LdpStpPolicy::Default);
    }

    #[test]
    fn test_array_binds_up_to_capacity() {
        let mut record = Record::default();
        record.slots[1].low = 11;
        bind_json(r#"{"slots": [{"low": 1}]}"#, &mut record);
        assert_eq!(record.slots[0].low, 1);
        assert_eq!(record.slots[1].low, 11);

        bind_json(
            r#"{"slots": [5, {"high": 2}, {"low": 99}]}"#,
            &mut record,
        );
        assert_eq!(record.slots[0].low, 1);
        assert_eq!(record.slots[1], Limits { low: 11, high: 2 });
    }

    #[test]
    fn test_shared_table_copy_on_write() {
        let mut record = Record {
            first: Some(Cow::Borrowed(&SHARED)),
            ..Default::default()
        };
        let log = bind_json(r#"{"first": {"low": 1}}"#, &mut record);
        assert!(log.is_empty());
        let first = record.first.as_ref().unwrap();
        assert!(matches!(first, Cow::Owned(_)));
        assert_eq!(**first, Limits { low: 1, high: 9 });
        assert_eq!(SHARED, Limits { low: 7, high: 9 });
    }

    #[test]
    fn test_shared_table_from_nothing_warns() {
        let mut record = Record::default();
        let log = bind_json(r#"{"extended": {"high": 3, "strict": true}}"#, &mut record);
        assert_eq!(log, vec![format!("warning: {UNSPECIFIED_TABLE_WARNING}")]);
        assert_eq!(
            record.extended.as_deref(),
            Some(&Extended {
                base: Limits { low: 0, high: 3 },
                strict: true,
            })
        );
    }

    #[test]
    fn test_second_claim_of_same_type_is_rejected() {
        let mut record = Record {
            first: Some(Cow::Borrowed(&SHARED)),
            second: Some(Cow::Borrowed(&SHARED)),
            ..Default::default()
        };
        let log = bind_json(
            r#"{"second": {"low": 2}, "first": {"low": 1}}"#,
            &mut record,
        );
        assert_eq!(
            log,
            vec![
                "error /second: storage conflict - multiple shared tables of type 'Limits' cannot be overridden in one load"
            ]
        );
        assert_eq!(record.first.as_deref().map(|l| l.low), Some(1));
        assert_eq!(record.second.as_deref(), Some(&SHARED));
    }

    #[test]
    fn test_claims_reset_between_binders() {
        let mut record = Record::default();
        bind_json(r#"{"first": {"low": 1}}"#, &mut record);
        let log = bind_json(r#"{"first": {"low": 2}}"#, &mut record);
        assert!(log.is_empty());
        assert_eq!(record.first.as_deref().map(|l| l.low), Some(2));
    }

    #[test]
    fn test_describe_flattens_base() {
        let infos = Extended::describe();
        let keys: Vec<_> = infos.iter().map(|info| info.key).collect();
        assert_eq!(keys, vec!["low", "high", "strict"]);
        let record = Record::describe();
        assert_eq!(record[2].shape, FieldShape::Array(Limits::describe()));
        assert_eq!(record[6].shape, FieldShape::Leaf(TypeTag::Enum));
    }

    #[test]
    #[should_panic(expected = "exceeds 'int' range")]
    fn test_out_of_range_integer_is_an_invariant_violation() {
        let mut record = Record::default();
        bind_json(r#"{"local": {"low": 3000000000}}"#, &mut record);
    }
}
