//! Document validation against a compiled schema.
//!
//! The walk visits keys present in the document only. Unknown keys are
//! reported as warnings and skipped; the first structural or range violation
//! stops the walk and is returned as a [`ValidationError`].

use cputune_json::{InputSpan, JsonDiagnostics, JsonPointer, Kind, Node, Object};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use thiserror::Error;

use crate::schema::{SchemaNode, SchemaObject, TypeTag};

// =============================================================================
// Errors
// =============================================================================

/// A hard validation failure at one document value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("key '{key}' {kind}")]
pub struct ValidationError {
    /// Dotted key path, e.g. `tune_params.insn_extra_cost.alu.arith`.
    pub key: String,
    pub kind: ValidationErrorKind,
    /// Span of the offending value.
    pub span: InputSpan,
    pub pointer: JsonPointer,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("expected to be an object")]
    ExpectedObject,
    #[error("expected to be an array")]
    ExpectedArray,
    #[error("expected to be an integer")]
    ExpectedInteger,
    #[error(
        "value {value} is out of range for 'int' type [{min}, {max}]",
        min = i32::MIN,
        max = i32::MAX
    )]
    IntOutOfRange { value: BigInt },
    #[error("expected to be an unsigned integer")]
    ExpectedUnsignedInteger,
    #[error("value {value} is out of range for 'uint' type [0, {max}]", max = u32::MAX)]
    UIntOutOfRange { value: BigInt },
    #[error("expected to be a string")]
    ExpectedString,
    #[error("expected to be a boolean (true/false)")]
    ExpectedBoolean,
    #[error("expected to be an enum (string)")]
    ExpectedEnum,
    #[error("has unsupported type")]
    UnsupportedType { tag: String },
    #[error("has unexpected format in schema")]
    UnexpectedSchemaFormat,
}

// =============================================================================
// Validation
// =============================================================================

/// Validate `document` against `schema`.
///
/// Unknown keys go to `diagnostics` as warnings. Returns the first hard error.
pub fn validate(
    document: &Object,
    schema: &SchemaObject,
    diagnostics: &mut dyn JsonDiagnostics,
) -> Result<(), ValidationError> {
    Validator { diagnostics }.validate_object(document, schema, "")
}

struct Validator<'d> {
    diagnostics: &'d mut dyn JsonDiagnostics,
}

impl Validator<'_> {
    fn validate_object(
        &mut self,
        document: &Object,
        schema: &SchemaObject,
        parent_key: &str,
    ) -> Result<(), ValidationError> {
        for (key, value) in document {
            let full_key = if parent_key.is_empty() {
                key.to_string()
            } else {
                format!("{parent_key}.{key}")
            };

            let Some(expected) = schema.get(key) else {
                tracing::trace!(key = %full_key, "unknown key");
                self.diagnostics.warning(
                    value,
                    format!("key '{full_key}' is not a tuning parameter, skipping"),
                );
                continue;
            };

            self.validate_value(value, expected, full_key)?;
        }
        Ok(())
    }

    fn validate_value(
        &mut self,
        value: &Node,
        expected: &SchemaNode,
        full_key: String,
    ) -> Result<(), ValidationError> {
        let fail = |kind: ValidationErrorKind| ValidationError {
            key: full_key.clone(),
            kind,
            span: value.span,
            pointer: value.pointer.clone(),
        };

        match expected {
            SchemaNode::Object(schema) => match value.as_object() {
                Some(object) => self.validate_object(object, schema, &full_key),
                None => Err(fail(ValidationErrorKind::ExpectedObject)),
            },
            SchemaNode::Array(_) => match value.kind() {
                Kind::Array => Ok(()),
                _ => Err(fail(ValidationErrorKind::ExpectedArray)),
            },
            SchemaNode::Leaf(tag) => check_leaf(value, *tag).map_err(fail),
            SchemaNode::Unsupported(tag) => Err(fail(ValidationErrorKind::UnsupportedType {
                tag: tag.clone(),
            })),
            SchemaNode::Malformed => Err(fail(ValidationErrorKind::UnexpectedSchemaFormat)),
        }
    }
}

fn check_leaf(value: &Node, tag: TypeTag) -> Result<(), ValidationErrorKind> {
    match tag {
        TypeTag::Int => {
            let int = value
                .as_integer()
                .ok_or(ValidationErrorKind::ExpectedInteger)?;
            if int.to_i32().is_none() {
                return Err(ValidationErrorKind::IntOutOfRange { value: int.clone() });
            }
        }
        TypeTag::UInt => {
            let int = value
                .as_integer()
                .ok_or(ValidationErrorKind::ExpectedUnsignedInteger)?;
            if int.to_u32().is_none() {
                return Err(ValidationErrorKind::UIntOutOfRange { value: int.clone() });
            }
        }
        TypeTag::String => {
            value.as_str().ok_or(ValidationErrorKind::ExpectedString)?;
        }
        TypeTag::Boolean => {
            value.as_bool().ok_or(ValidationErrorKind::ExpectedBoolean)?;
        }
        TypeTag::Enum => {
            value.as_str().ok_or(ValidationErrorKind::ExpectedEnum)?;
        }
    }
    Ok(())
}
