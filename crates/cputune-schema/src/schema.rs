//! Compiled form of the schema document.
//!
//! The schema is itself JSON: objects describe nested records, a one-element
//! array describes an array-typed field, and every leaf is a type tag string.
//! Compilation never fails on odd shapes; those become [`SchemaNode::Unsupported`]
//! or [`SchemaNode::Malformed`] and are reported when a document reaches them.

use std::fmt::{self, Display};
use std::sync::LazyLock;

use cputune_json::{JsonParseError, Node, ParseOptions, Value};
use indexmap::IndexMap;
use thiserror::Error;

/// The schema shipped with the loader.
pub const BUILTIN_SCHEMA: &str = include_str!("schema.json");

static BUILTIN: LazyLock<Schema> = LazyLock::new(|| {
    Schema::parse(BUILTIN_SCHEMA).expect("built-in tuning schema must be well-formed")
});

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema is not valid JSON: {0}")]
    Syntax(#[from] JsonParseError),
    #[error("schema root must be an object")]
    RootNotObject,
}

/// Leaf type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Int,
    UInt,
    String,
    Boolean,
    Enum,
}

impl TypeTag {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "int" => Some(TypeTag::Int),
            "uint" => Some(TypeTag::UInt),
            "string" => Some(TypeTag::String),
            "boolean" => Some(TypeTag::Boolean),
            "enum" => Some(TypeTag::Enum),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Int => "int",
            TypeTag::UInt => "uint",
            TypeTag::String => "string",
            TypeTag::Boolean => "boolean",
            TypeTag::Enum => "enum",
        }
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Object(SchemaObject),
    /// Array-typed field. The element schema is kept for tooling; validation
    /// only checks the array kind.
    Array(Option<Box<SchemaNode>>),
    Leaf(TypeTag),
    /// A tag string that is not one of the known tags.
    Unsupported(String),
    /// Any other JSON shape (number, boolean, null).
    Malformed,
}

impl SchemaNode {
    fn compile(node: &Node) -> Self {
        match &node.value {
            Value::Object(object) => SchemaNode::Object(SchemaObject::compile(object)),
            Value::Array(items) => {
                SchemaNode::Array(items.first().map(|item| Box::new(SchemaNode::compile(item))))
            }
            Value::String(tag) => match TypeTag::from_tag(tag) {
                Some(tag) => SchemaNode::Leaf(tag),
                None => SchemaNode::Unsupported(tag.clone()),
            },
            _ => SchemaNode::Malformed,
        }
    }

    pub fn as_object(&self) -> Option<&SchemaObject> {
        match self {
            SchemaNode::Object(object) => Some(object),
            _ => None,
        }
    }
}

/// Ordered key → schema mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaObject {
    fields: IndexMap<String, SchemaNode>,
}

impl SchemaObject {
    fn compile(object: &cputune_json::Object) -> Self {
        Self {
            fields: object
                .iter()
                .map(|(key, node)| (key.to_string(), SchemaNode::compile(node)))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&SchemaNode> {
        self.fields.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A compiled schema document.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    root: SchemaObject,
}

impl Schema {
    /// The built-in schema, compiled once.
    pub fn builtin() -> &'static Schema {
        &BUILTIN
    }

    pub fn parse(text: &str) -> Result<Schema, SchemaError> {
        let node = cputune_json::parse(text, &ParseOptions::default())?;
        match &node.value {
            Value::Object(object) => Ok(Schema {
                root: SchemaObject::compile(object),
            }),
            _ => Err(SchemaError::RootNotObject),
        }
    }

    pub fn root(&self) -> &SchemaObject {
        &self.root
    }

    /// The `tune_params` subtree, if the schema declares one.
    pub fn tune_params(&self) -> Option<&SchemaObject> {
        self.root.get("tune_params").and_then(SchemaNode::as_object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_compiles() {
        let schema = Schema::builtin();
        let tune = schema.tune_params().expect("tune_params");
        assert_eq!(tune.get("sve_width"), Some(&SchemaNode::Leaf(TypeTag::UInt)));
        assert_eq!(
            tune.get("autoprefetcher_model"),
            Some(&SchemaNode::Leaf(TypeTag::Enum))
        );
        let metadata = schema.root().get("metadata").and_then(SchemaNode::as_object);
        assert_eq!(
            metadata.and_then(|m| m.get("gcc_version")),
            Some(&SchemaNode::Leaf(TypeTag::Int))
        );
    }

    #[test]
    fn test_array_fields_keep_element_schema() {
        let insn = Schema::builtin()
            .tune_params()
            .and_then(|t| t.get("insn_extra_cost"))
            .and_then(SchemaNode::as_object)
            .unwrap();
        let Some(SchemaNode::Array(Some(element))) = insn.get("mult") else {
            panic!("mult should be an array field");
        };
        assert!(element.as_object().unwrap().get("idiv").is_some());
    }

    #[test]
    fn test_odd_shapes_compile() {
        let schema = Schema::parse(r#"{"a": "float", "b": 3, "c": []}"#).unwrap();
        let root = schema.root();
        assert_eq!(root.get("a"), Some(&SchemaNode::Unsupported("float".into())));
        assert_eq!(root.get("b"), Some(&SchemaNode::Malformed));
        assert_eq!(root.get("c"), Some(&SchemaNode::Array(None)));
    }

    #[test]
    fn test_root_must_be_object() {
        assert!(matches!(
            Schema::parse("[]"),
            Err(SchemaError::RootNotObject)
        ));
        assert!(matches!(Schema::parse("{"), Err(SchemaError::Syntax(_))));
    }
}
