//! The parsed JSON value tree.
//!
//! Every node carries the span it was parsed from and its JSON pointer, so
//! any consumer holding a `&Node` can report a diagnostic against it without
//! further bookkeeping.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use num_bigint::BigInt;

use crate::pointer::JsonPointer;
use crate::span::InputSpan;

/// A JSON value with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub value: Value,
    pub span: InputSpan,
    pub pointer: JsonPointer,
}

/// The closed set of JSON value kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Object(Object),
    Array(Vec<Node>),
    String(String),
    Integer(BigInt),
    Float(f64),
    True,
    False,
    Null,
}

/// Kind tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Object,
    Array,
    String,
    Integer,
    Float,
    True,
    False,
    Null,
}

impl Kind {
    /// Phrase used in "...but got X instead" notes.
    pub fn description(self) -> &'static str {
        match self {
            Kind::Object => "an object",
            Kind::Array => "an array",
            Kind::String => "a string",
            Kind::Integer => "an integer",
            Kind::Float => "a floating-point value",
            Kind::True => "'true'",
            Kind::False => "'false'",
            Kind::Null => "'null'",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::True => "true",
            Kind::False => "false",
            Kind::Null => "null",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Object(_) => Kind::Object,
            Value::Array(_) => Kind::Array,
            Value::String(_) => Kind::String,
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::True => Kind::True,
            Value::False => Kind::False,
            Value::Null => Kind::Null,
        }
    }
}

impl Node {
    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    pub fn as_object(&self) -> Option<&Object> {
        match &self.value {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node]> {
        match &self.value {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&BigInt> {
        match &self.value {
            Value::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// `Some` only for the `true`/`false` literals.
    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self.value, Value::Null)
    }
}

/// An object's members in document order. Keys are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    members: IndexMap<String, Node>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a member. A repeated key replaces the earlier value but keeps
    /// its original position.
    pub fn insert(&mut self, key: String, value: Node) -> Option<Node> {
        self.members.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.members.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.members.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: Value, key: &str) -> Node {
        Node {
            value,
            span: InputSpan::EMPTY,
            pointer: JsonPointer::root().join_key(key),
        }
    }

    #[test]
    fn test_kind_descriptions() {
        assert_eq!(Kind::Integer.description(), "an integer");
        assert_eq!(Kind::True.description(), "'true'");
        assert_eq!(Kind::Float.to_string(), "float");
    }

    #[test]
    fn test_accessors_match_kind() {
        let node = leaf(Value::Integer(BigInt::from(4)), "issue_rate");
        assert_eq!(node.kind(), Kind::Integer);
        assert_eq!(node.as_integer(), Some(&BigInt::from(4)));
        assert_eq!(node.as_str(), None);
        assert_eq!(node.as_bool(), None);

        let node = leaf(Value::False, "flag");
        assert_eq!(node.as_bool(), Some(false));
        assert!(!node.is_null());
    }

    #[test]
    fn test_object_repeated_key_keeps_position() {
        let mut object = Object::new();
        object.insert("a".into(), leaf(Value::Null, "a"));
        object.insert("b".into(), leaf(Value::Null, "b"));
        let previous = object.insert("a".into(), leaf(Value::True, "a"));
        assert!(previous.is_some());
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(object.get("a").and_then(Node::as_bool), Some(true));
    }
}
