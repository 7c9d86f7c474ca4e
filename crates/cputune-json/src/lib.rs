//! Span-tracking JSON for tuning files.
//!
//! [`parse`] turns text into a [`Node`] tree where every value remembers its
//! byte span and [`JsonPointer`]. Consumers report problems through the
//! [`JsonDiagnostics`] trait, anchored at the node they are looking at.

pub mod diagnostics;
pub mod parser;
pub mod pointer;
pub mod span;
pub mod value;

pub use diagnostics::{IgnoreDiagnostics, JsonDiagnostics};
pub use parser::{JsonParseError, MAX_INPUT_LEN, ParseErrorKind, ParseOptions, parse, parse_bytes};
pub use pointer::{JsonPointer, PointerToken};
pub use span::{InputSpan, LineColumn, LineIndex};
pub use value::{Kind, Node, Object, Value};
