//! JSON Pointer (RFC 6901) paths identifying a value inside a document.
//!
//! Pointers are a diagnostic breadcrumb only: they name where a value lives
//! (`/tune_params/insn_extra_cost/alu/non_exec_costs_exec`) independently of
//! where it was written in the file.

use std::fmt::{self, Display};

/// One step of a pointer: an object member name or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PointerToken {
    Key(String),
    Index(usize),
}

impl Display for PointerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerToken::Key(key) => {
                for ch in key.chars() {
                    match ch {
                        '~' => f.write_str("~0")?,
                        '/' => f.write_str("~1")?,
                        other => write!(f, "{other}")?,
                    }
                }
                Ok(())
            }
            PointerToken::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A path from the document root. The root itself is the empty pointer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPointer(Vec<PointerToken>);

impl JsonPointer {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tokens(&self) -> &[PointerToken] {
        &self.0
    }

    /// The pointer of the member `key` of the value at `self`.
    #[must_use]
    pub fn join_key(&self, key: impl Into<String>) -> Self {
        let mut tokens = self.0.clone();
        tokens.push(PointerToken::Key(key.into()));
        Self(tokens)
    }

    /// The pointer of element `index` of the array at `self`.
    #[must_use]
    pub fn join_index(&self, index: usize) -> Self {
        let mut tokens = self.0.clone();
        tokens.push(PointerToken::Index(index));
        Self(tokens)
    }

    /// The last token, if any.
    pub fn last(&self) -> Option<&PointerToken> {
        self.0.last()
    }

    /// Parse a pointer in its string form (`/a/b~1c/0`).
    ///
    /// Numeric tokens are read as array indices.
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() {
            return Some(Self::root());
        }
        let rest = text.strip_prefix('/')?;
        let tokens = rest
            .split('/')
            .map(|raw| {
                let key = raw.replace("~1", "/").replace("~0", "~");
                match key.parse::<usize>() {
                    Ok(index) if !key.starts_with('+') => PointerToken::Index(index),
                    _ => PointerToken::Key(key),
                }
            })
            .collect();
        Some(Self(tokens))
    }
}

impl Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.0 {
            write!(f, "/{token}")?;
        }
        Ok(())
    }
}
