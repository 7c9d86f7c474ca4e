//! Recursive-descent JSON parser producing a [`Node`] tree.
//!
//! The lexer works on byte offsets into the original text so every token,
//! and therefore every node, keeps an exact [`InputSpan`]. Errors point at the
//! offending token rather than at the position where the parser gave up.

use std::str::FromStr;

use num_bigint::BigInt;
use thiserror::Error;

use crate::pointer::JsonPointer;
use crate::span::InputSpan;
use crate::value::{Node, Object, Value};

/// Parser settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept `// line` and `/* block */` comments between tokens.
    pub allow_comments: bool,
    /// Maximum nesting depth of arrays and objects.
    pub max_depth: usize,
    /// Maximum input length in bytes. Spans are 32-bit, so anything above
    /// [`MAX_INPUT_LEN`] is rejected regardless.
    pub max_len: usize,
}

/// Longest input a span can address.
pub const MAX_INPUT_LEN: usize = u32::MAX as usize;

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_comments: false,
            max_depth: 256,
            max_len: MAX_INPUT_LEN,
        }
    }
}

impl ParseOptions {
    /// Settings used for tuning files: comments are tolerated.
    pub fn tuning_file() -> Self {
        Self {
            allow_comments: true,
            ..Default::default()
        }
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A token in the wrong place.
    Syntax,
    /// Malformed token (bad escape, bad number, stray character).
    Lexical,
    /// The input is not UTF-8.
    Encoding,
    /// Nesting deeper than [`ParseOptions::max_depth`].
    Depth,
    /// Input longer than [`ParseOptions::max_len`].
    TooLarge,
}

/// A parse error with the span of the offending input.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct JsonParseError {
    pub span: InputSpan,
    pub message: String,
    pub kind: ParseErrorKind,
}

impl JsonParseError {
    fn new(kind: ParseErrorKind, span: InputSpan, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            kind,
        }
    }

    fn syntax(span: InputSpan, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Syntax, span, message)
    }

    fn lexical(span: InputSpan, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Lexical, span, message)
    }
}

/// Parse UTF-8 text into a value tree.
pub fn parse(source: &str, options: &ParseOptions) -> Result<Node, JsonParseError> {
    check_len(source.len(), options)?;
    let mut parser = Parser {
        lexer: Lexer::new(source, options.allow_comments),
        max_depth: options.max_depth,
    };
    let root = parser.parse_value(JsonPointer::root(), 0)?;
    let trailing = parser.lexer.next_token()?;
    if trailing.kind != TokenKind::Eof {
        return Err(JsonParseError::syntax(
            trailing.span,
            format!("expected end of input; got {}", trailing.kind.describe()),
        ));
    }
    Ok(root)
}

/// Parse raw bytes, rejecting input that is not UTF-8.
pub fn parse_bytes(bytes: &[u8], options: &ParseOptions) -> Result<Node, JsonParseError> {
    check_len(bytes.len(), options)?;
    match std::str::from_utf8(bytes) {
        Ok(source) => parse(source, options),
        Err(e) => {
            let at = e.valid_up_to();
            Err(JsonParseError::new(
                ParseErrorKind::Encoding,
                InputSpan::new(at, (at + 1).min(bytes.len())),
                "input is not valid UTF-8",
            ))
        }
    }
}

fn check_len(len: usize, options: &ParseOptions) -> Result<(), JsonParseError> {
    let limit = options.max_len.min(MAX_INPUT_LEN);
    if len > limit {
        return Err(JsonParseError::new(
            ParseErrorKind::TooLarge,
            InputSpan::EMPTY,
            format!("input of {len} bytes exceeds the {limit} byte limit"),
        ));
    }
    Ok(())
}

// ============================================================================
// Lexer
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Colon,
    Comma,
    String(String),
    Integer(BigInt),
    Float(f64),
    True,
    False,
    Null,
    Eof,
}

impl TokenKind {
    fn describe(&self) -> &'static str {
        match self {
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::String(_) => "string",
            TokenKind::Integer(_) | TokenKind::Float(_) => "number",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Null => "'null'",
            TokenKind::Eof => "end of input",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Token {
    kind: TokenKind,
    span: InputSpan,
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    allow_comments: bool,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str, allow_comments: bool) -> Self {
        let pos = if src.starts_with('\u{feff}') { 3 } else { 0 };
        Self {
            src,
            pos,
            allow_comments,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_byte_at(&self, offset: usize) -> Option<u8> {
        self.src.as_bytes().get(self.pos + offset).copied()
    }

    fn span_from(&self, start: usize) -> InputSpan {
        InputSpan::new(start, self.pos)
    }

    fn skip_trivia(&mut self) -> Result<(), JsonParseError> {
        loop {
            match self.peek_byte_at(0) {
                Some(b' ' | b'\t' | b'\n' | b'\r') => self.pos += 1,
                Some(b'/') if self.allow_comments => match self.peek_byte_at(1) {
                    Some(b'/') => {
                        let rest = &self.src[self.pos..];
                        self.pos += rest.find('\n').unwrap_or(rest.len());
                    }
                    Some(b'*') => {
                        let start = self.pos;
                        match self.src[self.pos + 2..].find("*/") {
                            Some(end) => self.pos += 2 + end + 2,
                            None => {
                                self.pos = self.src.len();
                                return Err(JsonParseError::lexical(
                                    self.span_from(start),
                                    "unterminated comment",
                                ));
                            }
                        }
                    }
                    _ => return Ok(()),
                },
                _ => return Ok(()),
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, JsonParseError> {
        self.skip_trivia()?;
        let start = self.pos;
        let Some(ch) = self.peek_char() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                span: self.span_from(start),
            });
        };
        let punct = match ch {
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            ':' => Some(TokenKind::Colon),
            ',' => Some(TokenKind::Comma),
            _ => None,
        };
        if let Some(kind) = punct {
            self.pos += 1;
            return Ok(Token {
                kind,
                span: self.span_from(start),
            });
        }
        match ch {
            '"' => self.lex_string(),
            '-' | '0'..='9' => self.lex_number(),
            c if c.is_ascii_alphabetic() => self.lex_literal(),
            c => {
                self.pos += c.len_utf8();
                Err(JsonParseError::lexical(
                    self.span_from(start),
                    format!("unexpected character '{c}'"),
                ))
            }
        }
    }

    fn lex_literal(&mut self) -> Result<Token, JsonParseError> {
        let start = self.pos;
        let len = self.src[start..]
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        self.pos += len;
        let kind = match &self.src[start..self.pos] {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            word => {
                return Err(JsonParseError::lexical(
                    self.span_from(start),
                    format!("invalid literal '{word}'"),
                ));
            }
        };
        Ok(Token {
            kind,
            span: self.span_from(start),
        })
    }

    fn eat_digits(&mut self) -> usize {
        let count = self.src[self.pos..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        self.pos += count;
        count
    }

    fn lex_number(&mut self) -> Result<Token, JsonParseError> {
        let start = self.pos;
        if self.peek_byte_at(0) == Some(b'-') {
            self.pos += 1;
        }
        match self.peek_byte_at(0) {
            Some(b'0') => {
                self.pos += 1;
                if self.peek_byte_at(0).is_some_and(|b| b.is_ascii_digit()) {
                    self.eat_digits();
                    return Err(JsonParseError::lexical(
                        self.span_from(start),
                        "leading zeros are not allowed in numbers",
                    ));
                }
            }
            Some(b'1'..=b'9') => {
                self.eat_digits();
            }
            _ => {
                return Err(JsonParseError::lexical(
                    self.span_from(start),
                    "invalid number",
                ));
            }
        }

        let mut is_float = false;
        if self.peek_byte_at(0) == Some(b'.') {
            self.pos += 1;
            is_float = true;
            if self.eat_digits() == 0 {
                return Err(JsonParseError::lexical(
                    self.span_from(start),
                    "expected digits after decimal point",
                ));
            }
        }
        if matches!(self.peek_byte_at(0), Some(b'e' | b'E')) {
            self.pos += 1;
            is_float = true;
            if matches!(self.peek_byte_at(0), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.eat_digits() == 0 {
                return Err(JsonParseError::lexical(
                    self.span_from(start),
                    "expected digits in exponent",
                ));
            }
        }

        let text = &self.src[start..self.pos];
        let span = self.span_from(start);
        let kind = if is_float {
            match text.parse::<f64>() {
                Ok(f) if f.is_finite() => TokenKind::Float(f),
                _ => return Err(JsonParseError::lexical(span, "number out of range")),
            }
        } else {
            match BigInt::from_str(text) {
                Ok(i) => TokenKind::Integer(i),
                Err(_) => return Err(JsonParseError::lexical(span, "invalid number")),
            }
        };
        Ok(Token { kind, span })
    }

    fn lex_hex4(&mut self, escape_start: usize) -> Result<u32, JsonParseError> {
        let digits = self
            .src
            .get(self.pos..self.pos + 4)
            .filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()));
        match digits.and_then(|d| u32::from_str_radix(d, 16).ok()) {
            Some(value) => {
                self.pos += 4;
                Ok(value)
            }
            None => {
                let end = (self.pos + 4).min(self.src.len());
                Err(JsonParseError::lexical(
                    InputSpan::new(escape_start, end),
                    "invalid \\u escape",
                ))
            }
        }
    }

    fn lex_unicode_escape(&mut self, escape_start: usize) -> Result<char, JsonParseError> {
        let unpaired = |lexer: &Self| {
            JsonParseError::lexical(
                lexer.span_from(escape_start),
                "invalid \\u escape: unpaired surrogate",
            )
        };
        let first = self.lex_hex4(escape_start)?;
        let code = match first {
            0xD800..=0xDBFF => {
                if !self.src[self.pos..].starts_with("\\u") {
                    return Err(unpaired(self));
                }
                self.pos += 2;
                let second = self.lex_hex4(escape_start)?;
                if !(0xDC00..=0xDFFF).contains(&second) {
                    return Err(unpaired(self));
                }
                0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00)
            }
            0xDC00..=0xDFFF => return Err(unpaired(self)),
            other => other,
        };
        char::from_u32(code).ok_or_else(|| unpaired(self))
    }

    fn lex_string(&mut self) -> Result<Token, JsonParseError> {
        let start = self.pos;
        self.pos += 1;
        let mut out = String::new();
        loop {
            let Some(ch) = self.peek_char() else {
                return Err(JsonParseError::lexical(
                    self.span_from(start),
                    "unterminated string",
                ));
            };
            match ch {
                '"' => {
                    self.pos += 1;
                    break;
                }
                '\\' => {
                    let escape_start = self.pos;
                    self.pos += 1;
                    let Some(escaped) = self.peek_char() else {
                        return Err(JsonParseError::lexical(
                            self.span_from(start),
                            "unterminated string",
                        ));
                    };
                    self.pos += escaped.len_utf8();
                    match escaped {
                        '"' => out.push('"'),
                        '\\' => out.push('\\'),
                        '/' => out.push('/'),
                        'b' => out.push('\u{8}'),
                        'f' => out.push('\u{c}'),
                        'n' => out.push('\n'),
                        'r' => out.push('\r'),
                        't' => out.push('\t'),
                        'u' => out.push(self.lex_unicode_escape(escape_start)?),
                        other => {
                            return Err(JsonParseError::lexical(
                                self.span_from(escape_start),
                                format!("invalid escape sequence '\\{other}'"),
                            ));
                        }
                    }
                }
                c if (c as u32) < 0x20 => {
                    return Err(JsonParseError::lexical(
                        InputSpan::new(self.pos, self.pos + 1),
                        "control character in string",
                    ));
                }
                c => {
                    out.push(c);
                    self.pos += c.len_utf8();
                }
            }
        }
        Ok(Token {
            kind: TokenKind::String(out),
            span: self.span_from(start),
        })
    }
}

// ============================================================================
// Parser
// ============================================================================

struct Parser<'a> {
    lexer: Lexer<'a>,
    max_depth: usize,
}

impl Parser<'_> {
    fn parse_value(&mut self, pointer: JsonPointer, depth: usize) -> Result<Node, JsonParseError> {
        let token = self.lexer.next_token()?;
        self.parse_value_from(token, pointer, depth)
    }

    fn check_depth(&self, open: InputSpan, depth: usize) -> Result<(), JsonParseError> {
        if depth > self.max_depth {
            return Err(JsonParseError::new(
                ParseErrorKind::Depth,
                open,
                format!("too deeply nested (maximum depth is {})", self.max_depth),
            ));
        }
        Ok(())
    }

    fn parse_object(
        &mut self,
        open: InputSpan,
        pointer: JsonPointer,
        depth: usize,
    ) -> Result<Node, JsonParseError> {
        self.check_depth(open, depth)?;
        let mut object = Object::new();
        let mut token = self.lexer.next_token()?;
        if token.kind == TokenKind::RBrace {
            return Ok(Node {
                value: Value::Object(object),
                span: open.merge(token.span),
                pointer,
            });
        }
        loop {
            let TokenKind::String(key) = token.kind else {
                return Err(JsonParseError::syntax(
                    token.span,
                    format!("expected string for object key; got {}", token.kind.describe()),
                ));
            };
            let colon = self.lexer.next_token()?;
            if colon.kind != TokenKind::Colon {
                return Err(JsonParseError::syntax(
                    colon.span,
                    format!("expected ':'; got {}", colon.kind.describe()),
                ));
            }
            let child = self.parse_value(pointer.join_key(key.as_str()), depth)?;
            object.insert(key, child);

            let separator = self.lexer.next_token()?;
            match separator.kind {
                TokenKind::Comma => token = self.lexer.next_token()?,
                TokenKind::RBrace => {
                    return Ok(Node {
                        value: Value::Object(object),
                        span: open.merge(separator.span),
                        pointer,
                    });
                }
                other => {
                    return Err(JsonParseError::syntax(
                        separator.span,
                        format!("expected ',' or '}}'; got {}", other.describe()),
                    ));
                }
            }
        }
    }

    fn parse_array(
        &mut self,
        open: InputSpan,
        pointer: JsonPointer,
        depth: usize,
    ) -> Result<Node, JsonParseError> {
        self.check_depth(open, depth)?;
        let mut items = Vec::new();
        loop {
            let token = self.lexer.next_token()?;
            if token.kind == TokenKind::RBracket && items.is_empty() {
                return Ok(Node {
                    value: Value::Array(items),
                    span: open.merge(token.span),
                    pointer,
                });
            }
            let item = self.parse_value_from(token, pointer.join_index(items.len()), depth)?;
            items.push(item);

            let separator = self.lexer.next_token()?;
            match separator.kind {
                TokenKind::Comma => {}
                TokenKind::RBracket => {
                    return Ok(Node {
                        value: Value::Array(items),
                        span: open.merge(separator.span),
                        pointer,
                    });
                }
                other => {
                    return Err(JsonParseError::syntax(
                        separator.span,
                        format!("expected ',' or ']'; got {}", other.describe()),
                    ));
                }
            }
        }
    }

    fn parse_value_from(
        &mut self,
        token: Token,
        pointer: JsonPointer,
        depth: usize,
    ) -> Result<Node, JsonParseError> {
        let span = token.span;
        let value = match token.kind {
            TokenKind::LBrace => return self.parse_object(span, pointer, depth + 1),
            TokenKind::LBracket => return self.parse_array(span, pointer, depth + 1),
            TokenKind::String(s) => Value::String(s),
            TokenKind::Integer(i) => Value::Integer(i),
            TokenKind::Float(f) => Value::Float(f),
            TokenKind::True => Value::True,
            TokenKind::False => Value::False,
            TokenKind::Null => Value::Null,
            other => {
                return Err(JsonParseError::syntax(
                    span,
                    format!("expected a JSON value; got {}", other.describe()),
                ));
            }
        };
        Ok(Node {
            value,
            span,
            pointer,
        })
    }
}
