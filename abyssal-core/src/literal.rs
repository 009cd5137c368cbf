//! Decoding of bracketed literal text found in collection columns.
//!
//! The upstream ETL serialises per-cell collections as bracketed list
//! literals, for example `['high', 'low']` or `[10.5, 20.0]`. This module
//! turns that text into [`Literal`] values without evaluating anything: the
//! grammar is restricted to numbers, quoted strings, `None`, `True`, `False`
//! and nested lists or tuples.
//!
//! # Examples
//! ```
//! use abyssal_core::{Literal, parse_collection};
//!
//! let values = parse_collection("['high', 3.5, None]").unwrap();
//! assert_eq!(
//!     values,
//!     vec![Literal::Text("high".into()), Literal::Number(3.5), Literal::None]
//! );
//! assert!(parse_collection("").unwrap().is_empty());
//! ```

use std::iter::Peekable;
use std::str::CharIndices;

use thiserror::Error;

/// Characters that give text literal structure. A bare token containing any
/// of them is not a plain scalar.
const LITERAL_PUNCTUATION: [char; 9] = ['[', ']', '(', ')', '{', '}', ',', '\'', '"'];

/// Deepest list or tuple nesting the decoder accepts.
pub const MAX_NESTING: usize = 32;

/// A single decoded literal value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Literal {
    /// The `None` keyword.
    None,
    /// `True` or `False`.
    Bool(bool),
    /// An integer or floating-point number.
    Number(f64),
    /// A quoted string or a bare text token.
    Text(String),
    /// A nested list or tuple.
    List(Vec<Literal>),
}

impl Literal {
    /// Interpret the value as a finite number.
    ///
    /// Numbers, numeric text and booleans convert; `None`, lists,
    /// non-numeric text and non-finite values yield `None`.
    ///
    /// # Examples
    /// ```
    /// use abyssal_core::Literal;
    ///
    /// assert_eq!(Literal::Text("2.5".into()).as_f64(), Some(2.5));
    /// assert_eq!(Literal::Bool(true).as_f64(), Some(1.0));
    /// assert_eq!(Literal::Text("nan".into()).as_f64(), None);
    /// assert_eq!(Literal::None.as_f64(), None);
    /// ```
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(number) => *number,
            Self::Bool(flag) => f64::from(u8::from(*flag)),
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
            Self::None | Self::List(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Return the value as a display label.
    ///
    /// Text is returned unchanged, numbers and booleans are formatted, and
    /// `None` or nested lists yield `None`.
    #[must_use]
    pub fn to_label(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Number(number) => Some(number.to_string()),
            Self::Bool(true) => Some("True".to_owned()),
            Self::Bool(false) => Some("False".to_owned()),
            Self::None | Self::List(_) => None,
        }
    }
}

/// Reasons a literal could not be decoded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LiteralError {
    /// Input ended while a value, string or list was still open.
    #[error("literal ended unexpectedly")]
    UnexpectedEnd,
    /// A character that cannot start or continue a value was found.
    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedChar {
        /// The offending character.
        found: char,
        /// Byte offset into the trimmed input.
        offset: usize,
    },
    /// A bare identifier other than `None`, `True` or `False`.
    #[error("unsupported name {0:?} in literal")]
    UnknownName(String),
    /// Numeric text that does not form a valid number.
    #[error("invalid number {0:?} in literal")]
    InvalidNumber(String),
    /// A complete value was followed by more text.
    #[error("unexpected trailing input at offset {offset}")]
    TrailingInput {
        /// Byte offset of the first trailing character.
        offset: usize,
    },
    /// Lists or tuples are nested deeper than [`MAX_NESTING`].
    #[error("literal nested too deeply at offset {offset}")]
    TooDeep {
        /// Byte offset of the opening bracket past the limit.
        offset: usize,
    },
}

/// Decode a complete literal from `text`.
///
/// # Errors
/// Returns [`LiteralError`] when the text is not a single well-formed
/// literal.
pub fn decode_literal(text: &str) -> Result<Literal, LiteralError> {
    let mut decoder = Decoder::new(text);
    let value = decoder.value()?;
    decoder.skip_whitespace();
    match decoder.chars.peek() {
        Some(&(offset, _)) => Err(LiteralError::TrailingInput { offset }),
        None => Ok(value),
    }
}

/// Decode the raw text of a collection column into its elements.
///
/// - Empty or whitespace-only text is an empty collection.
/// - Text wrapped in `[` and `]` is decoded as a list literal.
/// - Other text that forms a plain scalar becomes a one-element collection.
///
/// # Errors
/// Returns [`LiteralError`] when bracketed text is malformed or unbracketed
/// text is neither a scalar literal nor a bare token. Callers that follow the
/// tolerant parsing policy treat the error as an empty collection.
pub fn parse_collection(raw: &str) -> Result<Vec<Literal>, LiteralError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        return match decode_literal(trimmed)? {
            Literal::List(items) => Ok(items),
            other => Ok(vec![other]),
        };
    }
    plain_scalar(trimmed).map(|value| vec![value])
}

fn plain_scalar(text: &str) -> Result<Literal, LiteralError> {
    match decode_literal(text) {
        Ok(Literal::List(_)) => Err(LiteralError::UnexpectedChar {
            found: '(',
            offset: 0,
        }),
        Ok(value) => Ok(value),
        Err(err) => {
            if text.contains(LITERAL_PUNCTUATION) {
                Err(err)
            } else {
                Ok(Literal::Text(text.to_owned()))
            }
        }
    }
}

struct Decoder<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
    depth: usize,
}

impl<'a> Decoder<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
            depth: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, ch)| ch.is_whitespace()).is_some() {}
    }

    fn value(&mut self) -> Result<Literal, LiteralError> {
        self.skip_whitespace();
        let &(offset, ch) = self.chars.peek().ok_or(LiteralError::UnexpectedEnd)?;
        match ch {
            '[' => self.sequence(']'),
            '(' => self.sequence(')'),
            '\'' | '"' => self.string(ch).map(Literal::Text),
            '0'..='9' | '-' | '+' | '.' => self.number(offset),
            c if c.is_alphabetic() || c == '_' => self.name(offset),
            found => Err(LiteralError::UnexpectedChar { found, offset }),
        }
    }

    fn sequence(&mut self, close: char) -> Result<Literal, LiteralError> {
        let (offset, _) = self.chars.next().ok_or(LiteralError::UnexpectedEnd)?;
        if self.depth >= MAX_NESTING {
            return Err(LiteralError::TooDeep { offset });
        }
        self.depth = self.depth.saturating_add(1);
        let items = self.items(close);
        self.depth = self.depth.saturating_sub(1);
        items.map(Literal::List)
    }

    fn items(&mut self, close: char) -> Result<Vec<Literal>, LiteralError> {
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.chars.next_if(|&(_, ch)| ch == close).is_some() {
                return Ok(items);
            }
            items.push(self.value()?);
            self.skip_whitespace();
            match self.chars.next() {
                Some((_, ',')) => {}
                Some((_, ch)) if ch == close => return Ok(items),
                Some((offset, found)) => {
                    return Err(LiteralError::UnexpectedChar { found, offset });
                }
                None => return Err(LiteralError::UnexpectedEnd),
            }
        }
    }

    fn string(&mut self, quote: char) -> Result<String, LiteralError> {
        self.chars.next();
        let mut out = String::new();
        loop {
            let (_, ch) = self.chars.next().ok_or(LiteralError::UnexpectedEnd)?;
            match ch {
                '\\' => {
                    let (_, escaped) = self.chars.next().ok_or(LiteralError::UnexpectedEnd)?;
                    out.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        other => other,
                    });
                }
                c if c == quote => return Ok(out),
                c => out.push(c),
            }
        }
    }

    fn number(&mut self, start: usize) -> Result<Literal, LiteralError> {
        let end = self.consume_while(start, |ch| {
            ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E')
        });
        let token = self.text.get(start..end).unwrap_or_default();
        token
            .parse::<f64>()
            .map(Literal::Number)
            .map_err(|_| LiteralError::InvalidNumber(token.to_owned()))
    }

    fn name(&mut self, start: usize) -> Result<Literal, LiteralError> {
        let end = self.consume_while(start, |ch| ch.is_alphanumeric() || ch == '_');
        match self.text.get(start..end).unwrap_or_default() {
            "None" => Ok(Literal::None),
            "True" => Ok(Literal::Bool(true)),
            "False" => Ok(Literal::Bool(false)),
            other => Err(LiteralError::UnknownName(other.to_owned())),
        }
    }

    /// Advance past characters matching `accept` and return the end offset.
    fn consume_while(&mut self, start: usize, accept: impl Fn(char) -> bool) -> usize {
        let mut end = start;
        while let Some((offset, ch)) = self.chars.next_if(|&(_, ch)| accept(ch)) {
            end = offset + ch.len_utf8();
        }
        end
    }
}
