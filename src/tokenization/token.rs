//! Token kinds and the positioned tokens the lexer produces.

use serde::{Deserialize, Serialize};
use strum::Display;

use super::position::SubstringPosition;

/// The closed set of token kinds `az` source can be classified into.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    #[strum(serialize = "->")]
    Arrow,
    #[strum(serialize = "=")]
    Assignment,
    #[strum(serialize = "*")]
    Asterisk,
    #[strum(serialize = "}")]
    CloseBrace,
    #[strum(serialize = ")")]
    CloseParenthesis,
    #[strum(serialize = ":")]
    Colon,
    #[strum(serialize = ",")]
    Comma,
    #[strum(serialize = ".")]
    Dot,
    #[strum(serialize = "==")]
    EqualTo,
    #[strum(serialize = ">")]
    GreaterThan,
    #[strum(serialize = ">=")]
    GreaterThanOrEqualTo,
    #[strum(serialize = "<")]
    LowerThan,
    #[strum(serialize = "<=")]
    LowerThanOrEqualTo,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "!=")]
    NotEqualTo,
    #[strum(serialize = "{")]
    OpenBrace,
    #[strum(serialize = "(")]
    OpenParenthesis,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = ";")]
    Semicolon,
    #[strum(serialize = "/")]
    Slash,

    Identifier,

    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,

    CommentBlock,
    CommentLine,
    Newline,
    Whitespace,
}

impl TokenKind {
    /// The fixed spelling of structural punctuation tokens.
    ///
    /// Identifier, numeric literal and filler tokens carry no fixed
    /// spelling: their text is whatever the lexer scanned, so the
    /// re-tokenizer always prefers [`TokenContent::string`] over this.
    #[must_use]
    pub fn fixed_spelling(self) -> Option<&'static str> {
        use TokenKind::{
            Arrow, Assignment, Asterisk, CloseBrace, CloseParenthesis, Colon, Comma, Dot,
            EqualTo, GreaterThan, GreaterThanOrEqualTo, LowerThan, LowerThanOrEqualTo, Minus,
            NotEqualTo, OpenBrace, OpenParenthesis, Plus, Semicolon, Slash,
        };

        Some(match self {
            Arrow => "->",
            Assignment => "=",
            Asterisk => "*",
            CloseBrace => "}",
            CloseParenthesis => ")",
            Colon => ":",
            Comma => ",",
            Dot => ".",
            EqualTo => "==",
            GreaterThan => ">",
            GreaterThanOrEqualTo => ">=",
            LowerThan => "<",
            LowerThanOrEqualTo => "<=",
            Minus => "-",
            NotEqualTo => "!=",
            OpenBrace => "{",
            OpenParenthesis => "(",
            Plus => "+",
            Semicolon => ";",
            Slash => "/",
            _ => return None,
        })
    }

    /// Whether this kind is one of the four filler kinds.
    #[must_use]
    pub const fn is_filler(self) -> bool {
        matches!(
            self,
            TokenKind::CommentBlock
                | TokenKind::CommentLine
                | TokenKind::Newline
                | TokenKind::Whitespace
        )
    }

    /// Whether this kind is a numeric-literal type suffix kind.
    #[must_use]
    pub const fn is_numeric_literal(self) -> bool {
        matches!(
            self,
            TokenKind::I8
                | TokenKind::I16
                | TokenKind::I32
                | TokenKind::I64
                | TokenKind::U8
                | TokenKind::U16
                | TokenKind::U32
                | TokenKind::U64
                | TokenKind::F32
                | TokenKind::F64
        )
    }

    /// The kind an `ISize` numeric literal suffix lexes as.
    pub const ISIZE: TokenKind = if cfg!(target_pointer_width = "64") {
        TokenKind::I64
    } else {
        TokenKind::I32
    };

    /// The kind a `USize` numeric literal suffix lexes as.
    pub const USIZE: TokenKind = if cfg!(target_pointer_width = "64") {
        TokenKind::U64
    } else {
        TokenKind::U32
    };

    /// Maps a numeric literal's written type suffix (`I8`, `ISize`, …)
    /// to the [`TokenKind`] it classifies as. `None` for unknown
    /// suffixes.
    #[must_use]
    pub fn from_numeric_suffix(suffix: &str) -> Option<Self> {
        Some(match suffix {
            "I8" => TokenKind::I8,
            "I16" => TokenKind::I16,
            "I32" => TokenKind::I32,
            "I64" => TokenKind::I64,
            "ISize" => TokenKind::ISIZE,
            "U8" => TokenKind::U8,
            "U16" => TokenKind::U16,
            "U32" => TokenKind::U32,
            "U64" => TokenKind::U64,
            "USize" => TokenKind::USIZE,
            "F32" => TokenKind::F32,
            "F64" => TokenKind::F64,
            _ => return None,
        })
    }
}

/// Whether a numeric literal's value portion is integral or has a
/// fractional/exponent part.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericLiteralValueKind {
    Integer,
    FloatingPoint,
}

/// A token's classified kind together with its exact source substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenContent {
    pub kind: TokenKind,
    pub string: String,
}

impl TokenContent {
    #[must_use]
    pub fn new(kind: TokenKind, string: impl Into<String>) -> Self {
        Self {
            kind,
            string: string.into(),
        }
    }
}

/// A lexed token: its content plus the span it occupies in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub content: TokenContent,
    pub position: SubstringPosition,
}

impl Token {
    #[must_use]
    pub const fn new(content: TokenContent, position: SubstringPosition) -> Self {
        Self { content, position }
    }
}
