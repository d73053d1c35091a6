//! The lexical error taxonomy.

use thiserror::Error;

use super::position::SubstringPosition;
use super::token::NumericLiteralValueKind;

/// Every way [`super::lexer::tokenize_string`] can fail.
///
/// Each variant carries the partial string collected so far plus any
/// sub-fields already determined at the point of failure, so a caller
/// can diagnose precisely what went wrong without re-lexing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    #[error("unexpected character {character:?} at {position:?}")]
    UnexpectedCharacter {
        character: char,
        position: SubstringPosition,
        string: String,
    },

    #[error("unterminated block comment starting at {position:?}")]
    CommentBlockIncomplete {
        position: SubstringPosition,
        strings: Vec<String>,
    },

    /// Unreachable from [`super::lexer::Scanner::scan_identifier`]: an
    /// identifier has no mandatory trailing segment the way a numeric
    /// literal's suffix does, so there is no point mid-identifier where
    /// EOF is distinguishable from a clean identifier end. Kept in the
    /// taxonomy so exhaustive matches over `LexicalError` stay future-
    /// proof against a grammar that adds one.
    #[error("identifier incomplete at {position:?}")]
    IdentifierIncomplete {
        position: SubstringPosition,
        string: String,
    },

    #[error("unexpected character {character:?} in identifier at {position:?}, expected {expected}")]
    IdentifierUnexpectedCharacter {
        character: char,
        expected: &'static str,
        position: SubstringPosition,
        string: String,
    },

    #[error("numeric literal value incomplete at {position:?}")]
    NumericLiteralValueIncomplete {
        kind: NumericLiteralValueKind,
        position: SubstringPosition,
        string: String,
    },

    #[error(
        "unexpected character {character:?} in numeric literal value at {position:?}, expected {expected}"
    )]
    NumericLiteralValueUnexpectedCharacter {
        character: char,
        expected: &'static str,
        kind: NumericLiteralValueKind,
        position: SubstringPosition,
        string: String,
    },

    #[error("numeric literal type suffix incomplete at {position:?}")]
    NumericLiteralTypeSuffixIncomplete {
        position: SubstringPosition,
        string: String,
        value: String,
        value_kind: NumericLiteralValueKind,
    },

    #[error(
        "unexpected character {character:?} in numeric literal type suffix at {position:?}, expected {expected}"
    )]
    NumericLiteralTypeSuffixUnexpectedCharacter {
        character: char,
        expected: &'static str,
        position: SubstringPosition,
        string: String,
        value: String,
        value_kind: NumericLiteralValueKind,
    },

    #[error("unknown numeric literal type suffix {type_suffix:?} at {position:?}")]
    NumericLiteralTypeSuffixUnknown {
        position: SubstringPosition,
        string: String,
        type_suffix: String,
        value: String,
        value_kind: NumericLiteralValueKind,
    },

    #[error(
        "numeric literal value {value:?} ({value_kind:?}) conflicts with type suffix {type_suffix:?} at {position:?}"
    )]
    NumericLiteralValueTypeSuffixConflict {
        position: SubstringPosition,
        string: String,
        type_suffix: String,
        value: String,
        value_kind: NumericLiteralValueKind,
    },
}
