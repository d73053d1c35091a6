//! Line-anchored source positions.

use serde::{Deserialize, Serialize};

use super::index::{ByteIndex, Utf8Index};

/// A character's offset within the line it appears on, in both byte
/// and codepoint units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPosition {
    pub byte: ByteIndex,
    pub utf_8: Utf8Index,
}

impl CharacterPosition {
    #[must_use]
    pub const fn new(byte: ByteIndex, utf_8: Utf8Index) -> Self {
        Self { byte, utf_8 }
    }
}

/// The span of a token or filler, expressed as a half-open range
/// `[start, end)` in the character dimension.
///
/// `start_line == end_line` unless the spanned text contains a newline,
/// in which case `start_character`/`end_character` are relative to
/// their own line rather than to a single shared origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstringPosition {
    pub start_line: usize,
    pub start_character: CharacterPosition,
    pub end_line: usize,
    pub end_character: CharacterPosition,
}

impl SubstringPosition {
    #[must_use]
    pub const fn new(
        start_line: usize,
        start_character: CharacterPosition,
        end_line: usize,
        end_character: CharacterPosition,
    ) -> Self {
        Self {
            start_line,
            start_character,
            end_line,
            end_character,
        }
    }
}
