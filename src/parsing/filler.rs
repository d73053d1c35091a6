//! Filler trivia: whitespace, newlines, and comments. Never consumed as
//! syntax — the parser redistributes each one onto the structural token
//! that follows it (see [`super::parser`]).

use crate::tokenization::{SubstringPosition, Token, TokenContent, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum FillerKind {
    CommentBlock,
    CommentLine,
    Newline,
    Whitespace,
}

impl FillerKind {
    #[must_use]
    pub const fn to_token_kind(self) -> TokenKind {
        match self {
            Self::CommentBlock => TokenKind::CommentBlock,
            Self::CommentLine => TokenKind::CommentLine,
            Self::Newline => TokenKind::Newline,
            Self::Whitespace => TokenKind::Whitespace,
        }
    }

    #[must_use]
    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::CommentBlock => Self::CommentBlock,
            TokenKind::CommentLine => Self::CommentLine,
            TokenKind::Newline => Self::Newline,
            TokenKind::Whitespace => Self::Whitespace,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillerContent {
    pub kind: FillerKind,
    pub string: String,
}

impl FillerContent {
    #[must_use]
    pub fn new(kind: FillerKind, string: impl Into<String>) -> Self {
        Self {
            kind,
            string: string.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filler {
    pub content: FillerContent,
    pub position: SubstringPosition,
}

impl Filler {
    #[must_use]
    pub const fn new(content: FillerContent, position: SubstringPosition) -> Self {
        Self { content, position }
    }

    /// Converts a filler-kinded [`Token`] into a [`Filler`].
    ///
    /// # Panics
    ///
    /// Panics if `token`'s kind is not one of the four filler kinds.
    /// The parser's token cursor only ever calls this on tokens it has
    /// already classified as filler, so this never fires in practice.
    #[must_use]
    pub fn from_token(token: Token) -> Self {
        let kind = FillerKind::from_token_kind(token.content.kind)
            .expect("non-filler token passed to Filler::from_token");
        Self::new(
            FillerContent::new(kind, token.content.string),
            token.position,
        )
    }

    #[must_use]
    pub fn into_token(self) -> Token {
        Token::new(
            TokenContent::new(self.content.kind.to_token_kind(), self.content.string),
            self.position,
        )
    }
}
