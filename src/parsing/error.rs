//! The parsing error taxonomy.

use thiserror::Error;

use crate::tokenization::{SubstringPosition, Token};

use super::expression::Expression;

/// Every way [`super::script::Script::from_tokens`] can fail.
///
/// Parsing is fail-fast: the first error aborts the parse. There is no
/// recovery and no partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParsingError {
    #[error("no matching open brace for the closer at {position:?}")]
    MismatchedOpenBrace { position: SubstringPosition },

    #[error("no matching open parenthesis for the closer at {position:?}")]
    MismatchedOpenParenthesis { position: SubstringPosition },

    #[error("missing semicolon after token {token:?}")]
    MissingSemicolon { token: Token },

    #[error("ran out of tokens while an expression was required")]
    OutOfTokens,

    #[error("expression at {position:?} is not valid in this position: {expression:?}")]
    UnexpectedExpression {
        expression: Box<Expression>,
        position: SubstringPosition,
    },

    #[error("unexpected token {token:?}")]
    UnexpectedToken { token: Token },
}
