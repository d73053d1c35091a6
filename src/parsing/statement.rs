//! Statements: expressions that have been terminated and folded into a
//! [`Script`](super::script::Script)'s top-level sequence.

use crate::tokenization::SubstringPosition;

use super::expression::Expression;
use super::filler::Filler;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    ExpressionStatement(ExpressionStatement),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub semicolon_position: SubstringPosition,
    pub semicolon_fillers: Vec<Filler>,
}
