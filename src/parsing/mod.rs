//! Builds the lossless concrete syntax tree out of a lexed token
//! stream, and re-tokenizes it back into an identical stream.
//!
//! [`script::Script::from_tokens`] is the entry point; [`parser`] holds
//! the Pratt algorithm it's built on, [`expression`]/[`statement`] hold
//! the tree shapes it produces, and [`script`] holds the re-tokenizer
//! that inverts it.

pub mod error;
pub mod expression;
pub mod filler;
pub mod operator;
pub mod parser;
pub mod precedence;
pub mod script;
pub mod statement;

pub use error::ParsingError;
pub use expression::{
    AnnotatedIdentifier, Assignment, BinaryArithmeticOperation, BinaryComparison, Block, Call,
    Conditional, Expression, FunctionDefinition, Grouping, Identifier, MemberAccess,
    NumericLiteral, NumericLiteralType, Tuple, UnaryArithmeticOperation,
};
pub use filler::{Filler, FillerContent, FillerKind};
pub use operator::{
    BinaryAnnotationOperator, BinaryArithmeticOperator, BinaryAssignmentOperator,
    BinaryComparisonOperator, CallOperator, MemberAccessOperator, UnaryNegationOperator,
};
pub use precedence::{Associativity, Precedence};
pub use script::Script;
pub use statement::{ExpressionStatement, Statement};
