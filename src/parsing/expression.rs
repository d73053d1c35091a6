//! The expression CST: one variant per production, each carrying its
//! semantic children, the span of every structural token it consumes,
//! and the filler list immediately preceding each such token.

use crate::tokenization::{NumericLiteralValueKind, SubstringPosition, TokenKind};

use super::filler::Filler;
use super::operator::{
    BinaryArithmeticOperator, BinaryComparisonOperator, UnaryNegationOperator,
};
use super::statement::Statement;

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub string: String,
    pub position: SubstringPosition,
    pub fillers: Vec<Filler>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedIdentifier {
    pub identifier: Identifier,
    pub annotation: Box<Expression>,
    pub operator_position: SubstringPosition,
    pub operator_fillers: Vec<Filler>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: Box<Expression>,
    pub value: Box<Expression>,
    pub operator_position: SubstringPosition,
    pub operator_fillers: Vec<Filler>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryArithmeticOperation {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub operator: BinaryArithmeticOperator,
    pub operator_position: SubstringPosition,
    pub operator_fillers: Vec<Filler>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryComparison {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub operator: BinaryComparisonOperator,
    pub operator_position: SubstringPosition,
    pub operator_fillers: Vec<Filler>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub expression: Option<Box<Expression>>,
    pub open_brace_position: SubstringPosition,
    pub close_brace_position: SubstringPosition,
    pub open_brace_fillers: Vec<Filler>,
    pub close_brace_fillers: Vec<Filler>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub callable: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub open_parenthesis_position: SubstringPosition,
    pub commas_positions: Vec<SubstringPosition>,
    pub close_parenthesis_position: SubstringPosition,
    pub open_parenthesis_fillers: Vec<Filler>,
    pub commas_fillers: Vec<Vec<Filler>>,
    pub close_parenthesis_fillers: Vec<Filler>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    pub antecedent: Box<Expression>,
    pub consequent: Block,
    pub alternative: Option<Box<Expression>>,
    pub opener_position: SubstringPosition,
    pub alternative_opener_position: Option<SubstringPosition>,
    pub opener_fillers: Vec<Filler>,
    pub alternative_opener_fillers: Vec<Filler>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub parameters: Vec<AnnotatedIdentifier>,
    pub return_type: Box<Expression>,
    pub body: Block,
    pub opener_position: SubstringPosition,
    pub open_parenthesis_position: SubstringPosition,
    pub commas_positions: Vec<SubstringPosition>,
    pub close_parenthesis_position: SubstringPosition,
    pub arrow_position: SubstringPosition,
    pub opener_fillers: Vec<Filler>,
    pub open_parenthesis_fillers: Vec<Filler>,
    pub commas_fillers: Vec<Vec<Filler>>,
    pub close_parenthesis_fillers: Vec<Filler>,
    pub arrow_fillers: Vec<Filler>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grouping {
    pub expression: Box<Expression>,
    pub open_parenthesis_position: SubstringPosition,
    pub close_parenthesis_position: SubstringPosition,
    pub open_parenthesis_fillers: Vec<Filler>,
    pub close_parenthesis_fillers: Vec<Filler>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberAccess {
    pub object: Box<Expression>,
    pub member: Identifier,
    pub operator_position: SubstringPosition,
    pub operator_fillers: Vec<Filler>,
}

/// The type suffix a numeric literal was written with.
///
/// Distinct from [`crate::tokenization::TokenKind`]'s numeric
/// variants: the lexer collapses `ISize`/`USize` to a pointer-width
/// kind for classification purposes, but this enum preserves the
/// suffix exactly as spelled so the CST stays faithful to the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum NumericLiteralType {
    F32,
    F64,
    I8,
    I16,
    I32,
    I64,
    ISize,
    U8,
    U16,
    U32,
    U64,
    USize,
}

impl NumericLiteralType {
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Some(match suffix {
            "F32" => Self::F32,
            "F64" => Self::F64,
            "I8" => Self::I8,
            "I16" => Self::I16,
            "I32" => Self::I32,
            "I64" => Self::I64,
            "ISize" => Self::ISize,
            "U8" => Self::U8,
            "U16" => Self::U16,
            "U32" => Self::U32,
            "U64" => Self::U64,
            "USize" => Self::USize,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn value_kind(self) -> NumericLiteralValueKind {
        match self {
            Self::F32 | Self::F64 => NumericLiteralValueKind::FloatingPoint,
            _ => NumericLiteralValueKind::Integer,
        }
    }

    /// The [`TokenKind`] a literal written with this suffix lexes as.
    #[must_use]
    pub fn token_kind(self) -> TokenKind {
        TokenKind::from_numeric_suffix(&self.to_string())
            .expect("every NumericLiteralType variant spells a valid numeric suffix")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumericLiteral {
    pub value: String,
    pub type_: NumericLiteralType,
    pub position: SubstringPosition,
    pub fillers: Vec<Filler>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tuple {
    pub elements: Vec<Expression>,
    pub open_parenthesis_position: SubstringPosition,
    pub commas_positions: Vec<SubstringPosition>,
    pub close_parenthesis_position: SubstringPosition,
    pub open_parenthesis_fillers: Vec<Filler>,
    pub commas_fillers: Vec<Vec<Filler>>,
    pub close_parenthesis_fillers: Vec<Filler>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryArithmeticOperation {
    pub operand: Box<Expression>,
    pub operator: UnaryNegationOperator,
    pub operator_position: SubstringPosition,
    pub operator_fillers: Vec<Filler>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    AnnotatedIdentifier(AnnotatedIdentifier),
    Assignment(Assignment),
    BinaryArithmeticOperation(BinaryArithmeticOperation),
    BinaryComparison(BinaryComparison),
    Block(Block),
    Call(Call),
    Conditional(Conditional),
    FunctionDefinition(FunctionDefinition),
    Grouping(Grouping),
    Identifier(Identifier),
    MemberAccess(MemberAccess),
    NumericLiteral(NumericLiteral),
    Tuple(Tuple),
    UnaryArithmeticOperation(UnaryArithmeticOperation),
}

impl Expression {
    /// The position of this expression's leftmost structural token.
    ///
    /// Used to anchor [`super::error::ParsingError::UnexpectedExpression`]
    /// to a single point rather than the expression's full span.
    #[must_use]
    pub fn leading_position(&self) -> SubstringPosition {
        match self {
            Self::AnnotatedIdentifier(e) => e.identifier.position,
            Self::Assignment(e) => e.target.leading_position(),
            Self::BinaryArithmeticOperation(e) => e.left.leading_position(),
            Self::BinaryComparison(e) => e.left.leading_position(),
            Self::Block(e) => e.open_brace_position,
            Self::Call(e) => e.callable.leading_position(),
            Self::Conditional(e) => e.opener_position,
            Self::FunctionDefinition(e) => e.opener_position,
            Self::Grouping(e) => e.open_parenthesis_position,
            Self::Identifier(e) => e.position,
            Self::MemberAccess(e) => e.object.leading_position(),
            Self::NumericLiteral(e) => e.position,
            Self::Tuple(e) => e.open_parenthesis_position,
            Self::UnaryArithmeticOperation(e) => e.operator_position,
        }
    }
}
