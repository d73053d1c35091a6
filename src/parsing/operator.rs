//! Operator tags: the static precedence/associativity table from §3/§4
//! of the operator-precedence design, expressed as nullary variants.

use std::fmt;

use crate::tokenization::TokenKind;

use super::precedence::{Associativity, Precedence};

macro_rules! unit_operator {
    ($name:ident, $spelling:literal) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($spelling)
            }
        }
    };
}

const CALL_MEMBER: Precedence = Precedence::new(110);
const UNARY_NEGATION: Precedence = Precedence::new(100);
const MULTIPLICATIVE: Precedence = Precedence::new(90);
const ADDITIVE: Precedence = Precedence::new(80);
const RELATIONAL: Precedence = Precedence::new(70);
const EQUALITY: Precedence = Precedence::new(60);
const ANNOTATION: Precedence = Precedence::new(50);
const ASSIGNMENT: Precedence = Precedence::new(40);

/// `+ - * /` as binary infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum BinaryArithmeticOperator {
    Addition,
    Division,
    Multiplication,
    Subtraction,
}

impl BinaryArithmeticOperator {
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Multiplication | Self::Division => MULTIPLICATIVE,
            Self::Addition | Self::Subtraction => ADDITIVE,
        }
    }

    #[must_use]
    pub const fn associativity(self) -> Associativity {
        Associativity::LeftToRight
    }

    #[must_use]
    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Plus => Self::Addition,
            TokenKind::Minus => Self::Subtraction,
            TokenKind::Asterisk => Self::Multiplication,
            TokenKind::Slash => Self::Division,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn to_token_kind(self) -> TokenKind {
        match self {
            Self::Addition => TokenKind::Plus,
            Self::Subtraction => TokenKind::Minus,
            Self::Multiplication => TokenKind::Asterisk,
            Self::Division => TokenKind::Slash,
        }
    }
}

/// `== != < <= > >=` as binary infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum BinaryComparisonOperator {
    EqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
    LowerThan,
    LowerThanOrEqualTo,
    NotEqualTo,
}

impl BinaryComparisonOperator {
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::GreaterThan
            | Self::GreaterThanOrEqualTo
            | Self::LowerThan
            | Self::LowerThanOrEqualTo => RELATIONAL,
            Self::EqualTo | Self::NotEqualTo => EQUALITY,
        }
    }

    #[must_use]
    pub const fn associativity(self) -> Associativity {
        Associativity::LeftToRight
    }

    #[must_use]
    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::EqualTo => Self::EqualTo,
            TokenKind::NotEqualTo => Self::NotEqualTo,
            TokenKind::LowerThan => Self::LowerThan,
            TokenKind::LowerThanOrEqualTo => Self::LowerThanOrEqualTo,
            TokenKind::GreaterThan => Self::GreaterThan,
            TokenKind::GreaterThanOrEqualTo => Self::GreaterThanOrEqualTo,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn to_token_kind(self) -> TokenKind {
        match self {
            Self::EqualTo => TokenKind::EqualTo,
            Self::NotEqualTo => TokenKind::NotEqualTo,
            Self::LowerThan => TokenKind::LowerThan,
            Self::LowerThanOrEqualTo => TokenKind::LowerThanOrEqualTo,
            Self::GreaterThan => TokenKind::GreaterThan,
            Self::GreaterThanOrEqualTo => TokenKind::GreaterThanOrEqualTo,
        }
    }
}

/// `-` as a unary prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnaryNegationOperator;

impl UnaryNegationOperator {
    pub const PRECEDENCE: Precedence = UNARY_NEGATION;
}

unit_operator!(UnaryNegationOperator, "-");

/// `:` binding an identifier to a type annotation. Right-associative so
/// that chained annotations (were they ever legal) nest to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinaryAnnotationOperator;

impl BinaryAnnotationOperator {
    pub const PRECEDENCE: Precedence = ANNOTATION;
    pub const ASSOCIATIVITY: Associativity = Associativity::RightToLeft;
}

unit_operator!(BinaryAnnotationOperator, ":");

/// `=` as a binary infix operator. Right-associative so `a = b = c`
/// parses as `a = (b = c)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinaryAssignmentOperator;

impl BinaryAssignmentOperator {
    pub const PRECEDENCE: Precedence = ASSIGNMENT;
    pub const ASSOCIATIVITY: Associativity = Associativity::RightToLeft;
}

unit_operator!(BinaryAssignmentOperator, "=");

/// The postfix `( ... )` call operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallOperator;

impl CallOperator {
    pub const PRECEDENCE: Precedence = CALL_MEMBER;
    pub const ASSOCIATIVITY: Associativity = Associativity::LeftToRight;
}

unit_operator!(CallOperator, "(...)");

/// The infix `.` member access operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberAccessOperator;

impl MemberAccessOperator {
    pub const PRECEDENCE: Precedence = CALL_MEMBER;
    pub const ASSOCIATIVITY: Associativity = Associativity::LeftToRight;
}

unit_operator!(MemberAccessOperator, ".");
