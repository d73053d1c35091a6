//! The top-level CST node and the re-tokenizer that inverts parsing.

use crate::tokenization::{SubstringPosition, Token, TokenContent, TokenKind};

use super::error::ParsingError;
use super::expression::{AnnotatedIdentifier, Block, Expression, Identifier, NumericLiteral};
use super::filler::Filler;
use super::parser::parse_script;
use super::statement::Statement;

/// A fully parsed source file: an ordered sequence of statements plus
/// whatever filler trivia trails the last one.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub statements: Vec<Statement>,
    pub fillers: Vec<Filler>,
}

impl Script {
    /// Parses a token list (as produced by
    /// [`crate::tokenization::tokenize_string`]) into a `Script`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParsingError`] encountered. Parsing is
    /// fail-fast: there is no recovery and no partial result.
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Self, ParsingError> {
        let (statements, fillers) = parse_script(tokens)?;
        Ok(Self { statements, fillers })
    }

    /// Re-tokenizes this `Script`, reproducing exactly the token list
    /// that [`Script::from_tokens`] consumed to build it.
    #[must_use]
    pub fn tokenize(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        for statement in &self.statements {
            write_statement(&mut tokens, statement);
        }
        push_fillers(&mut tokens, &self.fillers);
        tokens
    }
}

fn push_fillers(out: &mut Vec<Token>, fillers: &[Filler]) {
    out.extend(fillers.iter().cloned().map(Filler::into_token));
}

fn push_anchor(
    out: &mut Vec<Token>,
    fillers: &[Filler],
    kind: TokenKind,
    string: impl Into<String>,
    position: SubstringPosition,
) {
    push_fillers(out, fillers);
    out.push(Token::new(TokenContent::new(kind, string), position));
}

fn write_identifier(out: &mut Vec<Token>, identifier: &Identifier) {
    push_anchor(
        out,
        &identifier.fillers,
        TokenKind::Identifier,
        identifier.string.clone(),
        identifier.position,
    );
}

fn write_numeric_literal(out: &mut Vec<Token>, literal: &NumericLiteral) {
    let string = format!("{}_{}", literal.value, literal.type_);
    push_anchor(
        out,
        &literal.fillers,
        literal.type_.token_kind(),
        string,
        literal.position,
    );
}

fn write_annotated_identifier(out: &mut Vec<Token>, annotated: &AnnotatedIdentifier) {
    write_identifier(out, &annotated.identifier);
    push_anchor(
        out,
        &annotated.operator_fillers,
        TokenKind::Colon,
        ":",
        annotated.operator_position,
    );
    write_expression(out, &annotated.annotation);
}

/// Interleaves `elements` with their paired commas, by index. Works
/// uniformly whether or not a trailing comma is present: the index
/// bound on `commas_positions` simply comes up short for the last
/// element when there is no trailing comma.
fn write_comma_separated<T>(
    out: &mut Vec<Token>,
    elements: &[T],
    commas_positions: &[SubstringPosition],
    commas_fillers: &[Vec<Filler>],
    write_element: impl Fn(&mut Vec<Token>, &T),
) {
    for (index, element) in elements.iter().enumerate() {
        write_element(out, element);
        if let Some(&position) = commas_positions.get(index) {
            push_anchor(out, &commas_fillers[index], TokenKind::Comma, ",", position);
        }
    }
}

fn write_block(out: &mut Vec<Token>, block: &Block) {
    push_anchor(
        out,
        &block.open_brace_fillers,
        TokenKind::OpenBrace,
        "{",
        block.open_brace_position,
    );
    for statement in &block.statements {
        write_statement(out, statement);
    }
    if let Some(expression) = &block.expression {
        write_expression(out, expression);
    }
    push_anchor(
        out,
        &block.close_brace_fillers,
        TokenKind::CloseBrace,
        "}",
        block.close_brace_position,
    );
}

fn write_statement(out: &mut Vec<Token>, statement: &Statement) {
    match statement {
        Statement::ExpressionStatement(s) => {
            write_expression(out, &s.expression);
            push_anchor(
                out,
                &s.semicolon_fillers,
                TokenKind::Semicolon,
                ";",
                s.semicolon_position,
            );
        }
    }
}

fn write_expression(out: &mut Vec<Token>, expression: &Expression) {
    match expression {
        Expression::AnnotatedIdentifier(e) => {
            write_identifier(out, &e.identifier);
            push_anchor(out, &e.operator_fillers, TokenKind::Colon, ":", e.operator_position);
            write_expression(out, &e.annotation);
        }
        Expression::Assignment(e) => {
            write_expression(out, &e.target);
            push_anchor(
                out,
                &e.operator_fillers,
                TokenKind::Assignment,
                "=",
                e.operator_position,
            );
            write_expression(out, &e.value);
        }
        Expression::BinaryArithmeticOperation(e) => {
            write_expression(out, &e.left);
            let kind = e.operator.to_token_kind();
            let spelling = kind
                .fixed_spelling()
                .expect("arithmetic operator kinds have fixed spellings");
            push_anchor(out, &e.operator_fillers, kind, spelling, e.operator_position);
            write_expression(out, &e.right);
        }
        Expression::BinaryComparison(e) => {
            write_expression(out, &e.left);
            let kind = e.operator.to_token_kind();
            let spelling = kind
                .fixed_spelling()
                .expect("comparison operator kinds have fixed spellings");
            push_anchor(out, &e.operator_fillers, kind, spelling, e.operator_position);
            write_expression(out, &e.right);
        }
        Expression::Block(e) => write_block(out, e),
        Expression::Call(e) => {
            write_expression(out, &e.callable);
            push_anchor(
                out,
                &e.open_parenthesis_fillers,
                TokenKind::OpenParenthesis,
                "(",
                e.open_parenthesis_position,
            );
            write_comma_separated(
                out,
                &e.arguments,
                &e.commas_positions,
                &e.commas_fillers,
                write_expression,
            );
            push_anchor(
                out,
                &e.close_parenthesis_fillers,
                TokenKind::CloseParenthesis,
                ")",
                e.close_parenthesis_position,
            );
        }
        Expression::Conditional(e) => {
            push_anchor(out, &e.opener_fillers, TokenKind::Identifier, "if", e.opener_position);
            write_expression(out, &e.antecedent);
            write_block(out, &e.consequent);
            if let Some(alternative) = &e.alternative {
                let position = e
                    .alternative_opener_position
                    .expect("alternative expression implies alternative_opener_position");
                push_anchor(
                    out,
                    &e.alternative_opener_fillers,
                    TokenKind::Identifier,
                    "else",
                    position,
                );
                write_expression(out, alternative);
            }
        }
        Expression::FunctionDefinition(e) => {
            push_anchor(
                out,
                &e.opener_fillers,
                TokenKind::Identifier,
                "Function",
                e.opener_position,
            );
            push_anchor(
                out,
                &e.open_parenthesis_fillers,
                TokenKind::OpenParenthesis,
                "(",
                e.open_parenthesis_position,
            );
            write_comma_separated(
                out,
                &e.parameters,
                &e.commas_positions,
                &e.commas_fillers,
                write_annotated_identifier,
            );
            push_anchor(
                out,
                &e.close_parenthesis_fillers,
                TokenKind::CloseParenthesis,
                ")",
                e.close_parenthesis_position,
            );
            push_anchor(out, &e.arrow_fillers, TokenKind::Arrow, "->", e.arrow_position);
            write_expression(out, &e.return_type);
            write_block(out, &e.body);
        }
        Expression::Grouping(e) => {
            push_anchor(
                out,
                &e.open_parenthesis_fillers,
                TokenKind::OpenParenthesis,
                "(",
                e.open_parenthesis_position,
            );
            write_expression(out, &e.expression);
            push_anchor(
                out,
                &e.close_parenthesis_fillers,
                TokenKind::CloseParenthesis,
                ")",
                e.close_parenthesis_position,
            );
        }
        Expression::Identifier(e) => write_identifier(out, e),
        Expression::MemberAccess(e) => {
            write_expression(out, &e.object);
            push_anchor(out, &e.operator_fillers, TokenKind::Dot, ".", e.operator_position);
            write_identifier(out, &e.member);
        }
        Expression::NumericLiteral(e) => write_numeric_literal(out, e),
        Expression::Tuple(e) => {
            push_anchor(
                out,
                &e.open_parenthesis_fillers,
                TokenKind::OpenParenthesis,
                "(",
                e.open_parenthesis_position,
            );
            write_comma_separated(
                out,
                &e.elements,
                &e.commas_positions,
                &e.commas_fillers,
                write_expression,
            );
            push_anchor(
                out,
                &e.close_parenthesis_fillers,
                TokenKind::CloseParenthesis,
                ")",
                e.close_parenthesis_position,
            );
        }
        Expression::UnaryArithmeticOperation(e) => {
            push_anchor(out, &e.operator_fillers, TokenKind::Minus, "-", e.operator_position);
            write_expression(out, &e.operand);
        }
    }
}
