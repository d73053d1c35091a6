//! The seed scenarios enumerated for the lexer/parser: specific inputs
//! with an exact expected token classification or CST shape, as
//! opposed to the property-based round-trip checks in `round_trip.rs`.

use az_syntax::parsing::{Expression, ParsingError, Script, Statement};
use az_syntax::tokenization::{tokenize_string, LexicalError, NumericLiteralValueKind, TokenKind};

#[test]
fn identifier_that_looks_like_a_numeric_suffix_is_still_an_identifier() {
    let tokens = tokenize_string("x_I32 ;").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.content.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Whitespace,
            TokenKind::Semicolon,
        ]
    );
    assert_eq!(tokens[0].content.string, "x_I32");

    let reconstructed: String = tokens.iter().map(|t| t.content.string.as_str()).collect();
    assert_eq!(reconstructed, "x_I32 ;");
}

#[test]
fn integer_literal_parses_to_a_single_expression_statement() {
    let tokens = tokenize_string("1_I32;").unwrap();
    assert_eq!(tokens.len(), 2);

    let script = Script::from_tokens(tokens.clone()).unwrap();
    assert_eq!(script.statements.len(), 1);
    let Statement::ExpressionStatement(statement) = &script.statements[0];
    let Expression::NumericLiteral(literal) = &statement.expression else {
        panic!("expected a numeric literal, got {:?}", statement.expression);
    };
    assert_eq!(literal.value, "1");
    assert_eq!(literal.type_.value_kind(), NumericLiteralValueKind::Integer);
    assert_eq!(literal.type_.to_string(), "I32");

    assert_eq!(script.tokenize(), tokens);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let script = Script::from_tokens(tokenize_string("a + b * c;").unwrap()).unwrap();
    let Statement::ExpressionStatement(statement) = &script.statements[0];
    let Expression::BinaryArithmeticOperation(addition) = &statement.expression else {
        panic!("expected a top-level addition, got {:?}", statement.expression);
    };
    assert!(matches!(&*addition.left, Expression::Identifier(i) if i.string == "a"));
    let Expression::BinaryArithmeticOperation(multiplication) = &*addition.right else {
        panic!("expected the right operand to be a multiplication, got {:?}", addition.right);
    };
    assert!(matches!(&*multiplication.left, Expression::Identifier(i) if i.string == "b"));
    assert!(matches!(&*multiplication.right, Expression::Identifier(i) if i.string == "c"));
}

#[test]
fn parenthesized_forms_disambiguate_by_trailing_comma() {
    let tuple = Script::from_tokens(tokenize_string("(a, b, c);").unwrap()).unwrap();
    let Statement::ExpressionStatement(statement) = &tuple.statements[0];
    let Expression::Tuple(tuple) = &statement.expression else {
        panic!("expected a tuple, got {:?}", statement.expression);
    };
    assert_eq!(tuple.elements.len(), 3);
    assert_eq!(tuple.commas_positions.len(), 2);

    let grouping = Script::from_tokens(tokenize_string("(a);").unwrap()).unwrap();
    let Statement::ExpressionStatement(statement) = &grouping.statements[0];
    assert!(matches!(&statement.expression, Expression::Grouping(_)));

    let singleton = Script::from_tokens(tokenize_string("(a,);").unwrap()).unwrap();
    let Statement::ExpressionStatement(statement) = &singleton.statements[0];
    let Expression::Tuple(tuple) = &statement.expression else {
        panic!("expected a singleton tuple, got {:?}", statement.expression);
    };
    assert_eq!(tuple.elements.len(), 1);
    assert_eq!(tuple.commas_positions.len(), 1);

    let empty = Script::from_tokens(tokenize_string("();").unwrap()).unwrap();
    let Statement::ExpressionStatement(statement) = &empty.statements[0];
    let Expression::Tuple(tuple) = &statement.expression else {
        panic!("expected an empty tuple, got {:?}", statement.expression);
    };
    assert!(tuple.elements.is_empty());
    assert!(tuple.commas_positions.is_empty());
}

#[test]
fn conditional_with_alternative_requires_a_trailing_semicolon() {
    let tokens = tokenize_string("if cond { a; } else { b; };").unwrap();
    let script = Script::from_tokens(tokens).unwrap();
    let Statement::ExpressionStatement(statement) = &script.statements[0];
    let Expression::Conditional(conditional) = &statement.expression else {
        panic!("expected a conditional, got {:?}", statement.expression);
    };
    assert!(matches!(&*conditional.antecedent, Expression::Identifier(i) if i.string == "cond"));
    assert_eq!(conditional.consequent.statements.len(), 1);
    assert!(conditional.alternative.is_some());

    let without_semicolon = tokenize_string("if cond { a; } else { b; }").unwrap();
    let error = Script::from_tokens(without_semicolon).unwrap_err();
    assert!(matches!(error, ParsingError::MissingSemicolon { .. }));
}

#[test]
fn unterminated_block_comment_reports_its_partial_text() {
    let error = tokenize_string("/* open").unwrap_err();
    let LexicalError::CommentBlockIncomplete { strings, .. } = error else {
        panic!("expected CommentBlockIncomplete, got {error:?}");
    };
    assert_eq!(strings, vec!["/* open".to_string()]);
}

#[test]
fn floating_point_value_with_integer_suffix_conflicts() {
    let error = tokenize_string("1.5_I64;").unwrap_err();
    assert!(matches!(
        error,
        LexicalError::NumericLiteralValueTypeSuffixConflict {
            value_kind: NumericLiteralValueKind::FloatingPoint,
            ..
        }
    ));
}
