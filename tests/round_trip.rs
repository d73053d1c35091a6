//! Lexer and parser round-trip over a spread of representative sources.
//!
//! Covers testable property 1 (lexer round-trip) and property 2 (parser
//! round-trip: tokenize -> parse -> re-tokenize -> concatenate) from a
//! variety of source shapes rather than the same snippet repeated.

use az_syntax::parsing::Script;
use az_syntax::tokenization::tokenize_string;
use test_case::test_case;

fn reconcatenate(source: &str) {
    let tokens = tokenize_string(source).unwrap_or_else(|e| panic!("{source:?} failed to lex: {e}"));
    let lexer_round_trip: String = tokens.iter().map(|t| t.content.string.as_str()).collect();
    assert_eq!(lexer_round_trip, source, "lexer round-trip mismatch");

    let script = Script::from_tokens(tokens).unwrap_or_else(|e| panic!("{source:?} failed to parse: {e}"));
    let retokenized = script.tokenize();
    let parser_round_trip: String = retokenized.iter().map(|t| t.content.string.as_str()).collect();
    assert_eq!(parser_round_trip, source, "parser round-trip mismatch");
}

#[test_case("x_I32 ;\n")]
#[test_case("1_I32;")]
#[test_case(".5_F64;")]
#[test_case("1.5e-3_F64;")]
#[test_case("a + b * c;")]
#[test_case("a * b + c;")]
#[test_case("a - b - c;")]
#[test_case("a = b = c;")]
#[test_case("a : b = c;")]
#[test_case("(a, b, c);")]
#[test_case("(a);")]
#[test_case("(a,);")]
#[test_case("();")]
#[test_case("foo(a, b, c);")]
#[test_case("foo();")]
#[test_case("foo(a,);")]
#[test_case("a.b.c;")]
#[test_case("a.b(c).d;")]
#[test_case("-a + -b;")]
#[test_case("if cond { a; } else { b; };")]
#[test_case("if cond { a; } else if other { b; } else { c; };")]
#[test_case("if a < b { a; };")]
#[test_case("Function (a: I32, b: I32) -> I32 { a + b };")]
#[test_case("Function () -> I32 { 1_I32 };")]
#[test_case("{ a; b; c };\n")]
#[test_case("// a line comment\na;\n")]
#[test_case("/* a block comment */ a;")]
#[test_case("a\n\n;\n\nb;")]
fn round_trips(source: &str) {
    reconcatenate(source);
}
