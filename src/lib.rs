#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::too_many_lines,
    clippy::too_many_arguments,
    clippy::wildcard_imports
)]

//! A lossless lexer and parser for `az`, a small expression-oriented
//! language.
//!
//! [`tokenization`] turns a source string into a flat list of positioned
//! tokens. [`parsing`] folds that token list into a concrete syntax tree
//! that retains every byte of the input (including whitespace and
//! comments) as filler trivia attached to the structural tokens that
//! follow it, so that [`parsing::Script::tokenize`] reproduces the exact
//! input token stream.

pub mod parsing;
pub mod tokenization;
