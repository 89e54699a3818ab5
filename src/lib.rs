//! # deskcalc
//!
//! deskcalc is an interactive desk calculator written in Rust.
//! It reads statements from a line-oriented stream, evaluates arithmetic
//! expressions with variables under standard operator precedence, and prints
//! each result — looping until an explicit quit command.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{context::Context, lexer::TokenStream, parser::parse_statement};

/// Provides unified error types for tokenizing, parsing and evaluation.
///
/// This module defines all errors a statement can fail with. It standardizes
/// error reporting and carries source line numbers for user feedback, and
/// separates recoverable user-input failures from fatal internal ones.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Exposes the fatality split the interactive driver recovers by.
pub mod error;
/// Orchestrates the entire process of statement execution.
///
/// This module ties together the lexer, the fused parser/evaluator, and the
/// variable context to provide a complete runtime for calculator input.
///
/// # Responsibilities
/// - Coordinates all core components: token stream, parser and context.
/// - Provides the statement-level entry point used by the driver.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-evaluate-print loop.
///
/// # Responsibilities
/// - Prompts, evaluates one statement at a time, and prints results.
/// - Reports failed statements on the diagnostic stream and recovers by
///   skipping to the next statement separator.
pub mod repl;

pub use error::Error;

/// Evaluates every statement in a script and returns the last value.
///
/// Statements are separated by `;`. Evaluation stops at the quit command or
/// the end of the script; unlike the interactive loop, the first error
/// aborts the whole script.
///
/// # Returns
/// - `Ok(Some(value))`: The value of the last evaluated statement.
/// - `Ok(None)`: The script contained no statements before quit or its end.
///
/// # Errors
/// Returns the first parse or runtime error raised by any statement.
///
/// # Examples
/// ```
/// use deskcalc::eval_script;
///
/// let result = eval_script("x = 5; x + 1;").unwrap();
/// assert_eq!(result, Some(6.0));
///
/// // 'never_set' was never assigned: reading it yields 0.0, not an error.
/// let result = eval_script("never_set + 1;").unwrap();
/// assert_eq!(result, Some(1.0));
///
/// // Dividing by zero is an error.
/// assert!(eval_script("5 / 0;").is_err());
/// ```
pub fn eval_script(source: &str) -> Result<Option<f64>, Error> {
    let mut context = Context::new();
    let mut tokens = TokenStream::new(source.chars());

    let mut result = None;
    while let Some(value) = parse_statement(&mut tokens, &mut context)? {
        result = Some(value);
    }

    Ok(result)
}
