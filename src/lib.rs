//! # symcalc
//!
//! symcalc is a symbolic expression engine written in Rust.
//! It parses algebraic expressions, simplifies them as far as their values
//! allow, and prints the result back as text. Expressions may mix numbers,
//! booleans, variables, arrays, tuples and functions.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::session::{Session, SessionConfig},
};

/// Defines the expression tree.
///
/// This module declares the `Expr` enum, the operator table and the operand
/// categories. Trees are built by the parser, simplified by the evaluator and
/// printed by the renderer.
///
/// # Responsibilities
/// - Defines every node kind, including placeholders without evaluation
///   rules.
/// - Describes each operator once: symbol, precedence, associativity and
///   accepted operands.
/// - Classifies expressions into categories for operand dispatch.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating an expression, and the crate-level [`Error`] that
/// joins them.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the pipeline from text to text.
///
/// This module ties together lexing, parsing, evaluation and rendering, and
/// provides the [`interpreter::session::Session`] that runs them with shared
/// names and definitions.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for parsing, evaluating and printing.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities: tolerant numbers and string interning.
pub mod util;

mod proptests;

/// Evaluates a single expression and returns the rendered result.
///
/// This runs `source` through a fresh [`Session`]: it is parsed, simplified
/// and printed back. Variables without a value stay symbolic.
///
/// # Parameters
/// - `source`: The expression text.
/// - `force_parentheses`: Wrap every operator chain in the output.
///
/// # Errors
/// Returns the first parse or evaluation error.
///
/// # Examples
/// ```
/// use symcalc::get_result;
///
/// assert_eq!(get_result("2 + 3 + x", false).unwrap(), "5 + x");
/// assert_eq!(get_result("2 * 3 + x", true).unwrap(), "(6 + x)");
///
/// // A trailing operator has no right operand.
/// assert!(get_result("2 +", false).is_err());
/// ```
pub fn get_result(source: &str, force_parentheses: bool) -> Result<String, Error> {
    let config = SessionConfig { force_parentheses,
                                 ..SessionConfig::default() };
    Session::with_config(config).run(source)
}
