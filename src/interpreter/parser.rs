/// Parser entry points.
///
/// Defines the `ParseResult` alias, the default nesting limit and the
/// functions turning source text or token trees into an expression.
pub mod core;

/// Precedence levels.
///
/// Splits a token sequence on one operator per level, loosest first, and
/// builds operator chains from the fragments.
pub mod binary;

/// Atoms and prefix minus.
///
/// Parses literals, variables and bracket groups, and the negation a `-`
/// produces when it has no left operand.
pub mod unary;

/// Parsing helpers.
///
/// Splitting on operators and commas at a single bracket depth, and
/// comma-separated lists.
pub mod utils;

/// Definitions.
///
/// Parses `name = expr` and `name(a, b) = body` lines for sessions.
pub mod statement;
