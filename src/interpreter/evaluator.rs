/// Operand dispatch for binary operators.
///
/// Broadcasting over arrays, zipping tuples, checking operand categories and
/// the scalar computations of each operator.
pub mod binary;

/// Core evaluation logic.
///
/// Contains `EvalResult` and [`crate::ast::Expr::evaluate`], which walks the
/// tree and hands operator chains to the reducer.
pub mod core;

/// Associativity-aware folding of operator chains.
pub mod nary;

/// Substitution and function application.
///
/// Replaces variables with bound expressions, collects free variables and
/// applies or composes functions.
pub mod function;
