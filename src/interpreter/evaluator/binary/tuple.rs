use crate::{
    ast::{Expr, Operator},
    error::RuntimeError,
    interpreter::evaluator::{binary::core::binary_op, core::EvalResult},
};

/// Applies `op` elementwise to two tuples of the same arity.
///
/// # Errors
/// `DimensionMismatch` naming both arities if they differ.
///
/// # Example
/// ```
/// use symcalc::{
///     ast::{Expr, Operator},
///     error::RuntimeError,
///     interpreter::evaluator::binary::tuple::zip,
/// };
///
/// let two = [Expr::from(1.0), Expr::from(2.0)];
/// let three = [Expr::from(1.0), Expr::from(2.0), Expr::from(3.0)];
///
/// assert_eq!(zip(Operator::Mul, &two, &two).unwrap(),
///            Expr::Tuple(vec![Expr::from(1.0), Expr::from(4.0)]));
/// assert_eq!(zip(Operator::Add, &two, &three),
///            Err(RuntimeError::DimensionMismatch { left: 2, right: 3 }));
/// ```
pub fn zip(op: Operator, left: &[Expr], right: &[Expr]) -> EvalResult<Expr> {
    if left.len() != right.len() {
        return Err(RuntimeError::DimensionMismatch { left:  left.len(),
                                                     right: right.len(), });
    }

    left.iter()
        .zip(right)
        .map(|(a, b)| binary_op(op, a, b))
        .collect::<EvalResult<Vec<_>>>()
        .map(Expr::Tuple)
}
