use crate::{
    ast::{Expr, Operator},
    interpreter::evaluator::{binary::core::binary_op, core::EvalResult},
};

/// Applies `op` to every pair of elements, left-major.
///
/// Both operands are arrays the operator does not accept. The result is a
/// flat array of `left.len() * right.len()` elements: every element of `left`
/// combined with every element of `right`, in that order.
///
/// # Example
/// ```
/// use symcalc::{
///     ast::{Expr, Operator},
///     interpreter::evaluator::binary::array::cross_product,
/// };
///
/// let left = [Expr::from(1.0), Expr::from(2.0)];
/// let right = [Expr::from(10.0), Expr::from(20.0)];
/// let result = cross_product(Operator::Add, &left, &right).unwrap();
///
/// assert_eq!(result,
///            Expr::Array(vec![Expr::from(11.0),
///                             Expr::from(21.0),
///                             Expr::from(12.0),
///                             Expr::from(22.0)]));
/// ```
pub fn cross_product(op: Operator, left: &[Expr], right: &[Expr]) -> EvalResult<Expr> {
    let mut out = Vec::with_capacity(left.len() * right.len());
    for a in left {
        for b in right {
            out.push(binary_op(op, a, b)?);
        }
    }
    Ok(Expr::Array(out))
}

/// Applies `op` to each element of the left array with a fixed right operand.
pub fn map_left(op: Operator, left: &[Expr], right: &Expr) -> EvalResult<Expr> {
    left.iter()
        .map(|a| binary_op(op, a, right))
        .collect::<EvalResult<Vec<_>>>()
        .map(Expr::Array)
}

/// Applies `op` to each element of the right array with a fixed left operand.
pub fn map_right(op: Operator, left: &Expr, right: &[Expr]) -> EvalResult<Expr> {
    right.iter()
         .map(|b| binary_op(op, left, b))
         .collect::<EvalResult<Vec<_>>>()
         .map(Expr::Array)
}
