use crate::{
    ast::{Categories, Category, Expr, Operator, Side},
    error::RuntimeError,
    interpreter::evaluator::{
        binary::{
            array::{cross_product, map_left, map_right},
            tuple::zip,
        },
        core::EvalResult,
    },
};

/// Checks one reduced operand against the categories its side accepts.
fn check_operand(op: Operator, accepted: Categories, operand: &Expr, side: Side) -> EvalResult<()> {
    let category = operand.category();
    if accepted.accepts(category) {
        Ok(())
    } else {
        Err(RuntimeError::InvalidOperand { op, side, category })
    }
}

/// Combines two reduced operands with `op`.
///
/// Operand categories decide what happens, in this order:
/// 1. An array on a side that does not accept arrays is broadcast over: two
///    such arrays give their cross product, one is mapped over with the
///    other operand held fixed.
/// 2. Tuples on a side that does not accept them are zipped with a tuple of
///    the same arity on the other side; anything else is an error.
/// 3. A symbolic operand, which broadcasting can surface from inside an
///    array, keeps the pair as an unevaluated chain.
/// 4. Each operand is checked against the categories its side accepts.
/// 5. The operator's computation runs.
///
/// # Parameters
/// - `op`: The operator.
/// - `a`: Left operand.
/// - `b`: Right operand.
///
/// # Returns
/// The combined expression.
///
/// # Errors
/// - `DimensionMismatch` for tuples of different arity.
/// - `TupleOperand` for a tuple that cannot be paired up.
/// - `InvalidOperand` for any other operand of the wrong category.
/// - `Unsupported` for operators without a computation.
/// - Whatever the computation reports.
///
/// # Example
/// ```
/// use symcalc::{
///     ast::{Expr, Operator},
///     interpreter::evaluator::binary::core::binary_op,
/// };
///
/// let items = Expr::Array(vec![Expr::from(1.0), Expr::from(2.0)]);
/// let result = binary_op(Operator::Mul, &items, &Expr::from(10.0)).unwrap();
///
/// assert_eq!(result, Expr::Array(vec![Expr::from(10.0), Expr::from(20.0)]));
/// ```
pub fn binary_op(op: Operator, a: &Expr, b: &Expr) -> EvalResult<Expr> {
    let info = op.info();

    if let Expr::Array(left) = a
       && !info.left.accepts(Category::Array)
    {
        if let Expr::Array(right) = b
           && !info.right.accepts(Category::Array)
        {
            return cross_product(op, left, right);
        }
        return map_left(op, left, b);
    }
    if let Expr::Array(right) = b
       && !info.right.accepts(Category::Array)
    {
        return map_right(op, a, right);
    }

    if let Expr::Tuple(left) = a
       && !info.left.accepts(Category::Tuple)
    {
        let Expr::Tuple(right) = b else {
            return Err(RuntimeError::TupleOperand { op, side: Side::Left });
        };
        return zip(op, left, right);
    }
    if matches!(b, Expr::Tuple(_)) && !info.right.accepts(Category::Tuple) {
        return Err(RuntimeError::TupleOperand { op, side: Side::Right });
    }

    if !a.is_foldable() || !b.is_foldable() {
        return Ok(Expr::chain(op, vec![a.clone(), b.clone()]));
    }

    check_operand(op, info.left, a, Side::Left)?;
    check_operand(op, info.right, b, Side::Right)?;

    let apply = info.apply.ok_or(RuntimeError::Unsupported { what: info.name })?;
    apply(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::intern::Interner;

    fn nums(values: &[f64]) -> Vec<Expr> {
        values.iter().map(|&v| Expr::from(v)).collect()
    }

    #[test]
    fn scalar_broadcast_on_the_right() {
        let result = binary_op(Operator::Sub, &Expr::from(10.0), &Expr::Array(nums(&[1.0, 2.0])));
        assert_eq!(result.unwrap(), Expr::Array(nums(&[9.0, 8.0])));
    }

    #[test]
    fn index_keeps_the_collection_and_maps_positions() {
        let items = Expr::Array(nums(&[5.0, 6.0, 7.0]));
        let positions = Expr::Array(nums(&[0.0, -1.0]));
        assert_eq!(binary_op(Operator::Index, &items, &positions).unwrap(),
                   Expr::Array(nums(&[5.0, 7.0])));
    }

    #[test]
    fn tuples_zip_or_fail() {
        let pair = Expr::Tuple(nums(&[1.0, 2.0]));
        let triple = Expr::Tuple(nums(&[1.0, 2.0, 3.0]));
        assert_eq!(binary_op(Operator::Add, &pair, &pair).unwrap(), Expr::Tuple(nums(&[2.0, 4.0])));
        assert_eq!(binary_op(Operator::Add, &pair, &triple),
                   Err(RuntimeError::DimensionMismatch { left: 2, right: 3 }));
        assert_eq!(binary_op(Operator::Add, &pair, &Expr::from(1.0)),
                   Err(RuntimeError::TupleOperand { op:   Operator::Add,
                                                    side: Side::Left, }));
        assert_eq!(binary_op(Operator::Mul, &Expr::from(1.0), &pair),
                   Err(RuntimeError::TupleOperand { op:   Operator::Mul,
                                                    side: Side::Right, }));
    }

    #[test]
    fn symbolic_elements_stay_as_chains() {
        let x = Expr::Variable(Interner::new().intern("x"));
        let items = Expr::Array(vec![x.clone(), Expr::from(1.0)]);
        let result = binary_op(Operator::Add, &items, &Expr::from(1.0)).unwrap();
        assert_eq!(result,
                   Expr::Array(vec![Expr::chain(Operator::Add, vec![x, Expr::from(1.0)]),
                                    Expr::from(2.0)]));
    }

    #[test]
    fn undefined_operands() {
        assert_eq!(binary_op(Operator::Sub, &Expr::Undefined, &Expr::from(3.0)).unwrap(),
                   Expr::from(-3.0));
        assert_eq!(binary_op(Operator::Add, &Expr::Undefined, &Expr::from(3.0)),
                   Err(RuntimeError::InvalidOperand { op:       Operator::Add,
                                                      side:     Side::Left,
                                                      category: Category::Nothing, }));
    }

    #[test]
    fn declared_operators_are_unsupported() {
        assert_eq!(binary_op(Operator::And, &Expr::from(true), &Expr::from(false)),
                   Err(RuntimeError::Unsupported { what: "And" }));
    }
}
