use crate::{
    ast::{Expr, Operator, Side},
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, function::apply},
    util::num::{Real, wrap_index},
};

/// Extracts the number from an operand the dispatcher already checked.
fn number(expr: &Expr, op: Operator, side: Side) -> EvalResult<Real> {
    match expr {
        Expr::Number(n) => Ok(*n),
        other => Err(RuntimeError::InvalidOperand { op,
                                                    side,
                                                    category: other.category() }),
    }
}

fn numbers(op: Operator, a: &Expr, b: &Expr) -> EvalResult<(Real, Real)> {
    Ok((number(a, op, Side::Left)?, number(b, op, Side::Right)?))
}

/// `a + b`
pub fn add(a: &Expr, b: &Expr) -> EvalResult<Expr> {
    let (a, b) = numbers(Operator::Add, a, b)?;
    Ok(Expr::Number(a + b))
}

/// `a - b`, or `-b` when the left operand is undefined.
///
/// # Example
/// ```
/// use symcalc::{ast::Expr, interpreter::evaluator::binary::scalar::sub};
///
/// assert_eq!(sub(&Expr::Undefined, &Expr::from(2.0)).unwrap(), Expr::from(-2.0));
/// assert_eq!(sub(&Expr::from(5.0), &Expr::from(2.0)).unwrap(), Expr::from(3.0));
/// ```
pub fn sub(a: &Expr, b: &Expr) -> EvalResult<Expr> {
    let b = number(b, Operator::Sub, Side::Right)?;
    if a.is_undefined() {
        return Ok(Expr::Number(-b));
    }
    let a = number(a, Operator::Sub, Side::Left)?;
    Ok(Expr::Number(a - b))
}

/// `a * b`
pub fn mul(a: &Expr, b: &Expr) -> EvalResult<Expr> {
    let (a, b) = numbers(Operator::Mul, a, b)?;
    Ok(Expr::Number(a * b))
}

/// `a / b`. Division by zero follows IEEE rules.
pub fn div(a: &Expr, b: &Expr) -> EvalResult<Expr> {
    let (a, b) = numbers(Operator::Div, a, b)?;
    Ok(Expr::Number(a / b))
}

/// `a ^ b`
pub fn pow(a: &Expr, b: &Expr) -> EvalResult<Expr> {
    let (a, b) = numbers(Operator::Exponent, a, b)?;
    Ok(Expr::Number(a.pow(b)))
}

/// `a = b`, compared with tolerance.
pub fn equal(a: &Expr, b: &Expr) -> EvalResult<Expr> {
    let (a, b) = numbers(Operator::Equal, a, b)?;
    Ok(Expr::Boolean(a == b))
}

/// `collection @ n`
///
/// `n` is truncated toward zero and wrapped into range, so `-1` is the last
/// element.
///
/// # Errors
/// `EmptyCollection` if there is nothing to index.
///
/// # Example
/// ```
/// use symcalc::{ast::Expr, interpreter::evaluator::binary::scalar::index};
///
/// let items = Expr::Array(vec![Expr::from(10.0), Expr::from(20.0), Expr::from(30.0)]);
///
/// assert_eq!(index(&items, &Expr::from(-1.0)).unwrap(), Expr::from(30.0));
/// assert_eq!(index(&items, &Expr::from(3.7)).unwrap(), Expr::from(10.0));
/// ```
pub fn index(collection: &Expr, position: &Expr) -> EvalResult<Expr> {
    let position = number(position, Operator::Index, Side::Right)?;
    let items = match collection {
        Expr::Array(items) | Expr::Tuple(items) => items,
        other => {
            return Err(RuntimeError::InvalidOperand { op:       Operator::Index,
                                                      side:     Side::Left,
                                                      category: other.category(), });
        },
    };
    let i = wrap_index(position.value(), items.len())
        .ok_or(RuntimeError::EmptyCollection { op: Operator::Index })?;
    Ok(items[i].clone())
}

/// `f # x`: applies a function to an argument.
pub fn call(function: &Expr, argument: &Expr) -> EvalResult<Expr> {
    match function {
        Expr::Function { params, body } => apply(params, body, argument),
        other => Err(RuntimeError::InvalidOperand { op:       Operator::Call,
                                                    side:     Side::Left,
                                                    category: other.category(), }),
    }
}
