use std::collections::VecDeque;

use log::trace;

use crate::{
    ast::{Associativity, Expr, Operator},
    interpreter::evaluator::{binary::core::binary_op, core::EvalResult},
};

/// The working state of one fold: unprocessed operands and finished ones.
///
/// Right-associative operators work from the back. `take` and `give` use the
/// working end of the input, `emit` keeps the output in source order either
/// way.
struct Fold {
    input:     VecDeque<Expr>,
    output:    VecDeque<Expr>,
    from_back: bool,
}

impl Fold {
    fn take(&mut self) -> Option<Expr> {
        if self.from_back {
            self.input.pop_back()
        } else {
            self.input.pop_front()
        }
    }

    fn give(&mut self, expr: Expr) {
        if self.from_back {
            self.input.push_back(expr);
        } else {
            self.input.push_front(expr);
        }
    }

    fn emit(&mut self, expr: Expr) {
        if self.from_back {
            self.output.push_front(expr);
        } else {
            self.output.push_back(expr);
        }
    }

    /// Emits everything still in the input, unchanged.
    fn finish(mut self) -> Vec<Expr> {
        while let Some(expr) = self.take() {
            self.emit(expr);
        }
        self.output.into()
    }
}

/// Folds the evaluated operands of a chain of `op`.
///
/// Adjacent foldable operands are combined with [`binary_op`] and the result
/// takes their place, so `2 + 3 + 4` folds to a single `9`. When a symbolic
/// operand is reached, a left or right associative operator stops and keeps
/// the rest as is: `x - 2 - 3` cannot be regrouped. A fully associative
/// operator steps over it and keeps folding: `x + 2 + 3` becomes `x + 5`.
///
/// Right-associative operators fold from the back and combine each pair as
/// `op(b, a)`, so `2 ^ 3 ^ 2` is `2 ^ 9`.
///
/// # Parameters
/// - `op`: The chain operator.
/// - `operands`: The evaluated operands, in source order.
///
/// # Returns
/// The remaining operands in source order. A single element means the chain
/// folded completely.
///
/// # Errors
/// Whatever [`binary_op`] reports for a pair.
///
/// # Example
/// ```
/// use symcalc::{
///     ast::{Expr, Operator},
///     interpreter::evaluator::nary::fold,
///     util::intern::Interner,
/// };
///
/// let x = Expr::Variable(Interner::new().intern("x"));
/// let operands = vec![x.clone(), Expr::from(2.0), Expr::from(3.0)];
///
/// assert_eq!(fold(Operator::Add, operands.clone()).unwrap(), vec![x.clone(), Expr::from(5.0)]);
/// assert_eq!(fold(Operator::Sub, operands.clone()).unwrap(), operands);
/// ```
pub fn fold(op: Operator, operands: Vec<Expr>) -> EvalResult<Vec<Expr>> {
    let associativity = op.info().associativity;
    let full = associativity == Associativity::Full;
    let mut fold = Fold { input:     operands.into(),
                          output:    VecDeque::new(),
                          from_back: associativity == Associativity::Right, };

    while let Some(a) = fold.take() {
        if !a.is_foldable() {
            fold.emit(a);
            if full {
                continue;
            }
            break;
        }

        let Some(b) = fold.take() else {
            fold.emit(a);
            break;
        };

        if b.is_foldable() {
            let combined = if fold.from_back {
                binary_op(op, &b, &a)?
            } else {
                binary_op(op, &a, &b)?
            };
            trace!("folded {} pair into {}", op.info().name, combined.type_name());
            fold.give(combined);
        } else {
            fold.emit(a);
            fold.emit(b);
            if !full {
                break;
            }
        }
    }

    Ok(fold.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::intern::Interner;

    fn num(n: f64) -> Expr {
        Expr::from(n)
    }

    #[test]
    fn full_folding_skips_symbols() {
        let mut symbols = Interner::new();
        let (x, y) = (Expr::Variable(symbols.intern("x")), Expr::Variable(symbols.intern("y")));
        let operands = vec![num(1.0), x.clone(), num(2.0), num(3.0), y.clone(), num(4.0)];
        assert_eq!(fold(Operator::Mul, operands).unwrap(), vec![num(1.0), x, num(6.0), y, num(4.0)]);
    }

    #[test]
    fn left_folding_stops_at_symbols() {
        let x = Expr::Variable(Interner::new().intern("x"));
        let operands = vec![num(10.0), num(2.0), x.clone(), num(1.0), num(1.0)];
        assert_eq!(fold(Operator::Sub, operands).unwrap(), vec![num(8.0), x, num(1.0), num(1.0)]);
    }

    #[test]
    fn right_folding_works_from_the_back() {
        assert_eq!(fold(Operator::Exponent, vec![num(2.0), num(3.0), num(2.0)]).unwrap(),
                   vec![num(512.0)]);

        let x = Expr::Variable(Interner::new().intern("x"));
        assert_eq!(fold(Operator::Exponent, vec![x.clone(), num(3.0), num(2.0)]).unwrap(),
                   vec![x, num(9.0)]);
    }

    #[test]
    fn errors_propagate() {
        assert!(fold(Operator::Add, vec![num(1.0), Expr::from(true)]).is_err());
    }
}
