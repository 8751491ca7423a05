use crate::{
    ast::{Associativity, Expr, Operator},
    error::RuntimeError,
    interpreter::evaluator::{binary::core::binary_op, nary::fold},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Expr {
    /// Simplifies the expression as far as its values allow.
    ///
    /// Collections evaluate their elements, groupings unwrap and operator
    /// chains fold adjacent values. Variables are left alone, so the result
    /// may still be symbolic: `2 + 3 + x` evaluates to `5 + x`.
    ///
    /// The expression itself is never modified.
    ///
    /// # Returns
    /// The simplified expression.
    ///
    /// # Errors
    /// - `Unsupported` for constructs and operators without evaluation rules.
    /// - `StrictlyBinary` for an equality chain that is not a pair.
    /// - Any error of the operators applied while folding.
    ///
    /// # Example
    /// ```
    /// use symcalc::{interpreter::parser::core::parse, util::intern::Interner};
    ///
    /// let mut symbols = Interner::new();
    /// let tree = parse("(1, 2) * 3", &mut symbols).unwrap();
    ///
    /// assert!(tree.evaluate().is_err());
    ///
    /// let tree = parse("[1, 2] * 3", &mut symbols).unwrap();
    /// let result = tree.evaluate().unwrap();
    ///
    /// assert_eq!(result.render(&symbols).to_string(), "[3, 6]");
    /// ```
    pub fn evaluate(&self) -> EvalResult<Self> {
        match self {
            Self::Undefined
            | Self::Number(_)
            | Self::Boolean(_)
            | Self::Variable(_)
            | Self::Function { .. } => Ok(self.clone()),
            Self::Array(items) => Ok(Self::Array(evaluate_all(items)?)),
            Self::Tuple(items) => Ok(Self::Tuple(evaluate_all(items)?)),
            Self::Parenthetical(inner) => match inner {
                Some(inner) => inner.evaluate(),
                None => Ok(Self::Undefined),
            },
            Self::Construct { kind, .. } => Err(RuntimeError::Unsupported { what: kind.name() }),
            Self::Chain { op, operands } => evaluate_chain(*op, operands),
        }
    }
}

fn evaluate_all(items: &[Expr]) -> EvalResult<Vec<Expr>> {
    items.iter().map(Expr::evaluate).collect()
}

/// Evaluates a chain of one operator.
///
/// Non-associative operators only take pairs; everything else goes through
/// [`fold`].
fn evaluate_chain(op: Operator, operands: &[Expr]) -> EvalResult<Expr> {
    let info = op.info();
    if info.apply.is_none() {
        return Err(RuntimeError::Unsupported { what: info.name });
    }

    if info.associativity == Associativity::Non {
        let [a, b] = operands else {
            return Err(RuntimeError::StrictlyBinary { op,
                                                      found: operands.len() });
        };
        let (a, b) = (a.evaluate()?, b.evaluate()?);
        if a.is_foldable() && b.is_foldable() {
            return binary_op(op, &a, &b);
        }
        return Ok(Expr::chain(op, vec![a, b]));
    }

    let mut remaining = fold(op, evaluate_all(operands)?)?;
    if remaining.len() == 1
       && let Some(only) = remaining.pop()
    {
        return Ok(only);
    }
    Ok(Expr::chain(op, remaining))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::Construct,
        interpreter::parser::core::parse,
        util::intern::Interner,
    };

    fn eval(source: &str) -> (EvalResult<Expr>, Interner) {
        let mut symbols = Interner::new();
        let tree = parse(source, &mut symbols).unwrap();
        (tree.evaluate(), symbols)
    }

    fn eval_text(source: &str) -> String {
        let (result, symbols) = eval(source);
        result.unwrap().render(&symbols).to_string()
    }

    #[test]
    fn numeric_folding() {
        assert_eq!(eval_text("2+3"), "5");
        assert_eq!(eval_text("2 * (3 + 4)"), "14");
        assert_eq!(eval_text("-2 ^ 2"), "-4");
        assert_eq!(eval_text("2 ^ -1"), "0.5");
    }

    #[test]
    fn partial_folding() {
        assert_eq!(eval_text("2+3+x"), "5 + x");
        assert_eq!(eval_text("x+2+3"), "x + 5");
        assert_eq!(eval_text("x - 2 - 3"), "x - 2 - 3");
        assert_eq!(eval_text("10 - 2 - x"), "8 - x");
    }

    #[test]
    fn equality() {
        assert_eq!(eval_text("1 + 1 = 2"), "true");
        assert_eq!(eval_text("x = 2"), "x = 2");
        assert_eq!(eval("1 = 1 = 1").0,
                   Err(RuntimeError::StrictlyBinary { op:    Operator::Equal,
                                                      found: 3, }));
    }

    #[test]
    fn collections() {
        assert_eq!(eval_text("[10,20,30]@-1"), "30");
        assert_eq!(eval_text("(1, 2) + (3, 4)"), "(4, 6)");
        assert_eq!(eval_text("[1, 2] + [10, 20]"), "[11, 21, 12, 22]");
        assert_eq!(eval("(1,2)+(1,2,3)").0,
                   Err(RuntimeError::DimensionMismatch { left: 2, right: 3 }));
    }

    #[test]
    fn unsupported_nodes() {
        assert_eq!(eval("1 < 2").0, Err(RuntimeError::Unsupported { what: "Less" }));
        let sine = Expr::Construct { kind:     Construct::Sine,
                                     operands: vec![Expr::from(1.0)], };
        assert_eq!(sine.evaluate(), Err(RuntimeError::Unsupported { what: "Sine" }));
    }

    #[test]
    fn groupings_unwrap() {
        let group = Expr::Parenthetical(Some(Box::new(Expr::chain(Operator::Add,
                                                                  vec![Expr::from(1.0),
                                                                       Expr::from(2.0)]))));
        assert_eq!(group.evaluate().unwrap(), Expr::from(3.0));
        assert_eq!(Expr::Parenthetical(None).evaluate().unwrap(), Expr::Undefined);
    }

    #[test]
    fn evaluation_does_not_modify_the_tree() {
        let mut symbols = Interner::new();
        let tree = parse("1 + 2", &mut symbols).unwrap();
        let copy = tree.clone();
        let _ = tree.evaluate();
        assert_eq!(tree, copy);
    }
}
