use std::collections::{BTreeMap, BTreeSet};

use crate::{
    ast::{Expr, Operator},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::intern::Symbol,
};

impl Expr {
    /// Replaces bound variables with copies of their bindings.
    ///
    /// Function values are copied untouched: their parameters shadow every
    /// outer name, and free names in their bodies stay free.
    ///
    /// # Example
    /// ```
    /// use std::collections::BTreeMap;
    ///
    /// use symcalc::{interpreter::parser::core::parse, util::intern::Interner};
    ///
    /// let mut symbols = Interner::new();
    /// let tree = parse("x * (y + x)", &mut symbols).unwrap();
    /// let bindings = BTreeMap::from([(symbols.intern("x"), parse("2", &mut symbols).unwrap())]);
    ///
    /// let result = tree.substitute(&bindings).evaluate().unwrap();
    ///
    /// assert_eq!(result.render(&symbols).to_string(), "2 * (y + 2)");
    /// ```
    #[must_use]
    pub fn substitute(&self, bindings: &BTreeMap<Symbol, Self>) -> Self {
        let all = |items: &[Self]| -> Vec<Self> {
            items.iter().map(|item| item.substitute(bindings)).collect()
        };

        match self {
            Self::Variable(symbol) => bindings.get(symbol).cloned().unwrap_or_else(|| self.clone()),
            Self::Array(items) => Self::Array(all(items)),
            Self::Tuple(items) => Self::Tuple(all(items)),
            Self::Parenthetical(inner) => {
                Self::Parenthetical(inner.as_ref().map(|inner| Box::new(inner.substitute(bindings))))
            },
            Self::Chain { op, operands } => Self::chain(*op, all(operands)),
            Self::Construct { kind, operands } => Self::Construct { kind:     *kind,
                                                                    operands: all(operands), },
            Self::Undefined
            | Self::Number(_)
            | Self::Boolean(_)
            | Self::Function { .. } => self.clone(),
        }
    }

    /// Collects the variables in the expression.
    ///
    /// Function values report nothing, matching [`Expr::substitute`], which
    /// never reaches into them.
    #[must_use]
    pub fn find_vars(&self) -> BTreeSet<Symbol> {
        let mut vars = BTreeSet::new();
        self.collect_vars(&mut vars);
        vars
    }

    fn collect_vars(&self, vars: &mut BTreeSet<Symbol>) {
        match self {
            Self::Variable(symbol) => {
                vars.insert(*symbol);
            },
            Self::Function { .. } => {},
            _ => {
                for child in self.children() {
                    child.collect_vars(vars);
                }
            },
        }
    }
}

/// Binds one parameter per element of an argument, or the argument itself if
/// there is a single parameter.
///
/// `argument` is any expression standing for the whole argument, and
/// elements are reached as `argument @ i`.
fn bind(params: &[Symbol], argument: &Expr) -> BTreeMap<Symbol, Expr> {
    if let [param] = params {
        return BTreeMap::from([(*param, argument.clone())]);
    }
    params.iter()
          .enumerate()
          .map(|(i, param)| {
              #[allow(clippy::cast_precision_loss)]
              let position = Expr::from(i as f64);
              (*param, Expr::chain(Operator::Index, vec![argument.clone(), position]))
          })
          .collect()
}

/// Applies a function with `params` and `body` to `argument`.
///
/// - A function argument gives the composition: a function of the
///   argument's parameters that feeds its result to this one.
/// - A tuple is spread over the parameters when its arity matches, or bound
///   as a whole to a single parameter.
/// - Anything else is bound to a single parameter.
///
/// The substituted body is evaluated.
///
/// # Parameters
/// - `params`: The function's parameters.
/// - `body`: The function's body.
/// - `argument`: The reduced argument.
///
/// # Returns
/// The evaluated result, or the composed function.
///
/// # Errors
/// - `BadArgumentCount` if the argument does not match the parameter count.
/// - Any error from evaluating the body.
pub fn apply(params: &[Symbol], body: &Expr, argument: &Expr) -> EvalResult<Expr> {
    match argument {
        Expr::Function { params: inner_params,
                         .. } => {
            let inner_vars: Vec<Expr> = inner_params.iter().map(|&q| Expr::Variable(q)).collect();
            let input = match &inner_vars[..] {
                [single] => single.clone(),
                _ => Expr::Tuple(inner_vars),
            };
            let inner_result = Expr::chain(Operator::Call, vec![argument.clone(), input]);
            let composed = body.substitute(&bind(params, &inner_result)).evaluate()?;
            Ok(Expr::function(inner_params.clone(), composed))
        },
        Expr::Tuple(items) if params.len() != 1 => {
            if items.len() != params.len() {
                return Err(RuntimeError::BadArgumentCount { expected: params.len(),
                                                            found:    items.len(), });
            }
            body.substitute(&bind(params, argument)).evaluate()
        },
        _ => {
            if params.len() != 1 {
                return Err(RuntimeError::BadArgumentCount { expected: params.len(),
                                                            found:    1, });
            }
            body.substitute(&bind(params, argument)).evaluate()
        },
    }
}
