use std::fmt;

use crate::{
    ast::{Expr, Operator},
    util::intern::Interner,
};

/// An expression paired with the names it needs for printing.
///
/// Created by [`Expr::render`]. Printing goes through [`fmt::Display`], so a
/// rendering can be written into any formatter without building
/// intermediate strings.
///
/// By default only the parentheses needed to read the expression back are
/// printed. [`Rendering::force_parentheses`] switches to a canonical form
/// that wraps every operator chain.
pub struct Rendering<'a> {
    expr:    &'a Expr,
    symbols: &'a Interner,
    forced:  bool,
}

impl Rendering<'_> {
    /// Selects whether every operator chain is wrapped in parentheses.
    #[must_use]
    pub const fn force_parentheses(mut self, forced: bool) -> Self {
        self.forced = forced;
        self
    }

    fn child<'b>(&'b self, expr: &'b Expr) -> Rendering<'b> {
        Rendering { expr,
                    symbols: self.symbols,
                    forced: self.forced }
    }

    fn children<'b>(&'b self, items: &'b [Expr]) -> Vec<Rendering<'b>> {
        items.iter().map(|item| self.child(item)).collect()
    }
}

impl Expr {
    /// Prepares the expression for printing with names from `symbols`.
    ///
    /// # Example
    /// ```
    /// use symcalc::{interpreter::parser::core::parse, util::intern::Interner};
    ///
    /// let mut symbols = Interner::new();
    /// let tree = parse("2*(3+4)", &mut symbols).unwrap();
    ///
    /// assert_eq!(tree.render(&symbols).to_string(), "2 * (3 + 4)");
    /// assert_eq!(tree.render(&symbols).force_parentheses(true).to_string(),
    ///            "(2 * (3 + 4))");
    /// ```
    #[must_use]
    pub const fn render<'a>(&'a self, symbols: &'a Interner) -> Rendering<'a> {
        Rendering { expr: self,
                    symbols,
                    forced: false }
    }

    /// How tightly the expression binds when printed as an operand.
    ///
    /// Chains rank as their operator. A negative number reads back as a
    /// negation, so it ranks as subtraction, and a non-finite one prints as a
    /// division. Functions always need brackets inside a chain; other atoms
    /// never do.
    fn print_rank(&self) -> u8 {
        match (self.print_operator(), self) {
            (Some(op), _) => op.precedence(),
            (None, Self::Function { .. }) => 0,
            (None, _) => u8::MAX,
        }
    }

    /// The operator this expression reads back as, if any.
    fn print_operator(&self) -> Option<Operator> {
        match self {
            Self::Chain { op, .. } => Some(*op),
            Self::Number(n) if n.is_negative() => Some(Operator::Sub),
            Self::Number(n) if !n.is_finite() => Some(Operator::Div),
            _ => None,
        }
    }
}

/// Whether `operand` needs parentheses inside a chain of `parent`.
fn needs_parentheses(parent: Operator, operand: &Expr, forced: bool) -> bool {
    if forced {
        return matches!(operand, Expr::Number(n) if n.is_negative() || !n.is_finite())
               || matches!(operand, Expr::Function { .. });
    }
    operand.print_rank() < parent.precedence() || operand.print_operator() == Some(parent)
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Rendering<'_>]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Rendering<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.expr {
            Expr::Undefined => write!(f, "∅"),
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Boolean(b) => write!(f, "{b}"),
            Expr::Variable(symbol) => write!(f, "{}", self.symbols.text_of(*symbol).unwrap_or("?")),
            Expr::Array(items) => {
                write!(f, "[")?;
                write_list(f, &self.children(items))?;
                write!(f, "]")
            },
            Expr::Tuple(items) => {
                write!(f, "(")?;
                write_list(f, &self.children(items))?;
                write!(f, ")")
            },
            Expr::Parenthetical(None) => write!(f, "()"),
            Expr::Parenthetical(Some(inner)) => {
                if self.forced {
                    write!(f, "{}", self.child(inner))
                } else {
                    write!(f, "({})", self.child(inner))
                }
            },
            Expr::Function { params, body } => {
                let names: Vec<&str> = params.iter()
                                             .map(|p| self.symbols.text_of(*p).unwrap_or("?"))
                                             .collect();
                match &names[..] {
                    [single] => write!(f, "{single} -> {}", self.child(body)),
                    _ => write!(f, "({}) -> {}", names.join(", "), self.child(body)),
                }
            },
            Expr::Construct { kind, operands } => {
                write!(f, "{}(", kind.name())?;
                write_list(f, &self.children(operands))?;
                write!(f, ")")
            },
            Expr::Chain { op, operands } => {
                if self.forced {
                    write!(f, "(")?;
                }
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {op} ")?;
                    }
                    if needs_parentheses(*op, operand, self.forced) {
                        write!(f, "({})", self.child(operand))?;
                    } else {
                        write!(f, "{}", self.child(operand))?;
                    }
                }
                if self.forced {
                    write!(f, ")")?;
                }
                Ok(())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::Construct, interpreter::parser::core::parse};

    fn round_trip(source: &str) -> String {
        let mut symbols = Interner::new();
        let tree = parse(source, &mut symbols).unwrap();
        tree.render(&symbols).to_string()
    }

    fn forced(source: &str) -> String {
        let mut symbols = Interner::new();
        let tree = parse(source, &mut symbols).unwrap();
        tree.render(&symbols).force_parentheses(true).to_string()
    }

    #[test]
    fn minimal_parentheses() {
        assert_eq!(round_trip("2*(3+4)"), "2 * (3 + 4)");
        assert_eq!(round_trip("2*3+4"), "2 * 3 + 4");
        assert_eq!(round_trip("a-(b-c)"), "a - (b - c)");
        assert_eq!(round_trip("a+(b+c)"), "a + (b + c)");
        assert_eq!(round_trip("x/(2*y)"), "x / (2 * y)");
        assert_eq!(round_trip("x*(a/b)"), "x * a / b");
    }

    #[test]
    fn negative_numbers_read_back_as_negations() {
        let mut symbols = Interner::new();
        let x = Expr::Variable(symbols.intern("x"));
        let times = Expr::chain(Operator::Mul, vec![x.clone(), Expr::from(-3.0)]);
        let plus = Expr::chain(Operator::Add, vec![x, Expr::from(-3.0)]);
        assert_eq!(times.render(&symbols).to_string(), "x * (-3)");
        assert_eq!(plus.render(&symbols).to_string(), "x + -3");
        assert_eq!(plus.render(&symbols).force_parentheses(true).to_string(), "(x + (-3))");
    }

    #[test]
    fn zero_and_non_finite_numbers_read_back() {
        let mut symbols = Interner::new();
        let x = Expr::Variable(symbols.intern("x"));
        let zero = Expr::chain(Operator::Mul, vec![Expr::from(-0.0), x.clone()]);
        assert_eq!(zero.render(&symbols).to_string(), "0 * x");

        let power = Expr::chain(Operator::Exponent, vec![x.clone(), Expr::from(f64::INFINITY)]);
        assert_eq!(power.render(&symbols).to_string(), "x ^ (1 / 0)");
        let ratio = Expr::chain(Operator::Div, vec![Expr::from(f64::INFINITY), x.clone()]);
        assert_eq!(ratio.render(&symbols).to_string(), "(1 / 0) / x");
        let sum = Expr::chain(Operator::Add, vec![x, Expr::from(f64::NEG_INFINITY)]);
        assert_eq!(sum.render(&symbols).force_parentheses(true).to_string(),
                   "(x + (-1 / 0))");
    }

    #[test]
    fn forced_mode_wraps_every_chain() {
        assert_eq!(forced("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(forced("[1 + 2, x]"), "[(1 + 2), x]");
        assert_eq!(forced("7"), "7");
    }

    #[test]
    fn leaves_and_collections() {
        assert_eq!(round_trip("[1, true, (x, 2.5)]"), "[1, true, (x, 2.5)]");
        assert_eq!(round_trip("-x"), "∅ - x");
        assert_eq!(round_trip("[1,,]"), "[1, ∅, ∅]");
    }

    #[test]
    fn functions_and_constructs() {
        let mut symbols = Interner::new();
        let (x, y) = (symbols.intern("x"), symbols.intern("y"));
        let body = parse("x * y", &mut symbols).unwrap();
        let pair = Expr::function(vec![x, y], body.clone());
        let single = Expr::function(vec![x], body);
        assert_eq!(pair.render(&symbols).to_string(), "(x, y) -> x * y");

        let applied = Expr::chain(Operator::Call, vec![single, Expr::from(2.0)]);
        assert_eq!(applied.render(&symbols).to_string(), "(x -> x * y) # 2");

        let sine = Expr::Construct { kind:     Construct::Sine,
                                     operands: vec![Expr::Variable(x)], };
        assert_eq!(sine.render(&symbols).to_string(), "Sine(x)");
        assert_eq!(Expr::Parenthetical(None).render(&symbols).to_string(), "()");
    }
}
