use crate::{
    ast::{Expr, Operator},
    error::ParseError,
    interpreter::{
        lexer::TokenTree,
        parser::{
            unary::{parse_atom, parse_negation},
            utils::{split_on_operator, starts_with_minus},
        },
    },
};

/// Number of precedence levels the parser descends through before atoms.
const LEVELS: usize = Operator::PARSE_ORDER.len();

/// Position of `op` in [`Operator::PARSE_ORDER`].
const fn level_of(op: Operator) -> usize {
    let mut level = 0;
    while level < LEVELS {
        if Operator::PARSE_ORDER[level] as u8 == op as u8 {
            return level;
        }
        level += 1;
    }
    LEVELS
}

/// The level of the binary minus. Fragments below it that start with `-` are
/// negations.
pub(in crate::interpreter::parser) const SUB_LEVEL: usize = level_of(Operator::Sub);

/// Parses `tokens` at precedence level `level` and everything tighter.
///
/// The sequence is split on the level's operator. Each fragment is parsed at
/// the next level. A single fragment is returned as is; several become a
/// [`Expr::Chain`] of the level's operator, in source order.
///
/// Missing operands at the front or in the middle of a chain, as in `-x` or
/// `2 ++ 3`, become [`Expr::Undefined`]. A missing last operand, as in
/// `2 +`, is an error.
///
/// The rule at each level is:
/// `level(n) := level(n + 1)? (op(n) level(n + 1)?)* op(n) level(n + 1)`
///
/// # Parameters
/// - `tokens`: The token trees at the current bracket depth.
/// - `level`: An index into [`Operator::PARSE_ORDER`]; past the end means
///   atoms.
///
/// # Returns
/// The expression tree for `tokens`.
///
/// # Errors
/// - `ExpectedExpression` for an empty sequence or a trailing operator.
/// - Whatever the atoms report.
pub fn parse_level(tokens: &[TokenTree], level: usize) -> Result<Expr, ParseError> {
    if level > SUB_LEVEL && starts_with_minus(tokens) {
        return parse_negation(tokens);
    }

    let Some(&op) = Operator::PARSE_ORDER.get(level) else {
        return parse_atom(tokens);
    };

    let fragments = split_on_operator(tokens, op);
    if let [single] = fragments[..] {
        return parse_level(single, level + 1);
    }

    let last = fragments.len() - 1;
    let operands = fragments.into_iter()
                            .enumerate()
                            .map(|(i, fragment)| match (fragment.is_empty(), i == last) {
                                (true, true) => Err(ParseError::ExpectedExpression),
                                (true, false) => Ok(Expr::Undefined),
                                (false, _) => parse_level(fragment, level + 1),
                            })
                            .collect::<Result<Vec<_>, _>>()?;

    Ok(Expr::chain(op, operands))
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Expr, Operator},
        error::ParseError,
        interpreter::parser::core::parse,
        util::intern::Interner,
    };

    fn parsed(source: &str) -> Result<Expr, ParseError> {
        parse(source, &mut Interner::new())
    }

    fn num(n: f64) -> Expr {
        Expr::from(n)
    }

    #[test]
    fn chains_are_flat() {
        assert_eq!(parsed("1 + 2 + 3").unwrap(),
                   Expr::chain(Operator::Add, vec![num(1.0), num(2.0), num(3.0)]));
    }

    #[test]
    fn tighter_levels_nest_inside_looser() {
        let expected = Expr::chain(Operator::Add,
                                   vec![num(1.0),
                                        Expr::chain(Operator::Mul, vec![num(2.0), num(3.0)])]);
        assert_eq!(parsed("1 + 2 * 3").unwrap(), expected);
    }

    #[test]
    fn leading_minus_gives_undefined_operand() {
        assert_eq!(parsed("-4").unwrap(), Expr::negate(num(4.0)));
        assert_eq!(parsed("1 - -4").unwrap(),
                   Expr::chain(Operator::Sub, vec![num(1.0), Expr::negate(num(4.0))]));
    }

    #[test]
    fn prefix_minus_after_tighter_operator() {
        assert_eq!(parsed("2 ^ -1").unwrap(),
                   Expr::chain(Operator::Exponent, vec![num(2.0), Expr::negate(num(1.0))]));
        assert_eq!(parsed("2 * -x ^ 2").unwrap().children()[1].type_name(), "Sub");
    }

    #[test]
    fn gaps_in_chains() {
        assert_eq!(parsed("2 + + 3").unwrap(),
                   Expr::chain(Operator::Add, vec![num(2.0), Expr::Undefined, num(3.0)]));
        assert_eq!(parsed("2 +"), Err(ParseError::ExpectedExpression));
        assert_eq!(parsed("2 * 3 +"), Err(ParseError::ExpectedExpression));
        assert_eq!(parsed(""), Err(ParseError::ExpectedExpression));
    }

    #[test]
    fn equality_binds_loosest_of_the_arithmetic() {
        let tree = parsed("x + 1 = 3").unwrap();
        assert_eq!(tree.type_name(), "Equal");
        assert_eq!(tree.children()[0].type_name(), "Add");
    }
}
