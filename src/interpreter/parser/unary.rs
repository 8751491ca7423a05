use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Bracket, TokenTree},
        parser::{
            binary::{SUB_LEVEL, parse_level},
            core::ParseResult,
            utils::parse_comma_separated,
        },
    },
    util::num::Real,
};

/// Parses a prefix minus.
///
/// `tokens` starts with `-`. The rest is parsed from the subtraction level,
/// so the minus binds to the whole tighter-binding operand that follows:
/// `2 * -x ^ 2` is `2 * (∅ - x ^ 2)`.
///
/// # Errors
/// `ExpectedExpression` if nothing follows the minus.
pub(in crate::interpreter::parser) fn parse_negation(tokens: &[TokenTree]) -> ParseResult<Expr> {
    let rest = &tokens[1..];
    if rest.is_empty() {
        return Err(ParseError::ExpectedExpression);
    }
    Ok(Expr::negate(parse_level(rest, SUB_LEVEL)?))
}

/// Parses an atom: a literal, a variable or a bracket group.
///
/// Grammar:
/// ```text
///     atom := number | "true" | "false" | identifier
///           | "(" list ")" | "[" list "]"
/// ```
///
/// Round brackets holding a single item are plain grouping and yield that
/// item; with a comma they build a tuple. Square brackets always build an
/// array.
///
/// # Parameters
/// - `tokens`: What is left once every operator has been split off.
///
/// # Returns
/// The atom's expression.
///
/// # Errors
/// - `ExpectedExpression` if there is no atom.
/// - `InvalidAdjacentTokens` for several tokens with no operator between.
/// - `UnsupportedBracket` for curly brackets.
pub(in crate::interpreter::parser) fn parse_atom(tokens: &[TokenTree]) -> ParseResult<Expr> {
    let token = match tokens {
        [] => return Err(ParseError::ExpectedExpression),
        [token] => token,
        _ => return Err(ParseError::InvalidAdjacentTokens),
    };

    match token {
        TokenTree::Number(n) => Ok(Expr::Number(Real::new(*n))),
        TokenTree::Bool(b) => Ok(Expr::Boolean(*b)),
        TokenTree::Identifier(symbol) => Ok(Expr::Variable(*symbol)),
        TokenTree::Group { bracket: Bracket::Round,
                           tokens, } => {
            let mut items = parse_comma_separated(tokens)?;
            if items.len() == 1 {
                Ok(items.remove(0))
            } else {
                Ok(Expr::Tuple(items))
            }
        },
        TokenTree::Group { bracket: Bracket::Square,
                           tokens, } => Ok(Expr::Array(parse_comma_separated(tokens)?)),
        TokenTree::Group { bracket: Bracket::Curly,
                           .. } => Err(ParseError::UnsupportedBracket { kind: Bracket::Curly }),
        TokenTree::Operator(_) | TokenTree::Comma => Err(ParseError::ExpectedExpression),
    }
}
