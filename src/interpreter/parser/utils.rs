use crate::{
    ast::{Expr, Operator},
    interpreter::{
        lexer::TokenTree,
        parser::core::{ParseResult, parse_tokens},
    },
};

/// Whether `token` is an operator or a separator, i.e. something an operand
/// cannot end with.
const fn is_separator(token: &TokenTree) -> bool {
    matches!(token, TokenTree::Operator(_) | TokenTree::Comma)
}

/// Whether `tokens` starts with a prefix minus.
pub(in crate::interpreter::parser) fn starts_with_minus(tokens: &[TokenTree]) -> bool {
    matches!(tokens.first(), Some(TokenTree::Operator(Operator::Sub)))
}

/// Splits `tokens` on every occurrence of `op` at this bracket depth.
///
/// Groups are single tokens, so operators inside brackets are never split
/// on. A `-` that directly follows another operator or a comma is a prefix
/// minus belonging to the next operand and is not a split point. The result
/// always has at least one fragment; fragments may be empty.
///
/// # Parameters
/// - `tokens`: The sequence to split.
/// - `op`: The operator to split on.
///
/// # Returns
/// The fragments between split points, in order.
pub(in crate::interpreter::parser) fn split_on_operator(tokens: &[TokenTree],
                                                        op: Operator)
                                                        -> Vec<&[TokenTree]> {
    split_where(tokens, |i, token| {
        *token == TokenTree::Operator(op)
        && (op != Operator::Sub || i == 0 || !is_separator(&tokens[i - 1]))
    })
}

/// Splits `tokens` on every top-level comma.
pub(in crate::interpreter::parser) fn split_on_comma(tokens: &[TokenTree]) -> Vec<&[TokenTree]> {
    split_where(tokens, |_, token| *token == TokenTree::Comma)
}

fn split_where(tokens: &[TokenTree],
               is_split: impl Fn(usize, &TokenTree) -> bool)
               -> Vec<&[TokenTree]> {
    let mut fragments = Vec::new();
    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        if is_split(i, token) {
            fragments.push(&tokens[start..i]);
            start = i + 1;
        }
    }
    fragments.push(&tokens[start..]);
    fragments
}

/// Parses the comma-separated contents of a bracket group.
///
/// Every fragment becomes one element. Gaps, including a trailing one after
/// a final comma, become [`Expr::Undefined`].
///
/// Grammar (simplified): `list := item? ("," item?)*`
///
/// # Parameters
/// - `tokens`: The contents of the group.
///
/// # Returns
/// The parsed elements, at least one.
///
/// # Errors
/// Propagates errors from parsing the elements.
pub(in crate::interpreter::parser) fn parse_comma_separated(tokens: &[TokenTree])
                                                            -> ParseResult<Vec<Expr>> {
    split_on_comma(tokens).into_iter()
                          .map(|fragment| {
                              if fragment.is_empty() {
                                  Ok(Expr::Undefined)
                              } else {
                                  parse_tokens(fragment)
                              }
                          })
                          .collect()
}
