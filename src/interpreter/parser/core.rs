use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::{TokenTree, tokenize}, parser::binary::parse_level},
    util::intern::Interner,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on nesting of brackets and prefix minuses.
pub const MAX_DEPTH: usize = 256;

/// Parses source text into an expression tree.
///
/// Tokenizes `source`, interning identifiers into `symbols`, and parses the
/// resulting token trees. Nesting is limited to [`MAX_DEPTH`].
///
/// # Errors
/// Returns a [`ParseError`] for malformed input. No partial tree is returned.
///
/// # Example
/// ```
/// use symcalc::{interpreter::parser::core::parse, util::intern::Interner};
///
/// let mut symbols = Interner::new();
///
/// assert!(parse("2 * (3 + x)", &mut symbols).is_ok());
/// assert!(parse("2 +", &mut symbols).is_err());
/// ```
pub fn parse(source: &str, symbols: &mut Interner) -> ParseResult<Expr> {
    parse_with_depth(source, symbols, MAX_DEPTH)
}

/// Like [`parse`], with an explicit nesting limit.
pub fn parse_with_depth(source: &str,
                        symbols: &mut Interner,
                        max_depth: usize)
                        -> ParseResult<Expr> {
    let tokens = tokenize(source, symbols, max_depth)?;
    parse_tokens(&tokens)
}

/// Parses a full expression from token trees.
///
/// This is the entry point for expression parsing. It begins at the loosest
/// precedence level, `|`, and descends one operator at a time.
///
/// # Errors
/// `ExpectedExpression` for an empty sequence; otherwise whatever the levels
/// below report.
pub fn parse_tokens(tokens: &[TokenTree]) -> ParseResult<Expr> {
    parse_level(tokens, 0)
}
