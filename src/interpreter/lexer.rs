use logos::Logos;

use crate::{
    ast::Operator,
    error::ParseError,
    interpreter::parser::core::ParseResult,
    util::intern::{Interner, Symbol},
};

/// Represents a flat lexical token in the source input.
///
/// Brackets are still separate tokens at this stage; [`tokenize`] groups
/// them into [`TokenTree`]s. Characters no rule matches are skipped.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'s> {
    /// Numeric literal tokens: digits with at most one `.`, such as `3`,
    /// `3.14`, `3.` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// Identifier tokens: letters and underscores, such as `x` or `rate_a`.
    #[regex(r"[a-zA-Z_]+", |lex| lex.slice())]
    Identifier(&'s str),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `@`
    #[token("@")]
    At,
    /// `#`
    #[token("#")]
    Hash,
    /// `=`
    #[token("=")]
    Equals,
    /// `~`
    #[token("~")]
    Tilde,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
}

/// Parses a numeric literal from the current token slice.
fn parse_number<'s>(lex: &logos::Lexer<'s, Token<'s>>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// The three bracket kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// `( )`
    Round,
    /// `[ ]`
    Square,
    /// `{ }`
    Curly,
}

impl std::fmt::Display for Bracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Round => write!(f, "parentheses"),
            Self::Square => write!(f, "square brackets"),
            Self::Curly => write!(f, "curly brackets"),
        }
    }
}

/// A token with bracket groups nested inside it.
///
/// The parser treats a [`TokenTree::Group`] as a single opaque atom at the
/// level it appears in and only looks inside when it parses that atom.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenTree {
    /// An infix operator token.
    Operator(Operator),
    /// A list separator.
    Comma,
    /// An identifier, interned.
    Identifier(Symbol),
    /// A number literal.
    Number(f64),
    /// A boolean literal.
    Bool(bool),
    /// A bracketed group and its recursively grouped contents.
    Group {
        /// The bracket kind.
        bracket: Bracket,
        /// The grouped contents; never empty.
        tokens:  Vec<Self>,
    },
}

/// Maps a flat token to its operator, if it is one.
///
/// # Example
/// ```
/// use symcalc::{
///     ast::Operator,
///     interpreter::lexer::{Token, token_to_operator},
/// };
///
/// assert_eq!(token_to_operator(&Token::Hash), Some(Operator::Call));
/// assert_eq!(token_to_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: &Token<'_>) -> Option<Operator> {
    Some(match token {
        Token::Plus => Operator::Add,
        Token::Minus => Operator::Sub,
        Token::Star => Operator::Mul,
        Token::Slash => Operator::Div,
        Token::Caret => Operator::Exponent,
        Token::At => Operator::Index,
        Token::Hash => Operator::Call,
        Token::Equals => Operator::Equal,
        Token::Tilde => Operator::Not,
        Token::Ampersand => Operator::And,
        Token::Pipe => Operator::Or,
        Token::Less => Operator::Less,
        Token::Greater => Operator::Greater,
        Token::LessEqual => Operator::LessEqual,
        Token::GreaterEqual => Operator::GreaterEqual,
        _ => return None,
    })
}

const fn opening_bracket(token: &Token<'_>) -> Option<Bracket> {
    match token {
        Token::LParen => Some(Bracket::Round),
        Token::LBracket => Some(Bracket::Square),
        Token::LBrace => Some(Bracket::Curly),
        _ => None,
    }
}

const fn closing_bracket(token: &Token<'_>) -> Option<Bracket> {
    match token {
        Token::RParen => Some(Bracket::Round),
        Token::RBracket => Some(Bracket::Square),
        Token::RBrace => Some(Bracket::Curly),
        _ => None,
    }
}

/// Tokenizes `source` into a sequence of token trees.
///
/// Each bracket group becomes one [`TokenTree::Group`] holding its own
/// contents. A closing bracket only closes the innermost open group, and only
/// if the kinds match, so `([)]` is rejected instead of being paired up by
/// character. Identifiers are interned into `symbols`.
///
/// # Parameters
/// - `source`: The text to tokenize.
/// - `symbols`: The interner receiving identifier names.
/// - `max_depth`: The deepest allowed nesting. Every bracket group and every
///   prefix minus in a row counts as one level, since each of them nests the
///   parsed tree one level deeper.
///
/// # Errors
/// - `UnclosedBracket` if the input ends inside a group.
/// - `UnmatchedBracket` for a closing bracket with no matching opener.
/// - `EmptyBracket` for a group with no tokens inside.
/// - `NestingTooDeep` if groups and prefix minuses nest deeper than
///   `max_depth`.
///
/// # Example
/// ```
/// use symcalc::{
///     interpreter::lexer::{Bracket, TokenTree, tokenize},
///     util::intern::Interner,
/// };
///
/// let mut symbols = Interner::new();
/// let tokens = tokenize("[1, 2]", &mut symbols, 16).unwrap();
///
/// assert!(matches!(&tokens[..], [TokenTree::Group { bracket: Bracket::Square, tokens }]
///                               if tokens.len() == 3));
/// ```
pub fn tokenize(source: &str,
                symbols: &mut Interner,
                max_depth: usize)
                -> ParseResult<Vec<TokenTree>> {
    let mut open: Vec<(Bracket, Vec<TokenTree>, usize)> = Vec::new();
    let mut current = Vec::new();
    // Nesting of the enclosing groups, counting each group and the prefix
    // minuses in front of it.
    let mut depth = 0;
    // Consecutive `-` tokens at the current position.
    let mut minuses = 0;

    for token in Token::lexer(source) {
        let Ok(token) = token else {
            continue;
        };

        if let Some(bracket) = opening_bracket(&token) {
            if depth + minuses >= max_depth {
                return Err(ParseError::NestingTooDeep { limit: max_depth });
            }
            open.push((bracket, std::mem::take(&mut current), minuses));
            depth += minuses + 1;
            minuses = 0;
            continue;
        }

        if let Some(bracket) = closing_bracket(&token) {
            let Some((opened, outer, outer_minuses)) = open.pop() else {
                return Err(ParseError::UnmatchedBracket { kind: bracket });
            };
            if opened != bracket {
                return Err(ParseError::UnmatchedBracket { kind: bracket });
            }
            if current.is_empty() {
                return Err(ParseError::EmptyBracket { kind: opened });
            }
            depth -= outer_minuses + 1;
            minuses = 0;
            let tokens = std::mem::replace(&mut current, outer);
            current.push(TokenTree::Group { bracket: opened,
                                            tokens });
            continue;
        }

        if token == Token::Minus {
            minuses += 1;
            if depth + minuses > max_depth {
                return Err(ParseError::NestingTooDeep { limit: max_depth });
            }
        } else {
            minuses = 0;
        }

        current.push(match token {
                         Token::Number(n) => TokenTree::Number(n),
                         Token::Bool(b) => TokenTree::Bool(b),
                         Token::Identifier(name) => TokenTree::Identifier(symbols.intern(name)),
                         Token::Comma => TokenTree::Comma,
                         other => match token_to_operator(&other) {
                             Some(op) => TokenTree::Operator(op),
                             None => continue,
                         },
                     });
    }

    if let Some((opened, ..)) = open.pop() {
        return Err(ParseError::UnclosedBracket { kind: opened });
    }

    Ok(current)
}
