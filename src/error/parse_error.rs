use crate::interpreter::lexer::Bracket;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// An opening bracket was never closed.
    UnclosedBracket {
        /// The kind of the bracket left open.
        kind: Bracket,
    },
    /// A closing bracket did not match the innermost open bracket.
    UnmatchedBracket {
        /// The kind of the closing bracket.
        kind: Bracket,
    },
    /// A bracket pair with nothing inside.
    EmptyBracket {
        /// The kind of the empty pair.
        kind: Bracket,
    },
    /// A bracket kind the grammar reserves but does not implement.
    UnsupportedBracket {
        /// The reserved bracket kind.
        kind: Bracket,
    },
    /// An operand was required but the input ended or an operator followed.
    ExpectedExpression,
    /// Two operands followed each other without an operator in between.
    InvalidAdjacentTokens,
    /// Brackets or runs of prefix minuses nested deeper than the configured
    /// limit.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
    },
    /// A definition did not have the form `name = expr` or
    /// `name(a, b) = expr`.
    InvalidDefinition {
        /// What was wrong with the definition.
        details: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnclosedBracket { kind } => write!(f, "Syntax error: unclosed {kind}."),
            Self::UnmatchedBracket { kind } => {
                write!(f, "Syntax error: unmatched closing {kind}.")
            },
            Self::EmptyBracket { kind } => write!(f, "Syntax error: nothing in {kind}."),
            Self::UnsupportedBracket { kind } => {
                write!(f, "Syntax error: {kind} are not supported yet.")
            },
            Self::ExpectedExpression => write!(f, "Syntax error: expected expression."),
            Self::InvalidAdjacentTokens => {
                write!(f, "Syntax error: invalid adjacent non-operator tokens.")
            },
            Self::NestingTooDeep { limit } => {
                write!(f,
                       "Syntax error: brackets or prefix minuses nested deeper than {limit} \
                        levels.")
            },
            Self::InvalidDefinition { details } => {
                write!(f, "Syntax error: invalid definition: {details}. Example: f(x) = x ^ 2")
            },
        }
    }
}

impl std::error::Error for ParseError {}
