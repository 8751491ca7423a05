/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing source
/// text: bracket mismatches, missing operands, adjacent operands, malformed
/// definitions and reserved syntax.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while simplifying an
/// expression: operands of the wrong category, tuple dimension mismatches,
/// wrong argument counts and constructs that have no evaluation rules yet.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced by the parse, evaluate, render pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input could not be parsed.
    Parse(ParseError),
    /// The parsed expression could not be evaluated.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
