use crate::ast::{Category, Operator, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An operator was given an operand of a category it does not accept.
    InvalidOperand {
        /// The operator.
        op:       Operator,
        /// Which operand was rejected.
        side:     Side,
        /// The category of the rejected operand.
        category: Category,
    },
    /// An operator that refuses tuples was given one it cannot pair up.
    TupleOperand {
        /// The operator.
        op:   Operator,
        /// Which operand was the tuple.
        side: Side,
    },
    /// Two tuples of different arity were combined elementwise.
    DimensionMismatch {
        /// Arity of the left tuple.
        left:  usize,
        /// Arity of the right tuple.
        right: usize,
    },
    /// A function was applied to the wrong number of arguments.
    BadArgumentCount {
        /// Number of parameters the function declares.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
    },
    /// A strictly binary operator appeared in a chain of another length.
    StrictlyBinary {
        /// The operator.
        op:    Operator,
        /// Number of operands in the chain.
        found: usize,
    },
    /// A declared construct without evaluation rules.
    Unsupported {
        /// Name of the construct.
        what: &'static str,
    },
    /// Indexed into a collection with no elements.
    EmptyCollection {
        /// The operator.
        op: Operator,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperand { op, side, category } => write!(f,
                                                                 "Evaluation error: operator {op} cannot have {} as {side} operand.",
                                                                 category.description()),
            Self::TupleOperand { op, side } => write!(f,
                                                     "Evaluation error: operator {op} cannot take a tuple as {side} argument."),
            Self::DimensionMismatch { left, right } => {
                write!(f, "Evaluation error: dimensionality mismatch: {left} vs {right}.")
            },
            Self::BadArgumentCount { expected, found } => write!(f,
                                                                "Evaluation error: bad argument count: expected {expected}, found {found}."),
            Self::StrictlyBinary { op, found } => write!(f,
                                                        "Evaluation error: operator {op} is strictly binary, found {found} operands."),
            Self::Unsupported { what } => {
                write!(f, "Evaluation error: {what} is not supported yet.")
            },
            Self::EmptyCollection { op } => {
                write!(f, "Evaluation error: operator {op} cannot index an empty collection.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
