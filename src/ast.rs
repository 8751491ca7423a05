use crate::{
    interpreter::evaluator::{binary::scalar, core::EvalResult},
    util::{intern::Symbol, num::Real},
};

/// The coarse runtime kind of an expression.
///
/// Operators declare which categories they accept on each side; the
/// dispatcher broadcasts over arrays and tuples an operator does not accept
/// and rejects the other mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// The undefined expression.
    Nothing,
    /// A number.
    Number,
    /// A boolean.
    Boolean,
    /// An array.
    Array,
    /// A tuple.
    Tuple,
    /// A function.
    Function,
    /// Anything still symbolic: variables, operator chains that could not be
    /// folded, groupings and unsupported constructs.
    Symbolic,
}

impl Category {
    /// The bit for this category, or no bits for symbolic expressions.
    #[must_use]
    pub const fn mask(self) -> Categories {
        match self {
            Self::Nothing => Categories::NOTHING,
            Self::Number => Categories::NUMBER,
            Self::Boolean => Categories::BOOLEAN,
            Self::Array => Categories::ARRAY,
            Self::Tuple => Categories::TUPLE,
            Self::Function => Categories::FUNCTION,
            Self::Symbolic => Categories::NONE,
        }
    }

    /// Describes the category with an article, for messages.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Nothing => "nothing",
            Self::Number => "a number",
            Self::Boolean => "a boolean",
            Self::Array => "an array",
            Self::Tuple => "a tuple",
            Self::Function => "a function",
            Self::Symbolic => "an unevaluated expression",
        }
    }
}

/// A set of [`Category`] values, stored as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Categories(u8);

impl Categories {
    pub const NONE: Self = Self(0);
    pub const NOTHING: Self = Self(1 << 1);
    pub const NUMBER: Self = Self(1 << 2);
    pub const BOOLEAN: Self = Self(1 << 3);
    pub const ARRAY: Self = Self(1 << 4);
    pub const TUPLE: Self = Self(1 << 5);
    pub const FUNCTION: Self = Self(1 << 6);

    pub const SCALAR: Self = Self::NUMBER.union(Self::BOOLEAN).union(Self::FUNCTION);
    pub const COLLECTION: Self = Self::ARRAY.union(Self::TUPLE);
    pub const SOMETHING: Self = Self::SCALAR.union(Self::COLLECTION);
    pub const ANYTHING: Self = Self::NOTHING.union(Self::SOMETHING);

    /// Both sets combined.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether every category in `other` is in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    /// Whether `category` is in the set.
    #[must_use]
    pub const fn accepts(self, category: Category) -> bool {
        self.contains(category.mask())
    }
}

/// Which operand of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The left operand.
    Left,
    /// The right operand.
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// How a chain of the same operator folds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// Association must be explicit; only pairs are evaluated.
    Non,
    /// `a - b - c` means `(a - b) - c`, but terms cannot be regrouped.
    Left,
    /// `a ^ b ^ c` means `a ^ (b ^ c)`, but terms cannot be regrouped.
    Right,
    /// Any grouping gives the same result, so folding may skip over
    /// symbolic terms.
    Full,
}

/// The signature of an operator's computation on two reduced operands.
pub type ScalarOp = fn(&Expr, &Expr) -> EvalResult<Expr>;

/// Static description of an operator.
///
/// One table entry exists per [`Operator`]; the evaluator, the parser and
/// the printer all read from it instead of special-casing operators.
#[derive(Debug)]
pub struct OperatorInfo {
    /// Node type name, e.g. `Add`.
    pub name:          &'static str,
    /// Infix text, e.g. `+`.
    pub symbol:        &'static str,
    /// Binding strength for printing; higher binds tighter.
    pub precedence:    u8,
    /// Folding direction.
    pub associativity: Associativity,
    /// Informational only: operands are never reordered.
    pub commutative:   bool,
    /// Categories accepted as the left operand.
    pub left:          Categories,
    /// Categories accepted as the right operand.
    pub right:         Categories,
    /// The computation, or `None` for operators without evaluation rules.
    pub apply:         Option<ScalarOp>,
}

/// Represents an infix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`); a missing left operand means negation.
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Exponent,
    /// Equality (`=`)
    Equal,
    /// Indexing (`@`)
    Index,
    /// Function application (`#`)
    Call,
    /// Logical and (`&`)
    And,
    /// Logical or (`|`)
    Or,
    /// Logical not (`~`)
    Not,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

static ADD: OperatorInfo = OperatorInfo { name:          "Add",
                                          symbol:        "+",
                                          precedence:    5,
                                          associativity: Associativity::Full,
                                          commutative:   true,
                                          left:          Categories::NUMBER,
                                          right:         Categories::NUMBER,
                                          apply:         Some(scalar::add), };

static SUB: OperatorInfo = OperatorInfo { name:          "Sub",
                                          symbol:        "-",
                                          precedence:    6,
                                          associativity: Associativity::Left,
                                          commutative:   false,
                                          left:          Categories::NUMBER.union(Categories::NOTHING),
                                          right:         Categories::NUMBER,
                                          apply:         Some(scalar::sub), };

static MUL: OperatorInfo = OperatorInfo { name:          "Mul",
                                          symbol:        "*",
                                          precedence:    7,
                                          associativity: Associativity::Full,
                                          commutative:   true,
                                          left:          Categories::NUMBER,
                                          right:         Categories::NUMBER,
                                          apply:         Some(scalar::mul), };

static DIV: OperatorInfo = OperatorInfo { name:          "Div",
                                          symbol:        "/",
                                          precedence:    8,
                                          associativity: Associativity::Left,
                                          commutative:   false,
                                          left:          Categories::NUMBER,
                                          right:         Categories::NUMBER,
                                          apply:         Some(scalar::div), };

static EXPONENT: OperatorInfo = OperatorInfo { name:          "Exponent",
                                               symbol:        "^",
                                               precedence:    9,
                                               associativity: Associativity::Right,
                                               commutative:   false,
                                               left:          Categories::NUMBER,
                                               right:         Categories::NUMBER,
                                               apply:         Some(scalar::pow), };

static EQUAL: OperatorInfo = OperatorInfo { name:          "Equal",
                                            symbol:        "=",
                                            precedence:    4,
                                            associativity: Associativity::Non,
                                            commutative:   true,
                                            left:          Categories::NUMBER,
                                            right:         Categories::NUMBER,
                                            apply:         Some(scalar::equal), };

static INDEX: OperatorInfo = OperatorInfo { name:          "Index",
                                            symbol:        "@",
                                            precedence:    11,
                                            associativity: Associativity::Right,
                                            commutative:   false,
                                            left:          Categories::COLLECTION,
                                            right:         Categories::NUMBER,
                                            apply:         Some(scalar::index), };

static CALL: OperatorInfo = OperatorInfo { name:          "Call",
                                           symbol:        "#",
                                           precedence:    10,
                                           associativity: Associativity::Full,
                                           commutative:   false,
                                           left:          Categories::FUNCTION,
                                           right:         Categories::SOMETHING,
                                           apply:         Some(scalar::call), };

static AND: OperatorInfo = OperatorInfo { name:          "And",
                                          symbol:        "&",
                                          precedence:    2,
                                          associativity: Associativity::Full,
                                          commutative:   true,
                                          left:          Categories::BOOLEAN,
                                          right:         Categories::BOOLEAN,
                                          apply:         None, };

static OR: OperatorInfo = OperatorInfo { name:          "Or",
                                         symbol:        "|",
                                         precedence:    1,
                                         associativity: Associativity::Full,
                                         commutative:   true,
                                         left:          Categories::BOOLEAN,
                                         right:         Categories::BOOLEAN,
                                         apply:         None, };

static NOT: OperatorInfo = OperatorInfo { name:          "Not",
                                          symbol:        "~",
                                          precedence:    3,
                                          associativity: Associativity::Non,
                                          commutative:   false,
                                          left:          Categories::NOTHING,
                                          right:         Categories::BOOLEAN,
                                          apply:         None, };

static LESS: OperatorInfo = OperatorInfo { name:          "Less",
                                           symbol:        "<",
                                           precedence:    4,
                                           associativity: Associativity::Non,
                                           commutative:   false,
                                           left:          Categories::NUMBER,
                                           right:         Categories::NUMBER,
                                           apply:         None, };

static GREATER: OperatorInfo = OperatorInfo { name:          "Greater",
                                              symbol:        ">",
                                              precedence:    4,
                                              associativity: Associativity::Non,
                                              commutative:   false,
                                              left:          Categories::NUMBER,
                                              right:         Categories::NUMBER,
                                              apply:         None, };

static LESS_EQUAL: OperatorInfo = OperatorInfo { name:          "LessEqual",
                                                 symbol:        "<=",
                                                 precedence:    4,
                                                 associativity: Associativity::Non,
                                                 commutative:   false,
                                                 left:          Categories::NUMBER,
                                                 right:         Categories::NUMBER,
                                                 apply:         None, };

static GREATER_EQUAL: OperatorInfo = OperatorInfo { name:          "GreaterEqual",
                                                    symbol:        ">=",
                                                    precedence:    4,
                                                    associativity: Associativity::Non,
                                                    commutative:   false,
                                                    left:          Categories::NUMBER,
                                                    right:         Categories::NUMBER,
                                                    apply:         None, };

impl Operator {
    /// Operators in the order the parser splits on them, loosest first.
    pub const PARSE_ORDER: [Self; 15] = [Self::Or,
                                         Self::And,
                                         Self::Not,
                                         Self::Equal,
                                         Self::Less,
                                         Self::LessEqual,
                                         Self::Greater,
                                         Self::GreaterEqual,
                                         Self::Add,
                                         Self::Sub,
                                         Self::Mul,
                                         Self::Div,
                                         Self::Exponent,
                                         Self::Call,
                                         Self::Index];

    /// The static descriptor of this operator.
    #[must_use]
    pub fn info(self) -> &'static OperatorInfo {
        match self {
            Self::Add => &ADD,
            Self::Sub => &SUB,
            Self::Mul => &MUL,
            Self::Div => &DIV,
            Self::Exponent => &EXPONENT,
            Self::Equal => &EQUAL,
            Self::Index => &INDEX,
            Self::Call => &CALL,
            Self::And => &AND,
            Self::Or => &OR,
            Self::Not => &NOT,
            Self::Less => &LESS,
            Self::Greater => &GREATER,
            Self::LessEqual => &LESS_EQUAL,
            Self::GreaterEqual => &GREATER_EQUAL,
        }
    }

    /// Printing rank; higher binds tighter.
    #[must_use]
    pub fn precedence(self) -> u8 {
        self.info().precedence
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.info().symbol)
    }
}

/// Declared constructs that have no evaluation rules yet.
///
/// They can be built programmatically and printed, but evaluating one is an
/// [`crate::error::RuntimeError::Unsupported`] error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Construct {
    /// A value with a condition, e.g. `(x, where x > 3)`.
    Restricted,
    /// A group of mutually exclusive restricted values.
    Piecewise,
    /// A derivative with respect to a variable.
    Derivative,
    /// A definite integral.
    DefiniteIntegral,
    /// `cos`
    Cosine,
    /// `sin`
    Sine,
    /// `tan`
    Tangent,
}

impl Construct {
    /// Node type name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Restricted => "Restricted",
            Self::Piecewise => "Piecewise",
            Self::Derivative => "Derivative",
            Self::DefiniteIntegral => "DefiniteIntegral",
            Self::Cosine => "Cosine",
            Self::Sine => "Sine",
            Self::Tangent => "Tangent",
        }
    }
}

/// An expression tree.
///
/// Every `Expr` exclusively owns its subtree; `clone` is a deep copy. Trees
/// are never mutated in place: parsing builds one, and evaluation and
/// substitution return new ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Expr {
    /// The undefined expression, written `∅`. Stands in for elided operands,
    /// as in the left side of a unary minus.
    #[default]
    Undefined,
    /// A number.
    Number(Real),
    /// A boolean.
    Boolean(bool),
    /// A free variable.
    Variable(Symbol),
    /// An ordered collection, written `[a, b]`.
    Array(Vec<Self>),
    /// A fixed-arity group, written `(a, b)`.
    Tuple(Vec<Self>),
    /// Explicit grouping with zero or one child. Evaluation unwraps it.
    Parenthetical(Option<Box<Self>>),
    /// A function of named parameters.
    Function {
        /// Parameter names, in order.
        params: Vec<Symbol>,
        /// The body.
        body:   Box<Self>,
    },
    /// A chain `a op b op c ...` of one operator.
    Chain {
        /// The operator joining the operands.
        op:       Operator,
        /// The operands, in source order.
        operands: Vec<Self>,
    },
    /// A declared construct without evaluation rules.
    Construct {
        /// Which construct.
        kind:     Construct,
        /// Its arguments.
        operands: Vec<Self>,
    },
}

impl From<Real> for Expr {
    fn from(value: Real) -> Self {
        Self::Number(value)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Number(Real::new(value))
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl Expr {
    /// Builds a chain of `op` over `operands`.
    #[must_use]
    pub const fn chain(op: Operator, operands: Vec<Self>) -> Self {
        Self::Chain { op, operands }
    }

    /// Builds `∅ - operand`, the tree a prefix minus parses to.
    #[must_use]
    pub fn negate(operand: Self) -> Self {
        Self::chain(Operator::Sub, vec![Self::Undefined, operand])
    }

    /// Builds a function of `params` returning `body`.
    #[must_use]
    pub fn function(params: Vec<Symbol>, body: Self) -> Self {
        Self::Function { params,
                         body: Box::new(body) }
    }

    /// Whether this is the undefined expression.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// The runtime category used by operand dispatch.
    ///
    /// ## Example
    /// ```
    /// use symcalc::ast::{Category, Expr};
    ///
    /// assert_eq!(Expr::from(2.0).category(), Category::Number);
    /// assert_eq!(Expr::Undefined.category(), Category::Nothing);
    /// ```
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Undefined => Category::Nothing,
            Self::Number(_) => Category::Number,
            Self::Boolean(_) => Category::Boolean,
            Self::Array(_) => Category::Array,
            Self::Tuple(_) => Category::Tuple,
            Self::Function { .. } => Category::Function,
            Self::Variable(_)
            | Self::Parenthetical(_)
            | Self::Chain { .. }
            | Self::Construct { .. } => Category::Symbolic,
        }
    }

    /// Whether the reducer may combine this operand with a neighbour.
    ///
    /// Values are foldable; variables and unreduced operator chains are not.
    #[must_use]
    pub const fn is_foldable(&self) -> bool {
        !matches!(self.category(), Category::Symbolic)
    }

    /// The node type name, e.g. `Number` or `Mul`.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Number(_) => "Number",
            Self::Boolean(_) => "Boolean",
            Self::Variable(_) => "Variable",
            Self::Array(_) => "Array",
            Self::Tuple(_) => "Tuple",
            Self::Parenthetical(_) => "Parenthetical",
            Self::Function { .. } => "Function",
            Self::Chain { op, .. } => op.info().name,
            Self::Construct { kind, .. } => kind.name(),
        }
    }

    /// The ordered children of this node.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Array(items)
            | Self::Tuple(items)
            | Self::Chain { operands: items, .. }
            | Self::Construct { operands: items, .. } => items,
            Self::Parenthetical(Some(inner)) => std::slice::from_ref(inner.as_ref()),
            Self::Function { body, .. } => std::slice::from_ref(body.as_ref()),
            Self::Undefined
            | Self::Number(_)
            | Self::Boolean(_)
            | Self::Variable(_)
            | Self::Parenthetical(None) => &[],
        }
    }

    /// Structural equality.
    ///
    /// Same node types with pairwise `same_as` children; numbers compare
    /// with tolerance, functions also compare their parameter lists.
    ///
    /// ## Example
    /// ```
    /// use symcalc::ast::Expr;
    ///
    /// let a = Expr::from(0.1 + 0.2);
    /// assert!(a.same_as(&Expr::from(0.3)));
    /// assert!(!a.same_as(&Expr::from(true)));
    /// ```
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_masks() {
        assert!(Categories::SCALAR.accepts(Category::Function));
        assert!(!Categories::SCALAR.accepts(Category::Array));
        assert!(Categories::COLLECTION.accepts(Category::Tuple));
        assert!(Categories::ANYTHING.accepts(Category::Nothing));
        assert!(!Categories::SOMETHING.accepts(Category::Nothing));
        assert!(!Categories::ANYTHING.accepts(Category::Symbolic));
    }

    #[test]
    fn precedence_is_a_total_order_over_arithmetic() {
        let ranks: Vec<u8> = [Operator::Equal,
                              Operator::Add,
                              Operator::Sub,
                              Operator::Mul,
                              Operator::Div,
                              Operator::Exponent,
                              Operator::Call,
                              Operator::Index].iter()
                                              .map(|op| op.precedence())
                                              .collect();
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        assert!(Operator::Or.precedence() < Operator::And.precedence());
        assert!(Operator::Not.precedence() < Operator::Less.precedence());
    }

    #[test]
    fn foldable_categories() {
        assert!(Expr::Undefined.is_foldable());
        assert!(Expr::Array(vec![]).is_foldable());
        assert!(!Expr::Parenthetical(None).is_foldable());
        assert!(!Expr::negate(Expr::from(1.0)).is_foldable());
    }

    #[test]
    fn same_as_is_structural() {
        let a = Expr::chain(Operator::Add, vec![Expr::from(1.0), Expr::Undefined]);
        let b = Expr::chain(Operator::Add, vec![Expr::from(1.0), Expr::Undefined]);
        let c = Expr::chain(Operator::Mul, vec![Expr::from(1.0), Expr::Undefined]);
        assert!(a.same_as(&b));
        assert!(!a.same_as(&c));
        assert!(!Expr::Tuple(vec![Expr::from(1.0)]).same_as(&Expr::Array(vec![Expr::from(1.0)])));
    }

    #[test]
    fn type_names_follow_operators() {
        assert_eq!(Expr::negate(Expr::from(1.0)).type_name(), "Sub");
        assert_eq!(Expr::Construct { kind:     Construct::Sine,
                                     operands: vec![], }.type_name(),
                   "Sine");
    }
}
