/// The evaluator module simplifies expression trees.
///
/// The evaluator walks a tree, folds adjacent values in operator chains
/// according to each operator's associativity, broadcasts over arrays and
/// applies functions. Whatever cannot be reduced stays symbolic.
///
/// # Responsibilities
/// - Dispatches operands by category and runs the operator computations.
/// - Reduces chains without reordering their operands.
/// - Substitutes variables and applies or composes functions.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads the raw text and produces token trees: flat tokens for
/// numbers, names and operators, with every bracket pair grouped into a
/// single nested token. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input into tokens, skipping characters it does not know.
/// - Interns identifiers.
/// - Reports unbalanced, mismatched, empty and overly deep brackets.
pub mod lexer;
/// The parser module builds expression trees from token trees.
///
/// The parser splits the tokens on one operator at a time, loosest first,
/// and turns what remains into atoms. It also parses the definition lines a
/// session accepts.
///
/// # Responsibilities
/// - Converts token trees into [`crate::ast::Expr`] values.
/// - Rejects missing operands, adjacent operands and reserved brackets.
pub mod parser;
/// The render module prints expression trees back as text.
///
/// Output reads back as an equivalent tree: parentheses are added where
/// precedence requires them, or around every operator chain on request.
pub mod render;
/// The session module runs the whole pipeline.
///
/// A session owns the interner and the named definitions, and takes each
/// input from text through parsing and evaluation back to text.
pub mod session;
