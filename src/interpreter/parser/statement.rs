use crate::{
    ast::{Expr, Operator},
    error::ParseError,
    interpreter::{
        lexer::{Bracket, TokenTree, tokenize},
        parser::{core::{ParseResult, parse_tokens}, utils::split_on_comma},
    },
    util::intern::{Interner, Symbol},
};

/// A named definition registered in a session.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    /// `name = expr`
    Value {
        /// The bound name.
        name:  Symbol,
        /// The unevaluated right-hand side.
        value: Expr,
    },
    /// `name(a, b) = body`
    Function {
        /// The function name.
        name:   Symbol,
        /// Parameter names, in order.
        params: Vec<Symbol>,
        /// The unevaluated body.
        body:   Expr,
    },
}

impl Definition {
    /// The name this definition binds.
    #[must_use]
    pub const fn name(&self) -> Symbol {
        match self {
            Self::Value { name, .. } | Self::Function { name, .. } => *name,
        }
    }
}

fn invalid(details: &str) -> ParseError {
    ParseError::InvalidDefinition { details: details.to_string() }
}

/// Parses a definition.
///
/// Two forms are accepted:
/// - `name = expr` binds a name to an expression.
/// - `name(a, b) = body` defines a function of the listed parameters.
///
/// Only the first `=` separates the head from the right-hand side, so
/// `is_two(x) = x = 2` defines a function returning an equality.
///
/// # Parameters
/// - `source`: The definition text.
/// - `symbols`: The interner receiving names.
/// - `max_depth`: The deepest allowed bracket nesting.
///
/// # Returns
/// The parsed [`Definition`].
///
/// # Errors
/// - `InvalidDefinition` if the head is not a name or a name followed by a
///   parameter list of distinct names, or if there is no `=`.
/// - Any [`ParseError`] from parsing the right-hand side.
///
/// # Example
/// ```
/// use symcalc::{
///     interpreter::parser::statement::{Definition, parse_definition},
///     util::intern::Interner,
/// };
///
/// let mut symbols = Interner::new();
/// let def = parse_definition("square(x) = x * x", &mut symbols, 16).unwrap();
///
/// assert!(matches!(def, Definition::Function { ref params, .. } if params.len() == 1));
/// assert!(parse_definition("2 = 3", &mut symbols, 16).is_err());
/// ```
pub fn parse_definition(source: &str,
                        symbols: &mut Interner,
                        max_depth: usize)
                        -> ParseResult<Definition> {
    let tokens = tokenize(source, symbols, max_depth)?;
    let Some(eq) = tokens.iter()
                         .position(|t| *t == TokenTree::Operator(Operator::Equal))
    else {
        return Err(invalid("missing `=`"));
    };
    let (head, rest) = (&tokens[..eq], &tokens[eq + 1..]);

    match head {
        [TokenTree::Identifier(name)] => Ok(Definition::Value { name:  *name,
                                                                value: parse_tokens(rest)?, }),
        [TokenTree::Identifier(name),
         TokenTree::Group { bracket: Bracket::Round,
                            tokens: params, }] => {
            let params = parse_params(params)?;
            Ok(Definition::Function { name: *name,
                                      params,
                                      body: parse_tokens(rest)? })
        },
        [] => Err(invalid("expected a name before `=`")),
        _ => Err(invalid("the left-hand side must be a name or a function head")),
    }
}

/// Parses a parameter list: distinct identifiers separated by commas.
fn parse_params(tokens: &[TokenTree]) -> ParseResult<Vec<Symbol>> {
    let mut params = Vec::new();
    for fragment in split_on_comma(tokens) {
        let [TokenTree::Identifier(param)] = fragment else {
            return Err(invalid("parameters must be plain names"));
        };
        if params.contains(param) {
            return Err(invalid("parameter names must be distinct"));
        }
        params.push(*param);
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn define(source: &str) -> ParseResult<Definition> {
        parse_definition(source, &mut Interner::new(), 16)
    }

    #[test]
    fn value_definitions() {
        let mut symbols = Interner::new();
        let def = parse_definition("rate = 2 * 3", &mut symbols, 16).unwrap();
        assert_eq!(def.name(), symbols.get("rate").unwrap());
        assert!(matches!(def, Definition::Value { value: Expr::Chain { op: Operator::Mul, .. }, .. }));
    }

    #[test]
    fn function_definitions() {
        let mut symbols = Interner::new();
        let def = parse_definition("f(x, y) = x = y", &mut symbols, 16).unwrap();
        let Definition::Function { params, body, .. } = def else {
            panic!("expected a function definition");
        };
        assert_eq!(params, vec![symbols.get("x").unwrap(), symbols.get("y").unwrap()]);
        assert_eq!(body.type_name(), "Equal");
    }

    #[test]
    fn malformed_heads() {
        assert!(matches!(define("x + 1"), Err(ParseError::InvalidDefinition { .. })));
        assert!(matches!(define("= 1"), Err(ParseError::InvalidDefinition { .. })));
        assert!(matches!(define("f(1) = 1"), Err(ParseError::InvalidDefinition { .. })));
        assert!(matches!(define("f(x, x) = x"), Err(ParseError::InvalidDefinition { .. })));
        assert!(matches!(define("f[x] = x"), Err(ParseError::InvalidDefinition { .. })));
        assert_eq!(define("x ="), Err(ParseError::ExpectedExpression));
    }
}
