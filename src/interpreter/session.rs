use std::collections::BTreeMap;

use log::debug;

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        evaluator::core::EvalResult,
        parser::{
            core::{MAX_DEPTH, ParseResult, parse_with_depth},
            statement::{Definition, parse_definition},
        },
    },
    util::intern::{Interner, Symbol},
};

/// Limits and output options of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// The deepest allowed nesting of brackets and prefix minuses.
    pub max_depth:         usize,
    /// Whether results wrap every operator chain in parentheses.
    pub force_parentheses: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { max_depth:         MAX_DEPTH,
               force_parentheses: false, }
    }
}

/// Holds the state shared by a series of inputs.
///
/// A session owns the interner every parsed name goes through, so trees
/// from one session are only meaningful with that session's names. It also
/// stores named definitions, which are substituted into every input before
/// evaluation.
///
/// ## Usage
/// ```
/// use symcalc::interpreter::session::Session;
///
/// let mut session = Session::new();
/// session.define("square(x) = x * x").unwrap();
/// session.define("k = 2 + 1").unwrap();
///
/// assert_eq!(session.run("square # k + y").unwrap(), "9 + y");
/// ```
pub struct Session {
    symbols:     Interner,
    definitions: BTreeMap<Symbol, Expr>,
    config:      SessionConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with the default configuration and no definitions.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates a session with the given configuration.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self { symbols: Interner::new(),
               definitions: BTreeMap::new(),
               config }
    }

    /// The session's configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The interner holding every name this session has seen.
    #[must_use]
    pub const fn symbols(&self) -> &Interner {
        &self.symbols
    }

    /// Parses `source` without evaluating it.
    pub fn parse(&mut self, source: &str) -> ParseResult<Expr> {
        parse_with_depth(source, &mut self.symbols, self.config.max_depth)
    }

    /// Registers a definition.
    ///
    /// `name = expr` binds `name` to the evaluated right-hand side.
    /// `name(a, b) = body` binds `name` to a function. Earlier definitions
    /// are substituted into the new one, except where a parameter shadows
    /// them. A repeated name replaces the old binding.
    ///
    /// # Returns
    /// The symbol of the defined name.
    ///
    /// # Errors
    /// A parse error for a malformed definition, or an evaluation error from
    /// evaluating a value definition.
    pub fn define(&mut self, source: &str) -> Result<Symbol, Error> {
        let definition = parse_definition(source, &mut self.symbols, self.config.max_depth)?;
        let name = definition.name();

        let bound = match definition {
            Definition::Value { value, .. } => self.evaluate(&value)?,
            Definition::Function { params, body, .. } => {
                let mut visible = self.definitions.clone();
                for param in &params {
                    visible.remove(param);
                }
                Expr::function(params, body.substitute(&visible))
            },
        };

        debug!("define: {} bound to {}",
               self.symbols.text_of(name).unwrap_or_default(),
               bound.type_name());
        self.definitions.insert(name, bound);
        Ok(name)
    }

    /// The expression bound to `name`, if any.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&Expr> {
        self.symbols
            .get(name)
            .and_then(|symbol| self.definitions.get(&symbol))
    }

    /// Substitutes the session's definitions into `expr` and evaluates it.
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<Expr> {
        expr.substitute(&self.definitions).evaluate()
    }

    /// Renders `expr` with this session's names.
    #[must_use]
    pub fn render(&self, expr: &Expr, force_parentheses: bool) -> String {
        expr.render(&self.symbols)
            .force_parentheses(force_parentheses)
            .to_string()
    }

    /// Runs one input through the whole pipeline.
    ///
    /// Parses `source`, substitutes definitions, evaluates and renders the
    /// result. Parse errors are reported before anything is evaluated.
    ///
    /// # Errors
    /// The first [`Error`] any stage reports.
    pub fn run(&mut self, source: &str) -> Result<String, Error> {
        let tree = self.parse(source)?;
        debug!("run: parsed {} node", tree.type_name());

        let result = self.evaluate(&tree)?;
        debug!("run: evaluated to {} node", result.type_name());

        Ok(self.render(&result, self.config.force_parentheses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{ParseError, RuntimeError},
        interpreter::lexer::Bracket,
    };

    #[test]
    fn definitions_are_substituted() {
        let mut session = Session::new();
        session.define("a = 4").unwrap();
        assert_eq!(session.run("a * b").unwrap(), "4 * b");
        session.define("a = 5").unwrap();
        assert_eq!(session.run("a * 2").unwrap(), "10");
    }

    #[test]
    fn functions_see_earlier_definitions_but_not_shadowed_ones() {
        let mut session = Session::new();
        session.define("x = 100").unwrap();
        session.define("offset = 1").unwrap();
        session.define("f(x) = x + offset").unwrap();
        assert_eq!(session.run("f # 2").unwrap(), "3");
    }

    #[test]
    fn functions_of_several_parameters() {
        let mut session = Session::new();
        session.define("f(x, y) = x ^ y").unwrap();
        assert_eq!(session.run("f # (2, 10)").unwrap(), "1024");
        assert_eq!(session.run("f # 2"),
                   Err(Error::Runtime(RuntimeError::BadArgumentCount { expected: 2,
                                                                       found:    1, })));
    }

    #[test]
    fn composition() {
        let mut session = Session::new();
        session.define("double(x) = x * 2").unwrap();
        session.define("inc(x) = x + 1").unwrap();
        assert_eq!(session.run("double # inc # 4").unwrap(), "10");
    }

    #[test]
    fn parse_errors_come_first() {
        let mut session = Session::new();
        assert_eq!(session.run("(1 < 2"),
                   Err(Error::Parse(ParseError::UnclosedBracket { kind: Bracket::Round })));
    }

    #[test]
    fn configuration_is_honoured() {
        let mut session = Session::with_config(SessionConfig { max_depth:         1,
                                                               force_parentheses: true, });
        assert_eq!(session.run("(x + 1) * 2").unwrap(), "((x + 1) * 2)");
        assert_eq!(session.run("((1))"),
                   Err(Error::Parse(ParseError::NestingTooDeep { limit: 1 })));
    }

    #[test]
    fn long_minus_runs_are_rejected_not_overflowed() {
        let mut session = Session::new();
        assert_eq!(session.run(&format!("{}1", "-".repeat(200))).unwrap(), "1");
        assert_eq!(session.run(&format!("{}1", "-".repeat(3_000))),
                   Err(Error::Parse(ParseError::NestingTooDeep { limit: 256 })));
        assert_eq!(session.run(&format!("{}x{}", "-(".repeat(200), ")".repeat(200))),
                   Err(Error::Parse(ParseError::NestingTooDeep { limit: 256 })));
    }

    #[test]
    fn definition_lookup() {
        let mut session = Session::new();
        session.define("k = 3 * 3").unwrap();
        assert_eq!(session.definition("k"), Some(&Expr::from(9.0)));
        assert_eq!(session.definition("missing"), None);
    }
}
