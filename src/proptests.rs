//! Property-based tests for printing and reading back.

#[cfg(test)]
mod tests {
    use proptest::{prelude::*, sample::select};

    use crate::{ast::Expr, interpreter::session::Session};

    // Numbers, with zero weighted up so products collapse to signed zeros
    fn number() -> impl Strategy<Value = String> {
        prop_oneof![(0u32..12).prop_map(|n| n.to_string()),
                    Just("0".to_string()),
                    select(vec!["0.5", "2.25", "1000000", "0.001"]).prop_map(String::from)]
    }

    fn variable() -> impl Strategy<Value = String> {
        select(vec!["x", "y", "z"]).prop_map(String::from)
    }

    // Source text of random trees over + - * / ^, with prefix minus
    fn arithmetic() -> impl Strategy<Value = String> {
        let leaf = prop_oneof![number(), variable()];
        leaf.prop_recursive(4, 48, 2, |inner| {
                let op = select(vec!["+", "-", "*", "/", "^"]);
                let grouped = (inner.clone(), op.clone(), inner.clone());
                let bare = (inner.clone(), op, inner.clone());
                prop_oneof![grouped.prop_map(|(a, op, b)| format!("({a} {op} {b})")),
                            bare.prop_map(|(a, op, b)| format!("{a} {op} {b}")),
                            inner.clone().prop_map(|a| format!("-({a})")),
                            inner.prop_map(|a| format!("{a} * 0 * -1"))]
            })
    }

    fn has_nan(expr: &Expr) -> bool {
        match expr {
            Expr::Number(n) => n.value().is_nan(),
            other => other.children().iter().any(has_nan),
        }
    }

    fn reads_back(source: &str, forced: bool) -> Result<(), TestCaseError> {
        let mut session = Session::new();
        let tree = session.parse(source)
                          .map_err(|e| TestCaseError::fail(format!("`{source}`: {e}")))?;
        let result = session.evaluate(&tree)
                            .map_err(|e| TestCaseError::fail(format!("`{source}`: {e}")))?;
        prop_assume!(!has_nan(&result));

        let text = session.render(&result, forced);
        let reparsed = session.parse(&text)
                              .map_err(|e| TestCaseError::fail(format!("`{text}`: {e}")))?;
        let again = session.evaluate(&reparsed)
                           .map_err(|e| TestCaseError::fail(format!("`{text}`: {e}")))?;
        prop_assert!(again.same_as(&result),
                     "`{}` printed as `{}` reads back as `{}`",
                     source,
                     text,
                     session.render(&again, forced));
        Ok(())
    }

    proptest! {
        #[test]
        fn minimal_output_reads_back(source in arithmetic()) {
            reads_back(&source, false)?;
        }

        #[test]
        fn forced_output_reads_back(source in arithmetic()) {
            reads_back(&source, true)?;
        }
    }
}
