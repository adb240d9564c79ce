//! Collects the parameter names a statement references.

use std::collections::BTreeSet;

use smol_str::SmolStr;

use crate::ast::visitor::Visitable;
use crate::ast::visitors::{AstNode, CollectingVisitor};
use crate::ast::{Expression, Statement};

/// Returns every `$name` referenced anywhere in `statement`.
pub fn referenced_parameters(statement: &Statement) -> BTreeSet<SmolStr> {
    let mut visitor = CollectingVisitor::new(|node| match node {
        AstNode::Expression(Expression::Parameter(name)) => Some(SmolStr::new(name.as_str())),
        _ => None,
    });
    let _ = statement.accept(&mut visitor);
    visitor.into_items().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::referenced_parameters;
    use crate::ast::Expression;
    use crate::builder::{match_, node, parameter};

    #[test]
    fn finds_parameters_in_where_and_pattern() {
        let n = node("Person")
            .named("n")
            .with_properties([("id", parameter("id"))]);
        let statement = match_(n.clone())
            .where_(n.property("name").is_equal_to(parameter("name")))
            .and(n.property("alias").is_equal_to(parameter("name")))
            .returning([Expression::Asterisk])
            .build();

        let names: Vec<_> = referenced_parameters(&statement).into_iter().collect();
        assert_eq!(names, vec!["id", "name"]);
    }
}
