//! Generic node collection visitor.

use std::ops::ControlFlow;

use crate::ast::visitor::{VisitResult, Visitor};
use crate::ast::{
    Expression, Match, NodePattern, Pattern, RelationshipPattern, Return, SortItem, Where,
};

/// Borrowed AST node view used by [`CollectingVisitor`].
#[derive(Debug, Clone, Copy)]
pub enum AstNode<'a> {
    Match(&'a Match),
    Pattern(&'a Pattern),
    Node(&'a NodePattern),
    Relationship(&'a RelationshipPattern),
    Where(&'a Where),
    Expression(&'a Expression),
    Return(&'a Return),
    SortItem(&'a SortItem),
}

/// Visitor that collects values produced by a node-matching closure.
///
/// The matcher sees nodes in pre-order (on `enter`).
#[derive(Debug)]
pub struct CollectingVisitor<T, F> {
    matcher: F,
    items: Vec<T>,
}

impl<T, F> CollectingVisitor<T, F>
where
    F: for<'a> FnMut(AstNode<'a>) -> Option<T>,
{
    /// Creates a collecting visitor.
    pub fn new(matcher: F) -> Self {
        Self {
            matcher,
            items: Vec::new(),
        }
    }

    /// Returns collected values.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns collected values, consuming the visitor.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    fn collect(&mut self, node: AstNode<'_>) -> VisitResult<()> {
        if let Some(item) = (self.matcher)(node) {
            self.items.push(item);
        }
        ControlFlow::Continue(())
    }
}

impl<T, F> Visitor for CollectingVisitor<T, F>
where
    F: for<'a> FnMut(AstNode<'a>) -> Option<T>,
{
    type Break = ();

    fn enter_match(&mut self, node: &Match) -> VisitResult<()> {
        self.collect(AstNode::Match(node))
    }

    fn enter_pattern(&mut self, node: &Pattern) -> VisitResult<()> {
        self.collect(AstNode::Pattern(node))
    }

    fn enter_node(&mut self, node: &NodePattern) -> VisitResult<()> {
        self.collect(AstNode::Node(node))
    }

    fn enter_relationship(&mut self, node: &RelationshipPattern) -> VisitResult<()> {
        self.collect(AstNode::Relationship(node))
    }

    fn enter_where(&mut self, node: &Where) -> VisitResult<()> {
        self.collect(AstNode::Where(node))
    }

    fn enter_expression(&mut self, node: &Expression) -> VisitResult<()> {
        self.collect(AstNode::Expression(node))
    }

    fn enter_return(&mut self, node: &Return) -> VisitResult<()> {
        self.collect(AstNode::Return(node))
    }

    fn enter_sort_item(&mut self, node: &SortItem) -> VisitResult<()> {
        self.collect(AstNode::SortItem(node))
    }
}

#[cfg(test)]
mod tests {
    use super::{AstNode, CollectingVisitor};
    use crate::ast::visitor::Visitable;
    use crate::builder::{match_, node};

    #[test]
    fn collects_labels_in_pattern_order() {
        let a = node("Person").named("a");
        let b = node("Company").named("b");
        let statement = match_(a.clone().relationship_to(b, ["WORKS_AT"]))
            .returning([a.as_expression()])
            .build();

        let mut visitor = CollectingVisitor::new(|node| match node {
            AstNode::Node(n) => n.labels().first().map(|label| label.to_string()),
            _ => None,
        });
        let _ = statement.accept(&mut visitor);

        assert_eq!(visitor.into_items(), vec!["Person", "Company"]);
    }
}
