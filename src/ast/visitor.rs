//! Enter/leave visitor protocol.
//!
//! Every traversable node implements [`Visitable`]. `accept` calls the
//! visitor's `enter_*` hook, dispatches to the owned children in a fixed
//! order, then calls `leave_*`. Absent optional children are skipped without
//! any hook being called (see [`visit_if_present`]).
//!
//! Child order:
//!
//! - `Statement`: clauses in declaration order
//! - `Match`: pattern, then the optional `Where`
//! - `RelationshipChain`: start node, then each relationship and its node
//! - `Return`: projection, `Order`, `Skip`, `Limit`
//! - binary expressions: left operand, operator, right operand
//! - unary expressions: operator first for prefix operators, last for postfix
//!
//! A hook returning `ControlFlow::Break` stops the traversal immediately.

use std::ops::ControlFlow;

use crate::ast::visit_macros::{define_visitor, try_visit};
use crate::ast::{
    Clause, Expression, Hop, Limit, Match, NodePattern, Operator, Order, Pattern, PatternElement,
    Projection, Properties, PropertyEntry, ReadingClause, RelationshipChain, RelationshipPattern,
    Return, Skip, SortItem, Statement, Where,
};

/// Shared type alias for visitor hooks.
pub type VisitResult<B> = ControlFlow<B>;

define_visitor! {
    /// Pre/post-order hooks for every traversable node type.
    pub trait Visitor {
        enter_statement / leave_statement: Statement;
        enter_match / leave_match: Match;
        enter_pattern / leave_pattern: Pattern;
        enter_pattern_element / leave_pattern_element: PatternElement;
        enter_chain / leave_chain: RelationshipChain;
        enter_node / leave_node: NodePattern;
        enter_relationship / leave_relationship: RelationshipPattern;
        enter_properties / leave_properties: Properties;
        enter_property_entry / leave_property_entry: PropertyEntry;
        enter_where / leave_where: Where;
        enter_expression / leave_expression: Expression;
        enter_operator / leave_operator: Operator;
        enter_return / leave_return: Return;
        enter_projection / leave_projection: Projection;
        enter_order / leave_order: Order;
        enter_sort_item / leave_sort_item: SortItem;
        enter_skip / leave_skip: Skip;
        enter_limit / leave_limit: Limit;
    }
}

/// A node that can be walked by a [`Visitor`].
pub trait Visitable {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break>;
}

/// Visits `node` if it is present; absent nodes trigger no hooks at all.
pub fn visit_if_present<T, V>(node: Option<&T>, visitor: &mut V) -> VisitResult<V::Break>
where
    T: Visitable,
    V: Visitor + ?Sized,
{
    match node {
        Some(node) => node.accept(visitor),
        None => ControlFlow::Continue(()),
    }
}

fn visit_all<'a, T, V>(
    nodes: impl IntoIterator<Item = &'a T>,
    visitor: &mut V,
) -> VisitResult<V::Break>
where
    T: Visitable + 'a,
    V: Visitor + ?Sized,
{
    for node in nodes {
        try_visit!(node.accept(visitor));
    }
    ControlFlow::Continue(())
}

impl Visitable for Statement {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        try_visit!(visitor.enter_statement(self));
        try_visit!(visit_all(&self.clauses, visitor));
        visitor.leave_statement(self)
    }
}

impl Visitable for Clause {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        match self {
            Clause::Reading(reading) => reading.accept(visitor),
            Clause::Return(ret) => ret.accept(visitor),
        }
    }
}

impl Visitable for ReadingClause {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        match self {
            ReadingClause::Match(m) => m.accept(visitor),
        }
    }
}

impl Visitable for Match {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        try_visit!(visitor.enter_match(self));
        try_visit!(self.pattern.accept(visitor));
        try_visit!(visit_if_present(self.where_clause.as_ref(), visitor));
        visitor.leave_match(self)
    }
}

impl Visitable for Pattern {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        try_visit!(visitor.enter_pattern(self));
        try_visit!(visit_all(&self.elements, visitor));
        visitor.leave_pattern(self)
    }
}

impl Visitable for PatternElement {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        try_visit!(visitor.enter_pattern_element(self));
        try_visit!(match self {
            PatternElement::Node(node) => node.accept(visitor),
            PatternElement::Chain(chain) => chain.accept(visitor),
        });
        visitor.leave_pattern_element(self)
    }
}

impl Visitable for RelationshipChain {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        try_visit!(visitor.enter_chain(self));
        try_visit!(self.start.accept(visitor));
        for Hop { relationship, node } in &self.hops {
            try_visit!(relationship.accept(visitor));
            try_visit!(node.accept(visitor));
        }
        visitor.leave_chain(self)
    }
}

impl Visitable for NodePattern {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        try_visit!(visitor.enter_node(self));
        try_visit!(visit_if_present(self.properties.as_ref(), visitor));
        visitor.leave_node(self)
    }
}

impl Visitable for RelationshipPattern {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        try_visit!(visitor.enter_relationship(self));
        try_visit!(visit_if_present(self.properties.as_ref(), visitor));
        visitor.leave_relationship(self)
    }
}

impl Visitable for Properties {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        try_visit!(visitor.enter_properties(self));
        try_visit!(visit_all(&self.entries, visitor));
        visitor.leave_properties(self)
    }
}

impl Visitable for PropertyEntry {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        try_visit!(visitor.enter_property_entry(self));
        try_visit!(self.value.accept(visitor));
        visitor.leave_property_entry(self)
    }
}

impl Visitable for Where {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        try_visit!(visitor.enter_where(self));
        try_visit!(self.condition.accept(visitor));
        visitor.leave_where(self)
    }
}

impl Visitable for Expression {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        try_visit!(visitor.enter_expression(self));
        match self {
            Expression::Literal(_)
            | Expression::Parameter(_)
            | Expression::Variable(_)
            | Expression::Asterisk => {}
            Expression::Property(subject, _) => try_visit!(subject.accept(visitor)),
            Expression::Function(invocation) => {
                try_visit!(visit_all(&invocation.arguments, visitor))
            }
            Expression::Comparison(op, left, right) => {
                try_visit!(left.accept(visitor));
                try_visit!(Operator::Comparison(*op).accept(visitor));
                try_visit!(right.accept(visitor));
            }
            Expression::Logical(op, left, right) => {
                try_visit!(left.accept(visitor));
                try_visit!(Operator::Logical(*op).accept(visitor));
                try_visit!(right.accept(visitor));
            }
            Expression::Unary(op, operand) => {
                if op.is_prefix() {
                    try_visit!(Operator::Unary(*op).accept(visitor));
                    try_visit!(operand.accept(visitor));
                } else {
                    try_visit!(operand.accept(visitor));
                    try_visit!(Operator::Unary(*op).accept(visitor));
                }
            }
            Expression::Nested(inner) | Expression::Aliased(inner, _) => {
                try_visit!(inner.accept(visitor))
            }
        }
        visitor.leave_expression(self)
    }
}

impl Visitable for Operator {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        try_visit!(visitor.enter_operator(self));
        visitor.leave_operator(self)
    }
}

impl Visitable for Return {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        try_visit!(visitor.enter_return(self));
        try_visit!(self.projection.accept(visitor));
        try_visit!(visit_if_present(self.order.as_ref(), visitor));
        try_visit!(visit_if_present(self.skip.as_ref(), visitor));
        try_visit!(visit_if_present(self.limit.as_ref(), visitor));
        visitor.leave_return(self)
    }
}

impl Visitable for Projection {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        try_visit!(visitor.enter_projection(self));
        try_visit!(visit_all(&self.items, visitor));
        visitor.leave_projection(self)
    }
}

impl Visitable for Order {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        try_visit!(visitor.enter_order(self));
        try_visit!(visit_all(&self.items, visitor));
        visitor.leave_order(self)
    }
}

impl Visitable for SortItem {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        try_visit!(visitor.enter_sort_item(self));
        try_visit!(self.expression.accept(visitor));
        visitor.leave_sort_item(self)
    }
}

impl Visitable for Skip {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        try_visit!(visitor.enter_skip(self));
        try_visit!(self.count.accept(visitor));
        visitor.leave_skip(self)
    }
}

impl Visitable for Limit {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Break> {
        try_visit!(visitor.enter_limit(self));
        try_visit!(self.count.accept(visitor));
        visitor.leave_limit(self)
    }
}
