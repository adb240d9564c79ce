//! Statement rendering.
//!
//! [`Renderer`] walks a [`Statement`] with a private visitor and appends text
//! on the enter and leave hooks. Output is deterministic: the same tree
//! always yields the same string. Values reach the text only as `$name`
//! parameter references or as literals the caller wrote explicitly.

mod config;

pub use config::RenderConfig;

use std::ops::ControlFlow;

use tracing::trace;

use crate::ast::{
    Direction, Expression, Limit, Literal, Match, NodePattern, Operator, Order, Pattern,
    PatternElement, Projection, Properties, PropertyEntry, RelationshipPattern, Return, Skip,
    SortItem, Statement, SymbolicName, VisitResult, Visitable, Visitor, Where,
};
use crate::ast::{Clause, RelationshipChain};
use crate::error::RenderError;
use crate::lexer::{is_identifier, is_plain_identifier};

/// Renders statements to Cypher text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn render(&self, statement: &Statement) -> Result<String, RenderError> {
        let cypher = self.run(statement)?;
        trace!(%cypher, "rendered statement");
        Ok(cypher)
    }

    /// Renders a single expression, e.g. a `WHERE` condition.
    pub fn render_expression(&self, expression: &Expression) -> Result<String, RenderError> {
        self.run(expression)
    }

    pub fn render_pattern(&self, pattern: &Pattern) -> Result<String, RenderError> {
        self.run(pattern)
    }

    fn run<T: Visitable>(&self, node: &T) -> Result<String, RenderError> {
        let mut visitor = RenderVisitor::new(self.config);
        match node.accept(&mut visitor) {
            ControlFlow::Continue(()) => Ok(visitor.out),
            ControlFlow::Break(err) => Err(err),
        }
    }
}

/// Renders `statement` with the default configuration.
pub fn render(statement: &Statement) -> Result<String, RenderError> {
    Renderer::default().render(statement)
}

/// Separator state for a node whose children form a list.
struct ListFrame {
    level: usize,
    count: usize,
    separator: &'static str,
}

struct RenderVisitor {
    config: RenderConfig,
    out: String,
    depth: usize,
    frames: Vec<ListFrame>,
}

fn flow(result: Result<(), RenderError>) -> VisitResult<RenderError> {
    match result {
        Ok(()) => ControlFlow::Continue(()),
        Err(err) => ControlFlow::Break(err),
    }
}

impl RenderVisitor {
    fn new(config: RenderConfig) -> Self {
        Self {
            config,
            out: String::new(),
            depth: 0,
            frames: Vec::new(),
        }
    }

    /// Called first in every enter hook. Writes the list separator when the
    /// entered node is a non-first item of the innermost list.
    fn begin(&mut self) {
        self.depth += 1;
        if let Some(frame) = self.frames.last_mut() {
            if frame.level == self.depth {
                if frame.count > 0 {
                    self.out.push_str(frame.separator);
                }
                frame.count += 1;
            }
        }
    }

    fn end(&mut self) -> VisitResult<RenderError> {
        self.depth -= 1;
        ControlFlow::Continue(())
    }

    fn open_list(&mut self, separator: &'static str) {
        self.frames.push(ListFrame {
            level: self.depth + 1,
            count: 0,
            separator,
        });
    }

    fn close_list(&mut self) {
        self.frames.pop();
    }

    fn write_name(&mut self, name: &SymbolicName, context: &'static str) -> Result<(), RenderError> {
        if name.is_empty() {
            return Err(RenderError::EmptyName { context });
        }
        let name = name.as_str();
        if !self.config.always_escape_names && is_plain_identifier(name) {
            self.out.push_str(name);
        } else {
            self.out.push('`');
            self.out.push_str(&name.replace('`', "``"));
            self.out.push('`');
        }
        Ok(())
    }

    fn write_literal(&mut self, literal: &Literal) -> Result<(), RenderError> {
        match literal {
            Literal::Null => self.out.push_str("NULL"),
            Literal::Boolean(value) => self.out.push_str(if *value { "true" } else { "false" }),
            Literal::Integer(value) => self.out.push_str(&value.to_string()),
            Literal::Float(value) => {
                if !value.is_finite() {
                    return Err(RenderError::NonFiniteLiteral {
                        value: value.to_string(),
                    });
                }
                self.out.push_str(&format!("{value:?}"));
            }
            Literal::String(value) => {
                self.out.push('\'');
                for ch in value.chars() {
                    if matches!(ch, '\\' | '\'') {
                        self.out.push('\\');
                    }
                    self.out.push(ch);
                }
                self.out.push('\'');
            }
        }
        Ok(())
    }

    fn write_parameter(&mut self, name: &SymbolicName) -> Result<(), RenderError> {
        if name.is_empty() {
            return Err(RenderError::EmptyName {
                context: "parameter",
            });
        }
        self.out.push('$');
        if is_identifier(name.as_str()) {
            self.out.push_str(name.as_str());
        } else {
            self.out.push('`');
            self.out.push_str(&name.as_str().replace('`', "``"));
            self.out.push('`');
        }
        Ok(())
    }

    fn write_labels(&mut self, labels: &[SymbolicName], context: &'static str) -> Result<(), RenderError> {
        for label in labels {
            self.out.push(':');
            self.write_name(label, context)?;
        }
        Ok(())
    }

    fn write_node_head(&mut self, node: &NodePattern) -> Result<(), RenderError> {
        self.out.push('(');
        if let Some(name) = node.name() {
            self.write_name(name, "node")?;
        }
        self.write_labels(node.labels(), "label")
    }

    fn write_relationship_head(&mut self, relationship: &RelationshipPattern) -> Result<(), RenderError> {
        self.out.push_str(match relationship.direction() {
            Direction::Incoming => "<-",
            Direction::Outgoing | Direction::Undirected => "-",
        });
        if relationship.has_no_details() {
            return Ok(());
        }
        self.out.push('[');
        if let Some(name) = relationship.name() {
            self.write_name(name, "relationship")?;
        }
        for (i, ty) in relationship.types().iter().enumerate() {
            self.out.push_str(if i == 0 { ":" } else { "|" });
            self.write_name(ty, "relationship type")?;
        }
        Ok(())
    }

    fn write_expression_head(&mut self, expression: &Expression) -> Result<(), RenderError> {
        match expression {
            Expression::Literal(literal) => self.write_literal(literal)?,
            Expression::Parameter(name) => self.write_parameter(name)?,
            Expression::Variable(name) => self.write_name(name, "variable")?,
            Expression::Asterisk => self.out.push('*'),
            Expression::Function(invocation) => {
                self.out.push_str(invocation.name());
                self.out.push('(');
                if invocation.is_distinct() {
                    self.out.push_str("DISTINCT ");
                }
                self.open_list(", ");
            }
            Expression::Nested(_) => self.out.push('('),
            Expression::Property(..)
            | Expression::Comparison(..)
            | Expression::Logical(..)
            | Expression::Unary(..)
            | Expression::Aliased(..) => {}
        }
        Ok(())
    }

    fn write_expression_tail(&mut self, expression: &Expression) -> Result<(), RenderError> {
        match expression {
            Expression::Property(_, key) => {
                self.out.push('.');
                self.write_name(key, "property")?;
            }
            Expression::Function(_) => {
                self.close_list();
                self.out.push(')');
            }
            Expression::Nested(_) => self.out.push(')'),
            Expression::Aliased(_, alias) => {
                self.out.push_str(" AS ");
                self.write_name(alias, "alias")?;
            }
            _ => {}
        }
        Ok(())
    }
}

fn validate_statement(statement: &Statement) -> Result<(), RenderError> {
    if statement.reading_clauses().next().is_none() {
        return Err(RenderError::MissingReadingClause);
    }
    let last = statement.clauses().len() - 1;
    let misplaced = statement
        .clauses()
        .iter()
        .enumerate()
        .any(|(i, clause)| matches!(clause, Clause::Return(_)) && i != last);
    if misplaced {
        return Err(RenderError::MisplacedReturn);
    }
    Ok(())
}

fn check_count(clause: &'static str, count: &Expression) -> Result<(), RenderError> {
    match count {
        Expression::Literal(Literal::Integer(value)) if *value < 0 => {
            Err(RenderError::NegativeCount {
                clause,
                value: *value,
            })
        }
        _ => Ok(()),
    }
}

impl Visitor for RenderVisitor {
    type Break = RenderError;

    fn enter_statement(&mut self, statement: &Statement) -> VisitResult<RenderError> {
        self.begin();
        if let Err(err) = validate_statement(statement) {
            return ControlFlow::Break(err);
        }
        self.open_list(self.config.clause_separator());
        ControlFlow::Continue(())
    }

    fn leave_statement(&mut self, _node: &Statement) -> VisitResult<RenderError> {
        self.close_list();
        self.end()
    }

    fn enter_match(&mut self, node: &Match) -> VisitResult<RenderError> {
        self.begin();
        self.out
            .push_str(if node.is_optional() { "OPTIONAL MATCH " } else { "MATCH " });
        ControlFlow::Continue(())
    }

    fn leave_match(&mut self, _node: &Match) -> VisitResult<RenderError> {
        self.end()
    }

    fn enter_pattern(&mut self, pattern: &Pattern) -> VisitResult<RenderError> {
        self.begin();
        if pattern.elements().is_empty() {
            return ControlFlow::Break(RenderError::EmptyPattern);
        }
        self.open_list(", ");
        ControlFlow::Continue(())
    }

    fn leave_pattern(&mut self, _node: &Pattern) -> VisitResult<RenderError> {
        self.close_list();
        self.end()
    }

    fn enter_pattern_element(&mut self, _node: &PatternElement) -> VisitResult<RenderError> {
        self.begin();
        ControlFlow::Continue(())
    }

    fn leave_pattern_element(&mut self, _node: &PatternElement) -> VisitResult<RenderError> {
        self.end()
    }

    fn enter_chain(&mut self, _node: &RelationshipChain) -> VisitResult<RenderError> {
        self.begin();
        ControlFlow::Continue(())
    }

    fn leave_chain(&mut self, _node: &RelationshipChain) -> VisitResult<RenderError> {
        self.end()
    }

    fn enter_node(&mut self, node: &NodePattern) -> VisitResult<RenderError> {
        self.begin();
        flow(self.write_node_head(node))
    }

    fn leave_node(&mut self, _node: &NodePattern) -> VisitResult<RenderError> {
        self.out.push(')');
        self.end()
    }

    fn enter_relationship(&mut self, relationship: &RelationshipPattern) -> VisitResult<RenderError> {
        self.begin();
        flow(self.write_relationship_head(relationship))
    }

    fn leave_relationship(&mut self, relationship: &RelationshipPattern) -> VisitResult<RenderError> {
        if !relationship.has_no_details() {
            self.out.push(']');
        }
        self.out.push_str(match relationship.direction() {
            Direction::Outgoing => "->",
            Direction::Incoming | Direction::Undirected => "-",
        });
        self.end()
    }

    fn enter_properties(&mut self, _node: &Properties) -> VisitResult<RenderError> {
        self.begin();
        if !matches!(self.out.chars().last(), Some('(' | '[')) {
            self.out.push(' ');
        }
        self.out.push('{');
        self.open_list(", ");
        ControlFlow::Continue(())
    }

    fn leave_properties(&mut self, _node: &Properties) -> VisitResult<RenderError> {
        self.close_list();
        self.out.push('}');
        self.end()
    }

    fn enter_property_entry(&mut self, entry: &PropertyEntry) -> VisitResult<RenderError> {
        self.begin();
        if let Err(err) = self.write_name(entry.key(), "property") {
            return ControlFlow::Break(err);
        }
        self.out.push_str(": ");
        ControlFlow::Continue(())
    }

    fn leave_property_entry(&mut self, _node: &PropertyEntry) -> VisitResult<RenderError> {
        self.end()
    }

    fn enter_where(&mut self, _node: &Where) -> VisitResult<RenderError> {
        self.begin();
        self.out.push_str(" WHERE ");
        ControlFlow::Continue(())
    }

    fn leave_where(&mut self, _node: &Where) -> VisitResult<RenderError> {
        self.end()
    }

    fn enter_expression(&mut self, expression: &Expression) -> VisitResult<RenderError> {
        self.begin();
        flow(self.write_expression_head(expression))
    }

    fn leave_expression(&mut self, expression: &Expression) -> VisitResult<RenderError> {
        if let Err(err) = self.write_expression_tail(expression) {
            return ControlFlow::Break(err);
        }
        self.end()
    }

    fn enter_operator(&mut self, operator: &Operator) -> VisitResult<RenderError> {
        self.begin();
        match operator {
            Operator::Unary(op) if op.is_prefix() => {
                self.out.push_str(op.as_str());
                self.out.push(' ');
            }
            other => {
                self.out.push(' ');
                self.out.push_str(other.as_str());
                if !matches!(other, Operator::Unary(_)) {
                    self.out.push(' ');
                }
            }
        }
        ControlFlow::Continue(())
    }

    fn leave_operator(&mut self, _node: &Operator) -> VisitResult<RenderError> {
        self.end()
    }

    fn enter_return(&mut self, _node: &Return) -> VisitResult<RenderError> {
        self.begin();
        self.out.push_str("RETURN ");
        ControlFlow::Continue(())
    }

    fn leave_return(&mut self, _node: &Return) -> VisitResult<RenderError> {
        self.end()
    }

    fn enter_projection(&mut self, projection: &Projection) -> VisitResult<RenderError> {
        self.begin();
        if projection.items().is_empty() {
            return ControlFlow::Break(RenderError::EmptyProjection);
        }
        if projection.is_distinct() {
            self.out.push_str("DISTINCT ");
        }
        self.open_list(", ");
        ControlFlow::Continue(())
    }

    fn leave_projection(&mut self, _node: &Projection) -> VisitResult<RenderError> {
        self.close_list();
        self.end()
    }

    fn enter_order(&mut self, order: &Order) -> VisitResult<RenderError> {
        self.begin();
        if order.items().is_empty() {
            return ControlFlow::Break(RenderError::EmptyOrder);
        }
        self.out.push_str(" ORDER BY ");
        self.open_list(", ");
        ControlFlow::Continue(())
    }

    fn leave_order(&mut self, _node: &Order) -> VisitResult<RenderError> {
        self.close_list();
        self.end()
    }

    fn enter_sort_item(&mut self, _node: &SortItem) -> VisitResult<RenderError> {
        self.begin();
        ControlFlow::Continue(())
    }

    fn leave_sort_item(&mut self, item: &SortItem) -> VisitResult<RenderError> {
        if let Some(direction) = item.direction() {
            self.out.push(' ');
            self.out.push_str(direction.as_str());
        }
        self.end()
    }

    fn enter_skip(&mut self, node: &Skip) -> VisitResult<RenderError> {
        if let Err(err) = check_count("SKIP", node.count()) {
            return ControlFlow::Break(err);
        }
        self.begin();
        self.out.push_str(" SKIP ");
        ControlFlow::Continue(())
    }

    fn leave_skip(&mut self, _node: &Skip) -> VisitResult<RenderError> {
        self.end()
    }

    fn enter_limit(&mut self, node: &Limit) -> VisitResult<RenderError> {
        if let Err(err) = check_count("LIMIT", node.count()) {
            return ControlFlow::Break(err);
        }
        self.begin();
        self.out.push_str(" LIMIT ");
        ControlFlow::Continue(())
    }

    fn leave_limit(&mut self, _node: &Limit) -> VisitResult<RenderError> {
        self.end()
    }
}
