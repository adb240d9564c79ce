//! Constructors and combinators for patterns and expressions.

use smol_str::SmolStr;

use crate::ast::{
    ComparisonOperator, Direction, Expression, Hop, Literal, LogicalOperator, NodePattern,
    Properties, PropertyEntry, RelationshipChain, RelationshipPattern, SortDirection, SortItem,
    SymbolicName, UnaryOperator,
};

/// A node with one label and no name, `(:Label)`.
pub fn node(label: impl Into<SymbolicName>) -> NodePattern {
    NodePattern {
        name: None,
        labels: vec![label.into()],
        properties: None,
    }
}

/// A node without labels, `()`.
pub fn any_node() -> NodePattern {
    NodePattern::default()
}

/// A parameter reference, `$name`.
pub fn parameter(name: impl Into<SymbolicName>) -> Expression {
    Expression::Parameter(name.into())
}

/// A variable reference.
pub fn variable(name: impl Into<SymbolicName>) -> Expression {
    Expression::Variable(name.into())
}

/// The `*` wildcard.
pub fn asterisk() -> Expression {
    Expression::Asterisk
}

/// A static string literal. Never use this for caller or user supplied data.
pub fn literal_string(value: impl Into<SmolStr>) -> Expression {
    Expression::Literal(Literal::String(value.into()))
}

/// A static integer literal.
pub fn literal_integer(value: i64) -> Expression {
    Expression::Literal(Literal::Integer(value))
}

/// A static float literal.
pub fn literal_float(value: f64) -> Expression {
    Expression::Literal(Literal::Float(value))
}

/// A static boolean literal.
pub fn literal_boolean(value: bool) -> Expression {
    Expression::Literal(Literal::Boolean(value))
}

/// The `NULL` literal.
pub fn null_literal() -> Expression {
    Expression::Literal(Literal::Null)
}

impl NodePattern {
    /// Sets the symbolic name of this node.
    pub fn named(mut self, name: impl Into<SymbolicName>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds another label.
    pub fn labeled(mut self, label: impl Into<SymbolicName>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Adds inline property constraints, `{key: value}`.
    pub fn with_properties<K, I>(mut self, entries: I) -> Self
    where
        K: Into<SymbolicName>,
        I: IntoIterator<Item = (K, Expression)>,
    {
        let properties = self.properties.get_or_insert_with(Properties::default);
        properties.entries.extend(
            entries
                .into_iter()
                .map(|(key, value)| PropertyEntry::new(key, value)),
        );
        self
    }

    /// The variable this node is bound to.
    ///
    /// An unnamed node yields an empty variable, which the renderer rejects.
    pub fn as_expression(&self) -> Expression {
        Expression::Variable(self.name.clone().unwrap_or_else(|| SymbolicName::new("")))
    }

    /// Property lookup on this node's variable, `n.key`.
    pub fn property(&self, key: impl Into<SymbolicName>) -> Expression {
        self.as_expression().property(key)
    }

    /// `(this)-[:TYPES]->(other)`
    pub fn relationship_to<T, I>(self, other: NodePattern, types: I) -> RelationshipChain
    where
        T: Into<SymbolicName>,
        I: IntoIterator<Item = T>,
    {
        self.chain(other, types, Direction::Outgoing)
    }

    /// `(this)<-[:TYPES]-(other)`
    pub fn relationship_from<T, I>(self, other: NodePattern, types: I) -> RelationshipChain
    where
        T: Into<SymbolicName>,
        I: IntoIterator<Item = T>,
    {
        self.chain(other, types, Direction::Incoming)
    }

    /// `(this)-[:TYPES]-(other)`
    pub fn relationship_between<T, I>(self, other: NodePattern, types: I) -> RelationshipChain
    where
        T: Into<SymbolicName>,
        I: IntoIterator<Item = T>,
    {
        self.chain(other, types, Direction::Undirected)
    }

    fn chain<T, I>(self, other: NodePattern, types: I, direction: Direction) -> RelationshipChain
    where
        T: Into<SymbolicName>,
        I: IntoIterator<Item = T>,
    {
        RelationshipChain {
            start: self,
            hops: vec![hop(other, types, direction)],
        }
    }
}

fn hop<T, I>(node: NodePattern, types: I, direction: Direction) -> Hop
where
    T: Into<SymbolicName>,
    I: IntoIterator<Item = T>,
{
    Hop {
        relationship: RelationshipPattern {
            name: None,
            types: types.into_iter().map(Into::into).collect(),
            properties: None,
            direction,
        },
        node,
    }
}

impl RelationshipChain {
    /// Extends the path from its last node, `...-[:TYPES]->(other)`.
    pub fn relationship_to<T, I>(mut self, other: NodePattern, types: I) -> Self
    where
        T: Into<SymbolicName>,
        I: IntoIterator<Item = T>,
    {
        self.hops.push(hop(other, types, Direction::Outgoing));
        self
    }

    /// Extends the path from its last node, `...<-[:TYPES]-(other)`.
    pub fn relationship_from<T, I>(mut self, other: NodePattern, types: I) -> Self
    where
        T: Into<SymbolicName>,
        I: IntoIterator<Item = T>,
    {
        self.hops.push(hop(other, types, Direction::Incoming));
        self
    }

    /// Extends the path from its last node, `...-[:TYPES]-(other)`.
    pub fn relationship_between<T, I>(mut self, other: NodePattern, types: I) -> Self
    where
        T: Into<SymbolicName>,
        I: IntoIterator<Item = T>,
    {
        self.hops.push(hop(other, types, Direction::Undirected));
        self
    }

    /// Names the most recently added relationship.
    pub fn named(mut self, name: impl Into<SymbolicName>) -> Self {
        if let Some(last) = self.hops.last_mut() {
            last.relationship.name = Some(name.into());
        }
        self
    }

    /// Adds inline property constraints to the most recently added relationship.
    pub fn with_properties<K, I>(mut self, entries: I) -> Self
    where
        K: Into<SymbolicName>,
        I: IntoIterator<Item = (K, Expression)>,
    {
        if let Some(last) = self.hops.last_mut() {
            let properties = last
                .relationship
                .properties
                .get_or_insert_with(Properties::default);
            properties.entries.extend(
                entries
                    .into_iter()
                    .map(|(key, value)| PropertyEntry::new(key, value)),
            );
        }
        self
    }
}

impl Expression {
    /// Property lookup, `self.key`.
    pub fn property(self, key: impl Into<SymbolicName>) -> Expression {
        Expression::Property(Box::new(self), key.into())
    }

    fn compare(self, operator: ComparisonOperator, rhs: Expression) -> Expression {
        Expression::Comparison(operator, Box::new(self.grouped()), Box::new(rhs.grouped()))
    }

    /// Parenthesizes conditions that bind looser than a comparison operand.
    fn grouped(self) -> Expression {
        match self {
            Expression::Logical(..)
            | Expression::Comparison(..)
            | Expression::Unary(UnaryOperator::Not, _) => Expression::Nested(Box::new(self)),
            other => other,
        }
    }

    pub fn is_equal_to(self, rhs: Expression) -> Expression {
        self.compare(ComparisonOperator::Eq, rhs)
    }

    pub fn is_not_equal_to(self, rhs: Expression) -> Expression {
        self.compare(ComparisonOperator::NotEq, rhs)
    }

    pub fn lt(self, rhs: Expression) -> Expression {
        self.compare(ComparisonOperator::Lt, rhs)
    }

    pub fn lte(self, rhs: Expression) -> Expression {
        self.compare(ComparisonOperator::LtEq, rhs)
    }

    pub fn gt(self, rhs: Expression) -> Expression {
        self.compare(ComparisonOperator::Gt, rhs)
    }

    pub fn gte(self, rhs: Expression) -> Expression {
        self.compare(ComparisonOperator::GtEq, rhs)
    }

    pub fn starts_with(self, rhs: Expression) -> Expression {
        self.compare(ComparisonOperator::StartsWith, rhs)
    }

    pub fn ends_with(self, rhs: Expression) -> Expression {
        self.compare(ComparisonOperator::EndsWith, rhs)
    }

    pub fn contains(self, rhs: Expression) -> Expression {
        self.compare(ComparisonOperator::Contains, rhs)
    }

    /// Regular expression match, `self =~ rhs`.
    pub fn matches(self, rhs: Expression) -> Expression {
        self.compare(ComparisonOperator::Matches, rhs)
    }

    pub fn is_null(self) -> Expression {
        Expression::Unary(UnaryOperator::IsNull, Box::new(self.grouped()))
    }

    pub fn is_not_null(self) -> Expression {
        Expression::Unary(UnaryOperator::IsNotNull, Box::new(self.grouped()))
    }

    pub fn and(self, rhs: Expression) -> Expression {
        self.combine(LogicalOperator::And, rhs)
    }

    pub fn or(self, rhs: Expression) -> Expression {
        self.combine(LogicalOperator::Or, rhs)
    }

    pub fn xor(self, rhs: Expression) -> Expression {
        self.combine(LogicalOperator::Xor, rhs)
    }

    /// Negates this condition. Compound conditions are parenthesized.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Expression {
        let operand = match self {
            Expression::Logical(..) => Expression::Nested(Box::new(self)),
            other => other,
        };
        Expression::Unary(UnaryOperator::Not, Box::new(operand))
    }

    /// Operands combined with a different connective are parenthesized so
    /// the rendered text keeps the tree's grouping.
    fn combine(self, operator: LogicalOperator, rhs: Expression) -> Expression {
        let group = |operand: Expression| match operand {
            Expression::Logical(op, ..) if op != operator => Expression::Nested(Box::new(operand)),
            other => other,
        };
        Expression::Logical(operator, Box::new(group(self)), Box::new(group(rhs)))
    }

    /// Aliases a projection item, `self AS alias`.
    pub fn as_(self, alias: impl Into<SymbolicName>) -> Expression {
        Expression::Aliased(Box::new(self), alias.into())
    }

    /// `ORDER BY self ASC`
    pub fn ascending(self) -> SortItem {
        SortItem::new(self, Some(SortDirection::Ascending))
    }

    /// `ORDER BY self DESC`
    pub fn descending(self) -> SortItem {
        SortItem::new(self, Some(SortDirection::Descending))
    }
}

impl From<Expression> for SortItem {
    fn from(expression: Expression) -> Self {
        SortItem::new(expression, None)
    }
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Expression::Literal(literal)
    }
}
