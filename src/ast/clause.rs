//! Clause nodes: `MATCH`, `WHERE`, `RETURN` and its ordering and paging
//! sub-clauses.
//!
//! See <https://s3.amazonaws.com/artifacts.opencypher.org/railroad/Match.html>
//! for the `MATCH` grammar.

use crate::ast::{Expression, Pattern};

/// A `MATCH` or `OPTIONAL MATCH` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub(crate) optional: bool,
    pub(crate) pattern: Pattern,
    pub(crate) where_clause: Option<Where>,
}

impl Match {
    pub(crate) fn new(optional: bool, pattern: Pattern, where_clause: Option<Where>) -> Self {
        Self {
            optional,
            pattern,
            where_clause,
        }
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn where_clause(&self) -> Option<&Where> {
        self.where_clause.as_ref()
    }
}

/// A `WHERE` filter wrapping a single condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Where {
    pub(crate) condition: Expression,
}

impl Where {
    pub fn new(condition: Expression) -> Self {
        Self { condition }
    }

    pub fn condition(&self) -> &Expression {
        &self.condition
    }
}

/// A `RETURN` clause with optional ordering and paging.
#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub(crate) projection: Projection,
    pub(crate) order: Option<Order>,
    pub(crate) skip: Option<Skip>,
    pub(crate) limit: Option<Limit>,
}

impl Return {
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn skip(&self) -> Option<&Skip> {
        self.skip.as_ref()
    }

    pub fn limit(&self) -> Option<&Limit> {
        self.limit.as_ref()
    }
}

/// The projected items of a `RETURN`.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub(crate) distinct: bool,
    pub(crate) items: Vec<Expression>,
}

impl Projection {
    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub fn items(&self) -> &[Expression] {
        &self.items
    }
}

/// `ORDER BY` with one or more sort items.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub(crate) items: Vec<SortItem>,
}

impl Order {
    pub fn items(&self) -> &[SortItem] {
        &self.items
    }
}

/// Sort direction of an `ORDER BY` item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

/// A single `ORDER BY` item. Without a direction the database default
/// (ascending) applies.
#[derive(Debug, Clone, PartialEq)]
pub struct SortItem {
    pub(crate) expression: Expression,
    pub(crate) direction: Option<SortDirection>,
}

impl SortItem {
    pub fn new(expression: Expression, direction: Option<SortDirection>) -> Self {
        Self {
            expression,
            direction,
        }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.direction
    }
}

/// `SKIP n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Skip {
    pub(crate) count: Expression,
}

impl Skip {
    pub fn count(&self) -> &Expression {
        &self.count
    }
}

/// `LIMIT n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Limit {
    pub(crate) count: Expression,
}

impl Limit {
    pub fn count(&self) -> &Expression {
        &self.count
    }
}
