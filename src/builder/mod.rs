//! Fluent statement construction.
//!
//! The entry points [`match_`], [`optional_match`] and [`matching`] start a
//! staged builder. Each stage only exposes the calls that are legal at that
//! point, so ordering mistakes are compile errors:
//!
//! ```compile_fail
//! use cypher_dsl::builder::{match_, node};
//!
//! // ORDER BY is only available after RETURN.
//! let n = node("Person").named("n");
//! let _ = match_(n.clone()).order_by([n.property("name").ascending()]);
//! ```
//!
//! ```compile_fail
//! use cypher_dsl::builder::{match_, node};
//!
//! // A statement without RETURN cannot be built.
//! let _ = match_(node("Person").named("n")).build();
//! ```
//!
//! [`StatementBuilder`] offers the same operations with runtime checks for
//! code that assembles statements dynamically.

mod dynamic;
mod expressions;
mod functions;

pub use dynamic::StatementBuilder;
pub use expressions::{
    any_node, asterisk, literal_boolean, literal_float, literal_integer, literal_string, node,
    null_literal, parameter, variable,
};
pub use functions::{avg, collect, count, count_distinct, id, max, min, sum, to_lower};

use crate::ast::{
    Clause, Expression, Limit, Literal, Match, Order, Pattern, Projection, Return, Skip, SortItem,
    Statement, Where,
};

/// Starts a statement with `MATCH pattern`.
pub fn match_(pattern: impl Into<Pattern>) -> OngoingReadingWithoutWhere {
    matching(pattern, false)
}

/// Starts a statement with `OPTIONAL MATCH pattern`.
pub fn optional_match(pattern: impl Into<Pattern>) -> OngoingReadingWithoutWhere {
    matching(pattern, true)
}

/// Starts a statement with a match whose optionality is decided at runtime.
pub fn matching(pattern: impl Into<Pattern>, optional: bool) -> OngoingReadingWithoutWhere {
    OngoingReadingWithoutWhere {
        reading: Reading {
            completed: Vec::new(),
            current: PendingMatch::new(optional, pattern.into()),
        },
    }
}

/// A match that has not been closed yet.
#[derive(Debug, Clone)]
pub(crate) struct PendingMatch {
    optional: bool,
    pattern: Pattern,
    condition: Option<Expression>,
}

impl PendingMatch {
    pub(crate) fn new(optional: bool, pattern: Pattern) -> Self {
        Self {
            optional,
            pattern,
            condition: None,
        }
    }

    /// Repeated filters on the same match are joined with `AND`.
    pub(crate) fn filter(&mut self, condition: Expression) {
        self.condition = Some(match self.condition.take() {
            Some(existing) => existing.and(condition),
            None => condition,
        });
    }

    pub(crate) fn has_condition(&self) -> bool {
        self.condition.is_some()
    }

    pub(crate) fn into_clause(self) -> Clause {
        Match::new(self.optional, self.pattern, self.condition.map(Where::new)).into()
    }
}

/// The `RETURN` part under construction.
#[derive(Debug, Clone, Default)]
pub(crate) struct PendingReturn {
    distinct: bool,
    items: Vec<Expression>,
    order: Vec<SortItem>,
    skip: Option<i64>,
    limit: Option<i64>,
}

impl PendingReturn {
    pub(crate) fn new<I>(distinct: bool, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expression>,
    {
        Self {
            distinct,
            items: items.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub(crate) fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    pub(crate) fn order_by<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: Into<SortItem>,
    {
        self.order.extend(items.into_iter().map(Into::into));
    }

    pub(crate) fn skip(&mut self, count: i64) {
        self.skip = Some(count);
    }

    pub(crate) fn limit(&mut self, count: i64) {
        self.limit = Some(count);
    }

    pub(crate) fn into_clause(self) -> Clause {
        Clause::Return(Return {
            projection: Projection {
                distinct: self.distinct,
                items: self.items,
            },
            order: (!self.order.is_empty()).then_some(Order { items: self.order }),
            skip: self.skip.map(|count| Skip {
                count: count_literal(count),
            }),
            limit: self.limit.map(|count| Limit {
                count: count_literal(count),
            }),
        })
    }
}

fn count_literal(count: i64) -> Expression {
    Expression::Literal(Literal::Integer(count))
}

/// Closed matches plus the one currently open.
#[derive(Debug, Clone)]
struct Reading {
    completed: Vec<Clause>,
    current: PendingMatch,
}

impl Reading {
    fn open(mut self, pattern: Pattern, optional: bool) -> Self {
        let previous = std::mem::replace(&mut self.current, PendingMatch::new(optional, pattern));
        self.completed.push(previous.into_clause());
        self
    }

    fn close(mut self) -> Vec<Clause> {
        self.completed.push(self.current.into_clause());
        self.completed
    }

    fn project<I>(self, distinct: bool, items: I) -> OngoingReadingAndReturn
    where
        I: IntoIterator,
        I::Item: Into<Expression>,
    {
        OngoingReadingAndReturn {
            clauses: self.close(),
            ret: PendingReturn::new(distinct, items),
        }
    }
}

/// A reading stage whose latest match has no filter yet.
#[derive(Debug, Clone)]
#[must_use]
pub struct OngoingReadingWithoutWhere {
    reading: Reading,
}

impl OngoingReadingWithoutWhere {
    /// Filters the most recent match.
    pub fn where_(mut self, condition: Expression) -> OngoingReadingWithWhere {
        self.reading.current.filter(condition);
        OngoingReadingWithWhere {
            reading: self.reading,
        }
    }

    /// Filters the most recent match when a condition is given. `None` leaves
    /// the match unfiltered.
    pub fn where_if_present(mut self, condition: Option<Expression>) -> OngoingReadingWithWhere {
        if let Some(condition) = condition {
            self.reading.current.filter(condition);
        }
        OngoingReadingWithWhere {
            reading: self.reading,
        }
    }

    pub fn match_(self, pattern: impl Into<Pattern>) -> OngoingReadingWithoutWhere {
        self.matching(pattern, false)
    }

    pub fn optional_match(self, pattern: impl Into<Pattern>) -> OngoingReadingWithoutWhere {
        self.matching(pattern, true)
    }

    pub fn matching(
        self,
        pattern: impl Into<Pattern>,
        optional: bool,
    ) -> OngoingReadingWithoutWhere {
        OngoingReadingWithoutWhere {
            reading: self.reading.open(pattern.into(), optional),
        }
    }

    pub fn returning<I>(self, items: I) -> OngoingReadingAndReturn
    where
        I: IntoIterator,
        I::Item: Into<Expression>,
    {
        self.reading.project(false, items)
    }

    pub fn returning_distinct<I>(self, items: I) -> OngoingReadingAndReturn
    where
        I: IntoIterator,
        I::Item: Into<Expression>,
    {
        self.reading.project(true, items)
    }
}

/// A reading stage whose latest match carries a filter.
#[derive(Debug, Clone)]
#[must_use]
pub struct OngoingReadingWithWhere {
    reading: Reading,
}

impl OngoingReadingWithWhere {
    /// Extends the current filter with `AND`.
    pub fn and(mut self, condition: Expression) -> Self {
        self.reading.current.filter(condition);
        self
    }

    /// Extends the current filter with `OR`.
    pub fn or(mut self, condition: Expression) -> Self {
        let current = &mut self.reading.current;
        current.condition = Some(match current.condition.take() {
            Some(existing) => existing.or(condition),
            None => condition,
        });
        self
    }

    pub fn match_(self, pattern: impl Into<Pattern>) -> OngoingReadingWithoutWhere {
        self.matching(pattern, false)
    }

    pub fn optional_match(self, pattern: impl Into<Pattern>) -> OngoingReadingWithoutWhere {
        self.matching(pattern, true)
    }

    pub fn matching(
        self,
        pattern: impl Into<Pattern>,
        optional: bool,
    ) -> OngoingReadingWithoutWhere {
        OngoingReadingWithoutWhere {
            reading: self.reading.open(pattern.into(), optional),
        }
    }

    pub fn returning<I>(self, items: I) -> OngoingReadingAndReturn
    where
        I: IntoIterator,
        I::Item: Into<Expression>,
    {
        self.reading.project(false, items)
    }

    pub fn returning_distinct<I>(self, items: I) -> OngoingReadingAndReturn
    where
        I: IntoIterator,
        I::Item: Into<Expression>,
    {
        self.reading.project(true, items)
    }
}

/// The projecting stage. Only ordering, paging and [`build`](Self::build)
/// remain.
#[derive(Debug, Clone)]
#[must_use]
pub struct OngoingReadingAndReturn {
    clauses: Vec<Clause>,
    ret: PendingReturn,
}

impl OngoingReadingAndReturn {
    /// Appends sort items to `ORDER BY`.
    pub fn order_by<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SortItem>,
    {
        self.ret.order_by(items);
        self
    }

    pub fn skip(mut self, count: i64) -> Self {
        self.ret.skip(count);
        self
    }

    pub fn limit(mut self, count: i64) -> Self {
        self.ret.limit(count);
        self
    }

    pub fn build(mut self) -> Statement {
        self.clauses.push(self.ret.into_clause());
        Statement::new(self.clauses)
    }
}
