use tracing::trace;

use super::{PendingMatch, PendingReturn};
use crate::ast::{Clause, Expression, Pattern, SortItem, Statement};
use crate::error::{BuilderStage, InvalidStateError};

/// Runtime-checked counterpart of the staged builder.
///
/// Every call validates the current stage and returns [`InvalidStateError`]
/// instead of refusing to compile, which suits statements whose shape is only
/// known at runtime.
///
/// ```
/// use cypher_dsl::builder::{node, StatementBuilder};
///
/// let n = node("Person").named("n");
/// let statement = StatementBuilder::new()
///     .match_(n.clone())?
///     .where_(n.property("name").is_equal_to(cypher_dsl::builder::parameter("name")))?
///     .returning([n.as_expression()])?
///     .build()?;
/// assert_eq!(statement.clauses().len(), 2);
/// # Ok::<(), cypher_dsl::error::InvalidStateError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatementBuilder {
    completed: Vec<Clause>,
    current: Option<PendingMatch>,
    projection: Option<PendingReturn>,
}

impl StatementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> BuilderStage {
        if self.projection.is_some() {
            BuilderStage::Projecting
        } else if self.current.is_some() {
            BuilderStage::Reading
        } else {
            BuilderStage::Empty
        }
    }

    fn reject(&self, operation: &'static str) -> InvalidStateError {
        let stage = self.stage();
        trace!(operation, %stage, "rejected builder call");
        InvalidStateError::new(operation, stage)
    }

    pub fn match_(self, pattern: impl Into<Pattern>) -> Result<Self, InvalidStateError> {
        self.matching(pattern, false)
    }

    pub fn optional_match(self, pattern: impl Into<Pattern>) -> Result<Self, InvalidStateError> {
        self.matching(pattern, true)
    }

    /// Opens a new match. Fails once `RETURN` has been added.
    pub fn matching(
        mut self,
        pattern: impl Into<Pattern>,
        optional: bool,
    ) -> Result<Self, InvalidStateError> {
        if self.projection.is_some() {
            return Err(self.reject("match"));
        }
        if let Some(previous) = self.current.replace(PendingMatch::new(optional, pattern.into())) {
            self.completed.push(previous.into_clause());
        }
        Ok(self)
    }

    /// Filters the most recent match. A second call joins with `AND`.
    pub fn where_(mut self, condition: Expression) -> Result<Self, InvalidStateError> {
        if self.projection.is_none() {
            if let Some(current) = self.current.as_mut() {
                current.filter(condition);
                return Ok(self);
            }
        }
        Err(self.reject("where"))
    }

    /// Like [`where_`](Self::where_), but `None` is a no-op.
    pub fn where_if_present(self, condition: Option<Expression>) -> Result<Self, InvalidStateError> {
        match condition {
            Some(condition) => self.where_(condition),
            None if self.stage() == BuilderStage::Reading => Ok(self),
            None => Err(self.reject("where")),
        }
    }

    /// Whether the most recent match already carries a filter.
    pub fn has_condition(&self) -> bool {
        self.current.as_ref().is_some_and(PendingMatch::has_condition)
    }

    /// Adds `RETURN`. Fails on an empty item list.
    pub fn returning<I>(self, items: I) -> Result<Self, InvalidStateError>
    where
        I: IntoIterator,
        I::Item: Into<Expression>,
    {
        self.project(false, items)
    }

    pub fn returning_distinct<I>(self, items: I) -> Result<Self, InvalidStateError>
    where
        I: IntoIterator,
        I::Item: Into<Expression>,
    {
        self.project(true, items)
    }

    fn project<I>(mut self, distinct: bool, items: I) -> Result<Self, InvalidStateError>
    where
        I: IntoIterator,
        I::Item: Into<Expression>,
    {
        let projection = PendingReturn::new(distinct, items);
        if self.stage() != BuilderStage::Reading || !projection.has_items() {
            return Err(self.reject("returning"));
        }
        if let Some(current) = self.current.take() {
            self.completed.push(current.into_clause());
        }
        self.projection = Some(projection);
        Ok(self)
    }

    pub fn order_by<I>(mut self, items: I) -> Result<Self, InvalidStateError>
    where
        I: IntoIterator,
        I::Item: Into<SortItem>,
    {
        match self.projection.as_mut() {
            Some(projection) => {
                projection.order_by(items);
                Ok(self)
            }
            None => Err(self.reject("order_by")),
        }
    }

    pub fn skip(mut self, count: i64) -> Result<Self, InvalidStateError> {
        match self.projection.as_mut() {
            Some(projection) => {
                projection.skip(count);
                Ok(self)
            }
            None => Err(self.reject("skip")),
        }
    }

    pub fn limit(mut self, count: i64) -> Result<Self, InvalidStateError> {
        match self.projection.as_mut() {
            Some(projection) => {
                projection.limit(count);
                Ok(self)
            }
            None => Err(self.reject("limit")),
        }
    }

    /// Finishes the statement. Requires at least one match and a `RETURN`.
    pub fn build(mut self) -> Result<Statement, InvalidStateError> {
        match self.projection.take() {
            Some(projection) if !self.completed.is_empty() => {
                self.completed.push(projection.into_clause());
                Ok(Statement::new(self.completed))
            }
            _ => Err(self.reject("build")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{node, parameter};

    #[test]
    fn where_before_match_is_rejected() {
        let n = node("Person").named("n");
        let err = StatementBuilder::new()
            .where_(n.property("name").is_equal_to(parameter("name")))
            .unwrap_err();
        assert_eq!(err.operation, "where");
        assert_eq!(err.stage, BuilderStage::Empty);
        assert!(err.help.is_some());
    }

    #[test]
    fn empty_returning_is_rejected() {
        let n = node("Person").named("n");
        let err = StatementBuilder::new()
            .match_(n)
            .and_then(|b| b.returning(Vec::<Expression>::new()))
            .unwrap_err();
        assert_eq!(err.operation, "returning");
        assert_eq!(err.stage, BuilderStage::Reading);
        assert_eq!(err.help.as_deref(), Some("`returning` needs at least one item"));
    }

    #[test]
    fn order_by_before_returning_is_rejected() {
        let n = node("Person").named("n");
        let err = StatementBuilder::new()
            .match_(n.clone())
            .and_then(|b| b.order_by([n.property("name").ascending()]))
            .unwrap_err();
        assert_eq!(err.stage, BuilderStage::Reading);
    }

    #[test]
    fn match_after_return_is_rejected() {
        let n = node("Person").named("n");
        let err = StatementBuilder::new()
            .match_(n.clone())
            .and_then(|b| b.returning([n.as_expression()]))
            .and_then(|b| b.match_(node("Other")))
            .unwrap_err();
        assert_eq!(err.stage, BuilderStage::Projecting);
    }

    #[test]
    fn build_requires_return() {
        let err = StatementBuilder::new()
            .match_(node("Person").named("n"))
            .and_then(StatementBuilder::build)
            .unwrap_err();
        assert_eq!(err.operation, "build");
    }

    #[test]
    fn same_statement_as_staged_builder() {
        let n = node("Person").named("n");
        let condition = n.property("name").is_equal_to(parameter("name"));
        let dynamic = StatementBuilder::new()
            .match_(n.clone())
            .and_then(|b| b.where_(condition.clone()))
            .and_then(|b| b.returning([n.as_expression()]))
            .and_then(|b| b.limit(1))
            .and_then(StatementBuilder::build)
            .unwrap();
        let staged = crate::builder::match_(n.clone())
            .where_(condition)
            .returning([n.as_expression()])
            .limit(1)
            .build();
        assert_eq!(dynamic, staged);
    }
}
