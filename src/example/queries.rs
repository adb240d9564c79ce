//! Ready-to-run query-by-example statements.

use serde::Serialize;
use tracing::debug;

use super::matcher::Example;
use super::predicate::{Predicate, prepare_match_of};
use super::probe::Probe;
use super::schema::NodeDescriptionProvider;
use super::sort::{Pageable, Sort, add_paging, to_sort_items};
use crate::ast::Statement;
use crate::ast::visitors::referenced_parameters;
use crate::builder::{OngoingReadingAndReturn, asterisk, count};
use crate::error::{RenderError, Result};
use crate::parameters::Parameters;
use crate::renderer::Renderer;

/// What the caller should expect back from running a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultShape {
    /// Zero or more rows.
    Many,
    /// At most one row.
    Single,
    /// Exactly one row holding a count.
    Count,
    /// Zero or one row; only its presence matters.
    Exists,
}

/// Query text plus the parameters it references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedQuery {
    cypher: String,
    parameters: Parameters,
    shape: ResultShape,
}

impl PreparedQuery {
    /// Renders `statement` and checks that every referenced parameter is bound.
    pub fn new(
        statement: &Statement,
        parameters: Parameters,
        shape: ResultShape,
        renderer: &Renderer,
    ) -> std::result::Result<Self, RenderError> {
        if let Some(name) = referenced_parameters(statement)
            .into_iter()
            .find(|name| !parameters.contains(name))
        {
            return Err(RenderError::UnboundParameter { name });
        }
        let cypher = renderer.render(statement)?;
        Ok(Self {
            cypher,
            parameters,
            shape,
        })
    }

    pub fn cypher(&self) -> &str {
        &self.cypher
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn shape(&self) -> ResultShape {
        self.shape
    }
}

/// Content query plus the count query for its total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedQuery {
    pub content: PreparedQuery,
    pub count: PreparedQuery,
    pub page: u64,
    pub size: u64,
}

impl PagedQuery {
    /// Total number of pages given the result of the count query.
    pub fn total_pages(&self, total: u64) -> u64 {
        if self.size == 0 {
            return u64::from(total > 0);
        }
        total.div_ceil(self.size)
    }
}

/// Builds the query-by-example operations over a schema.
pub struct ExampleQueries<'a> {
    schema: &'a dyn NodeDescriptionProvider,
    renderer: Renderer,
}

impl<'a> ExampleQueries<'a> {
    pub fn new(schema: &'a dyn NodeDescriptionProvider) -> Self {
        Self {
            schema,
            renderer: Renderer::default(),
        }
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    fn returning_all<P: Probe>(
        &self,
        example: &Example<P>,
    ) -> Result<(Predicate, OngoingReadingAndReturn)> {
        let predicate = Predicate::create(self.schema, example)?;
        let returning = predicate.apply_to(prepare_match_of).returning([asterisk()]);
        Ok((predicate, returning))
    }

    fn prepare(
        &self,
        statement: &Statement,
        predicate: Predicate,
        shape: ResultShape,
    ) -> Result<PreparedQuery> {
        let query = PreparedQuery::new(statement, predicate.into_parameters(), shape, &self.renderer)?;
        debug!(
            ?shape,
            parameters = query.parameters().len(),
            "prepared example query"
        );
        Ok(query)
    }

    /// `MATCH (n:Label) WHERE ... RETURN *`, expecting at most one row.
    pub fn find_one<P: Probe>(&self, example: &Example<P>) -> Result<PreparedQuery> {
        let (predicate, returning) = self.returning_all(example)?;
        self.prepare(&returning.build(), predicate, ResultShape::Single)
    }

    pub fn find_all<P: Probe>(&self, example: &Example<P>) -> Result<PreparedQuery> {
        let (predicate, returning) = self.returning_all(example)?;
        self.prepare(&returning.build(), predicate, ResultShape::Many)
    }

    pub fn find_all_sorted<P: Probe>(
        &self,
        example: &Example<P>,
        sort: &Sort,
    ) -> Result<PreparedQuery> {
        let (predicate, returning) = self.returning_all(example)?;
        let items = to_sort_items(predicate.node_description(), sort)?;
        self.prepare(&returning.order_by(items).build(), predicate, ResultShape::Many)
    }

    /// The page content plus a count query for the total.
    pub fn find_page<P: Probe>(
        &self,
        example: &Example<P>,
        pageable: &Pageable,
    ) -> Result<PagedQuery> {
        let (predicate, returning) = self.returning_all(example)?;
        let statement = add_paging(predicate.node_description(), pageable, returning)?.build();
        Ok(PagedQuery {
            content: self.prepare(&statement, predicate, ResultShape::Many)?,
            count: self.count(example)?,
            page: pageable.page(),
            size: pageable.size(),
        })
    }

    /// `... RETURN count(*)`
    pub fn count<P: Probe>(&self, example: &Example<P>) -> Result<PreparedQuery> {
        let predicate = Predicate::create(self.schema, example)?;
        let statement = predicate
            .apply_to(prepare_match_of)
            .returning([count(asterisk())])
            .build();
        self.prepare(&statement, predicate, ResultShape::Count)
    }

    /// `... RETURN * LIMIT 1`; a row means a match exists.
    pub fn exists<P: Probe>(&self, example: &Example<P>) -> Result<PreparedQuery> {
        let (predicate, returning) = self.returning_all(example)?;
        self.prepare(&returning.limit(1).build(), predicate, ResultShape::Exists)
    }
}
