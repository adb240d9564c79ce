//! Running prepared queries through an external runner.

use tracing::debug;

use super::queries::PreparedQuery;
use crate::error::ExecutionError;
use crate::parameters::Parameters;

/// Executes query text against a database. Implemented outside this crate,
/// typically over a driver session.
pub trait QueryRunner {
    type Record;
    type Error: std::error::Error + 'static;

    fn run(&self, cypher: &str, parameters: &Parameters) -> Result<Vec<Self::Record>, Self::Error>;
}

/// A prepared query bound to a runner.
pub struct ExecutableQuery<'r, R> {
    runner: &'r R,
    query: PreparedQuery,
}

impl<'r, R: QueryRunner> ExecutableQuery<'r, R> {
    pub fn create(runner: &'r R, query: PreparedQuery) -> Self {
        Self { runner, query }
    }

    pub fn query(&self) -> &PreparedQuery {
        &self.query
    }

    pub fn results(&self) -> Result<Vec<R::Record>, ExecutionError<R::Error>> {
        debug!(
            shape = ?self.query.shape(),
            parameters = self.query.parameters().len(),
            "running prepared query"
        );
        self.runner
            .run(self.query.cypher(), self.query.parameters())
            .map_err(ExecutionError::Runner)
    }

    /// At most one record; more than one is an error.
    pub fn single_result(&self) -> Result<Option<R::Record>, ExecutionError<R::Error>> {
        let mut records = self.results()?;
        if records.len() > 1 {
            return Err(ExecutionError::IncorrectResultSize {
                expected: 1,
                actual: records.len(),
            });
        }
        Ok(records.pop())
    }

    /// Exactly one record.
    pub fn required_single_result(&self) -> Result<R::Record, ExecutionError<R::Error>> {
        self.single_result()?.ok_or_else(|| ExecutionError::NoResult {
            expected: 1,
            cypher: self.query.cypher().to_string(),
        })
    }
}
