//! Statement root and clause enums.

use crate::ast::{Match, Return};

/// A built Cypher statement: an ordered sequence of clauses.
///
/// Statements only come out of the builders, which guarantee at least one
/// reading clause followed by exactly one `RETURN`.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub(crate) clauses: Vec<Clause>,
}

impl Statement {
    pub(crate) fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Iterates the reading clauses in declaration order.
    pub fn reading_clauses(&self) -> impl Iterator<Item = &ReadingClause> {
        self.clauses.iter().filter_map(|clause| match clause {
            Clause::Reading(reading) => Some(reading),
            Clause::Return(_) => None,
        })
    }

    /// Returns the `RETURN` clause, if any.
    pub fn return_clause(&self) -> Option<&Return> {
        self.clauses.iter().find_map(|clause| match clause {
            Clause::Return(ret) => Some(ret),
            Clause::Reading(_) => None,
        })
    }
}

/// A top-level clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    Reading(ReadingClause),
    Return(Return),
}

/// Clauses that read data.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadingClause {
    Match(Match),
}

impl From<Match> for Clause {
    fn from(m: Match) -> Self {
        Clause::Reading(ReadingClause::Match(m))
    }
}
