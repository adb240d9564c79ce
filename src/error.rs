//! Error taxonomy.
//!
//! Every error derives `miette::Diagnostic` so hosts can render them with
//! codes, help text and, for pattern syntax errors, a labelled source span.

use std::fmt;

use miette::{Diagnostic, SourceSpan};
use smol_str::SmolStr;
use thiserror::Error;

use crate::ast::Span;

/// Stage of a runtime-checked [`StatementBuilder`](crate::builder::StatementBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderStage {
    /// Nothing has been added yet.
    Empty,
    /// At least one reading clause is open.
    Reading,
    /// `RETURN` has been added.
    Projecting,
}

impl fmt::Display for BuilderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderStage::Empty => write!(f, "empty"),
            BuilderStage::Reading => write!(f, "reading"),
            BuilderStage::Projecting => write!(f, "projecting"),
        }
    }
}

/// A builder operation was invoked in a stage that does not permit it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("`{operation}` is not allowed while the statement builder is {stage}")]
#[diagnostic(code(cypher::invalid_state))]
pub struct InvalidStateError {
    /// The rejected operation.
    pub operation: &'static str,
    /// The stage the builder was in.
    pub stage: BuilderStage,
    #[help]
    pub help: Option<String>,
}

impl InvalidStateError {
    pub(crate) fn new(operation: &'static str, stage: BuilderStage) -> Self {
        let help = match (operation, stage) {
            ("where", BuilderStage::Empty) => Some("add a MATCH before filtering".to_string()),
            ("returning", BuilderStage::Empty) | ("build", BuilderStage::Empty) => {
                Some("a statement needs at least one reading clause".to_string())
            }
            ("returning", BuilderStage::Reading) => {
                Some("`returning` needs at least one item".to_string())
            }
            ("order_by" | "skip" | "limit" | "build", BuilderStage::Reading) => {
                Some("call `returning` first".to_string())
            }
            ("order_by" | "skip" | "limit", BuilderStage::Empty) => {
                Some("add a MATCH and call `returning` first".to_string())
            }
            _ => None,
        };
        Self {
            operation,
            stage,
            help,
        }
    }
}

/// A probe or matcher option cannot be expressed as a predicate.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum UnsupportedExampleError {
    #[error("no node description is registered for type `{type_name}`")]
    #[diagnostic(code(cypher::example::unknown_type))]
    UnknownType { type_name: SmolStr },

    #[error("case-insensitive matching is not supported for examples")]
    #[diagnostic(
        code(cypher::example::ignore_case),
        help("normalize the stored values or query with an explicit toLower condition")
    )]
    IgnoreCase,

    #[error("ignored property paths are not supported for examples: {}", .paths.join(", "))]
    #[diagnostic(
        code(cypher::example::ignored_paths),
        help("leave the field unset on the probe instead")
    )]
    IgnoredPaths { paths: Vec<SmolStr> },

    #[error("field `{field}` of `{type_name}` is an association and cannot be matched by example")]
    #[diagnostic(code(cypher::example::association))]
    Association { type_name: SmolStr, field: SmolStr },

    #[error("field `{field}` of `{type_name}` holds a nested object")]
    #[diagnostic(
        code(cypher::example::nested_value),
        help("only scalar and list values can be matched by example")
    )]
    NestedValue { type_name: SmolStr, field: SmolStr },

    #[error("probe field `{field}` is not mapped on `{type_name}`")]
    #[diagnostic(code(cypher::example::unmapped_field))]
    UnmappedField { type_name: SmolStr, field: SmolStr },

    #[error("cannot sort `{type_name}` by unknown property `{property}`")]
    #[diagnostic(code(cypher::example::unknown_sort_property))]
    UnknownSortProperty { type_name: SmolStr, property: SmolStr },

    #[error("page {page} of size {size} does not fit the integer range of SKIP and LIMIT")]
    #[diagnostic(code(cypher::example::page_out_of_range))]
    PageOutOfRange { page: u64, size: u64 },

    #[error("invalid probe: {reason}")]
    #[diagnostic(code(cypher::example::invalid_probe))]
    InvalidProbe { reason: String },
}

/// The tree handed to the renderer is malformed.
///
/// The builders never produce such trees; seeing one is a defect.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RenderError {
    #[error("statement has no reading clause")]
    #[diagnostic(code(cypher::render::missing_reading_clause))]
    MissingReadingClause,

    #[error("RETURN must be the last clause of a statement")]
    #[diagnostic(code(cypher::render::misplaced_return))]
    MisplacedReturn,

    #[error("pattern has no elements")]
    #[diagnostic(code(cypher::render::empty_pattern))]
    EmptyPattern,

    #[error("RETURN has no projection items")]
    #[diagnostic(code(cypher::render::empty_projection))]
    EmptyProjection,

    #[error("ORDER BY has no sort items")]
    #[diagnostic(code(cypher::render::empty_order))]
    EmptyOrder,

    #[error("empty {context} name")]
    #[diagnostic(code(cypher::render::empty_name))]
    EmptyName { context: &'static str },

    #[error("float literal {value} is not finite")]
    #[diagnostic(code(cypher::render::non_finite_literal))]
    NonFiniteLiteral { value: String },

    #[error("{clause} count {value} is negative")]
    #[diagnostic(code(cypher::render::negative_count))]
    NegativeCount { clause: &'static str, value: i64 },

    #[error("parameter `${name}` is referenced but not bound")]
    #[diagnostic(code(cypher::render::unbound_parameter))]
    UnboundParameter { name: SmolStr },
}

/// A textual pattern could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(cypher::pattern::syntax))]
pub struct PatternSyntaxError {
    pub message: String,
    #[source_code]
    pub source_text: String,
    #[label("here")]
    pub location: SourceSpan,
    #[help]
    pub help: Option<String>,
}

impl PatternSyntaxError {
    pub(crate) fn new(message: impl Into<String>, source_text: &str, span: Span) -> Self {
        Self {
            message: message.into(),
            source_text: source_text.to_string(),
            location: SourceSpan::from(span),
            help: None,
        }
    }

    pub(crate) fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Byte range of the offending input.
    pub fn span(&self) -> Span {
        let start = self.location.offset();
        start..start + self.location.len()
    }
}

/// Failure while running a prepared query through a [`QueryRunner`].
///
/// [`QueryRunner`]: crate::example::QueryRunner
#[derive(Debug, Error)]
pub enum ExecutionError<E>
where
    E: std::error::Error + 'static,
{
    #[error("query runner failed")]
    Runner(#[source] E),

    #[error("incorrect result size: expected {expected}, actual {actual}")]
    IncorrectResultSize { expected: usize, actual: usize },

    #[error("expected {expected} result(s) but none were returned for `{cypher}`")]
    NoResult { expected: usize, cypher: String },
}

/// Any error produced by this crate, except query execution.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidState(#[from] InvalidStateError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    UnsupportedExample(#[from] UnsupportedExampleError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    PatternSyntax(#[from] PatternSyntaxError),
}

/// Result alias defaulting to the crate [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
