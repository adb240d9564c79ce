//! Build, render and derive Cypher statements.
//!
//! Statements are assembled with a staged builder, represented as an
//! immutable AST, walked with an enter/leave visitor and rendered to query
//! text. Runtime values travel as named parameters next to the text and are
//! never inlined. The [`example`] module derives statements from
//! query-by-example probes.
//!
//! # Example
//!
//! ```
//! use cypher_dsl::builder::{match_, node, parameter};
//! use cypher_dsl::renderer::render;
//!
//! let person = node("Person").named("n");
//! let statement = match_(person.clone())
//!     .where_(person.property("name").is_equal_to(parameter("name")))
//!     .returning([person.as_expression()])
//!     .limit(1)
//!     .build();
//!
//! assert_eq!(
//!     render(&statement).unwrap(),
//!     "MATCH (n:Person) WHERE n.name = $name RETURN n LIMIT 1"
//! );
//! ```

pub mod ast;
pub mod builder;
pub mod error;
pub mod example;
pub mod lexer;
pub mod parameters;
pub mod parser;
pub mod renderer;

// Re-export the entry points most callers need.
pub use ast::{Expression, Pattern, Span, Spanned, Statement};
pub use error::{Error, Result};
pub use parameters::Parameters;
pub use parser::parse_pattern;
pub use renderer::{RenderConfig, Renderer, render};
