//! Ready-to-use AST visitors.

pub mod collecting;
pub mod parameters;

pub use collecting::{AstNode, CollectingVisitor};
pub use parameters::referenced_parameters;
