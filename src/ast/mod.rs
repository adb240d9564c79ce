//! Statement AST: immutable nodes, the visitor protocol and ready-made
//! visitors.

mod clause;
mod expression;
mod name;
mod pattern;
mod span;
mod statement;
mod visit_macros;
pub mod visitor;
pub mod visitors;

pub use clause::{Limit, Match, Order, Projection, Return, Skip, SortDirection, SortItem, Where};
pub use expression::{
    ComparisonOperator, Expression, FunctionInvocation, Literal, LogicalOperator, Operator,
    UnaryOperator,
};
pub use name::SymbolicName;
pub use pattern::{
    Direction, Hop, NodePattern, Pattern, PatternElement, Properties, PropertyEntry,
    RelationshipChain, RelationshipPattern,
};
pub use span::{Span, Spanned};
pub use statement::{Clause, ReadingClause, Statement};
pub use visitor::{VisitResult, Visitable, Visitor, visit_if_present};
