//! Query by example.
//!
//! A probe's populated fields become equality (or string-matcher)
//! conditions on a root node `n`. Values are bound as parameters and never
//! inlined.
//!
//! ```
//! use cypher_dsl::example::{
//!     Example, ExampleQueries, NodeDescription, ProbeObject, PropertyDescription, SchemaCatalog,
//! };
//!
//! let schema = SchemaCatalog::new().with(
//!     NodeDescription::new("Person", "Person")
//!         .with_property(PropertyDescription::simple("name"))
//!         .with_property(PropertyDescription::simple("age")),
//! );
//! let probe = ProbeObject::new("Person").with_field("name", "Alice");
//! let query = ExampleQueries::new(&schema).find_all(&Example::of(probe))?;
//! assert_eq!(query.cypher(), "MATCH (n:Person) WHERE n.name = $name RETURN *");
//! assert_eq!(query.parameters().get("name"), Some(&"Alice".into()));
//! # Ok::<(), cypher_dsl::Error>(())
//! ```

mod executable;
mod matcher;
mod predicate;
mod probe;
mod queries;
mod schema;
mod sort;

pub use executable::{ExecutableQuery, QueryRunner};
pub use matcher::{Example, ExampleMatcher, MatchMode, NullHandling, StringMatcher};
pub use predicate::{Predicate, ROOT_NODE_NAME, prepare_match_of, root_node};
pub use probe::{Probe, ProbeObject};
pub use queries::{ExampleQueries, PagedQuery, PreparedQuery, ResultShape};
pub use schema::{
    NodeDescription, NodeDescriptionProvider, PropertyDescription, PropertyKind, SchemaCatalog,
};
pub use sort::{Pageable, Sort, SortOrder, add_paging, to_sort_items};
