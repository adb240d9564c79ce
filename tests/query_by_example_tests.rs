//! Query-by-example operations and single-result semantics.

mod common;

use std::cell::RefCell;

use common::movie_schema;
use cypher_dsl::Error;
use cypher_dsl::ast::SortDirection;
use cypher_dsl::error::{ExecutionError, UnsupportedExampleError};
use cypher_dsl::example::{
    Example, ExampleQueries, ExecutableQuery, Pageable, ProbeObject, QueryRunner, ResultShape,
    Sort, SortOrder,
};
use cypher_dsl::{Parameters, RenderConfig, Renderer};
use serde_json::{Value, json};

fn keanu() -> Example<ProbeObject> {
    Example::of(ProbeObject::new("Person").with_field("name", "Keanu"))
}

#[test]
fn find_one_and_find_all() {
    let schema = movie_schema();
    let queries = ExampleQueries::new(&schema);

    let one = queries.find_one(&keanu()).unwrap();
    assert_eq!(one.cypher(), "MATCH (n:Person) WHERE n.name = $name RETURN *");
    assert_eq!(one.shape(), ResultShape::Single);

    let all = queries.find_all(&keanu()).unwrap();
    assert_eq!(all.cypher(), one.cypher());
    assert_eq!(all.shape(), ResultShape::Many);
    assert_eq!(all.parameters(), one.parameters());
}

#[test]
fn sorted_find_all() {
    let schema = movie_schema();
    let sort = Sort::by([SortOrder::desc("born"), SortOrder::asc("name").ignoring_case()]);
    let query = ExampleQueries::new(&schema)
        .find_all_sorted(&keanu(), &sort)
        .unwrap();
    assert_eq!(
        query.cypher(),
        "MATCH (n:Person) WHERE n.name = $name RETURN * \
         ORDER BY n.yearOfBirth DESC, toLower(n.name) ASC"
    );
    assert_eq!(sort.orders()[0].direction, SortDirection::Descending);
}

#[test]
fn scenario_d_paged_find_all() {
    let schema = movie_schema();
    let pageable = Pageable::of(3, 20).with_sort(Sort::by([SortOrder::asc("name")]));
    let page = ExampleQueries::new(&schema)
        .find_page(&keanu(), &pageable)
        .unwrap();
    assert_eq!(
        page.content.cypher(),
        "MATCH (n:Person) WHERE n.name = $name RETURN * ORDER BY n.name ASC SKIP 60 LIMIT 20"
    );
    assert_eq!(
        page.count.cypher(),
        "MATCH (n:Person) WHERE n.name = $name RETURN count(*)"
    );
    assert_eq!(page.count.shape(), ResultShape::Count);
    assert_eq!(page.total_pages(61), 4);
}

#[test]
fn count_and_exists() {
    let schema = movie_schema();
    let queries = ExampleQueries::new(&schema);
    assert_eq!(
        queries.count(&keanu()).unwrap().cypher(),
        "MATCH (n:Person) WHERE n.name = $name RETURN count(*)"
    );
    let exists = queries.exists(&keanu()).unwrap();
    assert_eq!(
        exists.cypher(),
        "MATCH (n:Person) WHERE n.name = $name RETURN * LIMIT 1"
    );
    assert_eq!(exists.shape(), ResultShape::Exists);
}

#[test]
fn custom_renderer_is_used() {
    let schema = movie_schema();
    let query = ExampleQueries::new(&schema)
        .with_renderer(Renderer::new(RenderConfig::pretty()))
        .find_all(&keanu())
        .unwrap();
    assert_eq!(query.cypher(), "MATCH (n:Person) WHERE n.name = $name\nRETURN *");
}

#[test]
fn translation_errors_surface_as_crate_errors() {
    let schema = movie_schema();
    let probe = ProbeObject::new("Person").with_field("movies", json!(["The Matrix"]));
    let err = ExampleQueries::new(&schema)
        .find_all(&Example::of(probe))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedExample(UnsupportedExampleError::Association { .. })
    ));

    let err = ExampleQueries::new(&schema)
        .find_all_sorted(&keanu(), &Sort::by([SortOrder::asc("rating")]))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedExample(UnsupportedExampleError::UnknownSortProperty { .. })
    ));
}

#[test]
fn prepared_queries_serialize() {
    let schema = movie_schema();
    let query = ExampleQueries::new(&schema).find_one(&keanu()).unwrap();
    assert_eq!(
        serde_json::to_value(&query).unwrap(),
        json!({
            "cypher": "MATCH (n:Person) WHERE n.name = $name RETURN *",
            "parameters": {"name": "Keanu"},
            "shape": "single"
        })
    );
}

#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
struct Unavailable;

/// Returns canned rows and records what it was asked to run.
struct CannedRunner {
    rows: Result<Vec<Value>, ()>,
    seen: RefCell<Vec<(String, Parameters)>>,
}

impl CannedRunner {
    fn returning(rows: Vec<Value>) -> Self {
        Self {
            rows: Ok(rows),
            seen: RefCell::default(),
        }
    }

    fn failing() -> Self {
        Self {
            rows: Err(()),
            seen: RefCell::default(),
        }
    }
}

impl QueryRunner for CannedRunner {
    type Record = Value;
    type Error = Unavailable;

    fn run(&self, cypher: &str, parameters: &Parameters) -> Result<Vec<Value>, Unavailable> {
        self.seen
            .borrow_mut()
            .push((cypher.to_string(), parameters.clone()));
        self.rows.clone().map_err(|()| Unavailable)
    }
}

fn prepared() -> cypher_dsl::example::PreparedQuery {
    let schema = movie_schema();
    ExampleQueries::new(&schema).find_one(&keanu()).unwrap()
}

#[test]
fn runner_receives_text_and_parameters() {
    let runner = CannedRunner::returning(vec![json!({"name": "Keanu"})]);
    let query = ExecutableQuery::create(&runner, prepared());
    assert_eq!(query.results().unwrap().len(), 1);

    let seen = runner.seen.borrow();
    assert_eq!(seen[0].0, "MATCH (n:Person) WHERE n.name = $name RETURN *");
    assert_eq!(seen[0].1.get("name"), Some(&json!("Keanu")));
}

#[test]
fn single_result_semantics() {
    let none = CannedRunner::returning(Vec::new());
    assert_eq!(ExecutableQuery::create(&none, prepared()).single_result().unwrap(), None);
    let err = ExecutableQuery::create(&none, prepared())
        .required_single_result()
        .unwrap_err();
    assert!(matches!(err, ExecutionError::NoResult { expected: 1, .. }));

    let one = CannedRunner::returning(vec![json!(1)]);
    assert_eq!(
        ExecutableQuery::create(&one, prepared())
            .required_single_result()
            .unwrap(),
        json!(1)
    );

    let two = CannedRunner::returning(vec![json!(1), json!(2)]);
    let err = ExecutableQuery::create(&two, prepared())
        .single_result()
        .unwrap_err();
    assert!(matches!(
        err,
        ExecutionError::IncorrectResultSize {
            expected: 1,
            actual: 2
        }
    ));
}

#[test]
fn runner_failures_are_wrapped() {
    let runner = CannedRunner::failing();
    let err = ExecutableQuery::create(&runner, prepared())
        .results()
        .unwrap_err();
    assert_eq!(err.to_string(), "query runner failed");
    assert!(matches!(err, ExecutionError::Runner(Unavailable)));
}
