//! Shared fixtures for the integration tests.
//!
//! - [`movie_schema`] - `Person` and `Movie` node descriptions
//! - [`render_ok`] - render a statement, panicking with the diagnostic on error
//! - [`assert_no_literal_leak`] - assert that no probe value appears in query text

#![allow(dead_code)]

use cypher_dsl::example::{NodeDescription, PropertyDescription, SchemaCatalog};
use cypher_dsl::{Parameters, Statement, render};
use serde_json::Value;

/// `Person(id, name, born -> yearOfBirth, email, movies)` and `Movie(title, released)`.
pub fn movie_schema() -> SchemaCatalog {
    SchemaCatalog::new()
        .with(
            NodeDescription::new("Person", "Person")
                .with_property(PropertyDescription::simple("id").internal_id())
                .with_property(PropertyDescription::simple("name"))
                .with_property(PropertyDescription::new("born", "yearOfBirth"))
                .with_property(PropertyDescription::simple("email"))
                .with_property(PropertyDescription::simple("movies").association()),
        )
        .with(
            NodeDescription::new("Movie", "Movie")
                .with_additional_label("Content")
                .with_property(PropertyDescription::simple("title"))
                .with_property(PropertyDescription::simple("released")),
        )
}

/// Renders with the default configuration.
///
/// # Panics
/// Panics with the miette report if rendering fails.
pub fn render_ok(statement: &Statement) -> String {
    match render(statement) {
        Ok(cypher) => cypher,
        Err(err) => panic!("render failed: {:?}", miette::Report::new(err)),
    }
}

/// Asserts that no bound string value shows up verbatim in `cypher`.
pub fn assert_no_literal_leak(cypher: &str, parameters: &Parameters) {
    for (name, value) in parameters {
        if let Value::String(text) = value {
            assert!(
                !cypher.contains(text.as_str()),
                "value of ${name} leaked into `{cypher}`"
            );
        }
        let rendered = value.to_string();
        assert!(
            !cypher.contains(&rendered),
            "value of ${name} ({rendered}) leaked into `{cypher}`"
        );
    }
}
