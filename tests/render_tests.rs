//! Rendering output and determinism.

mod common;

use common::render_ok;
use cypher_dsl::ast::visitors::referenced_parameters;
use cypher_dsl::builder::{
    any_node, asterisk, collect, id, literal_boolean, literal_string, match_, max, node,
    null_literal, parameter, sum,
};
use cypher_dsl::error::RenderError;
use cypher_dsl::{Pattern, RenderConfig, Renderer};

#[test]
fn rendering_is_deterministic() {
    let p = node("Person").named("p");
    let m = node("Movie").named("m");
    let statement = match_(p.clone().relationship_to(m.clone(), ["ACTED_IN"]).named("r"))
        .where_(
            p.property("name")
                .is_equal_to(parameter("name"))
                .and(m.property("released").gt(parameter("year"))),
        )
        .returning([p.property("name"), collect(m.property("title")).as_("titles")])
        .order_by([p.property("name").ascending()])
        .build();

    let first = render_ok(&statement);
    let second = render_ok(&statement.clone());
    assert_eq!(first, second);
    assert_eq!(
        referenced_parameters(&statement),
        referenced_parameters(&statement.clone())
    );
    assert_eq!(
        first,
        "MATCH (p:Person)-[r:ACTED_IN]->(m:Movie) WHERE p.name = $name AND m.released > $year \
         RETURN p.name, collect(m.title) AS titles ORDER BY p.name ASC"
    );
}

#[test]
fn static_literals_are_inlined() {
    let n = node("Person").named("n");
    let statement = match_(n.clone())
        .where_(
            n.property("active")
                .is_equal_to(literal_boolean(true))
                .and(n.property("nickname").is_not_equal_to(null_literal()))
                .and(n.property("title").ends_with(literal_string("Jr."))),
        )
        .returning([id(n.as_expression()), sum(n.property("score")), max(n.property("score"))])
        .build();
    assert_eq!(
        render_ok(&statement),
        "MATCH (n:Person) WHERE n.active = true AND n.nickname <> NULL AND n.title ENDS WITH 'Jr.' \
         RETURN id(n), sum(n.score), max(n.score)"
    );
}

#[test]
fn reserved_and_unusual_names_are_quoted() {
    let n = any_node().named("order").labeled("Sales Order");
    let statement = match_(n.clone())
        .returning([n.property("2nd").as_("return")])
        .build();
    assert_eq!(
        render_ok(&statement),
        "MATCH (`order`:`Sales Order`) RETURN `order`.`2nd` AS `return`"
    );
}

#[test]
fn parsed_patterns_render_back() {
    for source in [
        "(n:Person {name: $name})",
        "(a)-[:KNOWS]->(b)<-[r:LIKES|LOVES]-(c)",
        "(a:A), (b:B)-[{since: 2001}]-(c)",
        "(n {title: 'It\\'s', ratio: 0.5, flag: false, gone: NULL})",
    ] {
        let pattern: Pattern = source.parse().unwrap();
        let rendered = Renderer::default().render_pattern(&pattern).unwrap();
        assert_eq!(rendered, source);
    }
}

#[test]
fn pretty_output() {
    let n = node("Person").named("n");
    let statement = match_(n.clone())
        .where_(n.property("name").is_equal_to(parameter("name")))
        .returning([asterisk()])
        .limit(3)
        .build();
    let config: RenderConfig = serde_json::from_str(r#"{"pretty": true}"#).unwrap();
    assert_eq!(
        Renderer::new(config).render(&statement).unwrap(),
        "MATCH (n:Person) WHERE n.name = $name\nRETURN * LIMIT 3"
    );
}

#[test]
fn render_errors_are_diagnostics() {
    let unnamed = node("Person");
    let statement = match_(unnamed.clone())
        .returning([unnamed.property("name")])
        .build();
    let err = cypher_dsl::render(&statement).unwrap_err();
    assert_eq!(err, RenderError::EmptyName { context: "variable" });
    let code = miette::Diagnostic::code(&err).map(|code| code.to_string());
    assert!(code.is_some_and(|code| code.starts_with("cypher::render::")));
}
