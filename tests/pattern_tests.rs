//! Textual pattern parsing.

use cypher_dsl::ast::{Direction, PatternElement};
use cypher_dsl::builder::{match_, node, parameter};
use cypher_dsl::{Pattern, parse_pattern, render};

#[test]
fn parsed_pattern_equals_built_pattern() {
    let parsed = parse_pattern("(p:Person {name: $name})-[:ACTED_IN]->(m:Movie)").unwrap();
    let built: Pattern = node("Person")
        .named("p")
        .with_properties([("name", parameter("name"))])
        .relationship_to(node("Movie").named("m"), ["ACTED_IN"])
        .into();
    assert_eq!(parsed, built);
}

#[test]
fn parsed_pattern_drives_a_statement() {
    let pattern = parse_pattern("(a:Person)<-[:FOLLOWS]-(b:Person)").unwrap();
    let statement = match_(pattern)
        .returning([cypher_dsl::builder::variable("b")])
        .build();
    assert_eq!(
        render(&statement).unwrap(),
        "MATCH (a:Person)<-[:FOLLOWS]-(b:Person) RETURN b"
    );
}

#[test]
fn delimited_names_are_unescaped() {
    let pattern = parse_pattern("(`odd``name`:`Two Words`)").unwrap();
    let PatternElement::Node(node) = &pattern.elements()[0] else {
        panic!("expected a node");
    };
    assert_eq!(node.name().map(|n| n.as_str()), Some("odd`name"));
    assert_eq!(node.labels()[0].as_str(), "Two Words");
}

#[test]
fn long_chains() {
    let pattern = parse_pattern("(a)-->(b)-->(c)<--(d)--(e)").unwrap();
    let PatternElement::Chain(chain) = &pattern.elements()[0] else {
        panic!("expected a chain");
    };
    let directions: Vec<_> = chain
        .hops()
        .iter()
        .map(|hop| hop.relationship().direction())
        .collect();
    assert_eq!(
        directions,
        [
            Direction::Outgoing,
            Direction::Outgoing,
            Direction::Incoming,
            Direction::Undirected
        ]
    );
}

#[test]
fn syntax_errors_point_at_input() {
    let cases = [
        ("(n:)", 3..4, "expected a label, found `)`"),
        ("(a)-[:R]>(b)", 8..9, "unexpected input `>`"),
        ("(a)-[:R](b)", 8..9, "expected `-` or `->` to close the relationship, found `(`"),
        ("(n {x 1})", 6..7, "expected `:`, found `1`"),
        ("(n {x: -$y})", 8..10, "expected a number after `-`, found `$y`"),
    ];
    for (source, span, message) in cases {
        let err = parse_pattern(source).unwrap_err();
        assert_eq!(err.span(), span, "{source}");
        assert_eq!(err.message, message, "{source}");
    }
}

#[test]
fn errors_render_with_miette() {
    let err = parse_pattern("(a)<-[:R]->(b)").unwrap_err();
    let report = format!("{:?}", miette::Report::new(err));
    assert!(report.contains("a relationship cannot point in both directions"));
}
