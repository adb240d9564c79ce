//! Building, rendering and example translation benchmarks.
//!
//! ```bash
//! cargo bench
//! cargo bench rendering
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use cypher_dsl::builder::{asterisk, count, match_, node, parameter};
use cypher_dsl::example::{
    Example, ExampleQueries, NodeDescription, Predicate, ProbeObject, PropertyDescription,
    SchemaCatalog,
};
use cypher_dsl::{Statement, parse_pattern, render};

// ============================================================================
// Fixtures
// ============================================================================

fn wide_statement(conditions: usize) -> Statement {
    let n = node("Person").named("n");
    let condition = (0..conditions)
        .map(|i| n.property(format!("p{i}")).is_equal_to(parameter(format!("p{i}"))))
        .reduce(|lhs, rhs| lhs.and(rhs));
    match_(n.clone())
        .where_if_present(condition)
        .returning([n.as_expression(), count(asterisk())])
        .order_by([n.property("p0").ascending()])
        .skip(10)
        .limit(10)
        .build()
}

fn schema(fields: usize) -> SchemaCatalog {
    let description = (0..fields).fold(NodeDescription::new("Person", "Person"), |d, i| {
        d.with_property(PropertyDescription::simple(format!("field{i}")))
    });
    SchemaCatalog::new().with(description)
}

fn probe(fields: usize) -> ProbeObject {
    (0..fields).fold(ProbeObject::new("Person"), |p, i| {
        p.with_field(format!("field{i}"), format!("value {i}"))
    })
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    for conditions in [1, 10, 100] {
        let statement = wide_statement(conditions);
        group.throughput(Throughput::Elements(conditions as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(conditions),
            &statement,
            |b, statement| b.iter(|| render(black_box(statement))),
        );
    }
    group.finish();
}

fn bench_building(c: &mut Criterion) {
    c.bench_function("build_wide_statement", |b| {
        b.iter(|| wide_statement(black_box(25)))
    });
}

fn bench_pattern_parsing(c: &mut Criterion) {
    let source = "(a:Person {name: $name})-[:KNOWS]->(b:Person)<-[r:LIKES|LOVES]-(c), (d:Movie)";
    c.bench_function("parse_pattern", |b| b.iter(|| parse_pattern(black_box(source))));
}

fn bench_example_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("example_translation");
    for fields in [1, 8, 32] {
        let schema = schema(fields);
        let example = Example::of(probe(fields));
        group.bench_with_input(BenchmarkId::new("predicate", fields), &example, |b, example| {
            b.iter(|| Predicate::create(&schema, black_box(example)))
        });
        group.bench_with_input(BenchmarkId::new("find_all", fields), &example, |b, example| {
            let queries = ExampleQueries::new(&schema);
            b.iter(|| queries.find_all(black_box(example)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_rendering,
    bench_building,
    bench_pattern_parsing,
    bench_example_translation
);
criterion_main!(benches);
