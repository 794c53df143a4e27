use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlexpr::{Builder, Dialect, Predicate, SelectQb, col, desc, qb};

/// SELECT col0, col1, ... FROM t WHERE col0 = $1 AND col1 = $2 ...
fn build_select(n: usize) -> SelectQb {
    let filter = (0..n)
        .map(|i| col(format!("col{i}")).eq(i as i64))
        .reduce(Predicate::and);
    let stmt = qb::select("t").columns((0..n).map(|i| format!("col{i}")));
    match filter {
        Some(p) => stmt.filter(p),
        None => stmt,
    }
}

/// Alternating AND/OR so every level needs parentheses.
fn build_nested(depth: usize) -> Predicate {
    (0..depth).fold(col("x").eq(0), |acc, i| {
        let leaf = col("x").gt(i as i64);
        if i % 2 == 0 { acc.and(leaf) } else { acc.or(leaf) }
    })
}

fn bench_render_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/select");
    let builder = Builder::new(Dialect::Postgres);

    for n in [1, 5, 10, 50, 100] {
        let stmt = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &stmt, |b, stmt| {
            b.iter(|| black_box(builder.build(stmt)));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/build_and_render");
    let builder = Builder::new(Dialect::Postgres);

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let stmt = build_select(n).order_by([desc("col0")]).limit(20);
                black_box(builder.build(&stmt))
            });
        });
    }

    group.finish();
}

fn bench_nested_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/nested_predicates");

    for dialect in [Dialect::Postgres, Dialect::Sqlite] {
        let builder = Builder::new(dialect);
        let stmt = qb::delete("t").filter(build_nested(64));
        group.bench_with_input(BenchmarkId::from_parameter(dialect), &stmt, |b, stmt| {
            b.iter(|| black_box(builder.build(stmt)));
        });
    }

    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/update");
    let builder = Builder::new(Dialect::Postgres);

    for n in [5, 20, 100] {
        let stmt = (0..n)
            .fold(qb::update("t"), |q, i| q.set(format!("col{i}"), i as i64))
            .filter(col("id").eq(1));
        group.bench_with_input(BenchmarkId::from_parameter(n), &stmt, |b, stmt| {
            b.iter(|| black_box(builder.build(stmt)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_select,
    bench_build_and_render,
    bench_nested_predicates,
    bench_update
);
criterion_main!(benches);
