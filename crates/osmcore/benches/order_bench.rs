//! Criterion benchmarks for relation ordering.
//! Focus sizes: n in {16, 256, 4096} for sorting, {16, 64} for the law check.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use osmcore::order::{check_order_laws, relation_comparator, LawCheckCfg};
use osmcore::osm::naming::NamingCfg;
use osmcore::osm::rand::{draw_relations, RelationSetCfg, ReplayToken};
use osmcore::osm::Relation;

fn relations(count: usize, seed: u64) -> Vec<Relation> {
    let cfg = RelationSetCfg {
        count,
        ..RelationSetCfg::default()
    };
    draw_relations(&cfg, ReplayToken { seed, index: 0 })
}

fn bench_order(c: &mut Criterion) {
    let cmp = relation_comparator(NamingCfg::default());
    let mut group = c.benchmark_group("relation_order");
    for &n in &[16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("sort", n), &n, |b, &n| {
            b.iter_batched(
                || relations(n, 43),
                |rels| cmp.sorted(rels),
                BatchSize::SmallInput,
            )
        });
    }
    for &n in &[16usize, 64] {
        let rels = relations(n, 44);
        group.bench_with_input(BenchmarkId::new("check_laws", n), &rels, |b, rels| {
            b.iter(|| check_order_laws(rels, &cmp, LawCheckCfg::default()).is_lawful())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_order);
criterion_main!(benches);
