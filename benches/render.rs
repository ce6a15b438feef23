//! Benchmarks for spark-hydrate
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spark_hydrate::{
    bind, diff, each, el, fields, list, when, Component, Fields, List, Node, Renderer, Store,
};

// =============================================================================
// DIFF BENCHMARKS
// =============================================================================

fn bench_diff_append(c: &mut Criterion) {
    let old: Vec<u32> = (0..1000).collect();
    let new: Vec<u32> = (0..1001).collect();
    c.bench_function("diff_append_fast_path", |b| {
        b.iter(|| black_box(diff(&old, &new)))
    });
}

fn bench_diff_scattered(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_scattered");
    for size in [10usize, 100, 1000] {
        let old: Vec<usize> = (0..size).collect();
        // Every tenth item removed, a new item every seventh slot
        let new: Vec<usize> = (0..size)
            .filter(|i| i % 10 != 3)
            .flat_map(|i| if i % 7 == 0 { vec![i, size + i] } else { vec![i] })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(diff(&old, &new)))
        });
    }
    group.finish();
}

fn bench_diff_reverse(c: &mut Criterion) {
    let old: Vec<u32> = (0..200).collect();
    let new: Vec<u32> = (0..200).rev().collect();
    c.bench_function("diff_reverse_200", |b| {
        b.iter(|| black_box(diff(&old, &new)))
    });
}

// =============================================================================
// RENDER BENCHMARKS
// =============================================================================

#[derive(Default)]
struct Table {
    title: Store<String>,
    loading: Store<bool>,
    rows: List<String>,
}

impl Component for Table {
    fn fields(&self) -> Fields {
        fields!(self => title, loading, rows)
    }

    fn render(&self) -> Node {
        el("table")
            .child(el("caption").child(bind(&self.title)))
            .child(when(&self.loading, el("tr").text("loading")))
            .child(each(&self.rows, "row", "i", |row, _| {
                el("tr").on("click", "select").child(el("td").text(row))
            }))
            .into()
    }
}

fn bench_render_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_table");
    for rows in [10usize, 100, 1000] {
        let table = Table::default();
        table.title.set("Report".to_string());
        table.rows.set((0..rows).map(|i| format!("row {i}")).collect());
        let renderer = Renderer::new();

        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, _| {
            b.iter(|| black_box(renderer.render(&table)))
        });
    }
    group.finish();
}

fn bench_list_set(c: &mut Criterion) {
    let items = list((0..500).collect::<Vec<u32>>());
    items.on_edit(|edit| {
        black_box(edit);
    });
    let mut flip = false;
    c.bench_function("list_set_500_swap_ends", |b| {
        b.iter(|| {
            flip = !flip;
            let mut next: Vec<u32> = (0..500).collect();
            if flip {
                next.swap(0, 499);
            }
            items.set(next);
        })
    });
}

criterion_group!(
    benches,
    bench_diff_append,
    bench_diff_scattered,
    bench_diff_reverse,
    bench_render_table,
    bench_list_set,
);
criterion_main!(benches);
