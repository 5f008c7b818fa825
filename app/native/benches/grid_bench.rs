//! Benchmarks for the grid engine's hot paths.
//!
//! Run with: `cargo bench -p dashgrid`
//!
//! Results are saved to `target/criterion/` with HTML reports.
//!
//! ## Benchmark Groups
//!
//! - `collision`: Pairwise and set collision checks
//! - `free_space`: First-fit search at dashboard and stress widget counts
//! - `compact`: Vertical and horizontal compaction
//! - `layout`: Whole-set operations (push, swap)
//! - `coords`: Pixel and grid conversion

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dashgrid_lib::config::{CompactType, GridConfig};
use dashgrid_lib::grid::{
    GridPosition, check_collision, compact_layout, delta_to_grid, find_empty_space,
    find_overlapping_pairs, get_collisions, grid_to_pixels, pixels_to_grid,
};
use dashgrid_lib::layout::{Widget, WidgetLayout};

// ============================================================================
// Test Data
// ============================================================================

/// Widget counts seen on real dashboards.
const DASHBOARD_COUNTS: [usize; 4] = [4, 8, 16, 32];

/// Widget counts well beyond typical dashboards.
const STRESS_COUNTS: [usize; 2] = [64, 128];

fn desktop_grid() -> GridConfig { GridConfig::default() }

/// Packs `count` 2x2 widgets row by row on a 9-column grid, leaving a
/// one-row gap under every row so compaction has work to do.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn sparse_positions(count: usize) -> Vec<GridPosition> {
    (0..count)
        .map(|i| {
            let i = i as i32;
            GridPosition::new((i % 4) * 2, (i / 4) * 3, 2, 2)
        })
        .collect()
}

fn layout_of(positions: &[GridPosition]) -> WidgetLayout {
    let widgets = positions
        .iter()
        .enumerate()
        .map(|(i, position)| Widget::new(format!("widget-{i}"), *position))
        .collect();
    WidgetLayout::from_widgets(widgets).unwrap_or_default()
}

// ============================================================================
// Collision Benchmarks
// ============================================================================

fn bench_collision(c: &mut Criterion) {
    let mut group = c.benchmark_group("collision");

    let a = GridPosition::new(0, 0, 2, 2);
    let b = GridPosition::new(1, 1, 2, 2);
    group.bench_function("check_collision", |bench| {
        bench.iter(|| check_collision(black_box(&a), black_box(&b)));
    });

    for count in DASHBOARD_COUNTS {
        let items = sparse_positions(count);
        let probe = GridPosition::new(1, 1, 3, 3);

        group.bench_with_input(BenchmarkId::new("get_collisions", count), &count, |bench, _| {
            bench.iter(|| get_collisions(black_box(&probe), black_box(&items), None));
        });

        group.bench_with_input(BenchmarkId::new("overlapping_pairs", count), &count, |bench, _| {
            bench.iter(|| find_overlapping_pairs(black_box(&items)));
        });
    }

    group.finish();
}

// ============================================================================
// Free Space Benchmarks
// ============================================================================

fn bench_free_space(c: &mut Criterion) {
    let mut group = c.benchmark_group("free_space");
    let config = desktop_grid();

    for count in DASHBOARD_COUNTS.into_iter().chain(STRESS_COUNTS) {
        let items = sparse_positions(count);

        group.bench_with_input(BenchmarkId::new("2x2", count), &count, |bench, _| {
            bench.iter(|| find_empty_space(black_box(2), black_box(2), &items, &config));
        });

        // A full-width widget only fits below everything.
        group.bench_with_input(BenchmarkId::new("full_width", count), &count, |bench, _| {
            bench.iter(|| find_empty_space(black_box(9), black_box(1), &items, &config));
        });
    }

    group.finish();
}

// ============================================================================
// Compaction Benchmarks
// ============================================================================

fn bench_compact(c: &mut Criterion) {
    let mut group = c.benchmark_group("compact");
    let config = desktop_grid();

    for count in DASHBOARD_COUNTS.into_iter().chain(STRESS_COUNTS) {
        let items = sparse_positions(count);

        group.bench_with_input(BenchmarkId::new("vertical", count), &count, |bench, _| {
            bench.iter(|| compact_layout(black_box(&items), &config, CompactType::Vertical));
        });

        group.bench_with_input(BenchmarkId::new("horizontal", count), &count, |bench, _| {
            bench.iter(|| compact_layout(black_box(&items), &config, CompactType::Horizontal));
        });
    }

    group.finish();
}

// ============================================================================
// Layout Set Benchmarks
// ============================================================================

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let config = desktop_grid();

    for count in DASHBOARD_COUNTS {
        let layout = layout_of(&sparse_positions(count));

        group.bench_with_input(BenchmarkId::new("move_with_push", count), &count, |bench, _| {
            bench.iter(|| {
                let mut layout = layout.clone();
                layout.move_widget_with_push(
                    "widget-1",
                    black_box(GridPosition::new(0, 0, 2, 2)),
                    &config,
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("swap", count), &count, |bench, _| {
            bench.iter(|| {
                let mut layout = layout.clone();
                layout.swap_widgets("widget-0", black_box("widget-3"), &config)
            });
        });
    }

    group.finish();
}

// ============================================================================
// Coordinate Benchmarks
// ============================================================================

fn bench_coords(c: &mut Criterion) {
    let mut group = c.benchmark_group("coords");
    let position = GridPosition::new(3, 4, 2, 2);

    group.bench_function("grid_to_pixels", |bench| {
        bench.iter(|| grid_to_pixels(black_box(&position), 136.0, 120.0, 16.0));
    });

    group.bench_function("pixels_to_grid", |bench| {
        bench.iter(|| pixels_to_grid(black_box(456.0), black_box(544.0), 136.0, 120.0, 16.0));
    });

    group.bench_function("delta_to_grid", |bench| {
        bench.iter(|| delta_to_grid(black_box(230.0), black_box(-75.0), 136.0, 120.0, 16.0, 0.5));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_collision,
    bench_free_space,
    bench_compact,
    bench_layout,
    bench_coords
);
criterion_main!(benches);
