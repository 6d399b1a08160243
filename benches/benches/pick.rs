// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for hit-test walks across the policy matrix.
//!
//! Scenes are deterministic synthetic grids and chains sized to bracket what
//! an interactive canvas realistically holds.

use bracken_pick::{PickPolicy, PointerSample, drag_target, pick};
use bracken_scene::{NodeId, NodeKind, Scene};
use bracken_select::SelectionSet;
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;

/// A screen holding `n` squares in a dense grid.
///
/// The 24px pitch against a 40px side makes every square overlap its right
/// and bottom neighbors, so interior probe points land in up to four shapes.
fn square_grid(n: usize) -> (Scene, NodeId) {
    let mut scene = Scene::new();
    let screen = scene.insert(NodeKind::screen(Point::ZERO, Point::new(1024.0, 1024.0)));
    let cols = 32;
    for i in 0..n {
        let x = (i % cols) as f64 * 24.0;
        let y = (i / cols) as f64 * 24.0;
        scene.insert_child(
            screen,
            NodeKind::square(Point::new(x, y), Point::new(x + 40.0, y + 40.0)),
        );
    }
    (scene, screen)
}

/// A chain of groups `depth` levels deep, one square per level, each square
/// inset a little further so they all contain the scene center.
fn group_chain(depth: usize) -> (Scene, NodeId) {
    let mut scene = Scene::new();
    let screen = scene.insert(NodeKind::screen(Point::ZERO, Point::new(1024.0, 1024.0)));
    let mut parent = screen;
    for i in 0..depth {
        let inset = 4.0 * i as f64;
        let group = scene.insert_child(parent, NodeKind::Group);
        scene.insert_child(
            group,
            NodeKind::square(
                Point::new(inset, inset),
                Point::new(1024.0 - inset, 1024.0 - inset),
            ),
        );
        parent = group;
    }
    (scene, screen)
}

/// Probe points mixing multi-square overlaps, single hits, and misses.
fn probe_points() -> [Point; 8] {
    [
        Point::new(30.0, 30.0),
        Point::new(130.0, 130.0),
        Point::new(390.0, 260.0),
        Point::new(700.0, 700.0),
        Point::new(1000.0, 12.0),
        Point::new(12.0, 1000.0),
        Point::new(512.0, 512.0),
        Point::new(-5.0, -5.0),
    ]
}

fn bench_hover(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick/hover");

    for n in [64_usize, 256, 1_024] {
        let policies = [
            ("nested_topmost", PickPolicy::new().nested().topmost()),
            ("flat_topmost", PickPolicy::new().flat().topmost()),
            ("accumulate", PickPolicy::new().accumulate()),
        ];
        for (name, policy) in policies {
            let (mut scene, screen) = square_grid(n);
            let mut selecting = SelectionSet::new();
            let pts = probe_points();
            group.bench_with_input(BenchmarkId::new(name, n), &pts, |b, pts| {
                b.iter(|| {
                    for &p in pts {
                        let input = PointerSample {
                            pointer: Some(p),
                            click: None,
                            button_down: false,
                        };
                        black_box(pick(&mut scene, screen, policy, input, &mut selecting));
                    }
                });
            });
        }
    }

    group.finish();
}

fn bench_deep_nesting(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick/deep_nesting");

    // Hypothesis: the recursive walks scale with total depth while the flat
    // scan only ever touches the root's direct children.
    for depth in [4_usize, 16, 64] {
        let policies = [
            ("nested_topmost", PickPolicy::new().nested().topmost()),
            ("flat_topmost", PickPolicy::new().flat().topmost()),
            ("accumulate", PickPolicy::new().accumulate()),
        ];
        for (name, policy) in policies {
            let (mut scene, screen) = group_chain(depth);
            let mut selecting = SelectionSet::new();
            group.bench_with_input(BenchmarkId::new(name, depth), &depth, |b, _| {
                b.iter(|| {
                    let input = PointerSample {
                        pointer: Some(Point::new(512.0, 512.0)),
                        click: None,
                        button_down: false,
                    };
                    black_box(pick(&mut scene, screen, policy, input, &mut selecting));
                });
            });
        }
    }

    group.finish();
}

fn bench_flat_click(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick/flat_click");

    // The click lands in the first-inserted square, so the reverse scan
    // walks the whole child list before toggling.
    for n in [64_usize, 256, 1_024] {
        let (mut scene, screen) = square_grid(n);
        group.bench_with_input(BenchmarkId::new("toggle_bottom", n), &n, |b, _| {
            b.iter_batched(
                SelectionSet::<NodeId>::new,
                |mut selecting| {
                    let input = PointerSample {
                        pointer: Some(Point::new(10.0, 10.0)),
                        click: Some(Point::new(10.0, 10.0)),
                        button_down: false,
                    };
                    black_box(pick(
                        &mut scene,
                        screen,
                        PickPolicy::new().flat().topmost(),
                        input,
                        &mut selecting,
                    ));
                    black_box(selecting);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_drag_target(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick/drag_target");

    for n in [64_usize, 256, 1_024] {
        let (scene, screen) = square_grid(n);
        group.bench_with_input(BenchmarkId::new("bottom_square", n), &n, |b, _| {
            b.iter(|| black_box(drag_target(&scene, screen, Point::new(10.0, 10.0))));
        });
        group.bench_with_input(BenchmarkId::new("miss", n), &n, |b, _| {
            b.iter(|| black_box(drag_target(&scene, screen, Point::new(-5.0, -5.0))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_hover,
    bench_deep_nesting,
    bench_flat_click,
    bench_drag_target
);
criterion_main!(benches);
