// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-frame benchmarks: one [`Editor::tick`] per iteration, recorded
//! into a [`Recorder`] the way a host loop would drive a real surface.

use bracken_editor::{Editor, Modifiers};
use bracken_imaging::Recorder;
use bracken_scene::NodeKind;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};

/// An editor over `n` squares in an overlapping grid.
fn populated_editor(n: usize) -> Editor {
    let mut editor = Editor::new(Rect::new(0.0, 0.0, 1024.0, 1024.0));
    let root = editor.root();
    let cols = 32;
    for i in 0..n {
        let x = (i % cols) as f64 * 24.0;
        let y = (i / cols) as f64 * 24.0;
        editor.scene_mut().insert_child(
            root,
            NodeKind::square(Point::new(x, y), Point::new(x + 40.0, y + 40.0)),
        );
    }
    editor
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("editor/tick");

    for n in [64_usize, 256, 1_024] {
        // Idle: no pointer and nothing pending. The floor cost of a frame is
        // one full hit-test walk plus rendering every node.
        let mut editor = populated_editor(n);
        let mut surface = Recorder::new();
        group.bench_with_input(BenchmarkId::new("idle", n), &n, |b, _| {
            b.iter(|| {
                surface.clear();
                black_box(editor.tick(&mut surface));
            });
        });

        // Hover: a live pointer parked over a four-square overlap.
        let mut editor = populated_editor(n);
        editor.pointer_move(Point::new(30.0, 30.0));
        let mut surface = Recorder::new();
        group.bench_with_input(BenchmarkId::new("hover", n), &n, |b, _| {
            b.iter(|| {
                surface.clear();
                black_box(editor.tick(&mut surface));
            });
        });

        // Steady drag: pressed on a square and holding still. The first tick
        // moves the grab under the pointer, so every following tick resolves
        // a zero offset and the scene stops changing.
        let mut editor = populated_editor(n);
        editor.pointer_down(Point::new(30.0, 30.0));
        editor.pointer_move(Point::new(60.0, 60.0));
        let mut surface = Recorder::new();
        group.bench_with_input(BenchmarkId::new("drag", n), &n, |b, _| {
            b.iter(|| {
                surface.clear();
                black_box(editor.tick(&mut surface));
            });
        });

        // Band sweep: shift-press then a held move far down-right. Every
        // tick rebuilds the containment set from scratch.
        let mut editor = populated_editor(n);
        editor.key_down(Modifiers::SHIFT);
        editor.pointer_down(Point::new(0.0, 0.0));
        editor.pointer_move(Point::new(700.0, 700.0));
        let mut surface = Recorder::new();
        group.bench_with_input(BenchmarkId::new("band", n), &n, |b, _| {
            b.iter(|| {
                surface.clear();
                black_box(editor.tick(&mut surface));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
