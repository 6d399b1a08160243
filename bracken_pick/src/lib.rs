// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_pick --heading-base-level=0

//! Bracken Pick: the hit-test engine.
//!
//! One walk, [`pick`], answers both per-frame questions of the editor: which
//! nodes the live pointer is over (the returned **colliding** set, used for
//! hover feedback) and which nodes a click selects (applied to the
//! caller-owned [`SelectionSet`], or to per-node `selected` flags). How the
//! walk traverses the tree and how many nodes it may report are controlled by
//! a [`PickPolicy`] with two orthogonal axes:
//!
//! - `top_only`: report at most one colliding node and let a click affect at
//!   most one node (the front-most), versus accumulating everything under
//!   the point.
//! - [`Traversal`]: recurse through nested children, or scan the root's
//!   direct children only, topmost (last-added) first. The axis only matters
//!   when `top_only` is set; accumulation always recurses.
//!
//! Click semantics are evaluated only while the button is up; a pending
//! click delivered mid-press is consumed without effect.
//!
//! A second operation, [`drag_target`], resolves the start of a drag: the
//! topmost square or circle among the root's direct children containing the
//! press point, together with the grab offset that keeps the shape pinned
//! under the pointer for the rest of the drag.
//!
//! ## Minimal example
//!
//! ```rust
//! use bracken_pick::{PickPolicy, PointerSample, pick};
//! use bracken_scene::{NodeKind, Scene};
//! use bracken_select::SelectionSet;
//! use kurbo::Point;
//!
//! let mut scene = Scene::new();
//! let root = scene.insert(NodeKind::screen(Point::new(0.0, 0.0), Point::new(800.0, 600.0)));
//! let a = scene.insert_child(
//!     root,
//!     NodeKind::square(Point::new(50.0, 50.0), Point::new(150.0, 150.0)),
//! );
//! let b = scene.insert_child(
//!     root,
//!     NodeKind::square(Point::new(100.0, 100.0), Point::new(200.0, 200.0)),
//! );
//!
//! // Click where both squares overlap: topmost-only picks the later sibling.
//! let mut selecting = SelectionSet::new();
//! let input = PointerSample {
//!     pointer: Some(Point::new(120.0, 120.0)),
//!     click: Some(Point::new(120.0, 120.0)),
//!     button_down: false,
//! };
//! let colliding = pick(&mut scene, root, PickPolicy::new(), input, &mut selecting);
//!
//! assert_eq!(colliding, [b]);
//! assert_eq!(selecting.items(), &[b]);
//! assert!(!selecting.contains(&a));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use kurbo::{Point, Vec2};

use bracken_scene::{NodeId, NodeKind, Scene};
use bracken_select::SelectionSet;

/// How [`pick`] walks the tree when `top_only` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Traversal {
    /// Depth-first through nested children, in child order. Hover reports
    /// the first hit; clicks toggle per-node `selected` flags at every
    /// level.
    Nested,
    /// The root's direct children only, scanned in reverse (topmost first).
    /// Clicks toggle membership in the external selection set and stop the
    /// scan.
    #[default]
    Flat,
}

/// The two policy axes of a [`pick`] walk.
///
/// The default is the editor's usual mode: flat traversal, topmost only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickPolicy {
    /// Report at most one colliding node and select at most one per click.
    /// When unset, every node under the point is reported and clicks add
    /// (never remove) members; `traversal` is ignored.
    pub top_only: bool,
    /// Traversal shape used when `top_only` is set.
    pub traversal: Traversal,
}

impl Default for PickPolicy {
    fn default() -> Self {
        Self {
            top_only: true,
            traversal: Traversal::Flat,
        }
    }
}

impl PickPolicy {
    /// The default policy: flat traversal, topmost only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recurse through nested children.
    pub fn nested(mut self) -> Self {
        self.traversal = Traversal::Nested;
        self
    }

    /// Scan direct children only, topmost first.
    pub fn flat(mut self) -> Self {
        self.traversal = Traversal::Flat;
        self
    }

    /// Report and select at most one node per walk.
    pub fn topmost(mut self) -> Self {
        self.top_only = true;
        self
    }

    /// Report every node under the point and add every clicked node.
    pub fn accumulate(mut self) -> Self {
        self.top_only = false;
        self
    }
}

/// One frame's input snapshot, as consumed by [`pick`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    /// Live pointer position, or `None` when the pointer has left the
    /// surface. Nothing collides while it is absent.
    pub pointer: Option<Point>,
    /// Pending click point (a press released without dragging), if any.
    pub click: Option<Point>,
    /// Whether the button is currently held. Click semantics are skipped
    /// while it is.
    pub button_down: bool,
}

/// The resolution of a drag start: the grabbed node and grab offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragHit {
    /// The node under the press point.
    pub node: NodeId,
    /// Offset from the node's drag origin (rect top-left, circle center) to
    /// the press point. Kept constant for the duration of the drag so the
    /// shape stays pinned under the pointer.
    pub grab: Vec2,
}

/// Runs one hit-test walk from `root` and returns the colliding set.
///
/// The walk never reports `root` itself, only (transitive) children.
/// Depending on `policy`, a pending click in `input` either toggles
/// membership in `selecting` (flat), adds to it (accumulate), or toggles
/// per-node `selected` flags in the scene (nested); see [`PickPolicy`] and
/// [`Traversal`] for the exact rules. A stale `root` yields an empty set.
pub fn pick(
    scene: &mut Scene,
    root: NodeId,
    policy: PickPolicy,
    input: PointerSample,
    selecting: &mut SelectionSet<NodeId>,
) -> Vec<NodeId> {
    let click = if input.button_down { None } else { input.click };
    let mut colliding = Vec::new();
    if policy.top_only {
        match policy.traversal {
            Traversal::Nested => pick_nested(scene, root, input.pointer, click, &mut colliding),
            Traversal::Flat => {
                pick_flat(scene, root, input.pointer, click, selecting, &mut colliding);
            }
        }
    } else {
        pick_all(scene, root, input.pointer, click, selecting, &mut colliding);
    }
    colliding
}

/// Topmost + nested: hover records the first colliding child found in child
/// order, shallower nodes winning over their descendants. Clicks toggle
/// `selected` flags at every level. A childless node toggles its own flag,
/// which makes a colliding leaf visited as a child toggle twice (net no-op)
/// while a leaf passed directly as the walk root toggles once.
fn pick_nested(
    scene: &mut Scene,
    node: NodeId,
    pointer: Option<Point>,
    click: Option<Point>,
    colliding: &mut Vec<NodeId>,
) {
    let children = scene.children(node).to_vec();
    if children.is_empty() {
        if let Some(p) = click
            && scene.check_collision(node, p)
        {
            scene.toggle_selected(node);
        }
        return;
    }
    for child in children {
        if colliding.is_empty() && pointer.is_some_and(|p| scene.check_collision(child, p)) {
            colliding.push(child);
        }
        pick_nested(scene, child, pointer, click, colliding);
        if let Some(p) = click
            && scene.check_collision(child, p)
        {
            scene.toggle_selected(child);
        }
    }
}

/// Topmost + flat: direct children in reverse order. The first click hit
/// toggles membership and stops the whole scan, so shapes below the toggled
/// one get neither hover nor selection this frame.
fn pick_flat(
    scene: &Scene,
    root: NodeId,
    pointer: Option<Point>,
    click: Option<Point>,
    selecting: &mut SelectionSet<NodeId>,
    colliding: &mut Vec<NodeId>,
) {
    for &child in scene.children(root).iter().rev() {
        if colliding.is_empty() && pointer.is_some_and(|p| scene.check_collision(child, p)) {
            colliding.push(child);
        }
        if let Some(p) = click
            && scene.check_collision(child, p)
        {
            selecting.toggle(child);
            break;
        }
    }
}

/// Accumulate: recurse everywhere, merging colliding results bottom-up, and
/// add (never toggle) every clicked node to the selection.
fn pick_all(
    scene: &Scene,
    node: NodeId,
    pointer: Option<Point>,
    click: Option<Point>,
    selecting: &mut SelectionSet<NodeId>,
    colliding: &mut Vec<NodeId>,
) {
    let children = scene.children(node).to_vec();
    for child in children {
        pick_all(scene, child, pointer, click, selecting, colliding);
        if pointer.is_some_and(|p| scene.check_collision(child, p)) && !colliding.contains(&child) {
            colliding.push(child);
        }
        if let Some(p) = click
            && scene.check_collision(child, p)
        {
            selecting.add(child);
        }
    }
}

/// Resolves the start of a drag at `point`.
///
/// Scans `root`'s direct children in reverse (topmost first) and returns the
/// first square or circle containing the point, with the grab offset from its
/// drag origin. Lines, groups, reticles, screens, and `root` itself are never
/// drag targets.
#[must_use]
pub fn drag_target(scene: &Scene, root: NodeId, point: Point) -> Option<DragHit> {
    for &child in scene.children(root).iter().rev() {
        if child == root {
            continue;
        }
        if !matches!(
            scene.kind(child),
            Some(NodeKind::Square(_) | NodeKind::Circle { .. })
        ) {
            continue;
        }
        if scene.check_collision(child, point) {
            let Some(origin) = scene.origin(child) else {
                continue;
            };
            return Some(DragHit {
                node: child,
                grab: point - origin,
            });
        }
    }
    None
}
