// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_scene --heading-base-level=0

//! Bracken Scene: the editor's scene tree.
//!
//! A [`Scene`] is a generational arena of drawable nodes addressed by
//! [`NodeId`]. Each node has a [`NodeKind`] carrying its geometry (square,
//! circle, line, the screen background, a rubber-band rect, or the
//! geometry-less group and reticle containers), an ordered child list that
//! doubles as paint and traversal order, and a `selected` bookkeeping flag.
//!
//! The crate covers everything the hit-test engine and the editor need from
//! the tree:
//!
//! - Structure: insert/attach/detach/remove, with subtree removal freeing
//!   recursively and stale ids degrading to no-ops.
//! - Geometry: [`Scene::translate`] (relative; groups delegate to children),
//!   [`Scene::move_origin_to`] (absolute), circle alpha/radius mutators, and
//!   [`Scene::bounding_box`] (union over group children).
//! - Queries: per-node point collision via [`Scene::check_collision`], using
//!   the inclusive rect and strict circle predicates from `bracken_geometry`.
//! - Output: [`render`] walks a subtree and lowers it to
//!   [`Surface`](bracken_imaging::Surface) calls, styling shape outlines by
//!   membership in externally-owned colliding/selecting sets.
//!
//! ## Minimal example
//!
//! ```rust
//! use bracken_imaging::{Recorder, Theme};
//! use bracken_scene::{NodeKind, Scene, render};
//! use kurbo::Point;
//!
//! let mut scene = Scene::new();
//! let root = scene.insert(NodeKind::screen(Point::new(0.0, 0.0), Point::new(800.0, 600.0)));
//! let square = scene.insert_child(
//!     root,
//!     NodeKind::square(Point::new(50.0, 50.0), Point::new(150.0, 150.0)),
//! );
//!
//! assert!(scene.check_collision(square, Point::new(150.0, 150.0)));
//!
//! let mut surface = Recorder::new();
//! render(&scene, root, &mut surface, &Theme::default(), &[], &[square]);
//! assert_eq!(surface.cmds().len(), 2); // screen fill + selected square stroke
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod node;
mod render;
mod scene;

pub use node::{NodeId, NodeKind};
pub use render::render;
pub use scene::Scene;
