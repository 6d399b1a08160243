// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_editor --heading-base-level=0

//! Bracken Editor: the per-frame interaction state machine.
//!
//! [`Editor`] ties the other Bracken crates together into an interactive
//! canvas: it owns the scene tree, the persistent [`SelectionSet`], and all
//! transient gesture state, and it drives the hit-test engine and the render
//! walk once per frame.
//!
//! The split between events and frames is strict:
//!
//! - **Event intake** ([`Editor::pointer_down`], [`Editor::pointer_move`],
//!   [`Editor::pointer_up`], [`Editor::pointer_leave`], [`Editor::key_down`],
//!   [`Editor::key_up`], [`Editor::set_tool`]) only records state. No event
//!   handler hit-tests or draws.
//! - **[`Editor::tick`]** does everything geometric, in a fixed order: apply
//!   the active drag, hit-test, rebuild the rubber-band batch, insert a
//!   palette shape on a resolved click, aggregate the selection bounds,
//!   render, and consume the pending click. It returns a [`Frame`] summary
//!   for callers that schedule frames or drive cursors.
//!
//! Supported gestures: click to select (topmost wins under the default
//! policy), shift-click to toggle membership, drag to move a shape with its
//! grabbed offset pinned under the pointer, and shift-drag to rubber-band
//! squares into the selection.
//!
//! ## Minimal example
//!
//! ```rust
//! use bracken_editor::Editor;
//! use bracken_imaging::Recorder;
//! use bracken_scene::NodeKind;
//! use kurbo::{Point, Rect};
//!
//! let mut editor = Editor::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let root = editor.root();
//! let square = editor.scene_mut().insert_child(
//!     root,
//!     NodeKind::square(Point::new(50.0, 50.0), Point::new(150.0, 150.0)),
//! );
//!
//! // A press and release without movement is a click...
//! editor.pointer_down(Point::new(100.0, 100.0));
//! editor.pointer_up();
//!
//! // ...consumed by the next tick, which selects the square and renders.
//! let mut surface = Recorder::new();
//! let frame = editor.tick(&mut surface);
//!
//! assert_eq!(editor.selecting().items(), &[square]);
//! assert_eq!(frame.colliding, [square]);
//! assert!(!surface.cmds().is_empty());
//! ```
//!
//! [`SelectionSet`]: bracken_select::SelectionSet
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod band;
mod editor;
mod frame;

pub use band::Band;
pub use editor::{Editor, Modifiers, ShapeTool};
pub use frame::{Frame, MoveDirection};
