// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_imaging --heading-base-level=0

//! Bracken Imaging: the drawing surface contract consumed by the scene tree.
//!
//! The editor core does not rasterize. Each frame it walks the scene and
//! emits a short sequence of draw calls against a [`Surface`], and concrete
//! renderers (a canvas binding, a GPU backend, a test recorder) implement
//! that trait however they like. The vocabulary is deliberately small: the
//! scene only ever needs filled/stroked rects, stroked lines, and
//! filled/stroked circles.
//!
//! - [`Paint`] is a solid color plus a stroke width. Fills ignore the width.
//! - [`Theme`] names the paints the render walk picks from when styling
//!   nodes by hover/selection membership.
//! - [`Recorder`] is a [`Surface`] that stores every call as a [`DrawCmd`].
//!   It is intended for tests and debugging that want to assert on emitted
//!   draw calls and their order; it does not produce pixels.
//!
//! ## Minimal example
//!
//! ```rust
//! use bracken_imaging::{DrawCmd, Paint, Recorder, Surface};
//! use kurbo::Rect;
//! use peniko::Color;
//!
//! let mut surface = Recorder::default();
//! let paint = Paint::stroke(Color::WHITE, 1.0);
//! surface.stroke_rect(Rect::new(0.0, 0.0, 10.0, 10.0), paint);
//!
//! assert!(matches!(surface.cmds(), [DrawCmd::StrokeRect { .. }]));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use kurbo::{Circle, Line, Rect};
use peniko::Color;

/// A solid color plus a stroke width.
///
/// Fill operations ignore `width`. There are no gradients or images here;
/// the editor styles everything with flat colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    /// Solid color, including alpha.
    pub color: Color,
    /// Stroke width in surface units.
    pub width: f64,
}

impl Paint {
    /// A stroking paint with the given color and width.
    #[must_use]
    pub const fn stroke(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    /// A filling paint. The stroke width is set to zero and unused.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self { color, width: 0.0 }
    }

    /// Returns this paint with its alpha multiplied by `alpha`.
    ///
    /// Used for circle fills, whose nodes carry a mutable opacity.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        #[expect(clippy::cast_possible_truncation, reason = "alpha is clamped to 0..=1")]
        let alpha = alpha.clamp(0.0, 1.0) as f32;
        Self {
            color: self.color.multiply_alpha(alpha),
            width: self.width,
        }
    }
}

/// The drawing capability the scene render walk consumes.
///
/// Implementations receive geometry in surface coordinates, already
/// normalized (rects have non-negative extents). Calls arrive in paint
/// order: later calls draw over earlier ones.
pub trait Surface {
    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, paint: Paint);
    /// Strokes the outline of an axis-aligned rectangle.
    fn stroke_rect(&mut self, rect: Rect, paint: Paint);
    /// Strokes a line segment.
    fn stroke_line(&mut self, line: Line, paint: Paint);
    /// Fills a circle.
    fn fill_circle(&mut self, circle: Circle, paint: Paint);
    /// Strokes the outline of a circle.
    fn stroke_circle(&mut self, circle: Circle, paint: Paint);
}

/// The paints the render walk styles nodes with.
///
/// Shape strokes are chosen by set membership: selection wins over hover,
/// hover wins over the base stroke. The rubber band and the aggregate
/// selection bounds share one paint, since both render as the same kind of
/// transient rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Background fill for the screen node.
    pub screen_fill: Paint,
    /// Base stroke for shapes.
    pub shape_stroke: Paint,
    /// Stroke for shapes under the live pointer.
    pub hover_stroke: Paint,
    /// Stroke for selected shapes.
    pub selected_stroke: Paint,
    /// Stroke for line nodes.
    pub line_stroke: Paint,
    /// Fill for circle nodes, multiplied by each node's alpha.
    pub circle_fill: Paint,
    /// Stroke for the rubber band and the selection bounds box.
    pub select_rect_stroke: Paint,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            screen_fill: Paint::fill(Color::BLACK),
            shape_stroke: Paint::stroke(Color::WHITE, 1.0),
            hover_stroke: Paint::stroke(Color::from_rgb8(255, 0, 0), 1.0),
            selected_stroke: Paint::stroke(Color::WHITE, 3.0),
            line_stroke: Paint::stroke(Color::from_rgb8(255, 0, 0), 5.0),
            circle_fill: Paint::fill(Color::WHITE),
            select_rect_stroke: Paint::stroke(Color::from_rgb8(128, 128, 128), 1.0),
        }
    }
}

/// One recorded [`Surface`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCmd {
    /// A [`Surface::fill_rect`] call.
    FillRect {
        /// Filled rectangle.
        rect: Rect,
        /// Paint used.
        paint: Paint,
    },
    /// A [`Surface::stroke_rect`] call.
    StrokeRect {
        /// Stroked rectangle.
        rect: Rect,
        /// Paint used.
        paint: Paint,
    },
    /// A [`Surface::stroke_line`] call.
    StrokeLine {
        /// Stroked segment.
        line: Line,
        /// Paint used.
        paint: Paint,
    },
    /// A [`Surface::fill_circle`] call.
    FillCircle {
        /// Filled circle.
        circle: Circle,
        /// Paint used.
        paint: Paint,
    },
    /// A [`Surface::stroke_circle`] call.
    StrokeCircle {
        /// Stroked circle.
        circle: Circle,
        /// Paint used.
        paint: Paint,
    },
}

/// A [`Surface`] that records draw calls instead of producing pixels.
///
/// Intended for tests and debugging: render a frame into a `Recorder` and
/// assert on the captured [`DrawCmd`]s and their order.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    cmds: Vec<DrawCmd>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    /// Returns the recorded calls in emission order.
    #[must_use]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Forgets all recorded calls, typically between frames.
    pub fn clear(&mut self) {
        self.cmds.clear();
    }
}

impl Surface for Recorder {
    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        self.cmds.push(DrawCmd::FillRect { rect, paint });
    }

    fn stroke_rect(&mut self, rect: Rect, paint: Paint) {
        self.cmds.push(DrawCmd::StrokeRect { rect, paint });
    }

    fn stroke_line(&mut self, line: Line, paint: Paint) {
        self.cmds.push(DrawCmd::StrokeLine { line, paint });
    }

    fn fill_circle(&mut self, circle: Circle, paint: Paint) {
        self.cmds.push(DrawCmd::FillCircle { circle, paint });
    }

    fn stroke_circle(&mut self, circle: Circle, paint: Paint) {
        self.cmds.push(DrawCmd::StrokeCircle { circle, paint });
    }
}
