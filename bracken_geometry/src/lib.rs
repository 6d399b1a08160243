// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_geometry --heading-base-level=0

//! Bracken Geometry: scalar range helpers and shape collision predicates.
//!
//! This crate is the leaf of the Bracken stack: a handful of pure functions
//! over [`kurbo`] primitives that the scene tree and hit-test engine share.
//! Everything here is total: malformed ranges are tolerated by reordering
//! their endpoints rather than reported as errors.
//!
//! Two conventions matter for the editor built on top:
//!
//! - [`point_in_rect`] is **inclusive** on all four edges. This differs from
//!   [`kurbo::Rect::contains`], which is half-open on the maximum edges; a
//!   click exactly on a shape's border counts as a hit.
//! - [`point_in_circle`] is **strict**: a point exactly on the circumference
//!   is outside. Circle edges read as misses so that adjacent circles do not
//!   both claim their shared tangent point.
//!
//! Point-to-point distance is [`kurbo::Point::distance`]; this crate does not
//! re-wrap it.
//!
//! ## Minimal example
//!
//! ```rust
//! use bracken_geometry::{point_in_circle, point_in_rect};
//! use kurbo::{Circle, Point, Rect};
//!
//! let square = Rect::new(50.0, 50.0, 150.0, 150.0);
//! assert!(point_in_rect(Point::new(150.0, 150.0), square)); // edge: inside
//!
//! let circle = Circle::new(Point::new(0.0, 0.0), 75.0);
//! assert!(!point_in_circle(Point::new(75.0, 0.0), circle)); // rim: outside
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Circle, Point, Rect};

/// Clamps `value` into the range spanned by `a` and `b`.
///
/// The bounds may be given in either order.
#[must_use]
pub fn clamp(value: f64, a: f64, b: f64) -> f64 {
    value.max(a.min(b)).min(a.max(b))
}

/// Returns `true` if `value` lies in the closed range spanned by `a` and `b`.
///
/// The bounds may be given in either order; both endpoints count as inside.
#[must_use]
pub fn in_range(value: f64, a: f64, b: f64) -> bool {
    value >= a.min(b) && value <= a.max(b)
}

/// Returns the position of `value` within `min..max` as a 0..1 parameter.
///
/// Values outside the range extrapolate past 0 or 1; a degenerate range
/// (`min == max`) produces a non-finite result rather than an error.
#[must_use]
pub fn normalized(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

/// Linearly interpolates `min..max` by the parameter `t`.
///
/// This is the inverse of [`normalized`]: `lerp(normalized(v, a, b), a, b)`
/// recovers `v` for any non-degenerate range.
#[must_use]
pub fn lerp(t: f64, min: f64, max: f64) -> f64 {
    (max - min) * t + min
}

/// Maps `value` from the source range onto the destination range.
#[must_use]
pub fn remap(value: f64, src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> f64 {
    lerp(normalized(value, src_min, src_max), dst_min, dst_max)
}

/// Axis-aligned containment test, inclusive on all four edges.
///
/// A rect whose corners were supplied in any order still tests correctly,
/// since each axis goes through [`in_range`]. A zero-area rect contains
/// exactly its boundary points.
#[must_use]
pub fn point_in_rect(p: Point, rect: Rect) -> bool {
    in_range(p.x, rect.x0, rect.x1) && in_range(p.y, rect.y0, rect.y1)
}

/// Strict circle containment test: `distance(p, center) < radius`.
///
/// Points on the circumference are outside. A zero-radius circle contains
/// nothing.
#[must_use]
pub fn point_in_circle(p: Point, circle: Circle) -> bool {
    p.distance(circle.center) < circle.radius
}

/// Returns `true` if two circles overlap or touch.
///
/// Tangent circles count as overlapping (the comparison is inclusive), in
/// contrast to the strict point test.
#[must_use]
pub fn circles_overlap(a: Circle, b: Circle) -> bool {
    a.center.distance(b.center) <= a.radius + b.radius
}
