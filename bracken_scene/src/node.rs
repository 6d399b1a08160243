// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node identifiers and shape kinds.

use kurbo::{Circle, Line, Point, Rect, Shape as _};

/// Identifier for a node in the scene.
///
/// This is a small, copyable handle that stays stable across updates but
/// becomes invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that
///   slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new,
///   distinct `NodeId`.
///
/// ### Liveness
///
/// Use [`Scene::contains`](crate::Scene::contains) to check whether a `NodeId`
/// still refers to a live node. Stale `NodeId`s never alias a different live
/// node because the generation must match, and every [`Scene`](crate::Scene)
/// operation treats a stale id as absent (`None`, empty slice, or no-op).
///
/// ### Notes
///
/// - The generation increments on slot reuse and never decreases.
/// - `u32` is ample for practical lifetimes; behavior on generation overflow
///   is unspecified.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// The drawable kind of a scene node, with its geometry payload.
///
/// Box-like kinds (`Square`, `Screen`, `SelectRect`) carry a normalized
/// [`Rect`] with `x0 <= x1` and `y0 <= y1`. The scene normalizes every kind
/// on insert and preserves normalization through its mutators, so code
/// reading a kind back out of a [`Scene`](crate::Scene) can rely on
/// non-negative extents.
///
/// `Group` and `Reticle` have no geometry of their own; their extent is the
/// union of their children's.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeKind {
    /// An axis-aligned square (or rectangle) outline.
    Square(Rect),
    /// A circle with a mutable fill opacity in `0..=1`.
    Circle {
        /// Center and radius. The radius is kept non-negative.
        circle: Circle,
        /// Fill opacity, kept in `0..=1`.
        alpha: f64,
    },
    /// A line segment between two endpoints.
    Line(Line),
    /// A container with no geometry of its own.
    Group,
    /// The root background. There is exactly one per scene by convention; it
    /// defines the coordinate space and fills its rect when rendered.
    Screen(Rect),
    /// A transient rubber-band rectangle, when materialized as a node.
    SelectRect(Rect),
    /// A crosshair marker. Like `Group`, its geometry is its children's.
    Reticle,
}

impl NodeKind {
    /// A square spanned by two corner points, given in any order.
    #[must_use]
    pub fn square(p0: Point, p1: Point) -> Self {
        Self::Square(Rect::from_points(p0, p1))
    }

    /// A circle at `center` with fully opaque fill.
    ///
    /// Negative radii are clamped to zero.
    #[must_use]
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::Circle {
            circle: Circle::new(center, radius.max(0.0)),
            alpha: 1.0,
        }
    }

    /// A line segment from `p0` to `p1`.
    #[must_use]
    pub fn line(p0: Point, p1: Point) -> Self {
        Self::Line(Line::new(p0, p1))
    }

    /// A screen background spanned by two corner points, given in any order.
    #[must_use]
    pub fn screen(p0: Point, p1: Point) -> Self {
        Self::Screen(Rect::from_points(p0, p1))
    }

    /// A rubber-band rectangle spanned by two corner points, given in any
    /// order.
    #[must_use]
    pub fn select_rect(p0: Point, p1: Point) -> Self {
        Self::SelectRect(Rect::from_points(p0, p1))
    }

    /// Returns this kind with its payload normalized.
    ///
    /// Rects are flipped so both extents are non-negative, circle radii are
    /// clamped to zero, and alphas to `0..=1`. Kinds without such constraints
    /// pass through unchanged.
    #[must_use]
    pub(crate) fn normalized(self) -> Self {
        match self {
            Self::Square(rect) => Self::Square(rect.abs()),
            Self::Screen(rect) => Self::Screen(rect.abs()),
            Self::SelectRect(rect) => Self::SelectRect(rect.abs()),
            Self::Circle { circle, alpha } => Self::Circle {
                circle: Circle::new(circle.center, circle.radius.max(0.0)),
                alpha: alpha.clamp(0.0, 1.0),
            },
            Self::Line(_) | Self::Group | Self::Reticle => self,
        }
    }

    /// The bounding box of this kind's own geometry.
    ///
    /// `None` for `Group` and `Reticle`; use
    /// [`Scene::bounding_box`](crate::Scene::bounding_box) to union over
    /// their children.
    #[must_use]
    pub fn own_bounding_box(&self) -> Option<Rect> {
        match self {
            Self::Square(rect) | Self::Screen(rect) | Self::SelectRect(rect) => Some(*rect),
            Self::Circle { circle, .. } => Some(circle.bounding_box()),
            Self::Line(line) => Some(Rect::from_points(line.p0, line.p1)),
            Self::Group | Self::Reticle => None,
        }
    }

    /// The drag origin of this kind: rect top-left, circle center, or line
    /// first endpoint.
    ///
    /// `None` for `Group` and `Reticle`, whose origin depends on their
    /// children.
    #[must_use]
    pub fn own_origin(&self) -> Option<Point> {
        match self {
            Self::Square(rect) | Self::Screen(rect) | Self::SelectRect(rect) => {
                Some(rect.origin())
            }
            Self::Circle { circle, .. } => Some(circle.center),
            Self::Line(line) => Some(line.p0),
            Self::Group | Self::Reticle => None,
        }
    }
}
