// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

/// The live rubber band: a shift-drag from `anchor` toward `current`.
///
/// Raw extents stay signed (dragging up or left of the anchor yields a
/// negative component), so callers can still read the drag direction off the
/// band. Geometry consumers use [`Band::bounds`], the sign-normalized
/// rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    /// Where the shift-press happened.
    pub anchor: Point,
    /// The pointer position as of the latest move.
    pub current: Point,
}

impl Band {
    /// A zero-extent band at the press point.
    #[must_use]
    pub const fn new(anchor: Point) -> Self {
        Self {
            anchor,
            current: anchor,
        }
    }

    /// The signed extent from the anchor to the current corner.
    #[must_use]
    pub fn extents(&self) -> Vec2 {
        self.current - self.anchor
    }

    /// The sign-normalized rectangle spanned by the band.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.anchor, self.current)
    }

    /// Whether `rect` lies entirely inside the band bounds, edges included.
    ///
    /// `rect` is expected normalized, as all box-like scene geometry is.
    #[must_use]
    pub fn contains_rect(&self, rect: Rect) -> bool {
        let b = self.bounds();
        b.x0 <= rect.x0 && b.y0 <= rect.y0 && b.x1 >= rect.x1 && b.y1 >= rect.y1
    }
}
