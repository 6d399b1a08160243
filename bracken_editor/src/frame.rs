// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use kurbo::{Rect, Vec2};

use bracken_scene::NodeId;

/// Compass classification of an applied drag delta.
///
/// Directions are in y-down surface coordinates, so a positive y component
/// reads as [`Down`](Self::Down). Useful for cursor feedback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MoveDirection {
    /// No movement this frame.
    #[default]
    None,
    /// Negative y.
    Up,
    /// Positive x, negative y.
    UpRight,
    /// Positive x.
    Right,
    /// Positive x, positive y.
    DownRight,
    /// Positive y.
    Down,
    /// Negative x, positive y.
    DownLeft,
    /// Negative x.
    Left,
    /// Negative x, negative y.
    UpLeft,
}

impl MoveDirection {
    /// Classifies a delta by the signs of its components.
    ///
    /// A zero delta classifies as [`None`](Self::None).
    #[must_use]
    pub fn from_delta(delta: Vec2) -> Self {
        if delta.x > 0.0 {
            if delta.y > 0.0 {
                Self::DownRight
            } else if delta.y < 0.0 {
                Self::UpRight
            } else {
                Self::Right
            }
        } else if delta.x < 0.0 {
            if delta.y > 0.0 {
                Self::DownLeft
            } else if delta.y < 0.0 {
                Self::UpLeft
            } else {
                Self::Left
            }
        } else if delta.y > 0.0 {
            Self::Down
        } else if delta.y < 0.0 {
            Self::Up
        } else {
            Self::None
        }
    }
}

/// One tick's visible outcome.
///
/// Returned by [`Editor::tick`](crate::Editor::tick) for embedders that
/// schedule frames, drive cursors, or inspect what the tick did without
/// reaching back into editor state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Nodes under the live pointer this tick.
    pub colliding: Vec<NodeId>,
    /// Sign-normalized rubber band bounds, while a band is being dragged.
    pub band: Option<Rect>,
    /// Aggregate bounds over the selection's squares and circles.
    pub selection_bounds: Option<Rect>,
    /// The node inserted by a palette tool this tick, if any.
    pub inserted: Option<NodeId>,
    /// Direction of the drag movement applied this tick.
    pub direction: MoveDirection,
}
