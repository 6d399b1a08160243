// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render walk: lowering a scene subtree to [`Surface`] calls.

use bracken_imaging::{Paint, Surface, Theme};

use crate::node::{NodeId, NodeKind};
use crate::scene::Scene;

/// Draws the subtree rooted at `root` onto `surface`.
///
/// Each node draws its own geometry first and then its children in child
/// order, so children paint over their parent and later siblings paint over
/// earlier ones. Square and circle outlines are styled by membership in the
/// two id sets: `selecting` wins over `colliding` wins over the base stroke.
/// Stale roots draw nothing.
pub fn render(
    scene: &Scene,
    root: NodeId,
    surface: &mut impl Surface,
    theme: &Theme,
    colliding: &[NodeId],
    selecting: &[NodeId],
) {
    let Some(kind) = scene.kind(root) else {
        return;
    };
    match kind {
        NodeKind::Screen(rect) => surface.fill_rect(rect, theme.screen_fill),
        NodeKind::Square(rect) => {
            surface.stroke_rect(rect, outline(theme, root, colliding, selecting));
        }
        NodeKind::SelectRect(rect) => surface.stroke_rect(rect, theme.select_rect_stroke),
        NodeKind::Circle { circle, alpha } => {
            surface.fill_circle(circle, theme.circle_fill.with_alpha(alpha));
            surface.stroke_circle(circle, outline(theme, root, colliding, selecting));
        }
        NodeKind::Line(line) => surface.stroke_line(line, theme.line_stroke),
        NodeKind::Group | NodeKind::Reticle => {}
    }
    for &child in scene.children(root) {
        render(scene, child, surface, theme, colliding, selecting);
    }
}

fn outline(theme: &Theme, id: NodeId, colliding: &[NodeId], selecting: &[NodeId]) -> Paint {
    if selecting.contains(&id) {
        theme.selected_stroke
    } else if colliding.contains(&id) {
        theme.hover_stroke
    } else {
        theme.shape_stroke
    }
}
