// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

use bracken_imaging::{Surface, Theme};
use bracken_pick::{DragHit, PickPolicy, PointerSample, drag_target, pick};
use bracken_scene::{NodeId, NodeKind, Scene, render};
use bracken_select::SelectionSet;

use crate::band::Band;
use crate::frame::{Frame, MoveDirection};

bitflags::bitflags! {
    /// Modifier keys the editor watches.
    ///
    /// Key intake is filtered against [`Modifiers::SHIFT`]; bits outside the
    /// watch-list are dropped on arrival.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        /// Either shift key.
        const SHIFT = 0b0000_0001;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::empty()
    }
}

/// Keys the intake filter admits.
const WATCHED_KEYS: Modifiers = Modifiers::SHIFT;

/// The palette's one-shot shape token.
///
/// Armed by the embedder's tool UI via [`Editor::set_tool`] and consumed by
/// the first tick that also resolves a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeTool {
    /// Insert a square with its top-left corner at the click point.
    Square,
    /// Insert a circle centered on the click point.
    Circle,
}

/// Edge length of palette-inserted squares. Circles use half of it as their
/// radius.
const INSERT_SIZE: f64 = 150.0;

/// Inline capacity for the per-frame band batch.
const DRAG_SELECT_INLINE: usize = 8;

/// The per-frame interaction state machine.
///
/// An `Editor` owns the scene, the persistent selection, and all transient
/// gesture state. Embedders feed it raw input between frames
/// ([`pointer_down`](Self::pointer_down), [`pointer_move`](Self::pointer_move),
/// [`pointer_up`](Self::pointer_up), [`key_down`](Self::key_down), ...) and
/// call [`tick`](Self::tick) once per frame. Event intake only records state;
/// every hit test, drag update, and draw call happens inside the tick, against
/// one consistent snapshot of the input.
///
/// Gestures:
/// - Press and release without movement is a click, consumed by the next
///   tick as a selection toggle (or an insertion when a palette tool is
///   armed).
/// - Press, move, release drags the topmost square or circle under the
///   press point, keeping the grabbed offset pinned under the pointer.
/// - The same gesture with shift held drags a rubber band instead; squares
///   fully inside it join the selection on release.
#[derive(Clone, Debug)]
pub struct Editor {
    scene: Scene,
    root: NodeId,
    policy: PickPolicy,
    theme: Theme,
    selecting: SelectionSet<NodeId>,
    drag_select: SmallVec<[NodeId; DRAG_SELECT_INLINE]>,
    modifiers: Modifiers,
    pointer: Option<Point>,
    button_down: bool,
    down: Option<Point>,
    pending_click: Option<Point>,
    dragging: bool,
    band_anchor: Option<Point>,
    band: Option<Band>,
    drag: Option<DragHit>,
    tool: Option<ShapeTool>,
}

impl Editor {
    /// Creates an editor whose scene holds one screen node spanning
    /// `bounds`.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        let mut scene = Scene::new();
        let root = scene.insert(NodeKind::screen(
            Point::new(bounds.x0, bounds.y0),
            Point::new(bounds.x1, bounds.y1),
        ));
        Self {
            scene,
            root,
            policy: PickPolicy::new(),
            theme: Theme::default(),
            selecting: SelectionSet::new(),
            drag_select: SmallVec::new(),
            modifiers: Modifiers::empty(),
            pointer: None,
            button_down: false,
            down: None,
            pending_click: None,
            dragging: false,
            band_anchor: None,
            band: None,
            drag: None,
            tool: None,
        }
    }

    /// The scene being edited.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene access, for embedders that populate or rearrange
    /// content between frames.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The root screen node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The hit-test policy applied by [`tick`](Self::tick).
    #[must_use]
    pub fn policy(&self) -> PickPolicy {
        self.policy
    }

    /// Replaces the hit-test policy.
    pub fn set_policy(&mut self, policy: PickPolicy) {
        self.policy = policy;
    }

    /// The render theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replaces the render theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// The persistent selection.
    #[must_use]
    pub fn selecting(&self) -> &SelectionSet<NodeId> {
        &self.selecting
    }

    /// The current band batch, rebuilt by every tick while a band is
    /// active and folded into the selection on release.
    #[must_use]
    pub fn drag_select(&self) -> &[NodeId] {
        &self.drag_select
    }

    /// The pending palette tool, if any.
    #[must_use]
    pub fn tool(&self) -> Option<ShapeTool> {
        self.tool
    }

    /// Arms (or clears) the one-shot palette tool consumed by the next
    /// resolved click.
    pub fn set_tool(&mut self, tool: Option<ShapeTool>) {
        self.tool = tool;
    }

    /// The modifier keys currently held.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// The live pointer position, while the pointer is over the surface.
    #[must_use]
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// `true` once the pointer has moved with the button held, until
    /// release.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The live rubber band, while one is being dragged.
    #[must_use]
    pub fn band(&self) -> Option<Band> {
        self.band
    }

    /// Records the button going down at `p`.
    ///
    /// A plain press starts a fresh selection; a shift-press keeps the
    /// selection and arms the rubber band anchor instead. Any stale band is
    /// dropped either way.
    pub fn pointer_down(&mut self, p: Point) {
        self.down = Some(p);
        self.button_down = true;
        self.pointer = Some(p);
        self.band = None;
        self.band_anchor = None;
        if self.modifiers.contains(Modifiers::SHIFT) {
            self.band_anchor = Some(p);
        } else {
            self.selecting.clear();
        }
    }

    /// Records the pointer moving to `p`.
    ///
    /// While the button is held this marks the gesture as a drag and, if a
    /// band anchor is armed, respans the band from the anchor to `p`.
    pub fn pointer_move(&mut self, p: Point) {
        self.pointer = Some(p);
        if self.button_down {
            self.dragging = true;
            if let Some(anchor) = self.band_anchor {
                self.band = Some(Band { anchor, current: p });
            }
        }
    }

    /// Records the button being released.
    ///
    /// A press that never moved becomes the pending click consumed by the
    /// next tick. The band batch, if any, is folded into the selection.
    /// All drag and band state resets.
    pub fn pointer_up(&mut self) {
        self.button_down = false;
        self.pending_click = None;
        if let Some(down) = self.down.take()
            && !self.dragging
        {
            self.pending_click = Some(down);
        }
        self.selecting.merge(self.drag_select.drain(..));
        self.band = None;
        self.band_anchor = None;
        self.drag = None;
        self.dragging = false;
    }

    /// Forgets the live pointer. Nothing collides until the next move.
    pub fn pointer_leave(&mut self) {
        self.pointer = None;
    }

    /// Records a watched modifier going down. Unwatched bits are dropped.
    pub fn key_down(&mut self, key: Modifiers) {
        self.modifiers.insert(key.intersection(WATCHED_KEYS));
    }

    /// Records a watched modifier being released. Unwatched bits are
    /// dropped.
    pub fn key_up(&mut self, key: Modifiers) {
        self.modifiers.remove(key.intersection(WATCHED_KEYS));
    }

    /// Runs one frame.
    ///
    /// In order: apply the active drag (resolving its target against the
    /// press point on the first dragging tick), hit-test, rebuild the band
    /// batch, insert a palette shape on a resolved click, aggregate the
    /// selection bounds, render into `surface`, and finally consume the
    /// pending click. Later stages read state written by earlier ones, so
    /// the order is fixed.
    pub fn tick(&mut self, surface: &mut impl Surface) -> Frame {
        // Drag: the grabbed offset stays pinned under the pointer, so the
        // delta is measured from the grab, not from the previous frame.
        let mut direction = MoveDirection::None;
        if self.dragging
            && !self.modifiers.contains(Modifiers::SHIFT)
            && let (Some(pointer), Some(down)) = (self.pointer, self.down)
        {
            if self.drag.is_none() {
                self.drag = drag_target(&self.scene, self.root, down);
            }
            if let Some(hit) = self.drag
                && let Some(origin) = self.scene.origin(hit.node)
            {
                let delta = pointer - (origin + hit.grab);
                self.scene.translate(hit.node, delta);
                direction = MoveDirection::from_delta(delta);
            }
        }

        // Hit test against one consistent snapshot of the input state.
        let input = PointerSample {
            pointer: self.pointer,
            click: self.pending_click,
            button_down: self.button_down,
        };
        let colliding = pick(&mut self.scene, self.root, self.policy, input, &mut self.selecting);

        // The band batch is rebuilt from scratch every tick: square direct
        // children of the root, fully contained, not already selected.
        self.drag_select.clear();
        if let Some(band) = self.band {
            for &child in self.scene.children(self.root) {
                if let Some(NodeKind::Square(rect)) = self.scene.kind(child)
                    && band.contains_rect(rect)
                    && !self.selecting.contains(&child)
                {
                    self.drag_select.push(child);
                }
            }
        }

        // A click with an armed palette tool inserts once.
        let mut inserted = None;
        if let (Some(tool), Some(click)) = (self.tool, self.pending_click) {
            let kind = match tool {
                ShapeTool::Square => {
                    NodeKind::square(click, click + Vec2::new(INSERT_SIZE, INSERT_SIZE))
                }
                ShapeTool::Circle => NodeKind::circle(click, INSERT_SIZE / 2.0),
            };
            inserted = Some(self.scene.insert_child(self.root, kind));
            self.tool = None;
        }

        // Selection bounds reduce over the boxes of square and circle
        // members only.
        let mut selection_bounds: Option<Rect> = None;
        for &id in self.selecting.items() {
            let is_shape = matches!(
                self.scene.kind(id),
                Some(NodeKind::Square(_) | NodeKind::Circle { .. })
            );
            if is_shape && let Some(bounds) = self.scene.bounding_box(id) {
                selection_bounds = Some(match selection_bounds {
                    Some(acc) => acc.union(bounds),
                    None => bounds,
                });
            }
        }

        // Scene first, then the transient rectangles over it.
        let mut all_selected: Vec<NodeId> = self.selecting.items().to_vec();
        all_selected.extend_from_slice(&self.drag_select);
        render(&self.scene, self.root, surface, &self.theme, &colliding, &all_selected);
        if let Some(band) = self.band {
            surface.stroke_rect(band.bounds(), self.theme.select_rect_stroke);
        }
        if let Some(bounds) = selection_bounds {
            surface.stroke_rect(bounds, self.theme.select_rect_stroke);
        }

        // The click is consumed exactly once.
        self.pending_click = None;

        Frame {
            colliding,
            band: self.band.map(|band| band.bounds()),
            selection_bounds,
            inserted,
            direction,
        }
    }
}
