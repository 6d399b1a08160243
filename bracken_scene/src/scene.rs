// Copyright 2026 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene tree: a generational arena of kinded nodes.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};

use bracken_geometry::{point_in_circle, point_in_rect};

use crate::node::{NodeId, NodeKind};

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
    selected: bool,
}

impl Node {
    fn new(generation: u32, kind: NodeKind) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            kind,
            selected: false,
        }
    }
}

/// A tree of drawable nodes stored in a generational slot arena.
///
/// Nodes are addressed by [`NodeId`]; freed slots are recycled with a bumped
/// generation, so a stale id never resolves to a different node. Every
/// operation is total: stale ids read as absent (`None`, empty slice, or
/// `false`) and mutate nothing.
///
/// Parents own their children exclusively. The child list order is both the
/// paint order and the traversal order for hit testing. The tree structure is
/// the caller's responsibility; `add_child` does not check for cycles.
#[derive(Clone, Default)]
pub struct Scene {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Scene {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scene")
            .field("nodes_total", &self.nodes.len())
            .field("nodes_alive", &self.len())
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Allocates a detached node of the given kind and returns its id.
    ///
    /// The kind's payload is normalized on the way in (rect corners ordered,
    /// circle radius and alpha clamped).
    pub fn insert(&mut self, kind: NodeKind) -> NodeId {
        let kind = kind.normalized();
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, kind));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, kind)));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[expect(clippy::cast_possible_truncation, reason = "node ids use 32-bit slot indices")]
        let idx = idx as u32;
        NodeId::new(idx, generation)
    }

    /// Allocates a node and appends it to `parent`'s child list.
    ///
    /// If `parent` is stale the node is still created, but detached.
    pub fn insert_child(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.insert(kind);
        if self.contains(parent) {
            self.link_parent(id, parent);
        }
        id
    }

    /// Appends `child` to `parent`'s child list.
    ///
    /// A child already attached elsewhere is first detached from its old
    /// parent. No-op if either id is stale. Cycles are not checked.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.contains(parent) || !self.contains(child) {
            return;
        }
        if let Some(old_parent) = self.node(child).parent {
            self.unlink_parent(child, old_parent);
        }
        self.link_parent(child, parent);
    }

    /// Detaches `child` from `parent`'s child list, removing the first match.
    ///
    /// The child stays alive, just parentless. No-op if either id is stale or
    /// `child` is not a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.contains(parent) || !self.contains(child) {
            return;
        }
        if self.node(child).parent != Some(parent) {
            return;
        }
        self.unlink_parent(child, parent);
    }

    /// Removes a node and frees its whole subtree.
    ///
    /// All ids into the subtree become stale. No-op for stale ids.
    pub fn remove(&mut self, id: NodeId) {
        if !self.contains(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        let children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Returns `true` if `id` refers to a live node.
    ///
    /// A `NodeId` is live if its slot exists and its generation matches the
    /// generation stored in that slot. See [`NodeId`] for the generational
    /// semantics.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// Returns `true` if the scene holds no live nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The children of a node in paint order, or an empty slice for stale
    /// ids.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.node_opt(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// The parent of a node, or `None` for detached nodes and stale ids.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id)?.parent
    }

    /// The kind (and geometry payload) of a node.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.node_opt(id).map(|node| node.kind)
    }

    /// Point collision test for a single node's own geometry.
    ///
    /// Box-like kinds use the inclusive rect test, circles the strict one.
    /// Lines, groups, and reticles never collide on their own; only their
    /// typed children are hit-testable. Stale ids never collide.
    #[must_use]
    pub fn check_collision(&self, id: NodeId, p: Point) -> bool {
        match self.kind(id) {
            Some(NodeKind::Square(rect) | NodeKind::Screen(rect) | NodeKind::SelectRect(rect)) => {
                point_in_rect(p, rect)
            }
            Some(NodeKind::Circle { circle, .. }) => point_in_circle(p, circle),
            Some(NodeKind::Line(_) | NodeKind::Group | NodeKind::Reticle) | None => false,
        }
    }

    /// Sets the node's own `selected` flag.
    ///
    /// This flag is bookkeeping for the nested hit-test policy; rendering
    /// consults the external selection set instead.
    pub fn set_selected(&mut self, id: NodeId, selected: bool) {
        if let Some(node) = self.node_opt_mut(id) {
            node.selected = selected;
        }
    }

    /// Reads the node's own `selected` flag. Stale ids read as unselected.
    #[must_use]
    pub fn is_selected(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some_and(|node| node.selected)
    }

    /// Flips the node's own `selected` flag.
    pub fn toggle_selected(&mut self, id: NodeId) {
        if let Some(node) = self.node_opt_mut(id) {
            node.selected = !node.selected;
        }
    }

    /// Translates a node's geometry by `delta`.
    ///
    /// Shape kinds move only their own geometry; their children stay put.
    /// `Group` and `Reticle` have no geometry, so translation recurses into
    /// their children instead.
    pub fn translate(&mut self, id: NodeId, delta: Vec2) {
        let Some(node) = self.node_opt_mut(id) else {
            return;
        };
        let children = match &mut node.kind {
            NodeKind::Square(rect) | NodeKind::Screen(rect) | NodeKind::SelectRect(rect) => {
                *rect = *rect + delta;
                return;
            }
            NodeKind::Circle { circle, .. } => {
                circle.center += delta;
                return;
            }
            NodeKind::Line(line) => {
                line.p0 += delta;
                line.p1 += delta;
                return;
            }
            NodeKind::Group | NodeKind::Reticle => node.children.clone(),
        };
        for child in children {
            self.translate(child, delta);
        }
    }

    /// The node's origin: rect top-left, circle center, line first endpoint.
    ///
    /// For `Group` and `Reticle` the origin is the top-left of the subtree
    /// bounding box, so `None` when childless.
    #[must_use]
    pub fn origin(&self, id: NodeId) -> Option<Point> {
        let kind = self.kind(id)?;
        match kind.own_origin() {
            Some(origin) => Some(origin),
            None => self.bounding_box(id).map(|bounds| bounds.origin()),
        }
    }

    /// Moves the node's origin to `p`, translating by the delta from the
    /// current origin. Same dispatch as [`Self::translate`], so groups and
    /// reticles carry their children.
    pub fn move_origin_to(&mut self, id: NodeId, p: Point) {
        let Some(origin) = self.origin(id) else {
            return;
        };
        self.translate(id, p - origin);
    }

    /// Sets a circle's fill opacity, clamped to `0..=1`. No-op for other
    /// kinds.
    pub fn set_alpha(&mut self, id: NodeId, alpha: f64) {
        if let Some(node) = self.node_opt_mut(id)
            && let NodeKind::Circle { alpha: current, .. } = &mut node.kind
        {
            *current = alpha.clamp(0.0, 1.0);
        }
    }

    /// Sets a circle's radius, clamped to be non-negative. No-op for other
    /// kinds.
    pub fn set_radius(&mut self, id: NodeId, radius: f64) {
        if let Some(node) = self.node_opt_mut(id)
            && let NodeKind::Circle { circle, .. } = &mut node.kind
        {
            circle.radius = radius.max(0.0);
        }
    }

    /// The bounding box of a node's geometry.
    ///
    /// Shape kinds report their own extent (a circle its circumscribed rect,
    /// a line its endpoint-spanned rect). `Group` and `Reticle` report the
    /// union of their children's boxes, `None` when childless.
    #[must_use]
    pub fn bounding_box(&self, id: NodeId) -> Option<Rect> {
        let kind = self.kind(id)?;
        if let Some(own) = kind.own_bounding_box() {
            return Some(own);
        }
        let mut bounds: Option<Rect> = None;
        for &child in self.children(id) {
            if let Some(child_bounds) = self.bounding_box(child) {
                bounds = Some(match bounds {
                    Some(acc) => acc.union(child_bounds),
                    None => child_bounds,
                });
            }
        }
        bounds
    }

    /// Assembles a crosshair: a [`NodeKind::Reticle`] under `parent` holding
    /// two lines crossing at `center` with half-length `arm`.
    pub fn crosshair(&mut self, parent: NodeId, center: Point, arm: f64) -> NodeId {
        let reticle = self.insert_child(parent, NodeKind::Reticle);
        self.insert_child(
            reticle,
            NodeKind::line(
                Point::new(center.x - arm, center.y),
                Point::new(center.x + arm, center.y),
            ),
        );
        self.insert_child(
            reticle,
            NodeKind::line(
                Point::new(center.x, center.y - arm),
                Point::new(center.x, center.y + arm),
            ),
        );
        reticle
    }

    // --- internals ---

    /// Access a node for internal use; panics if `id` is stale.
    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    /// Access a node mutably for internal use; panics if `id` is stale.
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let node = self.nodes.get(id.idx())?.as_ref()?;
        (node.generation == id.1).then_some(node)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let node = self.nodes.get_mut(id.idx())?.as_mut()?;
        (node.generation == id.1).then_some(node)
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        self.node_mut(parent).children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        let parent_node = self.node_mut(parent);
        if let Some(idx) = parent_node.children.iter().position(|c| *c == id) {
            parent_node.children.remove(idx);
        }
        self.node_mut(id).parent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> NodeKind {
        NodeKind::screen(Point::new(0.0, 0.0), Point::new(800.0, 600.0))
    }

    #[test]
    fn insert_builds_child_lists_in_order() {
        let mut scene = Scene::new();
        let root = scene.insert(screen());
        let a = scene.insert_child(
            root,
            NodeKind::square(Point::new(0.0, 0.0), Point::new(10.0, 10.0)),
        );
        let b = scene.insert_child(root, NodeKind::circle(Point::new(50.0, 50.0), 5.0));

        assert_eq!(scene.children(root), &[a, b]);
        assert_eq!(scene.parent(a), Some(root));
        assert_eq!(scene.parent(root), None);
        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn liveness_insert_remove_reuse() {
        let mut scene = Scene::new();
        let root = scene.insert(screen());
        let a = scene.insert_child(root, NodeKind::Group);

        assert!(scene.contains(a));
        scene.remove(a);
        assert!(!scene.contains(a));
        assert_eq!(scene.kind(a), None);

        let b = scene.insert_child(root, NodeKind::Group);
        assert!(scene.contains(b));
        assert!(!scene.contains(a));
        if a.0 == b.0 {
            assert!(b.1 > a.1, "generation must increase on slot reuse");
        }
    }

    #[test]
    fn remove_frees_whole_subtree() {
        let mut scene = Scene::new();
        let root = scene.insert(screen());
        let group = scene.insert_child(root, NodeKind::Group);
        let inner = scene.insert_child(
            group,
            NodeKind::square(Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
        );

        scene.remove(group);

        assert!(!scene.contains(group));
        assert!(!scene.contains(inner));
        assert!(scene.children(root).is_empty());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn add_child_detaches_from_old_parent() {
        let mut scene = Scene::new();
        let first = scene.insert(NodeKind::Group);
        let second = scene.insert(NodeKind::Group);
        let child = scene.insert_child(first, NodeKind::Reticle);

        scene.add_child(second, child);

        assert!(scene.children(first).is_empty());
        assert_eq!(scene.children(second), &[child]);
        assert_eq!(scene.parent(child), Some(second));
    }

    #[test]
    fn remove_child_detaches_without_freeing() {
        let mut scene = Scene::new();
        let root = scene.insert(screen());
        let a = scene.insert_child(root, NodeKind::Group);
        let b = scene.insert_child(root, NodeKind::Group);

        scene.remove_child(root, a);

        assert_eq!(scene.children(root), &[b]);
        assert!(scene.contains(a), "detached child stays alive");
        assert_eq!(scene.parent(a), None);

        // Detaching again, or detaching a non-child, changes nothing.
        scene.remove_child(root, a);
        assert_eq!(scene.children(root), &[b]);
    }

    #[test]
    fn insert_child_with_stale_parent_creates_detached_node() {
        let mut scene = Scene::new();
        let parent = scene.insert(NodeKind::Group);
        scene.remove(parent);

        let orphan = scene.insert_child(parent, NodeKind::Group);
        assert!(scene.contains(orphan));
        assert_eq!(scene.parent(orphan), None);
    }

    #[test]
    fn collision_dispatch_per_kind() {
        let mut scene = Scene::new();
        let root = scene.insert(screen());
        let square = scene.insert_child(
            root,
            NodeKind::square(Point::new(50.0, 50.0), Point::new(150.0, 150.0)),
        );
        let circle = scene.insert_child(root, NodeKind::circle(Point::new(300.0, 300.0), 75.0));
        let line = scene.insert_child(
            root,
            NodeKind::line(Point::new(0.0, 0.0), Point::new(100.0, 100.0)),
        );
        let group = scene.insert_child(root, NodeKind::Group);

        // Rect edges are inside, circle rims are not.
        assert!(scene.check_collision(square, Point::new(150.0, 150.0)));
        assert!(!scene.check_collision(square, Point::new(150.1, 150.0)));
        assert!(scene.check_collision(circle, Point::new(300.0, 330.0)));
        assert!(!scene.check_collision(circle, Point::new(375.0, 300.0)));

        assert!(scene.check_collision(root, Point::new(400.0, 300.0)));

        assert!(!scene.check_collision(line, Point::new(50.0, 50.0)));
        assert!(!scene.check_collision(group, Point::new(400.0, 300.0)));

        scene.remove(square);
        assert!(!scene.check_collision(square, Point::new(100.0, 100.0)));
    }

    #[test]
    fn translate_moves_own_geometry_only() {
        let mut scene = Scene::new();
        let outer = scene.insert(NodeKind::square(Point::new(0.0, 0.0), Point::new(100.0, 100.0)));
        let inner = scene.insert_child(
            outer,
            NodeKind::square(Point::new(10.0, 10.0), Point::new(20.0, 20.0)),
        );

        scene.translate(outer, Vec2::new(5.0, 7.0));

        assert_eq!(
            scene.kind(outer),
            Some(NodeKind::Square(Rect::new(5.0, 7.0, 105.0, 107.0)))
        );
        assert_eq!(
            scene.kind(inner),
            Some(NodeKind::Square(Rect::new(10.0, 10.0, 20.0, 20.0))),
            "shape children do not follow their parent"
        );
    }

    #[test]
    fn translate_recurses_into_groups() {
        let mut scene = Scene::new();
        let root = scene.insert(screen());
        let reticle = scene.crosshair(root, Point::new(100.0, 100.0), 10.0);

        scene.translate(reticle, Vec2::new(-50.0, 25.0));

        let children = scene.children(reticle).to_vec();
        assert_eq!(children.len(), 2);
        let Some(NodeKind::Line(horizontal)) = scene.kind(children[0]) else {
            panic!("expected a line");
        };
        assert_eq!(horizontal.p0, Point::new(40.0, 125.0));
        assert_eq!(horizontal.p1, Point::new(60.0, 125.0));
    }

    #[test]
    fn move_origin_to_is_absolute() {
        let mut scene = Scene::new();
        let square =
            scene.insert(NodeKind::square(Point::new(50.0, 50.0), Point::new(150.0, 150.0)));
        scene.move_origin_to(square, Point::new(0.0, 0.0));
        assert_eq!(
            scene.kind(square),
            Some(NodeKind::Square(Rect::new(0.0, 0.0, 100.0, 100.0)))
        );

        let circle = scene.insert(NodeKind::circle(Point::new(10.0, 10.0), 5.0));
        scene.move_origin_to(circle, Point::new(200.0, 300.0));
        let Some(NodeKind::Circle { circle: moved, .. }) = scene.kind(circle) else {
            panic!("expected a circle");
        };
        assert_eq!(moved.center, Point::new(200.0, 300.0));
    }

    #[test]
    fn move_origin_to_translates_group_subtrees() {
        let mut scene = Scene::new();
        let group = scene.insert(NodeKind::Group);
        let member = scene.insert_child(
            group,
            NodeKind::square(Point::new(20.0, 20.0), Point::new(40.0, 40.0)),
        );

        // Group origin is its subtree bounding box top-left: (20, 20).
        scene.move_origin_to(group, Point::new(0.0, 0.0));
        assert_eq!(
            scene.kind(member),
            Some(NodeKind::Square(Rect::new(0.0, 0.0, 20.0, 20.0)))
        );

        // A childless group has no origin, so the move is a no-op.
        let empty = scene.insert(NodeKind::Group);
        scene.move_origin_to(empty, Point::new(9.0, 9.0));
        assert_eq!(scene.bounding_box(empty), None);
    }

    #[test]
    fn alpha_and_radius_apply_to_circles_only() {
        let mut scene = Scene::new();
        let circle = scene.insert(NodeKind::circle(Point::new(0.0, 0.0), 75.0));
        let square = scene.insert(NodeKind::square(Point::new(0.0, 0.0), Point::new(1.0, 1.0)));

        scene.set_alpha(circle, 2.5);
        scene.set_radius(circle, -10.0);
        let Some(NodeKind::Circle { circle: c, alpha }) = scene.kind(circle) else {
            panic!("expected a circle");
        };
        assert_eq!(alpha, 1.0);
        assert_eq!(c.radius, 0.0);

        scene.set_alpha(square, 0.5);
        scene.set_radius(square, 10.0);
        assert_eq!(
            scene.kind(square),
            Some(NodeKind::Square(Rect::new(0.0, 0.0, 1.0, 1.0)))
        );
    }

    #[test]
    fn bounding_box_unions_group_children() {
        let mut scene = Scene::new();
        let group = scene.insert(NodeKind::Group);
        scene.insert_child(
            group,
            NodeKind::square(Point::new(0.0, 0.0), Point::new(10.0, 10.0)),
        );
        scene.insert_child(group, NodeKind::circle(Point::new(100.0, 100.0), 20.0));

        assert_eq!(
            scene.bounding_box(group),
            Some(Rect::new(0.0, 0.0, 120.0, 120.0))
        );

        let empty = scene.insert(NodeKind::Reticle);
        assert_eq!(scene.bounding_box(empty), None);
    }

    #[test]
    fn insert_normalizes_payloads() {
        let mut scene = Scene::new();
        let square = scene.insert(NodeKind::Square(Rect::new(150.0, 150.0, 50.0, 50.0)));
        assert_eq!(
            scene.kind(square),
            Some(NodeKind::Square(Rect::new(50.0, 50.0, 150.0, 150.0)))
        );
    }

    #[test]
    fn selected_flag_round_trips() {
        let mut scene = Scene::new();
        let node = scene.insert(NodeKind::square(Point::new(0.0, 0.0), Point::new(1.0, 1.0)));

        assert!(!scene.is_selected(node));
        scene.toggle_selected(node);
        assert!(scene.is_selected(node));
        scene.set_selected(node, false);
        assert!(!scene.is_selected(node));

        scene.remove(node);
        scene.toggle_selected(node);
        assert!(!scene.is_selected(node), "stale ids read as unselected");
    }
}
