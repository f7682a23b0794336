//! Point masses with position-based (Verlet) dynamics.

use core::fmt;

use crate::float::Float;
use crate::vec::Vec2;

/// Stable node handle.
///
/// Ids are handed out in creation order and never reused, so a handle to a
/// culled node stays invalid instead of silently aliasing a newer node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// A Verlet point mass. Velocity is implicit: `pos - prev_pos`.
#[derive(Clone, Debug)]
pub struct Node<F: Float> {
    pub(crate) id: NodeId,
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub fixed: bool,
    pub alive: bool,
    pub dragged: bool,
}

impl<F: Float> Node<F> {
    pub(crate) fn new(id: NodeId, pos: Vec2<F>, fixed: bool) -> Self {
        Node {
            id,
            pos,
            prev_pos: pos,
            fixed,
            alive: true,
            dragged: false,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Advance one frame: `pos + velocity + gravity`.
    ///
    /// Fixed, dragged and dead nodes are left untouched, including `prev_pos`.
    pub fn integrate(&mut self, gravity: Vec2<F>) {
        if !self.is_integrated() {
            return;
        }
        let velocity = self.pos - self.prev_pos;
        let candidate = self.pos + velocity + gravity;
        self.prev_pos = self.pos;
        self.pos = candidate;
    }

    pub fn is_integrated(&self) -> bool {
        self.alive && !self.fixed && !self.dragged
    }

    /// Relaxation may not move fixed or dragged nodes.
    pub fn is_immovable(&self) -> bool {
        self.fixed || self.dragged
    }

    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    /// Place the node at `pos` with zero implied velocity.
    pub fn teleport(&mut self, pos: Vec2<F>) {
        self.pos = pos;
        self.prev_pos = pos;
    }

    /// Axis-aligned box `[pos, pos + size]` test, used for picking.
    pub fn contains_point(&self, point: Vec2<F>, size: F) -> bool {
        point.x >= self.pos.x
            && point.x <= self.pos.x + size
            && point.y >= self.pos.y
            && point.y <= self.pos.y + size
    }
}
