//! Rigid-length links between two nodes.

use core::fmt;

use crate::float::Float;
use crate::node::Node;

/// Stable link handle, handed out in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkId(pub u32);

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Link({})", self.0)
    }
}

/// A distance constraint between two nodes of the same scene.
///
/// Endpoints are indices into the scene's node arena. The scene rewrites
/// them when it compacts the arena, so a link never points at a removed node.
#[derive(Clone, Debug)]
pub struct Link<F: Float> {
    pub(crate) id: LinkId,
    pub(crate) a: usize,
    pub(crate) b: usize,
    rest_length: F,
}

impl<F: Float> Link<F> {
    pub(crate) fn new(id: LinkId, a: usize, b: usize, rest_length: F) -> Self {
        Link { id, a, b, rest_length }
    }

    pub fn id(&self) -> LinkId {
        self.id
    }

    /// Length the link was created with. Never changes afterwards.
    pub fn rest_length(&self) -> F {
        self.rest_length
    }

    pub(crate) fn is_alive(&self, nodes: &[Node<F>]) -> bool {
        nodes[self.a].alive && nodes[self.b].alive
    }

    /// One relaxation pass: put both endpoints `rest_length / 2` from their
    /// midpoint along the current axis.
    ///
    /// Coincident endpoints have no axis and are left where they are.
    pub(crate) fn solve(&self, nodes: &mut [Node<F>]) {
        if !self.is_alive(nodes) {
            return;
        }
        let a_pos = nodes[self.a].pos;
        let b_pos = nodes[self.b].pos;

        let center = (a_pos + b_pos) * F::half();
        let direction = (a_pos - b_pos).normalize();
        if direction.is_zero() {
            return;
        }
        let half_extent = direction * (self.rest_length * F::half());

        if !nodes[self.a].is_immovable() {
            nodes[self.a].pos = center + half_extent;
        }
        if !nodes[self.b].is_immovable() {
            nodes[self.b].pos = center - half_extent;
        }
    }
}
