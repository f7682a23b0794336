//! Pointer-driven editing: spawning nodes and dragging them around.
//!
//! Device polling lives with the caller. These methods take the already
//! decoded pointer position and modifier state.

use crate::float::Float;
use crate::link::LinkId;
use crate::node::NodeId;
use crate::scene::Scene;
use crate::vec::Vec2;

/// Modifier state at the moment of a spawn click.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Spawn the node fixed in place.
    pub fixed: bool,
    /// Do not link the new node to the previously created one.
    pub standalone: bool,
}

/// Entities created by [`Scene::spawn_at`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpawnResult {
    pub node: NodeId,
    pub link: Option<LinkId>,
}

impl<F: Float> Scene<F> {
    /// Add a node at `pointer`, chained to the most recent node unless
    /// `modifiers.standalone` is set.
    pub fn spawn_at(&mut self, pointer: Vec2<F>, modifiers: Modifiers) -> SpawnResult {
        let previous = self.last_node();
        let node = self.create_node(pointer, modifiers.fixed);

        let link = match previous {
            Some(prev) if !modifiers.standalone => self.create_link(prev, node).ok(),
            _ => None,
        };
        SpawnResult { node, link }
    }

    /// First node, in creation order, whose pick box contains `pointer`.
    pub fn hit_test(&self, pointer: Vec2<F>, hit_size: F) -> Option<NodeId> {
        self.nodes()
            .find(|n| n.contains_point(pointer, hit_size))
            .map(|n| n.id())
    }

    /// Start dragging the node under `pointer`, or release the current drag.
    ///
    /// Returns the node being dragged after the call.
    pub fn begin_or_end_drag(&mut self, pointer: Vec2<F>, hit_size: F) -> Option<NodeId> {
        if let Some(id) = self.dragged.take() {
            if let Some(idx) = self.index_of(id) {
                self.nodes[idx].dragged = false;
            }
            return None;
        }

        let idx = self
            .hit_test(pointer, hit_size)
            .and_then(|id| self.index_of(id))?;
        let node = &mut self.nodes[idx];
        node.dragged = true;
        node.teleport(node.pos);
        self.dragged = Some(node.id());
        self.dragged
    }

    /// Move the dragged node (if any) to `pointer` with zero implied velocity.
    pub fn update_drag(&mut self, pointer: Vec2<F>) {
        let Some(id) = self.dragged else {
            return;
        };
        if let Some(idx) = self.index_of(id) {
            self.nodes[idx].teleport(pointer);
        }
    }

    pub fn dragged_node(&self) -> Option<NodeId> {
        self.dragged
    }
}
