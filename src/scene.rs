//! The scene: node arena, links and simulation flags.

use crate::config::SolverConfig;
use crate::error::SceneError;
use crate::float::Float;
use crate::link::{Link, LinkId};
use crate::node::{Node, NodeId};
use crate::observer::StepObserver;
use crate::solver;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Everything one simulation owns.
///
/// Nodes and links are kept in creation order. Ids grow monotonically and
/// removal preserves order, so both arenas stay sorted by id and handles are
/// resolved with a binary search.
pub struct Scene<F: Float> {
    pub(crate) nodes: AllocVec<Node<F>>,
    pub(crate) links: AllocVec<Link<F>>,
    pub(crate) simulating: bool,
    pub(crate) dragged: Option<NodeId>,
    pub(crate) populated: bool,
    next_node_id: u32,
    next_link_id: u32,
}

impl<F: Float> Scene<F> {
    pub fn new() -> Self {
        Scene {
            nodes: AllocVec::new(),
            links: AllocVec::new(),
            simulating: false,
            dragged: None,
            populated: false,
            next_node_id: 0,
            next_link_id: 0,
        }
    }

    pub fn create_node(&mut self, pos: Vec2<F>, fixed: bool) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.push(Node::new(id, pos, fixed));
        id
    }

    /// Link two live nodes, taking their current distance as rest length.
    pub fn create_link(&mut self, a: NodeId, b: NodeId) -> Result<LinkId, SceneError> {
        let ia = self.live_index(a)?;
        let ib = self.live_index(b)?;
        let rest_length = self.nodes[ia].pos.distance(self.nodes[ib].pos);
        Ok(self.push_link(ia, ib, rest_length))
    }

    /// Link two live nodes with an explicit rest length.
    pub fn create_link_with_length(
        &mut self,
        a: NodeId,
        b: NodeId,
        rest_length: F,
    ) -> Result<LinkId, SceneError> {
        let ia = self.live_index(a)?;
        let ib = self.live_index(b)?;
        Ok(self.push_link(ia, ib, rest_length))
    }

    fn push_link(&mut self, a: usize, b: usize, rest_length: F) -> LinkId {
        let id = LinkId(self.next_link_id);
        self.next_link_id += 1;
        self.links.push(Link::new(id, a, b, rest_length));
        id
    }

    pub(crate) fn index_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.binary_search_by_key(&id, |n| n.id).ok()
    }

    fn live_index(&self, id: NodeId) -> Result<usize, SceneError> {
        match self.index_of(id) {
            Some(idx) if self.nodes[idx].alive => Ok(idx),
            _ => Err(SceneError::InvalidNode { id }),
        }
    }

    pub fn node(&self, id: NodeId) -> Result<&Node<F>, SceneError> {
        self.index_of(id)
            .map(|idx| &self.nodes[idx])
            .ok_or(SceneError::InvalidNode { id })
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node<F>, SceneError> {
        match self.index_of(id) {
            Some(idx) => Ok(&mut self.nodes[idx]),
            None => Err(SceneError::InvalidNode { id }),
        }
    }

    pub fn link(&self, id: LinkId) -> Result<&Link<F>, SceneError> {
        self.links
            .binary_search_by_key(&id, |l| l.id)
            .map(|idx| &self.links[idx])
            .map_err(|_| SceneError::InvalidLink { id })
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.index_of(id).is_some()
    }

    /// Most recently created node still in the scene.
    pub fn last_node(&self) -> Option<NodeId> {
        self.nodes.last().map(|n| n.id)
    }

    /// Handles of the two nodes a link joins.
    pub fn link_endpoints(&self, id: LinkId) -> Result<(NodeId, NodeId), SceneError> {
        let link = self.link(id)?;
        match (self.nodes.get(link.a), self.nodes.get(link.b)) {
            (Some(a), Some(b)) => Ok((a.id, b.id)),
            _ => Err(SceneError::InvalidLink { id }),
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<F>> {
        self.nodes.iter().filter(|n| n.alive)
    }

    pub fn links(&self) -> impl Iterator<Item = &Link<F>> {
        self.links.iter().filter(|l| l.is_alive(&self.nodes))
    }

    /// Endpoint positions of every live link, for drawing.
    pub fn link_segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.links()
            .map(|l| (self.nodes[l.a].pos, self.nodes[l.b].pos))
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn link_count(&self) -> usize { self.links.len() }
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    pub fn is_simulating(&self) -> bool { self.simulating }

    pub fn set_simulating(&mut self, simulating: bool) {
        self.simulating = simulating;
    }

    pub fn toggle_simulation(&mut self) -> bool {
        self.simulating = !self.simulating;
        self.simulating
    }

    /// Advance one frame if the scene is playing. Returns whether it did.
    pub fn tick<O: StepObserver>(&mut self, config: &SolverConfig<F>, observer: &mut O) -> bool {
        if !self.simulating {
            return false;
        }
        solver::advance(self, config, observer);
        true
    }

    /// Drop every node and link and release any drag.
    ///
    /// Id counters keep counting, so handles issued before stay invalid. The
    /// grid builder guard is kept too: a scene is populated at most once in
    /// its lifetime, cleared or not.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.links.clear();
        self.dragged = None;
    }

    /// Remove dead links, then dead nodes, and rewrite link endpoints to the
    /// compacted arena. Returns `(nodes_removed, links_removed)`.
    pub(crate) fn cull(&mut self) -> (usize, usize) {
        let links_before = self.links.len();
        let nodes = &self.nodes;
        self.links.retain(|l| l.is_alive(nodes));
        let links_removed = links_before - self.links.len();

        let nodes_before = self.nodes.len();
        if self.nodes.iter().all(|n| n.alive) {
            return (0, links_removed);
        }

        let mut remap = AllocVec::with_capacity(nodes_before);
        let mut next = 0usize;
        for node in &self.nodes {
            if node.alive {
                remap.push(Some(next));
                next += 1;
            } else {
                remap.push(None);
            }
        }
        self.nodes.retain(|n| n.alive);
        for link in self.links.iter_mut() {
            // Surviving links only reference surviving nodes.
            if let (Some(a), Some(b)) = (remap[link.a], remap[link.b]) {
                link.a = a;
                link.b = b;
            }
        }

        if let Some(id) = self.dragged {
            if self.index_of(id).is_none() {
                self.dragged = None;
            }
        }

        (nodes_before - self.nodes.len(), links_removed)
    }
}

impl<F: Float> Default for Scene<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_creation_order() {
        let mut scene: Scene<f64> = Scene::new();
        let a = scene.create_node(Vec2::new(0.0, 0.0), true);
        let b = scene.create_node(Vec2::new(3.0, 4.0), false);
        assert!(a < b);
        assert_eq!(scene.last_node(), Some(b));
        let link = scene.create_link(a, b).unwrap();
        assert!((scene.link(link).unwrap().rest_length() - 5.0).abs() < 1e-12);
        assert_eq!(scene.link_endpoints(link), Ok((a, b)));
    }

    #[test]
    fn cull_compacts_and_remaps() {
        let mut scene: Scene<f64> = Scene::new();
        let a = scene.create_node(Vec2::new(0.0, 10.0), false);
        let b = scene.create_node(Vec2::new(10.0, 10.0), false);
        let c = scene.create_node(Vec2::new(20.0, 10.0), false);
        let d = scene.create_node(Vec2::new(30.0, 10.0), false);
        scene.create_link(a, b).unwrap();
        scene.create_link(b, c).unwrap();
        let cd = scene.create_link(c, d).unwrap();

        scene.node_mut(a).unwrap().alive = false;
        assert_eq!(scene.cull(), (1, 1));

        assert!(!scene.contains_node(a));
        assert_eq!(scene.node_count(), 3);
        assert_eq!(scene.link_count(), 2);
        assert_eq!(scene.link_endpoints(cd), Ok((c, d)));
    }

    #[test]
    fn dead_nodes_cannot_be_linked() {
        let mut scene: Scene<f64> = Scene::new();
        let a = scene.create_node(Vec2::new(0.0, 10.0), false);
        let b = scene.create_node(Vec2::new(10.0, 10.0), false);
        scene.node_mut(b).unwrap().alive = false;
        assert_eq!(scene.create_link(a, b), Err(SceneError::InvalidNode { id: b }));
    }

    #[test]
    fn endpoints_of_unknown_or_culled_link_are_an_error() {
        let mut scene: Scene<f64> = Scene::new();
        let a = scene.create_node(Vec2::new(0.0, 10.0), true);
        let b = scene.create_node(Vec2::new(0.0, 0.01), false);
        let ab = scene.create_link(a, b).unwrap();

        let stranger = LinkId(99);
        assert_eq!(
            scene.link_endpoints(stranger),
            Err(SceneError::InvalidLink { id: stranger })
        );

        scene.node_mut(b).unwrap().alive = false;
        scene.cull();
        assert_eq!(scene.link_endpoints(ab), Err(SceneError::InvalidLink { id: ab }));
    }

    #[test]
    fn clear_keeps_counters_and_grid_guard() {
        use crate::config::Viewport;
        use crate::grid::GridConfig;

        let mut scene: Scene<f64> = Scene::new();
        scene
            .populate_grid(&GridConfig::new(2, 1), &Viewport::default())
            .unwrap();
        let old_node = scene.last_node().unwrap();
        let old_link = scene.links().last().map(|l| l.id()).unwrap();
        let held = scene.node(old_node).unwrap().pos;
        assert_eq!(scene.begin_or_end_drag(held, 10.0), Some(old_node));

        scene.clear();
        assert!(scene.is_empty());
        assert_eq!(scene.link_count(), 0);
        assert_eq!(scene.dragged_node(), None);
        assert!(!scene.contains_node(old_node));
        assert!(scene.link(old_link).is_err());

        let n1 = scene.create_node(Vec2::new(0.0, 50.0), false);
        let n2 = scene.create_node(Vec2::new(10.0, 50.0), false);
        assert!(n1 > old_node);
        assert!(scene.create_link(n1, n2).unwrap() > old_link);

        assert!(scene.is_populated());
        assert_eq!(
            scene.populate_grid(&GridConfig::new(2, 1), &Viewport::default()),
            Err(SceneError::AlreadyPopulated)
        );
    }

    #[test]
    fn toggle_simulation_flips_flag() {
        let mut scene: Scene<f32> = Scene::default();
        assert!(!scene.is_simulating());
        assert!(scene.toggle_simulation());
        assert!(!scene.toggle_simulation());
    }
}
