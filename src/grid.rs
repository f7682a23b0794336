//! Zig-zag grid of hanging chains, used to populate a fresh scene.

use crate::config::Viewport;
use crate::error::SceneError;
use crate::float::Float;
use crate::node::NodeId;
use crate::scene::Scene;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Layout of a generated grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig<F: Float> {
    /// Links per row; each row holds `columns + 1` nodes.
    pub columns: usize,
    /// Rows beyond the first; the grid holds `rows + 1` rows.
    pub rows: usize,
    /// Distance between neighbouring columns and between rows.
    pub spacing: F,
    /// Gap between the top of the viewport and the first row.
    pub top_margin: F,
    /// Horizontal shift of even rows; odd rows are shifted the other way.
    pub offset_x: F,
}

impl<F: Float> GridConfig<F> {
    pub fn new(columns: usize, rows: usize) -> Self {
        GridConfig {
            columns,
            rows,
            spacing: F::from_f32(20.0),
            top_margin: F::from_f32(100.0),
            offset_x: F::from_f32(10.0),
        }
    }

    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_top_margin(mut self, top_margin: F) -> Self {
        self.top_margin = top_margin;
        self
    }

    pub fn with_offset(mut self, offset_x: F) -> Self {
        self.offset_x = offset_x;
        self
    }

    pub fn node_count(&self) -> usize {
        (self.columns + 1) * (self.rows + 1)
    }

    pub fn link_count(&self) -> usize {
        self.columns * (self.rows + 1)
    }
}

impl<F: Float> Default for GridConfig<F> {
    fn default() -> Self {
        Self::new(20, 10)
    }
}

/// What [`Scene::populate_grid`] added.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSummary {
    pub nodes: usize,
    pub links: usize,
    /// The fixed first node of every row, top row first.
    pub anchors: AllocVec<NodeId>,
}

impl<F: Float> Scene<F> {
    /// Fill the scene with `rows + 1` chains of `columns + 1` nodes.
    ///
    /// The first node of every row is fixed and every other node hangs off
    /// its left neighbour. Rows are not linked to each other. Rows are
    /// stacked downwards from `viewport.height - top_margin`, centred
    /// horizontally, and alternately shifted by `+offset_x` / `-offset_x`.
    ///
    /// A scene can be populated once; later calls fail with
    /// [`SceneError::AlreadyPopulated`] and leave the scene untouched.
    pub fn populate_grid(
        &mut self,
        config: &GridConfig<F>,
        viewport: &Viewport<F>,
    ) -> Result<GridSummary, SceneError> {
        if self.populated {
            return Err(SceneError::AlreadyPopulated);
        }
        self.populated = true;

        let spacing = config.spacing;
        let width = F::from_usize(config.columns) * spacing;
        let left = (viewport.width - width) * F::half();
        let top = viewport.height - config.top_margin;

        let nodes_before = self.node_count();
        let links_before = self.link_count();
        let mut anchors = AllocVec::with_capacity(config.rows + 1);

        for row in 0..=config.rows {
            let shift = if row % 2 == 1 { -config.offset_x } else { config.offset_x };
            let y = top - F::from_usize(row) * spacing;

            let mut previous: Option<NodeId> = None;
            for col in 0..=config.columns {
                let x = left + shift + F::from_usize(col) * spacing;
                let id = self.create_node(Vec2::new(x, y), col == 0);
                match previous {
                    Some(prev) => {
                        self.create_link(prev, id)?;
                    }
                    None => anchors.push(id),
                }
                previous = Some(id);
            }
        }

        Ok(GridSummary {
            nodes: self.node_count() - nodes_before,
            links: self.link_count() - links_before,
            anchors,
        })
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> GridConfig<f64> {
        GridConfig::new(3, 2).with_spacing(10.0).with_offset(4.0)
    }

    #[test]
    fn counts_match_config() {
        let mut scene = Scene::new();
        let summary = scene.populate_grid(&small(), &Viewport::default()).unwrap();
        assert_eq!(summary.nodes, 12); // 4 * 3
        assert_eq!(summary.links, 9); // 3 * 3
        assert_eq!(summary.anchors.len(), 3);
    }

    #[test]
    fn rows_zig_zag() {
        let mut scene = Scene::new();
        let viewport = Viewport::new(100.0, 200.0);
        let summary = scene.populate_grid(&small(), &viewport).unwrap();

        let row0 = scene.node(summary.anchors[0]).unwrap().pos;
        let row1 = scene.node(summary.anchors[1]).unwrap().pos;
        let row2 = scene.node(summary.anchors[2]).unwrap().pos;

        // left = (100 - 30) / 2 = 35, top = 200 - 100 = 100
        assert_eq!(row0, Vec2::new(39.0, 100.0));
        assert_eq!(row1, Vec2::new(31.0, 90.0));
        assert_eq!(row2, Vec2::new(39.0, 80.0));
    }

    #[test]
    fn second_population_is_rejected() {
        let mut scene = Scene::new();
        scene.populate_grid(&small(), &Viewport::default()).unwrap();
        let count = scene.node_count();
        assert_eq!(
            scene.populate_grid(&small(), &Viewport::default()),
            Err(SceneError::AlreadyPopulated)
        );
        assert_eq!(scene.node_count(), count);
        assert!(scene.is_populated());
    }

    #[test]
    fn zero_columns_gives_lone_anchors() {
        let mut scene: Scene<f64> = Scene::new();
        let summary = scene
            .populate_grid(&GridConfig::new(0, 4), &Viewport::default())
            .unwrap();
        assert_eq!(summary.nodes, 5);
        assert_eq!(summary.links, 0);
        assert!(scene.nodes().all(|n| n.fixed));
    }
}
