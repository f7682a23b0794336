use ropework::{
    GridConfig, Modifiers, Scene, SolverConfig, StepStats, Vec2, Viewport,
};
use wasm_bindgen::prelude::*;

// ---- Sandbox Demo ----
//
// Thin adapter between browser input and a `Scene`. The page polls the mouse
// and keyboard, forwards decoded events here once per animation frame, then
// draws `node_positions` / `link_segments`.

#[wasm_bindgen]
pub struct SandboxDemo {
    scene: Scene<f64>,
    config: SolverConfig<f64>,
    viewport: Viewport<f64>,
    stats: StepStats,
}

#[wasm_bindgen]
impl SandboxDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        SandboxDemo {
            scene: Scene::new(),
            config: SolverConfig::new(),
            viewport: Viewport::new(width, height),
            stats: StepStats::default(),
        }
    }

    pub fn set_iterations(&mut self, iterations: usize) {
        self.config.iterations = iterations;
    }

    pub fn set_gravity(&mut self, x: f64, y: f64) {
        self.config.gravity = Vec2::new(x, y);
    }

    /// Fill the scene with the zig-zag grid. Returns false if it already ran.
    pub fn spawn_grid(&mut self, columns: usize, rows: usize, offset_x: f64) -> bool {
        let grid = GridConfig::new(columns, rows).with_offset(offset_x);
        self.scene.populate_grid(&grid, &self.viewport).is_ok()
    }

    /// Click: `alt` spawns a fixed node, `space` skips the link to the
    /// previous node.
    pub fn click(&mut self, x: f64, y: f64, alt: bool, space: bool) {
        let modifiers = Modifiers { fixed: alt, standalone: space };
        self.scene.spawn_at(Vec2::new(x, y), modifiers);
    }

    /// Grab the node under the pointer, or drop the one being dragged.
    pub fn toggle_drag(&mut self, x: f64, y: f64) -> bool {
        self.scene
            .begin_or_end_drag(Vec2::new(x, y), self.viewport.node_size)
            .is_some()
    }

    pub fn toggle_play(&mut self) -> bool {
        self.scene.toggle_simulation()
    }

    /// One animation frame: move the dragged node, then step if playing.
    pub fn frame(&mut self, pointer_x: f64, pointer_y: f64) {
        self.scene.update_drag(Vec2::new(pointer_x, pointer_y));
        self.scene.tick(&self.config, &mut self.stats);
    }

    /// Returns flat [x0, y0, fixed0, x1, y1, fixed1, ...], fixed as 0.0 / 1.0
    pub fn node_positions(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.scene.node_count() * 3);
        for n in self.scene.nodes() {
            out.push(n.pos.x);
            out.push(n.pos.y);
            out.push(if n.fixed { 1.0 } else { 0.0 });
        }
        out
    }

    /// Returns flat [ax0, ay0, bx0, by0, ax1, ...]
    pub fn link_segments(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.scene.link_count() * 4);
        for (a, b) in self.scene.link_segments() {
            out.extend_from_slice(&[a.x, a.y, b.x, b.y]);
        }
        out
    }

    pub fn node_size(&self) -> f64 {
        self.viewport.node_size
    }

    pub fn node_count(&self) -> usize {
        self.scene.node_count()
    }

    pub fn link_count(&self) -> usize {
        self.scene.link_count()
    }

    pub fn is_playing(&self) -> bool {
        self.scene.is_simulating()
    }

    /// Debug overlay lines: pointer position, scene size, frames stepped and
    /// entities culled so far.
    pub fn debug_labels(&self, pointer_x: f64, pointer_y: f64) -> Vec<String> {
        vec![
            format!("Mouse : ({}, {})", pointer_x, pointer_y),
            format!("Number of points : {}", self.scene.node_count()),
            format!("Number of links : {}", self.scene.link_count()),
            format!("Frames simulated : {}", self.stats.frames),
            format!("Culled : {} points, {} links", self.stats.nodes_culled, self.stats.links_culled),
        ]
    }
}
