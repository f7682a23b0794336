//! Per-frame stepping: Verlet integration, link relaxation and culling.

use crate::config::SolverConfig;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::scene::Scene;

/// Advance `scene` by one frame.
///
/// 1. Integrate every free node once with `config.gravity`.
/// 2. Kill nodes that fell below `y = 0`.
/// 3. Relax all links `config.iterations` times, in creation order.
/// 4. Remove dead links, then dead nodes.
///
/// Does not look at [`Scene::is_simulating`]; callers that want play/pause
/// use [`Scene::tick`].
pub fn advance<F: Float, O: StepObserver>(
    scene: &mut Scene<F>,
    config: &SolverConfig<F>,
    observer: &mut O,
) {
    integrate(scene, config);
    observer.on_integrate();

    let killed = mark_out_of_bounds(scene);
    observer.on_out_of_bounds(killed);

    for i in 0..config.iterations {
        relax(scene);
        observer.on_constraint_iteration(i);
    }

    let (nodes_removed, links_removed) = scene.cull();
    observer.on_cull(nodes_removed, links_removed);

    observer.on_step_complete();
}

fn integrate<F: Float>(scene: &mut Scene<F>, config: &SolverConfig<F>) {
    for node in scene.nodes.iter_mut() {
        node.integrate(config.gravity);
    }
}

fn mark_out_of_bounds<F: Float>(scene: &mut Scene<F>) -> usize {
    let mut killed = 0;
    for node in scene.nodes.iter_mut() {
        if node.alive && node.pos.y < F::zero() {
            node.alive = false;
            killed += 1;
        }
    }
    killed
}

/// One Gauss-Seidel pass: each link sees the positions left by the previous.
fn relax<F: Float>(scene: &mut Scene<F>) {
    let Scene { nodes, links, .. } = scene;
    for link in links.iter() {
        link.solve(nodes);
    }
}
