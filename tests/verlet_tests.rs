use ropework::{advance, NoOpStepObserver, Scene, SolverConfig, Vec2};

#[test]
fn single_frame_gravity_drop() {
    let mut scene: Scene<f64> = Scene::new();
    let start = Vec2::new(200.0, 300.0);
    let n = scene.create_node(start, false);

    let g = Vec2::new(0.25, -0.5);
    let config = SolverConfig::new().with_gravity(g);
    advance(&mut scene, &config, &mut NoOpStepObserver);

    let node = scene.node(n).unwrap();
    assert_eq!(node.pos, start + g);
    assert_eq!(node.prev_pos, start);
}

#[test]
fn free_fall_accumulates_velocity() {
    let mut scene: Scene<f64> = Scene::new();
    let n = scene.create_node(Vec2::new(0.0, 500.0), false);
    let config = SolverConfig::new().with_gravity(Vec2::new(0.0, -1.0));

    for _ in 0..10 {
        advance(&mut scene, &config, &mut NoOpStepObserver);
    }

    // 1 + 2 + ... + 10 = 55
    let node = scene.node(n).unwrap();
    assert!((node.pos.y - 445.0).abs() < 1e-9, "pos.y = {}", node.pos.y);
    assert!((node.velocity().y + 10.0).abs() < 1e-9);
}

#[test]
fn fixed_nodes_never_move() {
    let mut scene: Scene<f64> = Scene::new();
    let anchor = scene.create_node(Vec2::new(50.0, 400.0), true);
    let mut prev = anchor;
    for i in 1..6 {
        let n = scene.create_node(Vec2::new(50.0 + 15.0 * i as f64, 400.0), false);
        scene.create_link(prev, n).unwrap();
        prev = n;
    }
    let other_anchor = scene.create_node(Vec2::new(300.0, 400.0), true);
    scene.create_link(prev, other_anchor).unwrap();

    let config = SolverConfig::new();
    for _ in 0..300 {
        advance(&mut scene, &config, &mut NoOpStepObserver);
        for id in [anchor, other_anchor] {
            let node = scene.node(id).unwrap();
            assert_eq!(node.pos, node.prev_pos);
        }
    }
    assert_eq!(scene.node(anchor).unwrap().pos, Vec2::new(50.0, 400.0));
    assert_eq!(scene.node(other_anchor).unwrap().pos, Vec2::new(300.0, 400.0));
}

#[test]
fn rest_length_survives_simulation() {
    let mut scene: Scene<f64> = Scene::new();
    let a = scene.create_node(Vec2::new(0.0, 300.0), true);
    let b = scene.create_node(Vec2::new(30.0, 340.0), false);
    let c = scene.create_node(Vec2::new(60.0, 300.0), false);
    let ab = scene.create_link(a, b).unwrap();
    let bc = scene.create_link(b, c).unwrap();
    let ca = scene.create_link(c, a).unwrap();

    let before: Vec<f64> = [ab, bc, ca]
        .iter()
        .map(|id| scene.link(*id).unwrap().rest_length())
        .collect();
    assert!((before[0] - 50.0).abs() < 1e-12);

    let config = SolverConfig::new().with_gravity(Vec2::new(0.3, -0.4));
    for _ in 0..200 {
        advance(&mut scene, &config, &mut NoOpStepObserver);
    }

    for (id, rest) in [ab, bc, ca].iter().zip(before) {
        assert_eq!(scene.link(*id).unwrap().rest_length(), rest);
    }
}

#[test]
fn zero_length_link_is_harmless() {
    let mut scene: Scene<f64> = Scene::new();
    let a = scene.create_node(Vec2::new(100.0, 100.0), false);
    let b = scene.create_node(Vec2::new(100.0, 100.0), false);
    let link = scene.create_link(a, b).unwrap();
    assert_eq!(scene.link(link).unwrap().rest_length(), 0.0);

    let config = SolverConfig::new();
    for _ in 0..5 {
        advance(&mut scene, &config, &mut NoOpStepObserver);
    }
    for id in [a, b] {
        let pos = scene.node(id).unwrap().pos;
        assert!(pos.x.is_finite() && pos.y.is_finite());
    }
}
