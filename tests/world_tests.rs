use springy::{scenario, StepObserver, Vec2, World, WorldConfig};

#[test]
fn pendulum_first_step_matches_hand_computation() {
    let mut world: World<f32> = scenario::pendulum(WorldConfig::new()).unwrap();
    let ids: Vec<_> = world.particles().map(|(id, _)| id).collect();
    let (bob, anchor) = (ids[0], ids[1]);

    world.step();

    // Separation 350 vs rest 200: spring pulls up with 0.01 * 150 = 1.5,
    // gravity pulls down with 0.5.
    let b = world.particle(bob).unwrap();
    assert_eq!(b.position, Vec2::new(400.0, 400.0), "acceleration lags one tick");
    assert!(b.velocity.x.abs() < 1e-6);
    assert!((b.velocity.y + 1.0).abs() < 1e-5, "vy = {}", b.velocity.y);

    world.step();
    let b = world.particle(bob).unwrap();
    assert!((b.position.y - 399.01).abs() < 1e-3, "y = {}", b.position.y);
    assert!((b.velocity.y + 1.99).abs() < 1e-3, "vy = {}", b.velocity.y);

    assert_eq!(world.particle(anchor).unwrap().position, Vec2::new(400.0, 50.0));
}

#[test]
fn gravity_toggle_and_pause() {
    let mut world: World<f32> = World::default();
    let p = world.add_particle(0.0, 0.0, false);

    world.toggle_pause();
    assert!(world.is_paused());
    for _ in 0..10 {
        world.step();
    }
    assert_eq!(world.particle(p).unwrap().velocity, Vec2::zero());

    world.toggle_pause();
    world.toggle_gravity();
    assert!(!world.gravity_enabled());
    world.step();
    assert_eq!(world.particle(p).unwrap().velocity, Vec2::zero());

    world.toggle_gravity();
    world.step();
    assert!((world.particle(p).unwrap().velocity.y - 0.5).abs() < 1e-6);
}

#[test]
fn reset_momentum_stops_everything() {
    let mut world: World<f32> = World::default();
    let a = world.add_particle(0.0, 0.0, false);
    let b = world.add_particle(100.0, 0.0, false);
    world.add_spring(0.1, 10.0, a, b).unwrap();
    for _ in 0..20 {
        world.step();
    }
    world.reset_momentum();
    world.set_gravity_enabled(false);
    world.set_paused(false);

    // Springs still pull, but nothing moves on the very next step.
    let before: Vec<_> = world.particles().map(|(_, p)| p.position).collect();
    world.step();
    let after: Vec<_> = world.particles().map(|(_, p)| p.position).collect();
    assert_eq!(before, after);
}

#[test]
fn removing_particle_cascades_to_springs() {
    let mut world: World<f32> = World::default();
    let hub = world.add_particle(0.0, 0.0, false);
    let spokes: Vec<_> = (1..=4)
        .map(|i| world.add_particle(100.0 * i as f32, 0.0, false))
        .collect();
    for &spoke in &spokes {
        world.connect(hub, spoke, 0.01).unwrap();
    }
    world.connect(spokes[0], spokes[1], 0.01).unwrap();

    assert!(world.remove_particle(hub).is_some());
    assert!(world.remove_particle(hub).is_none());

    assert_eq!(world.spring_count(), 1);
    for (_, spring) in world.springs() {
        assert!(world.contains(spring.a()) && world.contains(spring.b()));
    }
}

#[test]
fn remove_springs_touching_keeps_particle() {
    let mut world: World<f32> = World::default();
    let a = world.add_particle(0.0, 0.0, false);
    let b = world.add_particle(60.0, 0.0, false);
    let c = world.add_particle(120.0, 0.0, false);
    world.connect(a, b, 0.01).unwrap();
    world.connect(b, c, 0.01).unwrap();
    let ac = world.connect(a, c, 0.01).unwrap();

    assert_eq!(world.remove_springs_touching(b), 2);
    assert!(world.contains(b));
    assert_eq!(world.spring_count(), 1);
    assert!(world.spring(ac).is_some());
}

#[test]
fn connect_starts_at_rest() {
    let mut world: World<f32> = World::default();
    let a = world.add_particle(0.0, 0.0, false);
    let b = world.add_particle(30.0, 40.0, false);
    let s = world.connect(a, b, 0.2).unwrap();
    let spring = world.spring(s).unwrap();
    assert!((spring.rest_length() - 50.0).abs() < 1e-5);
    assert_eq!(spring.stiffness(), 0.2);
}

#[test]
fn pick_prefers_insertion_order_over_distance() {
    let mut world: World<f32> = World::default();
    let far = world.add_particle(0.0, 0.0, false);
    let near = world.add_particle(40.0, 0.0, false);

    assert_eq!(world.pick(Vec2::new(39.0, 0.0), 50.0), Some(far));
    assert_eq!(world.pick(Vec2::new(60.0, 0.0), 50.0), Some(near));
    assert_eq!(world.pick(Vec2::new(500.0, 500.0), 50.0), None);
}

#[test]
fn stale_handles_stay_dead_after_slot_reuse() {
    let mut world: World<f32> = World::default();
    let old = world.add_particle(0.0, 0.0, false);
    world.remove_particle(old);
    let new = world.add_particle(10.0, 10.0, false);

    assert_ne!(old, new);
    assert!(world.particle(old).is_none());
    assert!(world.particle(new).is_some());
}

#[test]
fn rope_hangs_and_keeps_its_anchor() {
    let config = WorldConfig::new();
    let mut world: World<f32> =
        scenario::rope(config, Vec2::new(100.0, 100.0), Vec2::new(300.0, 100.0), 8, 0.002).unwrap();
    assert_eq!(world.particle_count(), 9);
    assert_eq!(world.spring_count(), 8);

    for _ in 0..200 {
        world.step();
    }

    let positions: Vec<_> = world.particles().map(|(_, p)| p.position).collect();
    assert_eq!(positions[0], Vec2::new(100.0, 100.0));
    assert!(positions[8].y > 100.0, "free end should sag, y = {}", positions[8].y);
    assert!(positions.iter().all(|p| p.is_finite()));
}

#[test]
fn rope_needs_segments() {
    let result = scenario::rope::<f32>(WorldConfig::new(), Vec2::zero(), Vec2::new(1.0, 0.0), 0, 1.0);
    assert!(result.is_err());
}

#[derive(Default)]
struct Recorder {
    applied: usize,
    skipped: usize,
    integrated: usize,
    completed: usize,
}

impl StepObserver for Recorder {
    fn on_springs_applied(&mut self, applied: usize, skipped: usize) {
        self.applied += applied;
        self.skipped += skipped;
    }
    fn on_integrate(&mut self, particles: usize) {
        self.integrated += particles;
    }
    fn on_step_complete(&mut self) {
        self.completed += 1;
    }
}

#[test]
fn observer_sees_each_phase() {
    let mut world: World<f32> = World::default();
    let a = world.add_particle(0.0, 0.0, false);
    let b = world.add_particle(10.0, 0.0, false);
    let c = world.add_particle(10.0, 0.0, false);
    world.add_spring(1.0, 5.0, a, b).unwrap();
    world.add_spring(1.0, 5.0, b, c).unwrap(); // coincident

    let mut recorder = Recorder::default();
    world.step_observed(&mut recorder);
    world.set_paused(true);
    world.step_observed(&mut recorder);

    assert_eq!(recorder.applied, 1);
    assert_eq!(recorder.skipped, 1);
    assert_eq!(recorder.integrated, 3);
    assert_eq!(recorder.completed, 1);
}

#[test]
fn spring_order_does_not_change_the_result() {
    let corners = [(0.0, 0.0), (80.0, 10.0), (30.0, 70.0)];
    let pairs = [(0, 1), (1, 2), (2, 0)];

    let build = |reversed: bool| {
        let mut world: World<f32> = World::default();
        let ids: Vec<_> = corners
            .iter()
            .map(|&(x, y)| world.add_particle(x, y, false))
            .collect();
        let mut order = pairs.to_vec();
        if reversed {
            order.reverse();
        }
        // Rest lengths differ from the starting edges, so every spring pulls.
        for (i, j) in order {
            world.add_spring(0.003, 50.0, ids[i], ids[j]).unwrap();
        }
        for _ in 0..50 {
            world.step();
        }
        world.particles().map(|(_, p)| p.position).collect::<Vec<_>>()
    };

    let forward = build(false);
    let backward = build(true);
    assert!(forward.iter().all(|p| p.is_finite()));
    assert_eq!(forward, backward);
    assert_ne!(forward[0], Vec2::new(0.0, 0.0));
}
