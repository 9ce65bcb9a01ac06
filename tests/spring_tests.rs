use springy::{PhysicsError, Spring, Vec2, World, WorldConfig};

fn weightless() -> World<f32> {
    World::new(WorldConfig::new().with_gravity_enabled(false))
}

#[test]
fn forces_are_equal_and_opposite() {
    let mut world = weightless();
    let a = world.add_particle(10.0, 20.0, false);
    let b = world.add_particle(-35.0, 70.0, false);
    world.add_spring(0.3, 12.0, a, b).unwrap();

    world.step();

    // Unit masses, started at rest: the velocity after one step is exactly
    // the force applied.
    let va = world.particle(a).unwrap().velocity;
    let vb = world.particle(b).unwrap().velocity;
    assert!((va.x + vb.x).abs() < 1e-5, "x: {} vs {}", va.x, vb.x);
    assert!((va.y + vb.y).abs() < 1e-5, "y: {} vs {}", va.y, vb.y);
    assert!(va.length() > 0.0);
}

#[test]
fn force_points_toward_rest_length() {
    let mut world = weightless();
    let a = world.add_particle(0.0, 0.0, false);
    let b = world.add_particle(100.0, 0.0, false);
    let spring = Spring::<f32>::new(0.5, 40.0, a, b).unwrap();

    // Stretched: A is pulled toward B.
    let f = spring.force(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)).unwrap();
    assert!((f.x - 30.0).abs() < 1e-5, "f = {:?}", f);
    assert!(f.y.abs() < 1e-6);

    // Compressed: A is pushed away from B.
    let f = spring.force(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)).unwrap();
    assert!((f.x + 15.0).abs() < 1e-5, "f = {:?}", f);
}

#[test]
fn spring_at_rest_length_applies_nothing() {
    let mut world = weightless();
    let a = world.add_particle(0.0, 0.0, false);
    let b = world.add_particle(3.0, 4.0, false);
    world.add_spring(10.0, 5.0, a, b).unwrap();

    world.step();

    assert_eq!(world.particle(a).unwrap().velocity, Vec2::zero());
    assert_eq!(world.particle(b).unwrap().velocity, Vec2::zero());
}

#[test]
fn coincident_endpoints_are_skipped_not_nan() {
    let mut world = weightless();
    let a = world.add_particle(50.0, 50.0, false);
    let b = world.add_particle(50.0, 50.0, false);
    world.add_spring(1.0, 20.0, a, b).unwrap();

    for _ in 0..10 {
        world.step();
    }

    for id in [a, b] {
        let p = world.particle(id).unwrap();
        assert!(p.position.is_finite() && p.velocity.is_finite());
        assert_eq!(p.position, Vec2::new(50.0, 50.0));
    }
}

#[test]
fn rejects_invalid_springs() {
    let mut world = weightless();
    let a = world.add_particle(0.0, 0.0, false);
    let b = world.add_particle(1.0, 0.0, false);

    assert_eq!(world.add_spring(1.0, 1.0, a, a).unwrap_err(), PhysicsError::SelfSpring);
    assert_eq!(world.add_spring(0.0, 1.0, a, b).unwrap_err(), PhysicsError::InvalidStiffness);
    assert_eq!(world.add_spring(1.0, -1.0, a, b).unwrap_err(), PhysicsError::InvalidRestLength);

    world.remove_particle(b);
    assert_eq!(world.add_spring(1.0, 1.0, a, b).unwrap_err(), PhysicsError::UnknownParticle(b));
    assert_eq!(world.spring_count(), 0);
}

#[test]
fn other_endpoint() {
    let mut world = weightless();
    let a = world.add_particle(0.0, 0.0, false);
    let b = world.add_particle(1.0, 0.0, false);
    let c = world.add_particle(2.0, 0.0, false);
    let spring = Spring::<f32>::new(1.0, 1.0, a, b).unwrap();

    assert_eq!(spring.other(a), Some(b));
    assert_eq!(spring.other(b), Some(a));
    assert_eq!(spring.other(c), None);
    assert!(spring.touches(a) && !spring.touches(c));
}
