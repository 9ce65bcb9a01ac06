//! Prebuilt starting worlds.

use crate::config::WorldConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;
use crate::world::World;

/// A free particle hanging 350 units below a locked anchor on a spring with
/// rest length 200, so it starts out being pulled up.
///
/// The free particle is inserted first, the anchor second.
pub fn pendulum<F: Float>(config: WorldConfig<F>) -> Result<World<F>, PhysicsError> {
    let mut world = World::new(config);
    let bob = world.add_particle(F::from_f32(400.0), F::from_f32(400.0), false);
    let anchor = world.add_particle(F::from_f32(400.0), F::from_f32(50.0), true);
    world.add_spring(F::from_f32(0.01), F::from_f32(200.0), bob, anchor)?;
    Ok(world)
}

/// A rope of `segments` springs between `start` and `end`, each at rest. The
/// first particle is locked.
pub fn rope<F: Float>(
    config: WorldConfig<F>,
    start: Vec2<F>,
    end: Vec2<F>,
    segments: usize,
    stiffness: F,
) -> Result<World<F>, PhysicsError> {
    if segments == 0 {
        return Err(PhysicsError::InsufficientSegments);
    }
    let mut world = World::new(config);
    let step = (end - start).scale(F::one() / F::from_f32(segments as f32));

    let mut previous = world.add_particle(start.x, start.y, true);
    for i in 1..=segments {
        let pos = start + step.scale(F::from_f32(i as f32));
        let next = world.add_particle(pos.x, pos.y, false);
        world.connect(previous, next, stiffness)?;
        previous = next;
    }
    Ok(world)
}
