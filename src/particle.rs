//! Point masses integrated with damped semi-implicit Euler.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;

/// A point mass.
///
/// Identity lives in the [`ParticleId`](crate::ParticleId) handed out by the
/// owning [`World`](crate::World); two particles are never compared by value.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    /// Accumulated `force / mass` since the last step.
    pub acceleration: Vec2<F>,
    mass: F,
    pub locked: bool,
}

impl<F: Float> Particle<F> {
    /// Create an unlocked particle at rest. Mass must be positive and finite.
    pub fn new(position: Vec2<F>, mass: F) -> Result<Self, PhysicsError> {
        check_mass(mass)?;
        Ok(Particle {
            position,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            mass,
            locked: false,
        })
    }

    /// Unit-mass particle at rest.
    pub fn at(position: Vec2<F>) -> Self {
        Particle {
            position,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            mass: F::one(),
            locked: false,
        }
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn mass(&self) -> F {
        self.mass
    }

    pub fn set_mass(&mut self, mass: F) -> Result<(), PhysicsError> {
        check_mass(mass)?;
        self.mass = mass;
        Ok(())
    }

    /// Accumulate `force / mass`. Locked particles still accumulate; they just
    /// never integrate it.
    pub fn apply_force(&mut self, force: Vec2<F>) {
        self.acceleration = self.acceleration + force.scale(F::one() / self.mass);
    }

    /// Advance one tick.
    ///
    /// Damping is applied first, position integrates the damped velocity, and
    /// only then is this tick's acceleration folded into velocity. The
    /// acceleration therefore moves the particle one tick late.
    pub fn step(&mut self, damping: F) {
        if self.locked {
            return;
        }
        self.velocity = self.velocity.scale(damping);
        self.position = self.position + self.velocity;
        self.velocity = self.velocity + self.acceleration;
        self.acceleration = Vec2::zero();
    }

    pub fn reset_momentum(&mut self) {
        self.velocity = Vec2::zero();
        self.acceleration = Vec2::zero();
    }

    /// Teleport: momentum is discarded, then the position is overwritten.
    pub fn move_to(&mut self, position: Vec2<F>) {
        self.reset_momentum();
        self.position = position;
    }

    /// Lock or unlock. Either way the particle starts from rest.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
        self.reset_momentum();
    }

    pub fn toggle_locked(&mut self) {
        self.set_locked(!self.locked);
    }

    /// Pick test: is `point` within `radius` of the center?
    pub fn contains(&self, point: Vec2<F>, radius: F) -> bool {
        self.position.distance_sq(point) <= radius * radius
    }
}

fn check_mass<F: Float>(mass: F) -> Result<(), PhysicsError> {
    if mass.is_finite() && mass > F::zero() {
        Ok(())
    } else {
        log::warn!("rejected particle mass {}", mass);
        Err(PhysicsError::InvalidMass)
    }
}
