//! Hooke's-law springs between two particles.

use crate::arena::{Arena, ParticleId};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// Endpoints closer than this have no defined spring direction.
const DEGENERATE_EPSILON: f32 = 1e-10;

/// An elastic link pulling two particles toward `rest_length` separation.
#[derive(Clone, Debug)]
pub struct Spring<F: Float> {
    stiffness: F,
    rest_length: F,
    a: ParticleId,
    b: ParticleId,
}

impl<F: Float> Spring<F> {
    pub fn new(stiffness: F, rest_length: F, a: ParticleId, b: ParticleId) -> Result<Self, PhysicsError> {
        if a == b {
            return Err(PhysicsError::SelfSpring);
        }
        if !(stiffness.is_finite() && stiffness > F::zero()) {
            return Err(PhysicsError::InvalidStiffness);
        }
        if !(rest_length.is_finite() && rest_length >= F::zero()) {
            return Err(PhysicsError::InvalidRestLength);
        }
        Ok(Spring { stiffness, rest_length, a, b })
    }

    pub fn stiffness(&self) -> F { self.stiffness }
    pub fn rest_length(&self) -> F { self.rest_length }
    pub fn a(&self) -> ParticleId { self.a }
    pub fn b(&self) -> ParticleId { self.b }

    pub fn touches(&self, particle: ParticleId) -> bool {
        self.a == particle || self.b == particle
    }

    /// The endpoint opposite `particle`, if `particle` is an endpoint.
    pub fn other(&self, particle: ParticleId) -> Option<ParticleId> {
        if particle == self.a {
            Some(self.b)
        } else if particle == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// Force on endpoint A for the given endpoint positions; B receives the
    /// negation. `None` when the endpoints coincide.
    pub fn force(&self, pos_a: Vec2<F>, pos_b: Vec2<F>) -> Option<Vec2<F>> {
        let displacement = pos_b - pos_a;
        let length = displacement.length();
        if length.is_near_zero(F::from_f32(DEGENERATE_EPSILON)) {
            return None;
        }
        let stretch = length - self.rest_length;
        Some(displacement.scale(self.stiffness * stretch / length))
    }

    /// Accumulate this spring's force on both endpoints. Only reads positions,
    /// so the order springs are stepped in does not matter within a tick.
    ///
    /// Returns false when no force was applied (coincident or missing
    /// endpoints).
    pub fn step(&self, particles: &mut Arena<Particle<F>>) -> bool {
        let (Some(pa), Some(pb)) = (particles.get(self.a.key()), particles.get(self.b.key())) else {
            return false;
        };
        let Some(force) = self.force(pa.position, pb.position) else {
            log::trace!("skipping degenerate spring between {} and {}", self.a, self.b);
            return false;
        };
        if let Some(pa) = particles.get_mut(self.a.key()) {
            pa.apply_force(force);
        }
        if let Some(pb) = particles.get_mut(self.b.key()) {
            pb.apply_force(-force);
        }
        true
    }
}
