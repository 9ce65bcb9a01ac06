//! The particle/spring network and its two-phase step.

use crate::arena::{Arena, ParticleId, SpringId};
use crate::config::WorldConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::spring::Spring;
use crate::vec::Vec2;

/// Owns every particle and spring.
///
/// Every spring's endpoints are live particles of the same world: removing a
/// particle removes the springs attached to it first.
pub struct World<F: Float = f32> {
    particles: Arena<Particle<F>>,
    springs: Arena<Spring<F>>,
    gravity: Vec2<F>,
    damping: F,
    gravity_enabled: bool,
    paused: bool,
}

impl<F: Float> World<F> {
    pub fn new(config: WorldConfig<F>) -> Self {
        World {
            particles: Arena::new(),
            springs: Arena::new(),
            gravity: config.gravity,
            damping: config.damping,
            gravity_enabled: config.gravity_enabled,
            paused: false,
        }
    }

    pub fn step(&mut self) {
        self.step_observed(&mut NoOpStepObserver);
    }

    /// Advance one tick unless paused.
    ///
    /// All spring forces are accumulated before any particle integrates, so
    /// the result does not depend on spring order.
    pub fn step_observed<O: StepObserver>(&mut self, observer: &mut O) {
        if self.paused {
            return;
        }

        let mut skipped = 0;
        for (_, spring) in self.springs.iter() {
            if !spring.step(&mut self.particles) {
                skipped += 1;
            }
        }
        observer.on_springs_applied(self.springs.len() - skipped, skipped);

        let gravity = self.gravity_enabled.then_some(self.gravity);
        let damping = self.damping;
        self.particles.for_each_mut(|_, particle| {
            if let Some(g) = gravity {
                particle.apply_force(g);
            }
            particle.step(damping);
        });
        observer.on_integrate(self.particles.len());

        observer.on_step_complete();
    }

    pub fn add_particle(&mut self, x: F, y: F, locked: bool) -> ParticleId {
        self.insert_particle(Particle::at(Vec2::new(x, y)).with_locked(locked))
    }

    pub fn insert_particle(&mut self, particle: Particle<F>) -> ParticleId {
        let (x, y, locked) = (particle.position.x, particle.position.y, particle.locked);
        let id = ParticleId(self.particles.insert(particle));
        log::debug!("added {} at ({}, {}), locked: {}", id, x, y, locked);
        id
    }

    /// Remove a particle together with every spring attached to it.
    pub fn remove_particle(&mut self, id: ParticleId) -> Option<Particle<F>> {
        if !self.particles.contains(id.key()) {
            return None;
        }
        let cut = self.remove_springs_touching(id);
        let particle = self.particles.remove(id.key());
        log::debug!("removed {} and {} attached springs", id, cut);
        particle
    }

    pub fn add_spring(
        &mut self,
        stiffness: F,
        rest_length: F,
        a: ParticleId,
        b: ParticleId,
    ) -> Result<SpringId, PhysicsError> {
        for end in [a, b] {
            if !self.particles.contains(end.key()) {
                return Err(PhysicsError::UnknownParticle(end));
            }
        }
        let spring = Spring::new(stiffness, rest_length, a, b)?;
        let id = SpringId(self.springs.insert(spring));
        log::debug!("added {} between {} and {} (k = {}, rest = {})", id, a, b, stiffness, rest_length);
        Ok(id)
    }

    /// Spring between `a` and `b` whose rest length is their current
    /// separation, so it starts out exerting no force.
    pub fn connect(&mut self, a: ParticleId, b: ParticleId, stiffness: F) -> Result<SpringId, PhysicsError> {
        let pa = self.particle(a).ok_or(PhysicsError::UnknownParticle(a))?;
        let pb = self.particle(b).ok_or(PhysicsError::UnknownParticle(b))?;
        let rest_length = pa.position.distance(pb.position);
        self.add_spring(stiffness, rest_length, a, b)
    }

    pub fn remove_spring(&mut self, id: SpringId) -> Option<Spring<F>> {
        let spring = self.springs.remove(id.key());
        if spring.is_some() {
            log::debug!("removed {}", id);
        }
        spring
    }

    /// Remove every spring with `particle` as an endpoint. The particle itself
    /// stays. Returns how many springs were removed.
    pub fn remove_springs_touching(&mut self, particle: ParticleId) -> usize {
        let removed = self.springs.retain(|_, spring| !spring.touches(particle));
        if removed > 0 {
            log::debug!("cut {} springs from {}", removed, particle);
        }
        removed
    }

    /// First particle in insertion order within `radius` of `point`.
    ///
    /// This is not a nearest-neighbour search: when several particles are in
    /// range the oldest one wins.
    pub fn pick(&self, point: Vec2<F>, radius: F) -> Option<ParticleId> {
        self.particles()
            .find(|(_, particle)| particle.contains(point, radius))
            .map(|(id, _)| id)
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.paused);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        log::info!("simulation {}", if paused { "paused" } else { "resumed" });
    }

    pub fn toggle_gravity(&mut self) {
        self.set_gravity_enabled(!self.gravity_enabled);
    }

    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
        log::info!("gravity {}", if enabled { "on" } else { "off" });
    }

    pub fn set_gravity(&mut self, gravity: Vec2<F>) {
        self.gravity = gravity;
    }

    /// Zero velocity and acceleration of every particle.
    pub fn reset_momentum(&mut self) {
        self.particles.for_each_mut(|_, particle| particle.reset_momentum());
        log::info!("reset momentum of {} particles", self.particles.len());
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle<F>> {
        self.particles.get(id.key())
    }

    pub fn particle_mut(&mut self, id: ParticleId) -> Option<&mut Particle<F>> {
        self.particles.get_mut(id.key())
    }

    pub fn contains(&self, id: ParticleId) -> bool {
        self.particles.contains(id.key())
    }

    pub fn spring(&self, id: SpringId) -> Option<&Spring<F>> {
        self.springs.get(id.key())
    }

    /// Particles in insertion order.
    pub fn particles(&self) -> impl Iterator<Item = (ParticleId, &Particle<F>)> + '_ {
        self.particles.iter().map(|(key, particle)| (ParticleId(key), particle))
    }

    /// Springs in insertion order.
    pub fn springs(&self) -> impl Iterator<Item = (SpringId, &Spring<F>)> + '_ {
        self.springs.iter().map(|(key, spring)| (SpringId(key), spring))
    }

    /// Current endpoint positions of a spring.
    pub fn spring_endpoints(&self, spring: &Spring<F>) -> Option<(Vec2<F>, Vec2<F>)> {
        let a = self.particle(spring.a())?;
        let b = self.particle(spring.b())?;
        Some((a.position, b.position))
    }

    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
    pub fn is_paused(&self) -> bool { self.paused }
    pub fn gravity_enabled(&self) -> bool { self.gravity_enabled }
    pub fn gravity(&self) -> Vec2<F> { self.gravity }
    pub fn damping(&self) -> F { self.damping }
}

impl<F: Float> Default for World<F> {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}
