//! Error types for world construction and editing.

use core::fmt;

use crate::arena::ParticleId;

/// Errors that can occur while building or editing a world.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// Stiffness must be positive and finite.
    InvalidStiffness,
    /// Rest length must be non-negative and finite.
    InvalidRestLength,
    /// A spring needs two distinct endpoints.
    SelfSpring,
    /// The handle does not refer to a live particle.
    UnknownParticle(ParticleId),
    /// A rope needs at least one segment.
    InsufficientSegments,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidStiffness => write!(f, "stiffness must be positive and finite"),
            PhysicsError::InvalidRestLength => write!(f, "rest length must be non-negative and finite"),
            PhysicsError::SelfSpring => write!(f, "spring endpoints must be distinct particles"),
            PhysicsError::UnknownParticle(id) => write!(f, "{} does not exist", id),
            PhysicsError::InsufficientSegments => write!(f, "rope needs at least 1 segment"),
        }
    }
}

impl core::error::Error for PhysicsError {}
