//! Configuration types for the world, the interaction controller and the
//! sandbox that ties them together.

use core::time::Duration;

use crate::float::Float;
use crate::render::Palette;
use crate::vec::Vec2;

/// Global physics settings for a [`World`](crate::World).
///
/// # Builder Pattern
/// ```
/// use springy::config::WorldConfig;
/// use springy::vec::Vec2;
///
/// let config: WorldConfig<f32> = WorldConfig::new()
///     .with_gravity(Vec2::new(0.0, 0.5))
///     .with_damping(0.99)
///     .with_gravity_enabled(true);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldConfig<F: Float> {
    /// Force applied to every particle each tick while gravity is enabled.
    /// Default: (0, 0.5), pointing down in screen space.
    pub gravity: Vec2<F>,
    /// Velocity multiplier per tick, in [0, 1]. 1.0 = no damping. Default: 0.99.
    pub damping: F,
    /// Default: true.
    pub gravity_enabled: bool,
}

impl<F: Float> WorldConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        WorldConfig {
            gravity: Vec2::new(F::zero(), F::from_f32(0.5)),
            damping: F::from_f32(0.99),
            gravity_enabled: true,
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping factor, clamped to [0, 1].
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping.clamp(F::zero(), F::one());
        self
    }

    pub fn with_gravity_enabled(mut self, enabled: bool) -> Self {
        self.gravity_enabled = enabled;
        self
    }
}

impl<F: Float> Default for WorldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Tuning for the pointer state machine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InteractionConfig<F: Float> {
    /// A pointer within this distance of a particle's center hits it. Default: 50.
    pub detection_radius: F,
    /// Presses held at least this long are holds, shorter ones are clicks.
    /// Default: 300 ms.
    pub hold_threshold: Duration,
    /// Stiffness of springs created by a right-button hold. Default: 0.01.
    pub default_stiffness: F,
}

impl<F: Float> InteractionConfig<F> {
    pub fn new() -> Self {
        InteractionConfig {
            detection_radius: F::from_f32(50.0),
            hold_threshold: Duration::from_millis(300),
            default_stiffness: F::from_f32(0.01),
        }
    }

    pub fn with_detection_radius(mut self, radius: F) -> Self {
        self.detection_radius = radius.max(F::zero());
        self
    }

    pub fn with_hold_threshold(mut self, threshold: Duration) -> Self {
        self.hold_threshold = threshold;
        self
    }

    pub fn with_default_stiffness(mut self, stiffness: F) -> Self {
        self.default_stiffness = stiffness;
        self
    }
}

impl<F: Float> Default for InteractionConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a [`Sandbox`](crate::Sandbox) needs besides its initial world.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SandboxConfig<F: Float> {
    pub world: WorldConfig<F>,
    pub interaction: InteractionConfig<F>,
    pub palette: Palette<F>,
    /// How often the platform should call `tick`. Default: 10 ms.
    pub tick_interval: Duration,
}

impl<F: Float> SandboxConfig<F> {
    pub fn new() -> Self {
        SandboxConfig {
            world: WorldConfig::new(),
            interaction: InteractionConfig::new(),
            palette: Palette::new(),
            tick_interval: Duration::from_millis(10),
        }
    }

    pub fn with_world(mut self, world: WorldConfig<F>) -> Self {
        self.world = world;
        self
    }

    pub fn with_interaction(mut self, interaction: InteractionConfig<F>) -> Self {
        self.interaction = interaction;
        self
    }

    pub fn with_palette(mut self, palette: Palette<F>) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }
}

impl<F: Float> Default for SandboxConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
