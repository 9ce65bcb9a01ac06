//! Interactive 2D mass-spring sandbox.
//!
//! `springy` simulates point masses joined by Hooke's-law springs and turns raw
//! pointer/keyboard input into edits of that network: create and delete
//! particles, drag them around, lock them in place, connect and cut springs.
//! Platform glue (windows, timers, blitting) stays outside; the crate exposes
//! the seams it plugs into.
//!
//! # Features
//!
//! - **Particles & springs**: damped semi-implicit Euler with a one-step
//!   acceleration lag, anti-symmetric Hooke forces
//! - **Stable handles**: generational arena, so removals never leave dangling
//!   references
//! - **Interaction state machine**: click vs. hold discrimination per button,
//!   drag-to-move, rubber-band spring creation
//! - **Single owner**: [`Sandbox`] queues input and applies it on the tick, no
//!   threads or locks
//! - **Renderer-agnostic**: draw through the [`Canvas`] trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! # Example
//! ```
//! use core::time::Duration;
//! use springy::{scenario, DrawList, InputEvent, MouseButton, Sandbox, SandboxConfig, Vec2};
//!
//! let config: SandboxConfig<f32> = SandboxConfig::new();
//! let world = scenario::pendulum(config.world).unwrap();
//! let mut sandbox = Sandbox::new(world, config);
//!
//! // A short left click on empty space creates a particle.
//! let at = Vec2::new(100.0, 100.0);
//! sandbox.push_event(InputEvent::PointerDown { button: MouseButton::Left, position: at, at: Duration::ZERO });
//! sandbox.push_event(InputEvent::PointerUp { button: MouseButton::Left, position: at, at: Duration::from_millis(80) });
//!
//! let mut canvas = DrawList::new();
//! sandbox.tick(Duration::from_millis(90), &mut canvas);
//! assert_eq!(sandbox.world().particle_count(), 3);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod arena;
pub mod particle;
pub mod spring;
pub mod world;
pub mod observer;
pub mod config;
pub mod error;
pub mod input;
pub mod interaction;
pub mod render;
pub mod sandbox;
pub mod scenario;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use arena::{ParticleId, SpringId};
pub use particle::Particle;
pub use spring::Spring;
pub use world::World;
pub use observer::{StepObserver, NoOpStepObserver};
pub use config::{WorldConfig, InteractionConfig, SandboxConfig};
pub use error::PhysicsError;
pub use input::{MouseButton, Key, Command, InputEvent};
pub use interaction::{Controller, ButtonState, Action};
pub use render::{Canvas, Color, Palette, DrawList, DrawCommand, render};
pub use sandbox::{Sandbox, TickOutcome};
