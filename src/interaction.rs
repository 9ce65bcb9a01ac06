//! Pointer state machine: turns presses, releases and pointer motion into
//! world edits.
//!
//! Each button is tracked on its own. A press shorter than the hold threshold
//! is a click; a longer one is a hold gesture:
//!
//! | button | click on particle   | click on empty space | hold                      |
//! |--------|---------------------|----------------------|---------------------------|
//! | left   | delete it           | create a particle    | drag the pressed particle |
//! | right  | cut its springs     | nothing              | connect to released-on    |
//! | middle | toggle its lock     | nothing              | nothing                   |
//!
//! Hold behaviour is driven by [`Controller::poll`], which the owner calls once
//! per tick before stepping the world.

use core::mem;
use core::time::Duration;

use crate::arena::{ParticleId, SpringId};
use crate::config::InteractionConfig;
use crate::float::Float;
use crate::input::MouseButton;
use crate::vec::Vec2;
use crate::world::World;

/// What a single button is doing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    /// Down, not yet (or never going to be) a drag or preview.
    Pressed { since: Duration, candidate: Option<ParticleId> },
    /// Left hold on a particle: it follows the pointer and is held in place.
    Dragging { since: Duration, particle: ParticleId, was_locked: bool },
    /// Right hold on a particle: rubber band toward the hovered particle.
    PreviewingSpring { since: Duration, source: ParticleId, target: Option<ParticleId> },
}

impl ButtonState {
    pub fn since(&self) -> Option<Duration> {
        match *self {
            ButtonState::Idle => None,
            ButtonState::Pressed { since, .. }
            | ButtonState::Dragging { since, .. }
            | ButtonState::PreviewingSpring { since, .. } => Some(since),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ButtonState::Idle)
    }
}

/// The outcome of a release.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Created(ParticleId),
    Deleted(ParticleId),
    SpringsCut { particle: ParticleId, count: usize },
    LockToggled { particle: ParticleId, locked: bool },
    Connected { spring: SpringId, a: ParticleId, b: ParticleId },
    DragFinished(ParticleId),
}

pub struct Controller<F: Float> {
    config: InteractionConfig<F>,
    pointer: Vec2<F>,
    buttons: [ButtonState; 3],
}

impl<F: Float> Controller<F> {
    pub fn new(config: InteractionConfig<F>) -> Self {
        Controller {
            config,
            pointer: Vec2::zero(),
            buttons: [ButtonState::Idle; 3],
        }
    }

    pub fn config(&self) -> &InteractionConfig<F> {
        &self.config
    }

    pub fn state(&self, button: MouseButton) -> ButtonState {
        self.buttons[button.index()]
    }

    /// Last known pointer position.
    pub fn pointer(&self) -> Vec2<F> {
        self.pointer
    }

    pub fn pointer_moved(&mut self, position: Vec2<F>) {
        self.pointer = position;
    }

    pub fn press(&mut self, button: MouseButton, position: Vec2<F>, now: Duration, world: &mut World<F>) {
        self.pointer = position;
        // A press without a matching release: let go of whatever was held.
        self.release_hold(button, world);
        let candidate = world.pick(position, self.config.detection_radius);
        self.buttons[button.index()] = ButtonState::Pressed { since: now, candidate };
    }

    /// Advance hold gestures for every button that has been down at least the
    /// hold threshold.
    pub fn poll(&mut self, now: Duration, world: &mut World<F>) {
        for button in MouseButton::ALL {
            let next = self.poll_button(button, now, world);
            self.buttons[button.index()] = next;
        }
    }

    fn poll_button(&self, button: MouseButton, now: Duration, world: &mut World<F>) -> ButtonState {
        let state = self.buttons[button.index()];
        let Some(since) = state.since() else {
            return state;
        };
        if now.saturating_sub(since) < self.config.hold_threshold {
            return state;
        }
        let pointer = self.pointer;
        let radius = self.config.detection_radius;

        match (button, state) {
            (MouseButton::Left, ButtonState::Pressed { candidate: Some(particle), .. }) => {
                match world.particle_mut(particle) {
                    Some(p) => {
                        let was_locked = p.locked;
                        p.set_locked(true);
                        p.move_to(pointer);
                        log::debug!("dragging {}", particle);
                        ButtonState::Dragging { since, particle, was_locked }
                    }
                    None => ButtonState::Pressed { since, candidate: None },
                }
            }
            (MouseButton::Left, ButtonState::Dragging { particle, .. }) => {
                match world.particle_mut(particle) {
                    Some(p) => {
                        p.move_to(pointer);
                        state
                    }
                    None => ButtonState::Pressed { since, candidate: None },
                }
            }
            (MouseButton::Right, ButtonState::Pressed { candidate: Some(source), .. })
            | (MouseButton::Right, ButtonState::PreviewingSpring { source, .. }) => {
                if world.contains(source) {
                    let target = world.pick(pointer, radius);
                    ButtonState::PreviewingSpring { since, source, target }
                } else {
                    ButtonState::Pressed { since, candidate: None }
                }
            }
            _ => state,
        }
    }

    /// Finish whatever the button was doing. Always leaves it idle.
    pub fn release(&mut self, button: MouseButton, position: Vec2<F>, now: Duration, world: &mut World<F>) -> Action {
        self.pointer = position;
        let state = self.buttons[button.index()];
        let dragged = self.release_hold(button, world);
        self.buttons[button.index()] = ButtonState::Idle;

        let Some(since) = state.since() else {
            return Action::None;
        };
        if now.saturating_sub(since) < self.config.hold_threshold {
            return self.click(button, position, world);
        }

        match (button, state) {
            (MouseButton::Right, ButtonState::PreviewingSpring { source, .. })
            | (MouseButton::Right, ButtonState::Pressed { candidate: Some(source), .. }) => {
                self.finish_connect(source, position, world)
            }
            _ => dragged.map_or(Action::None, Action::DragFinished),
        }
    }

    /// Rubber band from the right-hold source particle to the hovered particle,
    /// or to the pointer when nothing is hovered.
    pub fn preview(&self, world: &World<F>) -> Option<(Vec2<F>, Vec2<F>)> {
        let ButtonState::PreviewingSpring { source, target, .. } = self.state(MouseButton::Right) else {
            return None;
        };
        let from = world.particle(source)?.position;
        // The source itself is usually in range right after the hold starts.
        let to = target
            .filter(|&target| target != source)
            .and_then(|target| world.particle(target))
            .map_or(self.pointer, |particle| particle.position);
        Some((from, to))
    }

    /// If the button was dragging, put the particle's lock flag back. Returns
    /// the particle that was being dragged.
    fn release_hold(&mut self, button: MouseButton, world: &mut World<F>) -> Option<ParticleId> {
        let state = mem::replace(&mut self.buttons[button.index()], ButtonState::Idle);
        let ButtonState::Dragging { particle, was_locked, .. } = state else {
            self.buttons[button.index()] = state;
            return None;
        };
        if let Some(p) = world.particle_mut(particle) {
            p.set_locked(was_locked);
        }
        Some(particle)
    }

    fn click(&mut self, button: MouseButton, position: Vec2<F>, world: &mut World<F>) -> Action {
        let hit = world.pick(position, self.config.detection_radius);
        match (button, hit) {
            (MouseButton::Left, Some(particle)) => {
                world.remove_particle(particle);
                Action::Deleted(particle)
            }
            (MouseButton::Left, None) => Action::Created(world.add_particle(position.x, position.y, false)),
            (MouseButton::Right, Some(particle)) => {
                let count = world.remove_springs_touching(particle);
                Action::SpringsCut { particle, count }
            }
            (MouseButton::Middle, Some(particle)) => {
                // A dragged particle is held locked; toggle the flag restored on release.
                if let Some(was_locked) = self.held_lock(particle) {
                    *was_locked = !*was_locked;
                    let locked = *was_locked;
                    log::debug!("{} locked after drag: {}", particle, locked);
                    return Action::LockToggled { particle, locked };
                }
                match world.particle_mut(particle) {
                    Some(p) => {
                        p.toggle_locked();
                        log::debug!("{} locked: {}", particle, p.locked);
                        Action::LockToggled { particle, locked: p.locked }
                    }
                    None => Action::None,
                }
            }
            (MouseButton::Right, None) | (MouseButton::Middle, None) => Action::None,
        }
    }

    /// The lock flag a drag of `particle` will restore, if one is in progress.
    fn held_lock(&mut self, particle: ParticleId) -> Option<&mut bool> {
        self.buttons.iter_mut().find_map(|state| match state {
            ButtonState::Dragging { particle: held, was_locked, .. } if *held == particle => Some(was_locked),
            _ => None,
        })
    }

    fn finish_connect(&mut self, source: ParticleId, position: Vec2<F>, world: &mut World<F>) -> Action {
        let Some(target) = world.pick(position, self.config.detection_radius) else {
            return Action::None;
        };
        if target == source || !world.contains(source) {
            return Action::None;
        }
        match world.connect(source, target, self.config.default_stiffness) {
            Ok(spring) => Action::Connected { spring, a: source, b: target },
            Err(err) => {
                log::warn!("could not connect {} to {}: {}", source, target, err);
                Action::None
            }
        }
    }
}

impl<F: Float> Default for Controller<F> {
    fn default() -> Self {
        Self::new(InteractionConfig::default())
    }
}
