//! Single owner of the world and the interaction state.
//!
//! Platform callbacks only enqueue events; every mutation happens inside
//! [`Sandbox::tick`], one tick at a time.

use alloc::collections::VecDeque;
use core::time::Duration;

use crate::config::SandboxConfig;
use crate::float::Float;
use crate::input::{Command, InputEvent};
use crate::interaction::{Action, Controller};
use crate::render::{render, Canvas, Palette};
use crate::world::World;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// An exit command was processed; the platform should shut down.
    Exit,
}

pub struct Sandbox<F: Float = f32> {
    world: World<F>,
    controller: Controller<F>,
    palette: Palette<F>,
    pending: VecDeque<InputEvent<F>>,
    tick_interval: Duration,
    exit_requested: bool,
}

impl<F: Float> Sandbox<F> {
    pub fn new(world: World<F>, config: SandboxConfig<F>) -> Self {
        Sandbox {
            world,
            controller: Controller::new(config.interaction),
            palette: config.palette,
            pending: VecDeque::new(),
            tick_interval: config.tick_interval,
            exit_requested: false,
        }
    }

    /// Queue an event for the next tick.
    pub fn push_event(&mut self, event: InputEvent<F>) {
        self.pending.push_back(event);
    }

    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Apply queued input, advance held gestures, step the world and draw it.
    pub fn tick<C: Canvas<F>>(&mut self, now: Duration, canvas: &mut C) -> TickOutcome {
        while let Some(event) = self.pending.pop_front() {
            self.dispatch(event);
        }
        if self.exit_requested {
            return TickOutcome::Exit;
        }

        self.controller.poll(now, &mut self.world);
        self.world.step();
        render(&self.world, &self.controller, &self.palette, canvas);
        TickOutcome::Continue
    }

    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::TogglePause => self.world.toggle_pause(),
            Command::ToggleGravity => self.world.toggle_gravity(),
            Command::ResetMomentum => self.world.reset_momentum(),
            Command::Exit => {
                log::info!("exit requested");
                self.exit_requested = true;
            }
        }
    }

    fn dispatch(&mut self, event: InputEvent<F>) {
        match event {
            InputEvent::PointerDown { button, position, at } => {
                self.controller.press(button, position, at, &mut self.world);
            }
            InputEvent::PointerUp { button, position, at } => {
                let action = self.controller.release(button, position, at, &mut self.world);
                if action != Action::None {
                    log::debug!("{:?} release: {:?}", button, action);
                }
            }
            InputEvent::PointerMoved { position } => self.controller.pointer_moved(position),
            InputEvent::Key(key) => {
                if let Some(command) = Command::from_key(key) {
                    self.handle_command(command);
                }
            }
        }
    }

    pub fn world(&self) -> &World<F> { &self.world }
    pub fn world_mut(&mut self) -> &mut World<F> { &mut self.world }
    pub fn controller(&self) -> &Controller<F> { &self.controller }
    pub fn palette(&self) -> &Palette<F> { &self.palette }
    pub fn tick_interval(&self) -> Duration { self.tick_interval }
    pub fn exit_requested(&self) -> bool { self.exit_requested }
}
