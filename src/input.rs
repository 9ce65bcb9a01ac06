//! Raw input as delivered by the platform layer.

use core::time::Duration;

use crate::float::Float;
use crate::vec::Vec2;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub const ALL: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

    pub(crate) fn index(self) -> usize {
        match self {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
        }
    }
}

/// The keys the sandbox reacts to. Everything else arrives as `Other`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    G,
    Shift,
    R,
    Escape,
    Other,
}

/// Global keyboard commands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    TogglePause,
    ToggleGravity,
    ResetMomentum,
    Exit,
}

impl Command {
    pub fn from_key(key: Key) -> Option<Command> {
        match key {
            Key::Space => Some(Command::TogglePause),
            Key::G | Key::Shift => Some(Command::ToggleGravity),
            Key::R => Some(Command::ResetMomentum),
            Key::Escape => Some(Command::Exit),
            Key::Other => None,
        }
    }
}

/// One input event. Pointer positions share the world's coordinate space;
/// `at` is measured from any fixed epoch, as long as `tick` uses the same one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent<F: Float> {
    PointerDown { button: MouseButton, position: Vec2<F>, at: Duration },
    PointerUp { button: MouseButton, position: Vec2<F>, at: Duration },
    PointerMoved { position: Vec2<F> },
    Key(Key),
}
