use core::time::Duration;

use springy::{
    scenario, Color, DrawList, InputEvent, Key, MouseButton, Sandbox, SandboxConfig, TickOutcome,
    Vec2,
};
use wasm_bindgen::prelude::*;

fn button(code: u8) -> Option<MouseButton> {
    // MouseEvent.button numbering
    match code {
        0 => Some(MouseButton::Left),
        1 => Some(MouseButton::Middle),
        2 => Some(MouseButton::Right),
        _ => None,
    }
}

fn key(code: &str) -> Key {
    // KeyboardEvent.code values
    match code {
        "Space" => Key::Space,
        "KeyG" => Key::G,
        "ShiftLeft" | "ShiftRight" => Key::Shift,
        "KeyR" => Key::R,
        "Escape" => Key::Escape,
        _ => Key::Other,
    }
}

fn millis(ms: f64) -> Duration {
    Duration::from_secs_f64(ms.max(0.0) / 1000.0)
}

fn push_color(out: &mut Vec<f32>, color: Color) {
    out.extend([color.r, color.g, color.b, color.a].map(f32::from));
}

// ---- Spring Sandbox ----

#[wasm_bindgen]
pub struct SpringSandbox {
    sandbox: Sandbox<f32>,
    frame: DrawList<f32>,
}

#[wasm_bindgen]
impl SpringSandbox {
    /// Starts from the pendulum: a free particle hanging off a locked anchor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SpringSandbox, JsError> {
        let config = SandboxConfig::new();
        let world = scenario::pendulum(config.world)?;
        Ok(SpringSandbox {
            sandbox: Sandbox::new(world, config),
            frame: DrawList::new(),
        })
    }

    /// Suggested `setInterval` period in milliseconds.
    pub fn tick_interval_ms(&self) -> f64 {
        self.sandbox.tick_interval().as_secs_f64() * 1000.0
    }

    /// `now_ms` as from `performance.now()`. Returns false once Escape was pressed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.sandbox.tick(millis(now_ms), &mut self.frame) == TickOutcome::Continue
    }

    pub fn pointer_down(&mut self, code: u8, x: f32, y: f32, now_ms: f64) {
        if let Some(button) = button(code) {
            self.sandbox.push_event(InputEvent::PointerDown { button, position: Vec2::new(x, y), at: millis(now_ms) });
        }
    }

    pub fn pointer_up(&mut self, code: u8, x: f32, y: f32, now_ms: f64) {
        if let Some(button) = button(code) {
            self.sandbox.push_event(InputEvent::PointerUp { button, position: Vec2::new(x, y), at: millis(now_ms) });
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.sandbox.push_event(InputEvent::PointerMoved { position: Vec2::new(x, y) });
    }

    pub fn key_down(&mut self, code: &str) {
        self.sandbox.push_event(InputEvent::Key(key(code)));
    }

    /// Background colour of the last frame as [r, g, b, a] in 0..=255.
    pub fn background(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(4);
        push_color(&mut out, self.sandbox.palette().background);
        out
    }

    /// Lines of the last frame as flat [x1, y1, x2, y2, r, g, b, a, ...].
    pub fn lines(&self) -> Vec<f32> {
        let mut out = Vec::new();
        for (from, to, color) in self.frame.lines() {
            out.extend([from.x, from.y, to.x, to.y]);
            push_color(&mut out, color);
        }
        out
    }

    /// Circles of the last frame as flat [x, y, radius, r, g, b, a, ...].
    pub fn circles(&self) -> Vec<f32> {
        let mut out = Vec::new();
        for (center, radius, color) in self.frame.circles() {
            out.extend([center.x, center.y, radius]);
            push_color(&mut out, color);
        }
        out
    }

    pub fn particle_count(&self) -> usize {
        self.sandbox.world().particle_count()
    }

    pub fn spring_count(&self) -> usize {
        self.sandbox.world().spring_count()
    }
}
