//! Drawing the world through a renderer-agnostic [`Canvas`].

use alloc::vec::Vec;

use crate::float::Float;
use crate::interaction::Controller;
use crate::vec::Vec2;
use crate::world::World;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(230, 60, 60);
    pub const CYAN: Color = Color::rgb(80, 200, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

/// A surface that can draw the two primitives the sandbox needs.
pub trait Canvas<F: Float> {
    /// Called once per frame before anything is drawn.
    fn clear(&mut self, _color: Color) {}

    fn draw_line(&mut self, from: Vec2<F>, to: Vec2<F>, color: Color);

    fn draw_filled_circle(&mut self, center: Vec2<F>, radius: F, color: Color);
}

/// Colours and sizes used by [`render`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette<F: Float> {
    pub background: Color,
    pub spring: Color,
    pub particle: Color,
    pub locked_particle: Color,
    pub preview: Color,
    pub particle_radius: F,
}

impl<F: Float> Palette<F> {
    pub fn new() -> Self {
        Palette {
            background: Color::BLACK,
            spring: Color::WHITE,
            particle: Color::WHITE,
            locked_particle: Color::RED,
            preview: Color::CYAN,
            particle_radius: F::from_f32(12.5),
        }
    }
}

impl<F: Float> Default for Palette<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw one frame: springs, then the spring preview, then particles on top.
///
/// Only the world's own collections are read, so whatever was removed before
/// this call simply is not drawn.
pub fn render<F: Float, C: Canvas<F>>(
    world: &World<F>,
    controller: &Controller<F>,
    palette: &Palette<F>,
    canvas: &mut C,
) {
    canvas.clear(palette.background);

    for (_, spring) in world.springs() {
        if let Some((a, b)) = world.spring_endpoints(spring) {
            canvas.draw_line(a, b, palette.spring);
        }
    }

    if let Some((from, to)) = controller.preview(world) {
        canvas.draw_line(from, to, palette.preview);
    }

    for (_, particle) in world.particles() {
        let color = if particle.locked { palette.locked_particle } else { palette.particle };
        canvas.draw_filled_circle(particle.position, palette.particle_radius, color);
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCommand<F: Float> {
    Clear(Color),
    Line { from: Vec2<F>, to: Vec2<F>, color: Color },
    Circle { center: Vec2<F>, radius: F, color: Color },
}

/// A canvas that records draw calls, for headless use and for handing a
/// frame to a foreign renderer in one batch.
#[derive(Clone, Debug, Default)]
pub struct DrawList<F: Float> {
    pub commands: Vec<DrawCommand<F>>,
}

impl<F: Float> DrawList<F> {
    pub fn new() -> Self {
        DrawList { commands: Vec::new() }
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>, Color)> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            DrawCommand::Line { from, to, color } => Some((from, to, color)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2<F>, F, Color)> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            DrawCommand::Circle { center, radius, color } => Some((center, radius, color)),
            _ => None,
        })
    }
}

impl<F: Float> Canvas<F> for DrawList<F> {
    /// Starts a new frame: previously recorded commands are dropped.
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_line(&mut self, from: Vec2<F>, to: Vec2<F>, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn draw_filled_circle(&mut self, center: Vec2<F>, radius: F, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }
}
