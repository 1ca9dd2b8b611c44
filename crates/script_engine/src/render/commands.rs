//! Draw commands and the per-tick command queue
//!
//! Scripts never touch a canvas directly. During `draw` they call the host
//! [`Primitives`], which the engine backs with a [`DrawQueue`]; the queued
//! commands are presented to the canvas after `draw` returns, in call order.
//! Log messages go straight to the host log and never reach the canvas.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Bounds;

/// RGBA color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl Color {
    /// Opaque white
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    /// Opaque red
    pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);

    /// Create a color from components
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// `[r, g, b, a]` layout expected by 2D rasterizers
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A single drawing instruction issued by a script
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole frame with a color
    Clear(Color),
    /// Fill an axis-aligned rectangle
    Rect(Color, Bounds),
}

/// Drawing primitives the host exposes to scripts
pub trait Primitives {
    /// Fill the whole frame with `color`
    fn clear(&mut self, color: Color);

    /// Fill `bounds` with `color`
    fn rect(&mut self, color: Color, bounds: Bounds);

    /// Write a script message to the host log
    fn log(&mut self, message: &serde_json::Value);
}

/// Collects draw commands for one tick
#[derive(Debug, Default)]
pub struct DrawQueue {
    commands: Vec<DrawCommand>,
}

impl DrawQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands queued so far, in call order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop all queued commands
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Number of queued commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Primitives for DrawQueue {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn rect(&mut self, color: Color, bounds: Bounds) {
        self.commands.push(DrawCommand::Rect(color, bounds));
    }

    fn log(&mut self, message: &serde_json::Value) {
        log::info!("{}", message);
    }
}
