//! Rendering: draw commands, host primitives and canvas backends

pub mod canvas;
pub mod commands;

pub use canvas::{Canvas, RecordingCanvas, RenderError, WindowSettings};
pub use commands::{Color, DrawCommand, DrawQueue, Primitives};
