//! # Script Engine
//!
//! A headless host for tick-driven 2D game scripts.
//!
//! ## Features
//!
//! - **Script Lifecycle**: `config` once, then `update` and `draw` every tick
//! - **Draw Primitives**: `clear` and `rect`, queued and presented per tick
//! - **Input Replay**: JSON-lines and RON input recordings
//! - **Configuration**: TOML and RON engine config files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use script_engine::prelude::*;
//!
//! struct Square;
//!
//! impl Script for Square {
//!     fn config(&self) -> ScriptConfig {
//!         ScriptConfig::new(400.0, 200.0)
//!     }
//!
//!     fn update(&mut self, _input: Option<&InputEvent>) {}
//!
//!     fn draw(&self, primitives: &mut dyn Primitives) {
//!         primitives.clear(Color::WHITE);
//!         primitives.rect(Color::RED, Bounds::new(0.0, 0.0, 50.0, 50.0));
//!     }
//! }
//!
//! fn main() -> Result<(), EngineError> {
//!     let mut engine = Engine::new(EngineConfig::default().with_max_ticks(60));
//!     let mut input = ScriptedInput::default().idle(60);
//!     let mut canvas = RecordingCanvas::new();
//!     engine.run(&mut Square, &mut input, &mut canvas)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::cast_precision_loss)]

// Core engine modules
pub mod core;
pub mod config;
pub mod foundation;
pub mod input;
pub mod render;

mod application;
mod engine;

pub use application::{Script, ScriptConfig};
pub use engine::{Engine, EngineError, ExitReason, RunSummary};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Script, ScriptConfig,
        Engine, EngineError, ExitReason, RunSummary,
        foundation::math::{Bounds, Point2, Vec2},
        input::{Button, ButtonState, Frame, InputEvent, InputSource, Key, ScriptedInput},
        render::{Canvas, Color, DrawCommand, Primitives, RecordingCanvas, WindowSettings},
        core::config::{Config, EngineConfig, RunConfig, WindowConfig},
    };
}
