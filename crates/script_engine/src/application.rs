//! Script trait and lifecycle

use serde::{Deserialize, Serialize};

use crate::input::InputEvent;
use crate::render::Primitives;

/// Viewport a script asks the host for
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptConfig {
    /// Viewport width
    pub width: f64,
    /// Viewport height
    pub height: f64,
}

impl ScriptConfig {
    /// Create a viewport config
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions are finite and positive
    pub fn is_valid(&self) -> bool {
        [self.width, self.height]
            .iter()
            .all(|side| side.is_finite() && *side > 0.0)
    }
}

/// Script lifecycle trait
/// 
/// Implement this trait to drive a game from the engine. The engine owns the
/// script for the whole session and calls it from a single thread: `config`
/// once, then `update` followed by `draw` once per tick.
pub trait Script {
    /// Viewport the script wants
    /// 
    /// Called once before the first tick.
    fn config(&self) -> ScriptConfig;
    
    /// Advance the script by one tick
    /// 
    /// # Arguments
    /// * `input` - The event delivered this tick, if any
    fn update(&mut self, input: Option<&InputEvent>);
    
    /// Issue this tick's drawing through the host primitives
    /// 
    /// Called after `update`. Must not change script state.
    fn draw(&self, primitives: &mut dyn Primitives);
}
