//! Canvas backends
//!
//! A canvas receives the window settings once, then one batch of draw
//! commands per tick. Windowed backends live outside this crate;
//! [`RecordingCanvas`] keeps every frame in memory for headless runs.

use thiserror::Error;

use super::commands::DrawCommand;

/// Settings used to open the window for a script
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    /// Window title
    pub title: String,
    /// Viewport width requested by the script
    pub width: f64,
    /// Viewport height requested by the script
    pub height: f64,
    /// Whether Escape ends the session
    pub exit_on_esc: bool,
}

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// A frame was presented before the canvas was opened
    #[error("Canvas has not been opened")]
    NotOpen,

    /// Backend-specific failure
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Rendering backend driven by the engine
pub trait Canvas {
    /// Open the canvas, called once before the first tick
    fn open(&mut self, settings: &WindowSettings) -> Result<(), RenderError>;

    /// Present one tick's commands
    fn present(&mut self, commands: &[DrawCommand]) -> Result<(), RenderError>;
}

/// Headless canvas that records every presented frame
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    settings: Option<WindowSettings>,
    frames: Vec<Vec<DrawCommand>>,
}

impl RecordingCanvas {
    /// Create an unopened canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings the canvas was opened with
    pub fn settings(&self) -> Option<&WindowSettings> {
        self.settings.as_ref()
    }

    /// All presented frames, oldest first
    pub fn frames(&self) -> &[Vec<DrawCommand>] {
        &self.frames
    }

    /// Most recently presented frame
    pub fn last_frame(&self) -> Option<&[DrawCommand]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl Canvas for RecordingCanvas {
    fn open(&mut self, settings: &WindowSettings) -> Result<(), RenderError> {
        log::info!(
            "Opening recording canvas '{}' ({}x{})",
            settings.title, settings.width, settings.height
        );
        self.settings = Some(settings.clone());
        Ok(())
    }

    fn present(&mut self, commands: &[DrawCommand]) -> Result<(), RenderError> {
        if self.settings.is_none() {
            return Err(RenderError::NotOpen);
        }
        self.frames.push(commands.to_vec());
        Ok(())
    }
}
