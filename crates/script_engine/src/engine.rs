//! Core engine implementation

use std::path::Path;

use crate::{
    application::{Script, ScriptConfig},
    core::config::{Config, ConfigError, EngineConfig},
    foundation::time::TickTimer,
    input::{InputError, InputEvent, InputSource, Key},
    render::{Canvas, DrawQueue, RenderError, WindowSettings},
};
use thiserror::Error;

/// Main engine struct
///
/// The engine drives a [`Script`] through its session: it asks for the
/// viewport once, then runs one update and one draw per tick until the input
/// runs out, Escape is pressed or the tick limit is reached.
pub struct Engine {
    /// Engine configuration
    config: EngineConfig,

    /// Commands issued by the script during the current tick
    queue: DrawQueue,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The input source had no more frames
    InputExhausted,
    /// Escape was pressed with `exit_on_esc` enabled
    EscapePressed,
    /// `run.max_ticks` ticks were run
    TickLimitReached,
}

/// Result of a finished session
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Ticks run (each one update followed by one draw)
    pub ticks: u64,
    /// Draw commands presented over the whole session
    pub commands_drawn: usize,
    /// Why the session ended
    pub exit_reason: ExitReason,
    /// Wall-clock duration of the session
    pub elapsed_secs: f64,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            queue: DrawQueue::new(),
        }
    }

    /// Create an engine from a TOML or RON config file
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let config = EngineConfig::load_from_file(path)?;
        log::info!("Loaded engine config from {}", path.display());
        Ok(Self::new(config))
    }

    /// Replace the tick limit from the loaded configuration
    pub fn set_max_ticks(&mut self, max_ticks: Option<u64>) {
        self.config.run.max_ticks = max_ticks;
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run a session of `script` against `input`, presenting to `canvas`
    pub fn run<S: Script + ?Sized>(
        &mut self,
        script: &mut S,
        input: &mut dyn InputSource,
        canvas: &mut dyn Canvas,
    ) -> Result<RunSummary, EngineError> {
        let viewport = script.config();
        if !viewport.is_valid() {
            return Err(EngineError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let settings = self.window_settings(viewport);
        canvas.open(&settings)?;

        log::info!("Starting tick loop...");
        let mut timer = TickTimer::new();
        let mut commands_drawn = 0;

        let exit_reason = loop {
            if let Some(limit) = self.config.run.max_ticks {
                if timer.tick_count() >= limit {
                    break ExitReason::TickLimitReached;
                }
            }

            let Some(frame) = input.next_frame() else {
                break ExitReason::InputExhausted;
            };

            if settings.exit_on_esc && frame.as_ref().is_some_and(is_escape_press) {
                log::info!("Escape pressed, ending session");
                break ExitReason::EscapePressed;
            }

            script.update(frame.as_ref());

            self.queue.clear_commands();
            script.draw(&mut self.queue);
            canvas.present(self.queue.commands())?;
            commands_drawn += self.queue.len();

            timer.tick();
            log::trace!(
                "Tick {} drew {} commands in {:?}",
                timer.tick_count(),
                self.queue.len(),
                timer.last_delta()
            );
        };

        let summary = RunSummary {
            ticks: timer.tick_count(),
            commands_drawn,
            exit_reason,
            elapsed_secs: timer.elapsed_secs(),
        };
        log::info!(
            "Session ended after {} ticks ({:?}, {:.1} ticks/s)",
            summary.ticks,
            summary.exit_reason,
            timer.ticks_per_second()
        );
        Ok(summary)
    }

    fn window_settings(&self, viewport: ScriptConfig) -> WindowSettings {
        WindowSettings {
            title: self.config.window.title.clone(),
            width: viewport.width,
            height: viewport.height,
            exit_on_esc: self.config.window.exit_on_esc,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn is_escape_press(event: &InputEvent) -> bool {
    event.is_press() && event.key() == Some(&Key::Escape)
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input recording error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Rendering error
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    /// The script asked for an unusable viewport
    #[error("Invalid viewport {width}x{height}")]
    InvalidViewport {
        /// Requested width
        width: f64,
        /// Requested height
        height: f64,
    },
}
