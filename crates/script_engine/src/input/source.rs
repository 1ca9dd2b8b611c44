//! Input sources feeding the tick loop
//!
//! The engine pulls one [`Frame`] per tick. Returning `None` ends the session
//! the same way closing the window would.

use std::collections::VecDeque;
use std::path::Path;

use thiserror::Error;

use super::{Frame, InputEvent, Key};

/// Supplies one frame of input per tick
pub trait InputSource {
    /// Next frame, or `None` once the source is exhausted
    fn next_frame(&mut self) -> Option<Frame>;
}

/// Errors loading an input recording
#[derive(Error, Debug)]
pub enum InputError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A recording entry could not be parsed
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line of the failing entry
        line: usize,
        /// Parser message
        message: String,
    },

    /// Unsupported recording format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Pre-recorded input, replayed one frame per tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptedInput {
    frames: VecDeque<Frame>,
}

impl ScriptedInput {
    /// Create a source from a list of frames
    pub fn new(frames: impl IntoIterator<Item = Frame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Parse a JSON-lines recording
    ///
    /// Every non-empty line is one tick: either `null` or an event object.
    pub fn from_json_lines(text: &str) -> Result<Self, InputError> {
        let mut frames = VecDeque::new();
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let frame: Frame = serde_json::from_str(line).map_err(|e| InputError::Parse {
                line: index + 1,
                message: e.to_string(),
            })?;
            frames.push_back(frame);
        }
        Ok(Self { frames })
    }

    /// Parse a RON recording: a list of optional events
    pub fn from_ron(text: &str) -> Result<Self, InputError> {
        let frames: Vec<Frame> = ron::from_str(text).map_err(|e| InputError::Parse {
            line: e.position.line,
            message: e.code.to_string(),
        })?;
        Ok(Self::new(frames))
    }

    /// Load a recording, picking the format from the file extension
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let parse: fn(&str) -> Result<Self, InputError> =
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("jsonl" | "json") => Self::from_json_lines,
                Some("ron") => Self::from_ron,
                _ => return Err(InputError::UnsupportedFormat(path.display().to_string())),
            };

        let contents = std::fs::read_to_string(path)?;
        let input = parse(&contents)?;
        log::debug!("Loaded {} input frames from {}", input.remaining(), path.display());
        Ok(input)
    }

    /// Append a single frame
    pub fn push(&mut self, frame: Frame) {
        self.frames.push_back(frame);
    }

    /// Append `ticks` frames without input
    pub fn idle(mut self, ticks: usize) -> Self {
        self.frames.extend(std::iter::repeat(None).take(ticks));
        self
    }

    /// Append a key press frame
    pub fn press(mut self, key: Key) -> Self {
        self.push(Some(InputEvent::key_press(key)));
        self
    }

    /// Append a key release frame
    pub fn release(mut self, key: Key) -> Self {
        self.push(Some(InputEvent::key_release(key)));
        self
    }

    /// Frames left to replay
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_frame(&mut self) -> Option<Frame> {
        self.frames.pop_front()
    }
}
