//! Input event types delivered to scripts
//!
//! Events use the shape `{ "button": { "Keyboard": "Right" }, "state": "Press" }`.
//! Key and state names the engine does not know are kept verbatim instead of
//! failing to parse, so a script can simply ignore them.

pub mod source;

pub use source::{InputError, InputSource, ScriptedInput};

use serde::{Deserialize, Serialize};

/// Input delivered to a script for a single tick, `None` when nothing happened
pub type Frame = Option<InputEvent>;

/// Keyboard keys
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Escape key
    Escape,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Any other key, by name
    Other(String),
}

impl Key {
    /// Look up a key by its name
    pub fn from_name(name: &str) -> Self {
        match name {
            "Left" => Key::Left,
            "Right" => Key::Right,
            "Up" => Key::Up,
            "Down" => Key::Down,
            "Escape" => Key::Escape,
            "Space" => Key::Space,
            "Return" | "Enter" => Key::Enter,
            other => Key::Other(other.to_string()),
        }
    }

    /// Name of the key as it appears in input events
    pub fn name(&self) -> &str {
        match self {
            Key::Left => "Left",
            Key::Right => "Right",
            Key::Up => "Up",
            Key::Down => "Down",
            Key::Escape => "Escape",
            Key::Space => "Space",
            Key::Enter => "Enter",
            Key::Other(name) => name,
        }
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::from_name(&name)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.name().to_string()
    }
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Button that produced an event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    /// Keyboard key
    Keyboard(Key),
    /// Mouse button
    Mouse(MouseButton),
}

/// Edge state reported with a button event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ButtonState {
    /// Button went down
    Press,
    /// Button went up
    Release,
    /// Any other reported state, by name
    Other(String),
}

impl ButtonState {
    /// Name of the state as it appears in input events
    pub fn name(&self) -> &str {
        match self {
            ButtonState::Press => "Press",
            ButtonState::Release => "Release",
            ButtonState::Other(name) => name,
        }
    }
}

impl From<String> for ButtonState {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Press" => ButtonState::Press,
            "Release" => ButtonState::Release,
            _ => ButtonState::Other(name),
        }
    }
}

impl From<ButtonState> for String {
    fn from(state: ButtonState) -> Self {
        state.name().to_string()
    }
}

/// A single button event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    /// Button that changed state
    pub button: Button,
    /// New state of the button
    pub state: ButtonState,
    /// Platform scancode, when the backend reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scancode: Option<i32>,
}

impl InputEvent {
    /// Create an event without a scancode
    pub fn new(button: Button, state: ButtonState) -> Self {
        Self {
            button,
            state,
            scancode: None,
        }
    }

    /// Keyboard press event
    pub fn key_press(key: Key) -> Self {
        Self::new(Button::Keyboard(key), ButtonState::Press)
    }

    /// Keyboard release event
    pub fn key_release(key: Key) -> Self {
        Self::new(Button::Keyboard(key), ButtonState::Release)
    }

    /// Keyboard key of this event, if it came from the keyboard
    pub fn key(&self) -> Option<&Key> {
        match &self.button {
            Button::Keyboard(key) => Some(key),
            Button::Mouse(_) => None,
        }
    }

    /// Whether the button went down
    pub fn is_press(&self) -> bool {
        self.state == ButtonState::Press
    }
}
