//! Movement direction picked from keyboard input

use script_engine::input::Key;

/// Direction the box is moving in
///
/// Tracks the last recognized key action, not the set of held keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Standing still
    #[default]
    None,
    /// Towards smaller x
    Left,
    /// Towards larger x
    Right,
    /// Towards smaller y (canvas space is y-down)
    Up,
    /// Towards larger y
    Down,
}

impl Direction {
    /// Direction bound to `key`, or `None` for keys that do not steer
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Escape | Key::Space | Key::Enter | Key::Other(_) => None,
        }
    }
}
