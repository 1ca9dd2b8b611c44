//! Keyboard-driven box movement
//!
//! A 50x50 red box on a 400x200 white canvas. Arrow key presses pick the
//! direction, any non-press of an arrow key stops it, and the box moves one
//! step per tick until it reaches the edge of the canvas.

use script_engine::foundation::math::{Bounds, Point2, Vec2};
use script_engine::input::InputEvent;
use script_engine::render::{Color, Primitives};
use script_engine::{Script, ScriptConfig};

use crate::direction::Direction;

/// Canvas width requested from the host
pub const VIEWPORT_WIDTH: f64 = 400.0;

/// Canvas height requested from the host
pub const VIEWPORT_HEIGHT: f64 = 200.0;

/// Side length of the drawn box
pub const BOX_SIZE: f64 = 50.0;

/// Distance moved per tick
pub const SPEED: f64 = 1.0;

/// Largest x the box may move to
pub const MAX_X: f64 = VIEWPORT_WIDTH - BOX_SIZE;

/// Largest y the box may move to
pub const MAX_Y: f64 = VIEWPORT_HEIGHT - BOX_SIZE;

/// Session state of the movement script
#[derive(Debug, Clone, PartialEq)]
pub struct MovementScript {
    position: Point2,
    speed: f64,
    direction: Direction,
}

impl MovementScript {
    /// Box at the origin, standing still
    pub fn new() -> Self {
        Self {
            position: Point2::origin(),
            speed: SPEED,
            direction: Direction::None,
        }
    }

    /// Top-left corner of the box
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// Current direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Distance moved per tick
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Canvas area covered by the box
    pub fn bounds(&self) -> Bounds {
        Bounds::from_origin_size(self.position, Vec2::new(BOX_SIZE, BOX_SIZE))
    }

    fn steer(&mut self, event: &InputEvent) {
        let Some(direction) = event.key().and_then(Direction::from_key) else {
            return;
        };

        let next = if event.is_press() { direction } else { Direction::None };
        if next != self.direction {
            log::debug!("Direction {:?} -> {:?}", self.direction, next);
        }
        self.direction = next;
    }

    // Movement is refused at the edge rather than clamped, and the direction
    // is kept so the box stays pinned until input changes it.
    fn step(&mut self) {
        let position = &mut self.position;
        match self.direction {
            Direction::Right if position.x < MAX_X => position.x += self.speed,
            Direction::Left if position.x > 0.0 => position.x -= self.speed,
            Direction::Up if position.y > 0.0 => position.y -= self.speed,
            Direction::Down if position.y < MAX_Y => position.y += self.speed,
            _ => {}
        }
    }
}

impl Default for MovementScript {
    fn default() -> Self {
        Self::new()
    }
}

impl Script for MovementScript {
    fn config(&self) -> ScriptConfig {
        ScriptConfig::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
    }

    fn update(&mut self, input: Option<&InputEvent>) {
        if let Some(event) = input {
            self.steer(event);
        }
        self.step();
    }

    fn draw(&self, primitives: &mut dyn Primitives) {
        primitives.clear(Color::WHITE);
        primitives.rect(Color::RED, self.bounds());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use script_engine::input::{Button, ButtonState, Key, MouseButton};
    use script_engine::render::{DrawCommand, DrawQueue};

    fn press(key: Key) -> InputEvent {
        InputEvent::key_press(key)
    }

    fn release(key: Key) -> InputEvent {
        InputEvent::key_release(key)
    }

    fn tick(script: &mut MovementScript, times: usize) {
        for _ in 0..times {
            script.update(None);
        }
    }

    #[test]
    fn test_config_is_fixed() {
        let mut script = MovementScript::new();
        assert_eq!(script.config(), ScriptConfig::new(400.0, 200.0));

        script.update(Some(&press(Key::Down)));
        tick(&mut script, 10);
        assert_eq!(script.config(), ScriptConfig::new(400.0, 200.0));
        assert_eq!(script.config(), script.config());
    }

    #[test]
    fn test_initial_state() {
        let script = MovementScript::default();
        assert_eq!(script.position(), Point2::new(0.0, 0.0));
        assert_eq!(script.direction(), Direction::None);
        assert_relative_eq!(script.speed(), 1.0);
    }

    #[test]
    fn test_press_moves_in_same_tick() {
        let mut script = MovementScript::new();
        script.update(Some(&press(Key::Right)));
        assert_eq!(script.direction(), Direction::Right);
        assert_relative_eq!(script.position().x, 1.0);
        assert_relative_eq!(script.position().y, 0.0);
    }

    #[test]
    fn test_right_stops_at_edge() {
        let mut script = MovementScript::new();
        script.update(Some(&press(Key::Right)));
        tick(&mut script, 399);

        assert_eq!(script.position().x, 350.0);
        assert_eq!(script.direction(), Direction::Right);

        tick(&mut script, 50);
        assert_eq!(script.position().x, 350.0);
    }

    #[test]
    fn test_down_stops_at_edge() {
        let mut script = MovementScript::new();
        script.update(Some(&press(Key::Down)));
        tick(&mut script, 150);
        assert_eq!(script.position().y, 150.0);

        tick(&mut script, 20);
        assert_eq!(script.position().y, 150.0);
        assert_eq!(script.direction(), Direction::Down);
    }

    #[test]
    fn test_left_and_up_blocked_at_origin() {
        let mut script = MovementScript::new();
        script.update(Some(&press(Key::Left)));
        assert_eq!(script.position(), Point2::origin());
        assert_eq!(script.direction(), Direction::Left);

        script.update(Some(&press(Key::Up)));
        tick(&mut script, 5);
        assert_eq!(script.position(), Point2::origin());
        assert_eq!(script.direction(), Direction::Up);
    }

    #[test]
    fn test_release_before_update_leaves_position() {
        let mut script = MovementScript::new();
        script.update(Some(&press(Key::Down)));
        tick(&mut script, 9);
        let before = script.position();

        // Press then release delivered before any further movement tick
        script.steer(&press(Key::Right));
        script.update(Some(&release(Key::Right)));

        assert_eq!(script.direction(), Direction::None);
        assert_eq!(script.position(), before);
    }

    #[test]
    fn test_release_of_other_arrow_still_stops() {
        let mut script = MovementScript::new();
        script.update(Some(&press(Key::Right)));
        script.update(Some(&release(Key::Left)));
        assert_eq!(script.direction(), Direction::None);

        let x = script.position().x;
        tick(&mut script, 3);
        assert_eq!(script.position().x, x);
    }

    #[test]
    fn test_second_press_overrides() {
        let mut script = MovementScript::new();
        script.update(Some(&press(Key::Right)));
        script.update(Some(&press(Key::Down)));

        assert_eq!(script.direction(), Direction::Down);
        assert_eq!(script.position(), Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_unknown_state_counts_as_release() {
        let mut script = MovementScript::new();
        script.update(Some(&press(Key::Up)));
        let event = InputEvent::new(
            Button::Keyboard(Key::Up),
            ButtonState::Other("Repeat".to_string()),
        );
        script.update(Some(&event));
        assert_eq!(script.direction(), Direction::None);
    }

    #[test]
    fn test_unrecognized_key_is_ignored() {
        let mut script = MovementScript::new();
        script.update(Some(&press(Key::Right)));
        tick(&mut script, 4);
        let expected = script.position();

        let jump = press(Key::Other("Jump".to_string()));
        script.steer(&jump);
        assert_eq!(script.direction(), Direction::Right);
        assert_eq!(script.position(), expected);

        script.update(Some(&release(Key::Space)));
        assert_eq!(script.direction(), Direction::Right);
        assert_eq!(script.position().x, expected.x + 1.0);
    }

    #[test]
    fn test_unrecognized_key_from_idle() {
        let mut script = MovementScript::new();
        script.update(Some(&press(Key::Other("Jump".to_string()))));
        assert_eq!(script.direction(), Direction::None);
        assert_eq!(script.position(), Point2::origin());
    }

    #[test]
    fn test_mouse_buttons_are_ignored() {
        let mut script = MovementScript::new();
        script.update(Some(&press(Key::Down)));
        let click = InputEvent::new(Button::Mouse(MouseButton::Left), ButtonState::Release);
        script.update(Some(&click));
        assert_eq!(script.direction(), Direction::Down);
        assert_eq!(script.position().y, 2.0);
    }

    #[test]
    fn test_draw_clears_then_draws_box() {
        let mut script = MovementScript::new();
        script.update(Some(&press(Key::Right)));
        tick(&mut script, 99);
        script.update(Some(&press(Key::Down)));
        tick(&mut script, 49);
        assert_eq!(script.position(), Point2::new(100.0, 50.0));

        let before = script.clone();
        let mut queue = DrawQueue::new();
        script.draw(&mut queue);

        assert_eq!(
            queue.commands(),
            &[
                DrawCommand::Clear(Color::rgba(1.0, 1.0, 1.0, 1.0)),
                DrawCommand::Rect(
                    Color::rgba(1.0, 0.0, 0.0, 1.0),
                    Bounds::new(100.0, 50.0, 50.0, 50.0)
                ),
            ]
        );
        assert_eq!(script, before);
    }

    #[test]
    fn test_position_stays_in_bounds_for_random_input() {
        let keys = [Key::Left, Key::Right, Key::Up, Key::Down, Key::Space];
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..20 {
            let mut script = MovementScript::new();
            for _ in 0..2_000 {
                let input = match rng.gen_range(0..4) {
                    0 => Some(press(keys[rng.gen_range(0..keys.len())].clone())),
                    1 => Some(release(keys[rng.gen_range(0..keys.len())].clone())),
                    _ => None,
                };
                script.update(input.as_ref());

                let position = script.position();
                assert!((0.0..=MAX_X).contains(&position.x), "x out of range: {}", position.x);
                assert!((0.0..=MAX_Y).contains(&position.y), "y out of range: {}", position.y);
            }
        }
    }
}
