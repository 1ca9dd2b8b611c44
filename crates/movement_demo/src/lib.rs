//! # Movement Demo
//!
//! A red box steered around a white canvas with the arrow keys, written as a
//! [`script_engine::Script`].

pub mod direction;
pub mod movement;

pub use direction::Direction;
pub use movement::MovementScript;
