//! Bubble Pop library.
//!
//! This module exposes the minigame's ECS components, resources, systems, and
//! events, plus the [`game::BubbleGame`] component that wires them together.
//! The binary in `main.rs` hosts it in a raylib window; integration tests
//! drive it headless.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
