//! Game systems.
//!
//! This module groups all ECS systems that advance the game, handle input,
//! and render.
//!
//! Submodules overview
//! - [`bubbles`] – the fixed-step tick (rise, cull, replenish) and wave generation
//! - [`gamestate`] – check for pending lifecycle transitions; run conditions
//! - [`input`] – read hardware input and window size from Raylib
//! - [`layout`] – deferred first generation once the viewport is known
//! - [`pointer`] – hit-test pointer-down events and pop bubbles
//! - [`render`] – draw bubbles, score and debug overlay using Raylib
//! - [`time`] – update host frame time

pub mod bubbles;
pub mod gamestate;
pub mod input;
pub mod layout;
pub mod pointer;
pub mod render;
pub mod time;
