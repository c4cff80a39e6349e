//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – INI-backed settings (window, gameplay constants, storage)
//! - `gamestate` – authoritative and pending lifecycle state
//! - `input` – per-frame key state and pending pointer-down events
//! - `poplistener` – host callback invoked on each pop
//! - `redraw` – redraw request flag raised by ticks and pops
//! - `rng` – seedable random source for bubble placement
//! - `score` – in-session score
//! - `scorestore` – injected persistence of the last score
//! - `screensize` – current viewport dimensions in pixels
//! - `ticker` – cancellable fixed-step ticker
//! - `wave` – spawn order numbers and wave counter
//! - `worldtime` – host frame time and delta
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod poplistener;
pub mod redraw;
pub mod rng;
pub mod score;
pub mod scorestore;
pub mod screensize;
pub mod ticker;
pub mod wave;
pub mod worldtime;
