//! Event types and observers used by the game.
//!
//! Submodules:
//! - [`gamestate`] – lifecycle transitions; binds the ticker to the `Active` state
//! - [`pop`] – one event per popped bubble, forwarded to the host callback
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod gamestate;
pub mod pop;
pub mod switchdebug;
