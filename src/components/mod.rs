//! ECS components for entities.
//!
//! Submodules overview:
//! - [`bubble`] – a poppable circular target with a fixed radius and list order
//! - [`mapposition`] – screen-space position (center) for an entity

pub mod bubble;
pub mod mapposition;
