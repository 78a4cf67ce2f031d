//! Engine systems.
//!
//! Submodules overview
//! - [`audio`] – bridge with the audio thread (poll/update message queues)
//! - [`input`] – read the WASD keys into [`crate::resources::input::WasdController`]
//! - [`movement`] – apply moments to stored sprites and keep them on screen
//! - [`render`] – draw rectangles, tiles, sprites and text through a canvas

pub mod audio;
pub mod input;
pub mod movement;
pub mod render;
