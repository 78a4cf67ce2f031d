//! Tileworks library.
//!
//! Sprite lifecycle management for a small raylib + bevy_ecs 2D toolkit:
//! loading images into surfaces, cropping and rescaling them, building
//! textures, and moving, rotating and drawing the result.

pub mod components;
pub mod error;
pub mod events;
pub mod resources;
pub mod sprite;
pub mod systems;
