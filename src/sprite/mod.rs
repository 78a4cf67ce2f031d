//! Sprite lifecycle manager and the rendering seams it depends on.
//!
//! - [`surface`] – owned CPU pixel buffers with crop and rescale
//! - [`backend`] – texture upload and draw-call traits plus raylib implementations
//! - [`state`] – lifecycle state machine
//! - [`object`] – the [`Sprite`] itself and the load-to-texture pipeline

pub mod backend;
pub mod object;
pub mod state;
pub mod surface;

pub use object::{Sprite, SpriteRecipe, create_sprite_from_image, create_sprite_from_surface};
pub use state::SpriteState;
pub use surface::{ScaleFilter, Surface};
