//! Error type shared by the sprite pipeline, asset loading and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::components::hitbox::Hitbox;
use crate::sprite::state::SpriteState;

/// Errors produced while loading, transforming or drawing game resources.
#[derive(Debug, Error)]
pub enum GameError {
    /// A file could not be decoded (image, font or sound).
    #[error("failed loading {path}: {reason}")]
    Load { path: PathBuf, reason: String },

    /// Crop region is empty or not fully inside the source surface.
    #[error("crop region {region:?} is outside the {width}x{height} source surface")]
    CropOutOfBounds {
        region: Hitbox,
        width: i32,
        height: i32,
    },

    /// Proportional rescale asked for a non-positive width.
    #[error("invalid target width {0}")]
    InvalidTargetWidth(i32),

    /// A surface transform produced no usable pixels.
    #[error("surface transform failed: {0}")]
    Transform(String),

    /// Uploading a surface to the GPU failed.
    #[error("texture build failed: {0}")]
    TextureBuild(String),

    /// Operation called out of lifecycle order.
    #[error("cannot {operation} a sprite in state {state:?}")]
    InvalidState {
        operation: &'static str,
        state: SpriteState,
    },

    /// Config file missing, unreadable or not writable.
    #[error("config error: {0}")]
    Config(String),
}

impl GameError {
    pub(crate) fn load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        GameError::Load {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
