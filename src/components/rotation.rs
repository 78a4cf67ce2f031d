use raylib::prelude::{Rectangle, Vector2};

use crate::components::hitbox::Hitbox;

/// Rotation applied when a sprite is drawn.
///
/// `pivot` is relative to the hitbox top-left; `None` rotates about the
/// hitbox centre.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
    pub pivot: Option<Vector2>,
}

impl Rotation {
    pub fn new(degrees: f32, pivot: Option<Vector2>) -> Self {
        Self { degrees, pivot }
    }

    /// Pivot to use for a given hitbox.
    pub fn pivot_for(&self, hitbox: &Hitbox) -> Vector2 {
        self.pivot
            .unwrap_or_else(|| Vector2::new(hitbox.w as f32 * 0.5, hitbox.h as f32 * 0.5))
    }

    /// Destination rectangle and origin for a rotated textured draw.
    ///
    /// raylib places `origin` at the destination position, so the destination
    /// is shifted by the pivot to keep the unrotated image at the hitbox.
    pub fn placement(&self, hitbox: &Hitbox) -> (Rectangle, Vector2) {
        let origin = self.pivot_for(hitbox);
        let dest = Rectangle::new(
            hitbox.x as f32 + origin.x,
            hitbox.y as f32 + origin.y,
            hitbox.w as f32,
            hitbox.h as f32,
        );
        (dest, origin)
    }
}
