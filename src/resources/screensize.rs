//! Screen size resource.
//!
//! Stores the current framebuffer dimensions in pixels and resolves
//! [`Coord::Centered`] placements for UI widgets.

use bevy_ecs::prelude::Resource;

use crate::components::hitbox::Hitbox;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

/// A widget coordinate: an absolute pixel value or centred on the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coord {
    Px(i32),
    Centered,
}

impl From<i32> for Coord {
    fn from(value: i32) -> Self {
        Coord::Px(value)
    }
}

impl ScreenSize {
    pub fn rect(&self) -> Hitbox {
        Hitbox::new(0, 0, self.w, self.h)
    }

    /// Resolve an x coordinate for something `width` pixels wide.
    pub fn resolve_x(&self, x: Coord, width: i32) -> i32 {
        match x {
            Coord::Px(v) => v,
            Coord::Centered => self.w / 2 - width / 2,
        }
    }

    /// Resolve a y coordinate for something `height` pixels tall.
    pub fn resolve_y(&self, y: Coord, height: i32) -> i32 {
        match y {
            Coord::Px(v) => v,
            Coord::Centered => self.h / 2 - height / 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_resolution() {
        let screen = ScreenSize { w: 800, h: 600 };
        assert_eq!(screen.resolve_x(Coord::Centered, 100), 350);
        assert_eq!(screen.resolve_y(Coord::Centered, 41), 280);
        assert_eq!(screen.resolve_x(12.into(), 100), 12);
    }
}
