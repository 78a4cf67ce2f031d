//! CPU-side pixel buffers.
//!
//! A [`Surface`] owns a raylib [`Image`]. Transforms never mutate the source:
//! [`Surface::cropped`] and [`Surface::scaled`] return a fresh deep copy, so a
//! sprite can always derive its working surface from the untouched original.

use std::path::Path;

use log::debug;
use raylib::prelude::{Color, Image, Rectangle};

use crate::components::hitbox::Hitbox;
use crate::error::GameError;

/// Resampling used by [`Surface::scaled`].
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum ScaleFilter {
    /// Nearest-neighbour, keeps pixel art sharp.
    #[default]
    Nearest,
    /// Interpolated resampling.
    Smooth,
}

/// Owned, decoded image. Dropping it frees the pixel memory.
#[derive(Clone)]
pub struct Surface {
    image: Image,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Surface {
    /// Decode an image file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let image = Image::load_image(&path.to_string_lossy())
            .map_err(|e| GameError::load(path, e))?;
        Self::from_image(image).map_err(|e| GameError::load(path, e))
    }

    /// Wrap an already decoded image, rejecting empty ones.
    pub fn from_image(image: Image) -> Result<Self, GameError> {
        if image.width <= 0 || image.height <= 0 || image.data.is_null() {
            return Err(GameError::Transform(format!(
                "image has no pixels ({}x{})",
                image.width, image.height
            )));
        }
        Ok(Self { image })
    }

    /// Single-colour surface.
    pub fn solid(width: i32, height: i32, color: Color) -> Result<Self, GameError> {
        if width <= 0 || height <= 0 {
            return Err(GameError::Transform(format!(
                "cannot create a {}x{} surface",
                width, height
            )));
        }
        Self::from_image(Image::gen_image_color(width, height, color))
    }

    pub fn width(&self) -> i32 {
        self.image.width
    }

    pub fn height(&self) -> i32 {
        self.image.height
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Copy of the `region` sub-rectangle. The region must lie fully inside.
    pub fn cropped(&self, region: Hitbox) -> Result<Self, GameError> {
        if !region.fits_inside(self.width(), self.height()) {
            return Err(GameError::CropOutOfBounds {
                region,
                width: self.width(),
                height: self.height(),
            });
        }
        let mut image = self.image.clone();
        image.crop(Rectangle::new(
            region.x as f32,
            region.y as f32,
            region.w as f32,
            region.h as f32,
        ));
        debug!(
            "cropped {}x{} surface to {:?}",
            self.width(),
            self.height(),
            region
        );
        Self::expect_size(image, region.w, region.h)
    }

    /// Copy resampled to `width` x `height`.
    pub fn scaled(&self, width: i32, height: i32, filter: ScaleFilter) -> Result<Self, GameError> {
        if width <= 0 || height <= 0 {
            return Err(GameError::Transform(format!(
                "cannot scale to {}x{}",
                width, height
            )));
        }
        let mut image = self.image.clone();
        match filter {
            ScaleFilter::Nearest => image.resize_nn(width, height),
            ScaleFilter::Smooth => image.resize(width, height),
        }
        debug!(
            "scaled {}x{} surface to {}x{} ({:?})",
            self.width(),
            self.height(),
            width,
            height,
            filter
        );
        Self::expect_size(image, width, height)
    }

    fn expect_size(image: Image, width: i32, height: i32) -> Result<Self, GameError> {
        if image.width != width || image.height != height || image.data.is_null() {
            return Err(GameError::Transform(format!(
                "expected {}x{}, got {}x{}",
                width, height, image.width, image.height
            )));
        }
        Ok(Self { image })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_surface_size() {
        let s = Surface::solid(64, 48, Color::RED).unwrap();
        assert_eq!((s.width(), s.height()), (64, 48));
    }

    #[test]
    fn test_solid_rejects_empty() {
        assert!(matches!(
            Surface::solid(0, 10, Color::RED),
            Err(GameError::Transform(_))
        ));
    }

    #[test]
    fn test_crop_leaves_source_untouched() {
        let s = Surface::solid(64, 64, Color::BLUE).unwrap();
        let c = s.cropped(Hitbox::new(8, 4, 20, 10)).unwrap();
        assert_eq!((c.width(), c.height()), (20, 10));
        assert_eq!((s.width(), s.height()), (64, 64));
    }

    #[test]
    fn test_crop_out_of_bounds() {
        let s = Surface::solid(64, 64, Color::BLUE).unwrap();
        let err = s.cropped(Hitbox::new(40, 0, 32, 32)).unwrap_err();
        assert!(matches!(err, GameError::CropOutOfBounds { width: 64, height: 64, .. }));
    }

    #[test]
    fn test_scaled_sizes() {
        let s = Surface::solid(64, 32, Color::GREEN).unwrap();
        let n = s.scaled(16, 8, ScaleFilter::Nearest).unwrap();
        let b = s.scaled(100, 50, ScaleFilter::Smooth).unwrap();
        assert_eq!((n.width(), n.height()), (16, 8));
        assert_eq!((b.width(), b.height()), (100, 50));
    }

    #[test]
    fn test_clone_is_deep() {
        let s = Surface::solid(10, 10, Color::WHITE).unwrap();
        let copy = s.clone();
        drop(s);
        assert_eq!(copy.width(), 10);
        assert!(!copy.image().data.is_null());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Surface::load("definitely/not/here.png").unwrap_err();
        assert!(matches!(err, GameError::Load { .. }));
    }
}
