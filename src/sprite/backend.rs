//! Seams between game objects and the GPU.
//!
//! Sprites, text and rectangles never call raylib directly. Uploads go through
//! a [`TextureUploader`] and draw calls through a [`Canvas`]; the raylib
//! implementations here borrow the rendering context for the duration of a
//! load or a frame and never own it.

use std::ffi::CString;

use log::warn;
use raylib::ffi;
use raylib::prelude::*;

use crate::components::hitbox::Hitbox;
use crate::error::GameError;
use crate::sprite::surface::Surface;

/// Pixel dimensions of an uploaded texture.
pub trait TextureSize {
    fn texture_size(&self) -> (i32, i32);
}

/// Builds GPU textures from CPU surfaces.
pub trait TextureUploader {
    type Texture: TextureSize;

    fn upload(&mut self, surface: &Surface) -> Result<Self::Texture, GameError>;
}

/// Draw target for one frame.
pub trait Canvas {
    type Texture;
    type Font;

    fn fill_rect(&mut self, rect: Hitbox, color: Color);

    /// Draw `source` of `texture` into `dest`, rotated by `degrees` about
    /// `origin` (relative to `dest`).
    fn draw_texture(
        &mut self,
        texture: &Self::Texture,
        source: Rectangle,
        dest: Rectangle,
        origin: Vector2,
        degrees: f32,
    );

    fn draw_text(
        &mut self,
        font: &Self::Font,
        text: &str,
        position: Vector2,
        font_size: f32,
        color: Color,
    );
}

/// Text measurement for a loaded font.
pub trait FontMetrics {
    fn measure(&self, text: &str, font_size: f32) -> Vector2;
}

/// Spacing between glyphs used for both measuring and drawing text.
pub const TEXT_SPACING: f32 = 1.0;

impl TextureSize for Texture2D {
    fn texture_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

/// [`TextureUploader`] over a live raylib context.
pub struct RaylibUploader<'a> {
    rl: &'a mut RaylibHandle,
    thread: &'a RaylibThread,
}

impl<'a> RaylibUploader<'a> {
    pub fn new(rl: &'a mut RaylibHandle, thread: &'a RaylibThread) -> Self {
        Self { rl, thread }
    }
}

impl TextureUploader for RaylibUploader<'_> {
    type Texture = Texture2D;

    fn upload(&mut self, surface: &Surface) -> Result<Texture2D, GameError> {
        self.rl
            .load_texture_from_image(self.thread, surface.image())
            .map_err(|e| GameError::TextureBuild(e.to_string()))
    }
}

/// [`Canvas`] over any raylib draw handle (plain, 2D camera, texture mode).
pub struct RaylibCanvas<'a, D: RaylibDraw> {
    draw: &'a mut D,
}

impl<'a, D: RaylibDraw> RaylibCanvas<'a, D> {
    pub fn new(draw: &'a mut D) -> Self {
        Self { draw }
    }
}

impl<D: RaylibDraw> Canvas for RaylibCanvas<'_, D> {
    type Texture = Texture2D;
    type Font = Font;

    fn fill_rect(&mut self, rect: Hitbox, color: Color) {
        self.draw.draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    }

    fn draw_texture(
        &mut self,
        texture: &Texture2D,
        source: Rectangle,
        dest: Rectangle,
        origin: Vector2,
        degrees: f32,
    ) {
        self.draw
            .draw_texture_pro(texture, source, dest, origin, degrees, Color::WHITE);
    }

    fn draw_text(
        &mut self,
        font: &Font,
        text: &str,
        position: Vector2,
        font_size: f32,
        color: Color,
    ) {
        self.draw
            .draw_text_ex(font, text, position, font_size, TEXT_SPACING, color);
    }
}

impl FontMetrics for Font {
    fn measure(&self, text: &str, font_size: f32) -> Vector2 {
        let Ok(c_text) = CString::new(text) else {
            warn!("Text contains an interior NUL, measuring as empty: {:?}", text);
            return Vector2::zero();
        };
        let measured =
            unsafe { ffi::MeasureTextEx(**self, c_text.as_ptr(), font_size, TEXT_SPACING) };
        Vector2::new(measured.x, measured.y)
    }
}
