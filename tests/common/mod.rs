//! Headless backend shared by the integration tests.
//!
//! `FakeUploader` hands out textures that track how many are alive, and
//! `RecordingCanvas` stores every draw call instead of touching a GPU.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use raylib::prelude::{Color, Rectangle, Vector2};

use tileworks::components::hitbox::Hitbox;
use tileworks::error::GameError;
use tileworks::sprite::Surface;
use tileworks::sprite::backend::{Canvas, FontMetrics, TextureSize, TextureUploader};

pub struct FakeTexture {
    pub id: usize,
    pub w: i32,
    pub h: i32,
    live: Rc<Cell<usize>>,
}

impl TextureSize for FakeTexture {
    fn texture_size(&self) -> (i32, i32) {
        (self.w, self.h)
    }
}

impl Drop for FakeTexture {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

#[derive(Default)]
pub struct FakeUploader {
    live: Rc<Cell<usize>>,
    pub uploads: usize,
}

impl FakeUploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Textures created by this uploader that have not been dropped yet.
    pub fn live(&self) -> usize {
        self.live.get()
    }
}

impl TextureUploader for FakeUploader {
    type Texture = FakeTexture;

    fn upload(&mut self, surface: &Surface) -> Result<FakeTexture, GameError> {
        self.uploads += 1;
        self.live.set(self.live.get() + 1);
        Ok(FakeTexture {
            id: self.uploads,
            w: surface.width(),
            h: surface.height(),
            live: self.live.clone(),
        })
    }
}

/// Uploader whose uploads always fail, as when the GPU rejects a texture.
#[derive(Default)]
pub struct FailingUploader;

impl TextureUploader for FailingUploader {
    type Texture = FakeTexture;

    fn upload(&mut self, _surface: &Surface) -> Result<FakeTexture, GameError> {
        Err(GameError::TextureBuild("out of video memory".to_string()))
    }
}

/// Monospace font: every glyph is half as wide as the font size.
#[derive(Debug, Default)]
pub struct MonoFont;

impl FontMetrics for MonoFont {
    fn measure(&self, text: &str, font_size: f32) -> Vector2 {
        Vector2::new(text.chars().count() as f32 * font_size / 2.0, font_size)
    }
}

pub type Rgba = (u8, u8, u8, u8);
pub type Rect4 = (f32, f32, f32, f32);

pub fn rgba(c: Color) -> Rgba {
    (c.r, c.g, c.b, c.a)
}

fn rect4(r: Rectangle) -> Rect4 {
    (r.x, r.y, r.width, r.height)
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Fill {
        rect: Hitbox,
        color: Rgba,
    },
    Texture {
        id: usize,
        source: Rect4,
        dest: Rect4,
        origin: (f32, f32),
        degrees: f32,
    },
    Text {
        text: String,
        position: (f32, f32),
        font_size: f32,
        color: Rgba,
    },
}

#[derive(Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for RecordingCanvas {
    type Texture = FakeTexture;
    type Font = MonoFont;

    fn fill_rect(&mut self, rect: Hitbox, color: Color) {
        self.calls.push(DrawCall::Fill {
            rect,
            color: rgba(color),
        });
    }

    fn draw_texture(
        &mut self,
        texture: &FakeTexture,
        source: Rectangle,
        dest: Rectangle,
        origin: Vector2,
        degrees: f32,
    ) {
        self.calls.push(DrawCall::Texture {
            id: texture.id,
            source: rect4(source),
            dest: rect4(dest),
            origin: (origin.x, origin.y),
            degrees,
        });
    }

    fn draw_text(
        &mut self,
        _font: &MonoFont,
        text: &str,
        position: Vector2,
        font_size: f32,
        color: Color,
    ) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            position: (position.x, position.y),
            font_size,
            color: rgba(color),
        });
    }
}

/// Opaque single-colour surface.
pub fn solid(w: i32, h: i32) -> Surface {
    Surface::solid(w, h, Color::new(200, 40, 40, 255)).unwrap()
}
