//! Tile atlas lookup and tileset drawing.
//!
//! The tile sheet is a single row of 32x32 tiles. [`TileType::source`] gives
//! the sheet region for each tile; `TileType::None` maps to an empty region
//! and is never drawn.

use bevy_ecs::prelude::Resource;
use log::info;
use raylib::prelude::{Rectangle, Vector2};

use crate::components::hitbox::Hitbox;
use crate::error::GameError;
use crate::sprite::backend::{Canvas, TextureSize, TextureUploader};
use crate::sprite::surface::Surface;

pub const TILE_SIZE: i32 = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileType {
    None,
    Floor,
    FloorCrack1,
    FloorCrack2,
    FloorCrack3,
    Roof,
    Roof1,
    Roof2,
    Roof3,
    Roof4,
    Brick,
    BrickCrack1,
    BrickCrack2,
    BrickCrack3,
}

impl TileType {
    pub const ALL: [TileType; 14] = [
        TileType::None,
        TileType::Floor,
        TileType::FloorCrack1,
        TileType::FloorCrack2,
        TileType::FloorCrack3,
        TileType::Roof,
        TileType::Roof1,
        TileType::Roof2,
        TileType::Roof3,
        TileType::Roof4,
        TileType::Brick,
        TileType::BrickCrack1,
        TileType::BrickCrack2,
        TileType::BrickCrack3,
    ];

    /// Region of the tile sheet holding this tile.
    pub fn source(self) -> Hitbox {
        match self {
            TileType::None => Hitbox::default(),
            // Floor sits at the sheet origin; every later tile follows in order.
            other => Hitbox::new((other as i32 - 1) * TILE_SIZE, 0, TILE_SIZE, TILE_SIZE),
        }
    }
}

/// Grid of tiles drawn behind the sprites, row-major.
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct TileLayer {
    pub columns: usize,
    pub tiles: Vec<TileType>,
    /// Screen position of the top-left tile.
    pub origin: (i32, i32),
}

impl TileLayer {
    pub fn new(columns: usize, tiles: Vec<TileType>, origin: (i32, i32)) -> Self {
        Self {
            columns: columns.max(1),
            tiles,
            origin,
        }
    }

    /// Screen positions of every drawable tile.
    pub fn positions(&self) -> impl Iterator<Item = (TileType, i32, i32)> + '_ {
        self.tiles.iter().enumerate().filter_map(move |(i, &tile)| {
            if tile == TileType::None {
                return None;
            }
            let col = (i % self.columns) as i32;
            let row = (i / self.columns) as i32;
            Some((
                tile,
                self.origin.0 + col * TILE_SIZE,
                self.origin.1 + row * TILE_SIZE,
            ))
        })
    }
}

/// The uploaded tile sheet.
// NonSend resource: textures belong to the rendering thread
pub struct Tileset<T> {
    texture: T,
}

impl<T: TextureSize> Tileset<T> {
    pub fn build<U>(uploader: &mut U, sheet: &Surface) -> Result<Self, GameError>
    where
        U: TextureUploader<Texture = T>,
    {
        let texture = uploader.upload(sheet)?;
        let (w, h) = texture.texture_size();
        info!("Tileset built ({}x{}, {} tiles per row)", w, h, w / TILE_SIZE);
        Ok(Self { texture })
    }

    pub fn draw_tile<C>(&self, canvas: &mut C, tile: TileType, x: i32, y: i32)
    where
        C: Canvas<Texture = T>,
    {
        let src = tile.source();
        if src.w == 0 || src.h == 0 {
            return;
        }
        canvas.draw_texture(
            &self.texture,
            src.to_rectangle(),
            Rectangle::new(x as f32, y as f32, src.w as f32, src.h as f32),
            Vector2::zero(),
            0.0,
        );
    }

    pub fn draw_layer<C>(&self, canvas: &mut C, layer: &TileLayer)
    where
        C: Canvas<Texture = T>,
    {
        for (tile, x, y) in layer.positions() {
            self.draw_tile(canvas, tile, x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_offsets() {
        assert_eq!(TileType::None.source(), Hitbox::new(0, 0, 0, 0));
        assert_eq!(TileType::Floor.source(), Hitbox::new(0, 0, 32, 32));
        assert_eq!(TileType::FloorCrack3.source(), Hitbox::new(96, 0, 32, 32));
        assert_eq!(TileType::Roof.source(), Hitbox::new(128, 0, 32, 32));
        assert_eq!(TileType::Brick.source(), Hitbox::new(288, 0, 32, 32));
        assert_eq!(TileType::BrickCrack3.source(), Hitbox::new(384, 0, 32, 32));
    }

    #[test]
    fn test_all_tiles_are_distinct() {
        let mut xs: Vec<i32> = TileType::ALL[1..].iter().map(|t| t.source().x).collect();
        xs.dedup();
        assert_eq!(xs.len(), 13);
    }

    #[test]
    fn test_layer_positions_skip_none() {
        let layer = TileLayer::new(
            2,
            vec![TileType::Floor, TileType::None, TileType::Brick],
            (10, 20),
        );
        let got: Vec<_> = layer.positions().collect();
        assert_eq!(
            got,
            vec![(TileType::Floor, 10, 20), (TileType::Brick, 10, 52)]
        );
    }
}
