use bevy_ecs::prelude::*;
use log::debug;

use crate::components::rect::RectGroup;
use crate::components::text::Paragraph;
use crate::resources::spritestore::SpriteStore;
use crate::resources::tileatlas::{TileLayer, Tileset};
use crate::sprite::backend::{Canvas, TextureSize};

/// Draw one frame into `canvas`, back to front: rectangles, the tile layer,
/// sprites in store order, then text.
///
/// Each layer is optional; a missing resource is skipped. A sprite that is
/// not ready to render is skipped (logged at debug level) so the rest of the
/// frame still draws.
pub fn render_pass<C>(world: &mut World, canvas: &mut C)
where
    C: Canvas,
    C::Texture: TextureSize + 'static,
    C::Font: 'static,
{
    if let Some(rects) = world.get_resource::<RectGroup>() {
        rects.render(canvas);
    }

    if let (Some(tileset), Some(layer)) = (
        world.get_non_send_resource::<Tileset<C::Texture>>(),
        world.get_resource::<TileLayer>(),
    ) {
        tileset.draw_layer(canvas, layer);
    }

    if let Some(mut sprites) = world.get_non_send_resource_mut::<SpriteStore<C::Texture>>() {
        for entry in sprites.iter_mut() {
            if let Err(e) = entry.sprite.render(canvas) {
                debug!("Skipping sprite '{}': {}", entry.key, e);
            }
        }
    }

    if let Some(paragraph) = world.get_non_send_resource::<Paragraph<C::Font>>() {
        paragraph.render(canvas);
    }
}
