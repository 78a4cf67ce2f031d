use bevy_ecs::prelude::*;

use crate::resources::input::WasdController;
use crate::resources::screensize::ScreenSize;
use crate::resources::spritestore::SpriteStore;

/// Advance every stored sprite by one frame.
///
/// Input-controlled sprites take their moment from the WASD state scaled by
/// their speed. Each moment is clamped to the sprite's bounds, applied to the
/// position, and the hitbox is then kept on screen.
pub fn sprite_motion_system<T: 'static>(
    mut sprites: NonSendMut<SpriteStore<T>>,
    input: Res<WasdController>,
    screen: Res<ScreenSize>,
) {
    for entry in sprites.iter_mut() {
        let sprite = &mut entry.sprite;
        if entry.input_controlled {
            sprite.moment = input.moment(sprite.speed());
        }
        sprite.clamp_moment_to_bounds();
        sprite.apply_motion();
        sprite.clamp_position_to_bounds(screen.w, screen.h);
    }
}
