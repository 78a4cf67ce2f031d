//! Input systems.
//!
//! [`update_input_state`] samples the WASD keys once per frame and stores the
//! result in [`WasdController`]. The key query is passed in so the game loop
//! can hand over raylib's `is_key_down` while tests use a plain closure.
use raylib::ffi::KeyboardKey;

use crate::resources::input::WasdController;

/// Poll the four movement keys and update the controller.
pub fn update_input_state(input: &mut WasdController, is_key_down: impl Fn(KeyboardKey) -> bool) {
    input.set_up_movement(is_key_down(KeyboardKey::KEY_W));
    input.set_down_movement(is_key_down(KeyboardKey::KEY_S));
    input.set_left_movement(is_key_down(KeyboardKey::KEY_A));
    input.set_right_movement(is_key_down(KeyboardKey::KEY_D));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_map_to_directions() {
        let mut input = WasdController::new();
        update_input_state(&mut input, |k| {
            k == KeyboardKey::KEY_W || k == KeyboardKey::KEY_D
        });
        assert!(input.moving_up());
        assert!(input.moving_right());
        assert!(!input.moving_down());
        assert!(!input.moving_left());

        update_input_state(&mut input, |_| false);
        assert_eq!(input, WasdController::new());
    }
}
