//! Per-frame directional input.
//!
//! The [`WasdController`] resource holds which of the four movement keys are
//! held this frame. It is written by
//! [`update_input_state`](crate::systems::input::update_input_state) and read by
//! the movement system to derive the moment of input-controlled sprites.
use bevy_ecs::prelude::*;

use crate::components::moment::Moment;

/// Held state of the four movement directions.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WasdController {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl WasdController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_up_movement(&mut self, moving: bool) {
        self.up = moving;
    }

    pub fn set_down_movement(&mut self, moving: bool) {
        self.down = moving;
    }

    pub fn set_left_movement(&mut self, moving: bool) {
        self.left = moving;
    }

    pub fn set_right_movement(&mut self, moving: bool) {
        self.right = moving;
    }

    pub fn moving_up(&self) -> bool {
        self.up
    }

    pub fn moving_down(&self) -> bool {
        self.down
    }

    pub fn moving_left(&self) -> bool {
        self.left
    }

    pub fn moving_right(&self) -> bool {
        self.right
    }

    /// Moment for a sprite moving at `speed` pixels per frame.
    /// Opposite keys cancel out.
    pub fn moment(&self, speed: i32) -> Moment {
        let axis = |neg: bool, pos: bool| match (neg, pos) {
            (true, false) => -speed,
            (false, true) => speed,
            _ => 0,
        };
        Moment::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_controller_has_no_moment() {
        assert_eq!(WasdController::new().moment(4), Moment::new(0, 0));
    }

    #[test]
    fn test_diagonal_moment() {
        let mut c = WasdController::new();
        c.set_up_movement(true);
        c.set_right_movement(true);
        assert!(c.moving_up() && c.moving_right());
        assert_eq!(c.moment(3), Moment::new(3, -3));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut c = WasdController::new();
        c.set_left_movement(true);
        c.set_right_movement(true);
        c.set_down_movement(true);
        assert_eq!(c.moment(2), Moment::new(0, 2));
        c.set_down_movement(false);
        assert!(!c.moving_down());
        assert_eq!(c.moment(2), Moment::new(0, 0));
    }
}
