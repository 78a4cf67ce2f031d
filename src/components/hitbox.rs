use raylib::prelude::Rectangle;

/// Integer screen-space rectangle used for placement and bounds checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hitbox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Hitbox {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// True when the rectangle has positive area and lies fully inside a
    /// `width` x `height` region anchored at the origin.
    pub fn fits_inside(&self, width: i32, height: i32) -> bool {
        self.w > 0
            && self.h > 0
            && self.x >= 0
            && self.y >= 0
            && self.x as i64 + self.w as i64 <= width as i64
            && self.y as i64 + self.h as i64 <= height as i64
    }

    /// Keep the rectangle inside `[0, width] x [0, height]`.
    ///
    /// Each axis checks the far edge first and the near edge second, so a
    /// rectangle larger than the region ends up pinned at 0.
    pub fn clamp_to_bounds(&mut self, width: i32, height: i32) {
        self.x = clamp_axis(self.x, self.w, width);
        self.y = clamp_axis(self.y, self.h, height);
    }

    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::new(self.x as f32, self.y as f32, self.w as f32, self.h as f32)
    }
}

fn clamp_axis(pos: i32, size: i32, limit: i32) -> i32 {
    let mut pos = pos as i64;
    if pos + size as i64 > limit as i64 {
        pos = limit as i64 - size as i64;
    }
    if pos < 0 {
        pos = 0;
    }
    pos.min(i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_pins_far_edge() {
        let mut hb = Hitbox::new(90, 95, 20, 10);
        hb.clamp_to_bounds(100, 100);
        assert_eq!((hb.x, hb.y), (80, 90));
    }

    #[test]
    fn test_clamp_pins_near_edge() {
        let mut hb = Hitbox::new(-7, -1, 20, 10);
        hb.clamp_to_bounds(100, 100);
        assert_eq!((hb.x, hb.y), (0, 0));
    }

    #[test]
    fn test_oversized_snaps_to_origin() {
        let mut hb = Hitbox::new(30, 30, 150, 120);
        hb.clamp_to_bounds(100, 100);
        assert_eq!((hb.x, hb.y), (0, 0));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        for &(w, h) in &[(1, 1), (50, 40), (100, 100), (250, 10)] {
            for x in (-300..300).step_by(37) {
                for y in (-300..300).step_by(41) {
                    let mut once = Hitbox::new(x, y, 64, 32);
                    once.clamp_to_bounds(w, h);
                    let mut twice = once;
                    twice.clamp_to_bounds(w, h);
                    assert_eq!(once, twice, "start=({x},{y}) bounds=({w},{h})");
                }
            }
        }
    }

    #[test]
    fn test_fits_inside() {
        assert!(Hitbox::new(0, 0, 32, 32).fits_inside(64, 64));
        assert!(Hitbox::new(32, 32, 32, 32).fits_inside(64, 64));
        assert!(!Hitbox::new(33, 0, 32, 32).fits_inside(64, 64));
        assert!(!Hitbox::new(-1, 0, 10, 10).fits_inside(64, 64));
        assert!(!Hitbox::new(0, 0, 0, 10).fits_inside(64, 64));
    }

    #[test]
    fn test_clamp_near_i32_max() {
        let mut hb = Hitbox::new(i32::MAX - 5, i32::MAX, 32, 32);
        hb.clamp_to_bounds(640, 480);
        assert_eq!((hb.x, hb.y), (608, 448));

        let mut hb = Hitbox::new(i32::MIN, i32::MIN, 32, 32);
        hb.clamp_to_bounds(640, 480);
        assert_eq!((hb.x, hb.y), (0, 0));
    }
}
