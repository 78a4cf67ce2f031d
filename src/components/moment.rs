/// Per-frame displacement of a sprite in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Moment {
    pub x: i32,
    pub y: i32,
}

impl Moment {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Box a [`Moment`] is clamped into: `[x_lower, x_upper] x [y_lower, y_upper]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MomentBounds {
    pub x_lower: i32,
    pub x_upper: i32,
    pub y_lower: i32,
    pub y_upper: i32,
}

impl Default for MomentBounds {
    fn default() -> Self {
        Self {
            x_lower: i32::MIN,
            x_upper: i32::MAX,
            y_lower: i32::MIN,
            y_upper: i32::MAX,
        }
    }
}

impl MomentBounds {
    pub fn new(x_lower: i32, x_upper: i32, y_lower: i32, y_upper: i32) -> Self {
        Self {
            x_lower,
            x_upper,
            y_lower,
            y_upper,
        }
    }

    /// Same limits on both axes.
    pub fn symmetric(lower: i32, upper: i32) -> Self {
        Self::new(lower, upper, lower, upper)
    }

    /// Clamp `moment` in place. Lower bounds are applied before upper bounds,
    /// so inverted bounds resolve to the upper value instead of panicking.
    pub fn clamp(&self, moment: &mut Moment) {
        if moment.x < self.x_lower {
            moment.x = self.x_lower;
        }
        if moment.x > self.x_upper {
            moment.x = self.x_upper;
        }
        if moment.y < self.y_lower {
            moment.y = self.y_lower;
        }
        if moment.y > self.y_upper {
            moment.y = self.y_upper;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extreme_moment_is_clamped() {
        let bounds = MomentBounds::new(-5, 5, -5, 5);
        let mut m = Moment::new(10000, -10000);
        bounds.clamp(&mut m);
        assert_eq!(m, Moment::new(5, -5));
    }

    #[test]
    fn test_moment_inside_bounds_untouched() {
        let bounds = MomentBounds::new(-5, 5, -3, 3);
        let mut m = Moment::new(2, -3);
        bounds.clamp(&mut m);
        assert_eq!(m, Moment::new(2, -3));
    }

    #[test]
    fn test_clamped_moment_always_within_bounds() {
        let bounds = MomentBounds::new(-4, 9, -12, 1);
        for x in [i32::MIN, -1000, -5, 0, 3, 9, 10, i32::MAX] {
            for y in [i32::MIN, -13, -12, 0, 1, 2, i32::MAX] {
                let mut m = Moment::new(x, y);
                bounds.clamp(&mut m);
                assert!((bounds.x_lower..=bounds.x_upper).contains(&m.x));
                assert!((bounds.y_lower..=bounds.y_upper).contains(&m.y));
            }
        }
    }

    #[test]
    fn test_inverted_bounds_resolve_to_upper() {
        let bounds = MomentBounds::new(5, -5, 5, -5);
        let mut m = Moment::new(0, 0);
        bounds.clamp(&mut m);
        assert_eq!(m, Moment::new(-5, -5));
    }

    #[test]
    fn test_default_bounds_are_unbounded() {
        let mut m = Moment::new(i32::MAX, i32::MIN);
        MomentBounds::default().clamp(&mut m);
        assert_eq!(m, Moment::new(i32::MAX, i32::MIN));
    }
}
