//! Filled rectangles with an optional border, and keyed groups of them.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;

use crate::components::hitbox::Hitbox;
use crate::resources::screensize::{Coord, ScreenSize};
use crate::sprite::backend::Canvas;

/// Scale the RGB channels of `color` by `percent` (0.0 - 1.0), keeping alpha.
pub fn shade(color: Color, percent: f32) -> Color {
    let scale = |c: u8| (c as f32 * percent.clamp(0.0, 1.0)) as u8;
    Color::new(scale(color.r), scale(color.g), scale(color.b), color.a)
}

#[derive(Clone, Debug)]
pub struct Rect {
    rect: Hitbox,
    border_pt: i32,
    border_color: Color,
    color: Color,
    color_backup: Color,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32, color: Color) -> Self {
        Self {
            rect: Hitbox::new(x, y, w, h),
            border_pt: 0,
            border_color: color,
            color,
            color_backup: color,
        }
    }

    /// Fill the border area, then the inset body.
    pub fn render<C: Canvas>(&self, canvas: &mut C) {
        if self.border_pt > 0 {
            canvas.fill_rect(self.rect, self.border_color);
            let inner = Hitbox::new(
                self.rect.x + self.border_pt,
                self.rect.y + self.border_pt,
                self.rect.w - self.border_pt * 2,
                self.rect.h - self.border_pt * 2,
            );
            if inner.w > 0 && inner.h > 0 {
                canvas.fill_rect(inner, self.color);
            }
        } else {
            canvas.fill_rect(self.rect, self.color);
        }
    }

    /// Set the body colour. The alpha channel is forced opaque.
    pub fn set_color(&mut self, color: Color) {
        let color = Color::new(color.r, color.g, color.b, 255);
        self.color = color;
        self.color_backup = color;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_dimensions(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.rect = Hitbox::new(x, y, w, h);
    }

    pub fn rect(&self) -> Hitbox {
        self.rect
    }

    pub fn set_border(&mut self, pt: i32, color: Color) {
        self.border_pt = pt.max(0);
        self.border_color = color;
    }

    /// Darken the body relative to the colour last set, not the current one.
    pub fn temp_shade(&mut self, percent: f32) {
        self.color = shade(self.color_backup, percent);
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.rect.x = x;
        self.rect.y = y;
    }
}

/// Rectangles keyed by id, drawn in key order.
#[derive(Resource, Clone, Debug)]
pub struct RectGroup {
    screen: ScreenSize,
    rects: BTreeMap<String, Rect>,
}

impl RectGroup {
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            screen,
            rects: BTreeMap::new(),
        }
    }

    pub fn set_screen(&mut self, screen: ScreenSize) {
        self.screen = screen;
    }

    pub fn add_rect(
        &mut self,
        uid: impl Into<String>,
        x: impl Into<Coord>,
        y: impl Into<Coord>,
        w: i32,
        h: i32,
        color: Color,
    ) -> &mut Rect {
        let x = self.screen.resolve_x(x.into(), w);
        let y = self.screen.resolve_y(y.into(), h);
        let rect = Rect::new(x, y, w, h, color);
        match self.rects.entry(uid.into()) {
            Entry::Occupied(mut slot) => {
                slot.insert(rect);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(rect),
        }
    }

    pub fn get(&self, uid: &str) -> Option<&Rect> {
        self.rects.get(uid)
    }

    pub fn get_mut(&mut self, uid: &str) -> Option<&mut Rect> {
        self.rects.get_mut(uid)
    }

    /// The `index`-th rectangle in key order.
    pub fn nth(&mut self, index: usize) -> Option<&mut Rect> {
        self.rects.values_mut().nth(index)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn temp_shade(&mut self, percent: f32) {
        for rect in self.rects.values_mut() {
            rect.temp_shade(percent);
        }
    }

    pub fn render<C: Canvas>(&self, canvas: &mut C) {
        for rect in self.rects.values() {
            rect.render(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_half() {
        let c = shade(Color::new(200, 100, 50, 255), 0.5);
        assert_eq!((c.r, c.g, c.b, c.a), (100, 50, 25, 255));
    }

    #[test]
    fn test_temp_shade_uses_backup() {
        let mut r = Rect::new(0, 0, 10, 10, Color::new(200, 200, 200, 255));
        r.temp_shade(0.5);
        r.temp_shade(0.5);
        assert_eq!(r.color().r, 100);
        r.temp_shade(1.0);
        assert_eq!(r.color().r, 200);
    }

    #[test]
    fn test_set_color_resets_backup() {
        let mut r = Rect::new(0, 0, 10, 10, Color::WHITE);
        r.set_color(Color::new(10, 20, 30, 0));
        r.temp_shade(1.0);
        let c = r.color();
        assert_eq!((c.r, c.g, c.b, c.a), (10, 20, 30, 255));
    }

    #[test]
    fn test_group_centres_and_orders() {
        let mut group = RectGroup::new(ScreenSize { w: 200, h: 100 });
        group.add_rect("b", Coord::Centered, Coord::Centered, 20, 10, Color::RED);
        group.add_rect("a", 5, 6, 1, 1, Color::BLUE);
        assert_eq!(group.get("b").unwrap().rect(), Hitbox::new(90, 45, 20, 10));
        assert_eq!(group.nth(0).unwrap().rect(), Hitbox::new(5, 6, 1, 1));
        assert!(group.nth(2).is_none());
        assert_eq!(group.len(), 2);
    }

    struct Fills(Vec<Hitbox>);

    impl Canvas for Fills {
        type Texture = ();
        type Font = ();

        fn fill_rect(&mut self, rect: Hitbox, _color: Color) {
            self.0.push(rect);
        }

        fn draw_texture(
            &mut self,
            _texture: &(),
            _source: raylib::prelude::Rectangle,
            _dest: raylib::prelude::Rectangle,
            _origin: raylib::prelude::Vector2,
            _degrees: f32,
        ) {
        }

        fn draw_text(
            &mut self,
            _font: &(),
            _text: &str,
            _position: raylib::prelude::Vector2,
            _font_size: f32,
            _color: Color,
        ) {
        }
    }

    #[test]
    fn test_border_fills_outer_then_inner() {
        let mut r = Rect::new(10, 10, 20, 12, Color::WHITE);
        let mut canvas = Fills(Vec::new());
        r.render(&mut canvas);
        assert_eq!(canvas.0, vec![Hitbox::new(10, 10, 20, 12)]);

        r.set_border(3, Color::BLACK);
        canvas.0.clear();
        r.render(&mut canvas);
        assert_eq!(
            canvas.0,
            vec![Hitbox::new(10, 10, 20, 12), Hitbox::new(13, 13, 14, 6)]
        );
    }
}
