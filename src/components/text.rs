//! Text labels and keyed paragraphs of labels.
//!
//! A [`Text`] shares its font through an `Rc`, so many labels can use one
//! loaded font and the font is freed when the last label and the
//! [`FontStore`](crate::resources::fontstore::FontStore) let go of it.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::rc::Rc;

use raylib::prelude::{Color, Vector2};

use crate::components::hitbox::Hitbox;
use crate::components::rect::shade;
use crate::resources::screensize::{Coord, ScreenSize};
use crate::sprite::backend::{Canvas, FontMetrics};

pub struct Text<F> {
    font: Rc<F>,
    font_size: f32,
    color: Color,
    color_backup: Color,
    rect: Hitbox,
    content: String,
}

impl<F: FontMetrics> Text<F> {
    pub fn new(font: Rc<F>, font_size: f32, color: Color, content: impl Into<String>) -> Self {
        let mut text = Self {
            font,
            font_size,
            color,
            color_backup: color,
            rect: Hitbox::default(),
            content: String::new(),
        };
        text.set_text(content);
        text
    }

    /// Replace the content and re-measure the label.
    pub fn set_text(&mut self, content: impl Into<String>) {
        self.content = content.into();
        let size = self.font.measure(&self.content, self.font_size);
        self.rect.w = size.x.ceil() as i32;
        self.rect.h = size.y.ceil() as i32;
    }
}

impl<F> Text<F> {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn temp_shade(&mut self, percent: f32) {
        self.color = shade(self.color_backup, percent);
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.rect.x = x;
        self.rect.y = y;
    }

    pub fn rect(&self) -> Hitbox {
        self.rect
    }

    pub fn render<C: Canvas<Font = F>>(&self, canvas: &mut C) {
        if self.content.is_empty() {
            return;
        }
        canvas.draw_text(
            &self.font,
            &self.content,
            Vector2::new(self.rect.x as f32, self.rect.y as f32),
            self.font_size,
            self.color,
        );
    }
}

/// Labels keyed by id, drawn in key order.
pub struct Paragraph<F> {
    screen: ScreenSize,
    lines: BTreeMap<String, Text<F>>,
}

impl<F: FontMetrics> Paragraph<F> {
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            screen,
            lines: BTreeMap::new(),
        }
    }

    /// Add or replace the line `uid`; `Coord::Centered` centres the measured
    /// label on the screen.
    #[allow(clippy::too_many_arguments)]
    pub fn add_line(
        &mut self,
        uid: impl Into<String>,
        x: impl Into<Coord>,
        y: impl Into<Coord>,
        font: Rc<F>,
        font_size: f32,
        color: Color,
        content: impl Into<String>,
    ) -> &mut Text<F> {
        let mut text = Text::new(font, font_size, color, content);
        let rect = text.rect();
        text.set_position(
            self.screen.resolve_x(x.into(), rect.w),
            self.screen.resolve_y(y.into(), rect.h),
        );
        match self.lines.entry(uid.into()) {
            Entry::Occupied(mut slot) => {
                slot.insert(text);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(text),
        }
    }
}

impl<F> Paragraph<F> {
    pub fn set_screen(&mut self, screen: ScreenSize) {
        self.screen = screen;
    }

    pub fn get(&self, uid: &str) -> Option<&Text<F>> {
        self.lines.get(uid)
    }

    pub fn get_mut(&mut self, uid: &str) -> Option<&mut Text<F>> {
        self.lines.get_mut(uid)
    }

    /// The `index`-th line in key order.
    pub fn nth(&mut self, index: usize) -> Option<&mut Text<F>> {
        self.lines.values_mut().nth(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn temp_shade(&mut self, percent: f32) {
        for line in self.lines.values_mut() {
            line.temp_shade(percent);
        }
    }

    pub fn render<C: Canvas<Font = F>>(&self, canvas: &mut C) {
        for line in self.lines.values() {
            line.render(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Monospace stand-in: every glyph is `size / 2` wide and `size` tall.
    struct Mono;

    impl FontMetrics for Mono {
        fn measure(&self, text: &str, font_size: f32) -> Vector2 {
            Vector2::new(text.chars().count() as f32 * font_size * 0.5, font_size)
        }
    }

    #[test]
    fn test_set_text_remeasures() {
        let mut t = Text::new(Rc::new(Mono), 20.0, Color::WHITE, "abcd");
        assert_eq!((t.rect().w, t.rect().h), (40, 20));
        t.set_text("ab");
        assert_eq!(t.rect().w, 20);
        assert_eq!(t.content(), "ab");
    }

    #[test]
    fn test_paragraph_centres_lines() {
        let font = Rc::new(Mono);
        let mut p = Paragraph::new(ScreenSize { w: 640, h: 480 });
        p.add_line("title", Coord::Centered, 10, font.clone(), 20.0, Color::WHITE, "HELLO");
        p.add_line("sub", Coord::Centered, Coord::Centered, font, 10.0, Color::WHITE, "x");
        let title = p.get("title").unwrap().rect();
        assert_eq!((title.x, title.y, title.w), (320 - 25, 10, 50));
        let sub = p.get("sub").unwrap().rect();
        assert_eq!((sub.x, sub.y), (320 - 2, 240 - 5));
        assert_eq!(p.nth(1).unwrap().content(), "HELLO");
    }

    #[test]
    fn test_paragraph_shade() {
        let mut p = Paragraph::new(ScreenSize { w: 100, h: 100 });
        p.add_line("a", 0, 0, Rc::new(Mono), 10.0, Color::new(100, 100, 100, 255), "a");
        p.temp_shade(0.0);
        assert_eq!(p.get("a").unwrap().color().r, 0);
    }
}
