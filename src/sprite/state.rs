/// Lifecycle stage of a [`Sprite`](crate::sprite::Sprite).
///
/// ```text
/// Empty -> Loaded -> Transformed -> Built -> Rendering -> Destroyed
/// ```
/// Loading or transforming a sprite that already has a texture moves it back
/// to `Loaded`/`Transformed`; the stale texture is not drawn again until it is
/// rebuilt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpriteState {
    #[default]
    Empty,
    Loaded,
    Transformed,
    Built,
    Rendering,
    Destroyed,
}

impl SpriteState {
    /// A surface may be (re)loaded or transformed.
    pub fn accepts_surface_ops(self) -> bool {
        self != SpriteState::Destroyed
    }

    /// A texture exists and matches the current surface.
    pub fn is_renderable(self) -> bool {
        matches!(self, SpriteState::Built | SpriteState::Rendering)
    }
}
