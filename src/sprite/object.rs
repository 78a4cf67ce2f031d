//! Sprite lifecycle: from an image on disk to a movable, rotatable texture.
//!
//! A [`Sprite`] exclusively owns its original surface, its working surface
//! and its texture. All three are plain owned values, so replacing or
//! dropping one releases the native memory exactly once.

use log::{debug, error, info};
use raylib::prelude::{Rectangle, Vector2};

use crate::components::hitbox::Hitbox;
use crate::components::moment::{Moment, MomentBounds};
use crate::components::rotation::Rotation;
use crate::error::GameError;
use crate::resources::resourcepaths::ResourcePaths;
use crate::sprite::backend::{Canvas, TextureSize, TextureUploader};
use crate::sprite::state::SpriteState;
use crate::sprite::surface::{ScaleFilter, Surface};

/// One on-screen game object backed by a texture of type `T`.
pub struct Sprite<T> {
    original: Option<Surface>,
    working: Option<Surface>,
    texture: Option<T>,
    hitbox: Hitbox,
    /// Displacement applied by [`Sprite::apply_motion`].
    pub moment: Moment,
    moment_bounds: MomentBounds,
    speed: i32,
    rotation: Rotation,
    scale_filter: ScaleFilter,
    state: SpriteState,
}

impl<T> Default for Sprite<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sprite<T> {
    pub fn new() -> Self {
        Self {
            original: None,
            working: None,
            texture: None,
            hitbox: Hitbox::default(),
            moment: Moment::default(),
            moment_bounds: MomentBounds::default(),
            speed: 0,
            rotation: Rotation::default(),
            scale_filter: ScaleFilter::default(),
            state: SpriteState::Empty,
        }
    }

    pub fn with_scale_filter(mut self, filter: ScaleFilter) -> Self {
        self.scale_filter = filter;
        self
    }

    pub fn state(&self) -> SpriteState {
        self.state
    }

    pub fn scale_filter(&self) -> ScaleFilter {
        self.scale_filter
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_renderable()
    }

    pub fn hitbox(&self) -> Hitbox {
        self.hitbox
    }

    pub fn x(&self) -> i32 {
        self.hitbox.x
    }

    pub fn y(&self) -> i32 {
        self.hitbox.y
    }

    pub fn width(&self) -> i32 {
        self.hitbox.w
    }

    pub fn height(&self) -> i32 {
        self.hitbox.h
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn moment_bounds(&self) -> MomentBounds {
        self.moment_bounds
    }

    pub fn texture(&self) -> Option<&T> {
        self.texture.as_ref()
    }

    pub fn original_surface(&self) -> Option<&Surface> {
        self.original.as_ref()
    }

    pub fn working_surface(&self) -> Option<&Surface> {
        self.working.as_ref()
    }

    fn require(&self, operation: &'static str, ok: bool) -> Result<(), GameError> {
        if ok {
            Ok(())
        } else {
            Err(GameError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }

    fn original_for(&self, operation: &'static str) -> Result<&Surface, GameError> {
        self.require(operation, self.state.accepts_surface_ops())?;
        self.original.as_ref().ok_or(GameError::InvalidState {
            operation,
            state: self.state,
        })
    }

    /// Decode `<root>/img/<file>` into the original and working surfaces.
    ///
    /// On failure the error is logged and the sprite keeps its previous state.
    pub fn load_image(&mut self, paths: &ResourcePaths, file: &str) -> Result<(), GameError> {
        self.require("load", self.state.accepts_surface_ops())?;
        let surface = Surface::load(paths.image(file)).inspect_err(|e| {
            error!("Failed loading image: {}", e);
        })?;
        self.load_surface(surface)
    }

    /// Use an already decoded surface as the original.
    pub fn load_surface(&mut self, surface: Surface) -> Result<(), GameError> {
        self.require("load", self.state.accepts_surface_ops())?;
        debug!("sprite loaded {}x{} surface", surface.width(), surface.height());
        self.working = Some(surface.clone());
        self.original = Some(surface);
        self.state = SpriteState::Loaded;
        Ok(())
    }

    /// Replace the working surface with a region of the original.
    pub fn crop(&mut self, x: i32, y: i32, w: i32, h: i32) -> Result<(), GameError> {
        let cropped = self.original_for("crop")?.cropped(Hitbox::new(x, y, w, h))?;
        self.working = None;
        self.working = Some(cropped);
        self.state = SpriteState::Transformed;
        Ok(())
    }

    /// Rescale the *original* surface to `target_width`, keeping its aspect
    /// ratio. Any earlier crop is discarded.
    pub fn rescale_proportional(&mut self, target_width: i32) -> Result<(), GameError> {
        let scaled = {
            let original = self.original_for("rescale")?;
            proportional(original, target_width, self.scale_filter)?
        };
        self.working = Some(scaled);
        self.state = SpriteState::Transformed;
        Ok(())
    }

    /// Rescale the current working surface to `target_width`, keeping an
    /// earlier crop.
    pub fn rescale_working_proportional(&mut self, target_width: i32) -> Result<(), GameError> {
        self.original_for("rescale")?;
        let working = self.working.as_ref().ok_or(GameError::InvalidState {
            operation: "rescale",
            state: self.state,
        })?;
        let scaled = proportional(working, target_width, self.scale_filter)?;
        self.working = Some(scaled);
        self.state = SpriteState::Transformed;
        Ok(())
    }

    /// Free the CPU surfaces once the texture holds the pixels.
    pub fn release_surface(&mut self) -> Result<(), GameError> {
        self.require("release the surface of", self.state.is_renderable())?;
        self.working = None;
        self.original = None;
        debug!("sprite surfaces released");
        Ok(())
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.hitbox.x = x;
        self.hitbox.y = y;
    }

    pub fn set_speed(&mut self, speed: i32) {
        self.speed = speed;
    }

    pub fn set_moment_bounds(&mut self, x_lower: i32, x_upper: i32, y_lower: i32, y_upper: i32) {
        self.moment_bounds = MomentBounds::new(x_lower, x_upper, y_lower, y_upper);
    }

    pub fn clamp_moment_to_bounds(&mut self) {
        self.moment_bounds.clamp(&mut self.moment);
    }

    pub fn apply_motion(&mut self) {
        self.hitbox.x = self.hitbox.x.saturating_add(self.moment.x);
        self.hitbox.y = self.hitbox.y.saturating_add(self.moment.y);
    }

    /// Keep the hitbox inside `[0, width] x [0, height]`; see
    /// [`Hitbox::clamp_to_bounds`] for the edge order.
    pub fn clamp_position_to_bounds(&mut self, width: i32, height: i32) {
        self.hitbox.clamp_to_bounds(width, height);
    }

    pub fn set_rotation(&mut self, degrees: f32, pivot: Option<Vector2>) {
        self.rotation = Rotation::new(degrees, pivot);
    }

    /// Release texture and surfaces. Calling it again does nothing.
    pub fn destroy(&mut self) {
        if self.state == SpriteState::Destroyed {
            debug!("sprite already destroyed");
            return;
        }
        self.texture = None;
        self.working = None;
        self.original = None;
        self.state = SpriteState::Destroyed;
        debug!("sprite destroyed");
    }
}

impl<T: TextureSize> Sprite<T> {
    /// Upload the working surface and take the hitbox size from the texture.
    /// A previous texture is released before the new one is created; if the
    /// upload fails the sprite is left `Transformed` with no texture.
    pub fn build_texture<U>(&mut self, uploader: &mut U) -> Result<(), GameError>
    where
        U: TextureUploader<Texture = T>,
    {
        self.require("build a texture for", self.state.accepts_surface_ops())?;
        let Some(working) = self.working.as_ref() else {
            return Err(GameError::InvalidState {
                operation: "build a texture for",
                state: self.state,
            });
        };
        self.texture = None;
        let texture = match uploader.upload(working) {
            Ok(texture) => texture,
            Err(e) => {
                self.state = SpriteState::Transformed;
                error!("Failed building texture: {}", e);
                return Err(e);
            }
        };
        let (w, h) = texture.texture_size();
        self.hitbox.w = w;
        self.hitbox.h = h;
        self.texture = Some(texture);
        self.state = SpriteState::Built;
        debug!("sprite texture built {}x{}", w, h);
        Ok(())
    }

    /// Draw the texture at the hitbox, rotated about the stored pivot.
    pub fn render<C>(&mut self, canvas: &mut C) -> Result<(), GameError>
    where
        C: Canvas<Texture = T>,
    {
        self.require("render", self.state.is_renderable())?;
        let Some(texture) = self.texture.as_ref() else {
            return Err(GameError::InvalidState {
                operation: "render",
                state: self.state,
            });
        };
        let (tw, th) = texture.texture_size();
        let source = Rectangle::new(0.0, 0.0, tw as f32, th as f32);
        let (dest, origin) = self.rotation.placement(&self.hitbox);
        canvas.draw_texture(texture, source, dest, origin, self.rotation.degrees);
        self.state = SpriteState::Rendering;
        Ok(())
    }
}

fn proportional(
    source: &Surface,
    target_width: i32,
    filter: ScaleFilter,
) -> Result<Surface, GameError> {
    if target_width <= 0 {
        return Err(GameError::InvalidTargetWidth(target_width));
    }
    let zoom = target_width as f64 / source.width() as f64;
    let height = ((source.height() as f64 * zoom).round() as i32).max(1);
    source.scaled(target_width, height, filter)
}

/// Optional steps of [`create_sprite_from_image`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpriteRecipe {
    /// File under `<root>/img/`.
    pub file: String,
    pub crop: Option<Hitbox>,
    /// Proportional rescale target, applied to the original surface.
    pub target_width: Option<i32>,
    pub filter: ScaleFilter,
}

impl SpriteRecipe {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Default::default()
        }
    }

    pub fn with_crop(mut self, x: i32, y: i32, w: i32, h: i32) -> Self {
        self.crop = Some(Hitbox::new(x, y, w, h));
        self
    }

    pub fn with_target_width(mut self, width: i32) -> Self {
        self.target_width = Some(width);
        self
    }

    pub fn with_filter(mut self, filter: ScaleFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Run the full pipeline: load, crop, rescale, build the texture and release
/// the surfaces.
pub fn create_sprite_from_image<U>(
    uploader: &mut U,
    paths: &ResourcePaths,
    recipe: &SpriteRecipe,
) -> Result<Sprite<U::Texture>, GameError>
where
    U: TextureUploader,
{
    let mut sprite = Sprite::new().with_scale_filter(recipe.filter);
    sprite.load_image(paths, &recipe.file)?;
    finish_pipeline(&mut sprite, uploader, recipe)?;
    info!(
        "Created sprite '{}' ({}x{})",
        recipe.file,
        sprite.width(),
        sprite.height()
    );
    Ok(sprite)
}

/// Same as [`create_sprite_from_image`] for a surface that is already in
/// memory; `recipe.file` is only used for logging.
pub fn create_sprite_from_surface<U>(
    uploader: &mut U,
    surface: Surface,
    recipe: &SpriteRecipe,
) -> Result<Sprite<U::Texture>, GameError>
where
    U: TextureUploader,
{
    let mut sprite = Sprite::new().with_scale_filter(recipe.filter);
    sprite.load_surface(surface)?;
    finish_pipeline(&mut sprite, uploader, recipe)?;
    debug!(
        "Created sprite '{}' from surface ({}x{})",
        recipe.file,
        sprite.width(),
        sprite.height()
    );
    Ok(sprite)
}

fn finish_pipeline<U>(
    sprite: &mut Sprite<U::Texture>,
    uploader: &mut U,
    recipe: &SpriteRecipe,
) -> Result<(), GameError>
where
    U: TextureUploader,
{
    if let Some(region) = recipe.crop {
        sprite.crop(region.x, region.y, region.w, region.h)?;
    }
    if let Some(width) = recipe.target_width {
        sprite.rescale_proportional(width)?;
    }
    sprite.build_texture(uploader)?;
    sprite.release_surface()
}
