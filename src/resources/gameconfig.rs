//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 60
//! vsync = true
//! title = tileworks
//!
//! [resources]
//! root = resources
//! scale_filter = nearest
//!
//! [player]
//! image = player.png
//! crop_x = 0
//! crop_y = 0
//! crop_w = 0
//! crop_h = 0
//! width = 0
//! speed = 4
//! moment_min = -4
//! moment_max = 4
//! ```
//!
//! A crop with zero width or height and a zero `width` mean "no crop" and
//! "keep the image size".

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::error::GameError;
use crate::resources::resourcepaths::{DEFAULT_RESOURCE_ROOT, ResourcePaths};
use crate::sprite::{ScaleFilter, SpriteRecipe};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_TITLE: &str = "tileworks";
const DEFAULT_PLAYER_IMAGE: &str = "player.png";
const DEFAULT_PLAYER_SPEED: i32 = 4;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    pub title: String,
    /// Asset root directory.
    pub resource_root: PathBuf,
    pub scale_filter: ScaleFilter,
    /// Player image under `<root>/img/`.
    pub player_image: String,
    /// Player crop region as (x, y, w, h); all zero disables cropping.
    pub player_crop: (i32, i32, i32, i32),
    /// Proportional rescale width for the player; 0 keeps the image width.
    pub player_width: i32,
    pub player_speed: i32,
    pub moment_min: i32,
    pub moment_max: i32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            title: DEFAULT_TITLE.to_string(),
            resource_root: PathBuf::from(DEFAULT_RESOURCE_ROOT),
            scale_filter: ScaleFilter::default(),
            player_image: DEFAULT_PLAYER_IMAGE.to_string(),
            player_crop: (0, 0, 0, 0),
            player_width: 0,
            player_speed: DEFAULT_PLAYER_SPEED,
            moment_min: -DEFAULT_PLAYER_SPEED,
            moment_max: DEFAULT_PLAYER_SPEED,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), GameError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| GameError::Config(format!("Failed to load config file: {}", e)))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [resources] section
        if let Some(root) = config.get("resources", "root") {
            self.resource_root = PathBuf::from(root);
        }
        if let Some(filter) = config.get("resources", "scale_filter") {
            match filter.to_ascii_lowercase().as_str() {
                "nearest" => self.scale_filter = ScaleFilter::Nearest,
                "smooth" => self.scale_filter = ScaleFilter::Smooth,
                other => warn!("Unknown scale_filter '{}', keeping {:?}", other, self.scale_filter),
            }
        }

        // [player] section
        if let Some(image) = config.get("player", "image") {
            self.player_image = image;
        }
        let int = |key: &str| config.getint("player", key).ok().flatten().map(|v| v as i32);
        let (mut cx, mut cy, mut cw, mut ch) = self.player_crop;
        if let Some(v) = int("crop_x") {
            cx = v;
        }
        if let Some(v) = int("crop_y") {
            cy = v;
        }
        if let Some(v) = int("crop_w") {
            cw = v;
        }
        if let Some(v) = int("crop_h") {
            ch = v;
        }
        self.player_crop = (cx, cy, cw, ch);
        if let Some(v) = int("width") {
            self.player_width = v;
        }
        if let Some(v) = int("speed") {
            self.player_speed = v;
        }
        if let Some(v) = int("moment_min") {
            self.moment_min = v;
        }
        if let Some(v) = int("moment_max") {
            self.moment_max = v;
        }
        if self.moment_min > self.moment_max {
            warn!(
                "moment_min {} is above moment_max {}, swapping",
                self.moment_min, self.moment_max
            );
            std::mem::swap(&mut self.moment_min, &mut self.moment_max);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, root={:?}, player='{}'",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.resource_root,
            self.player_image
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), GameError> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "title", Some(self.title.clone()));

        // [resources] section
        config.set(
            "resources",
            "root",
            Some(self.resource_root.to_string_lossy().into_owned()),
        );
        let filter = match self.scale_filter {
            ScaleFilter::Nearest => "nearest",
            ScaleFilter::Smooth => "smooth",
        };
        config.set("resources", "scale_filter", Some(filter.to_string()));

        // [player] section
        let (cx, cy, cw, ch) = self.player_crop;
        config.set("player", "image", Some(self.player_image.clone()));
        config.set("player", "crop_x", Some(cx.to_string()));
        config.set("player", "crop_y", Some(cy.to_string()));
        config.set("player", "crop_w", Some(cw.to_string()));
        config.set("player", "crop_h", Some(ch.to_string()));
        config.set("player", "width", Some(self.player_width.to_string()));
        config.set("player", "speed", Some(self.player_speed.to_string()));
        config.set("player", "moment_min", Some(self.moment_min.to_string()));
        config.set("player", "moment_max", Some(self.moment_max.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| GameError::Config(format!("Failed to save config file: {}", e)))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    pub fn resource_paths(&self) -> ResourcePaths {
        ResourcePaths::new(&self.resource_root)
    }

    /// Pipeline steps for the player sprite.
    pub fn player_recipe(&self) -> SpriteRecipe {
        let mut recipe =
            SpriteRecipe::new(self.player_image.clone()).with_filter(self.scale_filter);
        let (x, y, w, h) = self.player_crop;
        if w != 0 && h != 0 {
            recipe = recipe.with_crop(x, y, w, h);
        }
        if self.player_width != 0 {
            recipe = recipe.with_target_width(self.player_width);
        }
        recipe
    }
}
