//! ECS resources made available to systems.
//!
//! Long-lived data injected into the ECS world. Resources that own GPU
//! handles (sprites, fonts, the tileset) are non-send and live on the
//! rendering thread.
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread
//! - `fontstore` – loaded fonts shared by name
//! - `gameconfig` – INI-backed window, resource and player settings
//! - `input` – WASD state of the current frame
//! - `resourcepaths` – where images, fonts and sounds live on disk
//! - `screensize` – current framebuffer dimensions in pixels
//! - `spritestore` – every live sprite in draw order
//! - `tileatlas` – tile sheet offsets, tile layers and the uploaded tileset
pub mod audio;
pub mod fontstore;
pub mod gameconfig;
pub mod input;
pub mod resourcepaths;
pub mod screensize;
pub mod spritestore;
pub mod tileatlas;
