//! Plain data types attached to sprites and UI widgets.
//!
//! Submodules overview:
//! - [`hitbox`] – integer screen rectangle, bounds checks and clamping
//! - [`moment`] – per-frame displacement and its per-axis limits
//! - [`rect`] – filled rectangles with borders and keyed groups of them
//! - [`rotation`] – rotation angle and pivot, mapped to draw placement
//! - [`text`] – measured text labels and keyed paragraphs

pub mod hitbox;
pub mod moment;
pub mod rect;
pub mod rotation;
pub mod text;
