//! Message types exchanged across systems.
//!
//! Submodules:
//! - [`audio`] – commands and replies for the background audio thread
pub mod audio;
