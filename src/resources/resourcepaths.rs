//! On-disk asset layout.
//!
//! Assets live under a single root (default `resources`, relative to the
//! working directory):
//!
//! ```text
//! <root>/img/<file>
//! <root>/font/<name>.ttf
//! <root>/audio/<name>.wav
//! ```

use std::path::{Path, PathBuf};

use bevy_ecs::prelude::Resource;

pub const DEFAULT_RESOURCE_ROOT: &str = "resources";

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    root: PathBuf,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self::new(DEFAULT_RESOURCE_ROOT)
    }
}

impl ResourcePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn image(&self, file: &str) -> PathBuf {
        self.root.join("img").join(file)
    }

    pub fn font(&self, name: &str) -> PathBuf {
        self.root.join("font").join(format!("{}.ttf", name))
    }

    pub fn audio(&self, name: &str) -> PathBuf {
        self.root.join("audio").join(format!("{}.wav", name))
    }
}
