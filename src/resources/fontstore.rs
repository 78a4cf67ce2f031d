//! Font store resource.
//!
//! A non-send resource that stores loaded fonts keyed by name. Fonts are
//! loaded from `<root>/font/<name>.ttf` and handed out as `Rc` handles to
//! [`Text`](crate::components::text::Text) labels.
//!
//! Note: This is a non-send resource because Raylib fonts must be accessed
//! from the main thread only.

use std::rc::Rc;

use log::{error, info};
use raylib::prelude::{Font, RaylibHandle, RaylibThread};
use rustc_hash::FxHashMap;

use crate::error::GameError;
use crate::resources::resourcepaths::ResourcePaths;

/// Map of font names to loaded fonts.
// NonSend resource: insert with insert_non_send_resource and access via NonSend/NonSendMut
pub struct FontStore<F = Font> {
    fonts: FxHashMap<String, Rc<F>>,
}

impl<F> Default for FontStore<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> FontStore<F> {
    /// Create an empty font store.
    pub fn new() -> Self {
        Self {
            fonts: FxHashMap::default(),
        }
    }

    /// Add a font with the given name, returning the shared handle.
    pub fn add(&mut self, name: impl Into<String>, font: F) -> Rc<F> {
        let font = Rc::new(font);
        self.fonts.insert(name.into(), font.clone());
        font
    }

    /// Get a font by its name.
    pub fn get(&self, name: impl AsRef<str>) -> Option<Rc<F>> {
        self.fonts.get(name.as_ref()).cloned()
    }

    /// Drop the store's handles. Fonts still used by labels stay alive.
    pub fn clear(&mut self) {
        self.fonts.clear();
    }

    /// Get the number of loaded fonts.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl FontStore<Font> {
    /// Load `<root>/font/<name>.ttf`, or return the already loaded handle.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        paths: &ResourcePaths,
        name: &str,
    ) -> Result<Rc<Font>, GameError> {
        if let Some(font) = self.get(name) {
            return Ok(font);
        }
        let path = paths.font(name);
        let font = rl
            .load_font(thread, &path.to_string_lossy())
            .map_err(|e| GameError::load(&path, e))
            .inspect_err(|e| error!("{}", e))?;
        info!("Loaded font '{}' from {}", name, path.display());
        Ok(self.add(name, font))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get_share_handle() {
        let mut store: FontStore<u32> = FontStore::new();
        let handle = store.add("arcade", 7);
        let again = store.get("arcade").unwrap();
        assert!(Rc::ptr_eq(&handle, &again));
        assert!(store.get("missing").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_keeps_outstanding_handles() {
        let mut store: FontStore<String> = FontStore::new();
        let handle = store.add("mono", "glyphs".to_string());
        store.clear();
        assert!(store.is_empty());
        assert_eq!(handle.as_str(), "glyphs");
    }
}
