//! Sprite store resource.
//!
//! Holds every live [`Sprite`] in draw order under a string key. Sprites own
//! GPU textures and CPU surfaces, so this is a non-send resource: insert it
//! with `insert_non_send_resource` and access it via `NonSend`/`NonSendMut`.

use log::debug;

use crate::sprite::Sprite;

/// A stored sprite and how it is driven.
pub struct SpriteEntry<T> {
    pub key: String,
    pub sprite: Sprite<T>,
    /// Moment comes from the WASD controller each frame.
    pub input_controlled: bool,
}

pub struct SpriteStore<T> {
    entries: Vec<SpriteEntry<T>>,
}

impl<T> Default for SpriteStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SpriteStore<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace `key`. A replaced sprite is dropped, releasing its
    /// texture; a new key is drawn after all existing ones.
    pub fn insert(&mut self, key: impl Into<String>, sprite: Sprite<T>) {
        self.insert_entry(key.into(), sprite, false);
    }

    /// Insert a sprite whose moment follows the player's input.
    pub fn insert_controlled(&mut self, key: impl Into<String>, sprite: Sprite<T>) {
        self.insert_entry(key.into(), sprite, true);
    }

    fn insert_entry(&mut self, key: String, sprite: Sprite<T>, input_controlled: bool) {
        debug!("SpriteStore insert '{}' (controlled={})", key, input_controlled);
        let entry = SpriteEntry {
            key,
            sprite,
            input_controlled,
        };
        match self.entries.iter_mut().find(|e| e.key == entry.key) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Sprite<T>> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.sprite)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Sprite<T>> {
        self.entries
            .iter_mut()
            .find(|e| e.key == key)
            .map(|e| &mut e.sprite)
    }

    /// Remove and return the sprite under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Sprite<T>> {
        let index = self.entries.iter().position(|e| e.key == key)?;
        Some(self.entries.remove(index).sprite)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpriteEntry<T>> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SpriteEntry<T>> {
        self.entries.iter_mut()
    }

    /// Destroy and drop every sprite.
    pub fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.sprite.destroy();
        }
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut store: SpriteStore<()> = SpriteStore::new();
        store.insert("a", Sprite::new());
        store.insert_controlled("b", Sprite::new());
        let mut moved = Sprite::new();
        moved.set_position(7, 7);
        store.insert("a", moved);

        let keys: Vec<_> = store.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(store.get("a").unwrap().x(), 7);
        assert!(store.iter().nth(1).unwrap().input_controlled);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store: SpriteStore<()> = SpriteStore::new();
        store.insert("a", Sprite::new());
        store.insert("b", Sprite::new());
        assert!(store.remove("a").is_some());
        assert!(store.remove("a").is_none());
        store.clear();
        assert!(store.is_empty());
    }
}
