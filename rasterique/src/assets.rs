// Copyright 2026 the Rasterique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packaged font assets.

use hashbrown::HashMap;
use peniko::Blob;

/// Fallback source for font bytes bundled with the application.
///
/// When a font name does not resolve to a readable file on disk, the loader
/// consults this store, keyed by the same name. Embedded backends populate
/// it at startup from whatever packaging mechanism the platform provides.
#[derive(Clone, Default, Debug)]
pub struct AssetStore {
    entries: HashMap<Box<str>, Blob<u8>>,
}

impl AssetStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers font bytes under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: &str, data: Blob<u8>) {
        self.entries.insert(name.into(), data);
    }

    /// Returns the bytes registered under `name`.
    ///
    /// The returned blob shares storage with the store; it stays alive even
    /// if the entry is later replaced.
    pub fn get(&self, name: &str) -> Option<Blob<u8>> {
        self.entries.get(name).cloned()
    }

    /// Number of registered assets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no assets are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn insert_and_get() {
        let mut store = AssetStore::new();
        assert!(store.is_empty());
        store.insert("a.ttf", Blob::new(Arc::new(vec![1_u8, 2, 3])));
        assert_eq!(store.len(), 1);
        let blob = store.get("a.ttf").unwrap();
        assert_eq!(blob.as_ref(), &[1, 2, 3]);
        assert!(store.get("b.ttf").is_none());
    }

    #[test]
    fn insert_replaces() {
        let mut store = AssetStore::new();
        store.insert("a.ttf", Blob::new(Arc::new(vec![1_u8])));
        store.insert("a.ttf", Blob::new(Arc::new(vec![2_u8])));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a.ttf").unwrap().as_ref(), &[2]);
    }
}
