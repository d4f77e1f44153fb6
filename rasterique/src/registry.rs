// Copyright 2026 the Rasterique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry of fonts and their per-size glyph caches.

use crate::assets::AssetStore;
use crate::cache::GlyphCache;
use crate::source::FontSource;
use core::fmt;
use hashbrown::HashMap;
use peniko::Blob;
use std::sync::{Arc, Mutex, OnceLock};

/// Identifier for a registered font.
///
/// Stable for the lifetime of the registry that issued it; registering the
/// same name twice returns the same id.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct FontId(u32);

impl FontId {
    /// Returns the underlying integer value.
    pub fn to_u32(self) -> u32 {
        self.0
    }
}

struct FontEntry {
    name: Box<str>,
    // Created lazily by the first `find` for this font.
    source: Option<Arc<FontSource>>,
}

/// Owns every font source and every per-size glyph cache.
///
/// This is the only construction path for [`GlyphCache`]s: rendering code
/// registers fonts by name and calls [`find`](Self::find) with a pixel
/// size. Sources load lazily on first use and are shared by all caches for
/// the same font.
///
/// A registry is a plain value for single-threaded use; hosts with more
/// than one rendering thread go through [`global`](Self::global), where the
/// mutex makes lookup-or-create atomic.
#[derive(Default)]
pub struct FontRegistry {
    fonts: Vec<FontEntry>,
    caches: HashMap<(FontId, u32), GlyphCache>,
    assets: AssetStore,
}

impl FontRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, created on first use.
    ///
    /// Lives until process exit; call [`clear`](Self::clear) under the lock
    /// for an explicit teardown at toolkit shutdown.
    pub fn global() -> &'static Mutex<Self> {
        static GLOBAL: OnceLock<Mutex<FontRegistry>> = OnceLock::new();
        GLOBAL.get_or_init(|| Mutex::new(Self::new()))
    }

    /// Registers a font under `name` and returns its id.
    ///
    /// The name doubles as the load location: it is tried as a filesystem
    /// path first and as a packaged-asset key second. Nothing is loaded
    /// until the first [`find`](Self::find). Registering a name that is
    /// already present returns the existing id.
    pub fn register(&mut self, name: &str) -> FontId {
        if let Some(index) = self.fonts.iter().position(|font| &*font.name == name) {
            return FontId(index as u32);
        }
        self.fonts.push(FontEntry {
            name: name.into(),
            source: None,
        });
        FontId((self.fonts.len() - 1) as u32)
    }

    /// Registers in-memory font bytes as a packaged asset under `name` and
    /// returns the font id for that name.
    pub fn register_asset(&mut self, name: &str, data: Blob<u8>) -> FontId {
        self.assets.insert(name, data);
        self.register(name)
    }

    /// Returns the glyph cache for `font` at `size` pixels, creating it on
    /// first request.
    ///
    /// Calling this twice with the same arguments returns the same cache
    /// instance. Returns `None` only for an id this registry never issued;
    /// a font that failed to load still gets a cache, one that renders
    /// empty glyphs (check [`FontSource::is_loaded`] via
    /// [`GlyphCache::source`]).
    pub fn find(&mut self, font: FontId, size: u32) -> Option<&mut GlyphCache> {
        let source = self.ensure_source(font)?;
        Some(
            self.caches
                .entry((font, size))
                .or_insert_with(|| GlyphCache::new(source, size)),
        )
    }

    /// Returns the source for `font`, loading it if necessary.
    pub fn source(&mut self, font: FontId) -> Option<Arc<FontSource>> {
        self.ensure_source(font)
    }

    /// Number of registered fonts.
    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    /// Drops every glyph cache, keeping fonts and assets registered.
    pub fn clear_caches(&mut self) {
        self.caches.clear();
    }

    /// Explicit teardown: drops all caches, fonts, and assets.
    ///
    /// Previously issued [`FontId`]s are invalid afterwards.
    pub fn clear(&mut self) {
        self.caches.clear();
        self.fonts.clear();
        self.assets = AssetStore::new();
    }

    fn ensure_source(&mut self, font: FontId) -> Option<Arc<FontSource>> {
        let entry = self.fonts.get_mut(font.0 as usize)?;
        if entry.source.is_none() {
            entry.source = Some(Arc::new(FontSource::load(&entry.name, &self.assets)));
        }
        entry.source.clone()
    }
}

impl fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontRegistry")
            .field("fonts", &self.fonts.len())
            .field("caches", &self.caches.len())
            .field("assets", &self.assets.len())
            .finish()
    }
}
