// Copyright 2026 the Rasterique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-size memoization of rasterized glyphs.

use crate::bytemap::Bytemap;
use crate::source::FontSource;
use core::fmt;
use hashbrown::HashMap;
use std::sync::Arc;

/// Rendered glyphs of one font at one fixed pixel size.
///
/// The cache is the single owner of every bytemap it hands out: a given
/// codepoint is rasterized at most once per cache, and the returned
/// reference stays valid for as long as the borrow (the bytemap itself for
/// as long as the cache, unless [`clear`](Self::clear) drops it).
///
/// Caches are only created through [`FontRegistry::find`], never directly
/// by rendering code.
///
/// [`FontRegistry::find`]: crate::FontRegistry::find
pub struct GlyphCache {
    source: Arc<FontSource>,
    size: u32,
    glyphs: HashMap<u32, Bytemap>,
}

impl GlyphCache {
    pub(crate) fn new(source: Arc<FontSource>, size: u32) -> Self {
        Self {
            source,
            size,
            glyphs: HashMap::default(),
        }
    }

    /// The font this cache renders from.
    pub fn source(&self) -> &Arc<FontSource> {
        &self.source
    }

    /// The fixed pixel size of this cache.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the rendered glyph for `codepoint`, rasterizing on first
    /// request and serving the cached bytemap afterwards.
    pub fn bytemap(&mut self, codepoint: u32) -> &Bytemap {
        self.glyphs
            .entry(codepoint)
            .or_insert_with(|| self.source.rasterize(codepoint, self.size))
    }

    /// Horizontal advance for `codepoint` at this cache's size.
    ///
    /// Delegates to the font source; advances are cheap enough to recompute
    /// that memoizing them would not pay for the storage.
    pub fn advance(&self, codepoint: u32) -> f32 {
        self.source.advance(codepoint, self.size)
    }

    /// Font descent in pixels below the baseline at this cache's size.
    pub fn descent(&self) -> i32 {
        self.source.descent(self.size)
    }

    /// Number of glyphs currently cached.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns true if no glyphs have been rasterized yet.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Drops every cached bytemap, keeping the font and size binding.
    pub fn clear(&mut self) {
        self.glyphs.clear();
    }
}

impl fmt::Debug for GlyphCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphCache")
            .field("font", &self.source.name())
            .field("size", &self.size)
            .field("glyphs", &self.glyphs.len())
            .finish()
    }
}
