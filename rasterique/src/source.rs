// Copyright 2026 the Rasterique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading font files and rasterizing glyphs from them.

use crate::assets::AssetStore;
use crate::bytemap::Bytemap;
use core::fmt;
use peniko::Blob;
use std::sync::{Arc, Mutex, PoisonError};
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::zeno::Format;
use swash::{CacheKey, FontRef, GlyphId};

/// A single loaded TrueType or OpenType font file.
///
/// The file is read fully into memory once; the parsed font handle is a
/// view into that buffer, rebuilt on demand from a stored offset so the
/// source carries no self-references.
///
/// Loading never panics and never returns an error. A source whose file was
/// missing or malformed is a sentinel: [`is_loaded`](Self::is_loaded)
/// returns false and every operation yields empty glyphs and zero metrics.
/// Callers pick a replacement font; this layer stays silent.
pub struct FontSource {
    name: Box<str>,
    font: Option<LoadedFont>,
}

struct LoadedFont {
    data: Blob<u8>,
    offset: u32,
    key: CacheKey,
    // Rasterizer scratch space. Interior mutability keeps rasterization
    // available through `&self` on sources shared via `Arc`.
    scaler: Mutex<ScaleContext>,
}

impl LoadedFont {
    fn new(data: Blob<u8>) -> Option<Self> {
        let font = FontRef::from_index(data.as_ref(), 0)?;
        let (offset, key) = (font.offset, font.key);
        Some(Self {
            data,
            offset,
            key,
            scaler: Mutex::new(ScaleContext::new()),
        })
    }

    // Rebuilding from the stored offset and key skips re-parsing the table
    // directory and keeps the scale context's internal caches warm.
    fn as_font_ref(&self) -> FontRef<'_> {
        FontRef {
            data: self.data.as_ref(),
            offset: self.offset,
            key: self.key,
        }
    }

    fn glyph_id(&self, codepoint: u32) -> GlyphId {
        // Unmapped codepoints resolve to glyph 0 (".notdef"), which renders
        // as the font's fallback shape. Not an error at this layer.
        self.as_font_ref().charmap().map(codepoint)
    }
}

impl FontSource {
    /// Loads the font named `name`.
    ///
    /// `name` is tried as a filesystem path first; if that yields nothing
    /// readable, the packaged `assets` store is consulted under the same
    /// name. The whole file is decoded into an owned buffer. This is a
    /// one-time operation; a source is never reloaded.
    pub fn load(name: &str, assets: &AssetStore) -> Self {
        let font = load_bytes(name, assets).and_then(LoadedFont::new);
        Self {
            name: name.into(),
            font,
        }
    }

    /// Creates a source directly from in-memory font bytes.
    pub fn from_blob(name: &str, data: Blob<u8>) -> Self {
        Self {
            name: name.into(),
            font: LoadedFont::new(data),
        }
    }

    /// The nominal font name this source was loaded under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns false if the font failed to load or parse.
    ///
    /// Check this before first use; a failed source renders empty glyphs
    /// rather than raising.
    pub fn is_loaded(&self) -> bool {
        self.font.is_some()
    }

    /// Renders the glyph for `codepoint` at `size` pixels into a fresh
    /// [`Bytemap`].
    ///
    /// Codepoints the font does not cover produce the font's fallback
    /// glyph. A failed source produces the empty bytemap.
    pub fn rasterize(&self, codepoint: u32, size: u32) -> Bytemap {
        let Some(font) = &self.font else {
            return Bytemap::default();
        };
        let glyph_id = font.glyph_id(codepoint);
        let advance = self.advance(codepoint, size);
        let font_ref = font.as_font_ref();
        let mut context = font.scaler.lock().unwrap_or_else(PoisonError::into_inner);
        let mut scaler = context.builder(font_ref).size(size as f32).hint(true).build();
        let Some(image) = Render::new(&[
            Source::ColorOutline(0),
            Source::ColorBitmap(StrikeWith::BestFit),
            Source::Outline,
        ])
        .format(Format::Alpha)
        .render(&mut scaler, glyph_id) else {
            return Bytemap::empty(advance);
        };
        let placement = image.placement;
        let pixels = (placement.width * placement.height) as usize;
        let data = match image.data.len() {
            // Alpha mask, one byte per pixel.
            len if len == pixels => image.data.into_boxed_slice(),
            // Color or subpixel content comes back RGBA; keep the alpha
            // channel, which is all a bytemap can represent.
            len if len == pixels * 4 => image
                .data
                .chunks_exact(4)
                .map(|px| px[3])
                .collect::<Vec<_>>()
                .into_boxed_slice(),
            _ => return Bytemap::empty(advance),
        };
        Bytemap::new(
            placement.width,
            placement.height,
            placement.left,
            placement.top,
            advance,
            data,
        )
    }

    /// Horizontal advance for `codepoint` at `size` pixels, without
    /// rasterizing.
    pub fn advance(&self, codepoint: u32, size: u32) -> f32 {
        let Some(font) = &self.font else {
            return 0.0;
        };
        let glyph_id = font.glyph_id(codepoint);
        font.as_font_ref()
            .glyph_metrics(&[])
            .scale(size as f32)
            .advance_width(glyph_id)
    }

    /// Font-wide descent in pixels below the baseline at `size` pixels.
    pub fn descent(&self, size: u32) -> i32 {
        let Some(font) = &self.font else {
            return 0;
        };
        let metrics = font.as_font_ref().metrics(&[]);
        if metrics.units_per_em == 0 {
            return 0;
        }
        let scale = size as f32 / f32::from(metrics.units_per_em);
        (metrics.descent * scale).round() as i32
    }
}

impl fmt::Debug for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontSource")
            .field("name", &self.name)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

fn load_bytes(name: &str, assets: &AssetStore) -> Option<Blob<u8>> {
    if let Ok(bytes) = std::fs::read(name) {
        return Some(Blob::new(Arc::new(bytes)));
    }
    assets.get(name)
}
