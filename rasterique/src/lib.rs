// Copyright 2026 the Rasterique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph rasterization and per-size glyph caching.
//!
//! This crate is the font layer of a rendering backend: it loads TrueType
//! and OpenType font files, rasterizes single glyphs into alpha masks, and
//! memoizes the results per `(font, size)` pair so that repeated text
//! rendering never pays for rasterization twice.
//!
//! The intended flow is to [`register`](FontRegistry::register) fonts with a
//! [`FontRegistry`], then call [`find`](FontRegistry::find) to obtain the
//! [`GlyphCache`] for a font at a pixel size, and finally ask the cache for
//! [`Bytemap`]s, advances, and the font descent.
//!
//! Shaping, kerning, and subpixel rendering are out of scope; the unit of
//! work here is always a single glyph.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod assets;
mod bytemap;
mod cache;
mod registry;
mod source;

pub use peniko::Blob;

pub use assets::AssetStore;
pub use bytemap::{Bytemap, Rgb565aMap, pack_565a};
pub use cache::GlyphCache;
pub use registry::{FontId, FontRegistry};
pub use source::FontSource;
