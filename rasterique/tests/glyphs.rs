// Copyright 2026 the Rasterique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end rasterization tests against a font borrowed from the host.
//!
//! Every test skips (with a note on stderr) when the host has no usable
//! font installed, so the suite stays green in bare environments.

use rasterique::{FontId, FontRegistry};

/// Registers a host font that covers basic Latin, or returns `None`.
///
/// Icon and emoji fonts may not map 'A' at all, so candidates are probed
/// until one reports a positive advance and descent.
fn host_font(registry: &mut FontRegistry) -> Option<FontId> {
    for path in rasterique_dev::system_fonts(32) {
        let font = registry.register(&path.to_string_lossy());
        let cache = registry.find(font, 16)?;
        if cache.source().is_loaded() && cache.advance('A' as u32) > 0.0 && cache.descent() > 0 {
            return Some(font);
        }
    }
    eprintln!("no usable host font found; skipping");
    None
}

#[test]
fn rasterizes_basic_latin() {
    let mut registry = FontRegistry::new();
    let Some(font) = host_font(&mut registry) else {
        return;
    };
    let cache = registry.find(font, 16).unwrap();
    let bytemap = cache.bytemap('A' as u32);
    assert!(bytemap.width() > 0);
    assert!(bytemap.height() > 0);
    assert!(bytemap.advance() > 0.0);
    assert_eq!(
        bytemap.data().len(),
        (bytemap.stride() * bytemap.height()) as usize
    );
    // Something must actually be inked.
    assert!(bytemap.data().iter().any(|&alpha| alpha > 0));
}

#[test]
fn repeated_requests_are_identical() {
    let mut registry = FontRegistry::new();
    let Some(font) = host_font(&mut registry) else {
        return;
    };
    let cache = registry.find(font, 16).unwrap();
    let first = cache.bytemap('g' as u32).clone();
    let second = cache.bytemap('g' as u32);
    assert_eq!(&first, second);
    // Both requests were served by one cache entry.
    let cached = cache.len();
    cache.bytemap('g' as u32);
    assert_eq!(cache.len(), cached);
}

#[test]
fn missing_glyph_is_well_formed() {
    let mut registry = FontRegistry::new();
    let Some(font) = host_font(&mut registry) else {
        return;
    };
    let cache = registry.find(font, 16).unwrap();
    // Private use plane codepoint that no ordinary text font maps; the
    // fallback glyph must still be a well-formed bytemap.
    let bytemap = cache.bytemap(0x10FF00);
    assert_eq!(
        bytemap.data().len(),
        (bytemap.stride() * bytemap.height()) as usize
    );
}

#[test]
fn descent_scales_with_size() {
    let mut registry = FontRegistry::new();
    let Some(font) = host_font(&mut registry) else {
        return;
    };
    let small = registry.find(font, 16).unwrap().descent();
    let large = registry.find(font, 32).unwrap().descent();
    assert!(small > 0);
    // Linear metric scaled at two sizes; allow one pixel of rounding per
    // endpoint.
    assert!((large - 2 * small).abs() <= 2, "{large} vs 2*{small}");
}

#[test]
fn advance_matches_rasterized_advance() {
    let mut registry = FontRegistry::new();
    let Some(font) = host_font(&mut registry) else {
        return;
    };
    let cache = registry.find(font, 24).unwrap();
    let advance = cache.advance('m' as u32);
    let bytemap = cache.bytemap('m' as u32);
    assert_eq!(bytemap.advance(), advance);
}

#[test]
fn asset_registered_bytes_load() {
    let Some(path) = rasterique_dev::system_font() else {
        eprintln!("no host font found; skipping");
        return;
    };
    let bytes = std::fs::read(&path).unwrap();
    let mut registry = FontRegistry::new();
    // A name that is not a readable path, so loading must take the asset
    // fallback route.
    let blob = rasterique::Blob::new(std::sync::Arc::new(bytes));
    let font = registry.register_asset("bundled:default", blob);
    let cache = registry.find(font, 16).unwrap();
    assert!(cache.source().is_loaded());
}
