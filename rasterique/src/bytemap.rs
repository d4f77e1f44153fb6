// Copyright 2026 the Rasterique Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel buffers for rendered glyphs.

/// A rendered glyph: a single-channel alpha mask plus placement metrics.
///
/// The buffer holds `stride × height` bytes, one alpha value per pixel.
/// Placement is relative to the glyph origin on the text baseline: `left`
/// is the horizontal offset of the leftmost column and `top` the distance
/// from the baseline up to the first row. `advance` is the horizontal
/// distance to the next glyph's origin.
///
/// The default value is the canonical empty glyph: zero dimensions, zero
/// advance, no pixels. Failed font loads and blank glyphs both produce it.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Bytemap {
    width: u32,
    height: u32,
    stride: u32,
    left: i32,
    top: i32,
    advance: f32,
    data: Box<[u8]>,
}

impl Bytemap {
    pub(crate) fn new(
        width: u32,
        height: u32,
        left: i32,
        top: i32,
        advance: f32,
        data: Box<[u8]>,
    ) -> Self {
        debug_assert_eq!(data.len(), (width * height) as usize, "alpha buffer size");
        Self {
            width,
            height,
            // The rasterizer emits tightly packed rows.
            stride: width,
            left,
            top,
            advance,
            data,
        }
    }

    /// Creates an empty glyph that still advances the pen.
    pub(crate) fn empty(advance: f32) -> Self {
        Self {
            advance,
            ..Self::default()
        }
    }

    /// Width of the mask in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the mask in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row in the underlying buffer.
    ///
    /// Always at least `width`; index pixel `(x, y)` at `y * stride + x`.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Horizontal offset from the glyph origin to the leftmost column.
    pub fn left(&self) -> i32 {
        self.left
    }

    /// Distance from the baseline up to the top row of the mask.
    pub fn top(&self) -> i32 {
        self.top
    }

    /// Horizontal distance to the next glyph's origin, in pixels.
    pub fn advance(&self) -> f32 {
        self.advance
    }

    /// The raw alpha buffer, `stride × height` bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns true if the mask has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Alpha value at `(x, y)`, or 0 outside the mask.
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[(y * self.stride + x) as usize]
    }

    /// Iterates over the pixel rows of the mask, `width` bytes each.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data
            .chunks_exact(self.stride.max(1) as usize)
            .map(|row| &row[..self.width as usize])
    }
}

/// Packs a color and alpha into an interleaved RGB565+A word.
///
/// The RGB565 pixel occupies the upper half of the word, the alpha byte the
/// lowest byte: `rrrrrggg gggbbbbb 00000000 aaaaaaaa`.
pub fn pack_565a(r: u8, g: u8, b: u8, a: u8) -> u32 {
    let rgb =
        ((u32::from(r) << 8) & 0xF800) | ((u32::from(g) << 3) & 0x07E0) | (u32::from(b) >> 3);
    (rgb << 16) | u32::from(a)
}

/// An interleaved RGB565 + alpha pixel map.
///
/// One `u32` word per pixel in the [`pack_565a`] layout. Produced by
/// tinting a [`Bytemap`] with a solid color so the compositor can blit
/// glyphs directly into 16-bit screen memory.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Rgb565aMap {
    width: u32,
    height: u32,
    left: i32,
    top: i32,
    words: Box<[u32]>,
}

impl Rgb565aMap {
    /// Tints an alpha mask with a solid color.
    ///
    /// Placement offsets carry over unchanged; the mask's alpha becomes the
    /// per-pixel alpha of the result.
    pub fn from_bytemap(mask: &Bytemap, r: u8, g: u8, b: u8) -> Self {
        let mut words = Vec::with_capacity((mask.width() * mask.height()) as usize);
        for row in mask.rows() {
            for &alpha in row {
                words.push(pack_565a(r, g, b, alpha));
            }
        }
        Self {
            width: mask.width(),
            height: mask.height(),
            left: mask.left(),
            top: mask.top(),
            words: words.into_boxed_slice(),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Horizontal offset from the glyph origin to the leftmost column.
    pub fn left(&self) -> i32 {
        self.left
    }

    /// Distance from the baseline up to the top row.
    pub fn top(&self) -> i32 {
        self.top
    }

    /// The pixel words, row-major, one per pixel.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Returns true if the map has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
