//! Caller-owned RGBA frame buffer and luminance conversions.
//!
//! Frames arrive from the capture layer as interleaved `r, g, b, a` bytes.
//! The filters only ever borrow a `PixelBuffer` and hand back a fresh one, so
//! the same input allocation can be reused frame after frame.
use super::{GrayImage, ImageF32};
use crate::error::{FilterError, Result};
use serde::{Deserialize, Serialize};

/// Alpha value written into every output pixel.
pub const OPAQUE: u8 = 255;

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Interleaved 8-bit RGBA image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes, row-major
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Build a buffer, checking the RGBA length invariant.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let buf = Self {
            width,
            height,
            pixels,
        };
        buf.validate()?;
        Ok(buf)
    }

    /// A buffer filled with a single RGBA colour.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * 4);
        for _ in 0..count {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn w(&self) -> usize {
        self.width as usize
    }

    #[inline]
    pub fn h(&self) -> usize {
        self.height as usize
    }

    #[inline]
    pub fn expected_len(&self) -> usize {
        self.w() * self.h() * 4
    }

    /// Fails with [`FilterError::Dimension`] when the byte count does not match
    /// the declared size.
    pub fn validate(&self) -> Result<()> {
        let expected = self.expected_len();
        if self.pixels.len() != expected {
            return Err(FilterError::Dimension {
                width: self.width,
                height: self.height,
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.w() + x) * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let i = (y * self.w() + x) * 4;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }

    /// Split one colour channel (0 = R … 3 = A) into a float plane.
    pub fn channel_plane(&self, channel: usize) -> ImageF32 {
        debug_assert!(channel < 4);
        let data = self
            .pixels
            .chunks_exact(4)
            .map(|px| px[channel] as f32)
            .collect();
        ImageF32::from_vec(self.w(), self.h(), data)
    }

    /// Number of pixels whose red channel is non-zero. On edge maps every
    /// edge pixel is white, so this is the edge count.
    pub fn count_lit(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|px| px[0] != 0).count()
    }
}

#[inline]
fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let y = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    y.round().clamp(0.0, 255.0) as u8
}

/// Convert an RGBA frame to 8-bit luminance (`0.299 R + 0.587 G + 0.114 B`).
pub fn to_grayscale(buf: &PixelBuffer) -> Result<GrayImage> {
    buf.validate()?;
    let data = buf
        .pixels
        .chunks_exact(4)
        .map(|px| luminance(px[0], px[1], px[2]))
        .collect();
    Ok(GrayImage::from_vec(buf.w(), buf.h(), data))
}

/// Replicate a luminance plane into R, G and B with the given alpha.
pub fn from_grayscale(gray: &GrayImage, fill_alpha: u8) -> PixelBuffer {
    let mut pixels = Vec::with_capacity(gray.data.len() * 4);
    for &v in &gray.data {
        pixels.extend_from_slice(&[v, v, v, fill_alpha]);
    }
    PixelBuffer {
        width: gray.w as u32,
        height: gray.h as u32,
        pixels,
    }
}
