//! Output stage: turn response planes into displayable RGBA edge maps.
use crate::image::{ImageF32, PixelBuffer, OPAQUE};

/// White where `value >= threshold`, black elsewhere; alpha opaque.
pub fn to_binary_edge_map(values: &ImageF32, threshold: u32) -> PixelBuffer {
    let t = threshold as f32;
    render(values, |v| if v >= t { 255 } else { 0 })
}

/// Continuous rendering of a response plane, clamped to `[0, 255]`.
pub fn to_magnitude_map(values: &ImageF32) -> PixelBuffer {
    render(values, |v| v.round().clamp(0.0, 255.0) as u8)
}

fn render(values: &ImageF32, level: impl Fn(f32) -> u8) -> PixelBuffer {
    let mut pixels = Vec::with_capacity(values.data.len() * 4);
    for &v in &values.data {
        let l = level(v);
        pixels.extend_from_slice(&[l, l, l, OPAQUE]);
    }
    PixelBuffer {
        width: values.w as u32,
        height: values.h as u32,
        pixels,
    }
}
