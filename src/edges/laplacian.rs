//! Second-derivative (Laplacian) response.
//!
//! The kernel is fixed to the 4-neighbour stencil
//! `[[0, 1, 0], [1, -4, 1], [0, 1, 0]]`; the 8-neighbour variant responds
//! roughly twice as strongly and would shift every threshold.
use crate::error::Result;
use crate::filters::{convolve, Kernel2D};
use crate::image::{GrayImage, ImageF32};

const LAPLACIAN_KERNEL: [[f32; 3]; 3] = [[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]];

pub fn laplacian_kernel() -> Kernel2D {
    Kernel2D::from_rows(LAPLACIAN_KERNEL)
}

/// Absolute Laplacian response per pixel.
pub fn laplacian_response(gray: &GrayImage) -> Result<ImageF32> {
    let raw = convolve(gray, &laplacian_kernel(), false)?;
    Ok(raw.map(f32::abs))
}
