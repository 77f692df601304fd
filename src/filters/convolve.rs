//! Clamp-to-edge 2D convolution.
//!
//! Out-of-bounds taps replicate the nearest edge sample, so flat regions stay
//! flat right up to the border. Rows are independent: large images are split
//! across the rayon pool, smaller ones stay on the calling thread. Both paths
//! run the same per-row routine, so the output is identical either way.
use super::kernel::Kernel2D;
use crate::error::Result;
use crate::image::traits::clamp_index;
use crate::image::{GrayImage, ImageF32, ImageView};
use rayon::prelude::*;

/// Images with at least this many pixels are convolved row-parallel.
pub const PARALLEL_MIN_PIXELS: usize = 1 << 16;

/// Convolve a luminance plane.
///
/// With `normalize` the kernel is taken to sum to 1 and the response is
/// clamped to `[0, 255]`; without it raw sums are returned as-is.
pub fn convolve(gray: &GrayImage, kernel: &Kernel2D, normalize: bool) -> Result<ImageF32> {
    convolve_view(gray, kernel, normalize)
}

/// Convolve any single-channel view whose samples widen to `f32`.
pub fn convolve_view<I>(src: &I, kernel: &Kernel2D, normalize: bool) -> Result<ImageF32>
where
    I: ImageView + Sync,
    I::Pixel: Into<f32>,
{
    let parallel = src.width() * src.height() >= PARALLEL_MIN_PIXELS;
    convolve_with(src, kernel, normalize, parallel)
}

pub(crate) fn convolve_with<I>(
    src: &I,
    kernel: &Kernel2D,
    normalize: bool,
    parallel: bool,
) -> Result<ImageF32>
where
    I: ImageView + Sync,
    I::Pixel: Into<f32>,
{
    let w = src.width();
    let h = src.height();
    kernel.check_fits(w, h)?;
    debug_assert!(
        !normalize || (kernel.sum() - 1.0).abs() < 1e-3,
        "normalized convolution expects unit-sum weights, got {}",
        kernel.sum()
    );

    let mut out = ImageF32::new(w, h);
    let run_row = |y: usize, dst: &mut [f32]| convolve_row(src, kernel, normalize, y, dst);
    if parallel {
        out.data
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, dst)| run_row(y, dst));
    } else {
        out.data
            .chunks_mut(w)
            .enumerate()
            .for_each(|(y, dst)| run_row(y, dst));
    }
    Ok(out)
}

fn convolve_row<I>(src: &I, kernel: &Kernel2D, normalize: bool, y: usize, dst: &mut [f32])
where
    I: ImageView,
    I::Pixel: Into<f32>,
{
    let w = src.width();
    let h = src.height();
    let (ax, ay) = kernel.anchor();
    let rows: Vec<&[I::Pixel]> = (0..kernel.height())
        .map(|ky| src.row(clamp_index(y as isize + ky as isize - ay as isize, h)))
        .collect();

    for (x, out) in dst.iter_mut().enumerate() {
        let mut acc = 0.0f32;
        for (ky, row) in rows.iter().enumerate() {
            for (kx, &tap) in kernel.taps_row(ky).iter().enumerate() {
                let sx = clamp_index(x as isize + kx as isize - ax as isize, w);
                acc += tap * row[sx].into();
            }
        }
        *out = if normalize { acc.clamp(0.0, 255.0) } else { acc };
    }
}
