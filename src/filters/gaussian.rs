//! Separable Gaussian smoothing of RGBA frames.
//!
//! The blur amount is used directly as the kernel radius; the kernel has
//! `2 * radius + 1` taps with `sigma = max(radius / 2, 0.8)`. Each colour
//! channel runs a horizontal then a vertical pass in `f32` and is rounded back
//! to 8 bits once. Alpha passes through untouched.
use super::convolve::convolve_view;
use super::kernel::Kernel2D;
use crate::config::max_blur_amount;
use crate::error::{FilterError, Result};
use crate::image::PixelBuffer;

const MIN_SIGMA: f32 = 0.8;

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps in left-to-right order.
    fn taps(&self) -> &[f32];
}

/// Normalised 1D Gaussian.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianFilter {
    radius: usize,
    sigma: f32,
    taps: Vec<f32>,
}

impl GaussianFilter {
    pub fn with_radius(radius: usize) -> Self {
        let radius = radius.max(1);
        let sigma = (radius as f32 / 2.0).max(MIN_SIGMA);
        let denom = 2.0 * sigma * sigma;
        let mut taps: Vec<f32> = (0..=2 * radius)
            .map(|i| {
                let d = i as f32 - radius as f32;
                (-(d * d) / denom).exp()
            })
            .collect();
        let sum: f32 = taps.iter().sum();
        for t in &mut taps {
            *t /= sum;
        }
        Self {
            radius,
            sigma,
            taps,
        }
    }

    /// Map a user-facing blur amount onto a filter (`radius = amount`, at least 1).
    pub fn from_amount(amount: u32) -> Self {
        Self::with_radius(amount as usize)
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    pub fn sigma(&self) -> f32 {
        self.sigma
    }
}

impl SeparableFilter for GaussianFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}

/// Blur an RGBA frame. `amount == 0` returns an unmodified copy.
pub fn gaussian_blur(image: &PixelBuffer, amount: u32) -> Result<PixelBuffer> {
    image.validate()?;
    if amount == 0 {
        return Ok(image.clone());
    }
    // Reject before the taps are allocated.
    if amount > max_blur_amount(image.width, image.height) {
        let taps = (amount as usize).saturating_mul(2).saturating_add(1);
        return Err(FilterError::KernelTooLarge {
            kernel_width: taps,
            kernel_height: taps,
            width: image.w(),
            height: image.h(),
        });
    }
    blur_with(image, &GaussianFilter::from_amount(amount))
}

/// Apply any separable filter to the R, G and B channels of `image`.
pub fn blur_with<F: SeparableFilter + ?Sized>(
    image: &PixelBuffer,
    filter: &F,
) -> Result<PixelBuffer> {
    image.validate()?;
    let horizontal = Kernel2D::row(filter.taps());
    let vertical = Kernel2D::column(filter.taps());
    horizontal.check_fits(image.w(), image.h())?;
    vertical.check_fits(image.w(), image.h())?;

    let mut out = image.clone();
    for channel in 0..3 {
        let plane = image.channel_plane(channel);
        let tmp = convolve_view(&plane, &horizontal, true)?;
        let blurred = convolve_view(&tmp, &vertical, true)?;
        for (px, v) in out.pixels.chunks_exact_mut(4).zip(blurred.data) {
            px[channel] = v.round().clamp(0.0, 255.0) as u8;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taps_are_normalised_and_symmetric() {
        for radius in 1..6 {
            let f = GaussianFilter::with_radius(radius);
            let taps = f.taps();
            assert_eq!(taps.len(), 2 * radius + 1);
            let sum: f32 = taps.iter().sum();
            assert!((sum - 1.0).abs() < 1e-5, "radius {radius} sums to {sum}");
            for i in 0..taps.len() / 2 {
                assert!((taps[i] - taps[taps.len() - 1 - i]).abs() < 1e-7);
            }
            assert!(taps[radius] >= taps[0]);
        }
    }

    #[test]
    fn small_radius_uses_sigma_floor() {
        assert_eq!(GaussianFilter::with_radius(1).sigma(), 0.8);
        assert_eq!(GaussianFilter::with_radius(4).sigma(), 2.0);
    }

    #[test]
    fn uniform_frame_is_unchanged() {
        let img = PixelBuffer::filled(9, 7, [40, 120, 200, 255]);
        let out = gaussian_blur(&img, 3).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn zero_amount_is_a_copy() {
        let img = PixelBuffer::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(gaussian_blur(&img, 0).unwrap(), img);
    }

    #[test]
    fn spreads_a_single_bright_pixel() {
        let mut img = PixelBuffer::filled(5, 5, [0, 0, 0, 255]);
        img.set_pixel(2, 2, [255, 255, 255, 255]);
        let out = gaussian_blur(&img, 1).unwrap();
        let centre = out.pixel(2, 2)[0];
        let side = out.pixel(3, 2)[0];
        let corner = out.pixel(3, 3)[0];
        assert!(centre > side && side > corner && corner > 0);
        assert_eq!(out.pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(out.pixel(3, 3)[3], 255);
    }

    #[test]
    fn alpha_is_not_blurred() {
        let mut img = PixelBuffer::filled(3, 3, [10, 10, 10, 0]);
        img.set_pixel(1, 1, [10, 10, 10, 255]);
        let out = gaussian_blur(&img, 1).unwrap();
        assert_eq!(out.pixel(0, 0)[3], 0);
        assert_eq!(out.pixel(1, 1)[3], 255);
    }

    #[test]
    fn rejects_radius_wider_than_frame() {
        let img = PixelBuffer::filled(4, 8, [0, 0, 0, 255]);
        assert!(matches!(
            gaussian_blur(&img, 2),
            Err(FilterError::KernelTooLarge { width: 4, height: 8, .. })
        ));
        assert!(gaussian_blur(&img, 1).is_ok());
    }

    #[test]
    fn huge_amount_fails_without_building_taps() {
        let img = PixelBuffer::filled(4, 4, [9, 9, 9, 255]);
        let err = gaussian_blur(&img, u32::MAX).unwrap_err();
        assert!(matches!(
            err,
            FilterError::KernelTooLarge { width: 4, height: 4, kernel_width, .. }
                if kernel_width > 4
        ));
        let empty = PixelBuffer::new(0, 0, Vec::new()).unwrap();
        assert!(matches!(
            gaussian_blur(&empty, 1),
            Err(FilterError::KernelTooLarge { .. })
        ));
    }

    #[test]
    fn largest_fitting_amount_is_accepted() {
        let img = PixelBuffer::filled(9, 7, [30, 60, 90, 255]);
        assert_eq!(max_blur_amount(9, 7), 3);
        assert!(gaussian_blur(&img, 3).is_ok());
        assert!(matches!(
            gaussian_blur(&img, 4),
            Err(FilterError::KernelTooLarge { kernel_width: 9, kernel_height: 9, .. })
        ));
    }
}
