//! Image gradients (Sobel/Prewitt/Roberts Cross) with magnitude and direction.
//!
//! - Correlates a kernel pair (`X` and `Y`) with the luminance plane through
//!   the clamp-to-edge convolution engine.
//! - Outputs per-pixel `gx`, `gy`, `magnitude = sqrt(gx^2 + gy^2)` and
//!   `direction = atan2(gy, gx)` in radians.
//!
//! Roberts uses 2×2 diagonal kernels anchored at their top-left tap, so its
//! response at `(x, y)` looks at `(x..=x+1, y..=y+1)`.
use crate::error::Result;
use crate::filters::{convolve, Kernel2D};
use crate::image::{GrayImage, ImageF32};
use serde::{Deserialize, Serialize};

type Kernel3 = [[f32; 3]; 3];
type Kernel2 = [[f32; 2]; 2];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

const PREWITT_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0]];
const PREWITT_KERNEL_Y: Kernel3 = [[-1.0, -1.0, -1.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];

const ROBERTS_KERNEL_X: Kernel2 = [[1.0, 0.0], [0.0, -1.0]];
const ROBERTS_KERNEL_Y: Kernel2 = [[0.0, 1.0], [-1.0, 0.0]];

/// First-derivative operators sharing the magnitude/direction rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientOperator {
    Sobel,
    Prewitt,
    Roberts,
}

impl GradientOperator {
    /// The `(X, Y)` kernel pair.
    pub fn kernels(self) -> (Kernel2D, Kernel2D) {
        match self {
            Self::Sobel => (
                Kernel2D::from_rows(SOBEL_KERNEL_X),
                Kernel2D::from_rows(SOBEL_KERNEL_Y),
            ),
            Self::Prewitt => (
                Kernel2D::from_rows(PREWITT_KERNEL_X),
                Kernel2D::from_rows(PREWITT_KERNEL_Y),
            ),
            Self::Roberts => (
                Kernel2D::from_rows(ROBERTS_KERNEL_X),
                Kernel2D::from_rows(ROBERTS_KERNEL_Y),
            ),
        }
    }
}

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct GradientField {
    /// Horizontal derivative (kernel X response)
    pub gx: ImageF32,
    /// Vertical derivative (kernel Y response)
    pub gy: ImageF32,
    /// Euclidean magnitude per pixel: `sqrt(gx^2 + gy^2)`
    pub magnitude: ImageF32,
    /// `atan2(gy, gx)` in radians, range [-π, π]
    pub direction: ImageF32,
}

impl GradientField {
    /// Assemble a field from derivative planes of equal size.
    pub fn from_components(gx: ImageF32, gy: ImageF32) -> Self {
        assert_eq!((gx.w, gx.h), (gy.w, gy.h), "gradient planes differ in size");
        let mut magnitude = ImageF32::new(gx.w, gx.h);
        let mut direction = ImageF32::new(gx.w, gx.h);
        for (i, (&dx, &dy)) in gx.data.iter().zip(gy.data.iter()).enumerate() {
            magnitude.data[i] = (dx * dx + dy * dy).sqrt();
            direction.data[i] = dy.atan2(dx);
        }
        Self {
            gx,
            gy,
            magnitude,
            direction,
        }
    }

    pub fn width(&self) -> usize {
        self.magnitude.w
    }

    pub fn height(&self) -> usize {
        self.magnitude.h
    }
}

/// Compute the gradient field of `gray` with the given operator.
pub fn gradient_field(gray: &GrayImage, operator: GradientOperator) -> Result<GradientField> {
    let (kx, ky) = operator.kernels();
    let gx = convolve(gray, &kx, false)?;
    let gy = convolve(gray, &ky, false)?;
    Ok(GradientField::from_components(gx, gy))
}

/// Compute Sobel gradients on a luminance plane.
pub fn sobel_gradients(gray: &GrayImage) -> Result<GradientField> {
    gradient_field(gray, GradientOperator::Sobel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn step_image(width: usize, height: usize, split_x: usize) -> GrayImage {
        let mut img = GrayImage::new(width, height);
        for y in 0..height {
            for x in split_x..width {
                img.set(x, y, 100);
            }
        }
        img
    }

    #[test]
    fn sobel_vertical_step_points_along_x() {
        let grad = sobel_gradients(&step_image(6, 5, 3)).unwrap();
        assert_eq!(grad.magnitude.get(2, 2), 400.0);
        assert_eq!(grad.magnitude.get(3, 2), 400.0);
        assert_eq!(grad.magnitude.get(0, 2), 0.0);
        assert_eq!(grad.gy.get(2, 2), 0.0);
        assert_eq!(grad.direction.get(2, 2), 0.0);
    }

    #[test]
    fn prewitt_is_weaker_than_sobel_on_a_step() {
        let img = step_image(6, 5, 3);
        let sobel = gradient_field(&img, GradientOperator::Sobel).unwrap();
        let prewitt = gradient_field(&img, GradientOperator::Prewitt).unwrap();
        assert_eq!(prewitt.magnitude.get(2, 2), 300.0);
        assert!(prewitt.magnitude.get(2, 2) < sobel.magnitude.get(2, 2));
    }

    #[test]
    fn roberts_responds_on_the_leading_diagonal_pair() {
        let grad = gradient_field(&step_image(5, 4, 2), GradientOperator::Roberts).unwrap();
        // Only x = 1 straddles the step with its (x, x+1) footprint.
        for y in 0..4 {
            assert_eq!(grad.magnitude.get(0, y), 0.0);
            assert!((grad.magnitude.get(1, y) - 100.0 * 2f32.sqrt()).abs() < 1e-3);
            assert_eq!(grad.magnitude.get(2, y), 0.0);
        }
    }

    #[test]
    fn horizontal_step_direction_is_quarter_turn() {
        let mut img = GrayImage::new(4, 6);
        for y in 3..6 {
            for x in 0..4 {
                img.set(x, y, 50);
            }
        }
        let grad = sobel_gradients(&img).unwrap();
        let dir = grad.direction.get(1, 2);
        assert!((dir - FRAC_PI_2).abs() < 1e-6);
        assert!(grad.direction.data.iter().all(|d| d.abs() <= PI));
    }
}
