use crate::error::{FilterError, Result};

/// Dense row-major convolution kernel.
///
/// Tap `(i, j)` lands on source pixel `(x + i - ax, y + j - ay)` where
/// `(ax, ay) = anchor()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel2D {
    width: usize,
    height: usize,
    weights: Vec<f32>,
}

impl Kernel2D {
    pub fn from_rows<const W: usize, const H: usize>(rows: [[f32; W]; H]) -> Self {
        assert!(W > 0 && H > 0, "kernel must have at least one tap");
        Self {
            width: W,
            height: H,
            weights: rows.iter().flatten().copied().collect(),
        }
    }

    /// Horizontal `1 × n` kernel.
    pub fn row(taps: &[f32]) -> Self {
        assert!(!taps.is_empty(), "kernel must have at least one tap");
        Self {
            width: taps.len(),
            height: 1,
            weights: taps.to_vec(),
        }
    }

    /// Vertical `n × 1` kernel.
    pub fn column(taps: &[f32]) -> Self {
        assert!(!taps.is_empty(), "kernel must have at least one tap");
        Self {
            width: 1,
            height: taps.len(),
            weights: taps.to_vec(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn taps_row(&self, ky: usize) -> &[f32] {
        let start = ky * self.width;
        &self.weights[start..start + self.width]
    }

    #[inline]
    pub fn anchor(&self) -> (usize, usize) {
        ((self.width - 1) / 2, (self.height - 1) / 2)
    }

    #[inline]
    pub fn radius(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }

    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }

    /// Per axis the kernel needs `2 * radius + 1` pixels of image.
    pub fn check_fits(&self, width: usize, height: usize) -> Result<()> {
        let (rx, ry) = self.radius();
        if 2 * rx + 1 > width || 2 * ry + 1 > height {
            return Err(FilterError::KernelTooLarge {
                kernel_width: self.width,
                kernel_height: self.height,
                width,
                height,
            });
        }
        Ok(())
    }
}
