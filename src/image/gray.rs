//! Owned 8-bit luminance plane.
use super::traits::ImageView;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Luminance samples in row-major order
    pub data: Vec<u8>,
}

impl GrayImage {
    /// Construct a black plane of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    /// Wrap existing samples. `data.len()` must equal `w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), w * h, "GrayImage data does not match {w}x{h}");
        Self { w, h, data }
    }

    #[inline]
    /// Get the luminance at (x, y).
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.w + x]
    }

    #[inline]
    /// Set the luminance at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.w + x] = v;
    }
}

impl ImageView for GrayImage {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

