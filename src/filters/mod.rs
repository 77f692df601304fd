//! Spatial filtering primitives.
//!
//! - [`Kernel2D`]: small dense weight matrix with an anchor convention shared
//!   by every operator (odd sizes centre, even sizes lean top-left).
//! - [`convolve`]: clamp-to-edge 2D convolution of a single-channel plane.
//! - [`gaussian_blur`]: separable Gaussian smoothing of an RGBA frame, built
//!   on two 1D passes through the same convolution engine.

pub mod convolve;
pub mod gaussian;
pub mod kernel;

pub use convolve::{convolve, convolve_view, PARALLEL_MIN_PIXELS};
pub use gaussian::{gaussian_blur, GaussianFilter, SeparableFilter};
pub use kernel::Kernel2D;
