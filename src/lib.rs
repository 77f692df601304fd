#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;

// Building blocks – public for tooling and tests, less stable.
pub mod edges;
pub mod filters;

// --- High-level re-exports -------------------------------------------------

pub use crate::config::{FilterConfig, Method};
pub use crate::detector::{
    canny, laplacian, prewitt, process, process_traced, roberts, sobel, EdgeBackend, PureBackend,
};
pub use crate::diagnostics::FrameReport;
pub use crate::error::{FilterError, Result};
pub use crate::filters::gaussian_blur;
pub use crate::image::{from_grayscale, to_grayscale, GrayImage, PixelBuffer};

// --- Prelude ---------------------------------------------------------------

/// Everything a frame loop needs.
///
/// ```no_run
/// use edge_detector::prelude::*;
///
/// # fn main() -> Result<(), FilterError> {
/// let frame = PixelBuffer::filled(320, 240, [30, 30, 30, 255]);
/// let edges = sobel(&frame, 60)?;
/// println!("{} edge pixels", edges.count_lit());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::config::{FilterConfig, Method};
    pub use crate::detector::{
        canny, laplacian, prewitt, process, roberts, sobel, EdgeBackend, PureBackend,
    };
    pub use crate::error::FilterError;
    pub use crate::filters::gaussian_blur;
    pub use crate::image::PixelBuffer;
}
