//! Error types reported by the filter entry points.

use thiserror::Error;

/// Recoverable, per-call failures of the edge filters.
///
/// None of these leave state behind: the filters hold nothing between calls,
/// so a caller can discard the frame and carry on with the next one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error(
        "pixel buffer holds {actual} bytes but {width}x{height} RGBA needs {expected}"
    )]
    Dimension {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error(
        "{kernel_width}x{kernel_height} kernel does not fit a {width}x{height} image"
    )]
    KernelTooLarge {
        kernel_width: usize,
        kernel_height: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid threshold {value}: {detail}")]
    InvalidThreshold { value: u32, detail: &'static str },
}

/// Largest threshold accepted by any filter.
pub const MAX_THRESHOLD: u32 = 255;

/// Reject thresholds outside `[0, 255]`.
pub fn check_threshold(value: u32) -> Result<()> {
    if value > MAX_THRESHOLD {
        return Err(FilterError::InvalidThreshold {
            value,
            detail: "must lie in [0, 255]",
        });
    }
    Ok(())
}

pub type Result<T> = std::result::Result<T, FilterError>;
