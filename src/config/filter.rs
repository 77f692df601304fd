//! Per-frame filter selection.
//!
//! A [`FilterConfig`] is built by the driver (usually from UI controls) and
//! passed by value or reference into every call; nothing here is cached
//! between frames.
use crate::edges::canny::MIN_CANNY_BLUR;
use crate::error::{check_threshold, FilterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of edge operators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    #[default]
    Sobel,
    Canny,
    Roberts,
    Prewitt,
    Laplacian,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Sobel,
        Method::Canny,
        Method::Roberts,
        Method::Prewitt,
        Method::Laplacian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Method::Sobel => "sobel",
            Method::Canny => "canny",
            Method::Roberts => "roberts",
            Method::Prewitt => "prewitt",
            Method::Laplacian => "laplacian",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown edge method `{0}` (expected sobel, canny, roberts, prewitt or laplacian)")]
pub struct ParseMethodError(pub String);

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Method::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| ParseMethodError(s.to_string()))
    }
}

/// Operator plus its numeric knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    pub method: Method,
    /// Edge threshold in `[0, 255]`; the low threshold for Canny.
    pub threshold: u32,
    /// Gaussian radius applied before the operator (0 = none; Canny uses at
    /// least 1).
    pub blur_amount: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            method: Method::Sobel,
            threshold: 50,
            blur_amount: 0,
        }
    }
}

impl FilterConfig {
    pub fn new(method: Method, threshold: u32, blur_amount: u32) -> Self {
        Self {
            method,
            threshold,
            blur_amount,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_threshold(self.threshold)
    }

    /// Blur radius actually applied: Canny always smooths by at least 1.
    pub fn effective_blur(&self) -> u32 {
        match self.method {
            Method::Canny => self.blur_amount.max(MIN_CANNY_BLUR),
            _ => self.blur_amount,
        }
    }

    /// [`validate`](Self::validate) plus the blur bound for a `width × height`
    /// frame.
    pub fn validate_for(&self, width: u32, height: u32) -> Result<()> {
        self.validate()?;
        let blur = self.effective_blur();
        if blur > max_blur_amount(width, height) {
            let taps = (blur as usize).saturating_mul(2).saturating_add(1);
            return Err(FilterError::KernelTooLarge {
                kernel_width: taps,
                kernel_height: taps,
                width: width as usize,
                height: height as usize,
            });
        }
        Ok(())
    }
}

/// Largest blur amount whose kernel still fits a `width × height` frame.
pub fn max_blur_amount(width: u32, height: u32) -> u32 {
    width.min(height).saturating_sub(1) / 2
}
