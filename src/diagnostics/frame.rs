use super::TimingBreakdown;
use crate::config::FilterConfig;
use crate::image::{ImageF32, PixelBuffer};
use serde::Serialize;

/// Result of [`process_traced`](crate::detector::process_traced).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    #[serde(skip)]
    pub output: PixelBuffer,
    /// Continuous response behind the edge map: gradient magnitude, or the
    /// absolute Laplacian.
    #[serde(skip)]
    pub response: ImageF32,
    pub input: InputDescriptor,
    pub config: FilterConfig,
    pub edge_count: usize,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: u32,
    pub height: u32,
}
