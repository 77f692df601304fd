//! Diagnostics returned by traced runs and the command-line tool.
//!
//! [`FrameReport`] bundles the edge map of one frame with the configuration
//! that produced it, the edge pixel count and a per-stage timing breakdown.
//! Timings are observational only: a traced run produces the same pixels as
//! an untraced one.

pub mod frame;
pub mod timing;

pub use frame::{FrameReport, InputDescriptor};
pub use timing::{StageTiming, StageTracer, TimingBreakdown};
