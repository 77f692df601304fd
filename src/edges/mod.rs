//! Edge operators and the Canny pipeline.
//!
//! - [`grad`]: Sobel/Prewitt/Roberts gradient fields.
//! - [`laplacian`]: absolute second-derivative response.
//! - [`nms`]: direction-aligned non-maximum suppression.
//! - [`hysteresis`]: double threshold and 8-connected edge tracking.
//! - [`canny`]: the five Canny stages wired together.
//! - [`threshold`]: response planes to RGBA edge maps.
//!
//! Borders are handled by clamping in the convolution engine; Canny's
//! suppression stage additionally zeroes the outermost 1-pixel frame.

pub mod canny;
pub mod grad;
pub mod hysteresis;
pub mod laplacian;
pub mod nms;
pub mod threshold;

pub use canny::{canny_stages, canny_with_blur, CannyStages, CannyThresholds};
pub use grad::{gradient_field, sobel_gradients, GradientField, GradientOperator};
pub use hysteresis::{double_threshold, hysteresis, EdgeClass, EdgeClassMap};
pub use laplacian::laplacian_response;
pub use nms::{non_maximum_suppression, quantize_direction, Orientation};
pub use threshold::{to_binary_edge_map, to_magnitude_map};
