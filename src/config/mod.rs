//! Configuration types: the per-frame [`FilterConfig`] and the JSON tool
//! configuration consumed by the `edge_filter` binary.

pub mod edge;
pub mod filter;

pub use edge::{load_config, EdgeOutputConfig, EdgeToolConfig};
pub use filter::{max_blur_amount, FilterConfig, Method, ParseMethodError};
