use super::FilterConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON configuration for the `edge_filter` tool.
#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub filter: FilterConfig,
    pub output: EdgeOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct EdgeOutputConfig {
    #[serde(rename = "edge_image")]
    pub edge_image: PathBuf,
    /// Optional continuous rendering of the gradient magnitude.
    #[serde(default)]
    pub magnitude_image: Option<PathBuf>,
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Method;

    #[test]
    fn parses_tool_config() {
        let json = r#"{
            "input": "frames/in.png",
            "filter": { "method": "canny", "threshold": 30, "blurAmount": 2 },
            "output": { "edge_image": "out/edges.png", "report_json": "out/report.json" }
        }"#;
        let cfg: EdgeToolConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.filter.method, Method::Canny);
        assert_eq!(cfg.filter.threshold, 30);
        assert_eq!(cfg.filter.blur_amount, 2);
        assert!(cfg.output.magnitude_image.is_none());
        assert_eq!(cfg.input, PathBuf::from("frames/in.png"));
    }
}
