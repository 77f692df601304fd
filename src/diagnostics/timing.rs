use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Wall-clock duration of a single pipeline stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Ordered stage timings for one frame.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.label.as_str()).collect()
    }
}

/// Runs pipeline stages, recording their durations only when enabled.
#[derive(Debug, Default)]
pub struct StageTracer {
    timing: Option<TimingBreakdown>,
}

impl StageTracer {
    /// A tracer that records nothing.
    pub fn disabled() -> Self {
        Self { timing: None }
    }

    pub fn enabled() -> Self {
        Self {
            timing: Some(TimingBreakdown::default()),
        }
    }

    pub fn stage<T>(&mut self, label: &str, f: impl FnOnce() -> T) -> T {
        match self.timing.as_mut() {
            None => f(),
            Some(timing) => {
                let start = Instant::now();
                let out = f();
                let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
                log::debug!("stage {label}: {elapsed_ms:.3} ms");
                timing.push(label, elapsed_ms);
                out
            }
        }
    }

    /// Close the trace with the frame's total duration.
    pub fn finish(self, total_ms: f64) -> TimingBreakdown {
        let mut timing = self.timing.unwrap_or_default();
        timing.total_ms = total_ms;
        timing
    }
}
