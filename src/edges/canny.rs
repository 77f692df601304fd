//! Canny edge detector: smooth → Sobel gradient → non-maximum suppression →
//! double threshold → hysteresis.
//!
//! Fixed policies:
//! - A blur amount of 0 still smooths with a radius-1 Gaussian; raw sensor
//!   noise otherwise survives as speckle.
//! - The high threshold is `2 × low`, clamped to 255.
//! - The gradient is always Sobel.
use crate::diagnostics::StageTracer;
use crate::edges::grad::{sobel_gradients, GradientField};
use crate::edges::hysteresis::{double_threshold, hysteresis, EdgeClass, EdgeClassMap};
use crate::edges::nms::non_maximum_suppression;
use crate::error::{check_threshold, FilterError, Result, MAX_THRESHOLD};
use crate::filters::gaussian_blur;
use crate::image::{from_grayscale, to_grayscale, GrayImage, ImageF32, PixelBuffer, OPAQUE};
use log::debug;

/// Ratio between the high and the low hysteresis threshold.
pub const HIGH_THRESHOLD_RATIO: u32 = 2;

/// Blur amount applied when the caller asks for none.
pub const MIN_CANNY_BLUR: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CannyThresholds {
    pub low: u32,
    pub high: u32,
}

impl CannyThresholds {
    /// Derive the pair from the user-facing (low) threshold.
    pub fn from_low(low: u32) -> Result<Self> {
        check_threshold(low)?;
        let high = low.saturating_mul(HIGH_THRESHOLD_RATIO).min(MAX_THRESHOLD);
        if low > high {
            return Err(FilterError::InvalidThreshold {
                value: low,
                detail: "low threshold exceeds high threshold",
            });
        }
        Ok(Self { low, high })
    }
}

/// Intermediate products of one Canny run.
#[derive(Clone, Debug)]
pub struct CannyStages {
    pub thresholds: CannyThresholds,
    pub field: GradientField,
    pub suppressed: ImageF32,
    pub classes: EdgeClassMap,
    /// 255 on edges, 0 elsewhere
    pub edges: GrayImage,
}

impl CannyStages {
    pub fn edge_count(&self) -> usize {
        self.edges.data.iter().filter(|&&v| v != 0).count()
    }
}

/// Run every Canny stage, keeping the intermediates.
pub fn canny_stages(image: &PixelBuffer, low: u32, blur_amount: u32) -> Result<CannyStages> {
    canny_stages_traced(image, low, blur_amount, &mut StageTracer::disabled())
}

pub(crate) fn canny_stages_traced(
    image: &PixelBuffer,
    low: u32,
    blur_amount: u32,
    tracer: &mut StageTracer,
) -> Result<CannyStages> {
    let thresholds = CannyThresholds::from_low(low)?;
    image.validate()?;

    let smoothed = tracer.stage("blur", || {
        gaussian_blur(image, blur_amount.max(MIN_CANNY_BLUR))
    })?;
    let gray = tracer.stage("grayscale", || to_grayscale(&smoothed))?;
    let field = tracer.stage("gradient", || sobel_gradients(&gray))?;
    let suppressed = tracer.stage("nms", || non_maximum_suppression(&field));
    let classes = tracer.stage("double_threshold", || {
        double_threshold(&suppressed, thresholds.low as f32, thresholds.high as f32)
    });
    let edges = tracer.stage("hysteresis", || hysteresis(&classes));

    let stages = CannyStages {
        thresholds,
        field,
        suppressed,
        classes,
        edges,
    };
    debug!(
        "canny low={} high={} strong={} weak={} edges={}",
        thresholds.low,
        thresholds.high,
        stages.classes.count(EdgeClass::Strong),
        stages.classes.count(EdgeClass::Weak),
        stages.edge_count()
    );
    Ok(stages)
}

/// Canny with an explicit blur amount.
pub fn canny_with_blur(image: &PixelBuffer, low: u32, blur_amount: u32) -> Result<PixelBuffer> {
    let stages = canny_stages(image, low, blur_amount)?;
    Ok(from_grayscale(&stages.edges, OPAQUE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_threshold_doubles_and_saturates() {
        assert_eq!(
            CannyThresholds::from_low(40).unwrap(),
            CannyThresholds { low: 40, high: 80 }
        );
        assert_eq!(
            CannyThresholds::from_low(200).unwrap(),
            CannyThresholds { low: 200, high: 255 }
        );
        assert_eq!(
            CannyThresholds::from_low(0).unwrap(),
            CannyThresholds { low: 0, high: 0 }
        );
        assert!(matches!(
            CannyThresholds::from_low(256),
            Err(FilterError::InvalidThreshold { value: 256, .. })
        ));
    }

    #[test]
    fn flat_frame_has_no_edges_even_at_zero_threshold() {
        let img = PixelBuffer::filled(8, 8, [90, 90, 90, 255]);
        let stages = canny_stages(&img, 0, 0).unwrap();
        assert_eq!(stages.edge_count(), 0);
    }

    #[test]
    fn vertical_step_yields_a_thin_vertical_line() {
        let mut img = PixelBuffer::filled(12, 10, [0, 0, 0, 255]);
        for y in 0..10 {
            for x in 6..12 {
                img.set_pixel(x, y, [255, 255, 255, 255]);
            }
        }
        let stages = canny_stages(&img, 50, 1).unwrap();
        for y in 1..9 {
            let lit: Vec<usize> = (0..12).filter(|&x| stages.edges.get(x, y) == 255).collect();
            assert!(!lit.is_empty(), "row {y} lost the edge");
            assert!(
                lit.iter().all(|&x| (4..=7).contains(&x)),
                "row {y} has edges away from the step: {lit:?}"
            );
            assert_eq!(lit.len(), 1, "row {y} not thinned: {lit:?}");
        }
        for x in 0..12 {
            assert_eq!(stages.edges.get(x, 0), 0);
            assert_eq!(stages.edges.get(x, 9), 0);
        }
    }
}
