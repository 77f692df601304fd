//! Frame-level entry points and method dispatch.
//!
//! Every function borrows the input frame, validates it, and returns a newly
//! allocated edge map of the same size. Nothing is kept between calls, so a
//! capture loop can call these once per frame with whatever configuration the
//! UI currently shows.
//!
//! ```no_run
//! use edge_detector::prelude::*;
//!
//! # fn frame() -> PixelBuffer { PixelBuffer::filled(640, 480, [0, 0, 0, 255]) }
//! # fn main() -> Result<(), FilterError> {
//! let config = FilterConfig::new(Method::Canny, 40, 2);
//! for _ in 0..3 {
//!     let edges = process(&frame(), &config)?;
//!     assert_eq!((edges.width, edges.height), (640, 480));
//! }
//! # Ok(())
//! # }
//! ```
use crate::config::{FilterConfig, Method};
use crate::diagnostics::{FrameReport, InputDescriptor, StageTracer};
use crate::edges::canny::canny_stages_traced;
use crate::edges::{
    canny_with_blur, gradient_field, laplacian_response, to_binary_edge_map, GradientOperator,
};
use crate::error::{check_threshold, Result};
use crate::filters::gaussian_blur;
use crate::image::{from_grayscale, to_grayscale, ImageF32, PixelBuffer, OPAQUE};
use std::borrow::Cow;
use std::time::Instant;

/// Sobel magnitude thresholded into a binary edge map.
pub fn sobel(image: &PixelBuffer, threshold: u32) -> Result<PixelBuffer> {
    gradient_edges(image, threshold, GradientOperator::Sobel)
}

/// Prewitt magnitude thresholded into a binary edge map.
pub fn prewitt(image: &PixelBuffer, threshold: u32) -> Result<PixelBuffer> {
    gradient_edges(image, threshold, GradientOperator::Prewitt)
}

/// Roberts Cross magnitude thresholded into a binary edge map.
pub fn roberts(image: &PixelBuffer, threshold: u32) -> Result<PixelBuffer> {
    gradient_edges(image, threshold, GradientOperator::Roberts)
}

/// Absolute 4-neighbour Laplacian thresholded into a binary edge map.
pub fn laplacian(image: &PixelBuffer, threshold: u32) -> Result<PixelBuffer> {
    check_threshold(threshold)?;
    let gray = to_grayscale(image)?;
    let response = laplacian_response(&gray)?;
    Ok(to_binary_edge_map(&response, threshold))
}

/// Canny with the default (radius-1) smoothing.
pub fn canny(image: &PixelBuffer, low_threshold: u32) -> Result<PixelBuffer> {
    canny_with_blur(image, low_threshold, 0)
}

fn gradient_edges(
    image: &PixelBuffer,
    threshold: u32,
    operator: GradientOperator,
) -> Result<PixelBuffer> {
    check_threshold(threshold)?;
    let gray = to_grayscale(image)?;
    let field = gradient_field(&gray, operator)?;
    Ok(to_binary_edge_map(&field.magnitude, threshold))
}

/// Run the configured method on one frame.
///
/// For every method except Canny a non-zero `blur_amount` blurs the frame
/// first; Canny consumes the blur amount as its own smoothing stage.
pub fn process(image: &PixelBuffer, config: &FilterConfig) -> Result<PixelBuffer> {
    let (output, _) = run(image, config, &mut StageTracer::disabled())?;
    Ok(output)
}

/// Like [`process`], additionally timing each stage and keeping the
/// continuous response plane.
pub fn process_traced(image: &PixelBuffer, config: &FilterConfig) -> Result<FrameReport> {
    let start = Instant::now();
    let mut tracer = StageTracer::enabled();
    let (output, response) = run(image, config, &mut tracer)?;
    let timings = tracer.finish(start.elapsed().as_secs_f64() * 1000.0);
    let edge_count = output.count_lit();
    log::debug!(
        "{} {}x{} threshold={} blur={} -> {} edge pixels in {:.3} ms",
        config.method,
        image.width,
        image.height,
        config.threshold,
        config.blur_amount,
        edge_count,
        timings.total_ms
    );
    Ok(FrameReport {
        output,
        response,
        input: InputDescriptor {
            width: image.width,
            height: image.height,
        },
        config: *config,
        edge_count,
        timings,
    })
}

fn run(
    image: &PixelBuffer,
    config: &FilterConfig,
    tracer: &mut StageTracer,
) -> Result<(PixelBuffer, ImageF32)> {
    config.validate()?;
    image.validate()?;
    config.validate_for(image.width, image.height)?;

    let operator = match config.method {
        Method::Canny => {
            let stages =
                canny_stages_traced(image, config.threshold, config.blur_amount, tracer)?;
            let output = from_grayscale(&stages.edges, OPAQUE);
            return Ok((output, stages.field.magnitude));
        }
        Method::Sobel => Some(GradientOperator::Sobel),
        Method::Prewitt => Some(GradientOperator::Prewitt),
        Method::Roberts => Some(GradientOperator::Roberts),
        Method::Laplacian => None,
    };

    let source = if config.blur_amount > 0 {
        Cow::Owned(tracer.stage("blur", || gaussian_blur(image, config.blur_amount))?)
    } else {
        Cow::Borrowed(image)
    };
    let gray = tracer.stage("grayscale", || to_grayscale(&source))?;
    let response = match operator {
        Some(op) => tracer.stage("gradient", || gradient_field(&gray, op))?.magnitude,
        None => tracer.stage("laplacian", || laplacian_response(&gray))?,
    };
    let output = tracer.stage("threshold", || {
        to_binary_edge_map(&response, config.threshold)
    });
    Ok((output, response))
}

/// An implementation of the filter contract.
///
/// The pure-Rust filters in this crate are one backend; a binding to a native
/// vision library would be another, chosen by the driver at startup.
pub trait EdgeBackend {
    fn name(&self) -> &'static str;

    fn process(&self, image: &PixelBuffer, config: &FilterConfig) -> Result<PixelBuffer>;
}

/// Backend running this crate's own filters.
#[derive(Clone, Copy, Debug, Default)]
pub struct PureBackend;

impl EdgeBackend for PureBackend {
    fn name(&self) -> &'static str {
        "pure"
    }

    fn process(&self, image: &PixelBuffer, config: &FilterConfig) -> Result<PixelBuffer> {
        process(image, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;

    fn bright_column(width: u32, height: u32, column: usize) -> PixelBuffer {
        let mut img = PixelBuffer::filled(width, height, [0, 0, 0, 255]);
        for y in 0..height as usize {
            img.set_pixel(column, y, [255, 255, 255, 255]);
        }
        img
    }

    #[test]
    fn dispatch_matches_direct_entry_points() {
        let img = bright_column(9, 7, 4);
        assert_eq!(
            process(&img, &FilterConfig::new(Method::Sobel, 30, 0)).unwrap(),
            sobel(&img, 30).unwrap()
        );
        assert_eq!(
            process(&img, &FilterConfig::new(Method::Prewitt, 30, 0)).unwrap(),
            prewitt(&img, 30).unwrap()
        );
        assert_eq!(
            process(&img, &FilterConfig::new(Method::Roberts, 30, 0)).unwrap(),
            roberts(&img, 30).unwrap()
        );
        assert_eq!(
            process(&img, &FilterConfig::new(Method::Laplacian, 30, 0)).unwrap(),
            laplacian(&img, 30).unwrap()
        );
        assert_eq!(
            process(&img, &FilterConfig::new(Method::Canny, 30, 0)).unwrap(),
            canny(&img, 30).unwrap()
        );
    }

    #[test]
    fn blur_runs_before_non_canny_operators() {
        let img = bright_column(9, 7, 4);
        let blurred = gaussian_blur(&img, 1).unwrap();
        assert_eq!(
            process(&img, &FilterConfig::new(Method::Laplacian, 20, 1)).unwrap(),
            laplacian(&blurred, 20).unwrap()
        );
    }

    #[test]
    fn traced_run_produces_identical_pixels() {
        let img = bright_column(16, 12, 7);
        for method in Method::ALL {
            let cfg = FilterConfig::new(method, 25, 1);
            let report = process_traced(&img, &cfg).unwrap();
            assert_eq!(report.output, process(&img, &cfg).unwrap(), "{method}");
            assert_eq!(report.edge_count, report.output.count_lit());
            assert_eq!((report.response.w, report.response.h), (16, 12));
            assert!(!report.timings.stages.is_empty());
        }
    }

    #[test]
    fn canny_trace_lists_all_stages_in_order() {
        let img = bright_column(16, 12, 7);
        let report = process_traced(&img, &FilterConfig::new(Method::Canny, 25, 0)).unwrap();
        assert_eq!(
            report.timings.labels(),
            vec!["blur", "grayscale", "gradient", "nms", "double_threshold", "hysteresis"]
        );
    }

    #[test]
    fn errors_surface_per_call() {
        let img = bright_column(9, 7, 4);
        assert!(matches!(
            sobel(&img, 256),
            Err(FilterError::InvalidThreshold { value: 256, .. })
        ));
        let broken = PixelBuffer {
            width: 9,
            height: 7,
            pixels: vec![0; 10],
        };
        assert!(matches!(
            process(&broken, &FilterConfig::default()),
            Err(FilterError::Dimension { expected: 252, actual: 10, .. })
        ));
        assert!(matches!(
            process(&img, &FilterConfig::new(Method::Prewitt, 10, 4)),
            Err(FilterError::KernelTooLarge { .. })
        ));
        for method in Method::ALL {
            assert!(matches!(
                process(&img, &FilterConfig::new(method, 10, u32::MAX)),
                Err(FilterError::KernelTooLarge { width: 9, height: 7, .. })
            ));
        }
        assert!(matches!(
            process_traced(&img, &FilterConfig::new(Method::Canny, 10, 1 << 20)),
            Err(FilterError::KernelTooLarge { .. })
        ));
        // The failed calls leave nothing behind.
        assert!(process(&img, &FilterConfig::new(Method::Prewitt, 10, 1)).is_ok());
    }

    #[test]
    fn backend_is_object_safe() {
        let backend: Box<dyn EdgeBackend> = Box::new(PureBackend);
        let img = bright_column(5, 5, 2);
        let out = backend
            .process(&img, &FilterConfig::new(Method::Roberts, 20, 0))
            .unwrap();
        assert_eq!(backend.name(), "pure");
        assert_eq!((out.width, out.height), (5, 5));
    }
}
