use edge_detector::config::load_config;
use edge_detector::detector::process_traced;
use edge_detector::edges::to_magnitude_map;
use edge_detector::image::io::{load_rgba_image, save_pixel_buffer, write_json_file};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let frame = load_rgba_image(&config.input)?;
    let report = process_traced(&frame, &config.filter).map_err(|e| {
        format!(
            "{} failed on {}: {e}",
            config.filter.method,
            config.input.display()
        )
    })?;

    save_pixel_buffer(&report.output, &config.output.edge_image)?;
    if let Some(path) = &config.output.magnitude_image {
        save_pixel_buffer(&to_magnitude_map(&report.response), path)?;
        println!("Saved response magnitude to {}", path.display());
    }
    write_json_file(&config.output.report_json, &report)?;

    println!(
        "{} on {}x{}: {} edge pixels in {:.3} ms",
        report.config.method,
        report.input.width,
        report.input.height,
        report.edge_count,
        report.timings.total_ms
    );
    println!("Saved edge map to {}", config.output.edge_image.display());
    println!("Saved report to {}", config.output.report_json.display());

    Ok(())
}

fn usage() -> String {
    "Usage: edge_filter <config.json>".to_string()
}
