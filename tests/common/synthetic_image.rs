#![allow(dead_code)]

use edge_detector::PixelBuffer;

/// Generates a simple high-contrast checkerboard frame.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> PixelBuffer {
    assert!(cell > 0, "cell size must be positive");
    let mut img = PixelBuffer::filled(width, height, [0, 0, 0, 255]);
    for y in 0..height {
        for x in 0..width {
            let v = if ((x / cell) + (y / cell)) & 1 == 0 { 32 } else { 220 };
            img.set_pixel(x as usize, y as usize, [v, v, v, 255]);
        }
    }
    img
}

/// Checkerboard with a horizontal colour ramp and a deterministic speckle, so
/// gradient magnitudes cover a wide range.
pub fn textured(width: u32, height: u32) -> PixelBuffer {
    let mut img = checkerboard(width, height, 5);
    let mut state = 0x2545_f491u32;
    for y in 0..height as usize {
        for x in 0..width as usize {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let [r, g, b, a] = img.pixel(x, y);
            let ramp = (x * 255 / width.max(1) as usize) as u8 / 4;
            let noise = (state % 24) as u8;
            img.set_pixel(
                x,
                y,
                [
                    r.saturating_add(ramp),
                    g.saturating_sub(noise),
                    b.saturating_add(noise),
                    a,
                ],
            );
        }
    }
    img
}

/// Gray frame from a row-major list of luminance values.
pub fn gray_frame(width: u32, height: u32, values: &[u8]) -> PixelBuffer {
    assert_eq!(values.len(), (width * height) as usize);
    let pixels = values.iter().flat_map(|&v| [v, v, v, 255]).collect();
    PixelBuffer::new(width, height, pixels).expect("valid frame")
}
