//! Non-maximum suppression on gradient magnitude with direction alignment.
//!
//! The gradient direction is folded into [0°, 180°) and bucketed into four
//! orientations (0°, 45°, 90°, 135°, each ±22.5°). A pixel keeps its magnitude
//! when it is strictly above the neighbour behind it and not below the one
//! ahead, so a plateau along the gradient keeps exactly its first pixel. The
//! outermost 1-pixel frame is always suppressed.
use crate::edges::grad::GradientField;
use crate::image::{ImageF32, ImageView};

/// Principal gradient orientations used to pick comparison neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Gradient along x: compare left/right.
    Deg0,
    /// Gradient towards +x,+y (image y grows downwards).
    Deg45,
    /// Gradient along y: compare up/down.
    Deg90,
    /// Gradient towards -x,+y.
    Deg135,
}

impl Orientation {
    /// Pixel offsets of the two neighbours along the orientation, `[behind, ahead]`.
    #[inline]
    pub fn neighbour_offsets(self) -> [(isize, isize); 2] {
        match self {
            Self::Deg0 => [(-1, 0), (1, 0)],
            Self::Deg45 => [(1, 1), (-1, -1)],
            Self::Deg90 => [(0, -1), (0, 1)],
            Self::Deg135 => [(-1, 1), (1, -1)],
        }
    }
}

/// Bucket a direction in radians into one of four orientations.
#[inline]
pub fn quantize_direction(angle: f32) -> Orientation {
    let deg = angle.to_degrees().rem_euclid(180.0);
    if !(22.5..157.5).contains(&deg) {
        Orientation::Deg0
    } else if deg < 67.5 {
        Orientation::Deg45
    } else if deg < 112.5 {
        Orientation::Deg90
    } else {
        Orientation::Deg135
    }
}

/// Thin the magnitude plane to single-pixel ridges.
pub fn non_maximum_suppression(field: &GradientField) -> ImageF32 {
    let w = field.width();
    let h = field.height();
    let mut out = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    let mag = &field.magnitude;
    for y in 1..h - 1 {
        let dir_row = field.direction.row(y);
        let mag_row = mag.row(y);
        for x in 1..w - 1 {
            let m = mag_row[x];
            if m <= 0.0 {
                continue;
            }
            let [(dx1, dy1), (dx2, dy2)] = quantize_direction(dir_row[x]).neighbour_offsets();
            let behind = mag.get((x as isize + dx1) as usize, (y as isize + dy1) as usize);
            let ahead = mag.get((x as isize + dx2) as usize, (y as isize + dy2) as usize);
            if m <= behind || m < ahead {
                continue;
            }
            out.set(x, y, m);
        }
    }
    out
}
