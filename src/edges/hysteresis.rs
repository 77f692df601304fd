//! Double thresholding and hysteresis edge tracking.
//!
//! Strong pixels seed a worklist flood fill that walks through 8-connected
//! weak pixels; every weak pixel it reaches is promoted. Weak pixels the fill
//! never touches are dropped.
use crate::image::{GrayImage, ImageF32};

/// Classification of a suppressed magnitude against the threshold pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeClass {
    #[default]
    None,
    Weak,
    Strong,
}

/// Per-pixel [`EdgeClass`] plane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeClassMap {
    pub w: usize,
    pub h: usize,
    pub data: Vec<EdgeClass>,
}

impl EdgeClassMap {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![EdgeClass::None; w * h],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> EdgeClass {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, class: EdgeClass) {
        self.data[y * self.w + x] = class;
    }

    pub fn count(&self, class: EdgeClass) -> usize {
        self.data.iter().filter(|&&c| c == class).count()
    }
}

/// Split suppressed magnitudes into strong (`>= high`), weak (`[low, high)`)
/// and none. Zero magnitudes are never edges, whatever the thresholds.
pub fn double_threshold(suppressed: &ImageF32, low: f32, high: f32) -> EdgeClassMap {
    let data = suppressed
        .data
        .iter()
        .map(|&m| {
            if m <= 0.0 {
                EdgeClass::None
            } else if m >= high {
                EdgeClass::Strong
            } else if m >= low {
                EdgeClass::Weak
            } else {
                EdgeClass::None
            }
        })
        .collect();
    EdgeClassMap {
        w: suppressed.w,
        h: suppressed.h,
        data,
    }
}

const NEIGHBOURS_8: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Track edges from strong seeds through weak neighbours. Edge pixels are 255.
pub fn hysteresis(classes: &EdgeClassMap) -> GrayImage {
    let (w, h) = (classes.w, classes.h);
    let mut out = GrayImage::new(w, h);
    let mut stack: Vec<usize> = Vec::new();

    for (idx, &class) in classes.data.iter().enumerate() {
        if class == EdgeClass::Strong {
            out.data[idx] = 255;
            stack.push(idx);
        }
    }

    while let Some(idx) = stack.pop() {
        let x = (idx % w) as isize;
        let y = (idx / w) as isize;
        for (dx, dy) in NEIGHBOURS_8 {
            let nx = x + dx;
            let ny = y + dy;
            if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                continue;
            }
            let nidx = ny as usize * w + nx as usize;
            if classes.data[nidx] == EdgeClass::Weak && out.data[nidx] == 0 {
                out.data[nidx] = 255;
                stack.push(nidx);
            }
        }
    }

    out
}
