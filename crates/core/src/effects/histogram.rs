//! Grayscale histogram equalization.
//!
//! Follows the OpenCV `equalizeHist` lookup construction: the first occupied
//! bin maps to 0 and the remaining cumulative counts are scaled by
//! `255 / (total - hist[first])`. A single-level image is returned unchanged.

use crate::shared::frame::Frame;

pub(crate) fn equalize(gray: &Frame) -> Frame {
    debug_assert_eq!(gray.channels(), 1);
    let total = gray.data().len();

    let mut hist = [0usize; 256];
    for &v in gray.data() {
        hist[v as usize] += 1;
    }

    let Some(first) = hist.iter().position(|&c| c != 0) else {
        return gray.clone();
    };
    if hist[first] == total {
        return gray.clone();
    }

    let scale = 255.0f32 / (total - hist[first]) as f32;
    let mut lut = [0u8; 256];
    let mut cum = 0usize;
    for (i, &count) in hist.iter().enumerate().skip(first + 1) {
        cum += count;
        lut[i] = (cum as f32 * scale).round().clamp(0.0, 255.0) as u8;
    }

    let out = gray.data().iter().map(|&v| lut[v as usize]).collect();
    Frame::new(out, gray.width(), gray.height(), 1)
}
