//! Comic stylization: smoothed color fields overlaid with flat ink lines
//! where the equalized edge composite is strong.

use crate::shared::frame::Frame;

use super::convolution;
use super::edge;

/// Equalized edge values strictly above this become ink.
const INK_THRESHOLD: u8 = 220;

/// Ink fill value, one per channel.
const INK_GRAY: u8 = 30;

pub fn comic(frame: &Frame) -> Frame {
    let rgb = convolution::to_rgb(frame);
    let blur = convolution::gaussian_blur_rgb(&rgb);
    let edges = edge::edge_four_dir_equalized(&blur);

    let mut out = blur;
    let dst = out.data_mut();
    for (i, &e) in edges.data().iter().enumerate() {
        if e > INK_THRESHOLD {
            let idx = i * 3;
            dst[idx..idx + 3].copy_from_slice(&[INK_GRAY; 3]);
        }
    }
    out
}
