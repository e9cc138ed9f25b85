//! Gradient-magnitude filters: the Prewitt-style and Sobel-style grayscale
//! variants and the colored gradient built on top of the edge composite.

use crate::shared::frame::Frame;

use super::convolution::{self, convolve_gray_f32, LUMA};
use super::edge;

const PREWITT_X: [[f32; 3]; 3] = [
    [-1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
];

const PREWITT_Y: [[f32; 3]; 3] = [
    [-1.0, -1.0, -1.0],
    [0.0, 0.0, 0.0],
    [1.0, 1.0, 1.0],
];

const SOBEL_X: [[f32; 3]; 3] = [
    [-1.0, 0.0, 1.0],
    [-2.0, 0.0, 2.0],
    [-1.0, 0.0, 1.0],
];

const SOBEL_Y: [[f32; 3]; 3] = [
    [-1.0, -2.0, -1.0],
    [0.0, 0.0, 0.0],
    [1.0, 2.0, 1.0],
];

/// Magnitudes below this are painted as ink in the colored gradient.
const INK_THRESHOLD: u8 = 14;

/// Ink fill color, one value per channel.
const INK_GRAY: u8 = 20;

fn magnitude(frame: &Frame, kx: &[[f32; 3]; 3], ky: &[[f32; 3]; 3]) -> Frame {
    let gray = convolution::grayscale(frame);
    let gx = convolve_gray_f32(&gray, kx);
    let gy = convolve_gray_f32(&gray, ky);

    let out = gx
        .iter()
        .zip(&gy)
        .map(|(&a, &b)| (a * a + b * b).sqrt().min(255.0).round() as u8)
        .collect();
    Frame::new(out, frame.width(), frame.height(), 1)
}

/// Euclidean gradient magnitude with unit-weight (Prewitt-style) kernels.
pub fn gradient_gray(frame: &Frame) -> Frame {
    magnitude(frame, &PREWITT_X, &PREWITT_Y)
}

/// Euclidean gradient magnitude with center-weighted (Sobel) kernels.
pub fn gradient_gray_sobel(frame: &Frame) -> Frame {
    magnitude(frame, &SOBEL_X, &SOBEL_Y)
}

/// Colored gradient: mean-blurred color overlaid with luma-weighted edge
/// energy, flat areas inked dark, then re-blurred to soften transitions.
pub fn gradient_color(frame: &Frame) -> Frame {
    let rgb = convolution::to_rgb(frame);
    let blur = convolution::mean_blur_rgb(&rgb);
    let edges = edge::edge_four_dir(&blur);

    let mut out = blur;
    {
        let dst = out.data_mut();
        for (i, &e) in edges.data().iter().enumerate() {
            let idx = i * 3;
            if e < INK_THRESHOLD {
                dst[idx..idx + 3].copy_from_slice(&[INK_GRAY; 3]);
            } else {
                for (c, &luma) in LUMA.iter().enumerate() {
                    // Truncating add below the cap, saturating at 255.
                    let v = dst[idx + c] as f32 + e as f32 * luma;
                    dst[idx + c] = if v < 255.0 { v as u8 } else { 255 };
                }
            }
        }
    }
    convolution::mean_blur_rgb(&out)
}
