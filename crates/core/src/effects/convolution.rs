//! Shared convolution machinery: colorspace conversion, boundary handling,
//! and the 3x3/5x5 kernel passes every filter builds on.
//!
//! Kernels are applied as true convolution (180-degree rotation), not
//! correlation. Out-of-range samples reflect about the edge pixel
//! (reflect-101), except where an effect documents its own boundary policy.

use crate::shared::frame::Frame;

/// BT.601 luma weights for RGB, matching OpenCV's grayscale conversion.
pub(crate) const LUMA: [f32; 3] = [0.299, 0.587, 0.114];

/// 5x5 uniform mean kernel.
pub(crate) const MEAN_5X5: [[f32; 5]; 5] = [[1.0 / 25.0; 5]; 5];

const G: f32 = 52.0;

/// 5x5 Gaussian-like kernel; integer weights over a sum of 52.
pub(crate) const GAUSSIAN_5X5: [[f32; 5]; 5] = [
    [1.0 / G, 1.0 / G, 2.0 / G, 1.0 / G, 1.0 / G],
    [1.0 / G, 2.0 / G, 4.0 / G, 2.0 / G, 1.0 / G],
    [2.0 / G, 4.0 / G, 8.0 / G, 4.0 / G, 2.0 / G],
    [1.0 / G, 2.0 / G, 4.0 / G, 2.0 / G, 1.0 / G],
    [1.0 / G, 1.0 / G, 2.0 / G, 1.0 / G, 1.0 / G],
];

/// Reflect-101 boundary: index -1 maps to 1, index `len` maps to `len - 2`.
fn reflect(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let period = 2 * (len as isize - 1);
    let mut i = i.rem_euclid(period);
    if i >= len as isize {
        i = period - i;
    }
    i as usize
}

/// Weighted luma reduction to a single channel. Grayscale input is copied.
pub(crate) fn grayscale(frame: &Frame) -> Frame {
    if frame.channels() == 1 {
        return frame.clone();
    }
    let mut out = Vec::with_capacity(frame.pixel_count());
    for px in frame.data().chunks_exact(3) {
        let y = px[0] as f32 * LUMA[0] + px[1] as f32 * LUMA[1] + px[2] as f32 * LUMA[2];
        out.push(y.round().min(255.0) as u8);
    }
    Frame::new(out, frame.width(), frame.height(), 1)
}

/// Channel replication to RGB. Color input is copied.
pub(crate) fn to_rgb(frame: &Frame) -> Frame {
    if frame.channels() == 3 {
        return frame.clone();
    }
    let mut out = Vec::with_capacity(frame.pixel_count() * 3);
    for &v in frame.data() {
        out.extend_from_slice(&[v, v, v]);
    }
    Frame::new(out, frame.width(), frame.height(), 3)
}

/// 3x3 convolution of a grayscale frame with 8-bit saturating output.
pub(crate) fn convolve_gray(gray: &Frame, kernel: &[[f32; 3]; 3]) -> Frame {
    debug_assert_eq!(gray.channels(), 1);
    let w = gray.width() as usize;
    let h = gray.height() as usize;
    let src = gray.data();
    let mut out = vec![0u8; w * h];

    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f32;
            for (ky, row) in kernel.iter().enumerate() {
                // Rotated sampling: kernel entry (ky, kx) reads offset (1-kx, 1-ky).
                let sy = reflect(y as isize - (ky as isize - 1), h);
                for (kx, &wgt) in row.iter().enumerate() {
                    let sx = reflect(x as isize - (kx as isize - 1), w);
                    sum += src[sy * w + sx] as f32 * wgt;
                }
            }
            out[y * w + x] = sum.round().clamp(0.0, 255.0) as u8;
        }
    }
    Frame::new(out, gray.width(), gray.height(), 1)
}

/// 3x3 convolution of a grayscale frame keeping the unclamped float response.
pub(crate) fn convolve_gray_f32(gray: &Frame, kernel: &[[f32; 3]; 3]) -> Vec<f32> {
    debug_assert_eq!(gray.channels(), 1);
    let w = gray.width() as usize;
    let h = gray.height() as usize;
    let src = gray.data();
    let mut out = vec![0.0f32; w * h];

    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f32;
            for (ky, row) in kernel.iter().enumerate() {
                let sy = reflect(y as isize - (ky as isize - 1), h);
                for (kx, &wgt) in row.iter().enumerate() {
                    let sx = reflect(x as isize - (kx as isize - 1), w);
                    sum += src[sy * w + sx] as f32 * wgt;
                }
            }
            out[y * w + x] = sum;
        }
    }
    out
}

/// 5x5 per-channel convolution of an RGB frame with saturating output.
pub(crate) fn convolve_rgb_5x5(rgb: &Frame, kernel: &[[f32; 5]; 5]) -> Frame {
    debug_assert_eq!(rgb.channels(), 3);
    let w = rgb.width() as usize;
    let h = rgb.height() as usize;
    let src = rgb.data();
    let mut out = vec![0u8; w * h * 3];

    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0f32; 3];
            for (ky, row) in kernel.iter().enumerate() {
                let sy = reflect(y as isize - (ky as isize - 2), h);
                for (kx, &wgt) in row.iter().enumerate() {
                    let sx = reflect(x as isize - (kx as isize - 2), w);
                    let p = &src[(sy * w + sx) * 3..][..3];
                    for c in 0..3 {
                        acc[c] += p[c] as f32 * wgt;
                    }
                }
            }
            let idx = (y * w + x) * 3;
            for c in 0..3 {
                out[idx + c] = acc[c].round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    Frame::new(out, rgb.width(), rgb.height(), 3)
}

pub(crate) fn mean_blur_rgb(rgb: &Frame) -> Frame {
    convolve_rgb_5x5(rgb, &MEAN_5X5)
}

pub(crate) fn gaussian_blur_rgb(rgb: &Frame) -> Frame {
    convolve_rgb_5x5(rgb, &GAUSSIAN_5X5)
}
