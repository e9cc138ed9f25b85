//! Emboss filter.
//!
//! Runs directly on the color channels with a fixed asymmetric kernel,
//! applied unflipped (the relief direction depends on it). Boundary policy
//! is wrap-around: pixels near one border sample from the opposite border.
//! The embossed color image is reduced to grayscale before returning.

use crate::shared::frame::Frame;

use super::convolution;

const KERNEL: [[i32; 3]; 3] = [[-1, -1, 0], [-1, 0, 1], [0, 1, 1]];

const BIAS: i32 = 128;

pub fn emboss(frame: &Frame) -> Frame {
    let rgb = convolution::to_rgb(frame);
    let w = rgb.width() as usize;
    let h = rgb.height() as usize;
    let src = rgb.data();

    let mut out = Frame::zeros(rgb.width(), rgb.height(), 3);
    {
        let dst = out.data_mut();
        for y in 0..h {
            for x in 0..w {
                let mut acc = [0i32; 3];
                for (ky, row) in KERNEL.iter().enumerate() {
                    let sy = (y + ky + h - 1) % h;
                    for (kx, &wgt) in row.iter().enumerate() {
                        if wgt == 0 {
                            continue;
                        }
                        let sx = (x + kx + w - 1) % w;
                        let p = &src[(sy * w + sx) * 3..][..3];
                        for c in 0..3 {
                            acc[c] += p[c] as i32 * wgt;
                        }
                    }
                }
                let idx = (y * w + x) * 3;
                for c in 0..3 {
                    dst[idx + c] = (acc[c] + BIAS).clamp(0, 255) as u8;
                }
            }
        }
    }
    convolution::grayscale(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_field_rests_at_bias() {
        // Kernel weights sum to zero, so a flat field embosses to the bias.
        let frame = Frame::new(vec![77; 20 * 20 * 3], 20, 20, 3);
        let out = emboss(&frame);
        assert_eq!(out.channels(), 1);
        assert!(out.data().iter().all(|&v| v == 128));
    }

    #[test]
    fn test_dimensions_preserved() {
        let frame = Frame::new(vec![10; 7 * 5 * 3], 7, 5, 3);
        let out = emboss(&frame);
        assert_eq!((out.width(), out.height()), (7, 5));
    }

    #[test]
    fn test_extreme_step_saturates_both_ends() {
        // Black left half, white right half. The step (and its wrapped
        // counterpart at x=0) drives the response past both clamp limits.
        let w = 16usize;
        let h = 16usize;
        let mut data = vec![0u8; w * h * 3];
        for y in 0..h {
            for x in w / 2..w {
                let idx = (y * w + x) * 3;
                data[idx] = 255;
                data[idx + 1] = 255;
                data[idx + 2] = 255;
            }
        }
        let frame = Frame::new(data, w as u32, h as u32, 3);
        let out = emboss(&frame);
        assert_eq!(out.data().len(), w * h);
        assert!(out.data().contains(&0));
        assert!(out.data().contains(&255));
    }

    #[test]
    fn test_boundary_wraps_to_opposite_border() {
        // A 3-wide gray strip with one bright column at x=2. At x=0 the
        // kernel's left taps wrap to x=2, so the bright column influences
        // the first column's response.
        let w = 3u32;
        let h = 3u32;
        let mut data = vec![0u8; (w * h * 3) as usize];
        for y in 0..h as usize {
            let idx = (y * w as usize + 2) * 3;
            data[idx] = 210;
            data[idx + 1] = 210;
            data[idx + 2] = 210;
        }
        let frame = Frame::new(data, w, h, 3);
        let out = emboss(&frame);

        // Without wrap-around, column 0 would rest at the bias; the wrapped
        // -1 taps at the bright column pull it below 128.
        assert!(out.data()[0] < 128);
    }

    #[test]
    fn test_accepts_grayscale_input() {
        let frame = Frame::new(vec![100; 6 * 6], 6, 6, 1);
        let out = emboss(&frame);
        assert!(out.data().iter().all(|&v| v == 128));
    }
}
