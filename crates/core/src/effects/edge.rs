//! Directional 3x3 edge filters and their four-direction composites.
//!
//! Each directional filter converts the input to grayscale, convolves with
//! one named kernel, and saturates to 8 bits. Left/Right and Up/Down kernels
//! are mirror images of one another.

use crate::shared::frame::Frame;

use super::convolution::{self, convolve_gray};
use super::histogram;

const KERNEL_LEFT: [[f32; 3]; 3] = [
    [1.0, 0.0, -1.0],
    [2.0, 0.0, -2.0],
    [1.0, 0.0, -1.0],
];

const KERNEL_RIGHT: [[f32; 3]; 3] = [
    [-1.0, 0.0, 1.0],
    [-2.0, 0.0, 2.0],
    [-1.0, 0.0, 1.0],
];

const KERNEL_DOWN: [[f32; 3]; 3] = [
    [-1.0, -2.0, -1.0],
    [0.0, 0.0, 0.0],
    [1.0, 2.0, 1.0],
];

const KERNEL_UP: [[f32; 3]; 3] = [
    [1.0, 2.0, 1.0],
    [0.0, 0.0, 0.0],
    [-1.0, -2.0, -1.0],
];

pub fn edge_left(frame: &Frame) -> Frame {
    convolve_gray(&convolution::grayscale(frame), &KERNEL_LEFT)
}

pub fn edge_right(frame: &Frame) -> Frame {
    convolve_gray(&convolution::grayscale(frame), &KERNEL_RIGHT)
}

pub fn edge_down(frame: &Frame) -> Frame {
    convolve_gray(&convolution::grayscale(frame), &KERNEL_DOWN)
}

pub fn edge_up(frame: &Frame) -> Frame {
    convolve_gray(&convolution::grayscale(frame), &KERNEL_UP)
}

/// Average of all four directional magnitudes, integer-truncated.
pub fn edge_four_dir(frame: &Frame) -> Frame {
    let d1 = edge_down(frame);
    let d2 = edge_up(frame);
    let d3 = edge_right(frame);
    let d4 = edge_left(frame);

    let mut out = Frame::zeros(frame.width(), frame.height(), 1);
    for (i, v) in out.data_mut().iter_mut().enumerate() {
        let sum = d1.data()[i] as u16
            + d2.data()[i] as u16
            + d3.data()[i] as u16
            + d4.data()[i] as u16;
        *v = (sum / 4) as u8;
    }
    out
}

/// Four-direction composite with histogram equalization to spread contrast.
pub fn edge_four_dir_equalized(frame: &Frame) -> Frame {
    histogram::equalize(&edge_four_dir(frame))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant_rgb(w: u32, h: u32, value: u8) -> Frame {
        Frame::new(vec![value; (w * h * 3) as usize], w, h, 3)
    }

    /// Horizontally symmetric grayscale frame: a bright vertical bar
    /// centered in a dark field.
    fn symmetric_bar(w: u32, h: u32) -> Frame {
        let mut data = vec![0u8; (w * h) as usize];
        let mid = w / 2;
        for y in 0..h {
            data[(y * w + mid) as usize] = 200;
        }
        Frame::new(data, w, h, 1)
    }

    #[test]
    fn test_left_right_kernels_are_horizontal_mirrors() {
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(KERNEL_LEFT[r][c], KERNEL_RIGHT[r][2 - c]);
            }
        }
    }

    #[test]
    fn test_up_down_kernels_are_vertical_mirrors() {
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(KERNEL_UP[r][c], KERNEL_DOWN[2 - r][c]);
            }
        }
    }

    #[test]
    fn test_constant_field_has_no_edges() {
        let frame = constant_rgb(20, 20, 128);
        for out in [
            edge_left(&frame),
            edge_right(&frame),
            edge_down(&frame),
            edge_up(&frame),
            edge_four_dir(&frame),
            edge_four_dir_equalized(&frame),
        ] {
            assert!(out.data().iter().all(|&v| v == 0));
        }
    }

    #[test]
    fn test_output_is_single_channel() {
        let frame = constant_rgb(8, 6, 50);
        let out = edge_four_dir(&frame);
        assert_eq!(out.channels(), 1);
        assert_eq!((out.width(), out.height()), (8, 6));
    }

    #[test]
    fn test_symmetric_image_gives_mirror_symmetric_outputs() {
        let frame = symmetric_bar(21, 7);
        let left = edge_left(&frame);
        let right = edge_right(&frame);
        let w = 21usize;
        for y in 0..7usize {
            for x in 0..w {
                assert_eq!(
                    left.data()[y * w + x],
                    right.data()[y * w + (w - 1 - x)],
                    "mirror mismatch at ({x},{y})"
                );
            }
        }
    }

    #[test]
    fn test_vertical_step_triggers_horizontal_kernels_only() {
        // Left half dark, right half bright: a vertical boundary.
        let w = 10u32;
        let h = 6u32;
        let mut data = vec![0u8; (w * h) as usize];
        for y in 0..h {
            for x in w / 2..w {
                data[(y * w + x) as usize] = 200;
            }
        }
        let frame = Frame::new(data, w, h, 1);

        // The dark-to-bright transition gives a positive response for the
        // left kernel; the right kernel goes negative and clamps to zero.
        let left = edge_left(&frame);
        assert!(left.data().iter().any(|&v| v > 0));
        let right = edge_right(&frame);
        assert!(right.data().iter().all(|&v| v == 0));

        // Up/down kernels see no vertical gradient anywhere.
        let down = edge_down(&frame);
        assert!(down.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_four_dir_is_truncated_average() {
        let frame = symmetric_bar(11, 5);
        let composite = edge_four_dir(&frame);
        let d = [
            edge_down(&frame),
            edge_up(&frame),
            edge_right(&frame),
            edge_left(&frame),
        ];
        for i in 0..composite.data().len() {
            let sum: u16 = d.iter().map(|f| f.data()[i] as u16).sum();
            assert_eq!(composite.data()[i], (sum / 4) as u8);
        }
    }
}
