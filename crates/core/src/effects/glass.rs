//! Voronoi-mosaic "glass" effect.
//!
//! The image is partitioned into fixed-size seed blocks. Each block derives
//! one anchor point from a generator seeded by the block's own color content,
//! so the same image always yields the same partition. Every pixel then joins
//! the region of its nearest anchor by Manhattan distance and is recolored
//! with that region's average color.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::shared::frame::Frame;

use super::convolution;

/// Side length of one seed block. Blocks that would extend past the image
/// edge are dropped rather than clipped; their pixels still join the nearest
/// surviving region, possibly across the resulting gap.
pub const BLOCK_SIZE: usize = 10;

/// One mosaic region: an anchor coordinate plus running color sums for the
/// pixels assigned to it. Regions live in a Vec and are referenced by index;
/// they never outlive the call.
#[derive(Debug)]
struct Anchor {
    x: usize,
    y: usize,
    sum: [u64; 3],
    count: u64,
}

impl Anchor {
    /// Integer-average color, each channel capped at 255.
    /// Valid only after all assignments are complete.
    fn average(&self) -> [u8; 3] {
        if self.count == 0 {
            return [0; 3];
        }
        [
            (self.sum[0] / self.count).min(255) as u8,
            (self.sum[1] / self.count).min(255) as u8,
            (self.sum[2] / self.count).min(255) as u8,
        ]
    }
}

pub fn glass(frame: &Frame) -> Frame {
    let rgb = convolution::to_rgb(frame);
    let mut anchors = seed_anchors(&rgb, BLOCK_SIZE);
    if anchors.is_empty() {
        // Image smaller than one block: nothing to partition.
        log::debug!(
            "glass: {}x{} frame fits no {BLOCK_SIZE}x{BLOCK_SIZE} block, returning copy",
            rgb.width(),
            rgb.height()
        );
        return rgb;
    }

    let assignment = assign_pixels(&rgb, &mut anchors);
    let averages: Vec<[u8; 3]> = anchors.iter().map(Anchor::average).collect();

    let mut out = rgb.clone();
    let dst = out.data_mut();
    for (pix, &a) in assignment.iter().enumerate() {
        dst[pix * 3..pix * 3 + 3].copy_from_slice(&averages[a as usize]);
    }
    out
}

/// One anchor per fully-contained block, drawn uniformly within the block
/// from a Pcg32 seeded with the integer average of the block's R/G/B channel
/// sums. The x coordinate is drawn before y; the draw order is part of the
/// deterministic contract.
fn seed_anchors(rgb: &Frame, block: usize) -> Vec<Anchor> {
    let w = rgb.width() as usize;
    let h = rgb.height() as usize;
    let arr = rgb.as_ndarray();
    let mut anchors = Vec::new();

    // Columns outer, rows inner: nearest-anchor ties later resolve in this
    // creation order.
    let mut bx = 0;
    while bx + block <= w {
        let mut by = 0;
        while by + block <= h {
            let mut sums = [0u64; 3];
            for x in bx..bx + block {
                for y in by..by + block {
                    for c in 0..3 {
                        sums[c] += arr[[y, x, c]] as u64;
                    }
                }
            }
            let seed = (sums[0] + sums[1] + sums[2]) / 3;
            let mut rng = Pcg32::seed_from_u64(seed);
            let x = bx + rng.random_range(0..block);
            let y = by + rng.random_range(0..block);
            anchors.push(Anchor {
                x,
                y,
                sum: [0; 3],
                count: 0,
            });
            by += block;
        }
        bx += block;
    }
    anchors
}

/// Assign every pixel of the image (not only block interiors) to its nearest
/// anchor by Manhattan distance, first anchor winning ties, and accumulate
/// its color into that region. Returns the pixel-index -> anchor-index map.
fn assign_pixels(rgb: &Frame, anchors: &mut [Anchor]) -> Vec<u32> {
    let w = rgb.width() as usize;
    let h = rgb.height() as usize;
    let src = rgb.data();
    let mut assignment = vec![0u32; rgb.pixel_count()];

    for x in 0..w {
        for y in 0..h {
            let mut nearest = w + h;
            let mut best = 0usize;
            for (i, a) in anchors.iter().enumerate() {
                let dist = a.x.abs_diff(x) + a.y.abs_diff(y);
                if dist < nearest {
                    nearest = dist;
                    best = i;
                }
            }

            let idx = y * w + x;
            let a = &mut anchors[best];
            a.count += 1;
            for c in 0..3 {
                a.sum[c] += src[idx * 3 + c] as u64;
            }
            assignment[idx] = best as u32;
        }
    }
    assignment
}
