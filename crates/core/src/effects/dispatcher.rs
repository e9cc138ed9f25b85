//! Effect dispatch: maps a selector to its transform.

use crate::shared::error::EffectError;
use crate::shared::frame::Frame;

use super::effect_kind::EffectKind;
use super::{comic, edge, emboss, glass, gradient};

/// Applies `kind` to `frame`, producing a fresh output frame of identical
/// width and height. The channel count may change: several effects reduce
/// color input to grayscale, and color effects expand grayscale input.
///
/// Fails only on a malformed input frame; every selector value produces
/// output ([`EffectKind::NoFilter`] is the identity copy).
pub fn apply(frame: &Frame, kind: EffectKind) -> Result<Frame, EffectError> {
    validate(frame)?;
    log::debug!(
        "applying {kind} to {}x{}x{} frame",
        frame.width(),
        frame.height(),
        frame.channels()
    );

    let out = match kind {
        EffectKind::NoFilter => frame.clone(),
        EffectKind::EdgeLeft => edge::edge_left(frame),
        EffectKind::EdgeRight => edge::edge_right(frame),
        EffectKind::EdgeDown => edge::edge_down(frame),
        EffectKind::EdgeUp => edge::edge_up(frame),
        EffectKind::EdgeFourDir => edge::edge_four_dir(frame),
        EffectKind::EdgeFourDirEqualized => edge::edge_four_dir_equalized(frame),
        EffectKind::Emboss => emboss::emboss(frame),
        EffectKind::GradientGray => gradient::gradient_gray(frame),
        EffectKind::GradientGraySobel => gradient::gradient_gray_sobel(frame),
        EffectKind::GradientColor => gradient::gradient_color(frame),
        EffectKind::Comic => comic::comic(frame),
        EffectKind::Glass => glass::glass(frame),
    };

    debug_assert_eq!(out.width(), frame.width());
    debug_assert_eq!(out.height(), frame.height());
    Ok(out)
}

fn validate(frame: &Frame) -> Result<(), EffectError> {
    if frame.width() == 0 || frame.height() == 0 {
        return Err(EffectError::EmptyFrame {
            width: frame.width(),
            height: frame.height(),
        });
    }
    match frame.channels() {
        1 | 3 => Ok(()),
        c => Err(EffectError::UnsupportedChannels { channels: c }),
    }
}
