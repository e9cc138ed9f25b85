use thiserror::Error;

/// Input precondition violations.
///
/// The effect engine has exactly one error surface: a frame it cannot read
/// safely. An unrecognized effect selector is not an error; the dispatcher
/// falls back to the identity copy so the caller always gets an output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    #[error("frame has no pixels ({width}x{height})")]
    EmptyFrame { width: u32, height: u32 },
    #[error("unsupported channel count: {channels} (expected 1 or 3)")]
    UnsupportedChannels { channels: u8 },
}
