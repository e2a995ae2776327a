//! Caller-contract violations. "No pitch found" is never an error: it is a
//! `None` estimate.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PitchError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("frame size must be even and non-zero, got {0}")]
    InvalidFrameSize(usize),

    #[error("sample rate must be non-zero")]
    InvalidSampleRate,

    #[error("frame has {actual} samples, detector expects {expected}")]
    FrameLengthMismatch { expected: usize, actual: usize },

    #[error("frame sampled at {actual} Hz, detector expects {expected} Hz")]
    SampleRateMismatch { expected: u32, actual: u32 },

    #[error("non-finite sample at index {0}")]
    NonFiniteSample(usize),

    #[error("window distance must be in 1..={window_size}, got {window_distance}")]
    InvalidWindowDistance {
        window_size: usize,
        window_distance: usize,
    },
}

/// Result type for pitch estimation operations
pub type Result<T> = std::result::Result<T, PitchError>;
