use crate::error::Result;
use crate::float::Float;
use crate::frame::AudioFrame;

pub mod autocorrelation;
pub mod internals;

/// A single-frame frequency estimator.
pub trait PitchDetector<T>
where
    T: Float,
{
    /// Estimate the fundamental frequency (Hz) of `frame`.
    ///
    /// `Ok(None)` means the frame was too quiet or had no clear period. `Err` is
    /// reserved for frames that break the detector's contract.
    fn get_pitch(&self, frame: &AudioFrame<'_, T>) -> Result<Option<f64>>;
}
