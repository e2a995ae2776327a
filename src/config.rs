//! Tunable thresholds shared by the estimator and the consistency filter.
use crate::error::{PitchError, Result};
use crate::utils::peak::PeakCorrection;

/// Hard floor and ceiling (Hz, inclusive) on raw estimates before they reach
/// the history.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlausibleRange {
    pub min: f64,
    pub max: f64,
}

impl PlausibleRange {
    pub fn new(min: f64, max: f64) -> Self {
        PlausibleRange { min, max }
    }

    pub fn contains(&self, frequency: f64) -> bool {
        frequency >= self.min && frequency <= self.max
    }
}

impl Default for PlausibleRange {
    fn default() -> Self {
        PlausibleRange {
            min: 60.0,
            max: 1000.0,
        }
    }
}

/// Configuration for a [Tuner](crate::tuner::Tuner).
///
/// Every field has a default, so a config is usually built with
/// `DetectorConfig::default()` and a few `with_*` calls.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DetectorConfig {
    /// Consecutive consistent raw estimates required before reporting (default: 5)
    pub history_size: usize,
    /// Maximum distance (Hz) of any history entry from the history mean (default: 10)
    pub pitch_tolerance: f64,
    /// Minimum RMS energy to attempt detection (default: 0.05)
    pub rms_threshold: f64,
    /// Minimum correlation score for a lag to be a candidate period (default: 0.92)
    pub correlation_threshold: f64,
    /// Minimum rising-step quality to accept a candidate (default: 0.05)
    pub min_correlation_quality: f64,
    /// Plausible instrument range (default: 60-1000 Hz)
    pub plausible_range: PlausibleRange,
    /// Refinement of the detected lag (default: none, the integer lag is used)
    pub peak_correction: PeakCorrection,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            history_size: 5,
            pitch_tolerance: 10.0,
            rms_threshold: 0.05,
            correlation_threshold: 0.92,
            min_correlation_quality: 0.05,
            plausible_range: PlausibleRange::default(),
            peak_correction: PeakCorrection::None,
        }
    }
}

impl DetectorConfig {
    pub fn with_history_size(mut self, history_size: usize) -> Self {
        self.history_size = history_size;
        self
    }

    pub fn with_pitch_tolerance(mut self, pitch_tolerance: f64) -> Self {
        self.pitch_tolerance = pitch_tolerance;
        self
    }

    pub fn with_rms_threshold(mut self, rms_threshold: f64) -> Self {
        self.rms_threshold = rms_threshold;
        self
    }

    pub fn with_correlation_threshold(mut self, correlation_threshold: f64) -> Self {
        self.correlation_threshold = correlation_threshold;
        self
    }

    pub fn with_min_correlation_quality(mut self, min_correlation_quality: f64) -> Self {
        self.min_correlation_quality = min_correlation_quality;
        self
    }

    pub fn with_plausible_range(mut self, min: f64, max: f64) -> Self {
        self.plausible_range = PlausibleRange::new(min, max);
        self
    }

    pub fn with_peak_correction(mut self, peak_correction: PeakCorrection) -> Self {
        self.peak_correction = peak_correction;
        self
    }

    /// Reject configurations that would make the detector produce garbage.
    pub fn validate(&self) -> Result<()> {
        if self.history_size == 0 {
            return Err(invalid("history_size must be at least 1"));
        }
        if !(self.pitch_tolerance.is_finite() && self.pitch_tolerance > 0.0) {
            return Err(invalid(format!(
                "pitch_tolerance must be a positive number, got {}",
                self.pitch_tolerance
            )));
        }
        non_negative("rms_threshold", self.rms_threshold)?;
        non_negative("min_correlation_quality", self.min_correlation_quality)?;
        if !(self.correlation_threshold >= 0.0 && self.correlation_threshold < 1.0) {
            return Err(invalid(format!(
                "correlation_threshold must be in [0, 1), got {}",
                self.correlation_threshold
            )));
        }

        let PlausibleRange { min, max } = self.plausible_range;
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min < max) {
            return Err(invalid(format!(
                "plausible range must satisfy 0 < min < max, got {}..{}",
                min, max
            )));
        }
        Ok(())
    }
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )))
    }
}

fn invalid(reason: impl Into<String>) -> PitchError {
    PitchError::InvalidConfig(reason.into())
}
