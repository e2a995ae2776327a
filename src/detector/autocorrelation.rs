//! Normalized-difference autocorrelation.
//!
//! Let $S=(s_0,s_1,\ldots,s_{N-1})$ be a frame and $w = N/2$. For every lag $k$ in $1..=w$ the
//! detector computes the score
//! $$ c(k) = 1 - \frac{1}{w}\sum_{i=0}^{w-1} |s_i - s_{i+k}|, $$
//! which is $1$ when the frame repeats after $k$ samples and decreases as the shifted copy
//! drifts away from the original.
//!
//! Rather than taking the lag with the highest score, the detector follows the first upward run
//! of the score above the correlation threshold whose total rise reaches the minimum quality,
//! and reports the lag where that run tops out. Deeper lags at multiples of the period score
//! about as well as the period itself, so the global maximum is prone to octave errors.
//!
//! With [PeakCorrection::Quadratic] the crest is refined by fitting a parabola through it and
//! its two neighbours.
//!
//! Frames whose RMS does not exceed the configured threshold are never searched.

use crate::config::DetectorConfig;
use crate::detector::internals::{find_rising_inflection, get_power_level};
use crate::detector::PitchDetector;
use crate::error::{PitchError, Result};
use crate::float::Float;
use crate::frame::AudioFrame;
use crate::utils::buffer::first_non_finite;
use crate::utils::peak::{correct_offset, PeakCorrection};

#[derive(Debug, Clone)]
pub struct AutocorrelationDetector<T>
where
    T: Float,
{
    size: usize,
    sample_rate: u32,
    rms_threshold: T,
    correlation_threshold: T,
    min_correlation_quality: T,
    peak_correction: PeakCorrection,
}

impl<T> AutocorrelationDetector<T>
where
    T: Float,
{
    /// Build a detector for frames of `size` samples captured at `sample_rate` Hz.
    pub fn new(size: usize, sample_rate: u32, config: &DetectorConfig) -> Result<Self> {
        config.validate()?;
        if size == 0 || size % 2 != 0 {
            return Err(PitchError::InvalidFrameSize(size));
        }
        if sample_rate == 0 {
            return Err(PitchError::InvalidSampleRate);
        }

        Ok(AutocorrelationDetector {
            size,
            sample_rate,
            rms_threshold: threshold("rms_threshold", config.rms_threshold)?,
            correlation_threshold: threshold(
                "correlation_threshold",
                config.correlation_threshold,
            )?,
            min_correlation_quality: threshold(
                "min_correlation_quality",
                config.min_correlation_quality,
            )?,
            peak_correction: config.peak_correction,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Same as [get_pitch](PitchDetector::get_pitch) for samples captured at the
    /// detector's own sample rate.
    pub fn estimate(&self, samples: &[T]) -> Result<Option<f64>> {
        self.get_pitch(&AudioFrame::new(samples, self.sample_rate))
    }

    fn check_frame(&self, frame: &AudioFrame<'_, T>) -> Result<()> {
        if frame.len() != self.size {
            return Err(PitchError::FrameLengthMismatch {
                expected: self.size,
                actual: frame.len(),
            });
        }
        if frame.sample_rate != self.sample_rate {
            return Err(PitchError::SampleRateMismatch {
                expected: self.sample_rate,
                actual: frame.sample_rate,
            });
        }
        match first_non_finite(frame.samples) {
            Some(index) => Err(PitchError::NonFiniteSample(index)),
            None => Ok(()),
        }
    }
}

impl<T> PitchDetector<T> for AutocorrelationDetector<T>
where
    T: Float,
{
    fn get_pitch(&self, frame: &AudioFrame<'_, T>) -> Result<Option<f64>> {
        self.check_frame(frame)?;

        let power = get_power_level(frame.samples);
        if power <= self.rms_threshold {
            log::trace!("rms {} at or below gate {}", power, self.rms_threshold);
            return Ok(None);
        }

        let candidate = match find_rising_inflection(
            frame.samples,
            self.correlation_threshold,
            self.min_correlation_quality,
        ) {
            Some(candidate) => candidate,
            None => {
                log::trace!("no rising run above correlation threshold");
                return Ok(None);
            }
        };

        let lag = correct_offset(&candidate, self.peak_correction)
            .to_f64()
            .unwrap_or(candidate.offset as f64);
        let frequency = self.sample_rate as f64 / lag;
        log::trace!(
            "lag {:.2} (step {}, rise {}) -> {:.2} Hz",
            lag,
            candidate.step,
            candidate.rise,
            frequency
        );
        Ok(Some(frequency))
    }
}

fn threshold<T: Float>(name: &str, value: f64) -> Result<T> {
    T::from_f64(value).ok_or_else(|| {
        PitchError::InvalidConfig(format!("{} = {} is not representable", name, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: u32 = 48000;
    const SIZE: usize = 2048;

    fn detector() -> AutocorrelationDetector<f64> {
        AutocorrelationDetector::new(SIZE, SAMPLE_RATE, &DetectorConfig::default()).unwrap()
    }

    fn sine(freq: f64, amplitude: f64) -> Vec<f64> {
        (0..SIZE)
            .map(|i| {
                amplitude * (2.0 * std::f64::consts::PI * freq * i as f64 / SAMPLE_RATE as f64).sin()
            })
            .collect()
    }

    #[test]
    fn silence_has_no_pitch() {
        let silence = vec![0.0; SIZE];
        assert_eq!(detector().estimate(&silence), Ok(None));
    }

    #[test]
    fn quiet_sine_is_gated() {
        // RMS of a sine is amplitude / sqrt(2), about 0.042 here.
        assert_eq!(detector().estimate(&sine(440.0, 0.06)), Ok(None));
    }

    #[test]
    fn sine_440() {
        let pitch = detector().estimate(&sine(440.0, 0.8)).unwrap().unwrap();
        assert!((pitch - 440.0).abs() < 5.0, "got {}", pitch);
    }

    #[test]
    fn quadratic_correction_refines_lag() {
        let config = DetectorConfig::default().with_peak_correction(PeakCorrection::Quadratic);
        let detector = AutocorrelationDetector::<f64>::new(SIZE, SAMPLE_RATE, &config).unwrap();

        let pitch = detector.estimate(&sine(440.0, 0.8)).unwrap().unwrap();
        assert!((pitch - 440.0).abs() < 1.0, "got {}", pitch);
    }

    #[test]
    fn rms_equal_to_threshold_is_gated() {
        // +/-0.5 square wave with a 100 sample period: every squared sample is exactly 0.25.
        let square: Vec<f64> = (0..SIZE)
            .map(|i| if (i / 50) % 2 == 0 { 0.5 } else { -0.5 })
            .collect();

        let at_gate = DetectorConfig::default().with_rms_threshold(0.5);
        let detector = AutocorrelationDetector::<f64>::new(SIZE, SAMPLE_RATE, &at_gate).unwrap();
        assert_eq!(detector.estimate(&square), Ok(None));

        let below_gate = DetectorConfig::default().with_rms_threshold(0.49);
        let detector = AutocorrelationDetector::<f64>::new(SIZE, SAMPLE_RATE, &below_gate).unwrap();
        assert!(detector.estimate(&square).unwrap().is_some());
    }

    #[test]
    fn rejects_malformed_frames() {
        let detector = detector();

        assert_eq!(
            detector.estimate(&vec![0.0; 1024]),
            Err(PitchError::FrameLengthMismatch {
                expected: SIZE,
                actual: 1024
            })
        );

        let signal = sine(440.0, 0.5);
        assert_eq!(
            detector.get_pitch(&AudioFrame::new(&signal, 44100)),
            Err(PitchError::SampleRateMismatch {
                expected: SAMPLE_RATE,
                actual: 44100
            })
        );

        let mut signal = signal;
        signal[17] = f64::NAN;
        assert_eq!(
            detector.estimate(&signal),
            Err(PitchError::NonFiniteSample(17))
        );
    }

    #[test]
    fn rejects_bad_construction() {
        let config = DetectorConfig::default();
        assert_eq!(
            AutocorrelationDetector::<f32>::new(1023, SAMPLE_RATE, &config).err(),
            Some(PitchError::InvalidFrameSize(1023))
        );
        assert_eq!(
            AutocorrelationDetector::<f32>::new(0, SAMPLE_RATE, &config).err(),
            Some(PitchError::InvalidFrameSize(0))
        );
        assert_eq!(
            AutocorrelationDetector::<f32>::new(SIZE, 0, &config).err(),
            Some(PitchError::InvalidSampleRate)
        );
        assert!(matches!(
            AutocorrelationDetector::<f32>::new(SIZE, SAMPLE_RATE, &config.with_history_size(0)),
            Err(PitchError::InvalidConfig(_))
        ));
    }
}
