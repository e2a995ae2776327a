//! A pitch estimator paired with its consistency filter.
//!
//! One [Tuner] serves one audio session. Calls must arrive in capture order; the
//! tuner is `Send` but holds no lock, so sharing one between threads needs
//! external synchronization. Independent tuners share nothing.

use crate::config::DetectorConfig;
use crate::consistency::{ConsistencyFilter, DetectorState, FilterState};
use crate::detector::autocorrelation::AutocorrelationDetector;
use crate::detector::PitchDetector;
use crate::error::{PitchError, Result};
use crate::float::Float;
use crate::frame::AudioFrame;
use crate::utils::framer::Framer;

/// Outcome of one tuner step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Estimate for this frame alone.
    pub raw: Option<f64>,
    /// Estimate to show, present only once recent raw estimates agree.
    pub filtered: Option<f64>,
    /// Filter state after this step.
    pub state: FilterState,
}

#[derive(Debug, Clone)]
pub struct Tuner<T>
where
    T: Float,
{
    config: DetectorConfig,
    detector: AutocorrelationDetector<T>,
    filter: ConsistencyFilter,
    state: DetectorState,
}

impl<T> Tuner<T>
where
    T: Float,
{
    pub fn new(config: DetectorConfig, frame_size: usize, sample_rate: u32) -> Result<Self> {
        let detector = AutocorrelationDetector::new(frame_size, sample_rate, &config)?;
        let filter = ConsistencyFilter::new(&config)?;
        let state = filter.new_state();
        Ok(Tuner {
            config,
            detector,
            filter,
            state,
        })
    }

    /// Run one frame through the estimator and the filter and return the
    /// filtered estimate.
    pub fn process(&mut self, frame: &AudioFrame<'_, T>) -> Result<Option<f64>> {
        self.analyze(frame).map(|reading| reading.filtered)
    }

    /// [process](Tuner::process) for samples captured at the tuner's sample rate.
    pub fn process_samples(&mut self, samples: &[T]) -> Result<Option<f64>> {
        self.analyze_samples(samples).map(|reading| reading.filtered)
    }

    /// Like [process](Tuner::process), but also report the raw estimate and the
    /// filter state. A malformed frame leaves the history untouched.
    pub fn analyze(&mut self, frame: &AudioFrame<'_, T>) -> Result<Reading> {
        let raw = self.detector.get_pitch(frame)?;
        let filtered = self.filter.apply(&mut self.state, raw);
        Ok(Reading {
            raw,
            filtered,
            state: self.filter.state_of(&self.state),
        })
    }

    pub fn analyze_samples(&mut self, samples: &[T]) -> Result<Reading> {
        let frame = AudioFrame::new(samples, self.detector.sample_rate());
        self.analyze(&frame)
    }

    /// Feed a capture block through `framer` and analyze every frame it
    /// completes, handing each reading to `handler`.
    pub fn process_stream<F>(
        &mut self,
        framer: &mut Framer<T>,
        block: &[T],
        mut handler: F,
    ) -> Result<()>
    where
        F: FnMut(Reading),
    {
        if framer.window_size() != self.detector.size() {
            return Err(PitchError::FrameLengthMismatch {
                expected: self.detector.size(),
                actual: framer.window_size(),
            });
        }
        framer.push(block, |frame| {
            handler(self.analyze_samples(frame)?);
            Ok(())
        })
    }

    /// Drop the history, e.g. when the session stops.
    pub fn reset(&mut self) {
        self.state.clear();
    }

    /// Switch to `config` and start over with an empty history. On error the
    /// current configuration stays in force.
    pub fn reconfigure(&mut self, config: DetectorConfig) -> Result<()> {
        let detector =
            AutocorrelationDetector::new(self.detector.size(), self.detector.sample_rate(), &config)?;
        let filter = ConsistencyFilter::new(&config)?;
        log::debug!("reconfigured: {:?}", config);

        self.state = filter.new_state();
        self.detector = detector;
        self.filter = filter;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn filter_state(&self) -> FilterState {
        self.filter.state_of(&self.state)
    }

    /// Plausible raw estimates currently held, oldest first.
    pub fn history(&self) -> impl Iterator<Item = f64> + '_ {
        self.state.iter()
    }

    pub fn frame_size(&self) -> usize {
        self.detector.size()
    }

    pub fn sample_rate(&self) -> u32 {
        self.detector.sample_rate()
    }
}
