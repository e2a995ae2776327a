//! Temporal consistency gate over raw estimates.
//!
//! A raw estimate is only trusted once the last `history_size` plausible estimates agree with
//! each other. A missing or implausible estimate throws the whole history away instead of
//! being skipped: it usually means the note stopped or changed, and a stale history would
//! hold the display on a note that is no longer sounding.

use crate::config::{DetectorConfig, PlausibleRange};
use crate::error::Result;
use crate::utils::buffer::consensus_mean;

mod state;

pub use state::DetectorState;

/// Where a [DetectorState] stands relative to its filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    /// No history.
    Empty,
    /// Some plausible estimates, fewer than `history_size`.
    Filling,
    /// Full history that does not agree yet.
    Unsettled,
    /// Full history whose entries all lie within tolerance of their mean.
    Stable,
}

#[derive(Debug, Clone)]
pub struct ConsistencyFilter {
    history_size: usize,
    pitch_tolerance: f64,
    plausible_range: PlausibleRange,
}

impl ConsistencyFilter {
    pub fn new(config: &DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(ConsistencyFilter {
            history_size: config.history_size,
            pitch_tolerance: config.pitch_tolerance,
            plausible_range: config.plausible_range,
        })
    }

    /// An empty history sized for this filter.
    pub fn new_state(&self) -> DetectorState {
        DetectorState::new(self.history_size)
    }

    pub fn history_size(&self) -> usize {
        self.history_size
    }

    /// Feed one raw estimate and return the filtered estimate for this step.
    pub fn apply(&self, state: &mut DetectorState, raw: Option<f64>) -> Option<f64> {
        if state.capacity() != self.history_size {
            log::debug!(
                "history sized {} does not match filter size {}, replacing it",
                state.capacity(),
                self.history_size
            );
            *state = self.new_state();
        }

        let frequency = match raw {
            Some(frequency) if self.plausible_range.contains(frequency) => frequency,
            _ => {
                if !state.is_empty() {
                    log::debug!("resetting {} entries on {:?}", state.len(), raw);
                }
                state.clear();
                return None;
            }
        };

        state.push(frequency);
        if !state.is_full() {
            return None;
        }
        self.consensus(state)
    }

    /// Classify `state` under this filter's rules.
    pub fn state_of(&self, state: &DetectorState) -> FilterState {
        if state.is_empty() {
            FilterState::Empty
        } else if state.len() < self.history_size {
            FilterState::Filling
        } else if self.consensus(state).is_some() {
            FilterState::Stable
        } else {
            FilterState::Unsettled
        }
    }

    fn consensus(&self, state: &DetectorState) -> Option<f64> {
        let average = consensus_mean(state.iter())?;
        if state
            .iter()
            .all(|entry| (entry - average).abs() < self.pitch_tolerance)
        {
            Some(average)
        } else {
            None
        }
    }
}
