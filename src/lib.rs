//! # Pitch Tuner
//! *pitch_tuner* estimates the fundamental frequency of short audio frames fast
//! enough to drive a voice or instrument tuner, and only reports a pitch once
//! several consecutive frames agree on it.
//!
//! # Pipeline
//! Frames flow one way through two stages:
//!
//!   * [AutocorrelationDetector][detector::autocorrelation] turns one frame into a raw
//!     estimate, or nothing for silence and frames without a clear period.
//!   * [ConsistencyFilter][consistency] keeps a short history of raw estimates and
//!     only lets a value through when the whole history agrees.
//!
//! A [Tuner][tuner::Tuner] owns one of each, plus the history they share.
//!
//! # Examples
//! ```
//! use pitch_tuner::{DetectorConfig, Tuner};
//!
//! fn main() -> Result<(), pitch_tuner::PitchError> {
//!     const SAMPLE_RATE: u32 = 48000;
//!     const SIZE: usize = 2048;
//!
//!     let mut tuner = Tuner::<f32>::new(DetectorConfig::default(), SIZE, SAMPLE_RATE)?;
//!
//!     // Frames coming from some source (microphone, generated, etc...)
//!     let freq = 220.0;
//!     let mut pitch = None;
//!     for n in 0..5 {
//!         let frame: Vec<f32> = (n * SIZE..(n + 1) * SIZE)
//!             .map(|i| (2.0 * std::f32::consts::PI * freq * i as f32 / SAMPLE_RATE as f32).sin())
//!             .collect();
//!         pitch = tuner.process_samples(&frame)?;
//!     }
//!
//!     println!("Frequency: {:?}", pitch);
//!     Ok(())
//! }
//! ```

pub use config::{DetectorConfig, PlausibleRange};
pub use consistency::{ConsistencyFilter, DetectorState, FilterState};
pub use error::{PitchError, Result};
pub use frame::AudioFrame;
pub use tuner::{Reading, Tuner};

pub mod config;
pub mod consistency;
pub mod detector;
pub mod error;
pub mod float;
pub mod frame;
pub mod tuner;
pub mod utils;
