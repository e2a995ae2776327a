use crate::float::Float;
use crate::utils::buffer::rms;

/// The crest of the first strong upward run of the difference score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<T>
where
    T: Float,
{
    /// Lag in samples where the run tops out. Never zero.
    pub offset: usize,
    /// Largest single-lag increase of the score within the run.
    pub step: T,
    /// Increase of the score over the whole run, measured from the bottom of the
    /// valley that precedes it.
    pub rise: T,
    /// Score at `offset - 1`, `offset` and `offset + 1`. The last one is missing
    /// when the run reaches the end of the search.
    pub scores: (T, T, Option<T>),
}

/// Energy of the frame used for the silence gate.
pub fn get_power_level<T: Float>(signal: &[T]) -> T {
    rms(signal)
}

/// Normalized difference score of `signal` against itself shifted by `offset`,
/// over a window of `window_size` samples:
///
/// > s(k) = 1 - (1/w) * sum_{i=0}^{w-1} |x_i - x_{i+k}|
///
/// This is `1` when the signal repeats exactly after `offset` samples. It is
/// assumed that `window_size + offset <= signal.len()`.
pub fn difference_score<T: Float>(signal: &[T], window_size: usize, offset: usize) -> T {
    let window = T::from_usize(window_size).unwrap_or_else(T::one);
    let distance = signal[..window_size]
        .iter()
        .zip(signal[offset..offset + window_size].iter())
        .map(|(&a, &b)| (a - b).abs())
        .sum::<T>();
    T::one() - distance / window
}

/// Search lags `1..=signal.len() / 2` for the first upward inflection of the
/// difference score.
///
/// The previous score is seeded at `1` and updated at every lag. A lag belongs to
/// a rising run when its score is above `correlation_threshold` and above the
/// previous score; the rising step of each such lag is the increase over the
/// previous score. When a run ends, it is accepted if its total rise reaches
/// `min_quality`, otherwise it is dropped and the search goes on. Runs at multiples
/// of the period are never reached once the first one is accepted.
pub fn find_rising_inflection<T: Float>(
    signal: &[T],
    correlation_threshold: T,
    min_quality: T,
) -> Option<Candidate<T>> {
    let window_size = signal.len() / 2;
    let mut last_correlation = T::one();
    let mut valley = T::one();
    let mut run: Option<Candidate<T>> = None;

    for offset in 1..=window_size {
        let correlation = difference_score(signal, window_size, offset);

        if correlation > correlation_threshold && correlation > last_correlation {
            let step = correlation - last_correlation;
            let best_step = run.map_or(step, |r| if step > r.step { step } else { r.step });
            run = Some(Candidate {
                offset,
                step: best_step,
                rise: correlation - valley,
                scores: (last_correlation, correlation, None),
            });
        } else if let Some(mut candidate) = run.take() {
            if candidate.rise >= min_quality {
                candidate.scores.2 = Some(correlation);
                return Some(candidate);
            }
            log::trace!(
                "dropping shallow run at lag {} (rise {})",
                candidate.offset,
                candidate.rise
            );
        }

        if correlation <= last_correlation {
            valley = correlation;
        }
        last_correlation = correlation;
    }

    run.filter(|candidate| candidate.rise >= min_quality)
}
