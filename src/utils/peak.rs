use crate::detector::internals::Candidate;
use crate::float::Float;

/// How the lag of a detected period is refined before it is turned into a frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PeakCorrection {
    /// Fit a parabola through the crest and its two neighbours.
    Quadratic,
    /// Use the integer lag as is.
    None,
}

impl Default for PeakCorrection {
    fn default() -> Self {
        PeakCorrection::None
    }
}

struct Point<T: Float> {
    x: T,
    y: T,
}

/// Fractional lag of `candidate` under `correction`.
pub fn correct_offset<T: Float>(candidate: &Candidate<T>, correction: PeakCorrection) -> T {
    let center = T::from_usize(candidate.offset).unwrap_or_else(T::one);
    match (correction, candidate.scores) {
        (PeakCorrection::Quadratic, (left, crest, Some(right))) => {
            let one = T::one();
            quadratic_interpolation(
                Point {
                    x: center - one,
                    y: left,
                },
                Point { x: center, y: crest },
                Point {
                    x: center + one,
                    y: right,
                },
            )
            .x
        }
        _ => center,
    }
}

fn quadratic_interpolation<T: Float>(
    left: Point<T>,
    center: Point<T>,
    right: Point<T>,
) -> Point<T> {
    let two = T::one() + T::one();
    let denominator = two * center.y - left.y - right.y;
    if denominator <= T::zero() {
        return center;
    }
    let half = T::one() / two;
    let quarter = half * half;
    let shift = half * (right.y - left.y) / denominator;
    let x = center.x + shift;
    let y = center.y + quarter * (right.y - left.y) * shift;
    Point { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_correction() {
        let point = quadratic_interpolation(
            Point {
                x: -1.5,
                y: -(1.5 * 1.5) + 4.0,
            },
            Point {
                x: -0.5,
                y: -(0.5 * 0.5) + 4.0,
            },
            Point {
                x: 0.5,
                y: -(0.5 * 0.5) + 4.0,
            },
        );
        assert_eq!(point.x, 0.0);
        assert_eq!(point.y, 4.0);
    }

    #[test]
    fn correction_needs_both_neighbours() {
        let candidate = Candidate {
            offset: 100,
            step: 0.02,
            rise: 1.2,
            scores: (0.98, 0.99, None),
        };
        assert_eq!(correct_offset(&candidate, PeakCorrection::Quadratic), 100.0);

        let candidate = Candidate {
            scores: (0.98, 0.99, Some(0.98)),
            ..candidate
        };
        assert_eq!(correct_offset(&candidate, PeakCorrection::Quadratic), 100.0);
        assert_eq!(correct_offset(&candidate, PeakCorrection::None), 100.0);

        let candidate = Candidate {
            scores: (0.96, 0.99, Some(0.98)),
            ..candidate
        };
        assert!(correct_offset(&candidate, PeakCorrection::Quadratic) > 100.0);
    }
}
