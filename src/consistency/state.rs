use std::collections::VecDeque;

/// Rolling history of plausible raw estimates, oldest first.
///
/// Owned by exactly one caller and lent to
/// [ConsistencyFilter::apply](super::ConsistencyFilter::apply) for each new
/// estimate. It never holds more than `capacity` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorState {
    history: VecDeque<f64>,
    capacity: usize,
}

impl DetectorState {
    pub fn new(capacity: usize) -> Self {
        DetectorState {
            history: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.history.len() >= self.capacity
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.history.iter().copied()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Append `frequency`, evicting the oldest entries when at capacity.
    pub(crate) fn push(&mut self, frequency: f64) {
        while self.history.len() >= self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(frequency);
    }
}
