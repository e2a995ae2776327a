use crate::float::Float;

/// One fixed-length block of mono samples, borrowed from the capture layer for
/// the duration of a single estimation call.
#[derive(Debug, Clone, Copy)]
pub struct AudioFrame<'a, T>
where
    T: Float,
{
    pub samples: &'a [T],
    pub sample_rate: u32,
}

impl<'a, T> AudioFrame<'a, T>
where
    T: Float,
{
    pub fn new(samples: &'a [T], sample_rate: u32) -> Self {
        AudioFrame {
            samples,
            sample_rate,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
