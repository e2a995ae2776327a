use crate::error::{PitchError, Result};
use crate::float::Float;
use crate::utils::buffer::new_real_buffer;

/// Collects capture blocks of any length into (possibly overlapping) frames of
/// a fixed size.
///
/// The first frame is emitted once `window_size` samples have arrived; after
/// that a frame is emitted every `window_distance` samples.
#[derive(Debug, Clone)]
pub struct Framer<T>
where
    T: Float,
{
    window_size: usize,
    window_distance: usize,
    /// Samples since the start of the previous frame.
    window_distance_counter: usize,
    input_buffer: Vec<T>,
    input_buffer_write_index: usize,
    has_filled_input_buffer: bool,
    frame: Vec<T>,
    emitted_frame_count: usize,
}

impl<T> Framer<T>
where
    T: Float,
{
    pub fn new(window_size: usize, window_distance: usize) -> Result<Self> {
        if window_size == 0 || window_distance == 0 || window_distance > window_size {
            return Err(PitchError::InvalidWindowDistance {
                window_size,
                window_distance,
            });
        }
        Ok(Framer {
            window_size,
            window_distance,
            window_distance_counter: 0,
            input_buffer: new_real_buffer(window_size),
            input_buffer_write_index: 0,
            has_filled_input_buffer: false,
            frame: new_real_buffer(window_size),
            emitted_frame_count: 0,
        })
    }

    /// Accumulate `samples`, calling `handler` with every frame completed along
    /// the way. Stops at the first handler error; the rest of `samples` is
    /// dropped in that case.
    pub fn push<E, F>(&mut self, samples: &[T], mut handler: F) -> std::result::Result<(), E>
    where
        F: FnMut(&[T]) -> std::result::Result<(), E>,
    {
        for &sample in samples {
            self.input_buffer[self.input_buffer_write_index] = sample;
            self.input_buffer_write_index = (self.input_buffer_write_index + 1) % self.window_size;

            if !self.has_filled_input_buffer && self.input_buffer_write_index == 0 {
                self.has_filled_input_buffer = true;
            }
            if !self.has_filled_input_buffer {
                continue;
            }

            let should_emit = self.window_distance_counter == 0;
            self.window_distance_counter = (self.window_distance_counter + 1) % self.window_distance;
            if should_emit {
                // Unroll the ring buffer so the oldest sample comes first.
                let (newer, older) = self.input_buffer.split_at(self.input_buffer_write_index);
                self.frame[..older.len()].copy_from_slice(older);
                self.frame[older.len()..].copy_from_slice(newer);
                self.emitted_frame_count += 1;
                handler(&self.frame)?;
            }
        }
        Ok(())
    }

    /// Forget all buffered samples.
    pub fn reset(&mut self) {
        self.input_buffer.iter_mut().for_each(|s| *s = T::zero());
        self.input_buffer_write_index = 0;
        self.has_filled_input_buffer = false;
        self.window_distance_counter = 0;
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn window_distance(&self) -> usize {
        self.window_distance
    }

    /// Number of frames emitted since construction.
    pub fn emitted_frame_count(&self) -> usize {
        self.emitted_frame_count
    }
}
