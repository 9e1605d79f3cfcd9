//! Fixed-capacity rolling sample window

use std::collections::VecDeque;

/// A fixed-length FIFO window over the most recent samples.
///
/// The window is zero-prefilled at construction, so its length is constant
/// from the first frame: pushing a sample always evicts the oldest element.
#[derive(Debug, Clone)]
pub struct RollingBuffer {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl RollingBuffer {
    /// Create a window of `capacity` samples, prefilled with zeros.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "rolling buffer capacity must be non-zero");
        let mut samples = VecDeque::with_capacity(capacity);
        samples.extend(std::iter::repeat(0.0).take(capacity));
        RollingBuffer { samples, capacity }
    }

    /// Push a new sample, evicting the oldest one.
    pub fn push(&mut self, sample: f32) {
        self.samples.pop_front();
        self.samples.push_back(sample);
    }

    /// Window length; always equals the configured capacity.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.samples.iter()
    }

    /// Copy the window out as a contiguous vector, oldest first.
    pub fn to_vec(&self) -> Vec<f32> {
        self.samples.iter().copied().collect()
    }
}
