//! Fixed-size moving average
//!
//! The running sum is updated incrementally, so inserting a sample and
//! reading the mean are both O(1).

use heapless::HistoryBuffer;

/// Ring buffer of the last `N` samples plus their sum
///
/// Starts filled with zeros, so the mean always divides by `N`.
#[derive(Debug, Clone)]
pub struct SampleWindow<const N: usize> {
    samples: HistoryBuffer<i16, N>,
    running_sum: i32,
}

impl<const N: usize> Default for SampleWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SampleWindow<N> {
    const NON_EMPTY: () = assert!(N > 0, "sample window needs at least one slot");

    /// Create a window of zero samples
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;

        Self {
            samples: HistoryBuffer::new_with(0),
            running_sum: 0,
        }
    }

    /// Insert the newest sample, evicting the oldest
    ///
    /// Returns the evicted sample.
    pub fn push(&mut self, sample: i16) -> i16 {
        let evicted = self.samples.oldest_ordered().next().copied().unwrap_or(0);
        self.samples.write(sample);
        self.running_sum = self.running_sum - evicted as i32 + sample as i32;
        evicted
    }

    /// Sum of the samples currently held
    pub fn sum(&self) -> i32 {
        self.running_sum
    }

    /// Mean over the whole window (truncated toward zero)
    pub fn mean(&self) -> i32 {
        self.running_sum / N as i32
    }

    /// Number of slots in the window
    pub const fn capacity(&self) -> usize {
        N
    }
}
