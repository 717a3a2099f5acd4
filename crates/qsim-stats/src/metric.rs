//! A single accumulated value with a snapshot history.

use std::ops::AddAssign;

/// Running accumulator plus one history entry per reporting interval.
///
/// Use `Metric<u64>` for cumulative counters (`set` then `tick`) and
/// `Metric<f64>` for interval averages (`add` every step, `tick_and_reset`).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metric<T> {
    acc:     T,
    history: Vec<T>,
}

impl<T: Copy + Default + AddAssign> Metric<T> {
    pub fn new() -> Self {
        Self { acc: T::default(), history: Vec::new() }
    }

    #[inline]
    pub fn add(&mut self, v: T) {
        self.acc += v;
    }

    #[inline]
    pub fn set(&mut self, v: T) {
        self.acc = v;
    }

    /// Append the current value to the history; the accumulator keeps going.
    pub fn tick(&mut self) {
        self.history.push(self.acc);
    }

    /// Append the current value and start the next interval from zero.
    pub fn tick_and_reset(&mut self) {
        self.history.push(self.acc);
        self.acc = T::default();
    }

    /// Value accumulated since the last reset.
    #[inline]
    pub fn acc(&self) -> T {
        self.acc
    }

    pub fn history(&self) -> &[T] {
        &self.history
    }

    /// Most recent snapshot.
    pub fn last(&self) -> Option<T> {
        self.history.last().copied()
    }
}
