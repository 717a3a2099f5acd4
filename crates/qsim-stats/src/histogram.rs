//! Raw samples grouped by reporting interval.

/// Samples collected during the current interval, plus one bucket per
/// finished interval.  Buckets may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    acc:     Vec<u64>,
    history: Vec<Vec<u64>>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add(&mut self, v: u64) {
        self.acc.push(v);
    }

    /// Flush the current samples into a new bucket.
    pub fn tick(&mut self) {
        self.history.push(std::mem::take(&mut self.acc));
    }

    /// Samples not yet flushed.
    pub fn acc(&self) -> &[u64] {
        &self.acc
    }

    /// One bucket per finished interval.
    pub fn history(&self) -> &[Vec<u64>] {
        &self.history
    }

    /// Every flushed sample, interval by interval.
    pub fn samples(&self) -> impl Iterator<Item = u64> + '_ {
        self.history.iter().flatten().copied()
    }
}

impl Extend<u64> for Histogram {
    fn extend<I: IntoIterator<Item = u64>>(&mut self, iter: I) {
        self.acc.extend(iter);
    }
}
