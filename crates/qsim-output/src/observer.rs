//! `StatsOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use qsim_core::Tick;
use qsim_sim::SimObserver;
use qsim_stats::RunStats;

use crate::row::{IntervalSummaryRow, RequestTimingRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that exports each snapshot as it is taken.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct StatsOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> StatsOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for StatsOutputObserver<W> {
    fn on_snapshot(&mut self, interval: usize, now: Tick, stats: &RunStats) {
        if let Some(row) = IntervalSummaryRow::from_stats(stats, interval, now) {
            let result = self.writer.write_summary(&row);
            self.store_err(result);
        }

        let timings = RequestTimingRow::from_stats(stats, interval);
        if !timings.is_empty() {
            let result = self.writer.write_timings(&timings);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &RunStats) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
