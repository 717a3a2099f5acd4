//! The `OutputWriter` trait implemented by backend writers.

use crate::{IntervalSummaryRow, OutputResult, RequestTimingRow};

/// A sink for exported statistics.
///
/// Errors are stored by [`StatsOutputObserver`](crate::StatsOutputObserver)
/// and retrieved with its `take_error`.
pub trait OutputWriter {
    /// Write one reporting interval's summary.
    fn write_summary(&mut self, row: &IntervalSummaryRow) -> OutputResult<()>;

    /// Write the timings of requests completed in one interval.
    fn write_timings(&mut self, rows: &[RequestTimingRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
