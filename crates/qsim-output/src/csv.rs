//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `interval_summary.csv`
//! - `request_timings.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{IntervalSummaryRow, OutputResult, RequestTimingRow};

pub const SUMMARY_FILE: &str = "interval_summary.csv";
pub const TIMINGS_FILE: &str = "request_timings.csv";

/// Writes simulation statistics to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    timings:   Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header
    /// rows.  `dir` must exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summaries.write_record([
            "interval",
            "tick",
            "requests",
            "serviced",
            "completed",
            "pending",
            "qsize",
            "utilization",
            "r_requests",
            "r_serviced",
            "r_completed",
        ])?;

        let mut timings = Writer::from_path(dir.join(TIMINGS_FILE))?;
        timings.write_record(["interval", "response_time", "service_time"])?;

        Ok(Self {
            summaries,
            timings,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_summary(&mut self, row: &IntervalSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.interval.to_string(),
            row.tick.to_string(),
            row.requests.to_string(),
            row.serviced.to_string(),
            row.completed.to_string(),
            row.pending.to_string(),
            row.qsize.to_string(),
            row.utilization.to_string(),
            row.r_requests.to_string(),
            row.r_serviced.to_string(),
            row.r_completed.to_string(),
        ])?;
        Ok(())
    }

    fn write_timings(&mut self, rows: &[RequestTimingRow]) -> OutputResult<()> {
        for row in rows {
            self.timings.write_record(&[
                row.interval.to_string(),
                row.response_time.to_string(),
                row.service_time.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.timings.flush()?;
        Ok(())
    }
}
