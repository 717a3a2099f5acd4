//! `qsim-output` — tabular export of simulation statistics.
//!
//! | Backend     | Files created                                       |
//! |-------------|-----------------------------------------------------|
//! | CSV         | `interval_summary.csv`, `request_timings.csv`       |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`StatsOutputObserver`], which implements `qsim_sim::SimObserver` and
//! writes one summary row (plus that interval's timings) per snapshot.
//! Percentiles are not computed here; `request_timings.csv` carries the raw
//! samples for whatever analysis tool reads it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use qsim_output::{CsvWriter, StatsOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = StatsOutputObserver::new(writer);
//! sim.run(workload, &mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::StatsOutputObserver;
pub use row::{IntervalSummaryRow, RequestTimingRow};
pub use writer::OutputWriter;
