//! `qsim-stats` — telemetry collected while a simulation runs.
//!
//! | Type          | Accumulator              | Snapshot (`tick`)                      |
//! |---------------|--------------------------|----------------------------------------|
//! | [`Metric`]    | one value (`add`/`set`)  | appends the value, optionally resets   |
//! | [`Histogram`] | raw samples              | appends the interval's bucket, clears  |
//! | [`RunStats`]  | the named set of both    | snapshots all of them together        |
//!
//! Percentiles and other summaries over the histogram buckets are left to
//! the consumer; this crate only groups raw samples by reporting interval.

pub mod histogram;
pub mod metric;
pub mod run_stats;


pub use histogram::Histogram;
pub use metric::Metric;
pub use run_stats::RunStats;
