//! Simulation observer trait for progress reporting and data collection.

use qsim_core::{RequestId, Tick};
use qsim_request::RequestRegister;
use qsim_stats::RunStats;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::step`][crate::Sim::step].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_snapshot(&mut self, interval: usize, now: Tick, stats: &RunStats) {
///         println!("{now}: interval {interval}, {:?} completed", stats.n_completed.last());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after each step, once its completions have been harvested.
    ///
    /// `now` is the clock after the step's advance.  `completed` lists the
    /// requests finished during the step, in worker-index order; look their
    /// timings up in `requests`.
    fn on_step_end(
        &mut self,
        _step:      u64,
        _now:       Tick,
        _completed: &[RequestId],
        _requests:  &RequestRegister,
    ) {}

    /// Called right after the statistics are snapshotted.  `interval` is the
    /// zero-based index of the snapshot just appended to every series.
    fn on_snapshot(&mut self, _interval: usize, _now: Tick, _stats: &RunStats) {}

    /// Called once when [`Sim::run`][crate::Sim::run] stops stepping.
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &RunStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
