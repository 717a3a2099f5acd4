//! The named statistics of one simulation run.

use crate::{Histogram, Metric};

/// Everything the driver records, snapshotted together at each reporting
/// boundary.
///
/// Two kinds of series share the same index (one entry per interval):
///
/// - **Cumulative counters**: totals since the start of the run, set at the
///   boundary.  Non-decreasing along the history.
/// - **Interval averages**: `value / interval` added every step and reset
///   after each snapshot, i.e. the time-average over the interval.
///
/// The two histograms hold the timings of requests that completed during
/// each interval, in completion order.  Entry `i` of `response_time` and of
/// `service_time` always belongs to the same request.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// Cumulative arrivals.
    pub n_requests:    Metric<u64>,
    /// Cumulative requests bound to a worker.
    pub n_serviced:    Metric<u64>,
    /// Cumulative completions.
    pub n_completed:   Metric<u64>,
    /// Mean requests in the system (queued or in service).
    pub c_pending:     Metric<f64>,
    /// Mean queue length.
    pub c_qsize:       Metric<f64>,
    /// Mean number of busy workers.
    pub c_util:        Metric<f64>,
    pub response_time: Histogram,
    pub service_time:  Histogram,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one step's share of the interval averages.
    pub fn accumulate(&mut self, pending: u64, qsize: u64, in_service: u64, interval: u64) {
        let width = interval as f64;
        self.c_pending.add(pending as f64 / width);
        self.c_qsize.add(qsize as f64 / width);
        self.c_util.add(in_service as f64 / width);
    }

    /// Record the timings of one completed request.
    pub fn record_completion(&mut self, response_time: u64, service_time: u64) {
        self.response_time.add(response_time);
        self.service_time.add(service_time);
    }

    /// Set the cumulative counters and close the interval.
    pub fn snapshot(&mut self, arrived: u64, serviced: u64, completed: u64) {
        self.n_requests.set(arrived);
        self.n_serviced.set(serviced);
        self.n_completed.set(completed);
        self.tick();
    }

    /// Snapshot every series.
    pub fn tick(&mut self) {
        self.n_requests.tick();
        self.n_serviced.tick();
        self.n_completed.tick();
        self.c_pending.tick_and_reset();
        self.c_qsize.tick_and_reset();
        self.c_util.tick_and_reset();
        self.response_time.tick();
        self.service_time.tick();
    }

    /// Number of snapshots taken.
    pub fn intervals(&self) -> usize {
        self.n_requests.history().len()
    }

    /// The counter series, by name, in a stable order.
    pub fn counters(&self) -> [(&'static str, &Metric<u64>); 3] {
        [
            ("requests", &self.n_requests),
            ("serviced", &self.n_serviced),
            ("completed", &self.n_completed),
        ]
    }

    /// The interval-average series, by name, in a stable order.
    pub fn averages(&self) -> [(&'static str, &Metric<f64>); 3] {
        [
            ("pending", &self.c_pending),
            ("qsize", &self.c_qsize),
            ("utilization", &self.c_util),
        ]
    }

    /// Every response time recorded over the whole run.
    pub fn response_times(&self) -> Vec<u64> {
        self.response_time.samples().collect()
    }

    /// Every service time recorded over the whole run.
    pub fn service_times(&self) -> Vec<u64> {
        self.service_time.samples().collect()
    }
}
