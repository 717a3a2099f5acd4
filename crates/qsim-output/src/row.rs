//! Plain data row types written by output backends.

use qsim_core::Tick;
use qsim_stats::RunStats;

/// One reporting interval, flattened.
///
/// The `r_*` columns are the per-interval increments of the cumulative
/// counters (for the first interval, the counter itself).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalSummaryRow {
    pub interval:    u64,
    /// Clock value when the interval was snapshotted.
    pub tick:        u64,
    pub requests:    u64,
    pub serviced:    u64,
    pub completed:   u64,
    /// Mean requests in the system over the interval.
    pub pending:     f64,
    /// Mean queue length over the interval.
    pub qsize:       f64,
    /// Mean busy workers over the interval.
    pub utilization: f64,
    pub r_requests:  u64,
    pub r_serviced:  u64,
    pub r_completed: u64,
}

impl IntervalSummaryRow {
    /// Build the row for snapshot `interval`, or `None` if no such snapshot
    /// exists yet.
    pub fn from_stats(stats: &RunStats, interval: usize, tick: Tick) -> Option<Self> {
        let at = |series: &[u64]| -> Option<(u64, u64)> {
            let value = *series.get(interval)?;
            let previous = match interval {
                0 => 0,
                i => series[i - 1],
            };
            Some((value, value - previous))
        };

        let (requests, r_requests) = at(stats.n_requests.history())?;
        let (serviced, r_serviced) = at(stats.n_serviced.history())?;
        let (completed, r_completed) = at(stats.n_completed.history())?;

        Some(Self {
            interval: interval as u64,
            tick: tick.0,
            requests,
            serviced,
            completed,
            pending:     *stats.c_pending.history().get(interval)?,
            qsize:       *stats.c_qsize.history().get(interval)?,
            utilization: *stats.c_util.history().get(interval)?,
            r_requests,
            r_serviced,
            r_completed,
        })
    }
}

/// Timings of one completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimingRow {
    /// Interval in which the request completed.
    pub interval:      u64,
    pub response_time: u64,
    pub service_time:  u64,
}

impl RequestTimingRow {
    /// All timing rows of snapshot `interval` (empty if none completed).
    pub fn from_stats(stats: &RunStats, interval: usize) -> Vec<Self> {
        let response = stats.response_time.history().get(interval);
        let service = stats.service_time.history().get(interval);
        match (response, service) {
            (Some(response), Some(service)) => response
                .iter()
                .zip(service)
                .map(|(&response_time, &service_time)| Self {
                    interval: interval as u64,
                    response_time,
                    service_time,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}
