//! Integration tests for qsim-sim.

use qsim_core::{Discipline, RequestId, SimConfig, Tick};
use qsim_request::RequestRegister;
use qsim_stats::RunStats;

use crate::{NoopObserver, Sim, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(report_interval: u64) -> SimConfig {
    SimConfig {
        report_interval,
        deplete:          false,
        settle_intervals: SimConfig::DEFAULT_SETTLE_INTERVALS,
        seed:             42,
        discipline:       Discipline::Fifo,
    }
}

fn single_worker_sim(config: SimConfig, service_time: u64) -> Sim {
    SimBuilder::new(config).fixed_workers(1, service_time).build().unwrap()
}

/// Observer that records everything it is told.
#[derive(Default)]
struct Recorder {
    steps:     Vec<(u64, Tick)>,
    completed: Vec<RequestId>,
    snapshots: Vec<(usize, Tick)>,
    ended_at:  Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_step_end(&mut self, step: u64, now: Tick, completed: &[RequestId], requests: &RequestRegister) {
        assert!(completed.iter().all(|&id| requests[id].is_complete()));
        self.steps.push((step, now));
        self.completed.extend_from_slice(completed);
    }

    fn on_snapshot(&mut self, interval: usize, now: Tick, stats: &RunStats) {
        assert_eq!(stats.intervals(), interval + 1);
        self.snapshots.push((interval, now));
    }

    fn on_sim_end(&mut self, final_tick: Tick, _stats: &RunStats) {
        self.ended_at = Some(final_tick);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use qsim_worker::{FixedWorker, WorkerError};

    use super::*;

    #[test]
    fn builds_mixed_pool() {
        let sim = SimBuilder::new(test_config(5))
            .fixed_workers(2, 3)
            .random_workers(3, 4.0)
            .worker(FixedWorker::new(1).unwrap())
            .build()
            .unwrap();
        assert_eq!(sim.system.pool_size(), 6);
        assert_eq!(sim.steps(), 0);
        assert_eq!(sim.now(), Tick::ZERO);
    }

    #[test]
    fn zero_interval_errors() {
        let result = SimBuilder::new(test_config(0)).fixed_workers(1, 1).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn empty_pool_errors() {
        let result = SimBuilder::new(test_config(1)).build();
        assert!(matches!(result, Err(SimError::System(_))));
    }

    #[test]
    fn bad_worker_reports_its_index() {
        let result = SimBuilder::new(test_config(1))
            .fixed_workers(1, 2)
            .fixed_workers(1, 0)
            .build();
        match result {
            Err(SimError::Worker { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source, WorkerError::ZeroServiceTime);
            }
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("zero service time accepted"),
        }

        let result = SimBuilder::new(test_config(1)).random_workers(1, 0.25).build();
        assert!(matches!(result, Err(SimError::Worker { index: 0, .. })));
    }
}

// ── Canonical runs ────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn short_workload_with_unit_interval() {
        let mut sim = single_worker_sim(test_config(1), 1);
        let steps = sim.run([1, 3, 2, 0, 0, 0, 0, 0], &mut NoopObserver);
        assert_eq!(steps, 8);
        assert_eq!(sim.now(), Tick(8));

        let s = &sim.stats;
        assert_eq!(s.n_requests.history(), &[1, 4, 6, 6, 6, 6, 6, 6]);
        assert_eq!(s.n_serviced.history(), &[1, 2, 3, 4, 5, 6, 6, 6]);
        assert_eq!(s.n_completed.history(), &[1, 2, 3, 4, 5, 6, 6, 6]);
        assert_eq!(s.c_qsize.history(), &[0.0, 2.0, 3.0, 2.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(s.c_util.history(), &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0]);
        assert_eq!(s.c_pending.history(), &[1.0, 3.0, 4.0, 3.0, 2.0, 1.0, 0.0, 0.0]);

        let rt: Vec<Vec<u64>> = vec![vec![1], vec![1], vec![2], vec![3], vec![3], vec![4], vec![], vec![]];
        assert_eq!(s.response_time.history(), rt.as_slice());
        assert!(s.service_times().iter().all(|&t| t == 1));
    }

    #[test]
    fn lifo_reorders_response_times() {
        let config = SimConfig { discipline: Discipline::Lifo, ..test_config(1) };
        let mut sim = single_worker_sim(config, 1);
        sim.run([1, 3, 2, 0, 0, 0, 0, 0], &mut NoopObserver);
        let rt: Vec<Vec<u64>> = vec![vec![1], vec![1], vec![1], vec![2], vec![4], vec![5], vec![], vec![]];
        assert_eq!(sim.stats.response_time.history(), rt.as_slice());
        assert_eq!(sim.stats.n_completed.history(), &[1, 2, 3, 4, 5, 6, 6, 6]);
    }

    #[test]
    fn averages_span_the_interval() {
        // Width 4: one arrival per step into a duration-2 worker.
        let mut sim = single_worker_sim(test_config(4), 2);
        sim.run([1, 1, 1, 1, 0, 0, 0, 0], &mut NoopObserver);
        let s = &sim.stats;
        assert_eq!(s.intervals(), 2);
        assert_eq!(s.n_requests.history(), &[4, 4]);
        assert_eq!(s.n_completed.history(), &[2, 4]);
        // The single worker is busy on every step until the queue drains.
        assert_eq!(s.c_util.history(), &[1.0, 1.0]);
        assert_eq!(s.c_qsize.history(), &[1.0, 0.5]);
    }

    #[test]
    fn stops_at_workload_end_without_deplete() {
        let mut sim = single_worker_sim(test_config(2), 5);
        let steps = sim.run([3], &mut NoopObserver);
        assert_eq!(steps, 1);
        assert_eq!(sim.stats.intervals(), 0);
        assert!(!sim.system.is_empty());
    }

    #[test]
    fn conservation_holds_every_step() {
        let mut sim = SimBuilder::new(test_config(3))
            .fixed_workers(2, 4)
            .random_workers(3, 3.0)
            .build()
            .unwrap();
        for t in 0..300u64 {
            let arrivals = if t < 150 { t % 3 } else { 0 };
            for id in sim.step(arrivals, &mut NoopObserver) {
                let r = &sim.register[id];
                assert!(r.response_time() >= r.service_time());
            }
            let sys = &sim.system;
            assert_eq!(sys.n_arrived() - sys.n_completed(), (sys.qsize() + sys.n_busy()) as u64);
            assert!(sys.wmax() < sys.pool_size());
        }
        assert!(sim.system.is_empty());
        assert_eq!(sim.system.wmax(), 0);
        // Cumulative series never decrease.
        for (_, m) in sim.stats.counters() {
            assert!(m.history().windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn same_seed_reproduces_the_run() {
        let run = |seed| {
            let config = SimConfig { seed, deplete: true, ..test_config(5) };
            let mut sim = SimBuilder::new(config).random_workers(4, 7.5).build().unwrap();
            sim.run((0..200u64).map(|t| t % 3), &mut NoopObserver);
            sim.into_stats()
        };
        assert_eq!(run(9), run(9));
    }
}

// ── Deplete mode ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod deplete_tests {
    use super::*;

    #[test]
    fn drains_then_settles_for_three_boundaries() {
        let config = SimConfig { deplete: true, ..test_config(2) };
        let mut sim = single_worker_sim(config, 3);
        let mut rec = Recorder::default();
        let steps = sim.run([2], &mut rec);

        // Both requests are done after step 5 (t = 6); boundaries at steps
        // 7, 9 and 11 follow before the run stops.
        assert_eq!(steps, 12);
        assert_eq!(rec.ended_at, Some(Tick(12)));
        assert_eq!(rec.steps.len(), 12);
        assert_eq!(rec.snapshots.len(), 6);
        assert_eq!(rec.snapshots.last(), Some(&(5, Tick(12))));
        assert_eq!(rec.completed, vec![RequestId(0), RequestId(1)]);

        let s = &sim.stats;
        assert_eq!(s.n_completed.history(), &[0, 1, 2, 2, 2, 2]);
        let rt: Vec<Vec<u64>> = vec![vec![], vec![3], vec![6], vec![], vec![], vec![]];
        assert_eq!(s.response_time.history(), rt.as_slice());
        assert_eq!(s.service_times(), vec![3, 3]);
    }

    #[test]
    fn zero_settle_stops_as_soon_as_empty() {
        let config = SimConfig { deplete: true, settle_intervals: 0, ..test_config(1) };
        let mut sim = single_worker_sim(config, 1);
        assert_eq!(sim.run([1], &mut NoopObserver), 1);
        assert!(sim.system.is_empty());
    }

    #[test]
    fn empty_workload_still_settles() {
        let config = SimConfig { deplete: true, ..test_config(1) };
        let mut sim = single_worker_sim(config, 1);
        assert_eq!(sim.run(std::iter::empty(), &mut NoopObserver), 3);
        assert_eq!(sim.stats.n_requests.history(), &[0, 0, 0]);
    }
}
