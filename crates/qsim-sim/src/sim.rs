//! The `Sim` struct and its step loop.

use tracing::{debug, info, trace};

use qsim_core::{RequestId, SimConfig, Tick};
use qsim_request::RequestRegister;
use qsim_stats::RunStats;
use qsim_system::QSystem;

use crate::SimObserver;

/// The simulation runner.
///
/// `Sim` is the exclusive owner of the request register (and with it the
/// clock), the queueing system, and the statistics; no other code mutates
/// them while a run is in progress.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (reporting interval, deplete mode, seed, …).
    pub config: SimConfig,

    /// Request ledger and owner of the run clock.
    pub register: RequestRegister,

    /// Pending queue and worker pool.
    pub system: QSystem,

    /// Telemetry collected so far.
    pub stats: RunStats,

    /// Steps executed so far.
    steps: u64,
}

impl Sim {
    pub(crate) fn new(config: SimConfig, system: QSystem) -> Self {
        Self {
            config,
            register: RequestRegister::new(),
            system,
            stats: RunStats::new(),
            steps: 0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Step once per workload entry, submitting that many arrivals each time.
    ///
    /// In deplete mode, keeps stepping with no arrivals after the workload
    /// ends until the system is empty and `config.settle_intervals` more
    /// reporting boundaries have passed.  Returns the number of steps taken
    /// by this call.
    pub fn run<I, O>(&mut self, workload: I, observer: &mut O) -> u64
    where
        I: IntoIterator<Item = u64>,
        O: SimObserver,
    {
        info!(
            workers    = self.system.pool_size(),
            discipline = %self.system.discipline(),
            interval   = self.config.report_interval,
            deplete    = self.config.deplete,
            "simulation starting"
        );

        let first_step = self.steps;
        let mut workload = workload.into_iter();
        // Reporting boundaries still to run once a depleting system is empty.
        let mut settle: Option<u32> = None;

        loop {
            let arrivals = match workload.next() {
                Some(n) => n,
                None if !self.config.deplete => break,
                None => {
                    if settle.is_none() && self.system.is_empty() {
                        debug!(now = %self.register.now(), "system drained, settling");
                        settle = Some(self.config.settle_intervals);
                    }
                    if settle == Some(0) {
                        break;
                    }
                    0
                }
            };

            self.step(arrivals, observer);

            if let Some(remaining) = settle.as_mut() {
                if self.config.is_report_boundary(self.steps - 1) {
                    *remaining -= 1;
                }
            }
        }

        let taken = self.steps - first_step;
        info!(
            steps     = taken,
            now       = %self.register.now(),
            requests  = self.register.count(),
            completed = self.system.n_completed(),
            "simulation finished"
        );
        observer.on_sim_end(self.register.now(), &self.stats);
        taken
    }

    /// Execute one step with `arrivals` new requests and return the requests
    /// that completed during it.
    pub fn step<O: SimObserver>(&mut self, arrivals: u64, observer: &mut O) -> Vec<RequestId> {
        // ── ① Submit ──────────────────────────────────────────────────────
        for _ in 0..arrivals {
            let id = self.register.start();
            self.system.submit(id);
        }

        // ── ② Assign, ③ advance the clock ─────────────────────────────────
        //
        // Service is measured from the tick after assignment, so the clock
        // must move between the two phases.
        self.system.tick_assign(&mut self.register);
        self.register.tick();

        // ── ④ Interval averages ───────────────────────────────────────────
        //
        // Sampled before completion so a request served during this tick
        // still counts as in service for it.
        let sys = &self.system;
        self.stats.accumulate(
            sys.n_arrived() - sys.n_completed(),
            sys.n_arrived() - sys.n_serviced(),
            sys.n_serviced() - sys.n_completed(),
            self.config.report_interval,
        );

        // ── ⑤ Complete ────────────────────────────────────────────────────
        let completed = self.system.tick_complete(&mut self.register);
        for &id in &completed {
            let request = &self.register[id];
            self.stats.record_completion(request.response_time(), request.service_time());
        }

        let step = self.steps;
        let now = self.register.now();
        trace!(
            step,
            %now,
            arrivals,
            completed = completed.len(),
            qsize     = self.system.qsize(),
            wmax      = self.system.wmax(),
            "step"
        );
        observer.on_step_end(step, now, &completed, &self.register);

        // ── ⑥ Snapshot ────────────────────────────────────────────────────
        if self.config.is_report_boundary(step) {
            self.stats.snapshot(
                self.system.n_arrived(),
                self.system.n_serviced(),
                self.system.n_completed(),
            );
            let interval = self.stats.intervals() - 1;
            debug!(
                interval,
                %now,
                arrived   = self.system.n_arrived(),
                completed = self.system.n_completed(),
                qsize     = self.system.qsize(),
                "snapshot"
            );
            observer.on_snapshot(interval, now, &self.stats);
        }

        self.steps += 1;
        completed
    }

    /// Steps executed so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Current simulated time.
    #[inline]
    pub fn now(&self) -> Tick {
        self.register.now()
    }

    /// Consume the runner and keep only the collected statistics.
    pub fn into_stats(self) -> RunStats {
        self.stats
    }
}
