//! The `QSystem` struct and its two scheduling phases.

use std::collections::VecDeque;

use tracing::trace;

use qsim_core::{Discipline, RequestId};
use qsim_request::RequestRegister;
use qsim_worker::Worker;

use crate::{SystemError, SystemResult};

/// A pending queue in front of a fixed pool of workers.
///
/// Counters only ever grow and always satisfy
/// `n_arrived >= n_serviced >= n_completed`.  At every step boundary
///
/// ```text
///   n_arrived - n_completed == qsize() + n_busy()
/// ```
pub struct QSystem {
    /// Requests waiting for a worker.  Arrivals are pushed at the back.
    queue:       VecDeque<RequestId>,
    workers:     Vec<Box<dyn Worker>>,
    /// Highest worker index that may be busy.  Every worker above it is idle.
    wmax:        usize,
    discipline:  Discipline,
    n_arrived:   u64,
    n_serviced:  u64,
    n_completed: u64,
}

impl QSystem {
    /// Build a system over a non-empty, possibly heterogeneous worker pool.
    pub fn new(workers: Vec<Box<dyn Worker>>, discipline: Discipline) -> SystemResult<Self> {
        if workers.is_empty() {
            return Err(SystemError::EmptyPool);
        }
        Ok(Self {
            queue: VecDeque::new(),
            workers,
            wmax: 0,
            discipline,
            n_arrived: 0,
            n_serviced: 0,
            n_completed: 0,
        })
    }

    /// Like [`new`](Self::new), with the discipline given by name
    /// (`"fifo"` or `"lifo"`).  Unknown names are rejected here, before any
    /// request is submitted.
    pub fn with_discipline_name(workers: Vec<Box<dyn Worker>>, discipline: &str) -> SystemResult<Self> {
        Self::new(workers, discipline.parse()?)
    }

    // ── Scheduling ────────────────────────────────────────────────────────

    /// Queue an arrived request.
    pub fn submit(&mut self, request: RequestId) {
        self.n_arrived += 1;
        self.queue.push_back(request);
    }

    /// Phase 1: bind queued requests to free workers, lowest index first.
    ///
    /// Stops as soon as the queue is empty.  Because workers above `wmax`
    /// are all idle, the scan never needs to look past `wmax + 1` before the
    /// next binding, and `wmax` grows to cover each newly activated worker.
    pub fn tick_assign(&mut self, requests: &mut RequestRegister) {
        for (wi, worker) in self.workers.iter_mut().enumerate() {
            if self.queue.is_empty() {
                break;
            }
            if !worker.is_free() {
                continue;
            }
            debug_assert!(wi <= self.wmax + 1, "idle gap below worker {wi} above wmax {}", self.wmax);
            let Some(id) = pop_next(&mut self.queue, self.discipline) else {
                break;
            };
            worker.assign(&mut requests[id]);
            self.n_serviced += 1;
            if wi > self.wmax {
                trace!(wmax = wi, "active window grew");
                self.wmax = wi;
            }
        }
    }

    /// Phase 2: serve one tick on every busy worker in `0..=wmax` and return
    /// the requests that completed, in worker-index order.
    ///
    /// A completion at `wmax` shrinks the window past any idle trailing
    /// workers, which also ends the scan early.
    pub fn tick_complete(&mut self, requests: &mut RequestRegister) -> Vec<RequestId> {
        let mut completed = Vec::new();
        let mut wi = 0;
        while wi <= self.wmax {
            let worker = &mut self.workers[wi];
            if worker.is_free() {
                wi += 1;
                continue;
            }
            if let Some(id) = worker.tick(requests) {
                self.n_completed += 1;
                completed.push(id);
                if wi == self.wmax {
                    self.shrink_window();
                }
            }
            wi += 1;
        }
        completed
    }

    /// Both phases back to back, without a clock advance in between.
    ///
    /// Service times recorded this way are one tick short of what the
    /// two-phase step measures; the driver never calls it.
    pub fn tick(&mut self, requests: &mut RequestRegister) -> Vec<RequestId> {
        self.tick_assign(requests);
        self.tick_complete(requests)
    }

    fn shrink_window(&mut self) {
        let before = self.wmax;
        while self.wmax > 0 && self.workers[self.wmax].is_free() {
            self.wmax -= 1;
        }
        if self.wmax != before {
            trace!(from = before, to = self.wmax, "active window shrank");
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` iff nothing is queued or in service.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_arrived == self.n_completed
    }

    /// Requests waiting for a worker.
    #[inline]
    pub fn qsize(&self) -> usize {
        self.queue.len()
    }

    /// Busy workers.  Only the active window is scanned.
    pub fn n_busy(&self) -> usize {
        self.workers[..=self.wmax].iter().filter(|w| !w.is_free()).count()
    }

    #[inline]
    pub fn n_arrived(&self) -> u64 {
        self.n_arrived
    }

    #[inline]
    pub fn n_serviced(&self) -> u64 {
        self.n_serviced
    }

    #[inline]
    pub fn n_completed(&self) -> u64 {
        self.n_completed
    }

    #[inline]
    pub fn wmax(&self) -> usize {
        self.wmax
    }

    #[inline]
    pub fn pool_size(&self) -> usize {
        self.workers.len()
    }

    #[inline]
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    pub fn workers(&self) -> &[Box<dyn Worker>] {
        &self.workers
    }
}

impl std::fmt::Debug for QSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QSystem")
            .field("discipline", &self.discipline)
            .field("pool_size", &self.workers.len())
            .field("wmax", &self.wmax)
            .field("qsize", &self.queue.len())
            .field("n_arrived", &self.n_arrived)
            .field("n_serviced", &self.n_serviced)
            .field("n_completed", &self.n_completed)
            .finish()
    }
}

fn pop_next(queue: &mut VecDeque<RequestId>, discipline: Discipline) -> Option<RequestId> {
    match discipline {
        Discipline::Fifo => queue.pop_front(),
        Discipline::Lifo => queue.pop_back(),
    }
}
