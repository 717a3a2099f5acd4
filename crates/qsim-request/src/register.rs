//! `RequestRegister` — request factory, ledger, and owner of the run clock.

use std::cell::Cell;
use std::ops::{Index, IndexMut};

use qsim_core::{Clock, ClockHandle, RequestId, Tick};

use crate::Request;

/// Append-only ledger of every request created in a run.
///
/// Ledger order is arrival order, so `RequestId(i)` is simply the `i`-th
/// request ever started.  The register is also the only place the run's
/// [`Clock`] can be advanced: every request and every worker therefore sees
/// one totally ordered timeline.
#[derive(Debug, Default)]
pub struct RequestRegister {
    instances: Vec<Request>,
    clock:     Clock,
    /// Length of the longest fully-completed prefix of `instances`, cached
    /// so `n_completed` does not rescan requests that finished long ago.
    completed_prefix: Cell<usize>,
}

impl RequestRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a request stamped with the current tick and append it to the
    /// ledger.
    pub fn start(&mut self) -> RequestId {
        let id = RequestId(self.instances.len() as u64);
        self.instances.push(Request::start(id, self.clock.handle()));
        id
    }

    /// Advance simulated time by one tick.
    #[inline]
    pub fn tick(&mut self) {
        self.clock.advance();
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    /// A read-only view of the run clock.
    pub fn clock(&self) -> ClockHandle {
        self.clock.handle()
    }

    /// Number of requests ever started.
    #[inline]
    pub fn count(&self) -> usize {
        self.instances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn get(&self, id: RequestId) -> Option<&Request> {
        self.instances.get(id.index())
    }

    pub fn get_mut(&mut self, id: RequestId) -> Option<&mut Request> {
        self.instances.get_mut(id.index())
    }

    /// All requests in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &Request> {
        self.instances.iter()
    }

    /// Number of completed requests (success or failure).
    ///
    /// Completion is mostly in arrival order, so the scan starts from the
    /// cached completed prefix and only walks the in-flight tail.
    pub fn n_completed(&self) -> usize {
        let mut prefix = self.completed_prefix.get();
        while prefix < self.instances.len() && self.instances[prefix].is_complete() {
            prefix += 1;
        }
        self.completed_prefix.set(prefix);

        prefix
            + self.instances[prefix..]
                .iter()
                .filter(|r| r.is_complete())
                .count()
    }

    /// Requests started but not yet completed.
    pub fn n_pending(&self) -> usize {
        self.count() - self.n_completed()
    }
}

impl Index<RequestId> for RequestRegister {
    type Output = Request;

    /// # Panics
    /// If `id` was not issued by this register.
    fn index(&self, id: RequestId) -> &Request {
        &self.instances[id.index()]
    }
}

impl IndexMut<RequestId> for RequestRegister {
    fn index_mut(&mut self, id: RequestId) -> &mut Request {
        &mut self.instances[id.index()]
    }
}
