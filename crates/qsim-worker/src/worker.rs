//! The `Worker` trait, the extension point for service-time models.

use qsim_core::RequestId;
use qsim_request::{Request, RequestRegister};

/// A single server in the worker pool.
///
/// New service-time distributions are added by implementing this trait;
/// most implementations only decide the duration and delegate the idle/busy
/// bookkeeping to a [`ServiceSlot`].
///
/// # Example
///
/// ```rust,ignore
/// struct AlternatingWorker { slot: ServiceSlot, long: bool }
///
/// impl Worker for AlternatingWorker {
///     fn is_free(&self) -> bool { self.slot.is_free() }
///     fn assign(&mut self, request: &mut Request) {
///         self.long = !self.long;
///         self.slot.bind(request, if self.long { 5 } else { 1 });
///     }
///     fn tick(&mut self, requests: &mut RequestRegister) -> Option<RequestId> {
///         self.slot.tick(requests)
///     }
///     fn clear(&mut self) { self.slot.clear() }
///     fn remaining(&self) -> u64 { self.slot.remaining() }
/// }
/// ```
pub trait Worker: std::fmt::Debug {
    /// `true` iff no request is bound.
    fn is_free(&self) -> bool;

    /// Bind `request`, choose its service duration, and stamp its service
    /// start.
    ///
    /// # Panics
    /// If the worker is busy.
    fn assign(&mut self, request: &mut Request);

    /// Advance one tick of service.
    ///
    /// Returns the bound request once its duration has elapsed (after marking
    /// it successful and unbinding it), `None` while service continues.
    ///
    /// # Panics
    /// If the worker is idle.
    fn tick(&mut self, requests: &mut RequestRegister) -> Option<RequestId>;

    /// Drop the bound request (if any) without completing it.
    fn clear(&mut self);

    /// Ticks of service left for the bound request; 0 when idle.
    fn remaining(&self) -> u64;
}

/// Idle/busy state shared by all built-in workers.
///
/// Busy means `request.is_some()` and `remaining >= 1`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ServiceSlot {
    request:   Option<RequestId>,
    remaining: u64,
}

impl ServiceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.request.is_none()
    }

    #[inline]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// The request currently in service.
    #[inline]
    pub fn request(&self) -> Option<RequestId> {
        self.request
    }

    /// Transition idle → busy for `duration` ticks (clamped to at least 1).
    ///
    /// # Panics
    /// If a request is already bound.
    pub fn bind(&mut self, request: &mut Request, duration: u64) {
        if let Some(current) = self.request {
            panic!("assign of {} to a busy worker (serving {current})", request.id());
        }
        self.remaining = duration.max(1);
        self.request = Some(request.id());
        request.service();
    }

    /// One tick of service.  On the last tick the request is marked
    /// successful, unbound, and returned.
    ///
    /// # Panics
    /// If no request is bound.
    pub fn tick(&mut self, requests: &mut RequestRegister) -> Option<RequestId> {
        let Some(id) = self.request else {
            panic!("tick on an idle worker");
        };
        if self.remaining > 1 {
            self.remaining -= 1;
            return None;
        }
        self.clear();
        requests[id].ok();
        Some(id)
    }

    pub fn clear(&mut self) {
        self.request = None;
        self.remaining = 0;
    }
}
