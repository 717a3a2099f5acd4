//! A single request's lifecycle record.

use qsim_core::{ClockHandle, RequestId, Tick};

/// Terminal outcome of a request.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RequestStatus {
    Success,
    Failure,
}

/// Timestamps of one request, read from the run's shared clock.
///
/// Every transition is one-shot.  Repeating one is a driver bug and panics.
#[derive(Debug)]
pub struct Request {
    id:        RequestId,
    clock:     ClockHandle,
    t_start:   Tick,
    t_service: Option<Tick>,
    t_end:     Option<Tick>,
    status:    Option<RequestStatus>,
}

impl Request {
    /// Create a request and stamp its arrival at the clock's current tick.
    pub(crate) fn start(id: RequestId, clock: ClockHandle) -> Self {
        let t_start = clock.now();
        Self {
            id,
            clock,
            t_start,
            t_service: None,
            t_end: None,
            status: None,
        }
    }

    #[inline]
    pub fn id(&self) -> RequestId {
        self.id
    }

    #[inline]
    pub fn t_start(&self) -> Tick {
        self.t_start
    }

    #[inline]
    pub fn t_service(&self) -> Option<Tick> {
        self.t_service
    }

    #[inline]
    pub fn t_end(&self) -> Option<Tick> {
        self.t_end
    }

    #[inline]
    pub fn status(&self) -> Option<RequestStatus> {
        self.status
    }

    /// Stamp the start of service.  Called by a worker at assignment.
    ///
    /// # Panics
    /// If the request was already serviced or has completed.
    pub fn service(&mut self) {
        assert!(
            self.t_service.is_none(),
            "{} serviced twice (first at {:?})",
            self.id,
            self.t_service,
        );
        assert!(!self.is_complete(), "{} serviced after completion", self.id);
        self.t_service = Some(self.clock.now());
    }

    /// Stamp completion with `status`.
    ///
    /// # Panics
    /// If the request has already completed.
    pub fn complete(&mut self, status: RequestStatus) {
        assert!(
            !self.is_complete(),
            "{} completed twice (already {:?})",
            self.id,
            self.status,
        );
        self.t_end = Some(self.clock.now());
        self.status = Some(status);
    }

    #[inline]
    pub fn ok(&mut self) {
        self.complete(RequestStatus::Success);
    }

    #[inline]
    pub fn fail(&mut self) {
        self.complete(RequestStatus::Failure);
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.status.is_some()
    }

    /// `t_end - t_start`, or `None` before completion.
    pub fn try_response_time(&self) -> Option<u64> {
        self.t_end.map(|end| end - self.t_start)
    }

    /// `t_end - t_service`, or `None` before completion.
    ///
    /// A request completed without ever being serviced (failed while queued)
    /// has no service time either.
    pub fn try_service_time(&self) -> Option<u64> {
        Some(self.t_end? - self.t_service?)
    }

    /// Ticks from arrival to completion.
    ///
    /// # Panics
    /// If the request has not completed.
    pub fn response_time(&self) -> u64 {
        match self.try_response_time() {
            Some(t) => t,
            None => panic!("response_time read before {} completed", self.id),
        }
    }

    /// Ticks from service start to completion.
    ///
    /// # Panics
    /// If the request has not completed, or was never serviced.
    pub fn service_time(&self) -> u64 {
        match self.try_service_time() {
            Some(t) => t,
            None => panic!("service_time read before {} was serviced and completed", self.id),
        }
    }
}
