//! Constant service time.

use qsim_core::RequestId;
use qsim_request::{Request, RequestRegister};

use crate::{ServiceSlot, Worker, WorkerError, WorkerResult};

/// A worker that serves every request for exactly `service_time` ticks.
#[derive(Debug, Clone)]
pub struct FixedWorker {
    slot:         ServiceSlot,
    service_time: u64,
}

impl FixedWorker {
    /// `service_time` must be at least 1.
    pub fn new(service_time: u64) -> WorkerResult<Self> {
        if service_time == 0 {
            return Err(WorkerError::ZeroServiceTime);
        }
        Ok(Self { slot: ServiceSlot::new(), service_time })
    }

    pub fn service_time(&self) -> u64 {
        self.service_time
    }
}

impl Worker for FixedWorker {
    fn is_free(&self) -> bool {
        self.slot.is_free()
    }

    fn assign(&mut self, request: &mut Request) {
        self.slot.bind(request, self.service_time);
    }

    fn tick(&mut self, requests: &mut RequestRegister) -> Option<RequestId> {
        self.slot.tick(requests)
    }

    fn clear(&mut self) {
        self.slot.clear();
    }

    fn remaining(&self) -> u64 {
        self.slot.remaining()
    }
}
