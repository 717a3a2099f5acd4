//! `qsim-request` — request lifecycle ledger for the qsim simulator.
//!
//! A [`RequestRegister`] owns the run's single [`Clock`](qsim_core::Clock)
//! and an append-only ledger of [`Request`]s.  Everything downstream (the
//! queueing system, its workers) refers to requests by [`RequestId`] and
//! reaches them through the register, so a request never outlives, or is
//! freed behind the back of, the ledger that owns it.
//!
//! # Lifecycle
//!
//! ```text
//!   register.start()  → t_start stamped            (queued)
//!   request.service() → t_service stamped          (in service)
//!   request.ok()      → t_end + status stamped     (complete, terminal)
//! ```
//!
//! [`RequestId`]: qsim_core::RequestId

pub mod register;
pub mod request;


pub use register::RequestRegister;
pub use request::{Request, RequestStatus};
