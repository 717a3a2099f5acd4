//! `qsim-system` — the scheduler core.
//!
//! # Two-phase step
//!
//! ```text
//!   system.submit(id)          — arrivals join the pending queue
//!   system.tick_assign(reg)    — free workers take queued requests
//!   reg.tick()                 — the clock advances
//!   system.tick_complete(reg)  — busy workers serve one tick; finished
//!                                requests are harvested
//! ```
//!
//! The clock must advance *between* the two phases.  Service is measured
//! from the tick after assignment, so a fixed-duration(1) worker assigned at
//! `T0` completes its request at `T1` with a service time of 1.
//!
//! # Active window
//!
//! Workers are always taken lowest-index first, so busy workers cluster at
//! the front of the pool.  `wmax` tracks the highest index that may be busy;
//! both phases stop scanning there.  A pool of 500 workers with ten in use
//! costs about ten worker checks per step, not 500.

pub mod error;
pub mod system;


pub use error::{SystemError, SystemResult};
pub use system::QSystem;
