//! `qsim-sim` — step driver for the qsim queueing simulator.
//!
//! # Step ordering
//!
//! ```text
//! for arrivals in workload:
//!   ① Submit   — `arrivals` new requests are started and queued.
//!   ② Assign   — free workers take queued requests (QSystem::tick_assign).
//!   ③ Clock    — the register advances simulated time by one tick.
//!   ④ Averages — queue length, in-system and in-service counts are added
//!                to the interval averages.
//!   ⑤ Complete — busy workers serve one tick; finished requests are
//!                harvested and their timings recorded.
//!   ⑥ Snapshot — on every `report_interval`-th step the cumulative
//!                counters are set and all statistics are snapshotted.
//! ```
//!
//! With `config.deplete`, stepping continues with zero arrivals after the
//! workload ends until the system is empty, then for
//! `config.settle_intervals` more reporting boundaries.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use qsim_core::SimConfig;
//! use qsim_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig { report_interval: 10, ..Default::default() })
//!     .fixed_workers(4, 3)
//!     .random_workers(4, 6.0)
//!     .build()?;
//! sim.run([5, 0, 2, 9], &mut NoopObserver);
//! let stats = sim.into_stats();
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
