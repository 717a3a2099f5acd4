//! `qsim-core` — foundational types for the `qsim` queueing simulator.
//!
//! This crate is a dependency of every other `qsim-*` crate.  It has no
//! `qsim-*` dependencies and only `rand` and `thiserror` externally, plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RequestId`, `WorkerId`                               |
//! | [`time`]        | `Tick`, `Clock`, `ClockHandle`, `SimConfig`           |
//! | [`discipline`]  | `Discipline` (FIFO / LIFO)                            |
//! | [`rng`]         | `WorkerRng` (per-worker service-time sampling)        |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod discipline;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use discipline::Discipline;
pub use error::{CoreError, CoreResult};
pub use ids::{RequestId, WorkerId};
pub use rng::WorkerRng;
pub use time::{Clock, ClockHandle, SimConfig, Tick};
