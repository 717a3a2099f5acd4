//! `qsim-worker` — service units for the qsim queueing system.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`worker`]  | `Worker` trait, `ServiceSlot` idle/busy state machine        |
//! | [`fixed`]   | `FixedWorker` — constant service time                        |
//! | [`random`]  | `RandomWorker`, `DurationSampler`, `GeometricSampler`        |
//! | [`error`]   | `WorkerError`, `WorkerResult<T>`                             |
//!
//! # Contract
//!
//! A worker is either idle or busy with exactly one request.  After
//! `assign`, the bound request is reported complete by the `d`-th following
//! `tick` call, where `d` is the duration chosen at assignment, and by no
//! other call.  Assigning to a busy worker or ticking an idle one is a bug in
//! the caller and panics.

pub mod error;
pub mod fixed;
pub mod random;
pub mod worker;

#[cfg(test)]
mod tests;

pub use error::{WorkerError, WorkerResult};
pub use fixed::FixedWorker;
pub use random::{DurationSampler, GeometricSampler, RandomWorker};
pub use worker::{ServiceSlot, Worker};
