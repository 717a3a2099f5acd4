//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing integer `Tick`.  There is exactly one
//! [`Clock`] per run.  It is owned by the request register, which is the only
//! component allowed to advance it.  Everything else that needs to read the
//! current time (every request, for timestamping) holds a [`ClockHandle`]:
//! a cheap read-only view of the same counter, not a copy of it.
//!
//! ```text
//!   RequestRegister ──owns──▶ Clock ──Rc<Cell<Tick>>──┐
//!   Request #0 ── ClockHandle ────────────────────────┤
//!   Request #1 ── ClockHandle ────────────────────────┘
//! ```
//!
//! `Rc<Cell<_>>` keeps the whole thing single-threaded; neither type is
//! `Send`, which matches the step-synchronous driver.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::{CoreError, CoreResult, Discipline};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Clock ────────────────────────────────────────────────────────────────────

/// The single time source of a run.
///
/// Deliberately not `Clone`: a second `Clock` would be a second timeline.
/// Use [`handle`](Self::handle) to give other components read access.
#[derive(Debug, Default)]
pub struct Clock {
    now: Rc<Cell<Tick>>,
}

impl Clock {
    /// A clock at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by exactly one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.now.set(self.now.get() + 1);
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.now.get()
    }

    /// A read-only view that observes every future `advance`.
    pub fn handle(&self) -> ClockHandle {
        ClockHandle(Rc::clone(&self.now))
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.now(), f)
    }
}

/// Read-only view of a [`Clock`].
#[derive(Clone, Debug)]
pub struct ClockHandle(Rc<Cell<Tick>>);

impl ClockHandle {
    #[inline]
    pub fn now(&self) -> Tick {
        self.0.get()
    }

    /// `true` if both handles observe the same clock.
    pub fn same_clock(&self, other: &ClockHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically built in code or deserialized (with the `serde` feature) by the
/// application crate and passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Width of one reporting interval in ticks.  Metrics are snapshotted
    /// after every `report_interval`-th step.  Must be > 0.
    pub report_interval: u64,

    /// Keep stepping with zero arrivals after the workload is exhausted until
    /// the system drains.
    pub deplete: bool,

    /// Number of reporting boundaries to keep running once a depleting
    /// system is empty.  Ignored unless `deplete` is set.
    pub settle_intervals: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Queue ordering policy.
    pub discipline: Discipline,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            report_interval:  10,
            deplete:          false,
            settle_intervals: SimConfig::DEFAULT_SETTLE_INTERVALS,
            seed:             0,
            discipline:       Discipline::Fifo,
        }
    }
}

impl SimConfig {
    pub const DEFAULT_SETTLE_INTERVALS: u32 = 3;

    /// Reject configurations the driver cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.report_interval == 0 {
            return Err(CoreError::Config("report_interval must be positive".into()));
        }
        Ok(())
    }

    /// `true` if the step with zero-based index `step` closes a reporting
    /// interval.
    #[inline]
    pub fn is_report_boundary(&self, step: u64) -> bool {
        (step + 1).is_multiple_of(self.report_interval)
    }
}
