//! Randomized service time.
//!
//! The default model is memoryless: every tick of service ends with
//! probability `p = 1 / mean`, so the duration is geometric on `{1, 2, ..}`
//! with expectation `mean`.  The sampler is pluggable so tests (or other
//! distributions) can drive a [`RandomWorker`] with a known sequence.

use rand::Rng;
use rand_distr::Geometric;

use qsim_core::{RequestId, WorkerRng};
use qsim_request::{Request, RequestRegister};

use crate::{ServiceSlot, Worker, WorkerError, WorkerResult};

/// Source of service durations, in ticks.
///
/// Values below 1 are clamped to 1 by the worker.  Any `FnMut() -> u64`
/// closure is a sampler.
pub trait DurationSampler {
    fn sample(&mut self) -> u64;
}

impl<F: FnMut() -> u64> DurationSampler for F {
    fn sample(&mut self) -> u64 {
        self()
    }
}

/// Geometric durations with success probability `1 / mean`.
pub struct GeometricSampler {
    dist: Geometric,
    rng:  WorkerRng,
}

impl GeometricSampler {
    pub fn new(mean: f64, rng: WorkerRng) -> WorkerResult<Self> {
        validate_mean(mean)?;
        let dist = Geometric::new(1.0 / mean).map_err(|_| WorkerError::InvalidMean(mean))?;
        Ok(Self { dist, rng })
    }
}

impl DurationSampler for GeometricSampler {
    fn sample(&mut self) -> u64 {
        // rand_distr counts failures before the first success; a service
        // duration counts trials, including the successful one.
        self.rng.inner().sample(self.dist).saturating_add(1)
    }
}

impl std::fmt::Debug for GeometricSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeometricSampler").finish_non_exhaustive()
    }
}

/// A worker whose service time is drawn from `S` at every assignment.
pub struct RandomWorker<S = GeometricSampler> {
    slot:    ServiceSlot,
    mean:    f64,
    sampler: S,
}

impl RandomWorker<GeometricSampler> {
    /// Geometric service times averaging `mean` ticks, drawn from `rng`.
    pub fn new(mean: f64, rng: WorkerRng) -> WorkerResult<Self> {
        let sampler = GeometricSampler::new(mean, rng)?;
        Ok(Self { slot: ServiceSlot::new(), mean, sampler })
    }
}

impl<S: DurationSampler> RandomWorker<S> {
    /// Use a custom sampler.  `mean` is validated and kept for reporting
    /// only; the sampler alone decides durations.
    pub fn with_sampler(mean: f64, sampler: S) -> WorkerResult<Self> {
        validate_mean(mean)?;
        Ok(Self { slot: ServiceSlot::new(), mean, sampler })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }
}

impl<S: DurationSampler> Worker for RandomWorker<S> {
    fn is_free(&self) -> bool {
        self.slot.is_free()
    }

    fn assign(&mut self, request: &mut Request) {
        assert!(self.slot.is_free(), "assign of {} to a busy worker", request.id());
        let duration = self.sampler.sample();
        self.slot.bind(request, duration);
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

impl<S> std::fmt::Debug for RandomWorker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomWorker")
            .field("slot", &self.slot)
            .field("mean", &self.mean)
            .finish_non_exhaustive()
    }
}

fn validate_mean(mean: f64) -> WorkerResult<()> {
    if mean.is_finite() && mean >= 1.0 {
        Ok(())
    } else {
        Err(WorkerError::InvalidMean(mean))
    }
}
