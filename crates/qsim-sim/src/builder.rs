//! Fluent builder for constructing a [`Sim`].

use qsim_core::{CoreError, SimConfig, WorkerId, WorkerRng};
use qsim_system::QSystem;
use qsim_worker::{FixedWorker, RandomWorker, Worker};

use crate::{Sim, SimError, SimResult};

/// One pool entry, turned into a worker at `build` time so that every
/// configuration error surfaces from a single place.
enum WorkerSpec {
    Fixed(u64),
    Random(f64),
    Custom(Box<dyn Worker>),
}

/// Fluent builder for [`Sim`].
///
/// Workers are added to the pool in call order; pool index `i` becomes
/// `WorkerId(i)`.  Randomized workers draw from a `WorkerRng` seeded by
/// `config.seed` and their `WorkerId`, so the same config and pool always
/// reproduce the same run.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .fixed_workers(2, 5)        // WorkerId(0), WorkerId(1)
///     .random_workers(8, 12.5)    // WorkerId(2) ..= WorkerId(9)
///     .worker(MyWorker::new())    // WorkerId(10)
///     .build()?;
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    workers: Vec<WorkerSpec>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, workers: Vec::new() }
    }

    /// Append `count` workers that serve for exactly `service_time` ticks.
    pub fn fixed_workers(mut self, count: usize, service_time: u64) -> Self {
        self.workers
            .extend((0..count).map(|_| WorkerSpec::Fixed(service_time)));
        self
    }

    /// Append `count` workers with geometric service times averaging `mean`
    /// ticks.
    pub fn random_workers(mut self, count: usize, mean: f64) -> Self {
        self.workers.extend((0..count).map(|_| WorkerSpec::Random(mean)));
        self
    }

    /// Append a custom worker.
    pub fn worker<W: Worker + 'static>(mut self, worker: W) -> Self {
        self.workers.push(WorkerSpec::Custom(Box::new(worker)));
        self
    }

    /// Validate the configuration, construct every worker, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let seed = self.config.seed;
        let pool = self
            .workers
            .into_iter()
            .enumerate()
            .map(|(index, spec)| -> SimResult<Box<dyn Worker>> {
                let worker: Box<dyn Worker> = match spec {
                    WorkerSpec::Fixed(service_time) => Box::new(
                        FixedWorker::new(service_time)
                            .map_err(|source| SimError::Worker { index, source })?,
                    ),
                    WorkerSpec::Random(mean) => {
                        let id = WorkerId::try_from(index).map_err(|_| {
                            CoreError::Config(format!("worker index {index} overflows WorkerId"))
                        })?;
                        Box::new(
                            RandomWorker::new(mean, WorkerRng::new(seed, id))
                                .map_err(|source| SimError::Worker { index, source })?,
                        )
                    }
                    WorkerSpec::Custom(worker) => worker,
                };
                Ok(worker)
            })
            .collect::<SimResult<Vec<_>>>()?;

        let system = QSystem::new(pool, self.config.discipline)?;
        Ok(Sim::new(self.config, system))
    }
}
