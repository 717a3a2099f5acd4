use qsim_core::CoreError;
use qsim_system::SystemError;
use qsim_worker::WorkerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Core(#[from] CoreError),

    #[error("worker {index}: {source}")]
    Worker {
        index:  usize,
        source: WorkerError,
    },

    #[error("queueing system: {0}")]
    System(#[from] SystemError),
}

pub type SimResult<T> = Result<T, SimError>;
