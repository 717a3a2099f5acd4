use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WorkerError {
    #[error("fixed service time must be at least one tick")]
    ZeroServiceTime,

    #[error("mean service time must be a finite number of ticks >= 1, got {0}")]
    InvalidMean(f64),
}

pub type WorkerResult<T> = Result<T, WorkerError>;
