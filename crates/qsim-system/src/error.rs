use qsim_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("worker pool must contain at least one worker")]
    EmptyPool,

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SystemResult<T> = Result<T, SystemError>;
