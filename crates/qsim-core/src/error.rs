//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Configuration problems detected before a run starts.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown queueing discipline {0:?} (expected \"fifo\" or \"lifo\")")]
    UnknownDiscipline(String),
}

/// Shorthand result type for `qsim-core`.
pub type CoreResult<T> = Result<T, CoreError>;
