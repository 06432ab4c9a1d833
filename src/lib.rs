pub mod build_cmd;
pub mod config;
pub mod core;
pub mod dataset;
pub mod filter;
pub mod site;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VizError {
    /// Source dataset missing, unreadable, or structurally invalid.
    /// Aborts the run before any output is produced.
    #[error("{0}")]
    Data(String),
    /// A rendered document could not be written.
    #[error("{0}")]
    Io(String),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type VizResult<T> = Result<T, VizError>;
