//! Error types.

use markdom::DomError;
use thiserror::Error;

/// Errors surfaced by the runtime and its setup helpers.
///
/// Widget interaction itself never fails; these cover structural problems
/// in a rendered tree and logging setup.
#[derive(Debug, Error)]
pub enum TrellisError {
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error("logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
