//! Error type for `soil-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Input rejected before anything was written.
  #[error(transparent)]
  Core(#[from] soil_core::Error),

  /// Any read or write failure in the underlying database.
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("stored row count {0} does not fit in u64")]
  RowCount(i64),
}

impl Error {
  /// Whether the error is a validation failure rather than a storage failure.
  pub fn is_validation(&self) -> bool {
    matches!(self, Self::Core(soil_core::Error::Validation { .. }))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
