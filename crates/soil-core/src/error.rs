//! Error types for `soil-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A required field was missing or empty on a single insert.
  #[error("{field} is required")]
  Validation { field: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
