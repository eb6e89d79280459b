//! The `SoilRecordStore` trait.
//!
//! Implemented by storage backends (e.g. `soil-store-sqlite`). The command
//! line front end depends on this abstraction for its reads and writes.

use std::future::Future;

use crate::record::{NewSoilRecord, SoilRecord};

/// Abstraction over a soil record store backend.
///
/// Records are append-only: there is no update or delete operation.
pub trait SoilRecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Ensure the backing table exists. Idempotent; safe on every start.
  fn initialize(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Validate and persist one record, returning it with its assigned id.
  ///
  /// Fails without writing anything when `location` or `soil_type` is empty.
  fn insert_one(
    &self,
    input: NewSoilRecord,
  ) -> impl Future<Output = Result<SoilRecord, Self::Error>> + Send + '_;

  /// Generate and persist `count` synthetic records as one atomic batch.
  ///
  /// Returns the number of rows written. If any write fails, none of the
  /// batch is kept.
  fn insert_bulk(
    &self,
    count: usize,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// List stored records.
  ///
  /// - `None`: every record, ascending by id.
  /// - `Some(n)`: the `n` most recent records, descending by id.
  fn list_records(
    &self,
    limit: Option<usize>,
  ) -> impl Future<Output = Result<Vec<SoilRecord>, Self::Error>> + Send + '_;

  /// Total number of stored records.
  fn count_records(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
