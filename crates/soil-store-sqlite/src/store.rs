//! [`SqliteStore`]: the SQLite implementation of [`SoilRecordStore`].

use std::{
  path::Path,
  sync::{Arc, Mutex, PoisonError},
};

use soil_core::{
  generate::RecordGenerator,
  record::{NewSoilRecord, SoilRecord},
  store::SoilRecordStore,
};

use crate::{
  Error, Result,
  encode::{decode_record, insert_record},
  schema::{INSERT_RECORD, SCHEMA, SELECT_COLUMNS},
};

/// Database file used when no path is configured, relative to the working
/// directory.
pub const DEFAULT_STORE_PATH: &str = "soil_management.db";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A soil record store backed by a single SQLite file.
///
/// Cloning is cheap: the inner connection and generator are
/// reference-counted. The connection closes when the last clone is dropped.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
  generator:       Arc<Mutex<RecordGenerator>>,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    Self::from_connection(conn).await
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Self::from_connection(conn).await
  }

  async fn from_connection(conn: tokio_rusqlite::Connection) -> Result<Self> {
    let store = Self {
      conn,
      generator: Arc::new(Mutex::new(RecordGenerator::from_entropy())),
    };
    store.initialize().await?;
    Ok(store)
  }

  /// Replace the generator used by [`SoilRecordStore::insert_bulk`].
  ///
  /// Pass a [`RecordGenerator::seeded`] generator for reproducible batches.
  pub fn with_generator(mut self, generator: RecordGenerator) -> Self {
    self.generator = Arc::new(Mutex::new(generator));
    self
  }

  /// Draw `count` records and write each one as it is drawn, all inside one
  /// transaction.
  ///
  /// The transaction rolls back when dropped uncommitted, so an error on any
  /// row leaves the table as it was.
  async fn write_batch(&self, count: usize) -> Result<()> {
    let generator = Arc::clone(&self.generator);

    self
      .conn
      .call(move |conn| {
        // The generator holds only RNG state, so a poisoned lock is still usable.
        let mut generator =
          generator.lock().unwrap_or_else(PoisonError::into_inner);

        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare(INSERT_RECORD)?;
          for _ in 0..count {
            insert_record(&mut stmt, &generator.next_record())?;
          }
        }
        tx.commit()?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SoilRecordStore impl ────────────────────────────────────────────────────

impl SoilRecordStore for SqliteStore {
  type Error = Error;

  async fn initialize(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn insert_one(&self, input: NewSoilRecord) -> Result<SoilRecord> {
    input.validate()?;

    let record = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached(INSERT_RECORD)?;
        let id = insert_record(&mut stmt, &input)?;
        Ok(input.into_record(id))
      })
      .await?;

    tracing::debug!(id = record.id, location = %record.location, "inserted soil record");
    Ok(record)
  }

  async fn insert_bulk(&self, count: usize) -> Result<usize> {
    if count == 0 {
      return Ok(0);
    }

    self.write_batch(count).await?;

    tracing::info!(count, "bulk inserted soil records");
    Ok(count)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn list_records(&self, limit: Option<usize>) -> Result<Vec<SoilRecord>> {
    let records = self
      .conn
      .call(move |conn| {
        let rows = match limit {
          Some(n) => {
            let n = i64::try_from(n).unwrap_or(i64::MAX);
            let mut stmt = conn
              .prepare(&format!("{SELECT_COLUMNS} ORDER BY id DESC LIMIT ?1"))?;
            stmt
              .query_map(rusqlite::params![n], decode_record)?
              .collect::<rusqlite::Result<Vec<_>>>()?
          }
          None => {
            let mut stmt =
              conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id ASC"))?;
            stmt
              .query_map([], decode_record)?
              .collect::<rusqlite::Result<Vec<_>>>()?
          }
        };
        Ok(rows)
      })
      .await?;

    Ok(records)
  }

  async fn count_records(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM soil_data", [], |r| r.get(0))?)
      })
      .await?;

    u64::try_from(count).map_err(|_| Error::RowCount(count))
  }
}
