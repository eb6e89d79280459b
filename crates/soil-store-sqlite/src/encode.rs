//! Mapping between soil domain types and `soil_data` rows.
//!
//! Every column is plain text except the integer id; values are bound and
//! read back without conversion.

use rusqlite::{Row, Statement};
use soil_core::record::{NewSoilRecord, SoilRecord};

/// Bind `record` to a prepared [`INSERT_RECORD`](crate::schema::INSERT_RECORD)
/// statement and run it, returning the assigned row id.
pub fn insert_record(
  stmt:   &mut Statement<'_>,
  record: &NewSoilRecord,
) -> rusqlite::Result<i64> {
  stmt.insert(rusqlite::params![
    record.location,
    record.soil_type,
    record.ph,
    record.moisture,
    record.nitrogen,
    record.phosphorus,
    record.potassium,
  ])
}

/// Decode one row selected with [`SELECT_COLUMNS`](crate::schema::SELECT_COLUMNS).
pub fn decode_record(row: &Row<'_>) -> rusqlite::Result<SoilRecord> {
  Ok(SoilRecord {
    id:         row.get(0)?,
    location:   row.get(1)?,
    soil_type:  row.get(2)?,
    ph:         row.get(3)?,
    moisture:   row.get(4)?,
    nitrogen:   row.get(5)?,
    phosphorus: row.get(6)?,
    potassium:  row.get(7)?,
  })
}
