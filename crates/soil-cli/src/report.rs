//! Plain-text rendering of records for the terminal.

use std::io::{self, Write};

use soil_core::record::SoilRecord;

pub const EMPTY_MESSAGE: &str = "No records found in the database!";

/// One line per record, e.g.
/// `ID: 1, Location: Farm A, Type: Loamy, pH: 6.5, Moisture: 12, N: 3, P: 2, K: 4`.
pub fn record_line(r: &SoilRecord) -> String {
  format!(
    "ID: {}, Location: {}, Type: {}, pH: {}, Moisture: {}, N: {}, P: {}, K: {}",
    r.id,
    r.location,
    r.soil_type,
    r.ph,
    r.moisture.as_deref().unwrap_or("-"),
    r.nitrogen,
    r.phosphorus,
    r.potassium,
  )
}

pub fn write_records(out: &mut impl Write, records: &[SoilRecord]) -> io::Result<()> {
  if records.is_empty() {
    return writeln!(out, "{EMPTY_MESSAGE}");
  }
  for r in records {
    writeln!(out, "{}", record_line(r))?;
  }
  Ok(())
}
