//! Soil records, the single entity held by the store.
//!
//! Records are append-only. Once the store assigns an id, nothing in the
//! workspace updates or deletes the row.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::{Error, Result};

// ─── Soil type ───────────────────────────────────────────────────────────────

/// The fixed set of soil types offered by the entry form and used by bulk
/// generation.
///
/// Single inserts store the soil type as free text, so a stored record is not
/// guaranteed to hold one of these values.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Display,
  EnumIter,
  EnumString,
  Serialize,
  Deserialize,
)]
pub enum SoilType {
  Clay,
  Sandy,
  Loamy,
  Peaty,
  Chalky,
  Silty,
}

impl SoilType {
  pub fn all() -> Vec<SoilType> { SoilType::iter().collect() }

  /// Whether `s` names one of the known soil types (case-sensitive).
  pub fn is_known(s: &str) -> bool { s.parse::<SoilType>().is_ok() }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// Input for a single insert.
///
/// Measurements are free-form text and are persisted verbatim; the store does
/// not parse or range-check them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSoilRecord {
  pub location:   String,
  pub soil_type:  String,
  pub ph:         String,
  pub moisture:   Option<String>,
  /// mg/kg
  pub nitrogen:   String,
  /// mg/kg
  pub phosphorus: String,
  /// mg/kg
  pub potassium:  String,
}

impl NewSoilRecord {
  /// A record with only the required fields set.
  pub fn new(location: impl Into<String>, soil_type: impl Into<String>) -> Self {
    Self {
      location: location.into(),
      soil_type: soil_type.into(),
      ..Default::default()
    }
  }

  /// Check the required fields. Only presence is checked; whitespace counts
  /// as content.
  pub fn validate(&self) -> Result<()> {
    if self.location.is_empty() {
      return Err(Error::Validation { field: "location" });
    }
    if self.soil_type.is_empty() {
      return Err(Error::Validation { field: "soil_type" });
    }
    Ok(())
  }

  /// Attach the id assigned by the store.
  pub fn into_record(self, id: i64) -> SoilRecord {
    SoilRecord {
      id,
      location: self.location,
      soil_type: self.soil_type,
      ph: self.ph,
      moisture: self.moisture,
      nitrogen: self.nitrogen,
      phosphorus: self.phosphorus,
      potassium: self.potassium,
    }
  }
}

/// A persisted soil sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoilRecord {
  pub id:         i64,
  pub location:   String,
  pub soil_type:  String,
  pub ph:         String,
  pub moisture:   Option<String>,
  pub nitrogen:   String,
  pub phosphorus: String,
  pub potassium:  String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn validate_requires_location() {
    let input = NewSoilRecord::new("", "Loamy");
    assert!(matches!(
      input.validate(),
      Err(Error::Validation { field: "location" })
    ));
  }

  #[test]
  fn validate_requires_soil_type() {
    let input = NewSoilRecord::new("Farm A", "");
    assert!(matches!(
      input.validate(),
      Err(Error::Validation { field: "soil_type" })
    ));
  }

  #[test]
  fn validate_ignores_measurements() {
    let input = NewSoilRecord {
      ph: "very acidic".into(),
      nitrogen: "-12".into(),
      ..NewSoilRecord::new("Farm A", "Loamy")
    };
    assert!(input.validate().is_ok());
  }

  #[test]
  fn whitespace_location_is_accepted() {
    assert!(NewSoilRecord::new(" ", "Clay").validate().is_ok());
  }

  #[test]
  fn soil_type_names() {
    assert_eq!(SoilType::all().len(), 6);
    assert_eq!(SoilType::Chalky.to_string(), "Chalky");
    assert!(SoilType::is_known("Peaty"));
    assert!(!SoilType::is_known("Clayey"));
  }
}
