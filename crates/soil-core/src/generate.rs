//! Synthetic record generation for bulk inserts.
//!
//! Each field is drawn independently and uniformly from its domain. Numeric
//! readings are rounded to two decimal places and rendered as their shortest
//! decimal text, so `6.50` is stored as `"6.5"`.

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng as _, rngs::StdRng, seq::SliceRandom as _};

use crate::{
  place::place_name,
  record::{NewSoilRecord, SoilType},
};

pub const PH_RANGE: RangeInclusive<f64> = 4.5..=8.5;
pub const MOISTURE_RANGE: RangeInclusive<f64> = 5.0..=50.0;
/// Shared by nitrogen, phosphorus and potassium (mg/kg).
pub const NUTRIENT_RANGE: RangeInclusive<f64> = 0.1..=5.0;

/// Fixed farm names used by [`LocationStyle::Farm`].
pub const FARM_NAMES: &[&str] = &["Farm A", "Farm B", "Farm C", "Farm D"];

/// Where generated locations come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationStyle {
  /// Invented town names, see [`crate::place`].
  #[default]
  Place,
  /// One of [`FARM_NAMES`].
  Farm,
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 { (value * 100.0).round() / 100.0 }

/// Produces synthetic [`NewSoilRecord`]s from a random source.
///
/// Inject a seeded generator to make bulk inserts reproducible.
#[derive(Debug)]
pub struct RecordGenerator<R = StdRng> {
  rng:            R,
  location_style: LocationStyle,
}

impl RecordGenerator<StdRng> {
  /// A deterministic generator: the same seed yields the same records.
  pub fn seeded(seed: u64) -> Self { Self::new(StdRng::seed_from_u64(seed)) }

  pub fn from_entropy() -> Self { Self::new(StdRng::from_entropy()) }
}

impl<R: Rng> RecordGenerator<R> {
  pub fn new(rng: R) -> Self {
    Self { rng, location_style: LocationStyle::default() }
  }

  pub fn with_location_style(mut self, style: LocationStyle) -> Self {
    self.location_style = style;
    self
  }

  pub fn location_style(&self) -> LocationStyle { self.location_style }

  /// Draw a single record.
  pub fn next_record(&mut self) -> NewSoilRecord {
    let location = match self.location_style {
      LocationStyle::Place => place_name(&mut self.rng),
      LocationStyle::Farm => FARM_NAMES
        .choose(&mut self.rng)
        .map(|s| (*s).to_owned())
        .unwrap_or_default(),
    };
    let soil_type = SoilType::all()
      .choose(&mut self.rng)
      .map(ToString::to_string)
      .unwrap_or_default();

    NewSoilRecord {
      location,
      soil_type,
      ph:         self.reading(PH_RANGE),
      moisture:   Some(self.reading(MOISTURE_RANGE)),
      nitrogen:   self.reading(NUTRIENT_RANGE),
      phosphorus: self.reading(NUTRIENT_RANGE),
      potassium:  self.reading(NUTRIENT_RANGE),
    }
  }

  /// Draw `count` records.
  pub fn generate(&mut self, count: usize) -> Vec<NewSoilRecord> {
    (0..count).map(|_| self.next_record()).collect()
  }

  fn reading(&mut self, range: RangeInclusive<f64>) -> String {
    round2(self.rng.gen_range(range)).to_string()
  }
}
