//! Realistic-looking place names for synthetic records.
//!
//! Names are assembled from a prefix, a personal or family name, and a
//! settlement suffix, e.g. "North Aliceton", "Port Hayes" or "Millerbury".

use rand::{Rng, seq::SliceRandom as _};

const PREFIXES: &[&str] = &["North", "East", "West", "South", "New", "Lake", "Port"];

const SUFFIXES: &[&str] = &[
  "town", "ton", "land", "ville", "berg", "burgh", "borough", "bury", "view",
  "port", "mouth", "stad", "furt", "chester", "fort", "haven", "side", "shire",
];

const NAMES: &[&str] = &[
  "Alice", "Anna", "Bella", "Carter", "Clara", "Dalton", "Edith", "Ellis",
  "Fletcher", "Grace", "Harper", "Hayes", "Irving", "Jasper", "Kendall",
  "Lincoln", "Mabel", "Miller", "Norris", "Olive", "Parker", "Quincy",
  "Reed", "Rosa", "Sutton", "Tanner", "Vaughn", "Walker", "Wesley", "York",
];

/// Draw one place name.
pub fn place_name<R: Rng + ?Sized>(rng: &mut R) -> String {
  let prefix = pick(rng, PREFIXES);
  let name = pick(rng, NAMES);
  let suffix = pick(rng, SUFFIXES);

  match rng.gen_range(0..4) {
    0 => format!("{prefix} {name}{suffix}"),
    1 => format!("{prefix} {name}"),
    _ => format!("{name}{suffix}"),
  }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, words: &[&'static str]) -> &'static str {
  // All word lists are non-empty constants.
  words.choose(rng).copied().unwrap_or_default()
}
