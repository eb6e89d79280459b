//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use soil_core::record::NewSoilRecord;

/// Batch sizes offered for bulk inserts.
pub const BULK_SIZES: &[usize] = &[10, 100, 500, 1_000, 10_000, 100_000, 1_000_000];

#[derive(Parser, Debug)]
#[command(name = "soil", author, version, about = "Record and browse soil samples")]
pub struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "soil.toml")]
  pub config: PathBuf,

  /// SQLite database file; overrides `store_path` from the config.
  #[arg(long, value_name = "FILE")]
  pub db: Option<PathBuf>,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Create the database table if it does not exist.
  Init,
  /// Insert one record.
  Insert(InsertArgs),
  /// Insert a batch of randomly generated records.
  Bulk(BulkArgs),
  /// Print stored records.
  List(ListArgs),
  /// Print the number of stored records.
  Count,
}

#[derive(Args, Debug)]
pub struct InsertArgs {
  #[arg(long, default_value = "")]
  pub location:   String,
  /// One of Clay, Sandy, Loamy, Peaty, Chalky, Silty.
  #[arg(long, default_value = "")]
  pub soil_type:  String,
  #[arg(long, default_value = "")]
  pub ph:         String,
  /// Moisture %.
  #[arg(long)]
  pub moisture:   Option<String>,
  /// Nitrogen (mg/kg).
  #[arg(long, default_value = "")]
  pub nitrogen:   String,
  /// Phosphorus (mg/kg).
  #[arg(long, default_value = "")]
  pub phosphorus: String,
  /// Potassium (mg/kg).
  #[arg(long, default_value = "")]
  pub potassium:  String,
}

impl From<InsertArgs> for NewSoilRecord {
  fn from(args: InsertArgs) -> Self {
    NewSoilRecord {
      location:   args.location,
      soil_type:  args.soil_type,
      ph:         args.ph,
      moisture:   args.moisture,
      nitrogen:   args.nitrogen,
      phosphorus: args.phosphorus,
      potassium:  args.potassium,
    }
  }
}

#[derive(Args, Debug)]
pub struct BulkArgs {
  /// Number of records: 10, 100, 500, 1000, 10000, 100000 or 1000000.
  #[arg(short = 'n', long, value_parser = parse_bulk_size)]
  pub count:      usize,
  /// Seed the generator for a reproducible batch.
  #[arg(long)]
  pub seed:       Option<u64>,
  /// Use the fixed farm names instead of invented town names.
  #[arg(long)]
  pub farm_names: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
  /// Show only the latest N records, newest first.
  #[arg(short, long)]
  pub limit: Option<usize>,
  /// Print records as a JSON array.
  #[arg(long)]
  pub json:  bool,
}

fn parse_bulk_size(s: &str) -> Result<usize, String> {
  let n: usize = s.parse().map_err(|e| format!("{s:?} is not a number: {e}"))?;
  if BULK_SIZES.contains(&n) {
    Ok(n)
  } else {
    let allowed: Vec<String> = BULK_SIZES.iter().map(ToString::to_string).collect();
    Err(format!("bulk size must be one of {}", allowed.join(", ")))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("soil").chain(args.iter().copied()))
  }

  #[test]
  fn bulk_accepts_menu_sizes() {
    for size in BULK_SIZES {
      let cli = parse(&["bulk", "--count", &size.to_string()]).unwrap();
      assert!(matches!(cli.command, Command::Bulk(BulkArgs { count, .. }) if count == *size));
    }
  }

  #[test]
  fn bulk_rejects_other_sizes() {
    assert!(parse(&["bulk", "--count", "7"]).is_err());
    assert!(parse(&["bulk", "--count", "0"]).is_err());
    assert!(parse(&["bulk", "--count", "lots"]).is_err());
  }

  #[test]
  fn insert_defaults_to_empty_fields() {
    let cli = parse(&["insert", "--location", "Farm A"]).unwrap();
    let Command::Insert(args) = cli.command else { panic!("expected insert") };
    let record = NewSoilRecord::from(args);
    assert_eq!(record.location, "Farm A");
    assert_eq!(record.soil_type, "");
    assert_eq!(record.moisture, None);
  }

  #[test]
  fn db_flag_and_config_default() {
    let cli = parse(&["--db", "x.db", "count"]).unwrap();
    assert_eq!(cli.db, Some(PathBuf::from("x.db")));
    assert_eq!(cli.config, PathBuf::from("soil.toml"));
  }
}
