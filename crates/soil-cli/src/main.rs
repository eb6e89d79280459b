//! `soil`: command-line front end for the soil record store.
//!
//! # Usage
//!
//! ```
//! soil insert --location "Farm A" --soil-type Loamy --ph 6.5
//! soil bulk --count 1000
//! soil list --limit 20
//! ```
//!
//! Settings come from `soil.toml` (or `--config`) and `SOIL_*` environment
//! variables; `--db` overrides the store path.

mod cli;
mod commands;
mod report;
mod settings;

use std::io;

use anyhow::Context as _;
use clap::Parser;
use cli::{Cli, Command};
use settings::Settings;
use soil_core::generate::{LocationStyle, RecordGenerator};
use soil_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Logs go to stderr; stdout carries command output only.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let mut settings = Settings::load(&cli.config)?;
  if let Some(db) = cli.db {
    settings.store_path = db;
  }

  let mut store = SqliteStore::open(&settings.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", settings.store_path))?;
  tracing::debug!(path = ?settings.store_path, "store opened");

  let mut out = io::stdout().lock();

  match cli.command {
    Command::Init => commands::init(&store, &settings, &mut out).await,
    Command::Insert(args) => commands::insert(&store, args, &mut out).await,
    Command::Bulk(args) => {
      let generator = match args.seed {
        Some(seed) => RecordGenerator::seeded(seed),
        None => RecordGenerator::from_entropy(),
      };
      let style = if args.farm_names { LocationStyle::Farm } else { LocationStyle::Place };
      store = store.with_generator(generator.with_location_style(style));
      commands::bulk(&store, &args, &mut out).await
    }
    Command::List(args) => commands::list(&store, &args, &settings, &mut out).await,
    Command::Count => commands::count(&store, &mut out).await,
  }
}
