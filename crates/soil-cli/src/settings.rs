//! Layered configuration: optional TOML file, then `SOIL_*` environment
//! variables, then command-line flags (applied by the caller).

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;
use soil_store_sqlite::DEFAULT_STORE_PATH;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// SQLite database file. A leading `~/` is expanded.
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
  /// Default `--limit` for `soil list`; unset lists every record.
  #[serde(default)]
  pub list_limit: Option<usize>,
}

impl Default for Settings {
  fn default() -> Self {
    Self { store_path: default_store_path(), list_limit: None }
  }
}

fn default_store_path() -> PathBuf { PathBuf::from(DEFAULT_STORE_PATH) }

impl Settings {
  /// Read `file` (if it exists) and the `SOIL_` environment.
  pub fn load(file: &Path) -> anyhow::Result<Self> {
    let raw = config::Config::builder()
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("SOIL").try_parsing(true))
      .build()
      .with_context(|| format!("failed to read config file {}", file.display()))?;

    let mut settings: Settings =
      raw.try_deserialize().context("failed to deserialise settings")?;
    settings.store_path = expand_tilde(&settings.store_path);
    Ok(settings)
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_uses_defaults() {
    let settings = Settings::load(Path::new("does-not-exist.toml")).unwrap();
    assert_eq!(settings.list_limit, None);
  }

  #[test]
  fn relative_paths_are_untouched() {
    assert_eq!(
      expand_tilde(Path::new("data/soil.db")),
      PathBuf::from("data/soil.db")
    );
  }

  #[test]
  fn default_store_path_is_local_file() {
    assert_eq!(
      Settings::default().store_path,
      PathBuf::from("soil_management.db")
    );
  }
}
