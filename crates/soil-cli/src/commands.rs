//! Subcommand handlers.
//!
//! Handlers talk to the store only through [`SoilRecordStore`] and write
//! their output to the supplied writer.

use std::io::Write;

use anyhow::{Context as _, bail};
use soil_core::{
  record::{NewSoilRecord, SoilType},
  store::SoilRecordStore,
};

use crate::{
  cli::{BulkArgs, InsertArgs, ListArgs},
  report::write_records,
  settings::Settings,
};

pub async fn init<S: SoilRecordStore>(
  store:    &S,
  settings: &Settings,
  out:      &mut impl Write,
) -> anyhow::Result<()> {
  store.initialize().await.context("failed to initialise store")?;
  writeln!(out, "Store ready at {}", settings.store_path.display())?;
  Ok(())
}

pub async fn insert<S: SoilRecordStore>(
  store: &S,
  args:  InsertArgs,
  out:   &mut impl Write,
) -> anyhow::Result<()> {
  let input = NewSoilRecord::from(args);
  if let Err(e) = input.validate() {
    bail!("Input Error: {e}");
  }
  if !SoilType::is_known(&input.soil_type) {
    tracing::warn!(soil_type = %input.soil_type, "storing unrecognised soil type");
  }

  let record = store.insert_one(input).await.context("failed to insert record")?;
  writeln!(out, "Record inserted successfully! (id {})", record.id)?;
  Ok(())
}

/// Insert a batch. The caller configures the store's generator from
/// `--seed` and `--farm-names` before calling.
pub async fn bulk<S: SoilRecordStore>(
  store: &S,
  args:  &BulkArgs,
  out:   &mut impl Write,
) -> anyhow::Result<()> {
  let written = store
    .insert_bulk(args.count)
    .await
    .with_context(|| format!("failed to insert {} records", args.count))?;
  writeln!(out, "{written} records inserted!")?;
  Ok(())
}

pub async fn list<S: SoilRecordStore>(
  store:    &S,
  args:     &ListArgs,
  settings: &Settings,
  out:      &mut impl Write,
) -> anyhow::Result<()> {
  let limit = args.limit.or(settings.list_limit);
  let records = store.list_records(limit).await.context("failed to list records")?;
  tracing::debug!(count = records.len(), ?limit, "listed records");

  if args.json {
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
  } else {
    write_records(out, &records)?;
  }
  Ok(())
}

pub async fn count<S: SoilRecordStore>(
  store: &S,
  out:   &mut impl Write,
) -> anyhow::Result<()> {
  let n = store.count_records().await.context("failed to count records")?;
  writeln!(out, "{n}")?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use soil_core::{generate::RecordGenerator, record::SoilRecord};
  use soil_store_sqlite::SqliteStore;

  use super::*;
  use crate::report::EMPTY_MESSAGE;

  async fn store() -> SqliteStore {
    SqliteStore::open_in_memory()
      .await
      .expect("in-memory store")
      .with_generator(RecordGenerator::seeded(21))
  }

  fn insert_args(location: &str, soil_type: &str) -> InsertArgs {
    InsertArgs {
      location:   location.into(),
      soil_type:  soil_type.into(),
      ph:         "6.5".into(),
      moisture:   None,
      nitrogen:   "3".into(),
      phosphorus: "2".into(),
      potassium:  "4".into(),
    }
  }

  fn list_args(limit: Option<usize>, json: bool) -> ListArgs { ListArgs { limit, json } }

  fn text(out: Vec<u8>) -> String { String::from_utf8(out).unwrap() }

  #[tokio::test]
  async fn insert_then_list() {
    let s = store().await;
    let mut out = Vec::new();
    insert(&s, insert_args("Farm A", "Loamy"), &mut out).await.unwrap();
    assert_eq!(text(out), "Record inserted successfully! (id 1)\n");

    let mut out = Vec::new();
    list(&s, &list_args(None, false), &Settings::default(), &mut out)
      .await
      .unwrap();
    assert_eq!(
      text(out),
      "ID: 1, Location: Farm A, Type: Loamy, pH: 6.5, Moisture: -, N: 3, P: 2, K: 4\n"
    );
  }

  #[tokio::test]
  async fn insert_without_location_is_input_error() {
    let s = store().await;
    let err = insert(&s, insert_args("", "Loamy"), &mut Vec::new())
      .await
      .unwrap_err();
    assert!(err.to_string().starts_with("Input Error"));
    assert_eq!(s.count_records().await.unwrap(), 0);
  }

  #[tokio::test]
  async fn bulk_reports_count() {
    let s = store().await;
    let args = BulkArgs { count: 100, seed: None, farm_names: false };
    let mut out = Vec::new();
    bulk(&s, &args, &mut out).await.unwrap();
    assert_eq!(text(out), "100 records inserted!\n");

    let mut out = Vec::new();
    count(&s, &mut out).await.unwrap();
    assert_eq!(text(out), "100\n");
  }

  #[tokio::test]
  async fn list_empty_store() {
    let s = store().await;
    let mut out = Vec::new();
    list(&s, &list_args(None, false), &Settings::default(), &mut out)
      .await
      .unwrap();
    assert_eq!(text(out), format!("{EMPTY_MESSAGE}\n"));
  }

  #[tokio::test]
  async fn list_uses_configured_limit() {
    let s = store().await;
    s.insert_bulk(10).await.unwrap();
    let settings = Settings { list_limit: Some(3), ..Settings::default() };

    let mut out = Vec::new();
    list(&s, &list_args(None, true), &settings, &mut out).await.unwrap();
    let records: Vec<SoilRecord> = serde_json::from_slice(&out).unwrap();
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![10, 9, 8]);
  }

  #[tokio::test]
  async fn flag_limit_overrides_config() {
    let s = store().await;
    s.insert_bulk(10).await.unwrap();
    let settings = Settings { list_limit: Some(3), ..Settings::default() };

    let mut out = Vec::new();
    list(&s, &list_args(Some(1), false), &settings, &mut out)
      .await
      .unwrap();
    assert!(text(out).starts_with("ID: 10,"));
  }
}
