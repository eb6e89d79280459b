//! SQL schema for the soil SQLite store.
//!
//! Executed at connection startup and by `initialize`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Measurements are `TEXT` so they come back exactly as entered; a `REAL`
/// column would coerce numeric-looking text.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Records are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS soil_data (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    location    TEXT NOT NULL,
    soil_type   TEXT NOT NULL,
    ph_level    TEXT NOT NULL,
    moisture    TEXT,            -- NULL when not measured
    nitrogen    TEXT NOT NULL,   -- mg/kg
    phosphorus  TEXT NOT NULL,   -- mg/kg
    potassium   TEXT NOT NULL    -- mg/kg
);

PRAGMA user_version = 1;
";

pub const INSERT_RECORD: &str = "
INSERT INTO soil_data (
  location, soil_type, ph_level, moisture, nitrogen, phosphorus, potassium
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";

pub const SELECT_COLUMNS: &str =
  "SELECT id, location, soil_type, ph_level, moisture, nitrogen, phosphorus, potassium
   FROM soil_data";
