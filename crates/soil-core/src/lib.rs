//! Core types and trait definitions for the soil record store.
//!
//! This crate is deliberately free of database dependencies. The SQLite
//! backend and the command-line front end both depend on it.

pub mod error;
pub mod generate;
pub mod place;
pub mod record;
pub mod store;

pub use error::{Error, Result};
