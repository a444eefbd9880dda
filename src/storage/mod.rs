//! Storage layer for zentimer.
//!
//! `SQLite` persistence for the local backend: the settings record, the
//! session log and daily totals.

mod database;
mod migrations;

pub use database::Database;
