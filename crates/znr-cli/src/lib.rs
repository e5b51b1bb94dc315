//! # znr-cli
//!
//! Zone note report for DynECT managed DNS.
//!
//! ## Features
//!
//! - **CSV export**: one row per change note (user, type, time, note)
//! - **Text report**: zone banner, node list and one block per note
//! - **JSON output**: the same notes as a JSON array
//! - **Job polling**: queued API requests are polled until they finish

pub mod cli;
pub mod config;
pub mod output;

pub use cli::{run, run_with};
