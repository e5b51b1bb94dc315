//! Core types for the DynECT REST API client.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - **Types**: the response envelope every endpoint shares, zone notes and
//!   session credentials
//! - **Errors**: [`DynError`] and the [`Result`] alias
//!
//! # Example
//!
//! ```rust,ignore
//! use dynect_core::{ApiResponse, ZoneNote, Result};
//!
//! fn notes(resp: ApiResponse) -> Result<Vec<ZoneNote>> {
//!     resp.into_data()
//! }
//! ```

mod error;
pub mod types;

pub use error::{DynError, Result};
pub use types::*;
