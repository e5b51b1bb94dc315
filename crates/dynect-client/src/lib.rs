//! HTTP client for the DynECT REST API.
//!
//! This crate provides [`DynClient`], which sends requests, resolves queued
//! jobs by polling, and opens authenticated [`Session`]s.
//!
//! # Example
//!
//! ```rust,ignore
//! use dynect_client::{Credentials, DynClient};
//!
//! let client = DynClient::new()?;
//! let session = client.session().login(&Credentials::new("acme", "alice", "pw")).await?;
//! let notes = session.zone_notes("example.com").limit(10).send().await?;
//! session.logout().await?;
//! ```

mod client;
mod config;
mod poll;
pub mod api;

pub use api::{Session, SessionApi, ZoneNoteRequestBuilder};
pub use client::{DynClient, DynClientBuilder, DEFAULT_BASE_URL};
pub use config::*;
pub use dynect_core::{ApiMessage, ApiResponse, ApiStatus, Credentials, DynError, Result, ZoneNote};
