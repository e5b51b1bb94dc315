//! znr - DynECT zone note report
//!
//! Exports a zone's change notes to CSV or prints them as a report.

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    znr_cli::run().await
}
