//! `znr` report: export a zone's change notes as CSV, text or JSON.

use anyhow::{Context as _, Result};
use colored::Colorize;
use dynect_client::{Session, ZoneNote};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

use super::Context;
use crate::output::{self, OutputFormat};

pub async fn execute(ctx: &Context, session: &Session) -> Result<()> {
    match ctx.format {
        OutputFormat::Csv => csv_report(ctx, session).await,
        OutputFormat::Text => text_report(ctx, session).await,
        OutputFormat::Json => json_report(ctx, session).await,
    }
}

async fn fetch_notes(ctx: &Context, session: &Session) -> Result<Vec<ZoneNote>> {
    let notes = session
        .zone_notes(&ctx.zone)
        .maybe_limit(ctx.limit)
        .send()
        .await
        .with_context(|| format!("Zone note report for {} failed", ctx.zone))?;

    debug!(zone = %ctx.zone, count = notes.len(), "fetched zone notes");
    Ok(notes)
}

/// Open the report file before any report request is made, so an unwritable
/// path fails fast.
fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Unable to open {} for writing", path.display()))?;
    Ok(BufWriter::new(file))
}

async fn csv_report(ctx: &Context, session: &Session) -> Result<()> {
    let path = ctx.csv_path();
    let file = create_output(&path)?;
    println!("{} {}", "Writing CSV file to:".bold(), path.display().to_string().cyan());

    let notes = fetch_notes(ctx, session).await?;
    let file = output::write_csv(file, &notes, ctx.time)
        .with_context(|| format!("Could not write file {}", path.display()))?;
    file.into_inner()
        .map_err(io::IntoInnerError::into_error)
        .and_then(|f| f.sync_all())
        .with_context(|| format!("Could not close file {}", path.display()))?;

    println!("{} ({} notes)", "CSV file write successful.".green(), notes.len());
    Ok(())
}

async fn text_report(ctx: &Context, session: &Session) -> Result<()> {
    let file = ctx
        .output
        .as_deref()
        .map(|path| create_output(path).map(|out| (path, out)))
        .transpose()?;

    let nodes = session
        .node_list(&ctx.zone)
        .await
        .with_context(|| format!("Node list for {} failed", ctx.zone))?;
    let notes = fetch_notes(ctx, session).await?;

    if let Some((path, mut out)) = file {
        output::write_text(&mut out, &ctx.zone, Some(nodes.as_slice()), &notes, ctx.time)
            .with_context(|| format!("Could not write file {}", path.display()))?;
    } else {
        output::write_text(
            &mut io::stdout().lock(),
            &ctx.zone,
            Some(nodes.as_slice()),
            &notes,
            ctx.time,
        )?;
    }

    Ok(())
}

async fn json_report(ctx: &Context, session: &Session) -> Result<()> {
    let file = ctx
        .output
        .as_deref()
        .map(|path| create_output(path).map(|out| (path, out)))
        .transpose()?;

    let notes = fetch_notes(ctx, session).await?;
    let json = output::render_json(&notes, ctx.time)?;

    if let Some((path, mut out)) = file {
        writeln!(out, "{json}")
            .and_then(|()| out.flush())
            .with_context(|| format!("Could not write file {}", path.display()))?;
    } else {
        println!("{json}");
    }

    Ok(())
}
