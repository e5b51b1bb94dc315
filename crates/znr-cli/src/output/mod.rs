//! Output formatting for different formats.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use dynect_core::{ApiMessage, ZoneNote};
use serde::Serialize;
use std::io;

/// `Mon DD, YYYY (HH:MM - UTC)`
pub const TIMESTAMP_FORMAT: &str = "%b %d, %Y (%H:%M - UTC)";

const RULE: &str = "================";

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// CSV rows written to a file (notes_<zone>.csv by default)
    #[default]
    Csv,
    /// Human-readable report including the zone's nodes
    Text,
    /// JSON array of notes
    Json,
}

/// How note timestamps are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeFormat {
    /// [`TIMESTAMP_FORMAT`] in UTC
    #[default]
    Formatted,
    /// Raw epoch seconds
    Epoch,
}

impl TimeFormat {
    /// Raw epoch seconds when `epoch` is set, formatted otherwise.
    pub const fn from_epoch_flag(epoch: bool) -> Self {
        if epoch {
            Self::Epoch
        } else {
            Self::Formatted
        }
    }
}

/// Render a note's timestamp. Epochs chrono cannot represent stay numeric.
pub fn format_timestamp(note: &ZoneNote, time: TimeFormat) -> String {
    match (time, note.timestamp_utc()) {
        (TimeFormat::Formatted, Some(dt)) => dt.format(TIMESTAMP_FORMAT).to_string(),
        _ => note.timestamp.to_string(),
    }
}

/// Write one CSV row per note: user, type, timestamp, note. No header row.
///
/// The writer is flushed before it is handed back.
pub fn write_csv<W: io::Write>(out: W, notes: &[ZoneNote], time: TimeFormat) -> Result<W> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);

    for note in notes {
        let timestamp = format_timestamp(note, time);
        writer.write_record([
            note.user_name.as_str(),
            note.note_type.as_str(),
            timestamp.as_str(),
            note.trimmed_note(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush CSV output: {}", e.error()))
}

/// Write the text report: zone banner, optional node list, one block per note.
pub fn write_text<W: io::Write>(
    out: &mut W,
    zone: &str,
    nodes: Option<&[String]>,
    notes: &[ZoneNote],
    time: TimeFormat,
) -> io::Result<()> {
    writeln!(out, "Zone Note Report: {zone}")?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;

    if let Some(nodes) = nodes {
        writeln!(out, "NODES:")?;
        writeln!(out, "{RULE}")?;
        for node in nodes {
            writeln!(out, "{node}")?;
        }
        writeln!(out)?;
    }

    if notes.is_empty() {
        writeln!(out, "No notes found.")?;
        return out.flush();
    }

    for note in notes {
        let timestamp = format_timestamp(note, time);
        for (label, value) in [
            ("User", note.user_name.as_str()),
            ("Type", note.note_type.as_str()),
            ("Timestamp", timestamp.as_str()),
            ("Note", note.trimmed_note()),
        ] {
            writeln!(out, "{label}:")?;
            writeln!(out, "{RULE}")?;
            writeln!(out, "{value}")?;
            writeln!(out)?;
        }
    }

    out.flush()
}

/// Timestamp as it appears in JSON output
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum JsonTimestamp {
    Epoch(i64),
    Formatted(String),
}

#[derive(Debug, Serialize)]
struct JsonNote<'a> {
    user_name: &'a str,
    #[serde(rename = "type")]
    note_type: &'a str,
    timestamp: JsonTimestamp,
    note: &'a str,
}

/// Render notes as a pretty-printed JSON array.
pub fn render_json(notes: &[ZoneNote], time: TimeFormat) -> Result<String> {
    let rows: Vec<JsonNote<'_>> = notes
        .iter()
        .map(|note| JsonNote {
            user_name: &note.user_name,
            note_type: &note.note_type,
            timestamp: match time {
                TimeFormat::Epoch => JsonTimestamp::Epoch(note.timestamp),
                TimeFormat::Formatted => JsonTimestamp::Formatted(format_timestamp(note, time)),
            },
            note: note.trimmed_note(),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Write the API's message list the way it is shown to the user.
pub fn write_api_messages<W: io::Write>(out: &mut W, messages: &[ApiMessage]) -> io::Result<()> {
    for msg in messages {
        writeln!(out, "{}", "API Error:".red().bold())?;
        writeln!(out, "\tInfo: {}", msg.info.as_deref().unwrap_or(""))?;
        writeln!(out, "\tLevel: {}", msg.level.as_deref().unwrap_or(""))?;
        writeln!(out, "\tError Code: {}", msg.error_code.as_deref().unwrap_or(""))?;
        writeln!(out, "\tSource: {}", msg.source.as_deref().unwrap_or(""))?;
    }
    Ok(())
}

/// Print the API's message list to stderr.
pub fn print_api_messages(messages: &[ApiMessage]) {
    // Nothing sensible to do if stderr itself is gone
    let _ = write_api_messages(&mut io::stderr().lock(), messages);
}
