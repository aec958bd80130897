//! Import and export entry points keyed by file format.

use crate::delimited;
use crate::error::{CodecError, CodecResult};
use glossary_types::{Collection, ParsedCollection};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A glossary file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Pretty-printed JSON array of records.
    Json,
    /// Quoted comma-separated text.
    Csv,
}

impl Format {
    /// Fixed download name used when exporting.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Json => "glossary.json",
            Self::Csv => "glossary.csv",
        }
    }

    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv;charset=utf-8",
        }
    }

    /// Picks a format from a file extension (`.json`, `.csv`, `.txt`).
    pub fn from_path(path: &Path) -> CodecResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "csv" | "txt" => Ok(Self::Csv),
            _ => Err(CodecError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Csv => f.write_str("csv"),
        }
    }
}

impl FromStr for Format {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(CodecError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A rendered export, ready to be written under its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub content: String,
}

/// Renders a collection in the given format.
pub fn export(collection: &Collection, format: Format) -> CodecResult<Export> {
    let content = match format {
        Format::Json => serde_json::to_string_pretty(collection)?,
        Format::Csv => delimited::encode(collection),
    };
    Ok(Export {
        file_name: format.file_name(),
        content_type: format.content_type(),
        content,
    })
}

/// Parses an uploaded payload.
///
/// JSON must be an array; elements without a term are skipped and counted.
/// Delimited text never fails to parse.
pub fn import(payload: &str, format: Format) -> CodecResult<ParsedCollection> {
    match format {
        Format::Json => import_json(payload),
        Format::Csv => Ok(delimited::decode_report(payload)),
    }
}

/// Parses a JSON array of records.
pub fn import_json(payload: &str) -> CodecResult<ParsedCollection> {
    Ok(Collection::from_json_str(payload.trim_start_matches('\u{feff}'))?)
}
