//! Serialization of the generated license document.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::models::LicenseDocument;

/// Write the document to `path` as UTF-8 JSON with 4-space indentation.
///
/// Non-ASCII characters are written literally, not `\u`-escaped. An
/// existing file at `path` is overwritten.
pub fn write_document<T: Serialize>(path: &Path, document: &LicenseDocument<T>) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(file, formatter);
    document.serialize(&mut serializer)?;

    Ok(())
}
