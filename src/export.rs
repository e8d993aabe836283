//! CSV export of the directory
//!
//! Every field is quoted and embedded quotes are doubled; the header row is
//! written verbatim. Lines are joined with `\n` and the last row carries no
//! terminator, so the same state always yields the same bytes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{DirectoryState, ToolEntry};
use crate::error::{Result, TooldexError};

/// Fixed output filename
pub const EXPORT_FILENAME: &str = "ai_tools_directory.csv";

/// MIME type of the exported file
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// Column labels, in order
pub const HEADERS: [&str; 3] = ["Tool Name", "Description", "Link"];

/// Serialize rows to CSV text.
///
/// Pending rows serialize with an empty description; callers that must not
/// export partial data go through [`export_to_dir`].
pub fn render_csv(entries: &[ToolEntry]) -> Result<String> {
    let mut buf = HEADERS.join(",").into_bytes();
    buf.push(b'\n');

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(buf);

    for entry in entries {
        writer.write_record([entry.name.as_str(), entry.description.text(), entry.link.as_str()])?;
    }

    let bytes = writer.into_inner().map_err(|e| TooldexError::Io(e.into_error()))?;
    let mut text = String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Serialize a settled state, refusing while any description is loading
pub fn snapshot(state: &DirectoryState) -> Result<String> {
    let pending = state.pending_count();
    if pending > 0 {
        return Err(TooldexError::ExportUnavailable { pending });
    }
    render_csv(state.entries())
}

/// Write the CSV snapshot to `dir/ai_tools_directory.csv`.
///
/// Creates `dir` if needed and returns the written path.
pub fn export_to_dir(state: &DirectoryState, dir: &Path) -> Result<PathBuf> {
    let content = snapshot(state)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILENAME);
    fs::write(&path, content)?;
    log::info!("Exported {} rows to {} ({})", state.len(), path.display(), CSV_MIME_TYPE);
    Ok(path)
}
