//! File access for the conversion pipeline.
//!
//! Reading and writing are whole-file operations: conversions are
//! one-shot and inputs are small enough to hold in memory. File handles
//! live only inside the `std::fs` calls, so they are released on every
//! exit path.

use std::fs;
use std::path::Path;

use crate::error::ConvertError;

/// Read a text file as raw lines.
///
/// The content is split on `\n` with no trimming, so a file ending in
/// a newline yields a final empty line (which the transform skips).
pub fn read_lines(path: &Path) -> Result<Vec<String>, ConvertError> {
    let content = fs::read_to_string(path).map_err(|source| ConvertError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.split('\n').map(str::to_string).collect())
}

/// Write rows to a text file, one per line, with a trailing newline.
///
/// An existing file at `path` is overwritten without confirmation.
pub fn write_lines(path: &Path, rows: &[String]) -> Result<(), ConvertError> {
    let mut content = rows.join("\n");
    content.push('\n');

    fs::write(path, content).map_err(|source| ConvertError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
