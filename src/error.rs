//! Error types for the conversion pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while configuring or running a conversion.
///
/// Malformed data rows are deliberately absent: lines shorter or longer
/// than the declared layout are tolerated by the slicing policy (see
/// [`crate::separate::split_line`]). Only I/O failures and rejected
/// configurations end a run.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file could not be opened or read.
    #[error("failed to read '{}': {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or written.
    #[error("failed to write '{}': {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A layout was declared with no column widths.
    #[error("layout must declare at least one column width")]
    EmptyLayout,

    /// An entry in a width list was not an unsigned integer.
    #[error("invalid column width '{text}'")]
    InvalidWidth { text: String },

    /// The number of header names does not match the number of columns.
    #[error("{headers} header name(s) declared for {columns} column(s)")]
    HeaderMismatch { headers: usize, columns: usize },
}
