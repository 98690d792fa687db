//! Conversion configuration.
//!
//! A [`Config`] carries everything one run needs: where the input
//! lives, how its columns are laid out, and how output rows are
//! joined. The output file is named after the input behind a fixed
//! prefix and lands in the same directory.

use std::path::PathBuf;

use crate::error::ConvertError;
use crate::layout::{DEFAULT_SEPARATOR, Layout};

/// Prefix applied to the input file name to form the output file name.
pub const OUTPUT_PREFIX: &str = "csv_";

/// Configuration for a single conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the input file (and receiving the output).
    pub dir: PathBuf,
    /// Input file name, with extension.
    pub file_name: String,
    /// Column layout of the input records.
    pub layout: Layout,
    /// Header names to prepend as the first output row, if any.
    pub headers: Option<Vec<String>>,
    /// Separator between column values.
    pub separator: String,
}

impl Config {
    /// Create a configuration with no headers and the default separator.
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<String>, layout: Layout) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
            layout,
            headers: None,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Set header names to prepend to the output.
    pub fn with_headers(mut self, headers: Vec<String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Set the separator joining column values.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Path of the input file.
    pub fn input_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Path of the output file: the input file name behind
    /// [`OUTPUT_PREFIX`], in the same directory, extension preserved.
    pub fn output_path(&self) -> PathBuf {
        self.dir.join(format!("{OUTPUT_PREFIX}{}", self.file_name))
    }

    /// Check that header names, when present, line up with the layout.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if let Some(headers) = &self.headers
            && headers.len() != self.layout.columns()
        {
            return Err(ConvertError::HeaderMismatch {
                headers: headers.len(),
                columns: self.layout.columns(),
            });
        }
        Ok(())
    }
}
