//! Column layout for fixed-width records.

use crate::error::ConvertError;

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = ",";

/// An ordered list of column widths for a fixed-width record.
///
/// Every width but the last bounds a slice of the record. The final
/// width documents the expected length of the last column but is never
/// used for slicing: whatever remains of a line after the earlier
/// columns is the last column's value. Trailing data that is too long
/// or too short therefore converts without error.
///
/// A layout always has at least one column; an empty width list is a
/// rejected configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    widths: Vec<usize>,
}

impl Layout {
    /// Create a layout from column widths.
    ///
    /// Returns [`ConvertError::EmptyLayout`] when `widths` is empty.
    pub fn new(widths: Vec<usize>) -> Result<Self, ConvertError> {
        if widths.is_empty() {
            return Err(ConvertError::EmptyLayout);
        }
        Ok(Self { widths })
    }

    /// Parse a layout from comma-separated widths, e.g. `"4,5,5,2,6"`.
    ///
    /// Whitespace around entries is ignored; empty entries are skipped.
    pub fn parse(text: &str) -> Result<Self, ConvertError> {
        let mut widths = Vec::new();

        for part in text.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let width: usize = part.parse().map_err(|_| ConvertError::InvalidWidth {
                text: part.to_string(),
            })?;
            widths.push(width);
        }

        Self::new(widths)
    }

    /// Number of columns this layout produces.
    pub fn columns(&self) -> usize {
        self.widths.len()
    }

    /// The declared widths, in slicing order.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// The widths that actually bound a slice: all but the last.
    pub fn sliced_widths(&self) -> &[usize] {
        &self.widths[..self.widths.len() - 1]
    }
}
