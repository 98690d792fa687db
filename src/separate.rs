//! Column slicing for fixed-width records.
//!
//! This is the core transform: each input line is cut into columns
//! according to a [`Layout`] and the pieces are joined with a
//! separator. Slicing counts characters, not bytes, so multi-byte
//! text cannot split a code point.

use crate::layout::Layout;

/// Slice one line into column values.
///
/// Each width except the last consumes that many characters from the
/// front of the line; the final column receives everything left over.
/// A line shorter than the declared widths yields empty values for the
/// columns past its end, and a longer line carries the excess in the
/// final column. Neither case is an error.
pub fn split_line(line: &str, layout: &Layout) -> Vec<String> {
    let mut values = Vec::with_capacity(layout.columns());
    let mut rest = line;

    for &width in layout.sliced_widths() {
        let cut = rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(at, _)| at);
        let (value, remainder) = rest.split_at(cut);
        values.push(value.to_string());
        rest = remainder;
    }

    // The last width never slices; the rest of the line is the last column.
    values.push(rest.to_string());
    values
}

/// Convert raw lines into delimited rows.
///
/// Zero-length lines produce no row. When `headers` is present, its
/// names are joined with the same separator and prepended as the first
/// row. Output order follows input order.
pub fn separate_lines(
    lines: &[String],
    layout: &Layout,
    headers: Option<&[String]>,
    separator: &str,
) -> Vec<String> {
    let mut rows = Vec::new();

    if let Some(headers) = headers {
        rows.push(headers.join(separator));
    }

    for line in lines {
        if line.is_empty() {
            continue;
        }
        rows.push(split_line(line, layout).join(separator));
    }

    rows
}
