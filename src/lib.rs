//! # colsplit
//!
//! A fixed-width record to delimited text converter.
//!
//! Positional text files carry one record per line, with each field
//! occupying a fixed number of characters. This library slices such
//! records into columns and joins the pieces with a separator (comma
//! by default), optionally prefixing a header row.
//!
//! ## Overview
//!
//! A conversion is a linear pass over one file:
//! - **read**: load the input as raw lines (split on `\n`, no trimming)
//! - **separate**: slice each non-blank line by column widths and join
//!   the values with the separator
//! - **write**: join the rows with `\n` and write them, with a trailing
//!   newline, to `csv_<input name>` next to the input
//!
//! The last declared width never slices: whatever remains of a line
//! belongs to the final column, so rows with too little or too much
//! trailing data convert without error.
//!
//! ## Example
//!
//! ```
//! use colsplit::{Layout, separate_lines};
//!
//! // Field layout: id(4) amount(5) code(5) flag(2) tail(6)
//! let layout = Layout::new(vec![4, 5, 5, 2, 6]).unwrap();
//! let lines = vec![
//!     "aaaa00158kkyeb  hhjytd".to_string(),
//!     "hhhh12358   jk  poiuyt".to_string(),
//! ];
//!
//! let rows = separate_lines(&lines, &layout, None, ",");
//! assert_eq!(rows[0], "aaaa,00158,kkyeb,  ,hhjytd");
//! assert_eq!(rows[1], "hhhh,12358,   jk,  ,poiuyt");
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod files;
pub mod layout;
pub mod separate;

pub use config::{Config, OUTPUT_PREFIX};
pub use convert::{Summary, convert_file, convert_file_to, convert_text};
pub use error::ConvertError;
pub use files::{read_lines, write_lines};
pub use layout::{DEFAULT_SEPARATOR, Layout};
pub use separate::{separate_lines, split_line};
