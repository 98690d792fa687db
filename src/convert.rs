//! The conversion driver.
//!
//! Sequences the pipeline: read raw lines, slice and join them, write
//! the delimited rows. Each run is a single pass over one file; the
//! first failing step ends the run with its error. A failed write may
//! leave a truncated output file behind.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::ConvertError;
use crate::files::{read_lines, write_lines};
use crate::separate::separate_lines;

/// Outcome of a completed conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Raw lines read from the input, blank lines included.
    pub lines_read: usize,
    /// Delimited rows written, header row included.
    pub rows_written: usize,
    /// Where the output landed.
    pub output_path: PathBuf,
}

/// Convert in-memory text, returning the delimited rows.
///
/// The file-free core of [`convert_file`], for callers that already
/// hold the input content. The text is split on `\n` exactly as
/// [`crate::files::read_lines`] splits a file.
pub fn convert_text(input: &str, config: &Config) -> Result<Vec<String>, ConvertError> {
    config.validate()?;

    let lines: Vec<String> = input.split('\n').map(str::to_string).collect();
    Ok(separate_lines(
        &lines,
        &config.layout,
        config.headers.as_deref(),
        &config.separator,
    ))
}

/// Run one conversion: read the configured input file, slice it, and
/// write the delimited rows to the derived `csv_`-prefixed path.
pub fn convert_file(config: &Config) -> Result<Summary, ConvertError> {
    convert_file_to(config, &config.output_path())
}

/// Like [`convert_file`], but writing to an explicit path instead of
/// the derived one.
pub fn convert_file_to(config: &Config, output_path: &Path) -> Result<Summary, ConvertError> {
    config.validate()?;

    let lines = read_lines(&config.input_path())?;
    let rows = separate_lines(
        &lines,
        &config.layout,
        config.headers.as_deref(),
        &config.separator,
    );

    write_lines(output_path, &rows)?;

    Ok(Summary {
        lines_read: lines.len(),
        rows_written: rows.len(),
        output_path: output_path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;
    use std::fs;
    use tempfile::tempdir;

    const INPUT: &str = "aaaa00158kkyeb  hhjytd\nhhhh12358   jk  poiuyt\nllll00000yykiy  hhrtygf\n";

    fn layout() -> Layout {
        Layout::new(vec![4, 5, 5, 2, 6]).unwrap()
    }

    fn headers() -> Vec<String> {
        ["colA", "colB", "colC", "colD", "colE"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_convert_text() {
        let config = Config::new("/unused", "unused.txt", layout());
        let rows = convert_text(INPUT, &config).unwrap();
        assert_eq!(
            rows,
            vec![
                "aaaa,00158,kkyeb,  ,hhjytd",
                "hhhh,12358,   jk,  ,poiuyt",
                "llll,00000,yykiy,  ,hhrtygf",
            ]
        );
    }

    #[test]
    fn test_convert_text_with_headers_and_separator() {
        let config = Config::new("/unused", "unused.txt", layout())
            .with_headers(headers())
            .with_separator("|");
        let rows = convert_text(INPUT, &config).unwrap();
        assert_eq!(rows[0], "colA|colB|colC|colD|colE");
        assert_eq!(rows[1], "aaaa|00158|kkyeb|  |hhjytd");
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn test_convert_text_rejects_header_mismatch() {
        let config = Config::new("/unused", "unused.txt", layout())
            .with_headers(vec!["only".to_string(), "two".to_string()]);
        let result = convert_text(INPUT, &config);
        assert!(matches!(result, Err(ConvertError::HeaderMismatch { .. })));
    }

    #[test]
    fn test_convert_file_end_to_end() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("records.txt"), INPUT).unwrap();

        let config = Config::new(dir.path(), "records.txt", layout());
        let summary = convert_file(&config).unwrap();

        assert_eq!(summary.output_path, dir.path().join("csv_records.txt"));
        // 3 data lines plus the final empty line from the trailing newline.
        assert_eq!(summary.lines_read, 4);
        assert_eq!(summary.rows_written, 3);

        let content = fs::read_to_string(summary.output_path).unwrap();
        assert_eq!(
            content,
            "aaaa,00158,kkyeb,  ,hhjytd\nhhhh,12358,   jk,  ,poiuyt\nllll,00000,yykiy,  ,hhrtygf\n"
        );
    }

    #[test]
    fn test_convert_file_with_headers() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("records.txt"), INPUT).unwrap();

        let config = Config::new(dir.path(), "records.txt", layout()).with_headers(headers());
        let summary = convert_file(&config).unwrap();

        assert_eq!(summary.rows_written, 4);

        let content = fs::read_to_string(summary.output_path).unwrap();
        assert!(content.starts_with("colA,colB,colC,colD,colE\n"));
    }

    #[test]
    fn test_convert_file_to_explicit_path() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("records.txt"), INPUT).unwrap();

        let out = dir.path().join("elsewhere.csv");
        let config = Config::new(dir.path(), "records.txt", layout());
        let summary = convert_file_to(&config, &out).unwrap();

        assert_eq!(summary.output_path, out);
        assert!(out.exists());
        assert!(!dir.path().join("csv_records.txt").exists());
    }

    #[test]
    fn test_convert_file_missing_input() {
        let dir = tempdir().unwrap();
        let config = Config::new(dir.path(), "absent.txt", layout());
        let result = convert_file(&config);
        assert!(matches!(result, Err(ConvertError::ReadInput { .. })));
    }

    #[test]
    fn test_convert_file_validates_before_reading() {
        // Header mismatch is reported even when the input file is missing.
        let dir = tempdir().unwrap();
        let config = Config::new(dir.path(), "absent.txt", layout())
            .with_headers(vec!["a".to_string()]);
        let result = convert_file(&config);
        assert!(matches!(result, Err(ConvertError::HeaderMismatch { .. })));
    }

    #[test]
    fn test_convert_file_overwrites_existing_output() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("records.txt"), "aaaa00158kkyeb  hhjytd\n").unwrap();
        fs::write(dir.path().join("csv_records.txt"), "stale output\n").unwrap();

        let config = Config::new(dir.path(), "records.txt", layout());
        convert_file(&config).unwrap();

        let content = fs::read_to_string(dir.path().join("csv_records.txt")).unwrap();
        assert_eq!(content, "aaaa,00158,kkyeb,  ,hhjytd\n");
    }
}
