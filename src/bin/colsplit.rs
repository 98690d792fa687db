//! CLI tool to convert fixed-width data files into delimited text.
//!
//! Usage:
//!   colsplit <input.data> --widths 4,5,5,2,6
//!   colsplit <input.data> --widths 4,5,5,2,6 --headers colA,colB,colC,colD,colE -s '|'
//!
//! The output lands next to the input as `csv_<input name>` unless
//! `--output` names another path.

use clap::Parser;
use colsplit::{Config, Layout, convert_file_to};
use std::path::{Path, PathBuf};
use std::process;

/// Convert a fixed-width data file into delimited records.
///
/// Every width but the last slices that many characters off the front
/// of each line; the rest of the line becomes the final column.
#[derive(Parser)]
#[command(name = "colsplit")]
struct Cli {
    /// Input data file (fixed-width records)
    input: PathBuf,

    /// Column widths, comma-separated, e.g. 4,5,5,2,6
    #[arg(short, long)]
    widths: String,

    /// Header names, comma-separated; prepended as the first output row
    #[arg(long, value_delimiter = ',')]
    headers: Option<Vec<String>>,

    /// Separator between column values
    #[arg(short, long, default_value = ",")]
    separator: String,

    /// Write output to this path instead of csv_<input name>
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show paths, layout, and separator on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let layout = match Layout::parse(&cli.widths) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Error in --widths: {e}");
            process::exit(1);
        }
    };

    let Some(file_name) = cli.input.file_name().and_then(|n| n.to_str()) else {
        eprintln!("Error: input path '{}' has no file name", cli.input.display());
        process::exit(1);
    };
    let dir = cli.input.parent().unwrap_or(Path::new(""));

    let mut config = Config::new(dir, file_name, layout).with_separator(cli.separator.as_str());
    if let Some(headers) = cli.headers {
        config = config.with_headers(headers);
    }

    let output_path = cli.output.unwrap_or_else(|| config.output_path());

    if cli.verbose {
        eprintln!("Input:     {}", config.input_path().display());
        eprintln!("Output:    {}", output_path.display());
        eprintln!("Columns:   {}", config.layout.columns());
        eprintln!("Separator: {:?}", config.separator);
    }

    match convert_file_to(&config, &output_path) {
        Ok(summary) => {
            eprintln!(
                "Converted {} lines -> {} rows, output: {}",
                summary.lines_read,
                summary.rows_written,
                summary.output_path.display()
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
