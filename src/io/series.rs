//! Plain-text results file of `(box size, count)` pairs
//!
//! One pair per line, ascending box size, two decimal numbers separated by a
//! single space, no header.

use std::path::{Path, PathBuf};

use crate::analysis::box_count::BoxCountSeries;
use crate::io::configuration::{OUTPUT_EXTENSION, OUTPUT_SUFFIX, SERIES_PRECISION};
use crate::io::error::{FractalError, Result, WithPath};

/// Render a series in the results file format
pub fn format_series(series: &BoxCountSeries) -> String {
    series
        .pairs()
        .map(|(box_size, count)| {
            format!(
                "{box_size:.prec$} {count:.prec$}\n",
                prec = SERIES_PRECISION
            )
        })
        .collect()
}

/// Write a series to `path`, replacing any existing file
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn write_series(series: &BoxCountSeries, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    std::fs::write(path, format_series(series)).with_path(path, "write series")
}

/// Parse results file text back into `(box size, count)` pairs
///
/// Blank lines are ignored.
///
/// # Errors
///
/// Returns an error if a line does not hold exactly two numbers
pub fn parse_series(text: &str) -> Result<Vec<(f64, f64)>> {
    let mut pairs = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        let &[box_size, count] = fields.as_slice() else {
            return Err(FractalError::MalformedSeries {
                line: line_number,
                reason: format!("expected 2 values, found {}", fields.len()),
            });
        };

        let parse = |field: &str| {
            field
                .parse::<f64>()
                .map_err(|e| FractalError::MalformedSeries {
                    line: line_number,
                    reason: format!("'{field}' is not a number: {e}"),
                })
        };
        pairs.push((parse(box_size)?, parse(count)?));
    }

    Ok(pairs)
}

/// Read and parse a results file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is malformed
pub fn read_series(path: &Path) -> Result<Vec<(f64, f64)>> {
    let text = std::fs::read_to_string(path).with_path(path, "read series")?;
    parse_series(&text)
}

/// Results file path for an image: `<stem>_output.txt`
///
/// Placed in `output_dir` when given, otherwise in the working directory.
pub fn output_path_for(image_path: &Path, output_dir: Option<&Path>) -> PathBuf {
    derived_path(image_path, output_dir, OUTPUT_SUFFIX, OUTPUT_EXTENSION)
}

/// Path of a file derived from an image: `<stem><suffix>.<extension>`
///
/// Placed in `output_dir` when given, otherwise in the working directory.
pub fn derived_path(
    image_path: &Path,
    output_dir: Option<&Path>,
    suffix: &str,
    extension: &str,
) -> PathBuf {
    let stem = image_path.file_stem().unwrap_or_default();
    let file_name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

    output_dir.map_or_else(|| PathBuf::from(&file_name), |dir| dir.join(&file_name))
}
