//! Line-oriented numeric input.
//!
//! Every line holds one `f64` in decimal notation. Surrounding whitespace is
//! ignored, anything else that does not parse fails the whole read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{MeanStdError, Result};
use crate::sequence::Sequence;

pub fn parse_value(text: &str, line: usize) -> Result<f64> {
    let trimmed = text.trim();
    trimmed.parse::<f64>().map_err(|e| MeanStdError::Parse {
        message: format!("'{trimmed}' is not a number ({e})"),
        line,
    })
}

/// Reads all lines from `reader` into a sequence, in order.
/// The `path` is only used to describe read failures.
pub fn read_values<R: BufRead>(reader: R, path: &Path) -> Result<Sequence<f64>> {
    let mut values = Sequence::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| MeanStdError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        values.append(parse_value(&line, index + 1)?);
    }
    Ok(values)
}

/// Opens `path`, reads it to the end and closes it again before returning,
/// whether or not the read succeeded.
pub fn read_file(path: &Path) -> Result<Sequence<f64>> {
    let file = File::open(path).map_err(|source| MeanStdError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let values = read_values(BufReader::new(file), path)?;
    debug!(path = %path.display(), count = values.size(), "read input");
    Ok(values)
}
