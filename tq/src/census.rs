//! Degree frequency summary over census CSV files

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

/// Errors from census file processing
#[derive(Debug, Error)]
pub enum CensusError {
    #[error("failed to read census file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line} has fewer than four columns")]
    MalformedLine { line: usize },
}

/// Count the degrees earned in a headerless census CSV
///
/// The degree is the trimmed fourth column of each row. The returned map
/// holds one count per distinct degree. Rows with fewer than four columns
/// surface as [`CensusError::MalformedLine`].
pub fn summarize_degrees(path: &Path) -> Result<HashMap<String, usize>, CensusError> {
    debug!(path = %path.display(), "summarize_degrees: called");
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut degrees: HashMap<String, usize> = HashMap::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let degree = line
            .split(',')
            .nth(3)
            .ok_or(CensusError::MalformedLine { line: index + 1 })?
            .trim();

        *degrees.entry(degree.to_string()).or_insert(0) += 1;
    }

    Ok(degrees)
}
