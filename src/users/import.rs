//! Delimited-file import.
//!
//! The first row is always treated as a header and dropped. Every other row
//! is returned verbatim, in file column order, without checking its length:
//! the store rejects rows of the wrong arity at insert time.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, instrument};

use crate::error::ImportError;

/// Read every data row of the file at `path`.
#[instrument]
pub fn load(path: &Path) -> Result<Vec<Vec<String>>, ImportError> {
    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = from_reader(file)?;
    debug!(rows = rows.len(), "import file parsed");
    Ok(rows)
}

/// Parse comma-separated rows from any reader, skipping the first row.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Vec<String>>, ImportError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
