//! I/O layer: opening the line source and the result sink. Failures carry
//! the path that could not be opened.
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Open the input file for buffered line reading.
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened input {:?}", path);
    Ok(BufReader::new(file))
}

/// Create (or truncate) the output file for buffered writing.
pub fn open_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| Error::OpenOutput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened output {:?}", path);
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("input.txt");
        match open_input(&missing) {
            Err(Error::OpenInput { path, .. }) => assert_eq!(path, missing),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn output_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("no_such_dir").join("output.txt");
        assert!(matches!(
            open_output(&target),
            Err(Error::OpenOutput { .. })
        ));
    }
}
