use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read a whole file into memory.
///
/// Both container formats are decoded from a fully materialized byte buffer,
/// so there is no streaming read path.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::io(path, source))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_read_file_returns_contents() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"hello").expect("Failed to write temp file");
        file.flush().expect("Failed to flush temp file");

        let bytes = read_file(file.path()).unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_read_file_missing_path() {
        let result = read_file(Path::new("/nonexistent/recovery.jsonlz4"));
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Io { .. }));
    }
}
