//! Facts-snapshot loading.
//!
//! Fact gathering itself is out of scope for the engine; the binary
//! consumes a fully materialized snapshot file — a JSON array of
//! `DependencySnapshot` entries — produced by extraction tooling.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::facts::DependencySnapshot;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot file {path} is not a valid snapshot array")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a snapshot file. Partial fact models are expected; entirely empty
/// fact models are legal and evaluate to inconclusive.
pub fn load_snapshots(path: &Path) -> Result<Vec<DependencySnapshot>, SnapshotError> {
    let content = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_a_minimal_snapshot_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"dependency": {{"name": "serde", "version": "1.0.0"}}}}]"#
        )
        .unwrap();

        let snapshots = load_snapshots(file.path()).unwrap();

        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].dependency.name, "serde");
        assert!(snapshots[0].facts.is_empty());
    }

    #[test]
    fn missing_file_reports_io_error() {
        let error = load_snapshots(Path::new("/nonexistent/snapshot.json")).unwrap_err();
        assert!(matches!(error, SnapshotError::Io { .. }));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let error = load_snapshots(file.path()).unwrap_err();
        assert!(matches!(error, SnapshotError::Parse { .. }));
    }
}
