use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure while reading one candidate log file. The orchestrator never
/// surfaces these to the caller; it logs them and moves on to the next
/// candidate.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        ScanError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
