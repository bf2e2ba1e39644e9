use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// The main error type for hubget operations.
#[derive(Debug, Error)]
pub enum HubgetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Destination directory '{path}' is not accessible: {source}")]
    DestDirAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch downloader '{program}': {source}")]
    DownloaderLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Downloader exited unsuccessfully ({status})")]
    DownloaderFailed { status: ExitStatus },
}

impl HubgetError {
    /// Process exit code for this error.
    ///
    /// Destination-access failures get their own code so callers can tell
    /// them apart from delegation failures; a failed downloader run exits
    /// with the downloader's own code (or 1 when it was killed by a signal).
    pub fn exit_code(&self) -> i32 {
        match self {
            HubgetError::DestDirAccess { .. } => 3,
            HubgetError::DownloaderFailed { status } => status.code().unwrap_or(1),
            _ => 1,
        }
    }
}
