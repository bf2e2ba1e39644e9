use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::HubgetError;

use super::FetchRequest;

/// Prepare the destination directory and run the delegated download.
///
/// Blocks until the downloader exits. A non-zero exit becomes
/// [`HubgetError::DownloaderFailed`] carrying the child's status, so the
/// caller can surface the delegated exit code as its own.
pub fn fetch(request: &FetchRequest) -> Result<(), HubgetError> {
    let dest_dir = enter_dest_dir(&request.dest_dir)?;

    let status = downloader_command(request, &dest_dir)
        .status()
        .map_err(|source| HubgetError::DownloaderLaunch {
            program: request.downloader.clone(),
            source,
        })?;

    if !status.success() {
        return Err(HubgetError::DownloaderFailed { status });
    }

    Ok(())
}

/// Create the destination directory and change the working directory into it.
///
/// Returns the canonicalized directory so the downloader sees an absolute
/// path regardless of the working-directory change. A pre-existing directory
/// is not an error; any other failure aborts before the downloader is ever
/// invoked.
fn enter_dest_dir(dest_dir: &Path) -> Result<PathBuf, HubgetError> {
    let access_err = |source| HubgetError::DestDirAccess {
        path: dest_dir.to_path_buf(),
        source,
    };

    fs::create_dir_all(dest_dir).map_err(access_err)?;
    let canonical = fs::canonicalize(dest_dir).map_err(access_err)?;
    std::env::set_current_dir(&canonical).map_err(access_err)?;

    Ok(canonical)
}

/// Build the delegated command line:
/// `<downloader> download <source> --local-dir <dest> [--token <token>]`.
fn downloader_command(request: &FetchRequest, dest_dir: &Path) -> Command {
    let mut command = Command::new(&request.downloader);
    command
        .arg("download")
        .arg(&request.source)
        .arg("--local-dir")
        .arg(dest_dir);

    if let Some(token) = request.token.as_deref() {
        command.arg("--token").arg(token);
    }

    command
}
