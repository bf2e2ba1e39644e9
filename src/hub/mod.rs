//! Model-hub delegation helpers.
//!
//! This module owns the remote-reference concerns (destination resolution and
//! the delegated download). All actual transfer work — networking, resumption,
//! integrity — belongs to the external hub CLI; nothing here touches the
//! network.

pub mod fetch;
pub mod resolve;

use std::path::PathBuf;

/// Everything a single delegated download needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    /// Repo id (`org/name`) or URL, passed through to the downloader verbatim.
    pub source: String,
    /// Resolved destination directory.
    pub dest_dir: PathBuf,
    /// Credential token forwarded to the downloader, if configured.
    pub token: Option<String>,
    /// Downloader executable to delegate to.
    pub downloader: String,
}
