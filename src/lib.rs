//! Hubget: fetch model repositories through an external hub CLI.
//!
//! Hubget is a thin front-end: it resolves a source reference (a repo id like
//! `org/name` or a full URL) and an output directory, creates the directory,
//! and delegates the actual transfer to a hub download client
//! (`huggingface-cli` by default). Networking, resumption, authentication,
//! and integrity checking all belong to the delegated tool.
//!
//! # Modules
//!
//! - [`hub`]: destination resolution and the delegated download
//! - [`error`]: error types for hubget operations

pub mod error;
pub mod hub;

use clap::{ArgAction, Parser};

pub use error::HubgetError;

use hub::FetchRequest;

/// The hubget CLI application.
#[derive(Parser)]
#[command(name = "hubget")]
#[command(version, author, about)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Model to fetch: a hub repo id ('org/name') or a full URL.
    source: String,

    /// Destination directory (defaults to the last segment of SOURCE).
    dest: Option<String>,

    /// Access token forwarded to the downloader for gated repositories.
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Download client to delegate to.
    #[arg(long, default_value = "huggingface-cli")]
    downloader: String,

    /// Print version information.
    #[arg(short = 'v', short_alias = 'V', long, action = ArgAction::Version)]
    version: (),
}

/// Run the hubget CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), HubgetError> {
    let cli = Cli::parse();

    let request = FetchRequest {
        dest_dir: hub::resolve::resolve_dest(&cli.source, cli.dest.as_deref()),
        source: cli.source,
        token: cli.token,
        downloader: cli.downloader,
    };

    println!(
        "Downloading '{}' into '{}'...",
        request.source,
        request.dest_dir.display()
    );

    hub::fetch::fetch(&request)?;

    println!("Download of '{}' complete.", request.source);
    Ok(())
}
