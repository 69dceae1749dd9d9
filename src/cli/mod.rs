//! Command-line interface components
//!
//! This module contains CLI-specific code for the Hub Fetcher
//! application: argument parsing, the fetch command handler, and the
//! progress display.

pub mod args;
pub mod commands;
pub mod progress;

pub use args::{Cli, FetchArgs, GlobalArgs};
pub use commands::handle_fetch;
pub use progress::DownloadProgress;
