//! Fetch orchestration primitives
//!
//! This module contains the non-interactive pieces of the download flow:
//! deriving and creating the local output directory for a repository, and
//! driving the strictly sequential per-file transfer loop. The CLI layer
//! wires these together with an authenticated session and a progress bar.

use std::future::Future;
use std::path::{Path, PathBuf};

use crate::errors::DownloadResult;

use super::models::{FileEntry, RepoDescriptor, RepoManifest};

/// Outcome of a completed transfer loop
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransferTotals {
    /// Number of files transferred
    pub files: usize,
    /// Sum of known sizes of transferred files, in bytes
    pub bytes: u64,
}

/// Derives and creates the local directory for a repository
///
/// The directory name is the repository id with every `/` replaced by
/// `_`, joined under `base_output_dir`. Creation is idempotent: an
/// already-existing directory is not an error, so re-running with the
/// same arguments derives the same path and succeeds.
///
/// # Errors
///
/// Returns an I/O error if the directory (or a missing parent) cannot be
/// created.
pub async fn prepare_local_dir(
    repo: &RepoDescriptor,
    base_output_dir: &Path,
) -> std::io::Result<PathBuf> {
    let local_dir = repo.local_dir(base_output_dir);
    tokio::fs::create_dir_all(&local_dir).await?;
    tracing::debug!("Output directory ready: {}", local_dir.display());
    Ok(local_dir)
}

/// Drives the sequential per-file transfer loop
///
/// Entries are processed strictly in manifest order, one at a time: a
/// file's transfer completes (or fails) before the next begins. After
/// each successful transfer `on_advance` is called with that entry's
/// known size in bytes (zero when the Hub did not report one), so the
/// increments delivered to the progress bar sum to exactly the declared
/// total.
///
/// A transfer failure propagates immediately, aborting the remaining
/// entries; files transferred before the failure stay on disk.
///
/// # Errors
///
/// Returns the first `DownloadError` raised by `transfer`.
pub async fn transfer_loop<F, Fut>(
    manifest: &RepoManifest,
    mut transfer: F,
    mut on_advance: impl FnMut(u64),
) -> DownloadResult<TransferTotals>
where
    F: FnMut(FileEntry) -> Fut,
    Fut: Future<Output = DownloadResult<()>>,
{
    let mut totals = TransferTotals::default();

    for entry in manifest.iter() {
        let bytes = entry.size.known_bytes();
        transfer(entry.clone()).await?;

        on_advance(bytes);
        totals.files += 1;
        totals.bytes += bytes;
    }

    Ok(totals)
}
