//! Command handler for the Hub Fetcher CLI
//!
//! Implements the single fetch operation: validate input, derive the
//! output directory, authenticate, query the manifest, and drive the
//! sequential transfer loop with progress reporting.

use std::future::Future;

use indicatif::HumanBytes;
use tracing::{debug, info, warn};

use crate::app::{
    prepare_local_dir, transfer_loop, FileEntry, HubSession, RepoDescriptor, RepoManifest,
    RepoType, TransferTotals,
};
use crate::auth::{get_auth_status, load_token, masked_token};
use crate::cli::args::FetchArgs;
use crate::cli::progress::DownloadProgress;
use crate::errors::{AppError, DownloadResult, Result};

/// Handle the fetch operation
///
/// The flow is strictly linear: argument validation (no I/O yet), output
/// path derivation, authentication, one metadata query, then one
/// transfer per file with a progress increment after each. Any failure
/// past validation propagates and terminates the run; there is no retry
/// and no partial-failure recovery.
pub async fn handle_fetch(args: FetchArgs) -> Result<()> {
    // Validate inputs before any filesystem or network activity
    let repo_type: RepoType = args
        .repo_type
        .parse()
        .map_err(|e: crate::app::InvalidRepoType| AppError::invalid_argument(e.to_string()))?;

    if args.repo_id.trim().is_empty() {
        return Err(AppError::invalid_argument("repo_id must not be empty"));
    }

    let repo = RepoDescriptor::new(args.repo_id.clone(), repo_type);
    info!("Fetching {}", repo);

    // Step 1: derive and create the local output directory
    let local_dir = prepare_local_dir(&repo, &args.output).await?;

    // Step 2: authenticate before any metadata or download call
    let token = load_token().map_err(|e| {
        warn!("{}", get_auth_status().status_message());
        AppError::Auth(e)
    })?;
    debug!("Using access token {}", masked_token(&token));
    let session = HubSession::authenticate(&token)
        .await
        .map_err(AppError::Auth)?;

    // Step 3: one metadata round-trip for the file manifest
    let manifest = session.repo_info(&repo).await.map_err(AppError::Metadata)?;

    // Step 4: declared total is the sum of known sizes
    let total_bytes = manifest.total_known_bytes();
    debug!(
        "Manifest: {} files, {} known bytes",
        manifest.len(),
        total_bytes
    );

    // Step 5: sequential per-file transfer loop (an empty manifest just
    // opens and closes a zero-total bar)
    let progress = DownloadProgress::new(total_bytes);
    let session_ref = &session;
    let repo_ref = &repo;
    let dir_ref = local_dir.as_path();

    let totals = run_transfers(&manifest, &progress, |entry| async move {
        session_ref.download_file(repo_ref, &entry, dir_ref).await
    })
    .await?;

    // Step 6: finalize
    println!(
        "Downloaded {} files ({}) to {}",
        totals.files,
        HumanBytes(totals.bytes),
        local_dir.display()
    );

    Ok(())
}

/// Runs the transfer loop and always finalizes the progress bar
///
/// The bar is cleared on the error path too, so a failed transfer does
/// not leave an active bar garbling the final `Error: ...` line.
async fn run_transfers<F, Fut>(
    manifest: &RepoManifest,
    progress: &DownloadProgress,
    transfer: F,
) -> Result<TransferTotals>
where
    F: FnMut(FileEntry) -> Fut,
    Fut: Future<Output = DownloadResult<()>>,
{
    let result = transfer_loop(manifest, transfer, |bytes| progress.advance(bytes)).await;
    progress.finish();
    result.map_err(AppError::Download)
}
