use std::path::Path;

use tracing::warn;

/// Deletes an uploaded results file. Failure is logged and reported as `false`.
pub(crate) async fn cleanup_local_results(path: &Path) -> bool {
    match tokio::fs::remove_file(path).await {
        Ok(()) => true,
        Err(err) => {
            warn!("Failed to remove local results {}: {}", path.display(), err);
            false
        }
    }
}
