//! Fire-and-forget execution of work decoupled from the request path.

use std::future::Future;
use tokio::task::JoinHandle;
use tracing::error;

/// Run `task` on a detached tokio task. Any error it returns is caught here
/// and logged; it is never propagated, retried, or surfaced to the caller.
/// The handle is returned for callers that want to await completion in
/// tests; the request path ignores it.
pub fn schedule<F>(task: F) -> JoinHandle<()>
where
    F: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = task.await {
            error!("Background task failed: {:#}", e);
        }
    })
}
