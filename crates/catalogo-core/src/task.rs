// ── Cancellable operation handles ──

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::CoreError;

/// Handle to a spawned catalog operation.
///
/// Dropping the handle does not cancel the operation; call
/// [`cancel`](Self::cancel) for that. A cancelled operation never writes
/// its response into the store and publishes no notification, but it
/// still clears the loading flag.
#[derive(Debug)]
pub struct OperationHandle {
    cancel: CancellationToken,
    task: JoinHandle<Result<(), CoreError>>,
}

impl OperationHandle {
    pub(crate) fn new(cancel: CancellationToken, task: JoinHandle<Result<(), CoreError>>) -> Self {
        Self { cancel, task }
    }

    /// An operation that failed before doing anything.
    pub(crate) fn failed(err: CoreError) -> Self {
        Self::new(CancellationToken::new(), tokio::spawn(async move { Err(err) }))
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the operation to finish.
    ///
    /// Returns [`CoreError::Cancelled`] if it was cancelled before its
    /// request resolved.
    pub async fn join(self) -> Result<(), CoreError> {
        match self.task.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(CoreError::Cancelled),
            Err(e) => Err(CoreError::Internal(format!("operation task failed: {e}"))),
        }
    }
}
