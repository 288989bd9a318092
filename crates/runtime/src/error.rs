//! Runtime error types.

use schulte_core::InvariantError;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The worker task is gone; commands can no longer be delivered.
    #[error("command channel closed; session worker has shut down")]
    CommandChannelClosed,

    /// The worker dropped a reply channel without answering.
    #[error("reply channel closed")]
    ReplyChannelClosed(#[from] oneshot::error::RecvError),

    /// A core invariant was violated; this is a bug, not a gameplay
    /// condition.
    #[error(transparent)]
    Invariant(#[from] InvariantError),
}
