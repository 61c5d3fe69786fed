use thiserror::Error;

/// Errors surfaced by the node's core operations.
///
/// An invalid peer chain is deliberately not an error value: the consensus
/// resolver skips such a candidate and moves on.
#[derive(Debug, Error)]
pub enum NodeError {
    /// A submitted transaction is missing a usable field.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(&'static str),

    /// A peer could not be reached or answered with a non-success status.
    #[error("peer fetch failed: {0}")]
    PeerFetch(String),
}
