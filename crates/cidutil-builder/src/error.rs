//! Error types for CID construction.

/// Errors that can occur while building a CID from content.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The multihash could not be assembled (e.g. digest too large).
    #[error("multihash error: {0}")]
    Multihash(#[from] cid::multihash::Error),

    /// The CID could not be assembled from the multihash.
    #[error("cid error: {0}")]
    Cid(#[from] cid::Error),

    /// The builder does not know how to compute this hash function.
    #[error("unsupported hash function 0x{0:x}")]
    UnsupportedHash(u64),

    /// The inline limit exceeds what an identity multihash can hold.
    #[error("inline limit {limit} exceeds the maximum of {max} bytes")]
    InlineLimitTooLarge {
        /// Requested limit.
        limit: usize,
        /// Largest supported limit.
        max: usize,
    },
}
