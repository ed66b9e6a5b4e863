//! Inlining builder: small payloads become identity-hash CIDs.

use cid::Cid;
use cidutil_types::codec::IDENTITY;
use tracing::trace;

use crate::builder::{CidBuilder, digest};
use crate::error::BuildError;

/// Largest payload an identity multihash can carry in a [`Cid`].
pub const MAX_INLINE_LIMIT: usize = 64;

/// A [`CidBuilder`] that inlines payloads of at most `limit` bytes.
///
/// Content no larger than the limit is stored verbatim in a version-1 CID
/// using the identity multihash, so it can be recovered from the CID
/// itself without hashing. Anything larger goes to the wrapped builder.
#[derive(Debug, Clone)]
pub struct Inliner<B = Box<dyn CidBuilder>> {
    builder: B,
    limit: usize,
}

impl<B: CidBuilder> Inliner<B> {
    /// Wrap `builder`, inlining payloads of up to `limit` bytes (inclusive).
    pub fn new(builder: B, limit: usize) -> Result<Self, BuildError> {
        if limit > MAX_INLINE_LIMIT {
            return Err(BuildError::InlineLimitTooLarge {
                limit,
                max: MAX_INLINE_LIMIT,
            });
        }
        Ok(Self { builder, limit })
    }

    /// Largest payload, in bytes, that is inlined.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The builder used for payloads above the limit.
    pub fn inner(&self) -> &B {
        &self.builder
    }
}

impl<B: CidBuilder> CidBuilder for Inliner<B> {
    fn codec(&self) -> u64 {
        self.builder.codec()
    }

    fn with_codec(&self, codec: u64) -> Box<dyn CidBuilder> {
        Box::new(Inliner {
            builder: self.builder.with_codec(codec),
            limit: self.limit,
        })
    }

    fn sum(&self, data: &[u8]) -> Result<Cid, BuildError> {
        if data.len() > self.limit {
            return self.builder.sum(data);
        }
        trace!(size = data.len(), limit = self.limit, "inlining content");
        Ok(Cid::new_v1(self.codec(), digest(IDENTITY, data)?))
    }
}
