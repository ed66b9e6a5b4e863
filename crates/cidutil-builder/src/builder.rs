//! The builder trait and the plain hashing builders.

use std::fmt;

use cid::Cid;
use cid::multihash::Multihash;
use cidutil_types::codec::{BLAKE3, DAG_PB, IDENTITY, SHA2_256, SHA2_512};
use sha2::{Digest, Sha256, Sha512};

use crate::error::BuildError;

/// A policy for turning content into a CID.
///
/// Implementations are immutable: [`with_codec`](CidBuilder::with_codec)
/// returns a new builder rather than reconfiguring `self`.
pub trait CidBuilder: Send + Sync + fmt::Debug {
    /// Content codec stamped into every CID this builder produces.
    fn codec(&self) -> u64;

    /// A builder with the same policy but a different content codec.
    fn with_codec(&self, codec: u64) -> Box<dyn CidBuilder>;

    /// Build the CID for `data`.
    fn sum(&self, data: &[u8]) -> Result<Cid, BuildError>;
}

impl CidBuilder for Box<dyn CidBuilder> {
    fn codec(&self) -> u64 {
        (**self).codec()
    }

    fn with_codec(&self, codec: u64) -> Box<dyn CidBuilder> {
        (**self).with_codec(codec)
    }

    fn sum(&self, data: &[u8]) -> Result<Cid, BuildError> {
        (**self).sum(data)
    }
}

/// Compute the multihash of `data` with the hash function `code`.
pub fn digest(code: u64, data: &[u8]) -> Result<Multihash<64>, BuildError> {
    let mh = match code {
        IDENTITY => Multihash::wrap(IDENTITY, data)?,
        SHA2_256 => Multihash::wrap(SHA2_256, &Sha256::digest(data))?,
        SHA2_512 => Multihash::wrap(SHA2_512, &Sha512::digest(data))?,
        BLAKE3 => Multihash::wrap(BLAKE3, blake3::hash(data).as_bytes())?,
        other => return Err(BuildError::UnsupportedHash(other)),
    };
    Ok(mh)
}

/// Builds version-0 CIDs: dag-pb content, sha2-256 digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct V0Builder;

impl CidBuilder for V0Builder {
    fn codec(&self) -> u64 {
        DAG_PB
    }

    /// Version 0 only carries dag-pb, so any other codec yields a
    /// version-1 builder with the same sha2-256 hash.
    fn with_codec(&self, codec: u64) -> Box<dyn CidBuilder> {
        if codec == DAG_PB {
            Box::new(*self)
        } else {
            Box::new(V1Builder::new(codec, SHA2_256))
        }
    }

    fn sum(&self, data: &[u8]) -> Result<Cid, BuildError> {
        Ok(Cid::new_v0(digest(SHA2_256, data)?)?)
    }
}

/// Builds version-1 CIDs with a fixed codec and hash function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct V1Builder {
    codec: u64,
    hash: u64,
}

impl V1Builder {
    /// Create a builder for `codec` content hashed with the multihash `hash`.
    pub const fn new(codec: u64, hash: u64) -> Self {
        Self { codec, hash }
    }

    /// Multihash function code used by this builder.
    pub fn hash(&self) -> u64 {
        self.hash
    }
}

impl CidBuilder for V1Builder {
    fn codec(&self) -> u64 {
        self.codec
    }

    fn with_codec(&self, codec: u64) -> Box<dyn CidBuilder> {
        Box::new(Self { codec, ..*self })
    }

    fn sum(&self, data: &[u8]) -> Result<Cid, BuildError> {
        Ok(Cid::new_v1(self.codec, digest(self.hash, data)?))
    }
}
