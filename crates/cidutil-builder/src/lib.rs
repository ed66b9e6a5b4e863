//! CID construction policies.
//!
//! A [`CidBuilder`] turns raw content into a CID under a fixed policy
//! (CID version, content codec, hash function). This crate provides:
//!
//! - [`V0Builder`]: legacy dag-pb + sha2-256 CIDs.
//! - [`V1Builder`]: any codec with identity, sha2-256 or BLAKE3 hashing.
//! - [`Inliner`]: wraps another builder and stores small payloads verbatim
//!   in the CID using the identity multihash instead of hashing them.

mod builder;
mod error;
mod inliner;

pub use builder::{CidBuilder, V0Builder, V1Builder, digest};
pub use error::BuildError;
pub use inliner::{Inliner, MAX_INLINE_LIMIT};
