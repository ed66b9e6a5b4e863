//! Shared CID primitives for cidutil.
//!
//! This crate sits directly on top of the [`cid`] crate and provides the
//! small pieces every other cidutil crate needs:
//!
//! - [`detect_version`]: cheap textual CID version detection.
//! - [`base_from_name`] / [`base_from_code`]: the multibase registry.
//! - [`to_v0`] / [`to_v1`] / [`other_version`]: structural version conversion.
//! - [`CidKey`], [`compare`], [`sort`]: canonical binary ordering.
//! - [`codec`]: multicodec and multihash naming.

pub mod codec;

mod base;
mod convert;
mod error;
mod order;
mod version;

pub use base::{base_from_code, base_from_name, base_name, extract_encoding};
pub use convert::{other_version, to_v0, to_v1};
pub use error::CidError;
pub use order::{CidKey, compare, sort};
pub use version::{V0_LEN, V0_PREFIX, detect_version};

pub use cid::multibase::Base;
pub use cid::multihash::Multihash;
pub use cid::{Cid, Version};
