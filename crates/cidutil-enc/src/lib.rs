//! CID encoding policy.
//!
//! An encoding policy decides how a CID is rendered as text: which
//! multibase to use and whether legacy version-0 CIDs are upgraded to
//! version 1. This crate provides:
//!
//! - [`CidEncoder`]: the `{encode, recode}` capability every policy implements.
//! - [`Encoder`]: base + upgrade flag, with an allocation-free no-op recode.
//! - [`OverrideEncoder`]: pins the original text of specific CIDs.
//! - [`EncoderContext`]: carries an encoder down a call chain.
//! - [`ApiHash`] / [`ApiCid`]: API wire types that render through a policy.

mod api;
mod context;
mod encoder;
mod overrides;
mod path;

pub use api::{ApiCid, ApiHash, JSON_BASE};
pub use context::EncoderContext;
pub use encoder::{CidEncoder, Encoder};
pub use overrides::OverrideEncoder;

pub use cidutil_types::{Base, Cid, CidError};
