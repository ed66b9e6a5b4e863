//! The encoder capability and the basic base + upgrade encoder.

use std::borrow::Cow;
use std::fmt;

use cid::Version;
use cid::multibase::{self, Base};
use cidutil_types::{Cid, CidError, base_from_name, detect_version, to_v1};
use tracing::trace;

/// Renders CIDs as text under some policy.
///
/// Implemented by [`Encoder`] and [`OverrideEncoder`](crate::OverrideEncoder),
/// so either can be used wherever a policy is expected.
pub trait CidEncoder: Send + Sync + fmt::Debug {
    /// Render a CID as text.
    fn encode(&self, cid: &Cid) -> String;

    /// Rewrite a textual CID so it matches this policy.
    ///
    /// Returns the input unchanged (borrowed) when no rewrite is needed.
    fn recode<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, CidError>;
}

/// Encodes CIDs in a fixed multibase, optionally upgrading v0 to v1.
///
/// Version-0 CIDs have exactly one textual form (base58btc without a
/// multibase prefix), so unless `upgrade` is set they are rendered that way
/// regardless of `base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    /// Multibase used for version-1 output.
    pub base: Base,
    /// Whether version-0 CIDs are converted to version 1 before rendering.
    pub upgrade: bool,
}

impl Encoder {
    /// Conservative default: base58btc, version-0 CIDs left alone.
    pub const DEFAULT: Encoder = Encoder::new(Base::Base58Btc, false);

    /// Create an encoder for `base`.
    pub const fn new(base: Base, upgrade: bool) -> Self {
        Self { base, upgrade }
    }

    /// Create an encoder from a multibase name such as `"base32"` or `"z"`.
    pub fn from_name(name: &str, upgrade: bool) -> Result<Self, CidError> {
        Ok(Self::new(base_from_name(name)?, upgrade))
    }

    /// The multibase actually used for version-1 output.
    ///
    /// The identity base cannot hold binary CID bytes, so it renders as
    /// base58btc instead.
    fn output_base(&self) -> Base {
        match self.base {
            Base::Identity => Base::Base58Btc,
            base => base,
        }
    }

    /// Whether recoding `text` is guaranteed to return it unchanged.
    ///
    /// Purely textual: `text` is never decoded.
    fn is_noop(&self, text: &str) -> Result<bool, CidError> {
        let noop = match detect_version(text)? {
            Version::V0 => !self.upgrade,
            Version::V1 => text.starts_with(self.output_base().code()),
        };
        Ok(noop)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl CidEncoder for Encoder {
    fn encode(&self, cid: &Cid) -> String {
        let cid = if self.upgrade { to_v1(cid) } else { *cid };
        match cid.version() {
            Version::V0 => cid.to_string(),
            Version::V1 => multibase::encode(self.output_base(), cid.to_bytes()),
        }
    }

    fn recode<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, CidError> {
        if self.is_noop(text)? {
            return Ok(Cow::Borrowed(text));
        }
        trace!(cid = text, base = ?self.base, upgrade = self.upgrade, "recoding cid");
        let cid = Cid::try_from(text)?;
        Ok(Cow::Owned(self.encode(&cid)))
    }
}
