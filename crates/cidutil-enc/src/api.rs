//! CID wrappers for API payloads.

use std::fmt;

use cid::multibase::Base;
use cidutil_types::{Cid, CidError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::encoder::{CidEncoder, Encoder};

/// Multibase used when an [`ApiHash`] is created from a [`Cid`].
pub const JSON_BASE: Base = Base::Base58Btc;

/// A CID as it appears in an API payload: a plain string.
///
/// Serializes as a bare JSON string, so it can be used as a map key. The
/// text is stored as received and is only decoded on demand; equality
/// compares the stored text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiHash {
    text: String,
}

impl ApiHash {
    /// Render `cid` in [`JSON_BASE`].
    pub fn from_cid(cid: &Cid) -> Self {
        Self {
            text: Encoder::new(JSON_BASE, false).encode(cid),
        }
    }

    /// Decode the stored text.
    pub fn cid(&self) -> Result<Cid, CidError> {
        Ok(Cid::try_from(self.text.as_str())?)
    }

    /// The stored text, exactly as received.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Render the stored text under `enc`.
    ///
    /// Text that cannot be recoded is returned as stored.
    pub fn encode(&self, enc: &dyn CidEncoder) -> String {
        if self.text.is_empty() {
            return String::new();
        }
        match enc.recode(&self.text) {
            Ok(text) => text.into_owned(),
            Err(_) => self.text.clone(),
        }
    }
}

impl From<&Cid> for ApiHash {
    fn from(cid: &Cid) -> Self {
        Self::from_cid(cid)
    }
}

impl From<String> for ApiHash {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl fmt::Display for ApiHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode(&Encoder::DEFAULT))
    }
}

/// A decoded CID whose `Display` goes through [`Encoder::DEFAULT`].
///
/// Serializes as an IPLD link, `{"/": "<cid>"}`, with the CID in its
/// canonical text form (legacy base58 for v0, base32 for v1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApiCid(pub Cid);

/// JSON shape of an IPLD link.
#[derive(Serialize, Deserialize)]
struct Link {
    #[serde(rename = "/")]
    target: String,
}

impl Serialize for ApiCid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Link {
            target: self.0.to_string(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ApiCid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let link = Link::deserialize(deserializer)?;
        Cid::try_from(link.target.as_str())
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

impl From<Cid> for ApiCid {
    fn from(cid: Cid) -> Self {
        Self(cid)
    }
}

impl fmt::Display for ApiCid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Encoder::DEFAULT.encode(&self.0))
    }
}
