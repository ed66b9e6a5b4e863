//! Canonical binary keys and a total order over CIDs.

use std::cmp::Ordering;
use std::fmt;

use cid::Cid;

use crate::error::CidError;

/// A CID reduced to its canonical binary encoding.
///
/// Two CIDs produce equal keys iff their binary encodings are equal, no
/// matter which text they were decoded from. The derived `Ord` is the
/// lexicographic byte order used by [`compare`].
#[derive(Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct CidKey(Vec<u8>);

impl CidKey {
    /// Return the canonical binary encoding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Decode the key back into a CID.
    pub fn to_cid(&self) -> Result<Cid, CidError> {
        Ok(Cid::try_from(self.0.as_slice())?)
    }
}

impl From<&Cid> for CidKey {
    fn from(cid: &Cid) -> Self {
        Self(cid.to_bytes())
    }
}

impl From<Cid> for CidKey {
    fn from(cid: Cid) -> Self {
        Self(cid.to_bytes())
    }
}

impl AsRef<[u8]> for CidKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for CidKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CidKey(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// Compare two CIDs by their canonical binary encoding.
pub fn compare(a: &Cid, b: &Cid) -> Ordering {
    a.to_bytes().cmp(&b.to_bytes())
}

/// Sort CIDs by their canonical binary encoding.
///
/// The sort is stable, so sorting an already sorted slice is a no-op.
pub fn sort(cids: &mut [Cid]) {
    cids.sort_by_cached_key(Cid::to_bytes);
}
