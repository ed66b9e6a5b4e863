//! Deriving an encoder from the CID at the root of a path.

use cid::Version;
use cidutil_types::{CidError, base_from_code, detect_version};
use tracing::warn;

use crate::encoder::Encoder;

/// Leading path segments that name a namespace rather than a CID.
const NAMESPACES: &[&str] = &["ipfs", "ipld"];

/// The segment of `path` that should hold the root CID.
fn root_segment(path: &str) -> &str {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    match segments.next() {
        Some(first) if NAMESPACES.contains(&first) => segments.next().unwrap_or(first),
        Some(first) => first,
        None => "",
    }
}

impl Encoder {
    /// Derive an encoder that matches the root CID of `path`.
    ///
    /// A version-0 root keeps `self.base` and disables upgrading, so legacy
    /// roots stay legacy. A version-1 root adopts the root's own multibase
    /// and enables upgrading. Only the root segment's leading characters are
    /// inspected; nothing is decoded.
    ///
    /// On error the caller still owns `self` and may fall back to it, see
    /// [`from_path_or_self`](Self::from_path_or_self).
    pub fn from_path(self, path: &str) -> Result<Encoder, CidError> {
        let root = root_segment(path);
        match detect_version(root)? {
            Version::V0 => Ok(Encoder::new(self.base, false)),
            Version::V1 => {
                let code = root.chars().next().ok_or(CidError::TooShort { len: 0 })?;
                Ok(Encoder::new(base_from_code(code)?, true))
            }
        }
    }

    /// Like [`from_path`](Self::from_path), but returns `self` unchanged
    /// when the root segment does not yield an encoder.
    pub fn from_path_or_self(self, path: &str) -> Encoder {
        self.from_path(path).unwrap_or_else(|e| {
            warn!(path, error = %e, "cannot derive encoder from path, keeping current");
            self
        })
    }
}
