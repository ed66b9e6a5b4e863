//! Textual CID version detection.

use cid::Version;

use crate::error::CidError;

/// Length of every textual version-0 CID.
pub const V0_LEN: usize = 46;

/// Leading characters of every textual version-0 CID.
pub const V0_PREFIX: &str = "Qm";

/// Detect the version of a textual CID without decoding it.
///
/// A string is version 0 iff it is exactly [`V0_LEN`] characters long and
/// starts with [`V0_PREFIX`]; anything else is assumed to be version 1.
/// The result says nothing about whether `text` actually decodes.
pub fn detect_version(text: &str) -> Result<Version, CidError> {
    if text.len() < 2 {
        return Err(CidError::TooShort { len: text.len() });
    }
    if text.len() == V0_LEN && text.starts_with(V0_PREFIX) {
        Ok(Version::V0)
    } else {
        Ok(Version::V1)
    }
}
