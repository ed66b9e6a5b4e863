//! Structural conversion between CID versions.

use cid::{Cid, Version};

use crate::codec::DAG_PB;
use crate::error::CidError;

/// Convert a CID to version 1, keeping codec and multihash.
///
/// Version-1 input is returned unchanged.
pub fn to_v1(cid: &Cid) -> Cid {
    match cid.version() {
        Version::V0 => Cid::new_v1(cid.codec(), *cid.hash()),
        Version::V1 => *cid,
    }
}

/// Convert a CID to version 0.
///
/// Only dag-pb CIDs with a 32-byte sha2-256 multihash have a version-0 form.
pub fn to_v0(cid: &Cid) -> Result<Cid, CidError> {
    if cid.codec() != DAG_PB {
        return Err(CidError::UnsupportedConversion { codec: cid.codec() });
    }
    Ok(Cid::new_v0(*cid.hash())?)
}

/// The same content addressed under the other CID version, if one exists.
pub fn other_version(cid: &Cid) -> Option<Cid> {
    match cid.version() {
        Version::V0 => Some(to_v1(cid)),
        Version::V1 => to_v0(cid).ok(),
    }
}
