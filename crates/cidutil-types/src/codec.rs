//! Multicodec and multihash codes, with their human-readable names.

use cid::{Cid, Version};

/// Raw binary content.
pub const RAW: u64 = 0x55;
/// MerkleDAG protobuf, the only codec a version-0 CID can carry.
pub const DAG_PB: u64 = 0x70;
/// MerkleDAG CBOR.
pub const DAG_CBOR: u64 = 0x71;
/// Libp2p public key.
pub const LIBP2P_KEY: u64 = 0x72;
/// MerkleDAG JSON.
pub const DAG_JSON: u64 = 0x0129;

/// Identity multihash: the digest is the input itself.
pub const IDENTITY: u64 = 0x00;
/// SHA2-256 multihash.
pub const SHA2_256: u64 = 0x12;
/// SHA2-512 multihash.
pub const SHA2_512: u64 = 0x13;
/// BLAKE3 multihash (256-bit output).
pub const BLAKE3: u64 = 0x1e;

/// Name of a content-type codec.
pub fn codec_name(code: u64) -> Option<&'static str> {
    match code {
        RAW => Some("raw"),
        DAG_PB => Some("protobuf"),
        DAG_CBOR => Some("cbor"),
        LIBP2P_KEY => Some("libp2p-key"),
        DAG_JSON => Some("dag-json"),
        _ => None,
    }
}

/// Name of a multihash function.
pub fn hash_name(code: u64) -> Option<&'static str> {
    match code {
        IDENTITY => Some("identity"),
        SHA2_256 => Some("sha2-256"),
        SHA2_512 => Some("sha2-512"),
        BLAKE3 => Some("blake3"),
        _ => None,
    }
}

/// Human-readable CID prefix: `cidv<version>-<codec>-<hash>-<digest len>`.
pub fn describe_prefix(cid: &Cid) -> String {
    let version = match cid.version() {
        Version::V0 => 0,
        Version::V1 => 1,
    };
    let codec = codec_name(cid.codec())
        .map(str::to_string)
        .unwrap_or_else(|| format!("codec-{:x}", cid.codec()));
    let hash = hash_name(cid.hash().code())
        .map(str::to_string)
        .unwrap_or_else(|| format!("hash-{:x}", cid.hash().code()));
    format!("cidv{version}-{codec}-{hash}-{}", cid.hash().size())
}
