//! Shared fixtures for cidutil integration tests.
//!
//! Provides well-known CIDs in their canonical textual forms and helpers
//! to build the set of encoders the tests sweep over.

use cidutil_enc::{Base, Cid, Encoder};

/// A dag-pb CID in its only version-0 form.
pub const V0: &str = "QmUNLLsPACCz1vLxQVkXqqLX5R1X345qqfHbsf67hvA3Nn";

/// The version-1, base32 form of [`V0`].
pub const V1: &str = "bafybeiczsscdsbs7ffqz55asqdf3smv6klcw3gofszvwlyarci47bgf354";

/// A raw-codec CID, which has no version-0 form.
pub const RAW_LEAF: &str = "bafkreifit7vvfkf2cwwzvyycdczm5znbdbqx54ab6shbesvwgkwthdf77y";

/// Another raw-codec CID, written in base58btc.
pub const RAW_B58: &str = "zb2rhak9iRgDiik36KQBRr2qiCJHdyBH7YxFmw7FTdM6zo31m";

/// A second, unrelated version-0 CID.
pub const OTHER_V0: &str = "QmRJggJREPCt7waGQKMXymrXRvrvsSiiPjgFbLK9isuM8K";

/// Every fixture CID in textual form.
pub const ALL: &[&str] = &[V0, V1, RAW_LEAF, RAW_B58, OTHER_V0];

/// Bases exercised by the sweep tests.
pub const BASES: &[Base] = &[
    Base::Base58Btc,
    Base::Base32Lower,
    Base::Base32Upper,
    Base::Base36Lower,
    Base::Base16Lower,
    Base::Base64,
    Base::Base64UrlPad,
];

/// Every combination of [`BASES`] and the upgrade flag.
pub fn encoders() -> Vec<Encoder> {
    BASES
        .iter()
        .flat_map(|&b| [Encoder::new(b, false), Encoder::new(b, true)])
        .collect()
}

/// Decode a fixture, panicking on failure.
pub fn cid(text: &str) -> Cid {
    Cid::try_from(text).unwrap_or_else(|e| panic!("fixture {text} does not decode: {e}"))
}
