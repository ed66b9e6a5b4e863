//! Error types for CID handling.

/// Errors that can occur while detecting, decoding or converting CIDs.
#[derive(Debug, thiserror::Error)]
pub enum CidError {
    /// The input is too short to be a CID in any encoding.
    #[error("cid too short: {len} bytes, need at least 2")]
    TooShort {
        /// Length of the rejected input.
        len: usize,
    },

    /// The input is not a structurally valid CID.
    #[error("invalid cid: {0}")]
    Decode(#[from] cid::Error),

    /// No multibase encoding is registered under this name.
    #[error("unknown multibase encoding: {name:?}")]
    UnknownBase {
        /// The name that was looked up.
        name: String,
    },

    /// No multibase encoding uses this indicator character.
    #[error("unknown multibase indicator {code:?}")]
    UnknownBaseCode {
        /// The indicator character that was looked up.
        code: char,
    },

    /// The CID cannot be expressed in the requested version.
    #[error("cannot convert cid with codec 0x{codec:x} to version 0, only dag-pb is supported")]
    UnsupportedConversion {
        /// Multicodec of the CID that failed to convert.
        codec: u64,
    },
}
