//! Multibase registry: lookups by name and by indicator character.

use cid::Version;
use cid::multibase::Base;

use crate::error::CidError;
use crate::version::detect_version;

/// Canonical multibase names, in the order they appear in the multibase table.
///
/// `identity` is left out: CID bytes are binary, and it cannot render them.
const BASES: &[(&str, Base)] = &[
    ("base2", Base::Base2),
    ("base8", Base::Base8),
    ("base10", Base::Base10),
    ("base16", Base::Base16Lower),
    ("base16upper", Base::Base16Upper),
    ("base32", Base::Base32Lower),
    ("base32upper", Base::Base32Upper),
    ("base32pad", Base::Base32PadLower),
    ("base32padupper", Base::Base32PadUpper),
    ("base32hex", Base::Base32HexLower),
    ("base32hexupper", Base::Base32HexUpper),
    ("base32hexpad", Base::Base32HexPadLower),
    ("base32hexpadupper", Base::Base32HexPadUpper),
    ("base32z", Base::Base32Z),
    ("base36", Base::Base36Lower),
    ("base36upper", Base::Base36Upper),
    ("base58flickr", Base::Base58Flickr),
    ("base58btc", Base::Base58Btc),
    ("base64", Base::Base64),
    ("base64pad", Base::Base64Pad),
    ("base64url", Base::Base64Url),
    ("base64urlpad", Base::Base64UrlPad),
    ("base256emoji", Base::Base256Emoji),
];

/// Look up a multibase encoding by name.
///
/// A single-character `name` is treated as the indicator code itself, so
/// both `"base32"` and `"b"` resolve to [`Base::Base32Lower`].
pub fn base_from_name(name: &str) -> Result<Base, CidError> {
    let mut chars = name.chars();
    if let (Some(code), None) = (chars.next(), chars.next()) {
        return base_from_code(code);
    }
    BASES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, base)| *base)
        .ok_or_else(|| CidError::UnknownBase {
            name: name.to_string(),
        })
}

/// Look up a multibase encoding by its one-character indicator.
pub fn base_from_code(code: char) -> Result<Base, CidError> {
    match Base::from_code(code) {
        Ok(Base::Identity) | Err(_) => Err(CidError::UnknownBaseCode { code }),
        Ok(base) => Ok(base),
    }
}

/// Canonical name of a multibase encoding, if it is in the registry.
pub fn base_name(base: Base) -> Option<&'static str> {
    BASES.iter().find(|(_, b)| *b == base).map(|(n, _)| *n)
}

/// The multibase encoding a textual CID is written in.
///
/// Version-0 CIDs carry no indicator and are always base58btc.
pub fn extract_encoding(text: &str) -> Result<Base, CidError> {
    match detect_version(text)? {
        Version::V0 => Ok(Base::Base58Btc),
        Version::V1 => {
            let code = text.chars().next().ok_or(CidError::TooShort { len: 0 })?;
            base_from_code(code)
        }
    }
}
