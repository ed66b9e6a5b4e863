//! Building CIDs from content and rendering them through encoders.

use cidutil_builder::{CidBuilder, Inliner, V0Builder, V1Builder};
use cidutil_enc::{Base, CidEncoder, Encoder};
use cidutil_integration_tests::cid;
use cidutil_types::codec::{BLAKE3, DAG_CBOR, IDENTITY, RAW, SHA2_256};
use cidutil_types::{CidError, Version, sort, to_v0};
use rand::Rng;

fn random_bytes(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rand::rng().fill(&mut data[..]);
    data
}

#[test]
fn test_inline_boundary_at_64() {
    let builder = Inliner::new(V1Builder::new(RAW, SHA2_256), 64).unwrap();
    let inlined = builder.sum(&random_bytes(64)).unwrap();
    assert_eq!(inlined.hash().code(), IDENTITY);
    let hashed = builder.sum(&random_bytes(65)).unwrap();
    assert_eq!(hashed.hash().code(), SHA2_256);
}

#[test]
fn test_inlined_cid_survives_recoding() {
    let payload = b"small payload";
    let built = Inliner::new(V0Builder, 32).unwrap().sum(payload).unwrap();

    for base in [Base::Base58Btc, Base::Base32Lower, Base::Base64Url] {
        let text = Encoder::new(base, true).encode(&built);
        let decoded = cid(&text);
        assert_eq!(decoded, built);
        assert_eq!(decoded.hash().digest(), payload);
    }
}

#[test]
fn test_raw_content_cid_has_no_v0_form() {
    let built = V1Builder::new(RAW, SHA2_256).sum(b"raw leaf").unwrap();
    assert!(matches!(
        to_v0(&built),
        Err(CidError::UnsupportedConversion { codec: RAW })
    ));
}

#[test]
fn test_v0_builder_output_is_legacy_text() {
    let built = V0Builder.sum(&random_bytes(1024)).unwrap();
    assert_eq!(built.version(), Version::V0);
    let text = Encoder::new(Base::Base32Lower, false).encode(&built);
    assert_eq!(text.len(), 46);
    assert!(text.starts_with("Qm"));
    assert_eq!(Encoder::new(Base::Base32Lower, false).recode(&text).unwrap(), text);
}

#[test]
fn test_codec_change_through_boxed_inliner() {
    let builder: Box<dyn CidBuilder> =
        Box::new(Inliner::new(V1Builder::new(RAW, BLAKE3), 16).unwrap());
    let cbor = builder.with_codec(DAG_CBOR);

    let small = cbor.sum(b"{}").unwrap();
    assert_eq!(small.codec(), DAG_CBOR);
    assert_eq!(small.hash().code(), IDENTITY);

    let large = cbor.sum(&random_bytes(17)).unwrap();
    assert_eq!(large.codec(), DAG_CBOR);
    assert_eq!(large.hash().code(), BLAKE3);
}

#[test]
fn test_built_cids_sort_deterministically() {
    let builder = Inliner::new(V0Builder, 8).unwrap();
    let mut cids: Vec<_> = (0..32u8)
        .map(|i| builder.sum(&vec![i; usize::from(i)]).unwrap())
        .collect();
    sort(&mut cids);
    let sorted = cids.clone();
    cids.reverse();
    sort(&mut cids);
    assert_eq!(cids, sorted);
}
