//! API wire types carried through JSON and rendered through encoders.

use std::collections::HashMap;

use cidutil_enc::{ApiCid, ApiHash, Base, CidEncoder, Encoder, EncoderContext, OverrideEncoder};
use cidutil_integration_tests::{OTHER_V0, RAW_B58, V0, V1, cid};
use cidutil_types::{CidKey, to_v0, to_v1};

#[test]
fn test_pinned_cids_survive_json_map_round_trip() {
    let mut enc = OverrideEncoder::new(Encoder::new(Base::Base32Lower, true));
    enc.add([RAW_B58]);

    let h1 = ApiHash::from_cid(&cid(RAW_B58));
    let h2 = ApiHash::from_cid(&cid(OTHER_V0));
    let map = HashMap::from([
        (h1.clone(), "a value".to_string()),
        (h2.clone(), "something else".to_string()),
    ]);

    let data = serde_json::to_string(&map).unwrap();
    let back: HashMap<ApiHash, String> = serde_json::from_str(&data).unwrap();
    assert_eq!(back, map);

    // Keys still decode to the same CIDs, and render through the table.
    for key in back.keys() {
        let c = key.cid().unwrap();
        assert!(c == cid(RAW_B58) || c == cid(OTHER_V0));
    }
    assert_eq!(h1.encode(&enc), RAW_B58);
    assert_eq!(h2.encode(&enc), enc.base().encode(&cid(OTHER_V0)));
}

#[test]
fn test_json_keys_are_plain_strings() {
    let h = ApiHash::from_cid(&cid(V0));
    let map = HashMap::from([(h, 1u32)]);
    let value: serde_json::Value = serde_json::to_value(&map).unwrap();
    assert_eq!(value[V0], 1);
}

#[test]
fn test_api_hash_renders_through_context() {
    let ctx = EncoderContext::new().with_encoder(Encoder::new(Base::Base32Lower, true));
    let h = ApiHash::from_cid(&cid(V0));
    assert_eq!(h.encode(ctx.encoder()), V1);
    assert_eq!(h.encode(EncoderContext::new().encoder()), V0);
}

#[test]
fn test_cid_keys_merge_textual_forms() {
    let b32 = cid(V1);
    let b58 = cid(&Encoder::DEFAULT.encode(&b32));
    let mut map = HashMap::new();
    map.insert(CidKey::from(&b32), "first");
    map.insert(CidKey::from(&b58), "second");
    assert_eq!(map.len(), 1);
    assert_eq!(map[&CidKey::from(&b32)], "second");
}

#[test]
fn test_legacy_conversion_pair() {
    let v0 = cid(V0);
    let v1 = to_v1(&v0);
    assert_eq!(v1.to_string(), V1);
    assert_eq!(to_v0(&v1).unwrap().to_string(), V0);
    assert_eq!(ApiCid(v0).to_string(), V0);
}

#[test]
fn test_api_cid_links_in_payload() {
    let links = vec![ApiCid(cid(V0)), ApiCid(cid(RAW_B58))];
    let value = serde_json::to_value(&links).unwrap();
    assert_eq!(value[0]["/"], V0);
    assert_eq!(value[1]["/"], cid(RAW_B58).to_string());

    let back: Vec<ApiCid> = serde_json::from_value(value).unwrap();
    assert_eq!(back, links);
    assert_eq!(back[1].to_string(), RAW_B58);
}
