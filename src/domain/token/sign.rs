//! The signing protocol's pure core: signature placement and canonical
//! serialization. Both functions are total and touch no I/O.

use super::{SignableToken, SignedToken, TokenMessage};
use crate::shared::{Address, Signature};

use serde_json::Value;

/// Merge a newly obtained signature into the message's signature array.
///
/// The array is positionally aligned to `creators`. A missing or
/// wrong-length array is discarded and reallocated as all-`None` before
/// placement — previously collected signatures are lost whenever the
/// creator list has changed shape. That reset is deliberate protocol
/// behavior, pending product confirmation.
///
/// Slots for creators other than the signer keep whatever value the
/// projector returned (a prior signature from an earlier session, or
/// `None`); duplicate creator entries matching the signer all receive the
/// signature. Account comparison is case-insensitive.
pub fn place_signature(message: &mut TokenMessage, signer: &Address, signature: &Signature) {
    let len = message.creators.len();
    let stale = message
        .signatures
        .as_ref()
        .map_or(true, |sigs| sigs.len() != len);
    if stale {
        message.signatures = Some(vec![None; len]);
    }
    if let Some(slots) = message.signatures.as_mut() {
        for (i, creator) in message.creators.iter().enumerate() {
            if creator.account.matches(signer) {
                slots[i] = Some(signature.clone());
            }
        }
    }
}

/// Project a signable message down to the canonical persistable field set.
///
/// Copies exactly the declared fields; anything else the projector included
/// is dropped, so the persisted shape stays stable as the message format
/// grows. `uri` and `tokenURI` both carry the source `tokenURI`; `supply`
/// is kept only when present and truthy.
pub fn serialize(signable: &SignableToken) -> SignedToken {
    let m = &signable.message;
    SignedToken {
        kind: m.kind.clone(),
        token_id: m.token_id.clone(),
        uri: m.token_uri.clone(),
        token_uri: m.token_uri.clone(),
        contract: m.contract.clone(),
        creators: m.creators.clone(),
        royalties: m.royalties.clone(),
        signatures: m.signatures.clone(),
        supply: m.supply.clone().filter(is_truthy),
    }
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::token::Share;
    use serde_json::json;

    fn message(creators: &[&str], signatures: Option<Vec<Option<&str>>>) -> TokenMessage {
        TokenMessage {
            kind: "ERC721".into(),
            token_id: Some("12345".into()),
            token_uri: Some("/ipfs/bafy".into()),
            contract: Some(Address::new("0xc0ffee")),
            creators: creators
                .iter()
                .map(|a| Share {
                    account: Address::new(*a),
                    value: 10_000 / creators.len() as u32,
                })
                .collect(),
            royalties: None,
            signatures: signatures
                .map(|sigs| sigs.into_iter().map(|s| s.map(Signature::from)).collect()),
            supply: None,
            extra: serde_json::Map::new(),
        }
    }

    fn sigs(message: &TokenMessage) -> Vec<Option<&str>> {
        message
            .signatures
            .as_ref()
            .unwrap()
            .iter()
            .map(|s| s.as_ref().map(Signature::as_str))
            .collect()
    }

    #[test]
    fn test_placement_fills_the_matching_slot_only() {
        let mut m = message(&["0xa", "0xb", "0xc"], Some(vec![None, None, None]));
        place_signature(&mut m, &Address::new("0xb"), &Signature::new("sigB"));
        assert_eq!(sigs(&m), vec![None, Some("sigB"), None]);
    }

    #[test]
    fn test_placement_preserves_prior_signatures() {
        let mut m = message(&["0xa", "0xb", "0xc"], Some(vec![None, Some("sigB"), None]));
        place_signature(&mut m, &Address::new("0xa"), &Signature::new("sigA"));
        assert_eq!(sigs(&m), vec![Some("sigA"), Some("sigB"), None]);
    }

    #[test]
    fn test_missing_array_is_allocated() {
        let mut m = message(&["0xa", "0xb"], None);
        place_signature(&mut m, &Address::new("0xb"), &Signature::new("sigB"));
        assert_eq!(sigs(&m), vec![None, Some("sigB")]);
    }

    #[test]
    fn test_wrong_length_array_is_reset_before_placement() {
        // Creator list grew since the stale array was collected: everything
        // is discarded, then the new signature lands in its slot.
        let mut m = message(&["0xa", "0xb", "0xc"], Some(vec![Some("stale"), Some("old")]));
        place_signature(&mut m, &Address::new("0xc"), &Signature::new("sigC"));
        assert_eq!(sigs(&m), vec![None, None, Some("sigC")]);
    }

    #[test]
    fn test_account_match_is_case_insensitive() {
        let mut m = message(&["0xABC"], None);
        place_signature(&mut m, &Address::new("0xabc"), &Signature::new("sig"));
        assert_eq!(sigs(&m), vec![Some("sig")]);
    }

    #[test]
    fn test_duplicate_creators_all_receive_the_signature() {
        let mut m = message(&["0xa", "0xa"], Some(vec![None, None]));
        place_signature(&mut m, &Address::new("0xa"), &Signature::new("sig"));
        assert_eq!(sigs(&m), vec![Some("sig"), Some("sig")]);
    }

    #[test]
    fn test_nonmatching_signer_changes_nothing() {
        let mut m = message(&["0xa", "0xb"], Some(vec![Some("sigA"), None]));
        place_signature(&mut m, &Address::new("0xdead"), &Signature::new("sig"));
        assert_eq!(sigs(&m), vec![Some("sigA"), None]);
    }

    #[test]
    fn test_serializer_copies_the_canonical_fields() {
        let m = message(&["0xa"], Some(vec![Some("sig")]));
        let signable = SignableToken {
            message: m,
            extra: serde_json::Map::new(),
        };
        let signed = serialize(&signable);
        assert_eq!(signed.kind, "ERC721");
        assert_eq!(signed.token_id.as_ref().unwrap().as_str(), "12345");
        assert_eq!(signed.uri.as_deref(), Some("/ipfs/bafy"));
        assert_eq!(signed.token_uri.as_deref(), Some("/ipfs/bafy"));
        assert_eq!(signed.contract.as_ref().unwrap().as_str(), "0xc0ffee");
        assert_eq!(signed.creators.len(), 1);
        assert_eq!(
            signed.signatures.as_ref().unwrap()[0].as_ref().unwrap().as_str(),
            "sig"
        );
    }

    #[test]
    fn test_serializer_drops_undeclared_fields() {
        let mut m = message(&["0xa"], Some(vec![Some("sig")]));
        m.extra.insert("internalNonce".into(), json!(99));
        let mut envelope_extra = serde_json::Map::new();
        envelope_extra.insert("types".into(), json!({"EIP712Domain": []}));
        let signable = SignableToken {
            message: m,
            extra: envelope_extra,
        };
        let signed = serde_json::to_value(serialize(&signable)).unwrap();
        let keys: std::collections::BTreeSet<String> =
            signed.as_object().unwrap().keys().cloned().collect();
        let expected: std::collections::BTreeSet<String> = [
            "@type",
            "tokenId",
            "uri",
            "tokenURI",
            "contract",
            "creators",
            "signatures",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_supply_included_iff_truthy() {
        let mut m = message(&["0xa"], None);
        m.supply = Some(json!(10));
        let signable = SignableToken {
            message: m,
            extra: serde_json::Map::new(),
        };
        assert_eq!(serialize(&signable).supply, Some(json!(10)));

        let mut zero = signable.clone();
        zero.message.supply = Some(json!(0));
        assert_eq!(serialize(&zero).supply, None);

        let mut empty = signable.clone();
        empty.message.supply = Some(json!(""));
        assert_eq!(serialize(&empty).supply, None);

        let mut absent = signable;
        absent.message.supply = None;
        assert_eq!(serialize(&absent).supply, None);
    }
}
