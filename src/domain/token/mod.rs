//! Token domain — specs, signable messages, signed artifacts.
//!
//! A token moves through three shapes: a caller [`TokenSpec`] (partial,
//! defaults filled client-side), an opaque built artifact (the service's
//! canonical unsigned form, kept as raw JSON), and a [`SignableToken`]
//! envelope whose `message` carries the creator list and the in-progress
//! signature array. [`SignedToken`] is the fixed-field projection that gets
//! persisted.

pub mod client;
pub mod ident;
pub mod sign;

use crate::shared::{Address, Signature, TokenId};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Full ownership expressed in basis points.
pub const FULL_SHARE: u32 = 10_000;

/// A basis-point ownership share. One entry per stakeholder; the same
/// shape carries royalty entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub account: Address,
    pub value: u32,
}

impl Share {
    /// The single-creator 100% share for `account`.
    pub fn sole(account: Address) -> Self {
        Self {
            account,
            value: FULL_SHARE,
        }
    }
}

/// Caller-supplied partial token description.
///
/// Fields the builder can default are optional; anything else the caller
/// includes rides along to `/token/build` untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenSpec {
    #[serde(rename = "tokenId", skip_serializing_if = "Option::is_none")]
    pub token_id: Option<TokenId>,
    #[serde(default)]
    pub metadata: TokenMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creators: Option<Vec<Share>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Token metadata. Absent or empty fields are defaulted to empty strings
/// when the builder assigns a fresh identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Signable envelope returned by `/token/signable`.
///
/// Envelope fields beyond `message` (typed-data `types`, `domain`,
/// `primaryType`, ...) are opaque to the SDK and round-trip through
/// `extra`, so the signer sees exactly what the service produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignableToken {
    pub message: TokenMessage,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The message portion of a signable envelope: the creator list and the
/// in-progress signature array live here.
///
/// `signatures`, when present, is positionally aligned to `creators`:
/// `signatures[i]` is `None` until `creators[i].account` has signed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenMessage {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "tokenId", skip_serializing_if = "Option::is_none")]
    pub token_id: Option<TokenId>,
    #[serde(rename = "tokenURI", skip_serializing_if = "Option::is_none")]
    pub token_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<Address>,
    #[serde(default)]
    pub creators: Vec<Share>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub royalties: Option<Vec<Share>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signatures: Option<Vec<Option<Signature>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supply: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The canonical persistable projection of a signable message.
///
/// Exactly these fields, regardless of what else the projector included —
/// the persisted shape stays stable as the service's message format grows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedToken {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "tokenId", skip_serializing_if = "Option::is_none")]
    pub token_id: Option<TokenId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(rename = "tokenURI", skip_serializing_if = "Option::is_none")]
    pub token_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<Address>,
    pub creators: Vec<Share>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub royalties: Option<Vec<Share>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signatures: Option<Vec<Option<Signature>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supply: Option<Value>,
}

impl SignedToken {
    /// True once every creator slot holds a signature.
    pub fn fully_signed(&self) -> bool {
        match &self.signatures {
            Some(sigs) => {
                sigs.len() == self.creators.len() && sigs.iter().all(Option::is_some)
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_round_trips_unmodeled_fields() {
        let raw = serde_json::json!({
            "metadata": { "name": "n", "tags": ["a"] },
            "supply": 5,
        });
        let spec: TokenSpec = serde_json::from_value(raw).unwrap();
        assert_eq!(spec.metadata.name.as_deref(), Some("n"));
        assert!(spec.metadata.extra.contains_key("tags"));
        assert!(spec.extra.contains_key("supply"));

        let back = serde_json::to_value(&spec).unwrap();
        assert_eq!(back["supply"], 5);
        assert_eq!(back["metadata"]["tags"][0], "a");
    }

    #[test]
    fn test_signable_envelope_preserves_typed_data_fields() {
        let raw = serde_json::json!({
            "types": { "EIP712Domain": [] },
            "domain": { "name": "Mint" },
            "primaryType": "Mint721",
            "message": {
                "@type": "ERC721",
                "tokenId": "7",
                "creators": [{ "account": "0xa", "value": 10000 }],
            },
        });
        let signable: SignableToken = serde_json::from_value(raw).unwrap();
        assert_eq!(signable.message.kind, "ERC721");
        assert_eq!(signable.message.creators.len(), 1);

        let back = serde_json::to_value(&signable).unwrap();
        assert_eq!(back["primaryType"], "Mint721");
        assert_eq!(back["domain"]["name"], "Mint");
        assert_eq!(back["message"]["tokenId"], "7");
    }

    #[test]
    fn test_fully_signed() {
        let mut token = SignedToken {
            kind: "ERC721".into(),
            token_id: None,
            uri: None,
            token_uri: None,
            contract: None,
            creators: vec![
                Share::sole(Address::new("0xa")),
                Share::sole(Address::new("0xb")),
            ],
            royalties: None,
            signatures: Some(vec![Some(Signature::new("s1")), None]),
            supply: None,
        };
        assert!(!token.fully_signed());
        token.signatures = Some(vec![
            Some(Signature::new("s1")),
            Some(Signature::new("s2")),
        ]);
        assert!(token.fully_signed());
        token.signatures = None;
        assert!(!token.fully_signed());
    }
}
