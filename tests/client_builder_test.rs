//! Construction-time validation of `MintpressClient::builder()`.

use async_trait::async_trait;
use mintpress::prelude::*;
use serde_json::Value;
use std::sync::Arc;

struct StubSigner;

#[async_trait]
impl Signer for StubSigner {
    async fn sign_typed_data(
        &self,
        _account: &Address,
        _payload: &Value,
    ) -> Result<Signature, SignError> {
        Ok(Signature::new("0xsig"))
    }
}

#[test]
fn builder_requires_base_url() {
    let err = MintpressClient::builder()
        .account(Address::new("0xabc"))
        .signer(Arc::new(StubSigner))
        .build()
        .unwrap_err();
    assert!(matches!(err, SdkError::Validation(_)));
}

#[test]
fn builder_requires_account() {
    let err = MintpressClient::builder()
        .base_url("http://localhost:9898")
        .signer(Arc::new(StubSigner))
        .build()
        .unwrap_err();
    assert!(matches!(err, SdkError::Validation(_)));
}

#[test]
fn builder_rejects_an_empty_account() {
    let err = MintpressClient::builder()
        .base_url("http://localhost:9898")
        .account(Address::new(""))
        .signer(Arc::new(StubSigner))
        .build()
        .unwrap_err();
    assert!(matches!(err, SdkError::Validation(_)));
}

#[test]
fn builder_requires_a_signer() {
    let err = MintpressClient::builder()
        .base_url("http://localhost:9898")
        .account(Address::new("0xabc"))
        .build()
        .unwrap_err();
    assert!(matches!(err, SdkError::Validation(_)));
}

#[test]
fn builder_accepts_a_complete_configuration() {
    let client = MintpressClient::builder()
        .base_url("http://localhost:9898/")
        .account(Address::new("0xabc"))
        .signer(Arc::new(StubSigner))
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .unwrap();
    assert_eq!(client.account().as_str(), "0xabc");
}
