//! Tokens sub-client — the build → sign → save workflow plus queries.

use super::sign::{place_signature, serialize};
use super::{ident, Share, SignableToken, SignedToken, TokenSpec};
use crate::client::MintpressClient;
use crate::error::SdkError;
use crate::shared::TokenId;

use serde_json::Value;

pub struct Tokens<'a> {
    pub(crate) client: &'a MintpressClient,
}

impl<'a> Tokens<'a> {
    /// Fill identity/ownership defaults into `spec`, then have the service
    /// construct the canonical unsigned token.
    ///
    /// Defaulting is idempotent: an already-assigned identity is never
    /// regenerated, and only absent or empty metadata fields are defaulted.
    /// A spec without `creators` gets the single-creator 100% share keyed
    /// on the acting account.
    pub async fn build(&self, mut spec: TokenSpec) -> Result<Value, SdkError> {
        if spec.token_id.is_none() {
            spec.token_id = Some(ident::generate(&self.client.account)?);
            let meta = &mut spec.metadata;
            for field in [&mut meta.name, &mut meta.description, &mut meta.image] {
                if field.as_deref().map_or(true, str::is_empty) {
                    *field = Some(String::new());
                }
            }
        }
        if spec.creators.is_none() {
            spec.creators = Some(vec![Share::sole(self.client.account.clone())]);
        }
        tracing::debug!(token_id = ?spec.token_id, "building token");
        Ok(self.client.http.post("/token/build", &spec).await?)
    }

    /// Project a built token into the exact envelope a signer must sign.
    ///
    /// Projection is never cached: the envelope carries the signature state
    /// the service currently holds, which may have gained signatures from
    /// other creators since the last call.
    pub async fn signable(&self, built: &Value) -> Result<SignableToken, SdkError> {
        Ok(self.client.http.post("/token/signable", built).await?)
    }

    /// One signing round: re-project, sign as the acting account, place the
    /// signature into its creator slot, and serialize the canonical signed
    /// token.
    pub async fn sign(&self, built: &Value) -> Result<SignedToken, SdkError> {
        let mut signable = self.signable(built).await?;
        let payload = serde_json::to_value(&signable)?;
        let sig = self
            .client
            .signer
            .sign_typed_data(&self.client.account, &payload)
            .await?;
        place_signature(&mut signable.message, &self.client.account, &sig);
        Ok(serialize(&signable))
    }

    /// Persist a signed token.
    pub async fn save(&self, token: &SignedToken) -> Result<Value, SdkError> {
        Ok(self.client.http.post("/token/save", token).await?)
    }

    /// Forward a token to another party at `url` for a further signing
    /// round.
    pub async fn send(&self, token: &SignedToken, url: &str) -> Result<Value, SdkError> {
        Ok(self.client.http.post("/token/send", &(token, url)).await?)
    }

    pub async fn query(&self, filter: &Value) -> Result<Value, SdkError> {
        Ok(self.client.http.post("/token/query", filter).await?)
    }

    pub async fn query_one(&self, filter: &Value) -> Result<Value, SdkError> {
        Ok(self.client.http.post("/token/queryOne", filter).await?)
    }

    /// List the files associated with a token identity.
    pub async fn files(&self, token_id: &TokenId) -> Result<Value, SdkError> {
        Ok(self.client.http.post("/token/files", token_id).await?)
    }

    /// The full workflow: build, sign as the acting account, save, and
    /// return the signed token.
    pub async fn create(&self, spec: TokenSpec) -> Result<SignedToken, SdkError> {
        let built = self.build(spec).await?;
        let signed = self.sign(&built).await?;
        self.save(&signed).await?;
        Ok(signed)
    }
}
