//! Trades sub-client — build → sign → save for single-signer trades.

use super::{TradeSpec, Who};
use crate::client::MintpressClient;
use crate::error::SdkError;

use serde_json::Value;

pub struct Trades<'a> {
    pub(crate) client: &'a MintpressClient,
}

impl<'a> Trades<'a> {
    /// Fill the `who.from` ownership default, then have the service build
    /// the canonical unsigned trade. Idempotent: an existing `from` is
    /// never replaced.
    pub async fn build(&self, mut spec: TradeSpec) -> Result<Value, SdkError> {
        let who = spec.who.get_or_insert_with(Who::default);
        if who.from.is_none() {
            who.from = Some(self.client.account.clone());
        }
        tracing::debug!(from = ?who.from, "building trade");
        Ok(self.client.http.post("/trade/build", &spec).await?)
    }

    /// Project a built trade into the envelope a signer must sign. The
    /// envelope shape is service-defined and opaque to the SDK.
    pub async fn signable(&self, built: &Value) -> Result<Value, SdkError> {
        Ok(self.client.http.post("/trade/signable", built).await?)
    }

    /// One signing round: re-project, sign as the acting account, and
    /// attach the signature to the built trade. Trades carry exactly one
    /// signature; a later signer overwrites it.
    pub async fn sign(&self, built: &Value) -> Result<Value, SdkError> {
        let signable = self.signable(built).await?;
        let sig = self
            .client
            .signer
            .sign_typed_data(&self.client.account, &signable)
            .await?;
        let mut signed = built.clone();
        match signed.as_object_mut() {
            Some(obj) => {
                obj.insert("signature".into(), serde_json::to_value(&sig)?);
            }
            None => {
                return Err(SdkError::Validation("built trade is not an object".into()));
            }
        }
        Ok(signed)
    }

    /// Persist a signed trade.
    pub async fn save(&self, trade: &Value) -> Result<Value, SdkError> {
        Ok(self.client.http.post("/trade/save", trade).await?)
    }

    /// Forward a trade to another party at `url` for an out-of-band
    /// signing round.
    pub async fn send(&self, trade: &Value, url: &str) -> Result<Value, SdkError> {
        Ok(self.client.http.post("/trade/send", &(trade, url)).await?)
    }

    pub async fn query(&self, filter: &Value) -> Result<Value, SdkError> {
        Ok(self.client.http.post("/trade/query", filter).await?)
    }

    pub async fn query_one(&self, filter: &Value) -> Result<Value, SdkError> {
        Ok(self.client.http.post("/trade/queryOne", filter).await?)
    }

    /// The full workflow: build, sign as the acting account, save, and
    /// return the signed trade.
    pub async fn create(&self, spec: TradeSpec) -> Result<Value, SdkError> {
        let built = self.build(spec).await?;
        let signed = self.sign(&built).await?;
        self.save(&signed).await?;
        Ok(signed)
    }
}
