//! The signing boundary — an injected capability that signs typed
//! structured data on behalf of the acting account.
//!
//! Wallet integration (browser bridge, keystore, hardware) lives behind
//! this trait. The SDK never interprets signatures; it places whatever the
//! signer returns into the artifact's signature slots. A declined or
//! failed signature surfaces as [`SignError`] and aborts the signing step.

use crate::error::SignError;
use crate::shared::{Address, Signature};

use async_trait::async_trait;

/// Signs typed structured data for one account.
#[async_trait]
pub trait Signer: Send + Sync {
    /// Sign `payload` as `account`.
    ///
    /// `payload` is the full signable envelope exactly as the service
    /// returned it; implementations hand it to the wallet's typed-data
    /// signing method (for EVM wallets, `eth_signTypedData_v4`).
    async fn sign_typed_data(
        &self,
        account: &Address,
        payload: &serde_json::Value,
    ) -> Result<Signature, SignError>;
}
