//! High-level client — `MintpressClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder and the accessor methods.

use crate::domain::fs::client::Fs;
use crate::domain::token::client::Tokens;
use crate::domain::trade::client::Trades;
use crate::error::SdkError;
use crate::http::MintpressHttp;
use crate::shared::Address;
use crate::signer::Signer;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// The primary entry point for the Mintpress SDK.
///
/// Holds the HTTP transport, the acting account, and the injected signing
/// capability; provides sub-client accessors for each domain:
/// `client.tokens()`, `client.trades()`, `client.fs()`.
#[derive(Clone)]
pub struct MintpressClient {
    pub(crate) http: MintpressHttp,
    pub(crate) account: Address,
    pub(crate) signer: Arc<dyn Signer>,
}

impl fmt::Debug for MintpressClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MintpressClient")
            .field("account", &self.account)
            .field("signer", &"<dyn Signer>")
            .finish_non_exhaustive()
    }
}

impl MintpressClient {
    pub fn builder() -> MintpressClientBuilder {
        MintpressClientBuilder::default()
    }

    /// The acting account every workflow signs and defaults against.
    pub fn account(&self) -> &Address {
        &self.account
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    pub fn fs(&self) -> Fs<'_> {
        Fs { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MintpressClientBuilder {
    base_url: Option<String>,
    account: Option<Address>,
    signer: Option<Arc<dyn Signer>>,
    timeout: Option<Duration>,
}

impl MintpressClientBuilder {
    /// The service base URL, e.g. `"https://press.example.com"`.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// The acting account.
    pub fn account(mut self, account: Address) -> Self {
        self.account = Some(account);
        self
    }

    /// The injected signing capability.
    pub fn signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Opt-in per-request timeout. Without it, requests have no implicit
    /// deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<MintpressClient, SdkError> {
        let base_url = self
            .base_url
            .ok_or_else(|| SdkError::Validation("base_url is required".into()))?;
        let account = self
            .account
            .ok_or_else(|| SdkError::Validation("account is required".into()))?;
        if account.is_empty() {
            return Err(SdkError::Validation("account must not be empty".into()));
        }
        let signer = self
            .signer
            .ok_or_else(|| SdkError::Validation("signer is required".into()))?;

        Ok(MintpressClient {
            http: MintpressHttp::new(&base_url, self.timeout)?,
            account,
            signer,
        })
    }
}
