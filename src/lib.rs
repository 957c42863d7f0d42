//! # Mintpress SDK
//!
//! Rust client for the Mintpress tokenization service: build ownership
//! artifacts remotely, sign them with an injected wallet capability, and
//! persist the canonical signed projection.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Shared** — string newtypes used across all domains
//! 2. **Signing boundary** — the injected [`signer::Signer`] capability
//! 3. **HTTP transport** — `MintpressHttp`, a thin `reqwest` wrapper
//! 4. **Domains** (vertical slices) — token, trade, and file store
//! 5. **High-Level Client** — [`client::MintpressClient`] with nested
//!    sub-clients
//!
//! Tokens are signed by every creator before they count as valid: each
//! signing session re-projects the artifact, signs as one account, and
//! places the signature into the slot aligned with that creator. Sessions
//! are independent — a half-signed token can be forwarded to the next
//! creator with `tokens().send()`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mintpress::prelude::*;
//!
//! let client = MintpressClient::builder()
//!     .base_url("https://press.example.com")
//!     .account(Address::new("0xfb7b2717f7a2a30b42e21cef03dd0fc76ef761e9"))
//!     .signer(wallet)
//!     .build()?;
//!
//! let token = client.tokens().create(TokenSpec::default()).await?;
//! client.tokens().send(&token, "https://peer.example.com/inbox").await?;
//! ```

// ── Layer 1: Shared ──────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Unified SDK error types.
pub mod error;

// ── Layer 2: Signing boundary ────────────────────────────────────────────────

/// The injected typed-data signing capability.
pub mod signer;

// ── Layer 3: HTTP transport ──────────────────────────────────────────────────

/// HTTP client owning the service base URL.
pub mod http;

// ── Layer 4: Domains ─────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, protocol logic, sub-clients.
pub mod domain;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `MintpressClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Address, Cid, Signature, TokenId};

    // Domain types — token
    pub use crate::domain::token::{
        Share, SignableToken, SignedToken, TokenMessage, TokenMetadata, TokenSpec, FULL_SHARE,
    };

    // The pure signing core
    pub use crate::domain::token::ident::generate as generate_token_id;
    pub use crate::domain::token::sign::{place_signature, serialize};

    // Domain types — trade, file store
    pub use crate::domain::fs::FileSource;
    pub use crate::domain::trade::{TradeSpec, Who};

    // Errors
    pub use crate::error::{HttpError, SdkError, SignError};

    // Signing boundary
    pub use crate::signer::Signer;

    // High-level client + sub-clients
    pub use crate::client::{MintpressClient, MintpressClientBuilder};
    pub use crate::domain::fs::client::Fs;
    pub use crate::domain::token::client::Tokens;
    pub use crate::domain::trade::client::Trades;
}
