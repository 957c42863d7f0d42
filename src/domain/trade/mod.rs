//! Trade domain — ownership-transfer artifacts with a single signer.
//!
//! Trades mirror the token pipeline (build → signable → sign → save) but
//! carry a `who.from` ownership marker instead of a creator list, and
//! exactly one `signature` field instead of a positional array.

pub mod client;

use crate::shared::Address;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied partial trade description. Unmodeled fields ride along
/// to `/trade/build` untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub who: Option<Who>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The trade's ownership marker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Who {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
