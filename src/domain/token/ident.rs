//! Token identity generation.
//!
//! Identities are minted client-side from (account, timestamp, randomness),
//! so no central sequence allocator is needed; collision avoidance is a
//! property of the entropy, not of the protocol. An identity is assigned at
//! most once per token and never regenerated.

use crate::error::SdkError;
use crate::shared::{Address, TokenId};

use alloy_primitives::U256;
use rand::Rng;

/// Mint a fresh token identity for `account`.
///
/// A 13-digit millisecond timestamp and an 11-digit random numeral are
/// concatenated behind the account's string representation; the whole
/// string is parsed as one integer — hexadecimal when the account carries a
/// `0x` prefix, decimal otherwise — and rendered back as canonical base-10,
/// which strips any leading-zero ambiguity. Malformed or empty account
/// input is a precondition violation.
pub fn generate(account: &Address) -> Result<TokenId, SdkError> {
    let millis = chrono::Utc::now().timestamp_millis();
    let salt = rand::thread_rng().gen_range(0..100_000_000_000u64);
    compose(account, millis, salt)
}

pub(crate) fn compose(account: &Address, millis: i64, salt: u64) -> Result<TokenId, SdkError> {
    if account.is_empty() {
        return Err(SdkError::Validation("empty account".into()));
    }
    let digits = format!("{:013}{:011}", millis, salt);
    let acct = account.as_str();
    let parsed = match acct.strip_prefix("0x").or_else(|| acct.strip_prefix("0X")) {
        Some(hex) => U256::from_str_radix(&format!("{hex}{digits}"), 16),
        None => U256::from_str_radix(&format!("{acct}{digits}"), 10),
    };
    let id = parsed
        .map_err(|e| SdkError::Validation(format!("malformed account {acct:?}: {e}")))?;
    Ok(TokenId::new(id.to_string()))
}
