//! HMAC-SHA256 token generation and verification

use base64::prelude::*;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the gateway token: base64 of HMAC-SHA256 over `data` keyed with
/// the merchant key. Deterministic; used for every outgoing request.
pub fn generate_token(merchant_key: &str, data: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(merchant_key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(data.as_bytes());
    BASE64_STANDARD.encode(mac.finalize().into_bytes())
}

/// Verifies a counterparty-supplied token against the expected HMAC.
///
/// The comparison runs through the `Mac` trait's constant-time verification;
/// a token that is not valid base64 is simply a mismatch. This authenticates
/// financial callbacks, so no early-exit string comparison is used.
pub fn verify_token(merchant_key: &str, data: &str, supplied: &str) -> bool {
    let raw = match BASE64_STANDARD.decode(supplied) {
        Ok(raw) => raw,
        Err(_) => return false,
    };
    let mut mac = HmacSha256::new_from_slice(merchant_key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(data.as_bytes());
    mac.verify_slice(&raw).is_ok()
}
