//! Callback hash verification
//!
//! Verification is pure and never fails loudly: replayed, tampered or
//! truncated notifications are routine, so a malformed callback is simply
//! `false`, not an error.

use crate::config::MerchantConfig;
use crate::modules::callbacks::models::CallbackPayload;
use crate::modules::signing::{canonical, token};
use crate::transport::FormFields;

/// Verifies a typed callback payload against the merchant credentials.
pub fn verify_callback(config: &MerchantConfig, callback: &CallbackPayload) -> bool {
    let data = canonical::callback(
        config,
        &callback.merchant_oid,
        &callback.status,
        &callback.total_amount,
    );
    token::verify_token(&config.merchant_key, &data, &callback.hash)
}

/// Verifies a raw form field-set before it has been deserialized. Missing
/// required fields are a verification failure, not an error.
pub fn verify_callback_fields(config: &MerchantConfig, fields: &FormFields) -> bool {
    let (Some(merchant_oid), Some(status), Some(total_amount), Some(hash)) = (
        fields.get("merchant_oid"),
        fields.get("status"),
        fields.get("total_amount"),
        fields.get("hash"),
    ) else {
        return false;
    };

    let data = canonical::callback(config, merchant_oid, status, total_amount);
    token::verify_token(&config.merchant_key, &data, hash)
}
