//! Canonical string construction
//!
//! Every operation hashes over a fixed, ordered concatenation of field
//! values with no separators, with the merchant salt appended last. The
//! orders differ per operation and are mandated by the gateway; a single
//! wrong or reordered byte silently invalidates the token. This module is
//! the only place those orders appear.
//!
//! Values must already be in wire form: amounts in minor units (or the
//! refund's 2-decimal form), booleans as `"1"`/`"0"`, dates as
//! `YYYY-MM-DD HH:mm:ss`. Missing optional fields are the empty string;
//! positions are never omitted.

use crate::config::MerchantConfig;
use crate::core::constants::DEFAULT_PAYMENT_TYPE;
use crate::core::currency::Currency;
use crate::core::format::encode_bool;

/// Payment family (prepare, save-card, stored-card, recurring, direct):
/// merchant_id + user_ip + merchant_oid + email + amount + payment_type +
/// installment_count + currency + test_mode + non_3d + salt.
///
/// The higher-level payment operations add form fields on top of the base
/// field-set but always hash over this same string.
#[allow(clippy::too_many_arguments)]
pub fn payment(
    config: &MerchantConfig,
    user_ip: &str,
    merchant_oid: &str,
    email: &str,
    amount_minor: &str,
    installment_count: u32,
    currency: Currency,
    non_3d: bool,
) -> String {
    format!(
        "{}{}{}{}{}{}{}{}{}{}{}",
        config.merchant_id,
        user_ip,
        merchant_oid,
        email,
        amount_minor,
        DEFAULT_PAYMENT_TYPE,
        installment_count,
        currency.code(),
        encode_bool(config.test_mode),
        encode_bool(non_3d),
        config.merchant_salt,
    )
}

/// Inbound notification: merchant_oid + salt + status + total_amount.
/// The salt sits second here, not last.
pub fn callback(
    config: &MerchantConfig,
    merchant_oid: &str,
    status: &str,
    total_amount: &str,
) -> String {
    format!(
        "{}{}{}{}",
        merchant_oid, config.merchant_salt, status, total_amount
    )
}

/// BIN lookup: bin_number + merchant_id + salt.
pub fn bin_query(config: &MerchantConfig, bin_number: &str) -> String {
    format!(
        "{}{}{}",
        bin_number, config.merchant_id, config.merchant_salt
    )
}

/// Refund: merchant_id + merchant_oid + amount (2-decimal string) + salt.
pub fn refund(config: &MerchantConfig, merchant_oid: &str, return_amount: &str) -> String {
    format!(
        "{}{}{}{}",
        config.merchant_id, merchant_oid, return_amount, config.merchant_salt
    )
}

/// Transaction log: merchant_id + start_date + end_date + salt.
pub fn transaction_log(config: &MerchantConfig, start_date: &str, end_date: &str) -> String {
    format!(
        "{}{}{}{}",
        config.merchant_id, start_date, end_date, config.merchant_salt
    )
}

/// Stored card listing: utoken + salt.
pub fn list_cards(config: &MerchantConfig, utoken: &str) -> String {
    format!("{}{}", utoken, config.merchant_salt)
}

/// Stored card deletion: ctoken + utoken + salt. Card token first.
pub fn delete_card(config: &MerchantConfig, ctoken: &str, utoken: &str) -> String {
    format!("{}{}{}", ctoken, utoken, config.merchant_salt)
}

/// Order status: merchant_id + merchant_oid + salt.
pub fn order_status(config: &MerchantConfig, merchant_oid: &str) -> String {
    format!(
        "{}{}{}",
        config.merchant_id, merchant_oid, config.merchant_salt
    )
}

/// Installment rates: merchant_id + request_id + salt.
pub fn installment_rates(config: &MerchantConfig, request_id: &str) -> String {
    format!(
        "{}{}{}",
        config.merchant_id, request_id, config.merchant_salt
    )
}
