//! Card services: BIN lookup and stored-card (cAPI) management
//!
//! These operations share a shape: a short signed form with the merchant
//! credentials and one or two identifying fields. The request builders here
//! produce the form; [`crate::client::PayTr`] posts it.

pub mod models;

use crate::config::MerchantConfig;
use crate::core::Result;
use crate::modules::signing::{canonical, token};
use crate::transport::FormFields;

/// Builds the signed form for a BIN detail lookup.
///
/// `bin_number` is the first 6-8 digits of a card number.
pub fn build_bin_query(config: &MerchantConfig, bin_number: &str) -> Result<FormFields> {
    let digits = bin_number.trim();
    if digits.len() < 6 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(crate::core::PayTrError::validation(
            "bin_number must be at least 6 digits",
        ));
    }

    let canonical = canonical::bin_query(config, digits);
    let paytr_token = token::generate_token(&config.merchant_key, &canonical);

    let mut fields = FormFields::new();
    fields.insert("merchant_id".into(), config.merchant_id.clone());
    fields.insert("bin_number".into(), digits.to_owned());
    fields.insert("paytr_token".into(), paytr_token);
    Ok(fields)
}

/// Builds the signed form that lists cards stored under a user token.
pub fn build_card_list(config: &MerchantConfig, utoken: &str) -> Result<FormFields> {
    if utoken.is_empty() {
        return Err(crate::core::PayTrError::validation("utoken is required"));
    }

    let canonical = canonical::list_cards(config, utoken);
    let paytr_token = token::generate_token(&config.merchant_key, &canonical);

    let mut fields = FormFields::new();
    fields.insert("merchant_id".into(), config.merchant_id.clone());
    fields.insert("utoken".into(), utoken.to_owned());
    fields.insert("paytr_token".into(), paytr_token);
    Ok(fields)
}

/// Builds the signed form that deletes a single stored card.
pub fn build_card_delete(
    config: &MerchantConfig,
    utoken: &str,
    ctoken: &str,
) -> Result<FormFields> {
    if utoken.is_empty() || ctoken.is_empty() {
        return Err(crate::core::PayTrError::validation(
            "utoken and ctoken are required",
        ));
    }

    let canonical = canonical::delete_card(config, ctoken, utoken);
    let paytr_token = token::generate_token(&config.merchant_key, &canonical);

    let mut fields = FormFields::new();
    fields.insert("merchant_id".into(), config.merchant_id.clone());
    fields.insert("utoken".into(), utoken.to_owned());
    fields.insert("ctoken".into(), ctoken.to_owned());
    fields.insert("paytr_token".into(), paytr_token);
    Ok(fields)
}
