//! Signed field-set assembly for the payment family and refunds
//!
//! The base builder produces the complete field-set for the hosted payment
//! form; the save-card, stored-card and recurring builders copy that
//! field-set and add their extra fields. The token is always computed over
//! the base canonical string, never recomputed by a wrapper.

use crate::config::MerchantConfig;
use crate::core::constants::{PAYMENT_FORM_URL, REFUND_URL};
use crate::core::error::{PayTrError, Result};
use crate::core::format::{decimal_amount, encode_bool, minor_units};
use crate::modules::payments::models::{
    format_basket, CardInfo, PaymentRequest, PreparedPayment, RecurringPayment, SaveCardPayment,
    StoredCardPayment,
};
use crate::modules::signing::{canonical, token};
use crate::transport::FormFields;
use rust_decimal::Decimal;

/// Builds the signed field-set for the base payment operation.
pub fn build_payment_form(
    config: &MerchantConfig,
    request: &PaymentRequest,
) -> Result<PreparedPayment> {
    validate_payment(request)?;

    let user_ip = request.user_ip.clone().unwrap_or_default();
    let amount_minor = minor_units(request.amount);

    let data = canonical::payment(
        config,
        &user_ip,
        &request.merchant_oid,
        &request.email,
        &amount_minor,
        request.installment_count,
        request.currency,
        request.non_3d,
    );
    let token = token::generate_token(&config.merchant_key, &data);

    let mut form = FormFields::new();
    form.insert("merchant_id".into(), config.merchant_id.clone());
    form.insert("user_ip".into(), user_ip);
    form.insert("merchant_oid".into(), request.merchant_oid.clone());
    form.insert("email".into(), request.email.clone());
    form.insert(
        "payment_type".into(),
        crate::core::constants::DEFAULT_PAYMENT_TYPE.into(),
    );
    form.insert("payment_amount".into(), amount_minor);
    form.insert("currency".into(), request.currency.code().into());
    form.insert("test_mode".into(), encode_bool(config.test_mode).into());
    form.insert("non_3d".into(), encode_bool(request.non_3d).into());
    form.insert("merchant_ok_url".into(), request.ok_url.clone());
    form.insert("merchant_fail_url".into(), request.fail_url.clone());
    form.insert("user_name".into(), request.user.name.clone());
    form.insert("user_address".into(), request.user.address.clone());
    form.insert("user_phone".into(), request.user.phone.clone());
    form.insert("user_basket".into(), format_basket(&request.basket));
    form.insert("debug_on".into(), encode_bool(config.debug_mode).into());
    form.insert("client_lang".into(), config.language.code().into());
    form.insert("paytr_token".into(), token.clone());
    form.insert(
        "installment_count".into(),
        request.installment_count.to_string(),
    );
    form.insert(
        "card_type".into(),
        request.card_type.map(|c| c.code()).unwrap_or("").into(),
    );
    form.insert(
        "non3d_test_failed".into(),
        encode_bool(request.non3d_test_failed).into(),
    );

    if let Some(card) = &request.card {
        form.insert("cc_owner".into(), card.cc_owner.clone());
        form.insert("card_number".into(), card.card_number.clone());
        form.insert("expiry_month".into(), card.expiry_month.clone());
        form.insert("expiry_year".into(), card.expiry_year.clone());
        form.insert("cvv".into(), card.cvv.clone());
    }

    if request.sync_mode {
        form.insert("sync_mode".into(), "1".into());
    }

    Ok(PreparedPayment {
        form_action: PAYMENT_FORM_URL,
        form_data: form,
        token,
    })
}

/// Save-card payment: base field-set plus `store_card=1` and, when the
/// customer already has a wallet, the existing `utoken`.
pub fn build_save_card_form(
    config: &MerchantConfig,
    request: &SaveCardPayment,
) -> Result<PreparedPayment> {
    let mut prepared = build_payment_form(config, &request.payment)?;
    prepared.form_data.insert("store_card".into(), "1".into());
    if let Some(utoken) = &request.utoken {
        prepared.form_data.insert("utoken".into(), utoken.clone());
    }
    Ok(prepared)
}

/// Stored-card payment: base field-set plus the user and card tokens.
/// The card-type hint does not apply to stored cards and is cleared before
/// building.
pub fn build_stored_card_form(
    config: &MerchantConfig,
    request: &StoredCardPayment,
) -> Result<PreparedPayment> {
    if request.utoken.is_empty() || request.ctoken.is_empty() {
        return Err(PayTrError::validation(
            "utoken and ctoken are required for stored-card payments",
        ));
    }

    let mut base = request.payment.clone();
    base.card_type = None;

    let mut prepared = build_payment_form(config, &base)?;
    prepared
        .form_data
        .insert("utoken".into(), request.utoken.clone());
    prepared
        .form_data
        .insert("ctoken".into(), request.ctoken.clone());
    if let Some(require_cvv) = request.require_cvv {
        prepared
            .form_data
            .insert("require_cvv".into(), encode_bool(require_cvv).into());
    }
    Ok(prepared)
}

/// Recurring charge: base field-set plus `recurring_payment=1` and the
/// stored tokens.
pub fn build_recurring_form(
    config: &MerchantConfig,
    request: &RecurringPayment,
) -> Result<PreparedPayment> {
    if request.utoken.is_empty() || request.ctoken.is_empty() {
        return Err(PayTrError::validation(
            "utoken and ctoken are required for recurring payments",
        ));
    }

    let mut prepared = build_payment_form(config, &request.payment)?;
    prepared
        .form_data
        .insert("recurring_payment".into(), "1".into());
    prepared
        .form_data
        .insert("utoken".into(), request.utoken.clone());
    prepared
        .form_data
        .insert("ctoken".into(), request.ctoken.clone());
    Ok(prepared)
}

/// Builds the signed refund field-set. The refund amount travels as a
/// 2-decimal string, unlike payment amounts which travel in minor units.
pub fn build_refund(
    config: &MerchantConfig,
    merchant_oid: &str,
    return_amount: Decimal,
    reference_no: Option<&str>,
) -> Result<(&'static str, FormFields)> {
    validate_merchant_oid(merchant_oid)?;
    if return_amount <= Decimal::ZERO {
        return Err(PayTrError::validation("refund amount must be positive"));
    }

    let amount = decimal_amount(return_amount);
    let data = canonical::refund(config, merchant_oid, &amount);
    let token = token::generate_token(&config.merchant_key, &data);

    let mut form = FormFields::new();
    form.insert("merchant_id".into(), config.merchant_id.clone());
    form.insert("merchant_oid".into(), merchant_oid.into());
    form.insert("return_amount".into(), amount);
    form.insert("paytr_token".into(), token);
    if let Some(reference_no) = reference_no {
        form.insert("reference_no".into(), reference_no.into());
    }

    Ok((REFUND_URL, form))
}

fn validate_payment(request: &PaymentRequest) -> Result<()> {
    validate_merchant_oid(&request.merchant_oid)?;
    validate_email(&request.email)?;
    if request.amount <= Decimal::ZERO {
        return Err(PayTrError::validation("payment amount must be positive"));
    }
    if request.basket.is_empty() {
        return Err(PayTrError::validation("basket must contain at least one item"));
    }
    if let Some(card) = &request.card {
        validate_card(card)?;
    }
    Ok(())
}

fn validate_merchant_oid(merchant_oid: &str) -> Result<()> {
    if merchant_oid.is_empty() {
        return Err(PayTrError::validation("merchant_oid must not be empty"));
    }
    // The gateway rejects oids with separators or special characters
    if !merchant_oid.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(PayTrError::validation(format!(
            "merchant_oid must be alphanumeric: {}",
            merchant_oid
        )));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    let valid = email.len() >= 5
        && email.contains('@')
        && !email.starts_with('@')
        && !email.ends_with('@');
    if !valid {
        return Err(PayTrError::validation(format!("malformed email: {}", email)));
    }
    Ok(())
}

fn validate_card(card: &CardInfo) -> Result<()> {
    let digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

    if card.cc_owner.trim().len() < 3 {
        return Err(PayTrError::validation("card holder name is too short"));
    }
    if !(13..=19).contains(&card.card_number.len()) || !digits(&card.card_number) {
        return Err(PayTrError::validation(
            "card number must be 13-19 digits",
        ));
    }
    let month_ok = card.expiry_month.len() == 2
        && digits(&card.expiry_month)
        && matches!(card.expiry_month.parse::<u8>(), Ok(1..=12));
    if !month_ok {
        return Err(PayTrError::validation("expiry month must be 01-12"));
    }
    if card.expiry_year.len() != 2 || !digits(&card.expiry_year) {
        return Err(PayTrError::validation("expiry year must be two digits"));
    }
    if !(3..=4).contains(&card.cvv.len()) || !digits(&card.cvv) {
        return Err(PayTrError::validation("cvv must be 3 or 4 digits"));
    }
    Ok(())
}
