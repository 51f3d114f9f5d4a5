//! Reporting services: transaction logs, order status, installment rates

pub mod models;

use chrono::NaiveDateTime;

use crate::config::MerchantConfig;
use crate::core::constants::TRANSACTION_LOG_MAX_DAYS;
use crate::core::format::format_datetime;
use crate::core::{PayTrError, Result};
use crate::modules::signing::{canonical, token};
use crate::transport::FormFields;

/// Builds the signed form for a transaction log query.
///
/// The gateway limits the queried window; ranges longer than
/// [`TRANSACTION_LOG_MAX_DAYS`] days or with `end_date` before `start_date`
/// are rejected before any request is made.
pub fn build_transaction_log(
    config: &MerchantConfig,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
) -> Result<FormFields> {
    if end_date < start_date {
        return Err(PayTrError::validation("end_date must not precede start_date"));
    }
    if (end_date - start_date).num_days() > TRANSACTION_LOG_MAX_DAYS {
        return Err(PayTrError::validation(format!(
            "date range cannot exceed {} days",
            TRANSACTION_LOG_MAX_DAYS
        )));
    }

    let start = format_datetime(start_date);
    let end = format_datetime(end_date);
    let canonical = canonical::transaction_log(config, &start, &end);
    let paytr_token = token::generate_token(&config.merchant_key, &canonical);

    let mut fields = FormFields::new();
    fields.insert("merchant_id".into(), config.merchant_id.clone());
    fields.insert("start_date".into(), start);
    fields.insert("end_date".into(), end);
    fields.insert("paytr_token".into(), paytr_token);
    Ok(fields)
}

/// Builds the signed form for an order status query.
pub fn build_order_status(config: &MerchantConfig, merchant_oid: &str) -> Result<FormFields> {
    if merchant_oid.is_empty() {
        return Err(PayTrError::validation("merchant_oid is required"));
    }

    let canonical = canonical::order_status(config, merchant_oid);
    let paytr_token = token::generate_token(&config.merchant_key, &canonical);

    let mut fields = FormFields::new();
    fields.insert("merchant_id".into(), config.merchant_id.clone());
    fields.insert("merchant_oid".into(), merchant_oid.to_owned());
    fields.insert("paytr_token".into(), paytr_token);
    Ok(fields)
}

/// Builds the signed form for an installment rates query.
///
/// `request_id` distinguishes repeated queries; the client generates a fresh
/// one per call.
pub fn build_installment_rates(config: &MerchantConfig, request_id: &str) -> Result<FormFields> {
    let canonical = canonical::installment_rates(config, request_id);
    let paytr_token = token::generate_token(&config.merchant_key, &canonical);

    let mut fields = FormFields::new();
    fields.insert("merchant_id".into(), config.merchant_id.clone());
    fields.insert("request_id".into(), request_id.to_owned());
    fields.insert("paytr_token".into(), paytr_token);
    Ok(fields)
}
