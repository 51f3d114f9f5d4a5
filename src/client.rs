//! The `PayTr` client facade
//!
//! Form-based operations (the payment family) are pure: they produce a
//! signed field-set for the caller to render, with no network involved.
//! Query operations post their signed field-set through the configured
//! [`Transport`] and parse the JSON response.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::MerchantConfig;
use crate::core::format::request_id;
use crate::core::{PayTrError, Result};
use crate::modules::callbacks::models::CallbackPayload;
use crate::modules::callbacks::verifier;
use crate::modules::cards;
use crate::modules::cards::models::{BinQueryResult, CardListResult, DeleteCardResult};
use crate::modules::payments::builder;
use crate::modules::payments::classifier::{classify_payment_response, DirectPaymentOutcome};
use crate::modules::payments::models::{
    PaymentRequest, PreparedPayment, RecurringPayment, RefundResult, SaveCardPayment,
    StoredCardPayment,
};
use crate::modules::reports;
use crate::modules::reports::models::{
    InstallmentRatesResult, OrderStatusResult, TransactionLogResult,
};
use crate::modules::signing::OperationKind;
use crate::transport::{FormFields, HttpTransport, Transport};

/// Client for the PayTR payment gateway.
pub struct PayTr {
    config: MerchantConfig,
    transport: Arc<dyn Transport>,
}

impl PayTr {
    /// Creates a client with the default HTTP transport.
    pub fn new(config: MerchantConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    /// Creates a client with a caller-supplied transport.
    pub fn with_transport(config: MerchantConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &MerchantConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Payment family (form preparation, no network)
    // ------------------------------------------------------------------

    /// Prepares the signed form for a hosted payment.
    pub fn prepare_payment(&self, request: &PaymentRequest) -> Result<PreparedPayment> {
        let prepared = builder::build_payment_form(&self.config, request)?;
        debug!(merchant_oid = %request.merchant_oid, "prepared payment form");
        Ok(prepared)
    }

    /// Prepares a payment that also stores the card.
    pub fn prepare_save_card_payment(&self, request: &SaveCardPayment) -> Result<PreparedPayment> {
        let prepared = builder::build_save_card_form(&self.config, request)?;
        debug!(
            merchant_oid = %request.payment.merchant_oid,
            "prepared save-card payment form"
        );
        Ok(prepared)
    }

    /// Prepares a payment with a previously stored card.
    pub fn prepare_stored_card_payment(
        &self,
        request: &StoredCardPayment,
    ) -> Result<PreparedPayment> {
        let prepared = builder::build_stored_card_form(&self.config, request)?;
        debug!(
            merchant_oid = %request.payment.merchant_oid,
            "prepared stored-card payment form"
        );
        Ok(prepared)
    }

    /// Prepares a recurring charge against a stored card.
    pub fn prepare_recurring_payment(
        &self,
        request: &RecurringPayment,
    ) -> Result<PreparedPayment> {
        let prepared = builder::build_recurring_form(&self.config, request)?;
        debug!(
            merchant_oid = %request.payment.merchant_oid,
            "prepared recurring payment form"
        );
        Ok(prepared)
    }

    /// Submits a Direct API payment with card details and classifies the
    /// response. `request.card` must be set.
    pub async fn direct_payment(&self, request: &PaymentRequest) -> Result<DirectPaymentOutcome> {
        if request.card.is_none() {
            return Err(PayTrError::validation(
                "card details are required for direct payments",
            ));
        }

        let prepared = builder::build_payment_form(&self.config, request)?;
        let body = self
            .transport
            .send_form(prepared.form_action, &prepared.form_data)
            .await?;
        let outcome = classify_payment_response(&body);
        info!(
            merchant_oid = %request.merchant_oid,
            outcome = outcome.kind_name(),
            "direct payment submitted"
        );
        Ok(outcome)
    }

    // ------------------------------------------------------------------
    // Callback verification (inbound, no network)
    // ------------------------------------------------------------------

    /// Verifies the HMAC signature of a payment notification.
    pub fn verify_callback(&self, callback: &CallbackPayload) -> bool {
        verifier::verify_callback(&self.config, callback)
    }

    /// Verifies a notification given as raw form fields.
    pub fn verify_callback_fields(&self, fields: &FormFields) -> bool {
        verifier::verify_callback_fields(&self.config, fields)
    }

    // ------------------------------------------------------------------
    // Query operations
    // ------------------------------------------------------------------

    /// Looks up card details by BIN (first 6-8 digits).
    pub async fn query_bin(&self, bin_number: &str) -> Result<BinQueryResult> {
        let fields = cards::build_bin_query(&self.config, bin_number)?;
        self.post_json(OperationKind::BinQuery, &fields).await
    }

    /// Requests a full or partial refund for an order.
    pub async fn refund(
        &self,
        merchant_oid: &str,
        return_amount: Decimal,
        reference_no: Option<&str>,
    ) -> Result<RefundResult> {
        let (url, fields) =
            builder::build_refund(&self.config, merchant_oid, return_amount, reference_no)?;
        let body = self.transport.send_form(url, &fields).await?;
        info!(merchant_oid, "refund requested");
        parse_response(&body)
    }

    /// Fetches the transaction log for a date range (at most a few days,
    /// per the gateway's limit).
    pub async fn transactions(
        &self,
        start_date: chrono::NaiveDateTime,
        end_date: chrono::NaiveDateTime,
    ) -> Result<TransactionLogResult> {
        let fields = reports::build_transaction_log(&self.config, start_date, end_date)?;
        self.post_json(OperationKind::TransactionLog, &fields).await
    }

    /// Lists the cards stored under a user token.
    pub async fn list_cards(&self, utoken: &str) -> Result<CardListResult> {
        let fields = cards::build_card_list(&self.config, utoken)?;
        self.post_json(OperationKind::ListCards, &fields).await
    }

    /// Deletes a single stored card.
    pub async fn delete_card(&self, utoken: &str, ctoken: &str) -> Result<DeleteCardResult> {
        let fields = cards::build_card_delete(&self.config, utoken, ctoken)?;
        self.post_json(OperationKind::DeleteCard, &fields).await
    }

    /// Queries the payment status of an order.
    pub async fn order_status(&self, merchant_oid: &str) -> Result<OrderStatusResult> {
        let fields = reports::build_order_status(&self.config, merchant_oid)?;
        self.post_json(OperationKind::OrderStatus, &fields).await
    }

    /// Fetches the merchant's installment rate tables.
    pub async fn installment_rates(&self) -> Result<InstallmentRatesResult> {
        let request_id = request_id();
        let fields = reports::build_installment_rates(&self.config, &request_id)?;
        self.post_json(OperationKind::InstallmentRates, &fields)
            .await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        kind: OperationKind,
        fields: &FormFields,
    ) -> Result<T> {
        let url = kind
            .endpoint()
            .ok_or_else(|| PayTrError::configuration("operation has no outbound endpoint"))?;
        debug!(operation = ?kind, url, "sending gateway request");
        let body = self.transport.send_form(url, fields).await?;
        parse_response(&body)
    }
}

fn parse_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| PayTrError::parse(e.to_string(), body))
}

impl DirectPaymentOutcome {
    fn kind_name(&self) -> &'static str {
        match self {
            DirectPaymentOutcome::Success { .. } => "success",
            DirectPaymentOutcome::WaitCallback { .. } => "wait_callback",
            DirectPaymentOutcome::Redirect { .. } => "redirect",
            DirectPaymentOutcome::Error { .. } => "error",
        }
    }
}
