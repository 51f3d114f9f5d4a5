//! Response models for the reporting services

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// One row of a transaction log.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    pub merchant_oid: String,
    pub status: String,
    pub amount: String,
    pub currency: String,
    pub date: String,
    /// "sale", "refund", ...
    #[serde(rename = "type")]
    pub kind: String,
}

/// Result of a transaction log query.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TransactionLogResult {
    Success {
        #[serde(default)]
        transactions: Vec<Transaction>,
    },
    Error {
        err_msg: Option<String>,
    },
}

/// Result of an order status query.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OrderStatusResult {
    Success {
        merchant_oid: Option<String>,
        /// "waiting", "success" or "failed"
        payment_status: Option<String>,
        payment_amount: Option<String>,
        currency: Option<String>,
        payment_type: Option<String>,
        test_mode: Option<String>,
    },
    Error {
        err_msg: Option<String>,
    },
}

/// Result of an installment rates query.
///
/// The gateway returns rates as a free-form object keyed by card family, so
/// the payload is carried as raw JSON values rather than a fixed schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InstallmentRatesResult {
    Success {
        #[serde(flatten)]
        rates: BTreeMap<String, Value>,
    },
    Error {
        err_msg: Option<String>,
    },
}
