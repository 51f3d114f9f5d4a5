//! Callback payload types

use serde::{Deserialize, Serialize};

/// A gateway payment notification, form-encoded onto the merchant's
/// callback URL. The caller deserializes the request body into this; the
/// client only reads it.
///
/// After processing, the HTTP handler must answer with the literal body
/// `"OK"` — anything else makes the gateway retry the notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackPayload {
    /// Merchant-assigned order id
    pub merchant_oid: String,
    /// `"success"` or `"failed"`
    pub status: String,
    /// Charged amount in minor units
    pub total_amount: String,
    /// Base64 HMAC-SHA256 over the callback canonical string
    pub hash: String,
    #[serde(default)]
    pub failed_reason_code: Option<String>,
    #[serde(default)]
    pub failed_reason_msg: Option<String>,
    #[serde(default)]
    pub test_mode: Option<String>,
    #[serde(default)]
    pub payment_type: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub payment_amount: Option<String>,
    /// User token, present when the payment stored a card
    #[serde(default)]
    pub utoken: Option<String>,
}

impl CallbackPayload {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
