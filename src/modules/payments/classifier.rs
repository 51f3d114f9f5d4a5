//! Direct payment response classification
//!
//! The gateway gives no content-type guarantee on the payment form
//! endpoint: the body may be a 3-D Secure interstitial (HTML) or a sync-mode
//! JSON object. Classification is therefore heuristic and the order of the
//! checks matters: HTML markers first, then a JSON parse attempt with
//! parse failure treated as HTML, then the JSON status field.

use serde_json::Value;

/// Outcome of a direct (server-side) payment submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectPaymentOutcome {
    /// Payment completed (sync mode, non-3D)
    Success { raw: String },
    /// The gateway is still checking; the final result arrives via callback
    WaitCallback { raw: String },
    /// 3-D Secure interstitial; render this HTML to the customer
    Redirect { html: String },
    /// The gateway rejected the payment
    Error {
        message: String,
        /// Gateway error code (`err_no`) when supplied
        code: Option<String>,
        raw: String,
    },
}

/// Classifies a raw payment form response body.
pub fn classify_payment_response(body: &str) -> DirectPaymentOutcome {
    if body.contains("<html") || body.contains("<form") {
        return DirectPaymentOutcome::Redirect {
            html: body.to_string(),
        };
    }

    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        // Not JSON either; some interstitials carry neither marker
        Err(_) => {
            return DirectPaymentOutcome::Redirect {
                html: body.to_string(),
            }
        }
    };

    match parsed.get("status").and_then(Value::as_str) {
        Some("success") => DirectPaymentOutcome::Success {
            raw: body.to_string(),
        },
        Some("wait_callback") => DirectPaymentOutcome::WaitCallback {
            raw: body.to_string(),
        },
        _ => {
            let message = parsed
                .get("err_msg")
                .and_then(Value::as_str)
                .or_else(|| parsed.get("reason").and_then(Value::as_str))
                .unwrap_or("Payment failed")
                .to_string();
            let code = parsed
                .get("err_no")
                .filter(|v| !v.is_null())
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                });
            DirectPaymentOutcome::Error {
                message,
                code,
                raw: body.to_string(),
            }
        }
    }
}
