//! Protocol stringification rules
//!
//! The gateway hashes over raw concatenated field values, so every value must
//! be rendered exactly one way. These helpers are the single source of those
//! renderings; builders and canonical strings both go through them.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

/// Converts a major-unit amount to the integer minor-unit string the signed
/// amount fields require. `100.99` becomes `"10099"`, `0.1` becomes `"10"`.
///
/// Rounding is half-away-from-zero on the exact decimal value, so
/// `100.005` rounds to `"10001"`; there are no binary float artifacts.
pub fn minor_units(amount: Decimal) -> String {
    (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

/// Renders an amount with exactly two decimal places, e.g. `10.5` -> `"10.50"`.
/// Used for basket item prices and refund amounts.
pub fn decimal_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Boolean form encoding: `"1"` or `"0"`, never `"true"`/`"false"`.
pub fn encode_bool(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Renders a date as `YYYY-MM-DD HH:mm:ss` for transaction log ranges.
pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Builds a unique, timestamp-derived request id for the installment rate
/// query (the one operation whose canonical string includes a caller-chosen
/// nonce).
pub fn request_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}{}", millis, &suffix[..7])
}
