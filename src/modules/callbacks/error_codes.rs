//! Gateway error-code tables
//!
//! Four fixed mappings from gateway codes to human-readable descriptions.
//! The tables are static data published by the gateway; they are never
//! computed or mutated at runtime.

/// Which table a code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// `failed_reason_code` values on payment callbacks
    Callback,
    /// Marketplace transfer API codes
    Transfer,
    /// Refund API codes
    Refund,
    /// Order status API codes
    OrderStatus,
}

/// Looks up the description for a gateway error code, falling back to
/// `"Unknown error code: <code>"`.
pub fn describe_error(code: &str, category: ErrorCategory) -> String {
    let description = match category {
        ErrorCategory::Callback => callback_description(code),
        ErrorCategory::Transfer => transfer_description(code),
        ErrorCategory::Refund => refund_description(code),
        ErrorCategory::OrderStatus => order_status_description(code),
    };
    description
        .map(str::to_owned)
        .unwrap_or_else(|| format!("Unknown error code: {}", code))
}

fn callback_description(code: &str) -> Option<&'static str> {
    Some(match code {
        "0" => "Variable error - read the failure message (e.g. insufficient card limit)",
        "1" => "3-D authentication was not completed; ask the customer to retry",
        "2" => "3-D authentication failed; ask the customer to retry with the correct password",
        "3" => "Security review withheld approval or could not be completed",
        "6" => "The customer left the payment page without paying",
        "8" => "Installments are not available for this card",
        "9" => "This card is not authorized for the transaction",
        "10" => "3-D Secure is required for this transaction",
        "11" => "Fraud warning; review the customer before fulfilling the order",
        "99" => "Transaction failed: technical integration error",
        _ => return None,
    })
}

fn transfer_description(code: &str) -> Option<&'static str> {
    Some(match code {
        "001" => "Invalid request or the merchant account is not active",
        "002" => "Not authorized for this service (not a marketplace account)",
        "003" => "Invalid trans_id",
        "004" => "paytr_token missing or invalid",
        "005" => "Invalid merchant_oid",
        "006" => "No successful payment found for merchant_oid",
        "007" => "merchant_oid found but the payment has not been notified yet",
        "008" => "Transfers cannot be made before the value date",
        "009" => "trans_id must be unique; this trans_id was used before",
        "010" => "Total transfer amount cannot exceed the remaining amount",
        "012" => "Platform commission cannot be negative",
        "091" => "transfer_iban failed IBAN validation",
        "092" => "transfer_iban must start with TR, contain no spaces or dashes, and be 26 characters",
        "095" => "submerchant_amount cannot be negative",
        "096" => "trans_id must be alphanumeric without special characters",
        "097" => "transfer_iban is required",
        "098" => "transfer_name is required",
        "099" => "total_amount must be numeric and greater than zero",
        "100" => "transfer_name must contain a space between first and last name",
        "101" => "First and last name in transfer_name must each be at least 2 characters",
        "201" => "paytr_token missing or invalid",
        "202" => "trans_id must be alphanumeric without special characters",
        "203" => "trans_id must be unique; this trans_id was used before",
        "204" => "trans_info is longer than allowed; retry with fewer records",
        "205" => "trans_info must contain between 2 and 2000 transactions",
        "206" => "trans_info is not a valid JSON string",
        "301" => "paytr_token missing or invalid",
        "302" => "trans_id must be alphanumeric without special characters",
        "303" => "trans_id must be unique; this trans_id was used before",
        "305" => "merchant_oids must contain between the minimum and maximum number of transactions",
        "306" => "merchant_oids is not a valid JSON string",
        "BLK" => "The transaction is blocked; contact the gateway for details",
        _ => return None,
    })
}

fn refund_description(code: &str) -> Option<&'static str> {
    Some(match code {
        "000" => "Refund temporarily unavailable, try again later (service lock)",
        "001" => "Invalid request or the merchant account is not active",
        "002" => "Invalid merchant_oid",
        "003" => "Invalid return_amount",
        "004" => "paytr_token missing or invalid",
        "005" => "No successful payment found for merchant_oid",
        "007" => "merchant_oid found but the payment has not been notified yet",
        "008" => "Refunds are not supported for this payment type",
        "009" => "Total refund amount cannot exceed the payment amount",
        "010" => "Insufficient net balance",
        "011" => "Payments older than one year cannot be refunded",
        _ => return None,
    })
}

fn order_status_description(code: &str) -> Option<&'static str> {
    Some(match code {
        "001" => "Invalid request or the merchant account is not active",
        "002" => "Invalid merchant_oid",
        "003" => "paytr_token missing or invalid",
        "004" => "No transaction found for merchant_oid",
        _ => return None,
    })
}
