//! Gateway endpoints and protocol defaults
//!
//! All endpoints are fixed by the gateway; none of them are configurable.

/// Hosted payment form submission (also the Direct API endpoint)
pub const PAYMENT_FORM_URL: &str = "https://www.paytr.com/odeme";

/// BIN lookup
pub const BIN_QUERY_URL: &str = "https://www.paytr.com/odeme/api/bin-detail";

/// Refunds
pub const REFUND_URL: &str = "https://www.paytr.com/odeme/iade";

/// Transaction log report
pub const TRANSACTION_LOG_URL: &str = "https://www.paytr.com/rapor/islem-dokumu";

/// Stored card listing
pub const CARD_LIST_URL: &str = "https://www.paytr.com/odeme/capi/list";

/// Stored card deletion
pub const CARD_DELETE_URL: &str = "https://www.paytr.com/odeme/capi/delete";

/// Order status lookup
pub const ORDER_STATUS_URL: &str = "https://www.paytr.com/odeme/durum-sorgu";

/// Installment rate listing
pub const INSTALLMENT_RATES_URL: &str = "https://www.paytr.com/odeme/taksit-oranlari";

// Marketplace endpoints. The transfer operations themselves are out of scope
// for this client; the URLs and the transfer error-code table are published
// for integrations that post to them directly.
pub const PLATFORM_TRANSFER_URL: &str = "https://www.paytr.com/odeme/platform/transfer";
pub const RETURNED_PAYMENTS_URL: &str = "https://www.paytr.com/odeme/geri-donen-transfer";
pub const SEND_FROM_ACCOUNT_URL: &str = "https://www.paytr.com/odeme/hesaptan-gonder";

// Settlement report endpoints, same status as the marketplace set.
pub const PAYMENT_SUMMARY_URL: &str = "https://www.paytr.com/rapor/odeme-dokumu";
pub const PAYMENT_DETAIL_URL: &str = "https://www.paytr.com/rapor/odeme-detayi";

/// The only payment type the form protocol accepts
pub const DEFAULT_PAYMENT_TYPE: &str = "card";

/// Default installment count (0 = single payment)
pub const DEFAULT_INSTALLMENT_COUNT: u32 = 0;

/// Transaction log queries may span at most this many days
pub const TRANSACTION_LOG_MAX_DAYS: i64 = 3;
