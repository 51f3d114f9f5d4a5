//! PayTR Payment Gateway Client
//!
//! This library builds signed requests toward the PayTR hosted payment
//! gateway and parses its responses into typed results. Every operation is
//! authenticated with an HMAC-SHA256 token computed over an operation-specific
//! canonical string; inbound payment notifications are verified with the same
//! scheme.
//!
//! ```no_run
//! use paytr::{MerchantConfig, PayTr, PaymentRequest, BasketItem, UserInfo, Currency};
//! use rust_decimal::Decimal;
//!
//! let config = MerchantConfig::new("123456", "merchant-key", "merchant-salt");
//! let client = PayTr::new(config);
//!
//! let request = PaymentRequest::new(
//!     "ORDER123",
//!     "customer@example.com",
//!     Decimal::new(10099, 2),
//!     Currency::Tl,
//!     vec![BasketItem::new("Item", Decimal::new(10099, 2), 1)],
//!     UserInfo::new("Jane Doe", "Some Street 1", "05551234567"),
//!     "https://shop.example/ok",
//!     "https://shop.example/fail",
//! );
//!
//! let prepared = client.prepare_payment(&request)?;
//! // Render `prepared.form_data` as hidden inputs posting to `prepared.form_action`.
//! # Ok::<(), paytr::PayTrError>(())
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod modules;
pub mod transport;

// Re-export commonly used types
pub use client::PayTr;
pub use config::{Language, MerchantConfig};
pub use core::currency::Currency;
pub use core::error::{PayTrError, Result};
pub use modules::callbacks::error_codes::{describe_error, ErrorCategory};
pub use modules::callbacks::models::CallbackPayload;
pub use modules::payments::classifier::DirectPaymentOutcome;
pub use modules::payments::models::{
    BasketItem, CardInfo, CardType, PaymentRequest, PreparedPayment, RecurringPayment,
    SaveCardPayment, StoredCardPayment, UserInfo,
};
pub use modules::signing::OperationKind;
pub use transport::{FormFields, HttpTransport, Transport};
