//! Payment request and response data structures

use crate::core::currency::Currency;
use crate::core::format::decimal_amount;
use crate::transport::FormFields;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One basket line: name, unit price, quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasketItem {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl BasketItem {
    pub fn new(name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// Serializes the basket to the exact wire shape the gateway parses: a JSON
/// array of `[name, "price with 2 decimals", quantity]` triples, e.g.
/// `[["Item","10.50",2]]`. The gateway reads this structurally, so the shape
/// must match, not just the hash.
pub fn format_basket(items: &[BasketItem]) -> String {
    let rows: Vec<Value> = items
        .iter()
        .map(|item| json!([item.name, decimal_amount(item.price), item.quantity]))
        .collect();
    Value::Array(rows).to_string()
}

/// Customer details shown on the payment page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl UserInfo {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }
}

/// Raw card details for Direct API payments. Handling these server-side
/// requires PCI-DSS compliance on the merchant's part.
#[derive(Clone, Serialize, Deserialize)]
pub struct CardInfo {
    pub cc_owner: String,
    pub card_number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
}

impl std::fmt::Debug for CardInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardInfo")
            .field("cc_owner", &self.cc_owner)
            .field("card_number", &"***")
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("cvv", &"***")
            .finish()
    }
}

/// Bank card brands the form accepts as an installment hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Advantage,
    Axess,
    Combo,
    Bonus,
    Cardfinans,
    Maximum,
    Paraf,
    World,
}

impl CardType {
    pub fn code(&self) -> &'static str {
        match self {
            CardType::Advantage => "advantage",
            CardType::Axess => "axess",
            CardType::Combo => "combo",
            CardType::Bonus => "bonus",
            CardType::Cardfinans => "cardfinans",
            CardType::Maximum => "maximum",
            CardType::Paraf => "paraf",
            CardType::World => "world",
        }
    }
}

/// Parameters for the base payment operation
///
/// One struct drives the whole payment family; the save-card, stored-card
/// and recurring wrappers carry their extra tokens alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Merchant-assigned unique order id; must be alphanumeric
    pub merchant_oid: String,
    pub email: String,
    /// Major-unit amount, converted to minor units exactly once at signing
    pub amount: Decimal,
    pub currency: Currency,
    pub basket: Vec<BasketItem>,
    pub user: UserInfo,
    /// Redirect target after successful payment
    pub ok_url: String,
    /// Redirect target after failed payment
    pub fail_url: String,
    /// Customer IP; canonicalizes to the empty string when unknown
    pub user_ip: Option<String>,
    /// 0 = single payment
    pub installment_count: u32,
    pub non_3d: bool,
    pub card_type: Option<CardType>,
    /// Test-mode switch forcing the non-3D failure scenario
    pub non3d_test_failed: bool,
    /// Ask the gateway for a JSON response instead of a redirect
    /// (requires non-3D authorization on the merchant account)
    pub sync_mode: bool,
    /// Card details for Direct API payments
    pub card: Option<CardInfo>,
}

impl PaymentRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        merchant_oid: impl Into<String>,
        email: impl Into<String>,
        amount: Decimal,
        currency: Currency,
        basket: Vec<BasketItem>,
        user: UserInfo,
        ok_url: impl Into<String>,
        fail_url: impl Into<String>,
    ) -> Self {
        Self {
            merchant_oid: merchant_oid.into(),
            email: email.into(),
            amount,
            currency,
            basket,
            user,
            ok_url: ok_url.into(),
            fail_url: fail_url.into(),
            user_ip: None,
            installment_count: crate::core::constants::DEFAULT_INSTALLMENT_COUNT,
            non_3d: false,
            card_type: None,
            non3d_test_failed: false,
            sync_mode: false,
            card: None,
        }
    }
}

/// Save-card payment: the base payment plus card storage
#[derive(Debug, Clone)]
pub struct SaveCardPayment {
    pub payment: PaymentRequest,
    /// Existing user token, when the customer already has stored cards
    pub utoken: Option<String>,
}

/// Payment with a previously stored card
#[derive(Debug, Clone)]
pub struct StoredCardPayment {
    pub payment: PaymentRequest,
    pub utoken: String,
    pub ctoken: String,
    /// Whether the gateway should prompt for CVV (as reported by the card list)
    pub require_cvv: Option<bool>,
}

/// Recurring charge against a stored card
#[derive(Debug, Clone)]
pub struct RecurringPayment {
    pub payment: PaymentRequest,
    pub utoken: String,
    pub ctoken: String,
}

/// A fully built, signed form ready for submission
#[derive(Debug, Clone)]
pub struct PreparedPayment {
    /// URL the form posts to
    pub form_action: &'static str,
    /// Complete field-set including `paytr_token`
    pub form_data: FormFields,
    /// The computed token, also present in `form_data`
    pub token: String,
}

/// Refund response
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RefundResult {
    Success {
        #[serde(default)]
        merchant_oid: Option<String>,
        #[serde(default)]
        return_amount: Option<String>,
        #[serde(default)]
        is_test: Option<i64>,
    },
    Error {
        #[serde(default)]
        err_no: Option<String>,
        #[serde(default)]
        err_msg: Option<String>,
    },
}
