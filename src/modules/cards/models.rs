//! Response models for the card services

use serde::Deserialize;

/// Result of a BIN detail lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BinQueryResult {
    Success {
        /// Card family (Bonus, Maximum, ...)
        card_family: Option<String>,
        /// "credit" or "debit"
        card_type: Option<String>,
        /// Issuing bank
        issuer_name: Option<String>,
        bin: Option<String>,
        country: Option<String>,
    },
    Error {
        err_msg: Option<String>,
    },
}

/// A card stored under a user token.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredCard {
    pub ctoken: String,
    pub c_last_four: String,
    pub c_first_six: String,
    pub card_family: String,
    pub bank_name: String,
    /// "1" when payments with this card must resend the CVV
    pub require_cvv: String,
}

impl StoredCard {
    /// Whether a CVV must accompany payments made with this card.
    pub fn requires_cvv(&self) -> bool {
        self.require_cvv == "1"
    }
}

/// Result of listing stored cards.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CardListResult {
    Success {
        #[serde(default)]
        cards: Vec<StoredCard>,
    },
    Error {
        err_msg: Option<String>,
    },
}

/// Result of deleting a stored card.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeleteCardResult {
    Success {},
    Error { err_msg: Option<String> },
}
