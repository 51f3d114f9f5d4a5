//! Request signing: canonical strings and HMAC tokens

pub mod canonical;
pub mod token;

use crate::core::constants;

/// The closed set of gateway operations
///
/// Each kind has a fixed canonical field order (see [`canonical`]) and a
/// fixed endpoint. These are protocol constants, not configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    PreparePayment,
    SaveCardPayment,
    StoredCardPayment,
    RecurringPayment,
    VerifyCallback,
    BinQuery,
    Refund,
    TransactionLog,
    ListCards,
    DeleteCard,
    OrderStatus,
    InstallmentRates,
    DirectPayment,
}

impl OperationKind {
    /// The endpoint this operation posts to. `VerifyCallback` is inbound
    /// and has none.
    pub fn endpoint(self) -> Option<&'static str> {
        match self {
            OperationKind::PreparePayment
            | OperationKind::SaveCardPayment
            | OperationKind::StoredCardPayment
            | OperationKind::RecurringPayment
            | OperationKind::DirectPayment => Some(constants::PAYMENT_FORM_URL),
            OperationKind::VerifyCallback => None,
            OperationKind::BinQuery => Some(constants::BIN_QUERY_URL),
            OperationKind::Refund => Some(constants::REFUND_URL),
            OperationKind::TransactionLog => Some(constants::TRANSACTION_LOG_URL),
            OperationKind::ListCards => Some(constants::CARD_LIST_URL),
            OperationKind::DeleteCard => Some(constants::CARD_DELETE_URL),
            OperationKind::OrderStatus => Some(constants::ORDER_STATUS_URL),
            OperationKind::InstallmentRates => Some(constants::INSTALLMENT_RATES_URL),
        }
    }
}
