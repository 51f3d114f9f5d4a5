//! Direct API payment from the command line
//!
//! Sends a server-side test payment with card details and prints the
//! classified outcome. Requires the merchant account to be in test mode.

use paytr::{
    BasketItem, CardInfo, Currency, DirectPaymentOutcome, MerchantConfig, PayTr, PaymentRequest,
    UserInfo,
};
use rust_decimal::Decimal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let config = MerchantConfig::from_env()?.with_test_mode(true);
    let client = PayTr::new(config);

    let amount = Decimal::new(10099, 2);
    let mut request = PaymentRequest::new(
        format!("DEMO{}", chrono::Utc::now().timestamp()),
        "customer@example.com",
        amount,
        Currency::Tl,
        vec![BasketItem::new("Demo item", amount, 1)],
        UserInfo::new("Jane Doe", "Some Street 1", "05551234567"),
        "https://example.com/ok",
        "https://example.com/fail",
    );
    request.user_ip = Some("192.168.1.1".into());
    request.non_3d = true;
    request.sync_mode = true;
    request.card = Some(CardInfo {
        cc_owner: "PAYTR TEST".into(),
        card_number: "4355084355084358".into(),
        expiry_month: "12".into(),
        expiry_year: "30".into(),
        cvv: "000".into(),
    });

    match client.direct_payment(&request).await? {
        DirectPaymentOutcome::Success { .. } => info!("payment completed"),
        DirectPaymentOutcome::WaitCallback { .. } => {
            info!("payment pending, final result arrives on the callback URL")
        }
        DirectPaymentOutcome::Redirect { html } => {
            info!(bytes = html.len(), "3-D Secure page returned, render it to the customer")
        }
        DirectPaymentOutcome::Error { message, code, .. } => {
            info!(?code, message, "payment rejected")
        }
    }

    Ok(())
}
