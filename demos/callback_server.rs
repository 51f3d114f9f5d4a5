//! Payment notification endpoint
//!
//! Run with `cargo run --example callback_server` after setting
//! `PAYTR_MERCHANT_ID`, `PAYTR_MERCHANT_KEY` and `PAYTR_MERCHANT_SALT`.
//! Point the merchant panel's notification URL at `/paytr/callback`.

use actix_web::{web, App, HttpResponse, HttpServer};
use paytr::{describe_error, CallbackPayload, ErrorCategory, MerchantConfig, PayTr};
use tracing::{info, warn};

async fn handle_callback(
    client: web::Data<PayTr>,
    form: web::Form<CallbackPayload>,
) -> HttpResponse {
    let callback = form.into_inner();

    if !client.verify_callback(&callback) {
        warn!(merchant_oid = %callback.merchant_oid, "callback hash mismatch");
        return HttpResponse::BadRequest().body("INVALID_HASH");
    }

    if callback.is_success() {
        info!(
            merchant_oid = %callback.merchant_oid,
            total_amount = %callback.total_amount,
            "payment confirmed"
        );
        // Mark the order paid here. The handler must stay idempotent:
        // the gateway retries until it sees "OK".
    } else {
        let reason = callback
            .failed_reason_code
            .as_deref()
            .map(|code| describe_error(code, ErrorCategory::Callback))
            .unwrap_or_else(|| "no reason given".to_owned());
        info!(merchant_oid = %callback.merchant_oid, reason, "payment failed");
    }

    HttpResponse::Ok().body("OK")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = MerchantConfig::from_env().expect("merchant credentials not configured");
    let client = web::Data::new(PayTr::new(config));

    info!("listening on 127.0.0.1:8080");
    HttpServer::new(move || {
        App::new()
            .app_data(client.clone())
            .route("/paytr/callback", web::post().to(handle_callback))
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
