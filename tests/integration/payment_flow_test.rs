//! End-to-end payment form preparation and direct payment classification

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use helpers::{test_config, MockTransport};
use paytr::modules::signing::token::generate_token;
use paytr::{
    BasketItem, CardInfo, Currency, DirectPaymentOutcome, PayTr, PaymentRequest, RecurringPayment,
    SaveCardPayment, StoredCardPayment, UserInfo,
};
use rust_decimal_macros::dec;

fn sample_request() -> PaymentRequest {
    let mut request = PaymentRequest::new(
        "ORDER123",
        "customer@example.com",
        dec!(100.99),
        Currency::Tl,
        vec![
            BasketItem::new("First item", dec!(50.99), 1),
            BasketItem::new("Second item", dec!(25.00), 2),
        ],
        UserInfo::new("Jane Doe", "Some Street 1", "05551234567"),
        "https://shop.example/ok",
        "https://shop.example/fail",
    );
    request.user_ip = Some("192.168.1.1".into());
    request
}

#[test]
fn prepared_form_carries_the_complete_field_set() {
    let client = PayTr::new(test_config());
    let prepared = client.prepare_payment(&sample_request()).unwrap();

    assert_eq!(prepared.form_action, "https://www.paytr.com/odeme");
    let form = &prepared.form_data;
    assert_eq!(form["merchant_id"], "123456");
    assert_eq!(form["merchant_oid"], "ORDER123");
    assert_eq!(form["payment_amount"], "10099");
    assert_eq!(form["payment_type"], "card");
    assert_eq!(form["currency"], "TL");
    assert_eq!(form["test_mode"], "1");
    assert_eq!(form["non_3d"], "0");
    assert_eq!(form["installment_count"], "0");
    assert_eq!(
        form["user_basket"],
        r#"[["First item","50.99",1],["Second item","25.00",2]]"#
    );
    assert_eq!(form["merchant_ok_url"], "https://shop.example/ok");
    assert_eq!(form["paytr_token"], prepared.token);
}

#[test]
fn the_token_covers_exactly_the_canonical_payment_fields() {
    let config = test_config();
    let client = PayTr::new(config.clone());
    let prepared = client.prepare_payment(&sample_request()).unwrap();

    // merchant_id + user_ip + merchant_oid + email + amount + payment_type
    // + installment_count + currency + test_mode + non_3d + salt
    let canonical = format!(
        "{}192.168.1.1ORDER123customer@example.com10099card0TL10{}",
        config.merchant_id, config.merchant_salt
    );
    assert_eq!(
        prepared.token,
        generate_token(&config.merchant_key, &canonical)
    );
}

#[test]
fn save_card_adds_fields_without_changing_the_token() {
    let client = PayTr::new(test_config());
    let base = client.prepare_payment(&sample_request()).unwrap();

    let save = SaveCardPayment {
        payment: sample_request(),
        utoken: Some("UTOK".into()),
    };
    let prepared = client.prepare_save_card_payment(&save).unwrap();

    assert_eq!(prepared.token, base.token);
    assert_eq!(prepared.form_data["store_card"], "1");
    assert_eq!(prepared.form_data["utoken"], "UTOK");
}

#[test]
fn stored_card_clears_the_card_type_hint() {
    let client = PayTr::new(test_config());

    let mut payment = sample_request();
    payment.card_type = Some(paytr::CardType::Bonus);
    let stored = StoredCardPayment {
        payment,
        utoken: "UTOK".into(),
        ctoken: "CTOK".into(),
        require_cvv: Some(true),
    };
    let prepared = client.prepare_stored_card_payment(&stored).unwrap();

    assert_eq!(prepared.form_data["card_type"], "");
    assert_eq!(prepared.form_data["utoken"], "UTOK");
    assert_eq!(prepared.form_data["ctoken"], "CTOK");
    assert_eq!(prepared.form_data["require_cvv"], "1");
}

#[test]
fn recurring_payment_sets_the_recurring_flag() {
    let client = PayTr::new(test_config());
    let recurring = RecurringPayment {
        payment: sample_request(),
        utoken: "UTOK".into(),
        ctoken: "CTOK".into(),
    };
    let prepared = client.prepare_recurring_payment(&recurring).unwrap();
    assert_eq!(prepared.form_data["recurring_payment"], "1");
}

#[test]
fn invalid_merchant_oid_is_rejected() {
    let client = PayTr::new(test_config());
    let mut request = sample_request();
    request.merchant_oid = "ORDER-123".into();
    assert!(client.prepare_payment(&request).is_err());
}

fn direct_request() -> PaymentRequest {
    let mut request = sample_request();
    request.non_3d = true;
    request.sync_mode = true;
    request.card = Some(CardInfo {
        cc_owner: "PAYTR TEST".into(),
        card_number: "4355084355084358".into(),
        expiry_month: "12".into(),
        expiry_year: "30".into(),
        cvv: "000".into(),
    });
    request
}

#[tokio::test]
async fn direct_payment_sends_card_fields_and_classifies_success() {
    let transport = Arc::new(MockTransport::new(vec![r#"{"status":"success"}"#]));
    let client = PayTr::with_transport(test_config(), transport.clone());

    let outcome = client.direct_payment(&direct_request()).await.unwrap();
    assert!(matches!(outcome, DirectPaymentOutcome::Success { .. }));

    let (url, fields) = &transport.requests()[0];
    assert_eq!(url, "https://www.paytr.com/odeme");
    assert_eq!(fields["card_number"], "4355084355084358");
    assert_eq!(fields["sync_mode"], "1");
}

#[tokio::test]
async fn html_body_classifies_as_redirect() {
    let transport = Arc::new(MockTransport::new(vec![
        "<html><body><form action=\"https://bank.example/3ds\"></form></body></html>",
    ]));
    let client = PayTr::with_transport(test_config(), transport);

    let outcome = client.direct_payment(&direct_request()).await.unwrap();
    match outcome {
        DirectPaymentOutcome::Redirect { html } => assert!(html.contains("3ds")),
        other => panic!("expected redirect, got {:?}", other),
    }
}

#[tokio::test]
async fn gateway_rejection_surfaces_message_and_code() {
    let transport = Arc::new(MockTransport::new(vec![
        r#"{"status":"failed","err_msg":"insufficient funds","err_no":"0"}"#,
    ]));
    let client = PayTr::with_transport(test_config(), transport);

    match client.direct_payment(&direct_request()).await.unwrap() {
        DirectPaymentOutcome::Error { message, code, .. } => {
            assert_eq!(message, "insufficient funds");
            assert_eq!(code.as_deref(), Some("0"));
        }
        other => panic!("expected error, got {:?}", other),
    }
}

#[tokio::test]
async fn wait_callback_is_not_a_success() {
    let transport = Arc::new(MockTransport::new(vec![
        r#"{"status":"wait_callback","merchant_oid":"ORDER123"}"#,
    ]));
    let client = PayTr::with_transport(test_config(), transport);

    let outcome = client.direct_payment(&direct_request()).await.unwrap();
    assert!(matches!(outcome, DirectPaymentOutcome::WaitCallback { .. }));
}
