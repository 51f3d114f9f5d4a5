//! Query operations through the client with a mock transport

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use chrono::NaiveDate;
use helpers::{test_config, MockTransport};
use paytr::modules::cards::models::{BinQueryResult, CardListResult, DeleteCardResult};
use paytr::modules::payments::models::RefundResult;
use paytr::modules::reports::models::{
    InstallmentRatesResult, OrderStatusResult, TransactionLogResult,
};
use paytr::{PayTr, PayTrError};
use rust_decimal_macros::dec;

fn client_with(responses: Vec<&str>) -> (PayTr, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::new(responses));
    let client = PayTr::with_transport(test_config(), transport.clone());
    (client, transport)
}

#[tokio::test]
async fn bin_query_posts_signed_form_to_bin_endpoint() {
    let (client, transport) = client_with(vec![
        r#"{"status":"success","card_family":"Bonus","card_type":"credit","issuer_name":"Garanti","bin":"545616","country":"TR"}"#,
    ]);

    let result = client.query_bin("545616").await.unwrap();
    assert!(matches!(result, BinQueryResult::Success { .. }));

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let (url, fields) = &requests[0];
    assert_eq!(url, "https://www.paytr.com/odeme/api/bin-detail");
    assert_eq!(fields["bin_number"], "545616");
    assert_eq!(fields["merchant_id"], "123456");
    assert!(fields.contains_key("paytr_token"));
}

#[tokio::test]
async fn refund_posts_two_decimal_amount() {
    let (client, transport) = client_with(vec![
        r#"{"status":"success","is_test":1,"merchant_oid":"OID1","return_amount":"50.00"}"#,
    ]);

    let result = client.refund("OID1", dec!(50), None).await.unwrap();
    match result {
        RefundResult::Success { return_amount, .. } => {
            assert_eq!(return_amount.as_deref(), Some("50.00"));
        }
        other => panic!("expected success, got {:?}", other),
    }

    let (url, fields) = &transport.requests()[0];
    assert_eq!(url, "https://www.paytr.com/odeme/iade");
    assert_eq!(fields["return_amount"], "50.00");
    assert_eq!(fields["merchant_oid"], "OID1");
}

#[tokio::test]
async fn refund_error_carries_the_gateway_code() {
    let (client, _) = client_with(vec![
        r#"{"status":"error","err_no":"009","err_msg":"amount exceeds payment"}"#,
    ]);

    match client.refund("OID1", dec!(999), None).await.unwrap() {
        RefundResult::Error { err_no, err_msg } => {
            assert_eq!(err_no.as_deref(), Some("009"));
            assert_eq!(err_msg.as_deref(), Some("amount exceeds payment"));
        }
        other => panic!("expected error, got {:?}", other),
    }
}

#[tokio::test]
async fn transaction_log_sends_formatted_range() {
    let (client, transport) =
        client_with(vec![r#"{"status":"success","transactions":[]}"#]);

    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 1, 3)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();

    let result = client.transactions(start, end).await.unwrap();
    assert!(matches!(result, TransactionLogResult::Success { .. }));

    let (url, fields) = &transport.requests()[0];
    assert_eq!(url, "https://www.paytr.com/rapor/islem-dokumu");
    assert_eq!(fields["start_date"], "2024-01-01 00:00:00");
    assert_eq!(fields["end_date"], "2024-01-03 23:59:59");
}

#[tokio::test]
async fn transaction_log_rejects_long_ranges_without_a_request() {
    let (client, transport) = client_with(vec![]);

    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 2, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let result = client.transactions(start, end).await;
    assert!(matches!(result, Err(PayTrError::Validation(_))));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn card_list_and_delete_use_capi_endpoints() {
    let (client, transport) = client_with(vec![
        r#"{"status":"success","cards":[{"ctoken":"CTOK","c_last_four":"4242","c_first_six":"424242","card_family":"World","bank_name":"Yapı Kredi","require_cvv":"0"}]}"#,
        r#"{"status":"success"}"#,
    ]);

    match client.list_cards("UTOK").await.unwrap() {
        CardListResult::Success { cards } => {
            assert_eq!(cards.len(), 1);
            assert!(!cards[0].requires_cvv());
        }
        other => panic!("expected success, got {:?}", other),
    }

    let result = client.delete_card("UTOK", "CTOK").await.unwrap();
    assert!(matches!(result, DeleteCardResult::Success {}));

    let requests = transport.requests();
    assert_eq!(requests[0].0, "https://www.paytr.com/odeme/capi/list");
    assert_eq!(requests[1].0, "https://www.paytr.com/odeme/capi/delete");
    assert_eq!(requests[1].1["ctoken"], "CTOK");
    assert_eq!(requests[1].1["utoken"], "UTOK");
}

#[tokio::test]
async fn order_status_parses_waiting_payments() {
    let (client, transport) = client_with(vec![
        r#"{"status":"success","merchant_oid":"OID1","payment_status":"waiting"}"#,
    ]);

    match client.order_status("OID1").await.unwrap() {
        OrderStatusResult::Success { payment_status, .. } => {
            assert_eq!(payment_status.as_deref(), Some("waiting"));
        }
        other => panic!("expected success, got {:?}", other),
    }
    assert_eq!(
        transport.requests()[0].0,
        "https://www.paytr.com/odeme/durum-sorgu"
    );
}

#[tokio::test]
async fn installment_rates_sends_a_fresh_request_id() {
    let (client, transport) = client_with(vec![
        r#"{"status":"success","oranlar":{"world":[]}}"#,
    ]);

    let result = client.installment_rates().await.unwrap();
    assert!(matches!(result, InstallmentRatesResult::Success { .. }));

    let (url, fields) = &transport.requests()[0];
    assert_eq!(url, "https://www.paytr.com/odeme/taksit-oranlari");
    assert!(!fields["request_id"].is_empty());
}

#[tokio::test]
async fn transport_failures_propagate_unchanged() {
    let (client, _) = client_with(vec![]);
    match client.order_status("OID1").await {
        Err(PayTrError::Transport(_)) => {}
        other => panic!("expected transport error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn malformed_json_surfaces_as_a_parse_error_with_the_raw_body() {
    let (client, _) = client_with(vec!["<html>upstream error page</html>"]);

    match client.query_bin("545616").await {
        Err(PayTrError::ResponseParse { raw, .. }) => {
            assert!(raw.contains("upstream error page"));
        }
        other => panic!("expected parse error, got {:?}", other.map(|_| ())),
    }
}
