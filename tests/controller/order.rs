use allevapp::{
    model::{
        order::{OrderDto, OrderRequest},
        quote::{QuoteDto, QuoteStatus},
    },
    server::controller::{
        order::{create_order, get_order_document},
        quote::get_quote,
    },
};
use axum::http::header;
use chrono::NaiveDate;

use super::*;
use crate::util::{bytes_body, json_body};

fn request(quote_id: i32, order_number: &str) -> OrderRequest {
    OrderRequest {
        quote_id,
        order_number: order_number.to_string(),
        order_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        delivery_date: None,
        delivery_address: Some("Gårdsvegen 1".to_string()),
        total_amount_minor: 1_250_000,
        currency: "nok".to_string(),
        notes: None,
    }
}

/// Expect 201 for a new order and its quote accepted
#[tokio::test]
async fn create_accepts_quote() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_as("kari", "member").await?;
    let farm = test.farm().insert_farm("North").await?;
    let supplier = test.purchasing().insert_supplier("Agri Parts", None).await?;
    let quote = test
        .purchasing()
        .insert_quote(supplier.id, farm.id, "received")
        .await?;
    let state = test.app_state().await;

    let result = create_order(
        State(state.clone()),
        test.session.clone(),
        Json(request(quote.id, "PO-2025-001")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let order: OrderDto = json_body(resp).await;
    assert_eq!(order.currency, "NOK");
    assert_eq!(order.supplier_name.as_deref(), Some("Agri Parts"));

    let resp = get_quote(State(state), test.session.clone(), Path(quote.id))
        .await
        .unwrap()
        .into_response();
    let quote: QuoteDto = json_body(resp).await;
    assert_eq!(quote.status, QuoteStatus::Accepted);

    Ok(())
}

/// Expect 409 for a duplicate order number
#[tokio::test]
async fn create_rejects_duplicate_number() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_as("kari", "member").await?;
    let farm = test.farm().insert_farm("North").await?;
    let supplier = test.purchasing().insert_supplier("Agri Parts", None).await?;
    let quote = test
        .purchasing()
        .insert_quote(supplier.id, farm.id, "received")
        .await?;
    test.purchasing().insert_order(quote.id, "PO-2025-001").await?;
    let state = test.app_state().await;

    let result = create_order(
        State(state),
        test.session.clone(),
        Json(request(quote.id, "PO-2025-001")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect the confirmation as an HTML attachment named after the order number
#[tokio::test]
async fn document_is_html_attachment() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_as("kari", "member").await?;
    let farm = test.farm().insert_farm("North").await?;
    let supplier = test.purchasing().insert_supplier("Agri Parts", None).await?;
    let quote = test
        .purchasing()
        .insert_quote(supplier.id, farm.id, "accepted")
        .await?;
    let order = test.purchasing().insert_order(quote.id, "PO-2025-001").await?;
    let state = test.app_state().await;

    let result = get_order_document(State(state), test.session.clone(), Path(order.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"order-PO-2025-001.html\""
    );

    let html = String::from_utf8(bytes_body(resp).await).unwrap();
    assert!(html.contains("PO-2025-001"));
    assert!(html.contains("Agri Parts"));
    assert!(html.contains("12 500.00 NOK"));

    Ok(())
}

/// Expect 404 for the document of an order that does not exist
#[tokio::test]
async fn document_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_as("kari", "member").await?;
    let state = test.app_state().await;

    let result = get_order_document(State(state), test.session.clone(), Path(7)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
