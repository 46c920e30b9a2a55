use allevapp::{
    model::quote::{QuoteDto, QuoteStatus},
    server::{controller::quote::send_quote, util::functions::SEND_QUOTE_EMAIL},
};

use sea_orm::EntityTrait;

use super::*;
use crate::util::json_body;

/// Expect the quote to be marked sent once the supplier email went out
#[tokio::test]
async fn send_marks_quote_sent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_function_endpoint(SEND_QUOTE_EMAIL, 200, 1)
        .build()
        .await?;
    test.login_as("kari", "member").await?;
    let farm = test.farm().insert_farm("North").await?;
    let supplier = test
        .purchasing()
        .insert_supplier("Agri Parts", Some("sales@agriparts.no"))
        .await?;
    let quote = test
        .purchasing()
        .insert_quote(supplier.id, farm.id, "draft")
        .await?;
    let state = test.app_state().await;

    let result = send_quote(State(state), test.session.clone(), Path(quote.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let sent: QuoteDto = json_body(resp).await;
    assert_eq!(sent.status, QuoteStatus::Sent);
    assert!(sent.sent_at.is_some());
    test.assert_mocks();

    Ok(())
}

/// Expect 400 without sending anything when the supplier has no email address
#[tokio::test]
async fn send_requires_supplier_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_function_endpoint(SEND_QUOTE_EMAIL, 200, 0)
        .build()
        .await?;
    test.login_as("kari", "member").await?;
    let farm = test.farm().insert_farm("North").await?;
    let supplier = test.purchasing().insert_supplier("Agri Parts", None).await?;
    let quote = test
        .purchasing()
        .insert_quote(supplier.id, farm.id, "draft")
        .await?;
    let state = test.app_state().await;

    let result = send_quote(State(state), test.session.clone(), Path(quote.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

/// Expect the quote to stay a draft when the email function fails
#[tokio::test]
async fn send_keeps_status_when_email_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_function_endpoint(SEND_QUOTE_EMAIL, 400, 1)
        .build()
        .await?;
    test.login_as("kari", "member").await?;
    let farm = test.farm().insert_farm("North").await?;
    let supplier = test
        .purchasing()
        .insert_supplier("Agri Parts", Some("sales@agriparts.no"))
        .await?;
    let quote = test
        .purchasing()
        .insert_quote(supplier.id, farm.id, "draft")
        .await?;
    let state = test.app_state().await;

    let result = send_quote(State(state), test.session.clone(), Path(quote.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let stored = entity::prelude::Quote::find_by_id(quote.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "draft");

    Ok(())
}
