use allevapp::{
    model::document::{DocumentCategoryDto, DocumentCategoryRequest},
    server::controller::document_category::{
        create_document_category, list_document_categories, update_document_category,
    },
};

use super::*;
use crate::util::json_body;

fn request(name: &str) -> DocumentCategoryRequest {
    DocumentCategoryRequest {
        name: name.to_string(),
        description: None,
    }
}

/// Expect a created category to be listed by name
#[tokio::test]
async fn create_then_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_as("kari", "member").await?;
    let state = test.app_state().await;

    let result = create_document_category(
        State(state.clone()),
        test.session.clone(),
        Json(request(" Certificates ")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: DocumentCategoryDto = json_body(resp).await;
    assert_eq!(created.name, "Certificates");

    let resp = list_document_categories(State(state), test.session.clone())
        .await
        .unwrap()
        .into_response();
    let categories: Vec<DocumentCategoryDto> = json_body(resp).await;
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, created.id);

    Ok(())
}

/// Expect 409 when a category with the same name exists
#[tokio::test]
async fn create_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_as("kari", "member").await?;
    test.document().insert_category("Manuals").await?;
    let state = test.app_state().await;

    let result =
        create_document_category(State(state), test.session.clone(), Json(request("Manuals")))
            .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 404 when updating a missing category
#[tokio::test]
async fn update_missing_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_as("kari", "member").await?;
    let state = test.app_state().await;

    let result = update_document_category(
        State(state),
        test.session.clone(),
        Path(7),
        Json(request("Manuals")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 401 without a logged in user
#[tokio::test]
async fn list_requires_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let state = test.app_state().await;

    let result = list_document_categories(State(state), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
