use allevapp::{
    model::document::DocumentDto,
    server::controller::document::{download_document, list_documents, upload_documents},
};
use axum::http::header;

use super::*;
use crate::util::{bytes_body, json_body, multipart, FilePart};

/// Expect uploaded documents to carry the form's title, farm, category and uploader
#[tokio::test]
async fn upload_records_metadata() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user_id = test.login_as("kari", "member").await?;
    let farm = test.farm().insert_farm("North").await?;
    let category = test.document().insert_category("Certificates").await?;
    let state = test.app_state().await;

    let form = multipart(
        &[
            ("title", "Organic certificate 2025"),
            ("farm_id", &farm.id.to_string()),
            ("category_id", &category.id.to_string()),
        ],
        &[FilePart {
            file_name: "debio.pdf",
            content_type: "application/pdf",
            body: b"%PDF-1.7",
        }],
    )
    .await;

    let result = upload_documents(State(state.clone()), test.session.clone(), form).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let documents: Vec<DocumentDto> = json_body(resp).await;
    assert_eq!(documents.len(), 1);
    let document = &documents[0];
    assert_eq!(document.title, "Organic certificate 2025");
    assert_eq!(document.farm_id, Some(farm.id));
    assert_eq!(document.category_name.as_deref(), Some("Certificates"));
    assert_eq!(document.uploaded_by, Some(user_id));

    let resp = download_document(State(state), test.session.clone(), Path(document.id))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(bytes_body(resp).await, b"%PDF-1.7");

    Ok(())
}

/// Expect the file name as title when the form has none
#[tokio::test]
async fn upload_defaults_title_to_file_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_as("kari", "member").await?;
    let state = test.app_state().await;

    let form = multipart(
        &[("title", " "), ("farm_id", "")],
        &[FilePart {
            file_name: "feed-plan.xlsx",
            content_type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            body: b"PK",
        }],
    )
    .await;

    let result = upload_documents(State(state), test.session.clone(), form).await;

    let documents: Vec<DocumentDto> = json_body(result.unwrap().into_response()).await;
    assert_eq!(documents[0].title, "feed-plan.xlsx");
    assert_eq!(documents[0].farm_id, None);

    Ok(())
}

/// Expect 400 for a non-numeric farm ID
#[tokio::test]
async fn upload_rejects_malformed_farm_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_as("kari", "member").await?;
    let state = test.app_state().await;

    let form = multipart(
        &[("farm_id", "north")],
        &[FilePart {
            file_name: "a.pdf",
            content_type: "application/pdf",
            body: b"%PDF",
        }],
    )
    .await;

    let result = upload_documents(State(state), test.session.clone(), form).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect list filtering by category facet
#[tokio::test]
async fn list_filters_by_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_as("kari", "member").await?;
    let certificates = test.document().insert_category("Certificates").await?;
    let manuals = test.document().insert_category("Manuals").await?;
    test.document()
        .insert_document(None, Some(certificates.id), "a/certificate.pdf")
        .await?;
    test.document()
        .insert_document(None, Some(manuals.id), "b/certificate.pdf")
        .await?;
    let state = test.app_state().await;

    let params = Query(
        [("category_id".to_string(), manuals.id.to_string())]
            .into_iter()
            .collect(),
    );
    let result = list_documents(State(state), test.session.clone(), params).await;

    let documents: Vec<DocumentDto> = json_body(result.unwrap().into_response()).await;
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].category_id, Some(manuals.id));

    Ok(())
}
