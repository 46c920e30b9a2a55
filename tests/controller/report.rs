use allevapp::{
    model::report::AttachmentDto,
    server::controller::report::{download_attachment, upload_attachments},
};
use axum::http::header;

use super::*;
use crate::util::{bytes_body, json_body, multipart, FilePart};

/// Expect 201 with one attachment per uploaded file, downloadable with its name and type
#[tokio::test]
async fn uploads_and_downloads_attachments() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_as("kari", "member").await?;
    let farm = test.farm().insert_farm("North").await?;
    let report = test.report().insert_report(farm.id, None).await?;
    let state = test.app_state().await;

    let form = multipart(
        &[],
        &[
            FilePart {
                file_name: "valve.jpg",
                content_type: "image/jpeg",
                body: b"\xFF\xD8\xFF\xE0",
            },
            FilePart {
                file_name: "notes.txt",
                content_type: "text/plain",
                body: b"drips every 3 seconds",
            },
        ],
    )
    .await;

    let result =
        upload_attachments(State(state.clone()), test.session.clone(), Path(report.id), form).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let attachments: Vec<AttachmentDto> = json_body(resp).await;
    assert_eq!(attachments.len(), 2);
    assert_eq!(attachments[1].file_name, "notes.txt");
    assert_eq!(attachments[1].size_bytes, 21);

    let resp = download_attachment(State(state), test.session.clone(), Path(attachments[1].id))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/plain");
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"notes.txt\""
    );
    assert_eq!(bytes_body(resp).await, b"drips every 3 seconds");

    Ok(())
}

/// Expect 400 for a form without files
#[tokio::test]
async fn rejects_upload_without_files() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_as("kari", "member").await?;
    let farm = test.farm().insert_farm("North").await?;
    let report = test.report().insert_report(farm.id, None).await?;
    let state = test.app_state().await;

    let form = multipart(&[("comment", "nothing attached")], &[]).await;
    let result =
        upload_attachments(State(state), test.session.clone(), Path(report.id), form).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 and no stored blobs when the report does not exist
#[tokio::test]
async fn rejects_upload_for_missing_report() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_as("kari", "member").await?;
    let state = test.app_state().await;

    let form = multipart(
        &[],
        &[FilePart {
            file_name: "valve.jpg",
            content_type: "image/jpeg",
            body: b"\xFF\xD8",
        }],
    )
    .await;
    let result = upload_attachments(State(state), test.session.clone(), Path(5), form).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(std::fs::read_dir(test.storage_path())?.count(), 0);

    Ok(())
}

/// Expect 404 when the attachment's file is gone from storage
#[tokio::test]
async fn download_missing_blob_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    test.login_as("kari", "member").await?;
    let farm = test.farm().insert_farm("North").await?;
    let report = test.report().insert_report(farm.id, None).await?;
    let attachment = test
        .report()
        .insert_attachment(report.id, "0f8fad5b-d9cb-469f-a165-70867728950e")
        .await?;
    let state = test.app_state().await;

    let result = download_attachment(State(state), test.session.clone(), Path(attachment.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
