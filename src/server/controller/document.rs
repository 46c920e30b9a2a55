use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        document::{DocumentDto, DocumentUpdateRequest, DOCUMENT_FACETS},
    },
    server::{
        controller::util::{
            get_user::get_user_from_session,
            query::{list_filter, ListParams},
            upload::{download, UploadForm},
        },
        error::Error,
        model::app::AppState,
        service::document::{DocumentService, DocumentUpload},
    },
};

pub static DOCUMENT_TAG: &str = "document";

/// Multipart form for document uploads, documentation only
#[derive(utoipa::ToSchema)]
#[allow(dead_code)]
pub struct DocumentUploadForm {
    /// Title for a single uploaded file; several files are titled by file name
    title: Option<String>,
    farm_id: Option<i32>,
    category_id: Option<i32>,
    /// One or more files
    #[schema(value_type = Vec<String>, format = Binary)]
    files: Vec<Vec<u8>>,
}

/// List documents, newest first
#[utoipa::path(
    get,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive search term"),
        ("farm_id" = Option<String>, Query, description = "Comma-separated farm IDs"),
        ("category_id" = Option<String>, Query, description = "Comma-separated category IDs")
    ),
    responses(
        (status = 200, description = "Matching documents", body = Vec<DocumentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_documents(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let documents = DocumentService::new(&state.db, &state.storage).list().await?;
    let documents = list_filter(&params, DOCUMENT_FACETS).apply(documents);

    Ok((StatusCode::OK, Json(documents)))
}

/// Get a document's metadata
#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 200, description = "The document", body = DocumentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_document(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let document = DocumentService::new(&state.db, &state.storage).get(id).await?;

    Ok((StatusCode::OK, Json(document)))
}

/// Upload one or more documents
///
/// Either every file is stored as a document or, when one fails, none is.
#[utoipa::path(
    post,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    request_body(content = DocumentUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Documents stored", body = Vec<DocumentDto>),
        (status = 400, description = "No files or malformed upload", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Farm or category does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_documents(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let form = UploadForm::read(multipart).await?;
    let upload = DocumentUpload {
        title: form.text("title"),
        farm_id: form.id("farm_id")?,
        category_id: form.id("category_id")?,
        uploaded_by: Some(user.id),
    };

    let documents = DocumentService::new(&state.db, &state.storage)
        .upload(upload, form.files)
        .await?;

    Ok((StatusCode::CREATED, Json(documents)))
}

/// Update a document's title, farm or category
#[utoipa::path(
    put,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    request_body = DocumentUpdateRequest,
    responses(
        (status = 200, description = "Document updated", body = DocumentDto),
        (status = 400, description = "Invalid document", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_document(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(document): Json<DocumentUpdateRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let document = DocumentService::new(&state.db, &state.storage)
        .update(id, document)
        .await?;

    Ok((StatusCode::OK, Json(document)))
}

/// Delete a document and its file
#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 204, description = "Document deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_document(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    DocumentService::new(&state.db, &state.storage)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Download a document's file
#[utoipa::path(
    get,
    path = "/api/documents/{id}/file",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 200, description = "The document's file", content_type = "application/octet-stream", body = Vec<u8>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Document or its file not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_document(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let (document, bytes) = DocumentService::new(&state.db, &state.storage)
        .download(id)
        .await?;

    Ok(download(&document.content_type, &document.file_name, bytes))
}
