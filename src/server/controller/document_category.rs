use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        document::{DocumentCategoryDto, DocumentCategoryRequest},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::document::DocumentCategoryService,
    },
};

pub static DOCUMENT_CATEGORY_TAG: &str = "document_category";

/// List document categories by name
#[utoipa::path(
    get,
    path = "/api/document-categories",
    tag = DOCUMENT_CATEGORY_TAG,
    responses(
        (status = 200, description = "All document categories", body = Vec<DocumentCategoryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_document_categories(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let document_categories = DocumentCategoryService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(document_categories)))
}

/// Create a document category
#[utoipa::path(
    post,
    path = "/api/document-categories",
    tag = DOCUMENT_CATEGORY_TAG,
    request_body = DocumentCategoryRequest,
    responses(
        (status = 201, description = "Document category created", body = DocumentCategoryDto),
        (status = 400, description = "Invalid document category", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "A category with this name exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_document_category(
    State(state): State<AppState>,
    session: Session,
    Json(document_category): Json<DocumentCategoryRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let document_category = DocumentCategoryService::new(&state.db)
        .create(document_category)
        .await?;

    Ok((StatusCode::CREATED, Json(document_category)))
}

/// Update a document category
#[utoipa::path(
    put,
    path = "/api/document-categories/{id}",
    tag = DOCUMENT_CATEGORY_TAG,
    params(("id" = i32, Path, description = "Document category ID")),
    request_body = DocumentCategoryRequest,
    responses(
        (status = 200, description = "Document category updated", body = DocumentCategoryDto),
        (status = 400, description = "Invalid document category", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Document category not found", body = ErrorDto),
        (status = 409, description = "A category with this name exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_document_category(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(document_category): Json<DocumentCategoryRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let document_category = DocumentCategoryService::new(&state.db)
        .update(id, document_category)
        .await?;

    Ok((StatusCode::OK, Json(document_category)))
}

/// Delete a document category
#[utoipa::path(
    delete,
    path = "/api/document-categories/{id}",
    tag = DOCUMENT_CATEGORY_TAG,
    params(("id" = i32, Path, description = "Document category ID")),
    responses(
        (status = 204, description = "Document category deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Document category not found", body = ErrorDto),
        (status = 409, description = "Document category is still referenced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_document_category(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    DocumentCategoryService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
