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
        report::{AttachmentDto, ReportDto, ReportRequest, REPORT_FACETS},
    },
    server::{
        controller::util::{
            get_user::get_user_from_session,
            query::{list_filter, ListParams},
            upload::{download, UploadForm},
        },
        error::Error,
        model::app::AppState,
        service::report::ReportService,
    },
};

pub static REPORT_TAG: &str = "report";

/// Multipart form for attachment uploads, documentation only
#[derive(utoipa::ToSchema)]
#[allow(dead_code)]
pub struct AttachmentUploadForm {
    /// One or more files
    #[schema(value_type = Vec<String>, format = Binary)]
    files: Vec<Vec<u8>>,
}

/// List issue reports with their attachments, newest first
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = REPORT_TAG,
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive search term"),
        ("farm_id" = Option<String>, Query, description = "Comma-separated farm IDs"),
        ("equipment_id" = Option<String>, Query, description = "Comma-separated equipment IDs"),
        ("urgency" = Option<String>, Query, description = "Comma-separated urgencies"),
        ("status" = Option<String>, Query, description = "Comma-separated report statuses")
    ),
    responses(
        (status = 200, description = "Matching reports", body = Vec<ReportDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_reports(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let reports = ReportService::new(&state.db, &state.storage).list().await?;
    let reports = list_filter(&params, REPORT_FACETS).apply(reports);

    Ok((StatusCode::OK, Json(reports)))
}

/// Get an issue report
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    tag = REPORT_TAG,
    params(("id" = i32, Path, description = "Report ID")),
    responses(
        (status = 200, description = "The report", body = ReportDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_report(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let report = ReportService::new(&state.db, &state.storage).get(id).await?;

    Ok((StatusCode::OK, Json(report)))
}

/// File an issue report as the logged in user
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = REPORT_TAG,
    request_body = ReportRequest,
    responses(
        (status = 201, description = "Report filed", body = ReportDto),
        (status = 400, description = "Invalid report", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_report(
    State(state): State<AppState>,
    session: Session,
    Json(report): Json<ReportRequest>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let report = ReportService::new(&state.db, &state.storage)
        .create(report, Some(user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(report)))
}

/// Update an issue report
#[utoipa::path(
    put,
    path = "/api/reports/{id}",
    tag = REPORT_TAG,
    params(("id" = i32, Path, description = "Report ID")),
    request_body = ReportRequest,
    responses(
        (status = 200, description = "Report updated", body = ReportDto),
        (status = 400, description = "Invalid report", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_report(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(report): Json<ReportRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let report = ReportService::new(&state.db, &state.storage)
        .update(id, report)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Delete an issue report together with its attachments and their files
#[utoipa::path(
    delete,
    path = "/api/reports/{id}",
    tag = REPORT_TAG,
    params(("id" = i32, Path, description = "Report ID")),
    responses(
        (status = 204, description = "Report deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_report(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    ReportService::new(&state.db, &state.storage)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Attach files to an issue report
///
/// Every file part of the form is stored. When one file fails, the files already stored by
/// this request are removed and no attachment is recorded.
#[utoipa::path(
    post,
    path = "/api/reports/{id}/attachments",
    tag = REPORT_TAG,
    params(("id" = i32, Path, description = "Report ID")),
    request_body(content = AttachmentUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Attachments stored", body = Vec<AttachmentDto>),
        (status = 400, description = "No files or malformed upload", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_attachments(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let form = UploadForm::read(multipart).await?;
    let attachments = ReportService::new(&state.db, &state.storage)
        .add_attachments(id, form.files)
        .await?;

    Ok((StatusCode::CREATED, Json(attachments)))
}

/// Download an attachment
#[utoipa::path(
    get,
    path = "/api/attachments/{id}",
    tag = REPORT_TAG,
    params(("id" = i32, Path, description = "Attachment ID")),
    responses(
        (status = 200, description = "The attachment's file", content_type = "application/octet-stream", body = Vec<u8>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Attachment or its file not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_attachment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let (attachment, bytes) = ReportService::new(&state.db, &state.storage)
        .download_attachment(id)
        .await?;

    Ok(download(&attachment.content_type, &attachment.file_name, bytes))
}
