use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        project::{ProjectDto, ProjectRequest, PROJECT_FACETS},
    },
    server::{
        controller::util::{
            get_user::get_user_from_session,
            query::{list_filter, ListParams},
        },
        error::Error,
        model::app::AppState,
        service::project::ProjectService,
    },
};

pub static PROJECT_TAG: &str = "project";

/// List projects, newest first
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = PROJECT_TAG,
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive search term"),
        ("farm_id" = Option<String>, Query, description = "Comma-separated farm IDs"),
        ("status" = Option<String>, Query, description = "Comma-separated project statuses")
    ),
    responses(
        (status = 200, description = "Matching projects", body = Vec<ProjectDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_projects(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let projects = ProjectService::new(&state.db).list().await?;
    let projects = list_filter(&params, PROJECT_FACETS).apply(projects);

    Ok((StatusCode::OK, Json(projects)))
}

/// Get a project
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "The project", body = ProjectDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let project = ProjectService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(project)))
}

/// Create a project
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = PROJECT_TAG,
    request_body = ProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectDto),
        (status = 400, description = "Invalid project", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    session: Session,
    Json(project): Json<ProjectRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let project = ProjectService::new(&state.db).create(project).await?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// Update a project
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project ID")),
    request_body = ProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = ProjectDto),
        (status = 400, description = "Invalid project", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(project): Json<ProjectRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let project = ProjectService::new(&state.db).update(id, project).await?;

    Ok((StatusCode::OK, Json(project)))
}

/// Delete a project
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 409, description = "Project is still referenced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    ProjectService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
