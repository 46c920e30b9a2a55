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
        farm::{FarmDto, FarmRequest},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::farm::FarmService,
    },
};

pub static FARM_TAG: &str = "farm";

/// List all farms by name
#[utoipa::path(
    get,
    path = "/api/farms",
    tag = FARM_TAG,
    responses(
        (status = 200, description = "All farms", body = Vec<FarmDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_farms(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let farms = FarmService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(farms)))
}

/// Get a farm
#[utoipa::path(
    get,
    path = "/api/farms/{id}",
    tag = FARM_TAG,
    params(("id" = i32, Path, description = "Farm ID")),
    responses(
        (status = 200, description = "The farm", body = FarmDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Farm not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_farm(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let farm = FarmService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(farm)))
}

/// Create a farm
#[utoipa::path(
    post,
    path = "/api/farms",
    tag = FARM_TAG,
    request_body = FarmRequest,
    responses(
        (status = 201, description = "Farm created", body = FarmDto),
        (status = 400, description = "Invalid farm", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "A farm with this name exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_farm(
    State(state): State<AppState>,
    session: Session,
    Json(farm): Json<FarmRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let farm = FarmService::new(&state.db).create(farm).await?;

    Ok((StatusCode::CREATED, Json(farm)))
}

/// Update a farm
#[utoipa::path(
    put,
    path = "/api/farms/{id}",
    tag = FARM_TAG,
    params(("id" = i32, Path, description = "Farm ID")),
    request_body = FarmRequest,
    responses(
        (status = 200, description = "Farm updated", body = FarmDto),
        (status = 400, description = "Invalid farm", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Farm not found", body = ErrorDto),
        (status = 409, description = "A farm with this name exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_farm(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(farm): Json<FarmRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let farm = FarmService::new(&state.db).update(id, farm).await?;

    Ok((StatusCode::OK, Json(farm)))
}

/// Delete a farm
///
/// Fails with 409 while equipment, facilities or other records still reference the farm.
#[utoipa::path(
    delete,
    path = "/api/farms/{id}",
    tag = FARM_TAG,
    params(("id" = i32, Path, description = "Farm ID")),
    responses(
        (status = 204, description = "Farm deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Farm not found", body = ErrorDto),
        (status = 409, description = "Farm is still referenced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_farm(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    FarmService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
