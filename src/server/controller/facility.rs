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
        facility::{FacilityDto, FacilityRequest, FACILITY_FACETS},
    },
    server::{
        controller::util::{
            get_user::get_user_from_session,
            query::{list_filter, single_id, ListParams},
        },
        error::Error,
        model::app::AppState,
        service::facility::FacilityService,
    },
};

pub static FACILITY_TAG: &str = "facility";

/// List facilities with next maintenance and maintenance status
#[utoipa::path(
    get,
    path = "/api/facilities",
    tag = FACILITY_TAG,
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive search term"),
        ("farm_id" = Option<String>, Query, description = "Comma-separated farm IDs"),
        ("facility_type" = Option<String>, Query, description = "Comma-separated facility types"),
        ("status" = Option<String>, Query, description = "Comma-separated asset statuses"),
        ("maintenance_status" = Option<String>, Query, description = "Comma-separated maintenance statuses")
    ),
    responses(
        (status = 200, description = "Matching facilities", body = Vec<FacilityDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_facilities(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let facilities = FacilityService::new(&state.db).list(single_id(&params, "farm_id")).await?;
    let facilities = list_filter(&params, FACILITY_FACETS).apply(facilities);

    Ok((StatusCode::OK, Json(facilities)))
}

/// Get a facility
#[utoipa::path(
    get,
    path = "/api/facilities/{id}",
    tag = FACILITY_TAG,
    params(("id" = i32, Path, description = "Facility ID")),
    responses(
        (status = 200, description = "The facility", body = FacilityDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Facility not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_facility(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let facility = FacilityService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(facility)))
}

/// Create a facility
#[utoipa::path(
    post,
    path = "/api/facilities",
    tag = FACILITY_TAG,
    request_body = FacilityRequest,
    responses(
        (status = 201, description = "Facility created", body = FacilityDto),
        (status = 400, description = "Invalid facility", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_facility(
    State(state): State<AppState>,
    session: Session,
    Json(facility): Json<FacilityRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let facility = FacilityService::new(&state.db).create(facility).await?;

    Ok((StatusCode::CREATED, Json(facility)))
}

/// Update a facility
#[utoipa::path(
    put,
    path = "/api/facilities/{id}",
    tag = FACILITY_TAG,
    params(("id" = i32, Path, description = "Facility ID")),
    request_body = FacilityRequest,
    responses(
        (status = 200, description = "Facility updated", body = FacilityDto),
        (status = 400, description = "Invalid facility", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Facility not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_facility(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(facility): Json<FacilityRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let facility = FacilityService::new(&state.db).update(id, facility).await?;

    Ok((StatusCode::OK, Json(facility)))
}

/// Delete a facility
#[utoipa::path(
    delete,
    path = "/api/facilities/{id}",
    tag = FACILITY_TAG,
    params(("id" = i32, Path, description = "Facility ID")),
    responses(
        (status = 204, description = "Facility deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Facility not found", body = ErrorDto),
        (status = 409, description = "Facility is still referenced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_facility(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    FacilityService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
