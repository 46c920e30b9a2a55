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
        equipment::{EquipmentDto, EquipmentRequest, EQUIPMENT_FACETS},
    },
    server::{
        controller::util::{
            get_user::get_user_from_session,
            query::{list_filter, single_id, ListParams},
        },
        error::Error,
        model::app::AppState,
        service::equipment::EquipmentService,
    },
};

pub static EQUIPMENT_TAG: &str = "equipment";

/// List equipment with next maintenance and maintenance status
///
/// A single `farm_id` narrows the query; the search term and facets are applied to the result.
#[utoipa::path(
    get,
    path = "/api/equipment",
    tag = EQUIPMENT_TAG,
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive search term"),
        ("farm_id" = Option<String>, Query, description = "Comma-separated farm IDs"),
        ("category" = Option<String>, Query, description = "Comma-separated categories"),
        ("status" = Option<String>, Query, description = "Comma-separated asset statuses"),
        ("maintenance_status" = Option<String>, Query, description = "Comma-separated maintenance statuses")
    ),
    responses(
        (status = 200, description = "Matching equipment", body = Vec<EquipmentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_equipment(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let equipment = EquipmentService::new(&state.db).list(single_id(&params, "farm_id")).await?;
    let equipment = list_filter(&params, EQUIPMENT_FACETS).apply(equipment);

    Ok((StatusCode::OK, Json(equipment)))
}

/// Get an equipment item
#[utoipa::path(
    get,
    path = "/api/equipment/{id}",
    tag = EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "The equipment", body = EquipmentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let equipment = EquipmentService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(equipment)))
}

/// Create an equipment item
#[utoipa::path(
    post,
    path = "/api/equipment",
    tag = EQUIPMENT_TAG,
    request_body = EquipmentRequest,
    responses(
        (status = 201, description = "Equipment created", body = EquipmentDto),
        (status = 400, description = "Invalid equipment", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    session: Session,
    Json(equipment): Json<EquipmentRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let equipment = EquipmentService::new(&state.db).create(equipment).await?;

    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update an equipment item
#[utoipa::path(
    put,
    path = "/api/equipment/{id}",
    tag = EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = EquipmentRequest,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentDto),
        (status = 400, description = "Invalid equipment", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(equipment): Json<EquipmentRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let equipment = EquipmentService::new(&state.db).update(id, equipment).await?;

    Ok((StatusCode::OK, Json(equipment)))
}

/// Delete an equipment item
#[utoipa::path(
    delete,
    path = "/api/equipment/{id}",
    tag = EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 409, description = "Equipment is still referenced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    EquipmentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
