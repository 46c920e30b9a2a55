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
        supplier::{SupplierDto, SupplierRequest},
    },
    server::{
        controller::util::{
            get_user::get_user_from_session,
            query::{list_filter, ListParams},
        },
        error::Error,
        model::app::AppState,
        service::supplier::SupplierService,
    },
};

pub static SUPPLIER_TAG: &str = "supplier";

/// List suppliers matching the search term
#[utoipa::path(
    get,
    path = "/api/suppliers",
    tag = SUPPLIER_TAG,
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive search term")
    ),
    responses(
        (status = 200, description = "Matching suppliers", body = Vec<SupplierDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_suppliers(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let suppliers = SupplierService::new(&state.db).list().await?;
    let suppliers = list_filter(&params, &[]).apply(suppliers);

    Ok((StatusCode::OK, Json(suppliers)))
}

/// Get a supplier
#[utoipa::path(
    get,
    path = "/api/suppliers/{id}",
    tag = SUPPLIER_TAG,
    params(("id" = i32, Path, description = "Supplier ID")),
    responses(
        (status = 200, description = "The supplier", body = SupplierDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Supplier not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_supplier(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let supplier = SupplierService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(supplier)))
}

/// Create a supplier
#[utoipa::path(
    post,
    path = "/api/suppliers",
    tag = SUPPLIER_TAG,
    request_body = SupplierRequest,
    responses(
        (status = 201, description = "Supplier created", body = SupplierDto),
        (status = 400, description = "Invalid supplier", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_supplier(
    State(state): State<AppState>,
    session: Session,
    Json(supplier): Json<SupplierRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let supplier = SupplierService::new(&state.db).create(supplier).await?;

    Ok((StatusCode::CREATED, Json(supplier)))
}

/// Update a supplier
#[utoipa::path(
    put,
    path = "/api/suppliers/{id}",
    tag = SUPPLIER_TAG,
    params(("id" = i32, Path, description = "Supplier ID")),
    request_body = SupplierRequest,
    responses(
        (status = 200, description = "Supplier updated", body = SupplierDto),
        (status = 400, description = "Invalid supplier", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Supplier not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_supplier(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(supplier): Json<SupplierRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let supplier = SupplierService::new(&state.db).update(id, supplier).await?;

    Ok((StatusCode::OK, Json(supplier)))
}

/// Delete a supplier
///
/// Fails with 409 while quotes or reports still reference the supplier.
#[utoipa::path(
    delete,
    path = "/api/suppliers/{id}",
    tag = SUPPLIER_TAG,
    params(("id" = i32, Path, description = "Supplier ID")),
    responses(
        (status = 204, description = "Supplier deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Supplier not found", body = ErrorDto),
        (status = 409, description = "Supplier is still referenced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_supplier(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    SupplierService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
