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
        order::{OrderDto, OrderRequest, ORDER_FACETS},
    },
    server::{
        controller::util::{
            get_user::get_user_from_session,
            query::{list_filter, ListParams},
            upload::download,
        },
        error::Error,
        model::app::AppState,
        service::order::OrderService,
    },
};

pub static ORDER_TAG: &str = "order";

/// List order confirmations, latest order date first
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive search term"),
        ("farm_id" = Option<String>, Query, description = "Comma-separated farm IDs"),
        ("supplier_id" = Option<String>, Query, description = "Comma-separated supplier IDs")
    ),
    responses(
        (status = 200, description = "Matching orders", body = Vec<OrderDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_orders(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let orders = OrderService::new(&state.db).list().await?;
    let orders = list_filter(&params, ORDER_FACETS).apply(orders);

    Ok((StatusCode::OK, Json(orders)))
}

/// Get an order
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "The order", body = OrderDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let order = OrderService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(order)))
}

/// Create an order confirmation for a quote
///
/// The quote is marked accepted in the same transaction.
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderDto),
        (status = 400, description = "Invalid order", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Quote not found", body = ErrorDto),
        (status = 409, description = "An order with this number exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    session: Session,
    Json(order): Json<OrderRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let order = OrderService::new(&state.db).create(order).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// Update an order
///
/// Moving the order to another quote marks that quote as accepted.
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderDto),
        (status = 400, description = "Invalid order", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Order or quote not found", body = ErrorDto),
        (status = 409, description = "An order with this number exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(order): Json<OrderRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let order = OrderService::new(&state.db).update(id, order).await?;

    Ok((StatusCode::OK, Json(order)))
}

/// Delete an order
///
/// The quote keeps its accepted status.
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Order is still referenced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    OrderService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Download the printable order confirmation
///
/// Returns a standalone HTML document with inline styles, the farm's letterhead and the
/// supplier block, served as an attachment named after the order number.
#[utoipa::path(
    get,
    path = "/api/orders/{id}/document",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "The order confirmation document", content_type = "text/html", body = String),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order_document(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let document = OrderService::new(&state.db).document(id).await?;

    Ok(download(
        "text/html; charset=utf-8",
        &document.file_name,
        document.html,
    ))
}
