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
        quote::{QuoteDto, QuoteRequest, QUOTE_FACETS},
    },
    server::{
        controller::util::{
            get_user::get_user_from_session,
            query::{list_filter, ListParams},
        },
        error::Error,
        model::app::AppState,
        service::quote::QuoteService,
    },
};

pub static QUOTE_TAG: &str = "quote";

/// List quotes, newest first
#[utoipa::path(
    get,
    path = "/api/quotes",
    tag = QUOTE_TAG,
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive search term"),
        ("farm_id" = Option<String>, Query, description = "Comma-separated farm IDs"),
        ("supplier_id" = Option<String>, Query, description = "Comma-separated supplier IDs"),
        ("project_id" = Option<String>, Query, description = "Comma-separated project IDs"),
        ("status" = Option<String>, Query, description = "Comma-separated quote statuses")
    ),
    responses(
        (status = 200, description = "Matching quotes", body = Vec<QuoteDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_quotes(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let quotes = QuoteService::new(&state.db).list().await?;
    let quotes = list_filter(&params, QUOTE_FACETS).apply(quotes);

    Ok((StatusCode::OK, Json(quotes)))
}

/// Get a quote
#[utoipa::path(
    get,
    path = "/api/quotes/{id}",
    tag = QUOTE_TAG,
    params(("id" = i32, Path, description = "Quote ID")),
    responses(
        (status = 200, description = "The quote", body = QuoteDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Quote not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_quote(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let quote = QuoteService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(quote)))
}

/// Create a quote
#[utoipa::path(
    post,
    path = "/api/quotes",
    tag = QUOTE_TAG,
    request_body = QuoteRequest,
    responses(
        (status = 201, description = "Quote created", body = QuoteDto),
        (status = 400, description = "Invalid quote", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_quote(
    State(state): State<AppState>,
    session: Session,
    Json(quote): Json<QuoteRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let quote = QuoteService::new(&state.db).create(quote).await?;

    Ok((StatusCode::CREATED, Json(quote)))
}

/// Update a quote
#[utoipa::path(
    put,
    path = "/api/quotes/{id}",
    tag = QUOTE_TAG,
    params(("id" = i32, Path, description = "Quote ID")),
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Quote updated", body = QuoteDto),
        (status = 400, description = "Invalid quote", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Quote not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_quote(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(quote): Json<QuoteRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let quote = QuoteService::new(&state.db).update(id, quote).await?;

    Ok((StatusCode::OK, Json(quote)))
}

/// Delete a quote
///
/// Fails with 409 while an order confirmation references the quote.
#[utoipa::path(
    delete,
    path = "/api/quotes/{id}",
    tag = QUOTE_TAG,
    params(("id" = i32, Path, description = "Quote ID")),
    responses(
        (status = 204, description = "Quote deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Quote not found", body = ErrorDto),
        (status = 409, description = "Quote is still referenced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_quote(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    QuoteService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Email the quote request to its supplier
///
/// Invokes the `send-quote-email` function with the supplier's email address and the quote
/// details, then marks the quote as sent. Quotes already sent can be sent again.
#[utoipa::path(
    post,
    path = "/api/quotes/{id}/send",
    tag = QUOTE_TAG,
    params(("id" = i32, Path, description = "Quote ID")),
    responses(
        (status = 200, description = "Quote sent", body = QuoteDto),
        (status = 400, description = "Quote is no longer a draft or sent, or the supplier has no email address", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Quote not found", body = ErrorDto),
        (status = 502, description = "Sending the email failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_quote(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let quote = QuoteService::new(&state.db)
        .send(id, &state.functions)
        .await?;

    Ok((StatusCode::OK, Json(quote)))
}
