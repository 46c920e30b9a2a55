use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        maintenance::{
            CalendarEventDto, CalendarEventRequest, MaintenanceItemDto,
            DEFAULT_CALENDAR_WINDOW_DAYS, MAINTENANCE_FACETS,
        },
    },
    server::{
        controller::util::{
            get_user::get_user_from_session,
            query::{list_filter, ListParams},
        },
        error::Error,
        model::app::AppState,
        service::maintenance::MaintenanceService,
        util::time::today,
    },
};

pub static MAINTENANCE_TAG: &str = "maintenance";

/// Maintenance calendar
///
/// Equipment and facilities with a maintenance schedule whose next due date falls within
/// `days` from today (default 30), overdue ones included, soonest due first.
#[utoipa::path(
    get,
    path = "/api/maintenance",
    tag = MAINTENANCE_TAG,
    params(
        ("days" = Option<i64>, Query, description = "Look-ahead window in days"),
        ("q" = Option<String>, Query, description = "Case-insensitive search term"),
        ("asset_kind" = Option<String>, Query, description = "equipment and/or facility"),
        ("farm_id" = Option<String>, Query, description = "Comma-separated farm IDs"),
        ("status" = Option<String>, Query, description = "Comma-separated maintenance statuses")
    ),
    responses(
        (status = 200, description = "Upcoming maintenance", body = Vec<MaintenanceItemDto>),
        (status = 400, description = "Invalid window", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_maintenance_calendar(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let days = match params.get("days") {
        Some(days) => days
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::validation("days must be a whole number"))?,
        None => DEFAULT_CALENDAR_WINDOW_DAYS,
    };

    let items = MaintenanceService::new(&state.db)
        .calendar(days, today())
        .await?;
    let items = list_filter(&params, MAINTENANCE_FACETS).apply(items);

    Ok((StatusCode::OK, Json(items)))
}

/// Put an asset's next maintenance into the shared calendar
#[utoipa::path(
    post,
    path = "/api/maintenance/calendar-event",
    tag = MAINTENANCE_TAG,
    request_body = CalendarEventRequest,
    responses(
        (status = 201, description = "Calendar event created", body = CalendarEventDto),
        (status = 400, description = "The asset has no maintenance schedule", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 502, description = "Creating the event failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_calendar_event(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CalendarEventRequest>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let event = MaintenanceService::new(&state.db)
        .create_calendar_event(request, &state.functions)
        .await?;

    Ok((StatusCode::CREATED, Json(event)))
}
