use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, dashboard::DashboardDto},
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::dashboard::DashboardService, util::time::today,
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Counts shown on the dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard counts", body = DashboardDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let summary = DashboardService::new(&state.db).summary(today()).await?;

    Ok((StatusCode::OK, Json(summary)))
}
