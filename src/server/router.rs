//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together in one `routes!` call. The collected
/// OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at `/api/docs`.
///
/// # Registered Endpoints
/// - `/api/auth/*` - Login, logout and the current user
/// - `/api/farms`, `/api/equipment`, `/api/facilities`, `/api/suppliers`, `/api/projects`,
///   `/api/quotes`, `/api/orders`, `/api/reports`, `/api/document-categories`,
///   `/api/documents` - List/create and get/update/delete by ID
/// - `POST /api/quotes/{id}/send` - Email a quote to its supplier
/// - `GET /api/orders/{id}/document` - Download the printable order confirmation
/// - `POST /api/reports/{id}/attachments`, `GET /api/attachments/{id}` - Report attachments
/// - `GET /api/documents/{id}/file` - Download a document
/// - `/api/users` - User administration, admin only
/// - `GET /api/maintenance`, `POST /api/maintenance/calendar-event` - Maintenance calendar
/// - `GET /api/dashboard` - Dashboard counts
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged into the main application router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "AllevApp", description = "AllevApp farm operations API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::farm::FARM_TAG, description = "Farm API routes"),
        (name = controller::equipment::EQUIPMENT_TAG, description = "Equipment API routes"),
        (name = controller::facility::FACILITY_TAG, description = "Facility API routes"),
        (name = controller::supplier::SUPPLIER_TAG, description = "Supplier API routes"),
        (name = controller::report::REPORT_TAG, description = "Issue report and attachment API routes"),
        (name = controller::project::PROJECT_TAG, description = "Project API routes"),
        (name = controller::quote::QUOTE_TAG, description = "Quote API routes"),
        (name = controller::order::ORDER_TAG, description = "Order confirmation API routes"),
        (name = controller::document_category::DOCUMENT_CATEGORY_TAG, description = "Document category API routes"),
        (name = controller::document::DOCUMENT_TAG, description = "Document API routes"),
        (name = controller::user::USER_TAG, description = "User administration API routes"),
        (name = controller::maintenance::MAINTENANCE_TAG, description = "Maintenance calendar API routes"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Dashboard API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::farm::list_farms,
            controller::farm::create_farm
        ))
        .routes(routes!(
            controller::farm::get_farm,
            controller::farm::update_farm,
            controller::farm::delete_farm
        ))
        .routes(routes!(
            controller::equipment::list_equipment,
            controller::equipment::create_equipment
        ))
        .routes(routes!(
            controller::equipment::get_equipment,
            controller::equipment::update_equipment,
            controller::equipment::delete_equipment
        ))
        .routes(routes!(
            controller::facility::list_facilities,
            controller::facility::create_facility
        ))
        .routes(routes!(
            controller::facility::get_facility,
            controller::facility::update_facility,
            controller::facility::delete_facility
        ))
        .routes(routes!(
            controller::supplier::list_suppliers,
            controller::supplier::create_supplier
        ))
        .routes(routes!(
            controller::supplier::get_supplier,
            controller::supplier::update_supplier,
            controller::supplier::delete_supplier
        ))
        .routes(routes!(
            controller::report::list_reports,
            controller::report::create_report
        ))
        .routes(routes!(
            controller::report::get_report,
            controller::report::update_report,
            controller::report::delete_report
        ))
        .routes(routes!(controller::report::upload_attachments))
        .routes(routes!(controller::report::download_attachment))
        .routes(routes!(
            controller::project::list_projects,
            controller::project::create_project
        ))
        .routes(routes!(
            controller::project::get_project,
            controller::project::update_project,
            controller::project::delete_project
        ))
        .routes(routes!(
            controller::quote::list_quotes,
            controller::quote::create_quote
        ))
        .routes(routes!(
            controller::quote::get_quote,
            controller::quote::update_quote,
            controller::quote::delete_quote
        ))
        .routes(routes!(controller::quote::send_quote))
        .routes(routes!(
            controller::order::list_orders,
            controller::order::create_order
        ))
        .routes(routes!(
            controller::order::get_order,
            controller::order::update_order,
            controller::order::delete_order
        ))
        .routes(routes!(controller::order::get_order_document))
        .routes(routes!(
            controller::document_category::list_document_categories,
            controller::document_category::create_document_category
        ))
        .routes(routes!(
            controller::document_category::update_document_category,
            controller::document_category::delete_document_category
        ))
        .routes(routes!(
            controller::document::list_documents,
            controller::document::upload_documents
        ))
        .routes(routes!(
            controller::document::get_document,
            controller::document::update_document,
            controller::document::delete_document
        ))
        .routes(routes!(controller::document::download_document))
        .routes(routes!(
            controller::user::list_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(controller::user::reset_password))
        .routes(routes!(controller::maintenance::get_maintenance_calendar))
        .routes(routes!(controller::maintenance::create_calendar_event))
        .routes(routes!(controller::dashboard::get_dashboard))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
