use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{components::Page, router::Route, util::api},
    model::dashboard::DashboardDto,
};

#[component]
pub fn Dashboard() -> Element {
    let summary = use_resource(|| async move { api::get::<DashboardDto>("/api/dashboard").await });

    let content = match &*summary.read() {
        Some(Ok(summary)) => rsx!(
            div { class: "stats stats-vertical lg:stats-horizontal shadow",
                StatCard { label: "Farms", value: summary.farms, to: Route::Farms {} }
                StatCard { label: "Equipment", value: summary.equipment, to: Route::Equipment {} }
                StatCard { label: "Facilities", value: summary.facilities, to: Route::Facilities {} }
                StatCard { label: "Open reports", value: summary.open_reports, to: Route::Reports {} }
            }
            div { class: "stats stats-vertical lg:stats-horizontal shadow",
                StatCard { label: "Overdue maintenance", value: summary.overdue_maintenance, to: Route::Maintenance {} }
                StatCard { label: "Maintenance due soon", value: summary.due_soon_maintenance, to: Route::Maintenance {} }
                StatCard { label: "Pending quotes", value: summary.pending_quotes, to: Route::Quotes {} }
            }
        ),
        Some(Err(e)) => rsx!(div { role: "alert", class: "alert alert-error", "{e}" }),
        None => rsx!(div { class: "skeleton h-32 w-full" }),
    };

    rsx!(
        Title { "Dashboard | AllevApp" }
        Page { title: "Dashboard", {content} }
    )
}

#[component]
fn StatCard(label: &'static str, value: u64, to: Route) -> Element {
    rsx!(
        Link { to, class: "stat",
            div { class: "stat-title", "{label}" }
            div { class: "stat-value", "{value}" }
        }
    )
}
