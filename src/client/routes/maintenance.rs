use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorAlert, FacetChecks, FacetSelect, MaintenanceBadge, Page, SearchInput},
        util::{api, options},
    },
    model::{
        farm::FarmDto,
        filter::Filter,
        maintenance::{
            AssetKind, CalendarEventDto, CalendarEventRequest, MaintenanceItemDto,
            MaintenanceStatus, DEFAULT_CALENDAR_WINDOW_DAYS,
        },
    },
};

const WINDOWS: [i64; 4] = [7, 30, 90, 365];

#[component]
pub fn Maintenance() -> Element {
    let mut days = use_signal(|| DEFAULT_CALENDAR_WINDOW_DAYS);
    let items = use_resource(move || async move {
        api::get::<Vec<MaintenanceItemDto>>(&format!("/api/maintenance?days={}", days())).await
    });
    let farms = use_resource(|| async move { api::get::<Vec<FarmDto>>("/api/farms").await });
    let filter = use_signal(Filter::new);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);

    let add_to_calendar = move |item: MaintenanceItemDto| async move {
        let request = CalendarEventRequest {
            asset_kind: item.asset_kind,
            asset_id: item.asset_id,
        };

        match api::post::<_, CalendarEventDto>("/api/maintenance/calendar-event", &request).await {
            Ok(event) => notice.set(Some(format!(
                "Added {} on {} to the calendar",
                item.name, event.due_date
            ))),
            Err(e) => error.set(Some(e)),
        }
    };

    let farm_options = match &*farms.read() {
        Some(Ok(farms)) => options::farms(farms),
        _ => Vec::new(),
    };
    let rows = match &*items.read() {
        Some(Ok(items)) => filter.read().apply(items.clone()),
        Some(Err(e)) => {
            return rsx!(Page { title: "Maintenance", div { role: "alert", class: "alert alert-error", "{e}" } })
        }
        None => Vec::new(),
    };

    rsx!(
        Title { "Maintenance | AllevApp" }
        Page { title: "Maintenance",
            ErrorAlert { message: error }
            if let Some(message) = notice() {
                div { role: "alert", class: "alert alert-success",
                    span { "{message}" }
                    button { class: "btn btn-sm btn-ghost", onclick: move |_| notice.set(None), "Dismiss" }
                }
            }
            div { class: "flex flex-wrap gap-2 items-center",
                SearchInput { filter }
                FacetSelect { filter, facet: "farm_id", label: "farms", options: farm_options }
                div { class: "join ml-auto",
                    for window in WINDOWS {
                        button {
                            class: if days() == window { "btn join-item btn-active" } else { "btn join-item" },
                            onclick: move |_| days.set(window),
                            "{window} days"
                        }
                    }
                }
            }
            FacetChecks { filter, facet: "asset_kind", label: "Asset", options: options::variants(AssetKind::ALL) }
            FacetChecks { filter, facet: "status", label: "Status", options: options::variants(MaintenanceStatus::ALL) }
            if rows.is_empty() {
                p { class: "opacity-60", "Nothing due in the next {days} days." }
            }
            div { class: "overflow-x-auto",
                table { class: "table",
                    thead {
                        tr {
                            th { "Due" }
                            th { "Asset" }
                            th { "Farm" }
                            th { "Last maintenance" }
                            th { "Interval" }
                            th { "Status" }
                            th {}
                        }
                    }
                    tbody {
                        for item in rows {
                            tr { key: "{item.asset_kind}-{item.asset_id}",
                                td {
                                    div { "{item.next_due}" }
                                    div { class: "text-xs opacity-60", {due_in(item.days_until_due)} }
                                }
                                td {
                                    div { class: "font-semibold", "{item.name}" }
                                    div { class: "text-xs opacity-60", "{item.asset_kind}" }
                                }
                                td { {item.farm_name.clone().unwrap_or_default()} }
                                td { "{item.last_maintenance}" }
                                td { "{item.interval_days} days" }
                                td { MaintenanceBadge { status: item.status } }
                                td { class: "text-right",
                                    button {
                                        class: "btn btn-sm",
                                        onclick: {
                                            let item = item.clone();
                                            move |_| add_to_calendar(item.clone())
                                        },
                                        "Add to calendar"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

fn due_in(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        d if d < 0 => format!("{} days overdue", -d),
        d => format!("in {} days", d),
    }
}
