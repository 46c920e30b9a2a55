use dioxus::prelude::*;

use crate::model::maintenance::MaintenanceStatus;

#[component]
pub fn MaintenanceBadge(status: MaintenanceStatus) -> Element {
    let (class, label) = match status {
        MaintenanceStatus::Unscheduled => ("badge-ghost", "Unscheduled"),
        MaintenanceStatus::Ok => ("badge-success", "OK"),
        MaintenanceStatus::DueSoon => ("badge-warning", "Due soon"),
        MaintenanceStatus::Overdue => ("badge-error", "Overdue"),
    };

    rsx!(span { class: "badge {class}", "{label}" })
}

/// Neutral badge for a status value shown as stored, e.g. `in_progress` as "in progress"
#[component]
pub fn StatusBadge(value: String) -> Element {
    let label = value.replace('_', " ");

    rsx!(span { class: "badge badge-outline", "{label}" })
}
