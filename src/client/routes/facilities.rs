use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{
            DateField, ErrorAlert, FacetChecks, FacetSelect, MaintenanceBadge, Page, SearchInput,
            SelectField, StatusBadge, TextArea, TextField,
        },
        util::{api, form, options},
    },
    model::{
        equipment::AssetStatus,
        facility::{FacilityDto, FacilityRequest},
        farm::FarmDto,
        filter::Filter,
        maintenance::MaintenanceStatus,
    },
};

#[component]
pub fn Facilities() -> Element {
    let mut facilities =
        use_resource(|| async move { api::get::<Vec<FacilityDto>>("/api/facilities").await });
    let farms = use_resource(|| async move { api::get::<Vec<FarmDto>>("/api/farms").await });
    let filter = use_signal(Filter::new);
    let mut editing = use_signal(|| None::<Option<i32>>);
    let mut error = use_signal(|| None::<String>);

    let mut farm_id = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut facility_type = use_signal(String::new);
    let mut status = use_signal(|| AssetStatus::Operational.to_string());
    let mut last_maintenance = use_signal(String::new);
    let mut interval_days = use_signal(String::new);
    let mut notes = use_signal(String::new);

    let mut open = move |facility: Option<FacilityDto>| {
        farm_id.set(facility.as_ref().map(|f| f.farm_id.to_string()).unwrap_or_default());
        name.set(facility.as_ref().map(|f| f.name.clone()).unwrap_or_default());
        facility_type.set(
            facility
                .as_ref()
                .map(|f| f.facility_type.clone())
                .unwrap_or_default(),
        );
        status.set(
            facility
                .as_ref()
                .map(|f| f.status)
                .unwrap_or(AssetStatus::Operational)
                .to_string(),
        );
        last_maintenance.set(form::date_input(facility.as_ref().and_then(|f| f.last_maintenance)));
        interval_days.set(
            facility
                .as_ref()
                .and_then(|f| f.maintenance_interval_days)
                .map(|days| days.to_string())
                .unwrap_or_default(),
        );
        notes.set(facility.as_ref().map(|f| form::text(&f.notes)).unwrap_or_default());
        editing.set(Some(facility.map(|f| f.id)));
    };

    let request = move || -> Result<FacilityRequest, String> {
        Ok(FacilityRequest {
            farm_id: form::required_id("Farm", &farm_id.read())?,
            name: name.read().trim().to_string(),
            facility_type: facility_type.read().trim().to_string(),
            status: status
                .read()
                .parse::<AssetStatus>()
                .map_err(|e| e.to_string())?,
            last_maintenance: form::date("Last maintenance", &last_maintenance.read())?,
            maintenance_interval_days: form::whole_number(
                "Maintenance interval",
                &interval_days.read(),
            )?,
            notes: form::optional(&notes.read()),
        })
    };

    let save = move |_| async move {
        let Some(id) = editing() else {
            return;
        };
        let request = match request() {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };

        let result = match id {
            Some(id) => {
                api::put::<_, FacilityDto>(&format!("/api/facilities/{}", id), &request).await
            }
            None => api::post::<_, FacilityDto>("/api/facilities", &request).await,
        };

        match result {
            Ok(_) => {
                editing.set(None);
                facilities.restart();
            }
            Err(e) => error.set(Some(e)),
        }
    };

    let remove = move |id: i32| async move {
        match api::delete(&format!("/api/facilities/{}", id)).await {
            Ok(()) => facilities.restart(),
            Err(e) => error.set(Some(e)),
        }
    };

    let farm_options = match &*farms.read() {
        Some(Ok(farms)) => options::farms(farms),
        _ => Vec::new(),
    };
    let all = match &*facilities.read() {
        Some(Ok(items)) => items.clone(),
        Some(Err(e)) => {
            return rsx!(Page { title: "Facilities", div { role: "alert", class: "alert alert-error", "{e}" } })
        }
        None => Vec::new(),
    };
    let type_options = options::distinct(all.iter().map(|f| f.facility_type.as_str()));
    let rows = filter.read().apply(all);

    rsx!(
        Title { "Facilities | AllevApp" }
        Page { title: "Facilities",
            ErrorAlert { message: error }
            div { class: "flex flex-wrap gap-2 items-center",
                SearchInput { filter }
                FacetSelect { filter, facet: "farm_id", label: "farms", options: farm_options.clone() }
                FacetSelect { filter, facet: "facility_type", label: "types", options: type_options }
                button { class: "btn btn-primary ml-auto", onclick: move |_| open(None), "New facility" }
            }
            FacetChecks { filter, facet: "status", label: "Status", options: options::variants(AssetStatus::ALL) }
            FacetChecks { filter, facet: "maintenance_status", label: "Maintenance", options: options::variants(MaintenanceStatus::ALL) }
            if editing().is_some() {
                div { class: "card shadow-sm",
                    div { class: "card-body grid grid-cols-1 md:grid-cols-2 gap-3",
                        SelectField { label: "Farm", value: farm_id, options: farm_options, blank: "Select farm" }
                        TextField { label: "Name", value: name }
                        TextField { label: "Type", value: facility_type, placeholder: "barn, silo, manure tank…" }
                        SelectField { label: "Status", value: status, options: options::variants(AssetStatus::ALL) }
                        DateField { label: "Last maintenance", value: last_maintenance }
                        TextField { label: "Maintenance interval (days)", value: interval_days, input_type: "number" }
                        TextArea { label: "Notes", value: notes }
                        div { class: "card-actions md:col-span-2",
                            button { class: "btn btn-primary", onclick: save, "Save" }
                            button { class: "btn btn-ghost", onclick: move |_| editing.set(None), "Cancel" }
                        }
                    }
                }
            }
            div { class: "overflow-x-auto",
                table { class: "table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Farm" }
                            th { "Type" }
                            th { "Status" }
                            th { "Next maintenance" }
                            th { "Maintenance" }
                            th {}
                        }
                    }
                    tbody {
                        for facility in rows {
                            tr { key: "{facility.id}",
                                td { "{facility.name}" }
                                td { {form::text(&facility.farm_name)} }
                                td { "{facility.facility_type}" }
                                td { StatusBadge { value: facility.status.to_string() } }
                                td { {form::date_input(facility.next_maintenance)} }
                                td { MaintenanceBadge { status: facility.maintenance_status } }
                                td { class: "flex gap-2 justify-end",
                                    button {
                                        class: "btn btn-sm",
                                        onclick: {
                                            let facility = facility.clone();
                                            move |_| open(Some(facility.clone()))
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-sm btn-error btn-outline",
                                        onclick: move |_| remove(facility.id),
                                        "Delete"
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
