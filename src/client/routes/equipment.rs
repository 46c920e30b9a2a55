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
        equipment::{AssetStatus, EquipmentDto, EquipmentRequest},
        farm::FarmDto,
        filter::Filter,
        maintenance::MaintenanceStatus,
    },
};

#[component]
pub fn Equipment() -> Element {
    let mut equipment =
        use_resource(|| async move { api::get::<Vec<EquipmentDto>>("/api/equipment").await });
    let farms = use_resource(|| async move { api::get::<Vec<FarmDto>>("/api/farms").await });
    let filter = use_signal(Filter::new);
    let mut editing = use_signal(|| None::<Option<i32>>);
    let mut error = use_signal(|| None::<String>);

    let mut farm_id = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut manufacturer = use_signal(String::new);
    let mut model = use_signal(String::new);
    let mut serial_number = use_signal(String::new);
    let mut status = use_signal(|| AssetStatus::Operational.to_string());
    let mut last_maintenance = use_signal(String::new);
    let mut interval_days = use_signal(String::new);
    let mut notes = use_signal(String::new);

    let mut open = move |item: Option<EquipmentDto>| {
        let Some(item) = item else {
            let fields = [
                farm_id,
                name,
                category,
                manufacturer,
                model,
                serial_number,
                last_maintenance,
                interval_days,
                notes,
            ];
            for mut field in fields {
                field.set(String::new());
            }
            status.set(AssetStatus::Operational.to_string());
            editing.set(Some(None));
            return;
        };

        farm_id.set(item.farm_id.to_string());
        name.set(item.name.clone());
        category.set(item.category.clone());
        manufacturer.set(form::text(&item.manufacturer));
        model.set(form::text(&item.model));
        serial_number.set(form::text(&item.serial_number));
        status.set(item.status.to_string());
        last_maintenance.set(form::date_input(item.last_maintenance));
        interval_days.set(
            item.maintenance_interval_days
                .map(|days| days.to_string())
                .unwrap_or_default(),
        );
        notes.set(form::text(&item.notes));
        editing.set(Some(Some(item.id)));
    };

    let request = move || -> Result<EquipmentRequest, String> {
        Ok(EquipmentRequest {
            farm_id: form::required_id("Farm", &farm_id.read())?,
            name: name.read().trim().to_string(),
            category: category.read().trim().to_string(),
            manufacturer: form::optional(&manufacturer.read()),
            model: form::optional(&model.read()),
            serial_number: form::optional(&serial_number.read()),
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
                api::put::<_, EquipmentDto>(&format!("/api/equipment/{}", id), &request).await
            }
            None => api::post::<_, EquipmentDto>("/api/equipment", &request).await,
        };

        match result {
            Ok(_) => {
                editing.set(None);
                equipment.restart();
            }
            Err(e) => error.set(Some(e)),
        }
    };

    let remove = move |id: i32| async move {
        match api::delete(&format!("/api/equipment/{}", id)).await {
            Ok(()) => equipment.restart(),
            Err(e) => error.set(Some(e)),
        }
    };

    let farm_options = match &*farms.read() {
        Some(Ok(farms)) => options::farms(farms),
        _ => Vec::new(),
    };
    let all = match &*equipment.read() {
        Some(Ok(items)) => items.clone(),
        Some(Err(e)) => {
            return rsx!(Page { title: "Equipment", div { role: "alert", class: "alert alert-error", "{e}" } })
        }
        None => Vec::new(),
    };
    let category_options = options::distinct(all.iter().map(|item| item.category.as_str()));
    let rows = filter.read().apply(all);

    rsx!(
        Title { "Equipment | AllevApp" }
        Page { title: "Equipment",
            ErrorAlert { message: error }
            div { class: "flex flex-wrap gap-2 items-center",
                SearchInput { filter }
                FacetSelect { filter, facet: "farm_id", label: "farms", options: farm_options.clone() }
                FacetSelect { filter, facet: "category", label: "categories", options: category_options }
                button { class: "btn btn-primary ml-auto", onclick: move |_| open(None), "New equipment" }
            }
            FacetChecks { filter, facet: "status", label: "Status", options: options::variants(AssetStatus::ALL) }
            FacetChecks { filter, facet: "maintenance_status", label: "Maintenance", options: options::variants(MaintenanceStatus::ALL) }
            if editing().is_some() {
                div { class: "card shadow-sm",
                    div { class: "card-body grid grid-cols-1 md:grid-cols-2 gap-3",
                        SelectField { label: "Farm", value: farm_id, options: farm_options, blank: "Select farm" }
                        TextField { label: "Name", value: name }
                        TextField { label: "Category", value: category }
                        SelectField { label: "Status", value: status, options: options::variants(AssetStatus::ALL) }
                        TextField { label: "Manufacturer", value: manufacturer }
                        TextField { label: "Model", value: model }
                        TextField { label: "Serial number", value: serial_number }
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
                            th { "Category" }
                            th { "Status" }
                            th { "Next maintenance" }
                            th { "Maintenance" }
                            th {}
                        }
                    }
                    tbody {
                        for item in rows {
                            tr { key: "{item.id}",
                                td {
                                    div { class: "font-semibold", "{item.name}" }
                                    div { class: "text-xs opacity-60",
                                        {[&item.manufacturer, &item.model].into_iter().flatten().cloned().collect::<Vec<_>>().join(" ")}
                                    }
                                }
                                td { {form::text(&item.farm_name)} }
                                td { "{item.category}" }
                                td { StatusBadge { value: item.status.to_string() } }
                                td { {form::date_input(item.next_maintenance)} }
                                td { MaintenanceBadge { status: item.maintenance_status } }
                                td { class: "flex gap-2 justify-end",
                                    button {
                                        class: "btn btn-sm",
                                        onclick: {
                                            let item = item.clone();
                                            move |_| open(Some(item.clone()))
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-sm btn-error btn-outline",
                                        onclick: move |_| remove(item.id),
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
