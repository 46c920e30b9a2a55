use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{
            ErrorAlert, FacetChecks, FacetSelect, Page, SearchInput, SelectField, StatusBadge,
            TextArea, TextField, UploadForm,
        },
        util::{api, form, options},
    },
    model::{
        equipment::EquipmentDto,
        farm::FarmDto,
        filter::Filter,
        report::{ReportDto, ReportRequest, ReportStatus, ReportUrgency},
        supplier::SupplierDto,
    },
};

#[component]
pub fn Reports() -> Element {
    let mut reports =
        use_resource(|| async move { api::get::<Vec<ReportDto>>("/api/reports").await });
    let farms = use_resource(|| async move { api::get::<Vec<FarmDto>>("/api/farms").await });
    let equipment =
        use_resource(|| async move { api::get::<Vec<EquipmentDto>>("/api/equipment").await });
    let suppliers =
        use_resource(|| async move { api::get::<Vec<SupplierDto>>("/api/suppliers").await });
    let filter = use_signal(|| {
        Filter::new()
            .with_facet("status", ReportStatus::Open.as_str())
            .with_facet("status", ReportStatus::InProgress.as_str())
    });
    let mut editing = use_signal(|| None::<Option<i32>>);
    let mut error = use_signal(|| None::<String>);

    let mut farm_id = use_signal(String::new);
    let mut equipment_id = use_signal(String::new);
    let mut supplier_id = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut urgency = use_signal(|| ReportUrgency::Medium.to_string());
    let mut status = use_signal(|| ReportStatus::Open.to_string());

    let mut open = move |report: Option<ReportDto>| {
        let id = report.as_ref().map(|r| r.id);
        farm_id.set(report.as_ref().map(|r| r.farm_id.to_string()).unwrap_or_default());
        equipment_id.set(
            report
                .as_ref()
                .and_then(|r| r.equipment_id)
                .map(|id| id.to_string())
                .unwrap_or_default(),
        );
        supplier_id.set(
            report
                .as_ref()
                .and_then(|r| r.supplier_id)
                .map(|id| id.to_string())
                .unwrap_or_default(),
        );
        title.set(report.as_ref().map(|r| r.title.clone()).unwrap_or_default());
        description.set(report.as_ref().map(|r| r.description.clone()).unwrap_or_default());
        urgency.set(
            report
                .as_ref()
                .map(|r| r.urgency)
                .unwrap_or(ReportUrgency::Medium)
                .to_string(),
        );
        status.set(
            report
                .as_ref()
                .map(|r| r.status)
                .unwrap_or(ReportStatus::Open)
                .to_string(),
        );
        editing.set(Some(id));
    };

    let request = move || -> Result<ReportRequest, String> {
        Ok(ReportRequest {
            farm_id: form::required_id("Farm", &farm_id.read())?,
            equipment_id: form::id(&equipment_id.read()),
            supplier_id: form::id(&supplier_id.read()),
            title: title.read().trim().to_string(),
            description: description.read().trim().to_string(),
            urgency: urgency
                .read()
                .parse::<ReportUrgency>()
                .map_err(|e| e.to_string())?,
            status: status
                .read()
                .parse::<ReportStatus>()
                .map_err(|e| e.to_string())?,
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
            Some(id) => api::put::<_, ReportDto>(&format!("/api/reports/{}", id), &request).await,
            None => api::post::<_, ReportDto>("/api/reports", &request).await,
        };

        match result {
            Ok(_) => {
                editing.set(None);
                reports.restart();
            }
            Err(e) => error.set(Some(e)),
        }
    };

    let remove = move |id: i32| async move {
        match api::delete(&format!("/api/reports/{}", id)).await {
            Ok(()) => reports.restart(),
            Err(e) => error.set(Some(e)),
        }
    };

    let farm_options = match &*farms.read() {
        Some(Ok(farms)) => options::farms(farms),
        _ => Vec::new(),
    };
    let supplier_options = match &*suppliers.read() {
        Some(Ok(suppliers)) => options::suppliers(suppliers),
        _ => Vec::new(),
    };
    // Only equipment on the selected farm can be reported against
    let equipment_options: Vec<(String, String)> = match &*equipment.read() {
        Some(Ok(items)) => items
            .iter()
            .filter(|item| farm_id.read().is_empty() || item.farm_id.to_string() == *farm_id.read())
            .map(|item| (item.id.to_string(), item.name.clone()))
            .collect(),
        _ => Vec::new(),
    };
    let rows = match &*reports.read() {
        Some(Ok(items)) => filter.read().apply(items.clone()),
        Some(Err(e)) => {
            return rsx!(Page { title: "Issue reports", div { role: "alert", class: "alert alert-error", "{e}" } })
        }
        None => Vec::new(),
    };

    rsx!(
        Title { "Issue reports | AllevApp" }
        Page { title: "Issue reports",
            ErrorAlert { message: error }
            div { class: "flex flex-wrap gap-2 items-center",
                SearchInput { filter }
                FacetSelect { filter, facet: "farm_id", label: "farms", options: farm_options.clone() }
                button { class: "btn btn-primary ml-auto", onclick: move |_| open(None), "New report" }
            }
            FacetChecks { filter, facet: "urgency", label: "Urgency", options: options::variants(ReportUrgency::ALL) }
            FacetChecks { filter, facet: "status", label: "Status", options: options::variants(ReportStatus::ALL) }
            if editing().is_some() {
                div { class: "card shadow-sm",
                    div { class: "card-body grid grid-cols-1 md:grid-cols-2 gap-3",
                        SelectField { label: "Farm", value: farm_id, options: farm_options, blank: "Select farm" }
                        SelectField { label: "Equipment", value: equipment_id, options: equipment_options, blank: "None" }
                        TextField { label: "Title", value: title }
                        SelectField { label: "Supplier", value: supplier_id, options: supplier_options, blank: "None" }
                        SelectField { label: "Urgency", value: urgency, options: options::variants(ReportUrgency::ALL) }
                        SelectField { label: "Status", value: status, options: options::variants(ReportStatus::ALL) }
                        TextArea { label: "Description", value: description }
                        div { class: "card-actions md:col-span-2",
                            button { class: "btn btn-primary", onclick: save, "Save" }
                            button { class: "btn btn-ghost", onclick: move |_| editing.set(None), "Cancel" }
                        }
                    }
                }
            }
            for report in rows {
                div { key: "{report.id}", class: "card card-border",
                    div { class: "card-body gap-2",
                        div { class: "flex flex-wrap items-center gap-2",
                            h2 { class: "card-title", "{report.title}" }
                            UrgencyBadge { urgency: report.urgency }
                            StatusBadge { value: report.status.to_string() }
                            span { class: "text-sm opacity-60 ml-auto",
                                {report.created_at.format("%Y-%m-%d %H:%M").to_string()}
                            }
                        }
                        div { class: "text-sm opacity-70",
                            {[&report.farm_name, &report.equipment_name].into_iter().flatten().cloned().collect::<Vec<_>>().join(" · ")}
                        }
                        p { class: "whitespace-pre-line", "{report.description}" }
                        if !report.attachments.is_empty() {
                            ul { class: "text-sm",
                                for attachment in report.attachments.iter() {
                                    li { key: "{attachment.id}",
                                        a {
                                            class: "link",
                                            href: "/api/attachments/{attachment.id}",
                                            "{attachment.file_name}"
                                        }
                                        span { class: "opacity-60", " ({attachment.size_bytes} bytes)" }
                                    }
                                }
                            }
                        }
                        UploadForm {
                            action: format!("/api/reports/{}/attachments", report.id),
                            target: "report-upload",
                            label: "Attach",
                            on_uploaded: move |_| reports.restart(),
                            span { class: "text-sm opacity-60", "Photos and files" }
                        }
                        div { class: "card-actions justify-end",
                            button {
                                class: "btn btn-sm",
                                onclick: {
                                    let report = report.clone();
                                    move |_| open(Some(report.clone()))
                                },
                                "Edit"
                            }
                            button {
                                class: "btn btn-sm btn-error btn-outline",
                                onclick: move |_| remove(report.id),
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn UrgencyBadge(urgency: ReportUrgency) -> Element {
    let class = match urgency {
        ReportUrgency::Low => "badge-ghost",
        ReportUrgency::Medium => "badge-info",
        ReportUrgency::High => "badge-warning",
        ReportUrgency::Critical => "badge-error",
    };

    rsx!(span { class: "badge {class}", "{urgency}" })
}
