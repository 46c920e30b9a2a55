use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{
            DateField, ErrorAlert, FacetChecks, FacetSelect, Page, SearchInput, SelectField,
            StatusBadge, TextArea, TextField,
        },
        util::{api, form, options},
    },
    model::{
        farm::FarmDto,
        filter::Filter,
        order::format_amount,
        project::{ProjectDto, ProjectRequest, ProjectStatus},
    },
};

/// Budgets are entered in the farm's home currency
const BUDGET_CURRENCY: &str = "NOK";

#[component]
pub fn Projects() -> Element {
    let mut projects =
        use_resource(|| async move { api::get::<Vec<ProjectDto>>("/api/projects").await });
    let farms = use_resource(|| async move { api::get::<Vec<FarmDto>>("/api/farms").await });
    let filter = use_signal(Filter::new);
    let mut editing = use_signal(|| None::<Option<i32>>);
    let mut error = use_signal(|| None::<String>);

    let mut farm_id = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut status = use_signal(|| ProjectStatus::Planned.to_string());
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut budget = use_signal(String::new);

    let mut open = move |project: Option<ProjectDto>| {
        let id = project.as_ref().map(|p| p.id);
        farm_id.set(project.as_ref().map(|p| p.farm_id.to_string()).unwrap_or_default());
        name.set(project.as_ref().map(|p| p.name.clone()).unwrap_or_default());
        description.set(project.as_ref().map(|p| form::text(&p.description)).unwrap_or_default());
        status.set(
            project
                .as_ref()
                .map(|p| p.status)
                .unwrap_or(ProjectStatus::Planned)
                .to_string(),
        );
        start_date.set(form::date_input(project.as_ref().and_then(|p| p.start_date)));
        end_date.set(form::date_input(project.as_ref().and_then(|p| p.end_date)));
        budget.set(form::amount_input(project.as_ref().and_then(|p| p.budget_minor)));
        editing.set(Some(id));
    };

    let request = move || -> Result<ProjectRequest, String> {
        Ok(ProjectRequest {
            farm_id: form::required_id("Farm", &farm_id.read())?,
            name: name.read().trim().to_string(),
            description: form::optional(&description.read()),
            status: status
                .read()
                .parse::<ProjectStatus>()
                .map_err(|e| e.to_string())?,
            start_date: form::date("Start date", &start_date.read())?,
            end_date: form::date("End date", &end_date.read())?,
            budget_minor: form::amount("Budget", &budget.read())?,
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
            Some(id) => api::put::<_, ProjectDto>(&format!("/api/projects/{}", id), &request).await,
            None => api::post::<_, ProjectDto>("/api/projects", &request).await,
        };

        match result {
            Ok(_) => {
                editing.set(None);
                projects.restart();
            }
            Err(e) => error.set(Some(e)),
        }
    };

    let remove = move |id: i32| async move {
        match api::delete(&format!("/api/projects/{}", id)).await {
            Ok(()) => projects.restart(),
            Err(e) => error.set(Some(e)),
        }
    };

    let farm_options = match &*farms.read() {
        Some(Ok(farms)) => options::farms(farms),
        _ => Vec::new(),
    };
    let rows = match &*projects.read() {
        Some(Ok(items)) => filter.read().apply(items.clone()),
        Some(Err(e)) => {
            return rsx!(Page { title: "Projects", div { role: "alert", class: "alert alert-error", "{e}" } })
        }
        None => Vec::new(),
    };

    rsx!(
        Title { "Projects | AllevApp" }
        Page { title: "Projects",
            ErrorAlert { message: error }
            div { class: "flex flex-wrap gap-2 items-center",
                SearchInput { filter }
                FacetSelect { filter, facet: "farm_id", label: "farms", options: farm_options.clone() }
                button { class: "btn btn-primary ml-auto", onclick: move |_| open(None), "New project" }
            }
            FacetChecks { filter, facet: "status", label: "Status", options: options::variants(ProjectStatus::ALL) }
            if editing().is_some() {
                div { class: "card shadow-sm",
                    div { class: "card-body grid grid-cols-1 md:grid-cols-2 gap-3",
                        SelectField { label: "Farm", value: farm_id, options: farm_options, blank: "Select farm" }
                        TextField { label: "Name", value: name }
                        SelectField { label: "Status", value: status, options: options::variants(ProjectStatus::ALL) }
                        TextField { label: "Budget (NOK)", value: budget, placeholder: "0.00" }
                        DateField { label: "Start date", value: start_date }
                        DateField { label: "End date", value: end_date }
                        TextArea { label: "Description", value: description }
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
                            th { "Status" }
                            th { "Period" }
                            th { class: "text-right", "Budget" }
                            th {}
                        }
                    }
                    tbody {
                        for project in rows {
                            tr { key: "{project.id}",
                                td {
                                    div { class: "font-semibold", "{project.name}" }
                                    div { class: "text-xs opacity-60", {form::text(&project.description)} }
                                }
                                td { {form::text(&project.farm_name)} }
                                td { StatusBadge { value: project.status.to_string() } }
                                td {
                                    {format!(
                                        "{} to {}",
                                        form::date_input(project.start_date),
                                        form::date_input(project.end_date)
                                    )}
                                }
                                td { class: "text-right",
                                    {project.budget_minor.map(|budget| format_amount(budget, BUDGET_CURRENCY)).unwrap_or_default()}
                                }
                                td { class: "flex gap-2 justify-end",
                                    button {
                                        class: "btn btn-sm",
                                        onclick: {
                                            let project = project.clone();
                                            move |_| open(Some(project.clone()))
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-sm btn-error btn-outline",
                                        onclick: move |_| remove(project.id),
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
