use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{
            DateField, ErrorAlert, FacetChecks, FacetSelect, Page, SearchInput, SelectField,
            StatusBadge, TextArea, TextField,
        },
        router::Route,
        util::{api, form, options},
    },
    model::{
        farm::FarmDto,
        filter::Filter,
        order::format_amount,
        project::ProjectDto,
        quote::{QuoteDto, QuoteRequest, QuoteStatus},
        supplier::SupplierDto,
    },
};

#[component]
pub fn Quotes() -> Element {
    let mut quotes = use_resource(|| async move { api::get::<Vec<QuoteDto>>("/api/quotes").await });
    let farms = use_resource(|| async move { api::get::<Vec<FarmDto>>("/api/farms").await });
    let suppliers =
        use_resource(|| async move { api::get::<Vec<SupplierDto>>("/api/suppliers").await });
    let projects =
        use_resource(|| async move { api::get::<Vec<ProjectDto>>("/api/projects").await });
    let filter = use_signal(Filter::new);
    let mut editing = use_signal(|| None::<Option<i32>>);
    let mut error = use_signal(|| None::<String>);
    let nav = use_navigator();

    let mut supplier_id = use_signal(String::new);
    let mut farm_id = use_signal(String::new);
    let mut project_id = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut amount = use_signal(String::new);
    let mut currency = use_signal(|| "NOK".to_string());
    let mut status = use_signal(|| QuoteStatus::Draft.to_string());
    let mut valid_until = use_signal(String::new);

    let mut open = move |quote: Option<QuoteDto>| {
        let id = quote.as_ref().map(|q| q.id);
        supplier_id.set(quote.as_ref().map(|q| q.supplier_id.to_string()).unwrap_or_default());
        farm_id.set(quote.as_ref().map(|q| q.farm_id.to_string()).unwrap_or_default());
        project_id.set(
            quote
                .as_ref()
                .and_then(|q| q.project_id)
                .map(|id| id.to_string())
                .unwrap_or_default(),
        );
        title.set(quote.as_ref().map(|q| q.title.clone()).unwrap_or_default());
        description.set(quote.as_ref().map(|q| form::text(&q.description)).unwrap_or_default());
        amount.set(form::amount_input(quote.as_ref().and_then(|q| q.amount_minor)));
        currency.set(
            quote
                .as_ref()
                .map(|q| q.currency.clone())
                .unwrap_or_else(|| "NOK".to_string()),
        );
        status.set(
            quote
                .as_ref()
                .map(|q| q.status)
                .unwrap_or(QuoteStatus::Draft)
                .to_string(),
        );
        valid_until.set(form::date_input(quote.as_ref().and_then(|q| q.valid_until)));
        editing.set(Some(id));
    };

    let request = move || -> Result<QuoteRequest, String> {
        Ok(QuoteRequest {
            supplier_id: form::required_id("Supplier", &supplier_id.read())?,
            farm_id: form::required_id("Farm", &farm_id.read())?,
            project_id: form::id(&project_id.read()),
            title: title.read().trim().to_string(),
            description: form::optional(&description.read()),
            amount_minor: form::amount("Amount", &amount.read())?,
            currency: currency.read().trim().to_string(),
            status: status
                .read()
                .parse::<QuoteStatus>()
                .map_err(|e| e.to_string())?,
            valid_until: form::date("Valid until", &valid_until.read())?,
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
            Some(id) => api::put::<_, QuoteDto>(&format!("/api/quotes/{}", id), &request).await,
            None => api::post::<_, QuoteDto>("/api/quotes", &request).await,
        };

        match result {
            Ok(_) => {
                editing.set(None);
                quotes.restart();
            }
            Err(e) => error.set(Some(e)),
        }
    };

    let send = move |id: i32| async move {
        match api::post_action::<QuoteDto>(&format!("/api/quotes/{}/send", id)).await {
            Ok(_) => quotes.restart(),
            Err(e) => error.set(Some(e)),
        }
    };

    let remove = move |id: i32| async move {
        match api::delete(&format!("/api/quotes/{}", id)).await {
            Ok(()) => quotes.restart(),
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
    let project_options = match &*projects.read() {
        Some(Ok(projects)) => options::projects(projects),
        _ => Vec::new(),
    };
    let rows = match &*quotes.read() {
        Some(Ok(items)) => filter.read().apply(items.clone()),
        Some(Err(e)) => {
            return rsx!(Page { title: "Quotes", div { role: "alert", class: "alert alert-error", "{e}" } })
        }
        None => Vec::new(),
    };

    rsx!(
        Title { "Quotes | AllevApp" }
        Page { title: "Quotes",
            ErrorAlert { message: error }
            div { class: "flex flex-wrap gap-2 items-center",
                SearchInput { filter }
                FacetSelect { filter, facet: "farm_id", label: "farms", options: farm_options.clone() }
                FacetSelect { filter, facet: "supplier_id", label: "suppliers", options: supplier_options.clone() }
                FacetSelect { filter, facet: "project_id", label: "projects", options: project_options.clone() }
                button { class: "btn btn-primary ml-auto", onclick: move |_| open(None), "New quote" }
            }
            FacetChecks { filter, facet: "status", label: "Status", options: options::variants(QuoteStatus::ALL) }
            if editing().is_some() {
                div { class: "card shadow-sm",
                    div { class: "card-body grid grid-cols-1 md:grid-cols-2 gap-3",
                        SelectField { label: "Supplier", value: supplier_id, options: supplier_options, blank: "Select supplier" }
                        SelectField { label: "Farm", value: farm_id, options: farm_options, blank: "Select farm" }
                        TextField { label: "Title", value: title }
                        SelectField { label: "Project", value: project_id, options: project_options, blank: "None" }
                        TextField { label: "Amount", value: amount, placeholder: "0.00" }
                        TextField { label: "Currency", value: currency }
                        SelectField { label: "Status", value: status, options: options::variants(QuoteStatus::ALL) }
                        DateField { label: "Valid until", value: valid_until }
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
                            th { "Title" }
                            th { "Supplier" }
                            th { "Farm" }
                            th { class: "text-right", "Amount" }
                            th { "Status" }
                            th { "Valid until" }
                            th {}
                        }
                    }
                    tbody {
                        for quote in rows {
                            tr { key: "{quote.id}",
                                td { "{quote.title}" }
                                td { {form::text(&quote.supplier_name)} }
                                td { {form::text(&quote.farm_name)} }
                                td { class: "text-right",
                                    {quote.amount_minor.map(|amount| format_amount(amount, &quote.currency)).unwrap_or_default()}
                                }
                                td {
                                    StatusBadge { value: quote.status.to_string() }
                                    if let Some(sent_at) = quote.sent_at {
                                        div { class: "text-xs opacity-60",
                                            {format!("sent {}", sent_at.format("%Y-%m-%d"))}
                                        }
                                    }
                                }
                                td { {form::date_input(quote.valid_until)} }
                                td { class: "flex gap-2 justify-end",
                                    if quote.status == QuoteStatus::Draft {
                                        button {
                                            class: "btn btn-sm btn-secondary",
                                            onclick: move |_| send(quote.id),
                                            "Send"
                                        }
                                    }
                                    if quote.status == QuoteStatus::Sent {
                                        button {
                                            class: "btn btn-sm btn-ghost",
                                            onclick: move |_| send(quote.id),
                                            "Resend"
                                        }
                                    }
                                    if quote.status.is_pending() {
                                        button {
                                            class: "btn btn-sm btn-accent",
                                            onclick: move |_| {
                                                nav.push(Route::Orders { quote: quote.id.to_string() });
                                            },
                                            "Order"
                                        }
                                    }
                                    button {
                                        class: "btn btn-sm",
                                        onclick: {
                                            let quote = quote.clone();
                                            move |_| open(Some(quote.clone()))
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-sm btn-error btn-outline",
                                        onclick: move |_| remove(quote.id),
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
