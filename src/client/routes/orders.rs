use chrono::Local;
use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{
            DateField, ErrorAlert, FacetSelect, Page, SearchInput, SelectField, TextArea,
            TextField,
        },
        util::{api, form, options},
    },
    model::{
        farm::FarmDto,
        filter::Filter,
        order::{format_amount, OrderDto, OrderRequest},
        quote::QuoteDto,
        supplier::SupplierDto,
    },
};

/// Orders screen; `quote` preselects a quote for a new order, as linked from the quotes list
#[component]
pub fn Orders(quote: String) -> Element {
    let mut orders = use_resource(|| async move { api::get::<Vec<OrderDto>>("/api/orders").await });
    let quotes = use_resource(|| async move { api::get::<Vec<QuoteDto>>("/api/quotes").await });
    let farms = use_resource(|| async move { api::get::<Vec<FarmDto>>("/api/farms").await });
    let suppliers =
        use_resource(|| async move { api::get::<Vec<SupplierDto>>("/api/suppliers").await });
    let filter = use_signal(Filter::new);
    let preselected = form::id(&quote);
    let mut editing = use_signal(move || preselected.map(|_| None::<i32>));
    let mut error = use_signal(|| None::<String>);

    let mut quote_id = use_signal(move || preselected.map(|id| id.to_string()).unwrap_or_default());
    let mut order_number = use_signal(String::new);
    let mut order_date = use_signal(|| Local::now().date_naive().to_string());
    let mut delivery_date = use_signal(String::new);
    let mut delivery_address = use_signal(String::new);
    let mut total = use_signal(String::new);
    let mut currency = use_signal(|| "NOK".to_string());
    let mut notes = use_signal(String::new);

    // Picking a quote for a new order carries over its amount
    use_effect(move || {
        let selected = quote_id.read().clone();
        if (*editing.peek()).flatten().is_some() || !total.peek().is_empty() {
            return;
        }
        if let Some(Ok(quotes)) = &*quotes.read() {
            if let Some(quote) = quotes.iter().find(|q| q.id.to_string() == selected) {
                total.set(form::amount_input(quote.amount_minor));
                currency.set(quote.currency.clone());
            }
        }
    });

    let mut open = move |order: Option<OrderDto>| {
        let id = order.as_ref().map(|o| o.id);
        quote_id.set(order.as_ref().map(|o| o.quote_id.to_string()).unwrap_or_default());
        order_number.set(order.as_ref().map(|o| o.order_number.clone()).unwrap_or_default());
        order_date.set(
            order
                .as_ref()
                .map(|o| o.order_date)
                .unwrap_or_else(|| Local::now().date_naive())
                .to_string(),
        );
        delivery_date.set(form::date_input(order.as_ref().and_then(|o| o.delivery_date)));
        delivery_address.set(
            order
                .as_ref()
                .map(|o| form::text(&o.delivery_address))
                .unwrap_or_default(),
        );
        total.set(form::amount_input(order.as_ref().map(|o| o.total_amount_minor)));
        currency.set(
            order
                .as_ref()
                .map(|o| o.currency.clone())
                .unwrap_or_else(|| "NOK".to_string()),
        );
        notes.set(order.as_ref().map(|o| form::text(&o.notes)).unwrap_or_default());
        editing.set(Some(id));
    };

    let request = move || -> Result<OrderRequest, String> {
        Ok(OrderRequest {
            quote_id: form::required_id("Quote", &quote_id.read())?,
            order_number: order_number.read().trim().to_string(),
            order_date: form::date("Order date", &order_date.read())?
                .ok_or_else(|| "Order date is required".to_string())?,
            delivery_date: form::date("Delivery date", &delivery_date.read())?,
            delivery_address: form::optional(&delivery_address.read()),
            total_amount_minor: form::amount("Total", &total.read())?
                .ok_or_else(|| "Total is required".to_string())?,
            currency: currency.read().trim().to_string(),
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
            Some(id) => api::put::<_, OrderDto>(&format!("/api/orders/{}", id), &request).await,
            None => api::post::<_, OrderDto>("/api/orders", &request).await,
        };

        match result {
            Ok(_) => {
                editing.set(None);
                orders.restart();
            }
            Err(e) => error.set(Some(e)),
        }
    };

    let remove = move |id: i32| async move {
        match api::delete(&format!("/api/orders/{}", id)).await {
            Ok(()) => orders.restart(),
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
    // A new order can only be placed against a quote still awaiting a decision
    let quote_options: Vec<(String, String)> = match &*quotes.read() {
        Some(Ok(quotes)) => quotes
            .iter()
            .filter(|q| q.status.is_pending() || q.id.to_string() == *quote_id.read())
            .map(|q| {
                let supplier = q.supplier_name.as_deref().unwrap_or("unknown supplier");
                (q.id.to_string(), format!("{} ({})", q.title, supplier))
            })
            .collect(),
        _ => Vec::new(),
    };
    let rows = match &*orders.read() {
        Some(Ok(items)) => filter.read().apply(items.clone()),
        Some(Err(e)) => {
            return rsx!(Page { title: "Orders", div { role: "alert", class: "alert alert-error", "{e}" } })
        }
        None => Vec::new(),
    };

    rsx!(
        Title { "Orders | AllevApp" }
        Page { title: "Orders",
            ErrorAlert { message: error }
            div { class: "flex flex-wrap gap-2 items-center",
                SearchInput { filter }
                FacetSelect { filter, facet: "farm_id", label: "farms", options: farm_options }
                FacetSelect { filter, facet: "supplier_id", label: "suppliers", options: supplier_options }
                button { class: "btn btn-primary ml-auto", onclick: move |_| open(None), "New order" }
            }
            if editing().is_some() {
                div { class: "card shadow-sm",
                    div { class: "card-body grid grid-cols-1 md:grid-cols-2 gap-3",
                        SelectField { label: "Quote", value: quote_id, options: quote_options, blank: "Select quote" }
                        TextField { label: "Order number", value: order_number }
                        DateField { label: "Order date", value: order_date }
                        DateField { label: "Delivery date", value: delivery_date }
                        TextField { label: "Total", value: total, placeholder: "0.00" }
                        TextField { label: "Currency", value: currency }
                        TextArea { label: "Delivery address", value: delivery_address }
                        TextArea { label: "Notes", value: notes }
                        p { class: "text-sm opacity-70 md:col-span-2",
                            "Saving an order marks its quote as accepted."
                        }
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
                            th { "Order" }
                            th { "Quote" }
                            th { "Supplier" }
                            th { "Ordered" }
                            th { "Delivery" }
                            th { class: "text-right", "Total" }
                            th {}
                        }
                    }
                    tbody {
                        for order in rows {
                            tr { key: "{order.id}",
                                td { class: "font-semibold", "{order.order_number}" }
                                td { {form::text(&order.quote_title)} }
                                td { {form::text(&order.supplier_name)} }
                                td { "{order.order_date}" }
                                td { {form::date_input(order.delivery_date)} }
                                td { class: "text-right",
                                    {format_amount(order.total_amount_minor, &order.currency)}
                                }
                                td { class: "flex gap-2 justify-end",
                                    a {
                                        class: "btn btn-sm btn-outline",
                                        href: "/api/orders/{order.id}/document",
                                        "Confirmation"
                                    }
                                    button {
                                        class: "btn btn-sm",
                                        onclick: {
                                            let order = order.clone();
                                            move |_| open(Some(order.clone()))
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-sm btn-error btn-outline",
                                        onclick: move |_| remove(order.id),
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
