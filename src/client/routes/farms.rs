use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorAlert, Page, TextArea, TextField},
        util::{api, form},
    },
    model::farm::{FarmDto, FarmRequest},
};

#[component]
pub fn Farms() -> Element {
    let mut farms = use_resource(|| async move { api::get::<Vec<FarmDto>>("/api/farms").await });
    let mut editing = use_signal(|| None::<Option<i32>>);
    let mut error = use_signal(|| None::<String>);

    let mut name = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut company_name = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut org_number = use_signal(String::new);
    let mut notes = use_signal(String::new);

    let mut open = move |farm: Option<FarmDto>| {
        let farm_id = farm.as_ref().map(|farm| farm.id);
        name.set(farm.as_ref().map(|f| f.name.clone()).unwrap_or_default());
        location.set(farm.as_ref().map(|f| form::text(&f.location)).unwrap_or_default());
        company_name.set(farm.as_ref().map(|f| form::text(&f.company_name)).unwrap_or_default());
        address.set(farm.as_ref().map(|f| form::text(&f.address)).unwrap_or_default());
        phone.set(farm.as_ref().map(|f| form::text(&f.phone)).unwrap_or_default());
        email.set(farm.as_ref().map(|f| form::text(&f.email)).unwrap_or_default());
        org_number.set(farm.as_ref().map(|f| form::text(&f.org_number)).unwrap_or_default());
        notes.set(farm.as_ref().map(|f| form::text(&f.notes)).unwrap_or_default());
        editing.set(Some(farm_id));
    };

    let save = move |_| async move {
        let Some(farm_id) = editing() else {
            return;
        };
        let request = FarmRequest {
            name: name.read().trim().to_string(),
            location: form::optional(&location.read()),
            company_name: form::optional(&company_name.read()),
            address: form::optional(&address.read()),
            phone: form::optional(&phone.read()),
            email: form::optional(&email.read()),
            org_number: form::optional(&org_number.read()),
            notes: form::optional(&notes.read()),
        };

        let result = match farm_id {
            Some(id) => api::put::<_, FarmDto>(&format!("/api/farms/{}", id), &request).await,
            None => api::post::<_, FarmDto>("/api/farms", &request).await,
        };

        match result {
            Ok(_) => {
                editing.set(None);
                farms.restart();
            }
            Err(e) => error.set(Some(e)),
        }
    };

    let remove = move |id: i32| async move {
        match api::delete(&format!("/api/farms/{}", id)).await {
            Ok(()) => farms.restart(),
            Err(e) => error.set(Some(e)),
        }
    };

    let rows = match &*farms.read() {
        Some(Ok(farms)) => farms.clone(),
        Some(Err(e)) => {
            return rsx!(Page { title: "Farms", div { role: "alert", class: "alert alert-error", "{e}" } })
        }
        None => Vec::new(),
    };

    rsx!(
        Title { "Farms | AllevApp" }
        Page { title: "Farms",
            ErrorAlert { message: error }
            div {
                button { class: "btn btn-primary", onclick: move |_| open(None), "New farm" }
            }
            if editing().is_some() {
                div { class: "card shadow-sm",
                    div { class: "card-body grid grid-cols-1 md:grid-cols-2 gap-3",
                        TextField { label: "Name", value: name }
                        TextField { label: "Location", value: location }
                        TextField { label: "Company name (letterhead)", value: company_name }
                        TextField { label: "Address", value: address }
                        TextField { label: "Phone", value: phone }
                        TextField { label: "Email", value: email, input_type: "email" }
                        TextField { label: "Organisation number", value: org_number }
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
                            th { "Location" }
                            th { "Company" }
                            th { "Contact" }
                            th {}
                        }
                    }
                    tbody {
                        for farm in rows {
                            tr { key: "{farm.id}",
                                td { "{farm.name}" }
                                td { {form::text(&farm.location)} }
                                td { {form::text(&farm.company_name)} }
                                td { {form::text(&farm.email)} " " {form::text(&farm.phone)} }
                                td { class: "flex gap-2 justify-end",
                                    button {
                                        class: "btn btn-sm",
                                        onclick: {
                                            let farm = farm.clone();
                                            move |_| open(Some(farm.clone()))
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-sm btn-error btn-outline",
                                        onclick: move |_| remove(farm.id),
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
