use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{
            ErrorAlert, FacetSelect, Page, SearchInput, SelectField, TextField, UploadForm,
        },
        util::{api, form, options},
    },
    model::{
        document::{DocumentCategoryDto, DocumentDto, DocumentUpdateRequest},
        farm::FarmDto,
        filter::Filter,
    },
};

#[component]
pub fn Documents() -> Element {
    let mut documents =
        use_resource(|| async move { api::get::<Vec<DocumentDto>>("/api/documents").await });
    let farms = use_resource(|| async move { api::get::<Vec<FarmDto>>("/api/farms").await });
    let categories = use_resource(|| async move {
        api::get::<Vec<DocumentCategoryDto>>("/api/document-categories").await
    });
    let filter = use_signal(Filter::new);
    let mut editing = use_signal(|| None::<i32>);
    let mut error = use_signal(|| None::<String>);

    let mut title = use_signal(String::new);
    let mut farm_id = use_signal(String::new);
    let mut category_id = use_signal(String::new);

    let mut open = move |document: DocumentDto| {
        title.set(document.title.clone());
        farm_id.set(document.farm_id.map(|id| id.to_string()).unwrap_or_default());
        category_id.set(document.category_id.map(|id| id.to_string()).unwrap_or_default());
        editing.set(Some(document.id));
    };

    let save = move |_| async move {
        let Some(id) = editing() else {
            return;
        };
        let request = DocumentUpdateRequest {
            title: title.read().trim().to_string(),
            farm_id: form::id(&farm_id.read()),
            category_id: form::id(&category_id.read()),
        };

        match api::put::<_, DocumentDto>(&format!("/api/documents/{}", id), &request).await {
            Ok(_) => {
                editing.set(None);
                documents.restart();
            }
            Err(e) => error.set(Some(e)),
        }
    };

    let remove = move |id: i32| async move {
        match api::delete(&format!("/api/documents/{}", id)).await {
            Ok(()) => documents.restart(),
            Err(e) => error.set(Some(e)),
        }
    };

    let farm_options = match &*farms.read() {
        Some(Ok(farms)) => options::farms(farms),
        _ => Vec::new(),
    };
    let category_options = match &*categories.read() {
        Some(Ok(categories)) => options::categories(categories),
        _ => Vec::new(),
    };
    let rows = match &*documents.read() {
        Some(Ok(items)) => filter.read().apply(items.clone()),
        Some(Err(e)) => {
            return rsx!(Page { title: "Documents", div { role: "alert", class: "alert alert-error", "{e}" } })
        }
        None => Vec::new(),
    };

    rsx!(
        Title { "Documents | AllevApp" }
        Page { title: "Documents",
            ErrorAlert { message: error }
            div { class: "card card-border",
                div { class: "card-body",
                    h2 { class: "card-title text-base", "Upload" }
                    UploadForm {
                        action: "/api/documents".to_string(),
                        target: "document-upload",
                        label: "Upload",
                        on_uploaded: move |_| documents.restart(),
                        input {
                            class: "input input-bordered input-sm",
                            name: "title",
                            placeholder: "Title (defaults to file name)",
                        }
                        select { class: "select select-bordered select-sm", name: "farm_id",
                            option { value: "", "No farm" }
                            for (value, label) in farm_options.clone() {
                                option { value: "{value}", "{label}" }
                            }
                        }
                        select { class: "select select-bordered select-sm", name: "category_id",
                            option { value: "", "No category" }
                            for (value, label) in category_options.clone() {
                                option { value: "{value}", "{label}" }
                            }
                        }
                    }
                }
            }
            div { class: "flex flex-wrap gap-2 items-center",
                SearchInput { filter }
                FacetSelect { filter, facet: "farm_id", label: "farms", options: farm_options.clone() }
                FacetSelect { filter, facet: "category_id", label: "categories", options: category_options.clone() }
            }
            if editing().is_some() {
                div { class: "card shadow-sm",
                    div { class: "card-body grid grid-cols-1 md:grid-cols-3 gap-3",
                        TextField { label: "Title", value: title }
                        SelectField { label: "Farm", value: farm_id, options: farm_options, blank: "No farm" }
                        SelectField { label: "Category", value: category_id, options: category_options, blank: "No category" }
                        div { class: "card-actions md:col-span-3",
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
                            th { "Category" }
                            th { "Farm" }
                            th { "Uploaded" }
                            th {}
                        }
                    }
                    tbody {
                        for document in rows {
                            tr { key: "{document.id}",
                                td {
                                    a { class: "link font-semibold", href: "/api/documents/{document.id}/file",
                                        "{document.title}"
                                    }
                                    div { class: "text-xs opacity-60",
                                        "{document.file_name} · {document.size_bytes} bytes"
                                    }
                                }
                                td { {form::text(&document.category_name)} }
                                td { {form::text(&document.farm_name)} }
                                td { {document.created_at.format("%Y-%m-%d").to_string()} }
                                td { class: "flex gap-2 justify-end",
                                    button {
                                        class: "btn btn-sm",
                                        onclick: {
                                            let document = document.clone();
                                            move |_| open(document.clone())
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-sm btn-error btn-outline",
                                        onclick: move |_| remove(document.id),
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
