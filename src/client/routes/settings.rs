use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{ErrorAlert, Page, SearchInput, SelectField, TextArea, TextField},
        store::user::UserState,
        util::{api, form, options},
    },
    model::{
        document::{DocumentCategoryDto, DocumentCategoryRequest},
        filter::Filter,
        supplier::{SupplierDto, SupplierRequest},
        user::{CreateUserRequest, PasswordResetDto, UpdateUserRequest, UserDto, UserRole},
    },
};

#[component]
pub fn Settings() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let is_admin = user_state.read().is_admin();

    rsx!(
        Title { "Settings | AllevApp" }
        Page { title: "Settings",
            Suppliers {}
            DocumentCategories {}
            if is_admin {
                Users {}
            }
        }
    )
}

#[component]
fn Suppliers() -> Element {
    let mut suppliers =
        use_resource(|| async move { api::get::<Vec<SupplierDto>>("/api/suppliers").await });
    let filter = use_signal(Filter::new);
    let mut editing = use_signal(|| None::<Option<i32>>);
    let mut error = use_signal(|| None::<String>);

    let mut name = use_signal(String::new);
    let mut contact_person = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut notes = use_signal(String::new);

    let mut open = move |supplier: Option<SupplierDto>| {
        let supplier = supplier.as_ref();
        name.set(supplier.map(|s| s.name.clone()).unwrap_or_default());
        contact_person.set(supplier.map(|s| form::text(&s.contact_person)).unwrap_or_default());
        email.set(supplier.map(|s| form::text(&s.email)).unwrap_or_default());
        phone.set(supplier.map(|s| form::text(&s.phone)).unwrap_or_default());
        address.set(supplier.map(|s| form::text(&s.address)).unwrap_or_default());
        notes.set(supplier.map(|s| form::text(&s.notes)).unwrap_or_default());
        editing.set(Some(supplier.map(|s| s.id)));
    };

    let save = move |_| async move {
        let Some(id) = editing() else {
            return;
        };
        let request = SupplierRequest {
            name: name.read().trim().to_string(),
            contact_person: form::optional(&contact_person.read()),
            email: form::optional(&email.read()),
            phone: form::optional(&phone.read()),
            address: form::optional(&address.read()),
            notes: form::optional(&notes.read()),
        };

        let result = match id {
            Some(id) => {
                api::put::<_, SupplierDto>(&format!("/api/suppliers/{}", id), &request).await
            }
            None => api::post::<_, SupplierDto>("/api/suppliers", &request).await,
        };

        match result {
            Ok(_) => {
                editing.set(None);
                suppliers.restart();
            }
            Err(e) => error.set(Some(e)),
        }
    };

    let remove = move |id: i32| async move {
        match api::delete(&format!("/api/suppliers/{}", id)).await {
            Ok(()) => suppliers.restart(),
            Err(e) => error.set(Some(e)),
        }
    };

    let rows = match &*suppliers.read() {
        Some(Ok(items)) => filter.read().apply(items.clone()),
        _ => Vec::new(),
    };

    rsx!(
        section { class: "flex flex-col gap-3",
            h2 { class: "text-xl font-semibold", "Suppliers" }
            ErrorAlert { message: error }
            div { class: "flex gap-2",
                SearchInput { filter }
                button { class: "btn btn-primary ml-auto", onclick: move |_| open(None), "New supplier" }
            }
            if editing().is_some() {
                div { class: "card shadow-sm",
                    div { class: "card-body grid grid-cols-1 md:grid-cols-2 gap-3",
                        TextField { label: "Name", value: name }
                        TextField { label: "Contact person", value: contact_person }
                        TextField { label: "Email", value: email, input_type: "email" }
                        TextField { label: "Phone", value: phone }
                        TextArea { label: "Address", value: address }
                        TextArea { label: "Notes", value: notes }
                        div { class: "card-actions md:col-span-2",
                            button { class: "btn btn-primary", onclick: save, "Save" }
                            button { class: "btn btn-ghost", onclick: move |_| editing.set(None), "Cancel" }
                        }
                    }
                }
            }
            table { class: "table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Contact" }
                        th { "Email" }
                        th { "Phone" }
                        th {}
                    }
                }
                tbody {
                    for supplier in rows {
                        tr { key: "{supplier.id}",
                            td { "{supplier.name}" }
                            td { {form::text(&supplier.contact_person)} }
                            td { {form::text(&supplier.email)} }
                            td { {form::text(&supplier.phone)} }
                            td { class: "flex gap-2 justify-end",
                                button {
                                    class: "btn btn-sm",
                                    onclick: {
                                        let supplier = supplier.clone();
                                        move |_| open(Some(supplier.clone()))
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-sm btn-error btn-outline",
                                    onclick: move |_| remove(supplier.id),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn DocumentCategories() -> Element {
    let mut categories = use_resource(|| async move {
        api::get::<Vec<DocumentCategoryDto>>("/api/document-categories").await
    });
    let mut editing = use_signal(|| None::<Option<i32>>);
    let mut error = use_signal(|| None::<String>);

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);

    let mut open = move |category: Option<DocumentCategoryDto>| {
        let category = category.as_ref();
        name.set(category.map(|c| c.name.clone()).unwrap_or_default());
        description.set(category.map(|c| form::text(&c.description)).unwrap_or_default());
        editing.set(Some(category.map(|c| c.id)));
    };

    let save = move |_| async move {
        let Some(id) = editing() else {
            return;
        };
        let request = DocumentCategoryRequest {
            name: name.read().trim().to_string(),
            description: form::optional(&description.read()),
        };

        let result = match id {
            Some(id) => {
                api::put::<_, DocumentCategoryDto>(
                    &format!("/api/document-categories/{}", id),
                    &request,
                )
                .await
            }
            None => api::post::<_, DocumentCategoryDto>("/api/document-categories", &request).await,
        };

        match result {
            Ok(_) => {
                editing.set(None);
                categories.restart();
            }
            Err(e) => error.set(Some(e)),
        }
    };

    let remove = move |id: i32| async move {
        match api::delete(&format!("/api/document-categories/{}", id)).await {
            Ok(()) => categories.restart(),
            Err(e) => error.set(Some(e)),
        }
    };

    let rows = match &*categories.read() {
        Some(Ok(items)) => items.clone(),
        _ => Vec::new(),
    };

    rsx!(
        section { class: "flex flex-col gap-3",
            h2 { class: "text-xl font-semibold", "Document categories" }
            ErrorAlert { message: error }
            div { class: "flex",
                button { class: "btn btn-primary ml-auto", onclick: move |_| open(None), "New category" }
            }
            if editing().is_some() {
                div { class: "card shadow-sm",
                    div { class: "card-body grid grid-cols-1 md:grid-cols-2 gap-3",
                        TextField { label: "Name", value: name }
                        TextField { label: "Description", value: description }
                        div { class: "card-actions md:col-span-2",
                            button { class: "btn btn-primary", onclick: save, "Save" }
                            button { class: "btn btn-ghost", onclick: move |_| editing.set(None), "Cancel" }
                        }
                    }
                }
            }
            ul { class: "list",
                for category in rows {
                    li { key: "{category.id}", class: "list-row items-center",
                        div {
                            div { class: "font-semibold", "{category.name}" }
                            div { class: "text-xs opacity-60", {form::text(&category.description)} }
                        }
                        button {
                            class: "btn btn-sm",
                            onclick: {
                                let category = category.clone();
                                move |_| open(Some(category.clone()))
                            },
                            "Edit"
                        }
                        button {
                            class: "btn btn-sm btn-error btn-outline",
                            onclick: move |_| remove(category.id),
                            "Delete"
                        }
                    }
                }
            }
        }
    )
}

/// User administration, only rendered for admins
#[component]
fn Users() -> Element {
    let mut users = use_resource(|| async move { api::get::<Vec<UserDto>>("/api/users").await });
    let mut editing = use_signal(|| None::<Option<i32>>);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut role = use_signal(|| UserRole::Member.to_string());
    let mut active = use_signal(|| "true".to_string());

    let mut open = move |user: Option<UserDto>| {
        let user = user.as_ref();
        username.set(user.map(|u| u.username.clone()).unwrap_or_default());
        password.set(String::new());
        email.set(user.map(|u| form::text(&u.email)).unwrap_or_default());
        full_name.set(user.map(|u| form::text(&u.full_name)).unwrap_or_default());
        role.set(user.map(|u| u.role).unwrap_or(UserRole::Member).to_string());
        active.set(user.map(|u| u.is_active).unwrap_or(true).to_string());
        editing.set(Some(user.map(|u| u.id)));
    };

    let save = move |_| async move {
        let Some(id) = editing() else {
            return;
        };
        let role = match role.read().parse::<UserRole>() {
            Ok(role) => role,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        let result = match id {
            Some(id) => {
                let request = UpdateUserRequest {
                    email: form::optional(&email.read()),
                    full_name: form::optional(&full_name.read()),
                    role,
                    is_active: *active.read() == "true",
                    password: form::optional(&password.read()),
                };
                api::put::<_, UserDto>(&format!("/api/users/{}", id), &request).await
            }
            None => {
                let request = CreateUserRequest {
                    username: username.read().trim().to_string(),
                    password: password.read().clone(),
                    email: form::optional(&email.read()),
                    full_name: form::optional(&full_name.read()),
                    role,
                };
                api::post::<_, UserDto>("/api/users", &request).await
            }
        };

        match result {
            Ok(_) => {
                editing.set(None);
                users.restart();
            }
            Err(e) => error.set(Some(e)),
        }
    };

    let reset_password = move |id: i32| async move {
        let url = format!("/api/users/{}/reset-password", id);
        match api::post_action::<PasswordResetDto>(&url).await {
            Ok(reset) => notice.set(Some(format!("A new password was sent to {}", reset.email))),
            Err(e) => error.set(Some(e)),
        }
    };

    let remove = move |id: i32| async move {
        match api::delete(&format!("/api/users/{}", id)).await {
            Ok(()) => users.restart(),
            Err(e) => error.set(Some(e)),
        }
    };

    let rows = match &*users.read() {
        Some(Ok(items)) => items.clone(),
        _ => Vec::new(),
    };
    let is_new = editing() == Some(None);
    let password_label = if is_new {
        "Password"
    } else {
        "New password (leave blank to keep)"
    };

    rsx!(
        section { class: "flex flex-col gap-3",
            h2 { class: "text-xl font-semibold", "Users" }
            ErrorAlert { message: error }
            if let Some(message) = notice() {
                div { role: "alert", class: "alert alert-success",
                    span { "{message}" }
                    button { class: "btn btn-sm btn-ghost", onclick: move |_| notice.set(None), "Dismiss" }
                }
            }
            div { class: "flex",
                button { class: "btn btn-primary ml-auto", onclick: move |_| open(None), "New user" }
            }
            if editing().is_some() {
                div { class: "card shadow-sm",
                    div { class: "card-body grid grid-cols-1 md:grid-cols-2 gap-3",
                        if is_new {
                            TextField { label: "Username", value: username }
                        }
                        TextField {
                            label: password_label,
                            value: password,
                            input_type: "password",
                        }
                        TextField { label: "Full name", value: full_name }
                        TextField { label: "Email", value: email, input_type: "email" }
                        SelectField { label: "Role", value: role, options: options::variants(UserRole::ALL) }
                        if !is_new {
                            SelectField {
                                label: "Account",
                                value: active,
                                options: vec![
                                    ("true".to_string(), "Active".to_string()),
                                    ("false".to_string(), "Deactivated".to_string()),
                                ],
                            }
                        }
                        div { class: "card-actions md:col-span-2",
                            button { class: "btn btn-primary", onclick: save, "Save" }
                            button { class: "btn btn-ghost", onclick: move |_| editing.set(None), "Cancel" }
                        }
                    }
                }
            }
            table { class: "table",
                thead {
                    tr {
                        th { "Username" }
                        th { "Name" }
                        th { "Email" }
                        th { "Role" }
                        th {}
                    }
                }
                tbody {
                    for user in rows {
                        tr { key: "{user.id}", class: if !user.is_active { "opacity-50" },
                            td { "{user.username}" }
                            td { {form::text(&user.full_name)} }
                            td { {form::text(&user.email)} }
                            td { "{user.role}" }
                            td { class: "flex gap-2 justify-end",
                                button {
                                    class: "btn btn-sm",
                                    onclick: {
                                        let user = user.clone();
                                        move |_| open(Some(user.clone()))
                                    },
                                    "Edit"
                                }
                                if user.email.is_some() {
                                    button {
                                        class: "btn btn-sm btn-outline",
                                        onclick: move |_| reset_password(user.id),
                                        "Reset password"
                                    }
                                }
                                button {
                                    class: "btn btn-sm btn-error btn-outline",
                                    onclick: move |_| remove(user.id),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
