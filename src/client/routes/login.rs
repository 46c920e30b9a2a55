use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::{components::ErrorAlert, router::Route, store::user::UserState, util::api},
    model::user::{LoginRequest, UserDto},
};

#[component]
pub fn Login() -> Element {
    let mut user_state = use_context::<Signal<UserState>>();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut pending = use_signal(|| false);

    let submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        pending.set(true);

        let request = LoginRequest {
            username: username.read().trim().to_string(),
            password: password.read().clone(),
        };

        match api::post::<_, UserDto>("/api/auth/login", &request).await {
            Ok(user) => {
                user_state.set(UserState {
                    user: Some(user),
                    fetched: true,
                });
                navigator.replace(Route::Dashboard {});
            }
            Err(e) => error.set(Some(e)),
        }

        pending.set(false);
    };

    rsx!(
        Title { "Login | AllevApp" }
        Meta { name: "description", content: "Farm operations management" }
        div { class: "min-h-screen flex items-center justify-center p-4",
            form {
                class: "card shadow-sm w-full max-w-96",
                onsubmit: submit,
                div { class: "card-body gap-3",
                    h2 { class: "card-title", "AllevApp" }
                    ErrorAlert { message: error }
                    label { class: "form-control w-full",
                        span { class: "label-text", "Username" }
                        input {
                            class: "input input-bordered w-full",
                            autocomplete: "username",
                            value: "{username}",
                            oninput: move |evt| username.set(evt.value()),
                        }
                    }
                    label { class: "form-control w-full",
                        span { class: "label-text", "Password" }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: pending(),
                        "Log in"
                    }
                }
            }
        }
    )
}
