use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{router::Route, store::user::UserState, util::api};

#[component]
pub fn Navbar() -> Element {
    let mut user_state = use_context::<Signal<UserState>>();
    let navigator = use_navigator();

    let display_name = user_state
        .read()
        .user
        .as_ref()
        .map(|user| user.display_name().to_string())
        .unwrap_or_default();

    let logout = move |_| async move {
        if let Err(e) = api::post_empty("/api/auth/logout").await {
            tracing::error!("Logout failed: {}", e);
        }
        user_state.set(UserState {
            user: None,
            fetched: true,
        });
        navigator.replace(Route::Login {});
    };

    rsx! {
        div {
            class: "navbar bg-base-200 fixed top-0 z-10",
            div {
                class: "navbar-start",
                Link { to: Route::Dashboard {}, class: "btn btn-ghost text-xl", "AllevApp" }
            }
            div {
                class: "navbar-center hidden lg:flex",
                ul { class: "menu menu-horizontal px-1",
                    li { Link { to: Route::Farms {}, "Farms" } }
                    li { Link { to: Route::Equipment {}, "Equipment" } }
                    li { Link { to: Route::Facilities {}, "Facilities" } }
                    li { Link { to: Route::Maintenance {}, "Maintenance" } }
                    li { Link { to: Route::Reports {}, "Reports" } }
                    li { Link { to: Route::Projects {}, "Projects" } }
                    li { Link { to: Route::Quotes {}, "Quotes" } }
                    li { Link { to: Route::Orders { quote: String::new() }, "Orders" } }
                    li { Link { to: Route::Documents {}, "Documents" } }
                    li { Link { to: Route::Settings {}, "Settings" } }
                }
            }
            div {
                class: "navbar-end gap-2",
                span { class: "text-sm", "{display_name}" }
                button {
                    class: "btn btn-outline btn-sm",
                    onclick: logout,
                    "Logout"
                }
            }
        }
    }
}
