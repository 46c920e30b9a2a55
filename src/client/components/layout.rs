use dioxus::prelude::*;

use crate::{
    client::{components::Navbar, router::Route, store::user::UserState, util::api},
    model::user::UserDto,
};

/// Layout for every screen behind the login
///
/// Fetches the session's user once and sends visitors without one to the login screen.
#[component]
pub fn AppLayout() -> Element {
    let mut user_state = use_context::<Signal<UserState>>();
    let navigator = use_navigator();

    use_effect(move || {
        if user_state.read().fetched {
            return;
        }

        spawn(async move {
            let user = api::get::<UserDto>("/api/auth/user").await.ok();
            user_state.set(UserState {
                user,
                fetched: true,
            });
        });
    });

    use_effect(move || {
        let state = user_state.read();
        if state.fetched && state.user.is_none() {
            navigator.replace(Route::Login {});
        }
    });

    let state = user_state.read();
    if state.user.is_none() {
        return rsx! {
            div { class: "min-h-screen flex items-center justify-center",
                span { class: "loading loading-spinner loading-lg" }
            }
        };
    }

    rsx! {
        Navbar {}
        Outlet::<Route> {}
    }
}
