use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "flex items-center justify-center", title: "Page not found",
            p { "Nothing lives at /{path}." }
            Link { to: Route::Dashboard {}, class: "btn btn-primary w-40", "Back to dashboard" }
        }
    )
}
