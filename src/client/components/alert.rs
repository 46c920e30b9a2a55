use dioxus::prelude::*;

/// Shows the message while there is one; closing clears it
#[component]
pub fn ErrorAlert(mut message: Signal<Option<String>>) -> Element {
    let Some(text) = message.read().clone() else {
        return rsx!();
    };

    rsx!(
        div { role: "alert", class: "alert alert-error",
            span { "{text}" }
            button {
                class: "btn btn-ghost btn-xs",
                onclick: move |_| message.set(None),
                "✕"
            }
        }
    )
}
