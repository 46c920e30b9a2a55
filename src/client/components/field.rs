use dioxus::prelude::*;

#[component]
pub fn TextField(
    label: &'static str,
    mut value: Signal<String>,
    input_type: Option<&'static str>,
    placeholder: Option<&'static str>,
) -> Element {
    let input_type = input_type.unwrap_or("text");
    let placeholder = placeholder.unwrap_or("");

    rsx!(
        label { class: "form-control w-full",
            span { class: "label-text", "{label}" }
            input {
                class: "input input-bordered w-full",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
        }
    )
}

#[component]
pub fn DateField(label: &'static str, value: Signal<String>) -> Element {
    rsx!(TextField { label, value, input_type: "date" })
}

#[component]
pub fn TextArea(label: &'static str, mut value: Signal<String>) -> Element {
    rsx!(
        label { class: "form-control w-full",
            span { class: "label-text", "{label}" }
            textarea {
                class: "textarea textarea-bordered w-full",
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
        }
    )
}

/// A select over `(value, label)` options; `blank` adds an empty first option
#[component]
pub fn SelectField(
    label: &'static str,
    mut value: Signal<String>,
    options: Vec<(String, String)>,
    blank: Option<&'static str>,
) -> Element {
    rsx!(
        label { class: "form-control w-full",
            span { class: "label-text", "{label}" }
            select {
                class: "select select-bordered w-full",
                onchange: move |evt| value.set(evt.value()),
                if let Some(blank) = blank {
                    option { value: "", selected: value.read().is_empty(), "{blank}" }
                }
                for (option_value, option_label) in options {
                    option {
                        selected: *value.read() == option_value,
                        value: "{option_value}",
                        "{option_label}"
                    }
                }
            }
        }
    )
}
