use dioxus::prelude::*;

use crate::model::filter::Filter;

/// Free-text search re-filtering the list on every keystroke
#[component]
pub fn SearchInput(mut filter: Signal<Filter>) -> Element {
    let search = filter.read().search().to_string();

    rsx!(
        input {
            class: "input input-bordered w-full max-w-xs",
            r#type: "search",
            placeholder: "Search…",
            value: "{search}",
            oninput: move |evt| filter.write().set_search(&evt.value()),
        }
    )
}

/// Single-choice facet; the empty choice clears the group
#[component]
pub fn FacetSelect(
    mut filter: Signal<Filter>,
    facet: &'static str,
    label: &'static str,
    options: Vec<(String, String)>,
) -> Element {
    let selected = options
        .iter()
        .find(|(value, _)| filter.read().is_selected(facet, value))
        .map(|(value, _)| value.clone())
        .unwrap_or_default();

    rsx!(
        select {
            class: "select select-bordered",
            onchange: move |evt| filter.write().set_single(facet, &evt.value()),
            option { value: "", selected: selected.is_empty(), "All {label}" }
            for (value, option_label) in options {
                option {
                    selected: selected == value,
                    value: "{value}",
                    "{option_label}"
                }
            }
        }
    )
}

/// Multi-choice facet; checked values are ORed
#[component]
pub fn FacetChecks(
    mut filter: Signal<Filter>,
    facet: &'static str,
    label: &'static str,
    options: Vec<(String, String)>,
) -> Element {
    rsx!(
        div { class: "flex flex-wrap items-center gap-3",
            span { class: "text-sm font-semibold", "{label}" }
            for (value, option_label) in options {
                label { class: "label cursor-pointer gap-1",
                    input {
                        r#type: "checkbox",
                        class: "checkbox checkbox-sm",
                        checked: filter.read().is_selected(facet, &value),
                        onchange: {
                            let value = value.clone();
                            move |_| filter.write().toggle(facet, &value)
                        },
                    }
                    span { class: "label-text", "{option_label}" }
                }
            }
        }
    )
}
