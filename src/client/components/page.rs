use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, title: Option<&'static str>, children: Element) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        div {
            class: "min-h-screen pt-[72px] p-4 {class}",
            div { class: "w-full max-w-[1440px] mx-auto flex flex-col gap-4",
                if let Some(title) = title {
                    h1 { class: "text-2xl font-semibold", "{title}" }
                }
                {children}
            }
        }
    )
}
