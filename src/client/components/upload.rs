use dioxus::prelude::*;

/// A native multipart form posted into a hidden frame so the page stays put.
///
/// `on_uploaded` runs whenever the frame finishes loading a response. The server answers
/// with JSON, so a failed upload shows up as an unchanged list rather than an error page.
#[component]
pub fn UploadForm(
    action: String,
    target: &'static str,
    label: &'static str,
    on_uploaded: EventHandler<()>,
    children: Element,
) -> Element {
    rsx!(
        form {
            class: "flex flex-wrap items-end gap-2",
            action: "{action}",
            method: "post",
            enctype: "multipart/form-data",
            target: "{target}",
            {children}
            input {
                class: "file-input file-input-bordered file-input-sm",
                r#type: "file",
                name: "files",
                multiple: true,
            }
            button { class: "btn btn-sm btn-primary", r#type: "submit", "{label}" }
        }
        iframe {
            class: "hidden",
            name: "{target}",
            onload: move |_| on_uploaded.call(()),
        }
    )
}
