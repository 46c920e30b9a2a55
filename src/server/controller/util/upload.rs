use std::collections::HashMap;

use axum::{
    extract::Multipart,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::server::{error::Error, util::storage::UploadedFile};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// The parts of a multipart form: text fields by name and every file part in order
#[derive(Default)]
pub struct UploadForm {
    pub fields: HashMap<String, String>,
    pub files: Vec<UploadedFile>,
}

impl UploadForm {
    /// Reads the whole form; any part with a file name counts as a file
    pub async fn read(mut multipart: Multipart) -> Result<Self, Error> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field
                        .content_type()
                        .unwrap_or(DEFAULT_CONTENT_TYPE)
                        .to_string();
                    let bytes = field.bytes().await?.to_vec();

                    form.files.push(UploadedFile {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
                None => {
                    let value = field.text().await?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    /// A text field, `None` when absent or blank
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    /// A numeric text field, blank meaning `None`
    pub fn id(&self, name: &str) -> Result<Option<i32>, Error> {
        self.text(name)
            .map(|value| {
                value
                    .parse::<i32>()
                    .map_err(|_| Error::validation(format!("{} must be a number", name)))
            })
            .transpose()
    }
}

/// Builds a download response that makes the browser save the body as `file_name`
pub fn download(content_type: &str, file_name: &str, body: impl IntoResponse) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", header_file_name(file_name)),
            ),
        ],
        body,
    )
        .into_response()
}

/// Restricts a file name to characters that are safe inside a quoted header value
fn header_file_name(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect quotes and non-ASCII characters to be replaced in download file names
    #[test]
    fn header_file_name_replaces_unsafe_characters() {
        assert_eq!(header_file_name("order-17.html"), "order-17.html");
        assert_eq!(header_file_name("Fôr \"plan\".pdf"), "F_r _plan_.pdf");
    }

    /// Expect the download response to carry the disposition and content type
    #[test]
    fn download_sets_headers() {
        let resp = download("text/html; charset=utf-8", "order-1.html", "<html></html>");

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"order-1.html\""
        );
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
    }

    /// Expect blank text fields to read as absent and malformed IDs to fail validation
    #[test]
    fn form_fields_are_trimmed_and_parsed() {
        let mut form = UploadForm::default();
        form.fields.insert("title".to_string(), "   ".to_string());
        form.fields.insert("farm_id".to_string(), " 2 ".to_string());
        form.fields.insert("category_id".to_string(), "abc".to_string());

        assert_eq!(form.text("title"), None);
        assert_eq!(form.id("farm_id").unwrap(), Some(2));
        assert!(form.id("category_id").is_err());
    }
}
