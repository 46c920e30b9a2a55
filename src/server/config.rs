use std::path::PathBuf;

use crate::server::error::config::ConfigError;

/// Server configuration read from the environment (and `.env` via dotenvy).
#[derive(Clone, Debug)]
pub struct Config {
    pub contact_email: String,
    pub database_url: String,
    pub valkey_url: String,
    /// Base URL the serverless functions are invoked under
    pub functions_url: String,
    pub functions_api_key: String,
    /// Root directory for uploaded attachments and documents
    pub storage_dir: PathBuf,
    /// Credentials for the first administrator, used only while no users exist
    pub bootstrap_admin: Option<(String, String)>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bootstrap_admin = match (
            optional_var("ADMIN_USERNAME"),
            optional_var("ADMIN_PASSWORD"),
        ) {
            (Some(username), Some(password)) => Some((username, password)),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::MissingEnvVar("ADMIN_PASSWORD".to_string())),
            (None, Some(_)) => return Err(ConfigError::MissingEnvVar("ADMIN_USERNAME".to_string())),
        };

        let functions_url = required_var("FUNCTIONS_URL")?;
        if !functions_url.starts_with("http://") && !functions_url.starts_with("https://") {
            return Err(ConfigError::InvalidEnvValue {
                var: "FUNCTIONS_URL".to_string(),
                reason: "must be an http(s) URL".to_string(),
            });
        }

        Ok(Self {
            contact_email: required_var("CONTACT_EMAIL")?,
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            functions_url: functions_url.trim_end_matches('/').to_string(),
            functions_api_key: required_var("FUNCTIONS_API_KEY")?,
            storage_dir: PathBuf::from(required_var("STORAGE_DIR")?),
            bootstrap_admin,
        })
    }

    /// User agent sent with outbound requests so function operators can reach us.
    pub fn user_agent(&self) -> String {
        format!(
            "AllevApp/{} ({})",
            env!("CARGO_PKG_VERSION"),
            self.contact_email
        )
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    optional_var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
