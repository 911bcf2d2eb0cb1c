use config::{Config, Environment, File};
use secrecy::SecretString;
use serde::Deserialize;
use std::sync::Arc;

use crate::auth::{CredentialVerifier, StaticCredentials, DEFAULT_PASSWORD, DEFAULT_USERNAME};
use crate::error::WmsError;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default = "default_organizations")]
    pub organizations: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_picker_name")]
    pub picker_name: String,
}

#[derive(Deserialize, Clone)]
pub struct AuthSettings {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    password: String,
}

impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

fn default_base_url() -> String {
    wms_api::DEFAULT_BASE_URL.to_string()
}

fn default_picker_name() -> String {
    wms_api::endpoints::purchase_orders::DEFAULT_PICKER_NAME.to_string()
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_string()
}

fn default_password() -> String {
    DEFAULT_PASSWORD.to_string()
}

fn default_organizations() -> Vec<String> {
    vec!["AMS".to_string(), "MLCECLAIM".to_string()]
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            picker_name: default_picker_name(),
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            auth: AuthSettings::default(),
            organizations: default_organizations(),
        }
    }
}

impl Settings {
    /// Load settings from `config.toml` (or the file named by `WMS_CONFIG`)
    /// overlaid with `WMS__*` environment variables.
    pub fn new() -> Result<Self, WmsError> {
        let config_path = std::env::var("WMS_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(Environment::with_prefix("WMS").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<(), WmsError> {
        let invalid = |message: &str| Err(WmsError::Configuration(message.to_string()));

        if self.api.base_url.is_empty() {
            return invalid("api.base_url is required");
        }
        if !self.api.base_url.starts_with("http") {
            return invalid("api.base_url must be a valid HTTP(S) URL");
        }
        if self.organizations.is_empty() {
            return invalid("organizations must list at least one organization code");
        }
        Ok(())
    }

    pub fn credential_verifier(&self) -> Arc<dyn CredentialVerifier> {
        Arc::new(StaticCredentials::new(
            self.auth.username.clone(),
            SecretString::from(self.auth.password.clone()),
        ))
    }
}
