//! src/configuration.rs
use crate::webhook::{WebhookClient, DEFAULT_WEBHOOK_URL};
use config::{Config, Environment as EnvSource, File};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    #[serde(default)]
    pub webhook: WebhookSettings,
}

impl Settings {
    pub fn set_webhook_url(&mut self, url: String) {
        self.webhook.url = url;
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct WebhookSettings {
    #[serde(default = "default_webhook_url")]
    pub url: String,
}

fn default_webhook_url() -> String {
    DEFAULT_WEBHOOK_URL.into()
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self {
            url: default_webhook_url(),
        }
    }
}

impl WebhookSettings {
    pub fn client(&self) -> WebhookClient {
        WebhookClient::new(self.url.clone())
    }
}

#[derive(Debug, PartialEq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_ref() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                s
            )),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error("Failed to determine the current directory")]
    CurrentDir(#[source] std::io::Error),
    #[error("Failed to parse APP_ENVIRONMENT: {0}")]
    Environment(String),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

/// Layers `configuration/base.yaml`, the optional `configuration/<env>.yaml`
/// selected by `APP_ENVIRONMENT` (default `local`), then `APP_*` variables
/// such as `APP_WEBHOOK__URL`.
pub fn get_configuration() -> Result<Settings, ConfigurationError> {
    // A missing `.env` is fine; it only feeds the environment layer.
    let _ = dotenvy::dotenv();

    let base_path = std::env::current_dir().map_err(ConfigurationError::CurrentDir)?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigurationError::Environment)?;

    let settings = Config::builder()
        .add_source(File::from(configuration_directory.join("base")).required(true))
        .add_source(
            File::from(configuration_directory.join(environment.as_str())).required(false),
        )
        .add_source(
            EnvSource::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let settings: Settings = settings.try_deserialize()?;
    tracing::debug!(
        environment = environment.as_str(),
        webhook_url = %settings.webhook.url,
        "Loaded configuration"
    );

    Ok(settings)
}
