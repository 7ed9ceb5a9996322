use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, YoauthError};

pub const ENV_CLIENT_ID: &str = "YAHOO_APP_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "YAHOO_APP_CLIENT_SECRET";
pub const ENV_CLIENT_CODE: &str = "YAHOO_APP_CLIENT_CODE";
pub const ENV_TOKEN_FILE: &str = "YAHOO_APP_TOKEN_FILE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Credentials and token file location. Empty means "not provided".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub token_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    #[serde(default = "default_create_app_url")]
    pub create_app_url: String,
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,
}

fn default_token_url() -> String {
    "https://api.login.yahoo.com/oauth2/get_token".to_string()
}

fn default_auth_url() -> String {
    "https://api.login.yahoo.com/oauth2/request_auth".to_string()
}

fn default_create_app_url() -> String {
    "https://developer.yahoo.com/apps/create/".to_string()
}

fn default_redirect_uri() -> String {
    "oob".to_string()
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            token_url: default_token_url(),
            auth_url: default_auth_url(),
            create_app_url: default_create_app_url(),
            redirect_uri: default_redirect_uri(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when RUST_LOG is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load config: defaults → toml file → env vars (env wins).
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::from_file(path)?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Like [`Config::load`], but an unreadable or malformed file falls back to
    /// defaults. Used for the implicit default path; the skipped error is returned
    /// so the caller can report it.
    pub fn load_lenient(path: &Path) -> (Self, Option<YoauthError>) {
        let (mut config, skipped) = Self::from_file_lenient(path);
        config.apply_env(|key| std::env::var(key).ok());
        (config, skipped)
    }

    pub fn from_file_lenient(path: &Path) -> (Self, Option<YoauthError>) {
        match Self::from_file(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Read the toml file if it exists, otherwise start from defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| YoauthError::Config(format!("failed to read config: {e}")))?;
        toml::from_str(&content)
            .map_err(|e| YoauthError::Config(format!("failed to parse config: {e}")))
    }

    /// Override app values with whatever `lookup` returns for the YAHOO_APP_* variables.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_CLIENT_ID) {
            self.app.client_id = v;
        }
        if let Some(v) = lookup(ENV_CLIENT_SECRET) {
            self.app.client_secret = v;
        }
        if let Some(v) = lookup(ENV_CLIENT_CODE) {
            self.app.code = v;
        }
        if let Some(v) = lookup(ENV_TOKEN_FILE) {
            self.app.token_file = v;
        }
    }
}
