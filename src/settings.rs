//! Startup configuration for the CORS policy.
//!
//! Values are layered: built-in defaults, then an optional `config/cors.toml`,
//! then environment variables. Only [`Settings::load`] touches the filesystem
//! (`.env` and `config/cors.toml`); [`Settings::from_vars`] reads nothing but
//! the variables it is given.

use crate::allow_list::AllowList;
use crate::constants::DEV_ORIGINS;
use crate::cors::Cors;
use crate::options::{CorsOptions, CredentialMode, ValidationError};
use crate::util::split_list;
use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{info, warn};

pub const FRONTEND_URL: &str = "FRONTEND_URL";
pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
pub const CORS_INCLUDE_DEV_ORIGINS: &str = "CORS_INCLUDE_DEV_ORIGINS";
pub const CORS_ALLOW_CREDENTIALS: &str = "CORS_ALLOW_CREDENTIALS";
pub const CORS_MAX_AGE: &str = "CORS_MAX_AGE";
pub const CORS_REJECT_DENIED: &str = "CORS_REJECT_DENIED";
pub const RUN_ENV: &str = "RUN_ENV";

const PRODUCTION: &str = "production";
const CONFIG_FILE: &str = "config/cors";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Current environment (development, production)
    pub environment: String,
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Origin of the deployed frontend
    #[serde(default)]
    pub frontend_url: Option<String>,

    /// Additional origins (comma-separated)
    pub allowed_origins: String,

    /// Whether the local development origins are accepted
    pub include_dev_origins: bool,

    pub allow_credentials: bool,

    /// Preflight cache lifetime in seconds
    #[serde(default)]
    pub max_age: Option<u64>,

    /// Answer denied origins with 403
    pub reject_denied: bool,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load CORS settings: {0}")]
    Config(#[from] ConfigError),
    #[error("FRONTEND_URL must be set when RUN_ENV is production")]
    MissingFrontendUrl,
    #[error("invalid CORS settings: {0}")]
    Invalid(#[from] ValidationError),
}

impl Settings {
    /// Load settings from `.env`, `config/cors.toml` and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the values cannot be parsed, or if a
    /// production deployment has no frontend origin.
    pub fn load() -> Result<Self, SettingsError> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        Self::from_layers(std::env::vars(), Some(CONFIG_FILE))
    }

    /// Load settings from an explicit set of environment variables, on top of
    /// the built-in defaults only.
    pub fn from_vars<I>(vars: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self::from_layers(vars, None)
    }

    fn from_layers<I>(vars: I, config_file: Option<&str>) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars.into_iter().collect();
        let var = |name: &str| vars.get(name).cloned();

        let environment = var(RUN_ENV).unwrap_or_else(|| "development".into());

        let mut builder = Config::builder()
            .set_default("environment", environment)?
            .set_default("cors.allowed_origins", "")?
            .set_default("cors.include_dev_origins", true)?
            .set_default("cors.allow_credentials", true)?
            .set_default("cors.reject_denied", false)?;
        if let Some(path) = config_file {
            builder = builder.add_source(File::with_name(path).required(false));
        }

        let settings: Self = builder
            .set_override_option("cors.frontend_url", var(FRONTEND_URL))?
            .set_override_option("cors.allowed_origins", var(CORS_ALLOWED_ORIGINS))?
            .set_override_option("cors.include_dev_origins", var(CORS_INCLUDE_DEV_ORIGINS))?
            .set_override_option("cors.allow_credentials", var(CORS_ALLOW_CREDENTIALS))?
            .set_override_option("cors.max_age", var(CORS_MAX_AGE))?
            .set_override_option("cors.reject_denied", var(CORS_REJECT_DENIED))?
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        info!(
            environment = %settings.environment,
            frontend_url = ?settings.frontend_url(),
            "CORS settings loaded"
        );
        Ok(settings)
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case(PRODUCTION)
    }

    /// The frontend origin, with a blank value treated as unset.
    pub fn frontend_url(&self) -> Option<&str> {
        self.cors
            .frontend_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.is_production() && self.frontend_url().is_none() {
            return Err(SettingsError::MissingFrontendUrl);
        }
        Ok(())
    }

    /// Frontend origin first, then the extra origins, then the development
    /// defaults.
    pub fn allow_list(&self) -> AllowList {
        let mut origins: Vec<&str> = Vec::new();
        origins.extend(self.frontend_url());
        origins.extend(split_list(&self.cors.allowed_origins));
        if self.cors.include_dev_origins {
            origins.extend(DEV_ORIGINS);
        }

        for origin in &origins {
            if origin.ends_with('/') {
                warn!(
                    origin,
                    "configured origin ends with '/'; browsers never send one, so it will not match"
                );
            }
        }

        AllowList::new(origins)
    }

    pub fn to_options(&self) -> CorsOptions {
        let allow_list = self.allow_list();
        if allow_list.is_empty() {
            warn!("CORS allow-list is empty; every cross-origin request will be denied");
        }

        CorsOptions {
            allow_list,
            credentials: CredentialMode::from(self.cors.allow_credentials),
            max_age: self.cors.max_age,
            reject_denied: self.cors.reject_denied,
            ..CorsOptions::default()
        }
    }

    pub fn build_cors(&self) -> Result<Cors, SettingsError> {
        Ok(Cors::new(self.to_options())?)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;
