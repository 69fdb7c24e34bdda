//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WEBSITE_DIR: &str = "website";
pub const DEFAULT_ESTIMATE_TO_EMAIL: &str = "info@magicglovecleaning.com";
pub const DEFAULT_ESTIMATE_FROM_EMAIL: &str = "onboarding@resend.dev";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid boolean for {var}: {value}")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub website_dir: PathBuf,
    /// `None` leaves the estimate relay disabled.
    pub resend_api_key: Option<String>,
    pub estimate_to_email: String,
    pub estimate_from_email: String,
    pub cors_allow_any: bool,
}

impl SiteConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `WEBSITE_DIR`: static site root, default `./website`
    /// - `RESEND_API_KEY`: relay disabled when absent or blank
    /// - `ESTIMATE_TO_EMAIL`: default `info@magicglovecleaning.com`
    /// - `ESTIMATE_FROM_EMAIL`: default `onboarding@resend.dev`
    /// - `CORS_ALLOW_ANY`: default true
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `CORS_ALLOW_ANY` is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let website_dir = env_non_empty("WEBSITE_DIR").map_or_else(|| PathBuf::from(DEFAULT_WEBSITE_DIR), PathBuf::from);
        let cors_allow_any = match std::env::var("CORS_ALLOW_ANY") {
            Ok(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool { var: "CORS_ALLOW_ANY", value: raw })?,
            Err(_) => true,
        };

        Ok(Self {
            port,
            website_dir,
            resend_api_key: env_non_empty("RESEND_API_KEY"),
            estimate_to_email: env_non_empty("ESTIMATE_TO_EMAIL").unwrap_or_else(|| DEFAULT_ESTIMATE_TO_EMAIL.to_owned()),
            estimate_from_email: env_non_empty("ESTIMATE_FROM_EMAIL")
                .unwrap_or_else(|| DEFAULT_ESTIMATE_FROM_EMAIL.to_owned()),
            cors_allow_any,
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            website_dir: PathBuf::from(DEFAULT_WEBSITE_DIR),
            resend_api_key: None,
            estimate_to_email: DEFAULT_ESTIMATE_TO_EMAIL.to_owned(),
            estimate_from_email: DEFAULT_ESTIMATE_FROM_EMAIL.to_owned(),
            cors_allow_any: true,
        }
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
