//! Process configuration, read once from the environment at startup.

use std::env;

use secrecy::SecretString;

use crate::auth::Identity;

/// Errors raised while loading configuration.
///
/// All of these are fatal: they are reported before the terminal UI starts
/// and the process exits.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Everything the application needs from the environment.
#[derive(Clone)]
pub struct Config {
    /// The single account allowed to use the form.
    pub identity: Identity,
    /// Bearer token for the remote table service.
    pub api_token: SecretString,
    /// Base URL of the remote table service, without the table name.
    pub base_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("identity", &self.identity.username())
            .field("api_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// The raw password is hashed into the [`Identity`] here and never
    /// stored. Every key is required; the first missing one is reported.
    pub fn from_env() -> Result<Self, ConfigError> {
        let username = require("PROJSUB_USERNAME")?;
        let password = require("PROJSUB_PASSWORD")?;
        let api_token = require("PROJSUB_API_TOKEN")?;
        let base_url = require("PROJSUB_BASE_URL")?;

        Ok(Self {
            identity: Identity::new(username, &password),
            api_token: SecretString::from(api_token),
            base_url,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
