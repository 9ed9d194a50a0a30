//! # Widget Configuration
//!
//! Configuration is read from environment variables. In the browser build the
//! same variable is baked in at compile time (see `swap-web`), so
//! [`WidgetConfig::new`] is the constructor used there.
//!
//! | Variable    | Meaning                                             | Default |
//! |-------------|-----------------------------------------------------|---------|
//! | `INFURA_ID` | Service credential for the remote-session provider  | unset   |

use std::env;
use thiserror::Error;

/// Environment variable holding the remote-session service credential.
pub const CREDENTIAL_ENV: &str = "INFURA_ID";

/// Most recent swaps kept in the history.
pub const HISTORY_CAPACITY: usize = 2;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Credential passed to the remote-session provider. `None` disables that path.
    pub remote_session_credential: Option<String>,
}

impl WidgetConfig {
    pub fn new(remote_session_credential: Option<&str>) -> Self {
        Self {
            remote_session_credential: remote_session_credential
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let credential = match get_env(CREDENTIAL_ENV) {
            Ok(value) => Some(value),
            Err(ConfigError::MissingEnv(_)) => None,
            Err(e) => return Err(e),
        };

        let config = Self::new(credential.as_deref());
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(credential) = &self.remote_session_credential {
            if credential.chars().any(char::is_whitespace) {
                return Err(ConfigError::WrongFormat(CREDENTIAL_ENV));
            }
        }
        Ok(())
    }

    pub fn credential(&self) -> Option<&str> {
        self.remote_session_credential.as_deref()
    }
}

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|e| match e {
        env::VarError::NotPresent => ConfigError::MissingEnv(name),
        env::VarError::NotUnicode(_) => ConfigError::WrongFormat(name),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingEnv(&'static str),
    #[error("{0} has an invalid format")]
    WrongFormat(&'static str),
}
