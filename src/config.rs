// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client configuration.

use std::env;
use std::time::Duration;

use crate::client::{Credentials, SaunaClient};
use crate::error::{ConfigError, Error};

/// Environment variable holding the account username.
pub const USERNAME_ENV: &str = "HUUM_USERNAME";
/// Environment variable holding the account password.
pub const PASSWORD_ENV: &str = "HUUM_PASSWORD";

/// Configuration for a [`SaunaClient`].
///
/// Credentials are either passed explicitly or sourced from the
/// `HUUM_USERNAME` / `HUUM_PASSWORD` environment variables; absence of
/// both fails at construction time, before any session is opened.
///
/// # Examples
///
/// ```no_run
/// use huum_lib::ClientConfig;
/// use std::time::Duration;
///
/// # fn example() -> huum_lib::Result<()> {
/// // Explicit credentials
/// let client = ClientConfig::new("user@example.com", "secret")
///     .with_timeout(Duration::from_secs(5))
///     .into_client()?;
///
/// // Credentials from the environment
/// let client = ClientConfig::from_env()?.into_client()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    username: String,
    password: String,
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Base URL of the vendor home-device API.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.huum.eu/action/home";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration with explicit credentials.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Creates a configuration from the `HUUM_USERNAME` and
    /// `HUUM_PASSWORD` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if either variable is
    /// unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_credentials(env::var(USERNAME_ENV).ok(), env::var(PASSWORD_ENV).ok())
    }

    /// Creates a configuration from optional credential values.
    ///
    /// This is the check behind [`from_env`](Self::from_env); it fails
    /// synchronously, before any session is opened.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if either value is
    /// absent or empty.
    pub fn from_credentials(
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, ConfigError> {
        match (username, password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Ok(Self::new(username, password))
            }
            _ => Err(ConfigError::MissingCredentials),
        }
    }

    /// Overrides the API base URL.
    ///
    /// Intended for tests and self-hosted API proxies. A trailing slash
    /// is stripped; endpoint paths are appended with a single `/`.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout applied by the underlying HTTP client.
    ///
    /// A timeout elapsing surfaces as
    /// [`ApiError::Transport`](crate::error::ApiError::Transport).
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Opens the HTTP session and returns the client.
    ///
    /// This is the explicit acquisition point for the underlying
    /// connection pool; dropping the returned [`SaunaClient`] releases
    /// it on every exit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<SaunaClient, Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(crate::error::ApiError::Transport)?;

        Ok(SaunaClient::from_parts(
            self.base_url,
            client,
            Credentials {
                username: self.username,
                password: self.password,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = ClientConfig::new("user", "pass");
        assert_eq!(config.base_url(), "https://api.huum.eu/action/home");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn base_url_override_strips_trailing_slash() {
        let config = ClientConfig::new("user", "pass").with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn timeout_override() {
        let config = ClientConfig::new("user", "pass").with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn into_client_succeeds_with_explicit_credentials() {
        let config = ClientConfig::new("user", "pass");
        assert!(config.into_client().is_ok());
    }

    #[test]
    fn env_sourced_credentials_are_accepted() {
        let config = ClientConfig::from_credentials(
            Some("user@example.com".to_string()),
            Some("secret".to_string()),
        )
        .unwrap();
        assert_eq!(config.base_url(), ClientConfig::DEFAULT_BASE_URL);
        assert!(config.into_client().is_ok());
    }

    #[test]
    fn absent_or_empty_credentials_fail_before_any_session() {
        let missing = [
            (None, Some("secret".to_string())),
            (Some("user".to_string()), None),
            (None, None),
            (Some(String::new()), Some("secret".to_string())),
            (Some("user".to_string()), Some(String::new())),
        ];
        for (username, password) in missing {
            let err = ClientConfig::from_credentials(username, password).unwrap_err();
            assert_eq!(err, ConfigError::MissingCredentials);
        }
    }
}
