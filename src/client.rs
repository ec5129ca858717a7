// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for the Huum sauna cloud API.
//!
//! One client owns one authenticated HTTP session and addresses exactly
//! one sauna. All operations return a decoded [`StatusSnapshot`]. The
//! client holds no mutable state between calls; concurrent calls on the
//! same instance race only at the remote device.

use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::error::{ApiError, DecodeError, Error, Result, SafetyError};
use crate::response::StatusSnapshot;
use crate::types::{SaunaStatus, TargetTemperature};

/// HTTP Basic credentials for the vendor account.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

/// Client for one cloud-connected Huum sauna.
///
/// Created via [`ClientConfig`](crate::ClientConfig); the configuration
/// step is where credentials are checked and the session is opened.
///
/// # Examples
///
/// ```no_run
/// use huum_lib::{ClientConfig, TargetTemperature};
///
/// #[tokio::main]
/// async fn main() -> huum_lib::Result<()> {
///     let sauna = ClientConfig::from_env()?.into_client()?;
///
///     let status = sauna.status().await?;
///     println!("sauna is {}", status.status);
///
///     // Refuses to start while the door is open
///     let target = TargetTemperature::from_celsius(80)?;
///     sauna.turn_on(target, false).await?;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct SaunaClient {
    base_url: String,
    client: reqwest::Client,
    credentials: Credentials,
}

impl SaunaClient {
    pub(crate) fn from_parts(
        base_url: String,
        client: reqwest::Client,
        credentials: Credentials,
    ) -> Self {
        Self {
            base_url,
            client,
            credentials,
        }
    }

    /// Returns the base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the current sauna status.
    ///
    /// Pure read; the only side effect is the network call. Note that
    /// the status endpoint omits the target temperature while the sauna
    /// is idle; see [`status_or_stop`](Self::status_or_stop).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers non-2xx,
    /// or the payload does not decode.
    pub async fn status(&self) -> Result<StatusSnapshot> {
        let payload = self.request(Method::GET, "status", None).await?;
        Ok(StatusSnapshot::from_value(&payload)?)
    }

    /// Starts heating toward the given target temperature.
    ///
    /// Unless `safety_override` is set, the door is checked first via
    /// [`status`](Self::status); an open door aborts before any
    /// state-changing request is issued. The temperature itself was
    /// already validated when the [`TargetTemperature`] was constructed,
    /// so an invalid value can never reach the device.
    ///
    /// # Errors
    ///
    /// Returns [`SafetyError::DoorOpen`] if the door is open and no
    /// override was requested, plus any status/start request failure.
    pub async fn turn_on(
        &self,
        target: TargetTemperature,
        safety_override: bool,
    ) -> Result<StatusSnapshot> {
        if !safety_override {
            self.check_door().await?;
        }

        let body = serde_json::json!({ "targetTemperature": target.as_celsius() });
        let payload = self.request(Method::POST, "start", Some(body)).await?;
        Ok(StatusSnapshot::from_value(&payload)?)
    }

    /// Stops heating.
    ///
    /// No pre-condition; stopping is always allowed. The response of the
    /// stop endpoint includes the last-configured target temperature.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not
    /// decode.
    pub async fn turn_off(&self) -> Result<StatusSnapshot> {
        let payload = self.request(Method::POST, "stop", None).await?;
        Ok(StatusSnapshot::from_value(&payload)?)
    }

    /// Sets the thermostat target temperature.
    ///
    /// The API has no dedicated thermostat endpoint; this is an alias
    /// for [`turn_on`](Self::turn_on) with identical arguments and
    /// behavior, kept for call-site readability.
    ///
    /// # Errors
    ///
    /// Identical to [`turn_on`](Self::turn_on).
    pub async fn set_temperature(
        &self,
        target: TargetTemperature,
        safety_override: bool,
    ) -> Result<StatusSnapshot> {
        self.turn_on(target, safety_override).await
    }

    /// Fetches the status, issuing a stop command when the sauna is idle.
    ///
    /// The status endpoint omits the target temperature while the sauna
    /// is not heating, but the stop endpoint reports it. When the status
    /// decodes to exactly [`SaunaStatus::OnlineNotHeating`], an
    /// idempotent [`turn_off`](Self::turn_off) is issued and its snapshot
    /// returned instead, so the caller always sees the configured target.
    /// Heating, offline, locked, and emergency-stop states are returned
    /// as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if either request fails or does not decode.
    pub async fn status_or_stop(&self) -> Result<StatusSnapshot> {
        let snapshot = self.status().await?;
        if snapshot.status == SaunaStatus::OnlineNotHeating {
            return self.turn_off().await;
        }
        Ok(snapshot)
    }

    /// Toggles the sauna light relay.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not
    /// decode.
    pub async fn toggle_light(&self) -> Result<StatusSnapshot> {
        let payload = self.request(Method::POST, "light", None).await?;
        Ok(StatusSnapshot::from_value(&payload)?)
    }

    /// Fails with [`SafetyError::DoorOpen`] unless the door is closed.
    async fn check_door(&self) -> Result<()> {
        let snapshot = self.status().await?;
        if !snapshot.door_closed {
            return Err(SafetyError::DoorOpen.into());
        }
        Ok(())
    }

    /// Issues one authenticated request and classifies the response.
    async fn request(&self, method: Method, endpoint: &str, body: Option<Value>) -> Result<Value> {
        let url = format!("{}/{endpoint}", self.base_url);

        tracing::debug!(method = %method, url = %url, "sending request");

        let mut request = self
            .client
            .request(method, &url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password));
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::Transport)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %body, "request rejected");
            return Err(Error::Api(classify_failure(status, body)));
        }

        let text = response.text().await.map_err(ApiError::Transport)?;
        let payload: Value = serde_json::from_str(&text).map_err(DecodeError::Json)?;

        tracing::debug!(payload = %payload, "received response");

        Ok(payload)
    }
}

/// Maps a non-2xx HTTP status to the error taxonomy.
fn classify_failure(status: StatusCode, body: String) -> ApiError {
    match status.as_u16() {
        400 => ApiError::BadRequest,
        401 => ApiError::NotAuthenticated,
        403 => ApiError::Forbidden,
        code => ApiError::RequestFailed { status: code, body },
    }
}
