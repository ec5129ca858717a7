// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sauna status codes and diagnostic code tables.
//!
//! The Huum API reports the sauna state as a numeric code. This module
//! maps those codes to a closed enumeration and provides the fixed
//! lookup tables for the diagnostic codes carried alongside.

use std::fmt;

use serde::Serialize;

use crate::error::DecodeError;

/// The operational state of a sauna, as reported by the API.
///
/// Every variant has exactly one wire code and one description. Decoding
/// an unknown code is an error, never a silent default.
///
/// # Examples
///
/// ```
/// use huum_lib::SaunaStatus;
///
/// let status = SaunaStatus::from_code(231).unwrap();
/// assert_eq!(status, SaunaStatus::OnlineHeating);
/// assert!(status.is_heating());
/// assert_eq!(status.description(), "online and heating");
///
/// assert!(SaunaStatus::from_code(999).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SaunaStatus {
    /// The sauna controller is not reachable by the cloud.
    Offline,
    /// The sauna is online and actively heating.
    OnlineHeating,
    /// The sauna is online but idle.
    OnlineNotHeating,
    /// The sauna is being used by another account and is locked.
    Locked,
    /// The emergency stop has been triggered.
    EmergencyStop,
}

impl SaunaStatus {
    /// Returns the numeric wire code for this status.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Offline => 230,
            Self::OnlineHeating => 231,
            Self::OnlineNotHeating => 232,
            Self::Locked => 233,
            Self::EmergencyStop => 400,
        }
    }

    /// Maps a wire code to a status.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownStatusCode`] for any code outside
    /// the known set. Unknown codes must be surfaced, not hidden.
    pub fn from_code(code: u16) -> Result<Self, DecodeError> {
        match code {
            230 => Ok(Self::Offline),
            231 => Ok(Self::OnlineHeating),
            232 => Ok(Self::OnlineNotHeating),
            233 => Ok(Self::Locked),
            400 => Ok(Self::EmergencyStop),
            other => Err(DecodeError::UnknownStatusCode(other)),
        }
    }

    /// Returns the human-readable description of this status.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::OnlineHeating => "online and heating",
            Self::OnlineNotHeating => "online but not heating",
            Self::Locked => "being used by another user and is locked",
            Self::EmergencyStop => "emergency stop",
        }
    }

    /// Returns `true` if the sauna is actively heating.
    #[must_use]
    pub const fn is_heating(&self) -> bool {
        matches!(self, Self::OnlineHeating)
    }
}

impl fmt::Display for SaunaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Resolves a controller configuration code to its description.
///
/// # Examples
///
/// ```
/// use huum_lib::types::config_description;
///
/// assert_eq!(
///     config_description(2),
///     Some("Configured to use steamer system")
/// );
/// assert_eq!(config_description(9), None);
/// ```
#[must_use]
pub const fn config_description(code: u16) -> Option<&'static str> {
    match code {
        1 => Some("Configured to use light system"),
        2 => Some("Configured to use steamer system"),
        3 => Some("Configured to use both light and steamer systems"),
        _ => None,
    }
}

/// Resolves a steamer error code to its description.
#[must_use]
pub const fn steamer_error_description(code: u16) -> Option<&'static str> {
    match code {
        1 => Some("No water in steamer, steamer system not allowed to start"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SaunaStatus; 5] = [
        SaunaStatus::Offline,
        SaunaStatus::OnlineHeating,
        SaunaStatus::OnlineNotHeating,
        SaunaStatus::Locked,
        SaunaStatus::EmergencyStop,
    ];

    #[test]
    fn every_status_round_trips_through_its_code() {
        for status in ALL {
            assert_eq!(SaunaStatus::from_code(status.code()).unwrap(), status);
        }
    }

    #[test]
    fn every_status_has_a_description() {
        for status in ALL {
            assert!(!status.description().is_empty());
        }
    }

    #[test]
    fn unknown_code_fails_closed() {
        let err = SaunaStatus::from_code(234).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownStatusCode(234)));
        assert!(SaunaStatus::from_code(0).is_err());
        assert!(SaunaStatus::from_code(200).is_err());
    }

    #[test]
    fn only_heating_status_is_heating() {
        for status in ALL {
            assert_eq!(status.is_heating(), status == SaunaStatus::OnlineHeating);
        }
    }

    #[test]
    fn diagnostic_code_tables() {
        assert!(config_description(1).is_some());
        assert!(config_description(2).is_some());
        assert!(config_description(3).is_some());
        assert!(config_description(0).is_none());
        assert!(config_description(4).is_none());

        assert!(steamer_error_description(1).is_some());
        assert!(steamer_error_description(2).is_none());
    }

    #[test]
    fn display_uses_description() {
        assert_eq!(SaunaStatus::Offline.to_string(), "offline");
    }
}
