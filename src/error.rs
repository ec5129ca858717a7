// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Huum client library.
//!
//! This module provides a layered error hierarchy covering the failure
//! modes of the library: value validation, safety gating, response
//! decoding, API communication, and configuration.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A value failed local validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A safety pre-condition blocked a command.
    #[error("safety error: {0}")]
    Safety(#[from] SafetyError),

    /// A response body did not conform to the expected schema.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The API rejected a request or the transport failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The client configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur before any network request is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A target temperature is outside the supported range.
    ///
    /// The upper bound is exclusive: `max` itself is rejected.
    #[error("temperature '{actual}' must be within {min}-{max}")]
    TemperatureOutOfRange {
        /// Lowest accepted temperature in Celsius.
        min: u8,
        /// Exclusive upper bound in Celsius.
        max: u8,
        /// The rejected value, after any unit conversion.
        actual: i64,
    },
}

/// Errors raised by the pre-flight safety check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SafetyError {
    /// The sauna door is open, so heating must not start.
    #[error("can not start sauna when door is open")]
    DoorOpen,
}

/// Errors related to decoding status payloads.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// JSON deserialization failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required field is missing from the payload.
    ///
    /// The field is named by its semantic name, not its wire spelling.
    #[error("missing field in response: {0}")]
    MissingField(&'static str),

    /// A field is present but holds an incompatible value.
    #[error("failed to decode {field}: {message}")]
    InvalidValue {
        /// The semantic name of the offending field.
        field: &'static str,
        /// Description of the decoding failure.
        message: String,
    },

    /// The status code maps to no known [`SaunaStatus`](crate::SaunaStatus).
    ///
    /// Unknown codes fail closed; they are never defaulted to a known
    /// status.
    #[error("unknown sauna status code: {0}")]
    UnknownStatusCode(u16),

    /// The payload is not shaped like a status object at all.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// Errors related to API communication.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP round trip itself failed (connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with HTTP 400.
    #[error("bad request")]
    BadRequest,

    /// The API answered with HTTP 401.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The API answered with HTTP 403.
    #[error("forbidden")]
    Forbidden,

    /// Any other non-2xx response.
    #[error("request failed with HTTP {status}: {body}")]
    RequestFailed {
        /// The HTTP status code.
        status: u16,
        /// The response body text.
        body: String,
    },
}

/// Errors related to client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither explicit credentials nor the `HUUM_USERNAME` /
    /// `HUUM_PASSWORD` environment variables were available.
    #[error("missing credentials: set HUUM_USERNAME and HUUM_PASSWORD or pass them explicitly")]
    MissingCredentials,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_error_names_value_and_bounds() {
        let err = ValueError::TemperatureOutOfRange {
            min: 40,
            max: 110,
            actual: 115,
        };
        let text = err.to_string();
        assert!(text.contains("115"));
        assert!(text.contains("40-110"));
    }

    #[test]
    fn error_from_safety_error() {
        let err: Error = SafetyError::DoorOpen.into();
        assert!(matches!(err, Error::Safety(SafetyError::DoorOpen)));
    }

    #[test]
    fn decode_error_display() {
        let err = DecodeError::MissingField("door_closed");
        assert_eq!(err.to_string(), "missing field in response: door_closed");

        let err = DecodeError::UnknownStatusCode(999);
        assert_eq!(err.to_string(), "unknown sauna status code: 999");
    }

    #[test]
    fn api_error_display() {
        let err = ApiError::RequestFailed {
            status: 500,
            body: "server melted".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "request failed with HTTP 500: server melted"
        );
    }
}
