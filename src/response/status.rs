// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status snapshot decoding.
//!
//! The Huum API payload is loosely typed and has drifted across versions:
//! field names differ from their semantic meaning, numeric fields may
//! arrive as numbers or as numeric strings, and optional fields are
//! simply omitted when not applicable. This module is the single place
//! where those wire quirks are resolved; nothing outside of it may
//! depend on wire spellings.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::types::{SaunaStatus, config_description, steamer_error_description};

type Object = Map<String, Value>;

/// A semantic field and the wire spellings it may arrive under.
///
/// The first present, non-null alias wins.
struct Field {
    name: &'static str,
    wire: &'static [&'static str],
}

const STATUS: Field = Field {
    name: "status",
    wire: &["statusCode"],
};
const DOOR_CLOSED: Field = Field {
    name: "door_closed",
    wire: &["door"],
};
const CURRENT_TEMPERATURE: Field = Field {
    name: "current_temperature",
    wire: &["temperature"],
};
const MAX_HEATING_TIME: Field = Field {
    name: "max_heating_time",
    wire: &["maxHeatingTime"],
};
const TARGET_TEMPERATURE: Field = Field {
    name: "target_temperature",
    wire: &["targetTemperature"],
};
const START_DATE: Field = Field {
    name: "start_date",
    wire: &["startDate"],
};
const END_DATE: Field = Field {
    name: "end_date",
    wire: &["endDate"],
};
const DURATION: Field = Field {
    name: "duration",
    wire: &["duration"],
};
const CONFIG_CODE: Field = Field {
    name: "config_code",
    wire: &["config"],
};
const STEAMER_ERROR_CODE: Field = Field {
    name: "steamer_error_code",
    wire: &["steamerError"],
};
const PAYMENT_END_DATE: Field = Field {
    name: "payment_end_date",
    wire: &["paymentEndDate"],
};
const SAUNA_NAME: Field = Field {
    name: "sauna_name",
    wire: &["saunaName"],
};
const LIGHT: Field = Field {
    name: "light",
    wire: &["light"],
};
const HUMIDITY: Field = Field {
    name: "humidity",
    wire: &["humidity"],
};
const TARGET_HUMIDITY: Field = Field {
    name: "target_humidity",
    wire: &["targetHumidity"],
};

impl Field {
    /// Returns the first present, non-null value for this field.
    fn lookup<'a>(&self, object: &'a Object) -> Option<&'a Value> {
        self.wire
            .iter()
            .find_map(|key| object.get(*key))
            .filter(|value| !value.is_null())
    }

    fn required<'a>(&self, object: &'a Object) -> Result<&'a Value, DecodeError> {
        self.lookup(object)
            .ok_or(DecodeError::MissingField(self.name))
    }

    /// Decodes this field as an integer, coercing numeric strings.
    fn as_integer(&self, value: &Value) -> Result<i64, DecodeError> {
        match value {
            Value::Number(number) => number.as_i64().ok_or_else(|| self.invalid(value)),
            Value::String(text) => text.trim().parse().map_err(|_| self.invalid(value)),
            _ => Err(self.invalid(value)),
        }
    }

    /// Decodes this field as a boolean, coercing 0/1 integers.
    fn as_boolean(&self, value: &Value) -> Result<bool, DecodeError> {
        match value {
            Value::Bool(flag) => Ok(*flag),
            Value::Number(number) => match number.as_i64() {
                Some(0) => Ok(false),
                Some(1) => Ok(true),
                _ => Err(self.invalid(value)),
            },
            _ => Err(self.invalid(value)),
        }
    }

    fn as_text(&self, value: &Value) -> Result<String, DecodeError> {
        match value {
            Value::String(text) => Ok(text.clone()),
            _ => Err(self.invalid(value)),
        }
    }

    fn invalid(&self, value: &Value) -> DecodeError {
        DecodeError::InvalidValue {
            field: self.name,
            message: format!("incompatible value {value}"),
        }
    }

    fn narrowed<T>(&self, value: i64) -> Result<T, DecodeError>
    where
        T: TryFrom<i64>,
    {
        T::try_from(value).map_err(|_| DecodeError::InvalidValue {
            field: self.name,
            message: format!("value {value} is out of range"),
        })
    }

    fn as_timestamp(&self, value: &Value) -> Result<DateTime<Utc>, DecodeError> {
        let seconds = self.as_integer(value)?;
        DateTime::from_timestamp(seconds, 0).ok_or_else(|| DecodeError::InvalidValue {
            field: self.name,
            message: format!("timestamp {seconds} is out of range"),
        })
    }
}

/// An immutable, point-in-time decoded sauna status.
///
/// A snapshot is produced fresh on every decode and carries no reference
/// back to the client that requested it. Optional fields are absent when
/// the payload omitted them (or sent `null`), never defaulted to zero.
///
/// # Examples
///
/// ```
/// use huum_lib::{SaunaStatus, StatusSnapshot};
///
/// let payload = serde_json::json!({
///     "statusCode": 232,
///     "door": true,
///     "temperature": "21",
///     "maxHeatingTime": "3",
/// });
/// let snapshot = StatusSnapshot::from_value(&payload).unwrap();
///
/// assert_eq!(snapshot.status, SaunaStatus::OnlineNotHeating);
/// assert!(snapshot.door_closed);
/// assert_eq!(snapshot.current_temperature, 21);
/// assert!(snapshot.target_temperature.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSnapshot {
    /// Operational state of the sauna.
    pub status: SaunaStatus,

    /// Whether the sauna door is closed.
    pub door_closed: bool,

    /// Current ambient temperature reported by the controller, in Celsius.
    pub current_temperature: i32,

    /// Maximum heating time configured on the controller, in hours.
    pub max_heating_time: u32,

    /// Target temperature of the active or last-commanded heating session.
    ///
    /// The status endpoint omits this while the sauna is idle.
    pub target_temperature: Option<u16>,

    /// Start of the active heating session.
    pub start_date: Option<DateTime<Utc>>,

    /// Scheduled end of the active heating session.
    pub end_date: Option<DateTime<Utc>>,

    /// Remaining heating duration, in seconds.
    pub duration: Option<u32>,

    /// Controller configuration code, resolvable via
    /// [`config_description`](crate::types::config_description).
    pub config_code: Option<u16>,

    /// Steamer diagnostic code, resolvable via
    /// [`steamer_error_description`](crate::types::steamer_error_description).
    pub steamer_error_code: Option<u16>,

    /// Expiry marker of the paid session or subscription.
    pub payment_end_date: Option<String>,

    /// Name assigned to the sauna in the vendor account.
    pub sauna_name: Option<String>,

    /// Light relay state (0 = off, 1 = on), when the controller has one.
    pub light: Option<u8>,

    /// Current humidity reading, for steamer-equipped saunas.
    pub humidity: Option<u16>,

    /// Target humidity, for steamer-equipped saunas.
    pub target_humidity: Option<u16>,
}

impl StatusSnapshot {
    /// Decodes a raw JSON payload into a snapshot.
    ///
    /// Pure function over its input: resolves wire aliases, coerces
    /// numeric strings, and validates the status code.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::UnexpectedFormat`] if the payload is not a JSON
    ///   object.
    /// - [`DecodeError::MissingField`] if a required field is absent.
    /// - [`DecodeError::InvalidValue`] if a field holds an incompatible
    ///   value (e.g. non-numeric text in a numeric field).
    /// - [`DecodeError::UnknownStatusCode`] if the status code maps to no
    ///   known [`SaunaStatus`].
    pub fn from_value(payload: &Value) -> Result<Self, DecodeError> {
        let object = payload.as_object().ok_or_else(|| {
            DecodeError::UnexpectedFormat("status payload is not a JSON object".to_string())
        })?;

        let status_code: u16 = STATUS.narrowed(STATUS.as_integer(STATUS.required(object)?)?)?;
        let status = SaunaStatus::from_code(status_code)?;

        let door_closed = DOOR_CLOSED.as_boolean(DOOR_CLOSED.required(object)?)?;
        let current_temperature: i32 = CURRENT_TEMPERATURE
            .narrowed(CURRENT_TEMPERATURE.as_integer(CURRENT_TEMPERATURE.required(object)?)?)?;
        let max_heating_time: u32 = MAX_HEATING_TIME
            .narrowed(MAX_HEATING_TIME.as_integer(MAX_HEATING_TIME.required(object)?)?)?;

        Ok(Self {
            status,
            door_closed,
            current_temperature,
            max_heating_time,
            target_temperature: decode_optional_integer(object, &TARGET_TEMPERATURE)?,
            start_date: decode_optional_timestamp(object, &START_DATE)?,
            end_date: decode_optional_timestamp(object, &END_DATE)?,
            duration: decode_optional_integer(object, &DURATION)?,
            config_code: decode_optional_integer(object, &CONFIG_CODE)?,
            steamer_error_code: decode_optional_integer(object, &STEAMER_ERROR_CODE)?,
            payment_end_date: decode_optional_text(object, &PAYMENT_END_DATE)?,
            sauna_name: decode_optional_text(object, &SAUNA_NAME)?,
            light: decode_optional_integer(object, &LIGHT)?,
            humidity: decode_optional_integer(object, &HUMIDITY)?,
            target_humidity: decode_optional_integer(object, &TARGET_HUMIDITY)?,
        })
    }

    /// Resolves the configuration code to its description, if both the
    /// code and a table entry exist.
    #[must_use]
    pub fn config_description(&self) -> Option<&'static str> {
        self.config_code.and_then(config_description)
    }

    /// Resolves the steamer error code to its description, if both the
    /// code and a table entry exist.
    #[must_use]
    pub fn steamer_error_description(&self) -> Option<&'static str> {
        self.steamer_error_code.and_then(steamer_error_description)
    }
}

fn decode_optional_integer<T>(object: &Object, field: &Field) -> Result<Option<T>, DecodeError>
where
    T: TryFrom<i64>,
{
    field
        .lookup(object)
        .map(|value| field.narrowed(field.as_integer(value)?))
        .transpose()
}

fn decode_optional_timestamp(
    object: &Object,
    field: &Field,
) -> Result<Option<DateTime<Utc>>, DecodeError> {
    field
        .lookup(object)
        .map(|value| field.as_timestamp(value))
        .transpose()
}

fn decode_optional_text(object: &Object, field: &Field) -> Result<Option<String>, DecodeError> {
    field
        .lookup(object)
        .map(|value| field.as_text(value))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_idle_payload_with_string_numerics() {
        let payload = json!({
            "statusCode": 232,
            "door": true,
            "temperature": "21",
            "maxHeatingTime": "3",
            "paymentEndDate": null,
            "saunaName": "test",
        });

        let snapshot = StatusSnapshot::from_value(&payload).unwrap();
        assert_eq!(snapshot.status, SaunaStatus::OnlineNotHeating);
        assert!(snapshot.door_closed);
        assert_eq!(snapshot.current_temperature, 21);
        assert_eq!(snapshot.max_heating_time, 3);
        assert!(snapshot.target_temperature.is_none());
        assert!(snapshot.payment_end_date.is_none());
        assert_eq!(snapshot.sauna_name.as_deref(), Some("test"));
    }

    #[test]
    fn decodes_heating_payload() {
        let payload = json!({
            "statusCode": 231,
            "door": true,
            "temperature": "21",
            "maxHeatingTime": "3",
            "targetTemperature": "75",
            "startDate": 1_631_623_054,
            "endDate": 1_631_633_854,
            "duration": 179,
        });

        let snapshot = StatusSnapshot::from_value(&payload).unwrap();
        assert_eq!(snapshot.status, SaunaStatus::OnlineHeating);
        assert_eq!(snapshot.target_temperature, Some(75));
        assert_eq!(snapshot.duration, Some(179));
        assert_eq!(
            snapshot.start_date.unwrap(),
            DateTime::from_timestamp(1_631_623_054, 0).unwrap()
        );
        assert_eq!(
            snapshot.end_date.unwrap(),
            DateTime::from_timestamp(1_631_633_854, 0).unwrap()
        );
    }

    #[test]
    fn accepts_plain_numbers_where_strings_are_allowed() {
        let payload = json!({
            "statusCode": 232,
            "door": true,
            "temperature": 80,
            "maxHeatingTime": 1337,
        });

        let snapshot = StatusSnapshot::from_value(&payload).unwrap();
        assert_eq!(snapshot.current_temperature, 80);
        assert_eq!(snapshot.max_heating_time, 1337);
    }

    #[test]
    fn coerces_numeric_door_flag() {
        let payload = json!({
            "statusCode": 232,
            "door": 0,
            "temperature": 20,
            "maxHeatingTime": 3,
        });

        let snapshot = StatusSnapshot::from_value(&payload).unwrap();
        assert!(!snapshot.door_closed);
    }

    #[test]
    fn missing_required_field_names_the_semantic_field() {
        let payload = json!({
            "statusCode": 232,
            "temperature": 20,
            "maxHeatingTime": 3,
        });

        let err = StatusSnapshot::from_value(&payload).unwrap_err();
        assert!(matches!(err, DecodeError::MissingField("door_closed")));
    }

    #[test]
    fn unparseable_numeric_text_is_rejected() {
        let payload = json!({
            "statusCode": 232,
            "door": true,
            "temperature": "warm",
            "maxHeatingTime": 3,
        });

        let err = StatusSnapshot::from_value(&payload).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidValue {
                field: "current_temperature",
                ..
            }
        ));
    }

    #[test]
    fn unknown_status_code_is_surfaced() {
        let payload = json!({
            "statusCode": 299,
            "door": true,
            "temperature": 20,
            "maxHeatingTime": 3,
        });

        let err = StatusSnapshot::from_value(&payload).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownStatusCode(299)));
    }

    #[test]
    fn null_optional_counts_as_absent_but_bad_optional_is_an_error() {
        let payload = json!({
            "statusCode": 231,
            "door": true,
            "temperature": 20,
            "maxHeatingTime": 3,
            "targetTemperature": null,
        });
        let snapshot = StatusSnapshot::from_value(&payload).unwrap();
        assert!(snapshot.target_temperature.is_none());

        let payload = json!({
            "statusCode": 231,
            "door": true,
            "temperature": 20,
            "maxHeatingTime": 3,
            "targetTemperature": "soon",
        });
        let err = StatusSnapshot::from_value(&payload).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidValue {
                field: "target_temperature",
                ..
            }
        ));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let err = StatusSnapshot::from_value(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedFormat(_)));
    }

    #[test]
    fn diagnostic_codes_resolve_to_descriptions() {
        let payload = json!({
            "statusCode": 232,
            "door": true,
            "temperature": 20,
            "maxHeatingTime": 3,
            "config": 3,
            "steamerError": 1,
        });

        let snapshot = StatusSnapshot::from_value(&payload).unwrap();
        assert_eq!(
            snapshot.config_description(),
            Some("Configured to use both light and steamer systems")
        );
        assert_eq!(
            snapshot.steamer_error_description(),
            Some("No water in steamer, steamer system not allowed to start")
        );
    }

    #[test]
    fn negative_ambient_temperature_is_accepted() {
        let payload = json!({
            "statusCode": 230,
            "door": true,
            "temperature": "-5",
            "maxHeatingTime": 3,
        });

        let snapshot = StatusSnapshot::from_value(&payload).unwrap();
        assert_eq!(snapshot.current_temperature, -5);
    }
}
