// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Target temperature type for heating commands.
//!
//! The Huum controller accepts target temperatures from 40°C up to, but
//! not including, 110°C. This module provides a type-safe representation
//! that enforces the range at construction time, so an invalid value can
//! never reach the request path.

use std::fmt;

use serde::Serialize;

use crate::error::ValueError;

/// A validated target temperature in Celsius.
///
/// The valid range is `[40, 110)`: 40 is accepted, 110 is rejected.
/// All API communication uses Celsius; Fahrenheit inputs are converted
/// and truncated toward zero before validation.
///
/// # Examples
///
/// ```
/// use huum_lib::TargetTemperature;
///
/// let target = TargetTemperature::from_celsius(80).unwrap();
/// assert_eq!(target.as_celsius(), 80);
///
/// // 212°F converts to exactly 100°C
/// let target = TargetTemperature::from_fahrenheit(212.0).unwrap();
/// assert_eq!(target.as_celsius(), 100);
///
/// // The upper bound is exclusive
/// assert!(TargetTemperature::from_celsius(110).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TargetTemperature(u8);

impl TargetTemperature {
    /// Lowest accepted temperature in Celsius.
    pub const MIN_CELSIUS: u8 = 40;

    /// Exclusive upper bound in Celsius; this value itself is rejected.
    pub const MAX_CELSIUS: u8 = 110;

    /// Creates a target temperature from a Celsius value.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::TemperatureOutOfRange`] if the value lies
    /// outside `[40, 110)`. The error message names both the rejected
    /// value and the valid bounds.
    pub fn from_celsius(value: i64) -> Result<Self, ValueError> {
        let out_of_range = || ValueError::TemperatureOutOfRange {
            min: Self::MIN_CELSIUS,
            max: Self::MAX_CELSIUS,
            actual: value,
        };

        let celsius = u8::try_from(value).map_err(|_| out_of_range())?;
        if !(Self::MIN_CELSIUS..Self::MAX_CELSIUS).contains(&celsius) {
            return Err(out_of_range());
        }
        Ok(Self(celsius))
    }

    /// Creates a target temperature from a Fahrenheit value.
    ///
    /// The value is converted via `(f - 32) * 5 / 9` and truncated toward
    /// zero to an integer before validation; that truncated integer is
    /// what gets transmitted. A 240°F input truncates to 115°C and is
    /// rejected, not rounded to 116.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::TemperatureOutOfRange`] if the converted
    /// value lies outside `[40, 110)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use huum_lib::TargetTemperature;
    ///
    /// assert_eq!(
    ///     TargetTemperature::from_fahrenheit(229.9).unwrap().as_celsius(),
    ///     109
    /// );
    /// assert!(TargetTemperature::from_fahrenheit(230.0).is_err());
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_fahrenheit(value: f64) -> Result<Self, ValueError> {
        let celsius = ((value - 32.0) * 5.0 / 9.0).trunc() as i64;
        Self::from_celsius(celsius)
    }

    /// Returns the temperature in Celsius.
    #[must_use]
    pub const fn as_celsius(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for TargetTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\u{b0}C", self.0)
    }
}

impl TryFrom<i64> for TargetTemperature {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_celsius(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_full_celsius_range() {
        for value in 40..110 {
            let target = TargetTemperature::from_celsius(value).unwrap();
            assert_eq!(i64::from(target.as_celsius()), value);
        }
    }

    #[test]
    fn lower_bound_is_inclusive_upper_is_exclusive() {
        assert!(TargetTemperature::from_celsius(40).is_ok());
        assert!(TargetTemperature::from_celsius(109).is_ok());
        assert!(TargetTemperature::from_celsius(39).is_err());
        assert!(TargetTemperature::from_celsius(110).is_err());
    }

    #[test]
    fn rejects_extreme_values() {
        assert!(TargetTemperature::from_celsius(-40).is_err());
        assert!(TargetTemperature::from_celsius(1000).is_err());
    }

    #[test]
    fn fahrenheit_conversion_truncates_toward_zero() {
        assert_eq!(
            TargetTemperature::from_fahrenheit(212.0).unwrap().as_celsius(),
            100
        );
        assert_eq!(
            TargetTemperature::from_fahrenheit(104.0).unwrap().as_celsius(),
            40
        );
        // 229.9°F is 109.94°C, which truncates to an accepted 109
        assert_eq!(
            TargetTemperature::from_fahrenheit(229.9).unwrap().as_celsius(),
            109
        );
        // 230°F is exactly 110°C, which the exclusive bound rejects
        assert!(TargetTemperature::from_fahrenheit(230.0).is_err());
    }

    #[test]
    fn fahrenheit_error_reports_converted_value() {
        // 240°F truncates to 115°C, not 116
        let err = TargetTemperature::from_fahrenheit(240.0).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("115"));
        assert!(text.contains("40-110"));
    }

    #[test]
    fn try_from_matches_constructor() {
        assert_eq!(
            TargetTemperature::try_from(75).unwrap(),
            TargetTemperature::from_celsius(75).unwrap()
        );
        assert!(TargetTemperature::try_from(200).is_err());
    }

    #[test]
    fn display_formats_as_celsius() {
        let target = TargetTemperature::from_celsius(85).unwrap();
        assert_eq!(target.to_string(), "85°C");
    }
}
