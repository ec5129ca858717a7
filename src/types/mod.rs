// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for sauna control.
//!
//! This module provides type-safe representations of the values exchanged
//! with the Huum API. Constrained types validate at construction time,
//! preventing invalid values from ever reaching the network.
//!
//! # Types
//!
//! - [`SaunaStatus`] - Operational state of the sauna (closed code set)
//! - [`TargetTemperature`] - Heating target, valid in `[40, 110)` °C

mod status;
mod temperature;

pub use status::{SaunaStatus, config_description, steamer_error_description};
pub use temperature::TargetTemperature;
