// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Huum Lib - A Rust client library for the Huum sauna cloud API.
//!
//! This library authenticates against the vendor's REST API, issues the
//! device commands (status, start, stop, light), and decodes the
//! loosely-typed JSON responses into a stable, typed status model.
//!
//! # Safety Gating
//!
//! Heating commands are gated twice, both times before any
//! state-changing request leaves the process:
//!
//! - Target temperatures are validated at construction of
//!   [`TargetTemperature`]; the accepted range is 40°C up to, but not
//!   including, 110°C.
//! - Unless explicitly overridden, [`SaunaClient::turn_on`] first checks
//!   that the sauna door is closed and refuses to start otherwise.
//!
//! # Quick Start
//!
//! ```no_run
//! use huum_lib::{ClientConfig, TargetTemperature};
//!
//! #[tokio::main]
//! async fn main() -> huum_lib::Result<()> {
//!     // Credentials from HUUM_USERNAME / HUUM_PASSWORD
//!     let sauna = ClientConfig::from_env()?.into_client()?;
//!
//!     let status = sauna.status().await?;
//!     println!("door closed: {}", status.door_closed);
//!
//!     let target = TargetTemperature::from_celsius(80)?;
//!     let status = sauna.turn_on(target, false).await?;
//!     println!("target: {:?}", status.target_temperature);
//!
//!     sauna.turn_off().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Fahrenheit Inputs
//!
//! All internal logic and API communication use Celsius. Fahrenheit
//! inputs are converted and truncated toward zero before validation:
//!
//! ```
//! use huum_lib::TargetTemperature;
//!
//! let target = TargetTemperature::from_fahrenheit(212.0).unwrap();
//! assert_eq!(target.as_celsius(), 100);
//! ```

mod client;
mod config;
pub mod error;
pub mod response;
pub mod types;

pub use client::{Credentials, SaunaClient};
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, DecodeError, Error, Result, SafetyError, ValueError};
pub use response::StatusSnapshot;
pub use types::{SaunaStatus, TargetTemperature};
