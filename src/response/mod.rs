// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response decoding for Huum API payloads.
//!
//! Every endpoint of the API answers with the same status object; this
//! module turns that loosely-typed payload into the canonical
//! [`StatusSnapshot`].

mod status;

pub use status::StatusSnapshot;
