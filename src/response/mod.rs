// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed records for `HomeWizard` JSON payloads.
//!
//! The v1 and v2 APIs describe the same concepts with different field sets.
//! Each record here is the canonical shape for one concept; fields that a
//! payload does not carry are `None`.

mod data;
mod de;
mod device;
mod state;
mod system;

pub use data::{DataSnapshot, ExternalDevice, ExternalDeviceType};
pub use device::DeviceInfo;
pub use state::{StateUpdate, SwitchState};
pub use system::{SystemConfig, SystemUpdate};
