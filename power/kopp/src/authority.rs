// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! The power-management authority the OPP tables are published to.

use crate::{domain::HwModule, error::OppResult};

/// Opaque handle of a device known to the authority.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DeviceHandle(usize);

impl DeviceHandle {
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    pub const fn as_usize(self) -> usize {
        self.0
    }
}

/// Keeper of the per-device operating points.
///
/// Implemented by the platform's OPP library; [`OppRegistry`] is an
/// in-memory implementation.
///
/// [`OppRegistry`]: crate::OppRegistry
pub trait OppAuthority {
    /// Resolves a hardware module to the device that owns its OPPs.
    fn device(&self, hwmod: HwModule) -> Option<DeviceHandle>;

    /// Adds an operating point to `dev`, inactive unless `available`.
    fn add_opp(&mut self, dev: DeviceHandle, freq_hz: u64, uv: u32, available: bool) -> OppResult;

    /// Makes the operating points of `dev` at `freq_hz` available.
    fn enable_opp(&mut self, dev: DeviceHandle, freq_hz: u64) -> OppResult;
}
