// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Operating-point definitions handed to the registrar.

use crate::domain::{ClockId, HwModule, VddId};

/// One frequency/voltage pair of a hardware module.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OppDef {
    pub hwmod: HwModule,
    pub clock: ClockId,
    pub vdd: VddId,
    /// Registered but inactive until a board explicitly enables it.
    pub default_available: bool,
    pub freq_hz: u64,
    pub uv: u32,
}

impl OppDef {
    pub const fn new(
        hwmod: HwModule,
        clock: ClockId,
        vdd: VddId,
        default_available: bool,
        freq_hz: u64,
        uv: u32,
    ) -> Self {
        Self {
            hwmod,
            clock,
            vdd,
            default_available,
            freq_hz,
            uv,
        }
    }
}

/// A registered operating point as held by the authority.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Opp {
    pub freq_hz: u64,
    pub uv: u32,
    pub available: bool,
}
