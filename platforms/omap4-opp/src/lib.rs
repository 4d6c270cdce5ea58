// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! OMAP4 operating performance points.
//!
//! Voltage levels with their efuse and voltage-processor calibration data,
//! MPU/IVA to CORE voltage dependencies, and the per-module OPP lists of the
//! OMAP4430 and OMAP4460. The board selects the revision through
//! [`Omap4BoardIf`] and calls [`omap4_opp_init`] once at boot.

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

mod board;
pub mod fuse;
#[cfg(feature = "omap4430")]
pub mod omap443x;
#[cfg(feature = "omap4460")]
pub mod omap446x;

use core::fmt;

pub use board::{Omap4BoardIf, omap4_mpu_opp_enable, omap4_opp_init, omap4_opp_init_for};
use kopp::SocOppData;

/// OMAP4 silicon revision.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ChipRevision {
    Omap4430,
    Omap4460,
}

impl ChipRevision {
    pub const fn name(self) -> &'static str {
        match self {
            ChipRevision::Omap4430 => "omap4430",
            ChipRevision::Omap4460 => "omap4460",
        }
    }

    /// Decodes the control-module `ID_CODE` register.
    ///
    /// Returns `None` for parts without OPP data here (e.g. OMAP4470).
    pub const fn from_idcode(idcode: u32) -> Option<Self> {
        let hawkeye = (idcode >> 12) & 0xffff;
        match hawkeye {
            0xb852 | 0xb95c => Some(ChipRevision::Omap4430),
            0xb94e => Some(ChipRevision::Omap4460),
            _ => None,
        }
    }
}

impl fmt::Display for ChipRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// OPP data of `rev`, if it is built in.
pub fn opp_data(rev: ChipRevision) -> Option<&'static SocOppData> {
    match rev {
        #[cfg(feature = "omap4430")]
        ChipRevision::Omap4430 => Some(&omap443x::OMAP443X_OPP_DATA),
        #[cfg(feature = "omap4460")]
        ChipRevision::Omap4460 => Some(&omap446x::OMAP446X_OPP_DATA),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idcode_decoding() {
        assert_eq!(ChipRevision::from_idcode(0x0b85_202f), Some(ChipRevision::Omap4430));
        assert_eq!(ChipRevision::from_idcode(0x3b95_c02f), Some(ChipRevision::Omap4430));
        assert_eq!(ChipRevision::from_idcode(0x0b94_e02f), Some(ChipRevision::Omap4460));
        assert_eq!(ChipRevision::from_idcode(0x0b97_502f), None);
    }

    #[test]
    fn every_revision_has_data() {
        for rev in [ChipRevision::Omap4430, ChipRevision::Omap4460] {
            let data = opp_data(rev).unwrap();
            assert_eq!(data.name, rev.name());
        }
    }
}
