// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Names of voltage domains, devices and clocks.
//!
//! The power-management authority resolves these to opaque handles once, at
//! registration time. Only the canonical names are strings.

use core::fmt;

use strum::{EnumCount, EnumIter};

/// A voltage rail (VDD).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, EnumCount, EnumIter)]
pub enum VddId {
    Mpu,
    Iva,
    Core,
}

impl VddId {
    /// Canonical voltage-domain name.
    pub const fn name(self) -> &'static str {
        match self {
            VddId::Mpu => "mpu",
            VddId::Iva => "iva",
            VddId::Core => "core",
        }
    }
}

impl fmt::Display for VddId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hardware module owning a set of operating points.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, EnumCount, EnumIter)]
pub enum HwModule {
    /// MPU subsystem.
    Mpu,
    /// L3 main interconnect.
    L3Main1,
    /// IVA-HD accelerator.
    Iva,
    /// SGX graphics.
    Gpu,
    /// Face detection.
    Fdif,
    /// Tesla DSP.
    Dsp,
    /// MIPI HSI.
    Hsi,
    /// Audio back-end.
    Aess,
}

impl HwModule {
    /// Canonical hwmod name.
    pub const fn name(self) -> &'static str {
        match self {
            HwModule::Mpu => "mpu",
            HwModule::L3Main1 => "l3_main_1",
            HwModule::Iva => "iva",
            HwModule::Gpu => "gpu",
            HwModule::Fdif => "fdif",
            HwModule::Dsp => "dsp",
            HwModule::Hsi => "hsi",
            HwModule::Aess => "aess",
        }
    }
}

impl fmt::Display for HwModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Functional clock driving a hardware module.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ClockId {
    DpllMpu,
    VirtDpllMpu,
    VirtL3,
    DpllIvaM5x2,
    DpllIvaM4x2,
    DpllPerM7x2,
    Fdif,
    Hsi,
    Abe,
}

impl ClockId {
    /// Canonical clock name.
    pub const fn name(self) -> &'static str {
        match self {
            ClockId::DpllMpu => "dpll_mpu_ck",
            ClockId::VirtDpllMpu => "virt_dpll_mpu_ck",
            ClockId::VirtL3 => "virt_l3_ck",
            ClockId::DpllIvaM5x2 => "dpll_iva_m5x2_ck",
            ClockId::DpllIvaM4x2 => "dpll_iva_m4x2_ck",
            ClockId::DpllPerM7x2 => "dpll_per_m7x2_ck",
            ClockId::Fdif => "fdif_fck",
            ClockId::Hsi => "hsi_fck",
            ClockId::Abe => "abe_clk",
        }
    }
}

impl fmt::Display for ClockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn names_are_unique() {
        let names: Vec<_> = HwModule::iter().map(HwModule::name).collect();
        for (i, a) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(a), "duplicate hwmod name {a}");
        }
        assert_eq!(names.len(), HwModule::COUNT);
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(format!("{}", HwModule::L3Main1), "l3_main_1");
        assert_eq!(format!("{}", VddId::Core), "core");
        assert_eq!(format!("{}", ClockId::VirtDpllMpu), "virt_dpll_mpu_ck");
    }
}
