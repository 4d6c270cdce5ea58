// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Per-domain voltage levels and their calibration metadata.

use crate::domain::VddId;

/// Adaptive Body Bias mode applied while a level is active.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum AbbMode {
    /// The domain has no ABB LDO.
    #[default]
    None,
    /// ABB bypassed, nominal body bias.
    Nominal,
    /// Forward body bias for the fast OPPs.
    Fast,
}

/// Efuse register holding the per-chip calibrated voltage of a level.
///
/// The value is an offset into the control module; decoding the fuse is up
/// to the fuse reader.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct FuseReg(u16);

impl FuseReg {
    pub const fn new(offset: u16) -> Self {
        Self(offset)
    }

    pub const fn offset(self) -> u16 {
        self.0
    }
}

/// Voltage processor error trim bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct VpTrim {
    pub err_min_limit: u8,
    pub err_gain: u8,
}

/// A discrete voltage level of one domain.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VoltageLevel {
    pub vdd: VddId,
    pub nominal_uv: u32,
    /// Margin added on top of the calibrated voltage.
    pub margin_uv: u32,
    pub fuse: FuseReg,
    pub trim: VpTrim,
    pub abb: AbbMode,
}

impl VoltageLevel {
    pub const fn new(
        vdd: VddId,
        nominal_uv: u32,
        margin_uv: u32,
        fuse: FuseReg,
        err_min_limit: u8,
        err_gain: u8,
        abb: AbbMode,
    ) -> Self {
        Self {
            vdd,
            nominal_uv,
            margin_uv,
            fuse,
            trim: VpTrim {
                err_min_limit,
                err_gain,
            },
            abb,
        }
    }

    /// Highest voltage this level may be driven to once calibrated.
    pub const fn max_uv(&self) -> u32 {
        self.nominal_uv.saturating_add(self.margin_uv)
    }
}

/// Ordered voltage levels of one domain.
#[derive(Clone, Copy, Debug)]
pub struct VoltageTable {
    pub vdd: VddId,
    pub levels: &'static [VoltageLevel],
}

impl VoltageTable {
    pub const fn new(vdd: VddId, levels: &'static [VoltageLevel]) -> Self {
        Self { vdd, levels }
    }

    /// Finds the level with exactly `uv` as nominal voltage.
    pub fn find(&self, uv: u32) -> Option<&'static VoltageLevel> {
        self.levels.iter().find(|l| l.nominal_uv == uv)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static VoltageLevel> + 'static {
        let levels = self.levels;
        levels.iter()
    }

    pub const fn len(&self) -> usize {
        self.levels.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Nominal voltage of the highest level.
    pub fn max_uv(&self) -> Option<u32> {
        self.levels.iter().map(|l| l.nominal_uv).max()
    }

    /// Whether the nominal voltages are distinct and strictly ascending.
    pub fn is_strictly_ascending(&self) -> bool {
        self.levels
            .windows(2)
            .all(|w| w[0].nominal_uv < w[1].nominal_uv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    static LEVELS: [VoltageLevel; 3] = [
        VoltageLevel::new(VddId::Core, 900_000, 38_000, FuseReg::new(0x254), 0xf4, 0x0c, AbbMode::None),
        VoltageLevel::new(VddId::Core, 980_000, 13_000, FuseReg::new(0x257), 0xf9, 0x16, AbbMode::None),
        VoltageLevel::new(VddId::Core, 1_070_000, 13_000, FuseReg::new(0x25a), 0xf9, 0x16, AbbMode::None),
    ];

    #[test]
    fn find_is_exact() {
        let table = VoltageTable::new(VddId::Core, &LEVELS);
        assert_eq!(table.find(980_000).map(|l| l.fuse.offset()), Some(0x257));
        assert!(table.find(980_001).is_none());
        assert_eq!(table.len(), 3);
        assert_eq!(table.max_uv(), Some(1_070_000));
        assert!(table.is_strictly_ascending());
    }

    #[test]
    fn margin_raises_ceiling() {
        assert_eq!(LEVELS[0].max_uv(), 938_000);
        assert_eq!(LEVELS[0].trim.err_min_limit, 0xf4);
        assert_eq!(LEVELS[0].trim.err_gain, 0x0c);
    }

    #[test]
    fn margin_saturates() {
        let level = VoltageLevel::new(
            VddId::Mpu,
            u32::MAX - 5_000,
            10_000,
            FuseReg::new(0),
            0xf4,
            0x0c,
            AbbMode::Nominal,
        );
        assert_eq!(level.max_uv(), u32::MAX);
    }

    #[test]
    fn empty_table() {
        let table = VoltageTable::new(VddId::Mpu, &[]);
        assert!(table.is_empty());
        assert_eq!(table.max_uv(), None);
        assert!(table.is_strictly_ascending());
    }
}
