// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! OMAP4460 OPP data.
//!
//! MPU runs up to 1.344 GHz on the overclock level, and CORE has an extra
//! OPP100-OV level that the GPU 384 MHz point and the MPU overclock level
//! depend on.

use kopp::{
    AbbMode, ClockId, DependencyEntry, DependencyTable, HwModule, OppDef, SocOppData, VddDepInfo,
    VddId, VoltageLevel, VoltageTable,
};

use crate::fuse::*;

pub const VDD_MPU_OPP50_UV: u32 = 870_000;
pub const VDD_MPU_OPP100_UV: u32 = 1_020_000;
pub const VDD_MPU_OPPTURBO_UV: u32 = 1_090_000;
pub const VDD_MPU_OPPNITRO_UV: u32 = 1_170_000;
pub const VDD_MPU_OPPOC_UV: u32 = 1_260_000;

pub const VDD_IVA_OPP50_UV: u32 = 860_000;
pub const VDD_IVA_OPP100_UV: u32 = 960_000;
pub const VDD_IVA_OPPTURBO_UV: u32 = 1_010_000;
pub const VDD_IVA_OPPNITRO_UV: u32 = 1_100_000;

pub const VDD_CORE_OPP50_UV: u32 = 900_000;
pub const VDD_CORE_OPP100_UV: u32 = 980_000;
pub const VDD_CORE_OPP100_OV_UV: u32 = 1_070_000;

#[rustfmt::skip]
static VDD_MPU_VOLT_DATA: [VoltageLevel; 5] = [
    VoltageLevel::new(VddId::Mpu, VDD_MPU_OPP50_UV, 10_000, FUSE_MPU_OPP50, 0xf4, 0x0c, AbbMode::Nominal),
    VoltageLevel::new(VddId::Mpu, VDD_MPU_OPP100_UV, 0, FUSE_MPU_OPP100, 0xf9, 0x16, AbbMode::Nominal),
    VoltageLevel::new(VddId::Mpu, VDD_MPU_OPPTURBO_UV, 0, FUSE_MPU_OPPTURBO, 0xfa, 0x23, AbbMode::Nominal),
    VoltageLevel::new(VddId::Mpu, VDD_MPU_OPPNITRO_UV, 0, FUSE_MPU_OPPNITRO, 0xfa, 0x27, AbbMode::Fast),
    // No dedicated fuse: calibrated from the nitro efuse.
    VoltageLevel::new(VddId::Mpu, VDD_MPU_OPPOC_UV, 0, FUSE_MPU_OPPNITRO, 0xff, 0x2a, AbbMode::Fast),
];

#[rustfmt::skip]
static VDD_IVA_VOLT_DATA: [VoltageLevel; 4] = [
    VoltageLevel::new(VddId::Iva, VDD_IVA_OPP50_UV, 13_000, FUSE_IVA_OPP50, 0xf4, 0x0c, AbbMode::Nominal),
    VoltageLevel::new(VddId::Iva, VDD_IVA_OPP100_UV, 0, FUSE_IVA_OPP100, 0xf9, 0x16, AbbMode::Nominal),
    VoltageLevel::new(VddId::Iva, VDD_IVA_OPPTURBO_UV, 0, FUSE_IVA_OPPTURBO, 0xfa, 0x23, AbbMode::Nominal),
    VoltageLevel::new(VddId::Iva, VDD_IVA_OPPNITRO_UV, 0, FUSE_IVA_OPPNITRO, 0xfa, 0x23, AbbMode::Fast),
];

#[rustfmt::skip]
static VDD_CORE_VOLT_DATA: [VoltageLevel; 3] = [
    VoltageLevel::new(VddId::Core, VDD_CORE_OPP50_UV, 38_000, FUSE_CORE_OPP50, 0xf4, 0x0c, AbbMode::None),
    VoltageLevel::new(VddId::Core, VDD_CORE_OPP100_UV, 13_000, FUSE_CORE_OPP100, 0xf9, 0x16, AbbMode::None),
    VoltageLevel::new(VddId::Core, VDD_CORE_OPP100_OV_UV, 13_000, FUSE_CORE_OPP100OV, 0xf9, 0x16, AbbMode::None),
];

static VDD_TABLES: [VoltageTable; 3] = [
    VoltageTable::new(VddId::Mpu, &VDD_MPU_VOLT_DATA),
    VoltageTable::new(VddId::Iva, &VDD_IVA_VOLT_DATA),
    VoltageTable::new(VddId::Core, &VDD_CORE_VOLT_DATA),
];

static VDD_MPU_CORE_DEP_DATA: [DependencyEntry; 5] = [
    DependencyEntry::new(VDD_MPU_OPP50_UV, VDD_CORE_OPP50_UV),
    DependencyEntry::new(VDD_MPU_OPP100_UV, VDD_CORE_OPP100_UV),
    DependencyEntry::new(VDD_MPU_OPPTURBO_UV, VDD_CORE_OPP100_UV),
    DependencyEntry::new(VDD_MPU_OPPNITRO_UV, VDD_CORE_OPP100_UV),
    DependencyEntry::new(VDD_MPU_OPPOC_UV, VDD_CORE_OPP100_OV_UV),
];

// IVA nitro has no CORE entry, so it cannot be reached through the
// dependency path.
static VDD_IVA_CORE_DEP_DATA: [DependencyEntry; 3] = [
    DependencyEntry::new(VDD_IVA_OPP50_UV, VDD_CORE_OPP50_UV),
    DependencyEntry::new(VDD_IVA_OPP100_UV, VDD_CORE_OPP100_UV),
    DependencyEntry::new(VDD_IVA_OPPTURBO_UV, VDD_CORE_OPP100_UV),
];

static VDD_MPU_DEPS: [DependencyTable; 1] =
    [DependencyTable::new(VddId::Core, &VDD_MPU_CORE_DEP_DATA)];
static VDD_IVA_DEPS: [DependencyTable; 1] =
    [DependencyTable::new(VddId::Core, &VDD_IVA_CORE_DEP_DATA)];

static DEP_INFOS: [VddDepInfo; 2] = [
    VddDepInfo::new(VddId::Mpu, &VDD_MPU_DEPS),
    VddDepInfo::new(VddId::Iva, &VDD_IVA_DEPS),
];

#[rustfmt::skip]
static OPP_DEF_LIST: [OppDef; 26] = [
    OppDef::new(HwModule::Mpu, ClockId::VirtDpllMpu, VddId::Mpu, true, 307_200_000, VDD_MPU_OPP50_UV),
    OppDef::new(HwModule::Mpu, ClockId::VirtDpllMpu, VddId::Mpu, true, 691_200_000, VDD_MPU_OPP100_UV),
    OppDef::new(HwModule::Mpu, ClockId::VirtDpllMpu, VddId::Mpu, true, 1_036_800_000, VDD_MPU_OPPTURBO_UV),
    OppDef::new(HwModule::Mpu, ClockId::VirtDpllMpu, VddId::Mpu, true, 1_190_400_000, VDD_MPU_OPPNITRO_UV),
    // MPU OPP-Nitro SpeedBin
    OppDef::new(HwModule::Mpu, ClockId::VirtDpllMpu, VddId::Mpu, true, 1_344_000_000, VDD_MPU_OPPOC_UV),
    // L3 OPP1 - OPP50
    OppDef::new(HwModule::L3Main1, ClockId::VirtL3, VddId::Core, true, 100_000_000, VDD_CORE_OPP50_UV),
    // L3 OPP2 - OPP100
    OppDef::new(HwModule::L3Main1, ClockId::VirtL3, VddId::Core, true, 220_000_000, VDD_CORE_OPP100_UV),
    OppDef::new(HwModule::L3Main1, ClockId::VirtL3, VddId::Core, true, 220_000_000, VDD_CORE_OPP100_OV_UV),
    // IVA OPP1 - OPP50
    OppDef::new(HwModule::Iva, ClockId::DpllIvaM5x2, VddId::Iva, true, 133_000_000, VDD_IVA_OPP50_UV),
    // IVA OPP2 - OPP100
    OppDef::new(HwModule::Iva, ClockId::DpllIvaM5x2, VddId::Iva, true, 266_100_000, VDD_IVA_OPP100_UV),
    // IVA OPP3 and up stay disabled: the reference PMIC VCORE2 supplies only
    // 600 mA, boards with a stronger supply enable them.
    OppDef::new(HwModule::Iva, ClockId::DpllIvaM5x2, VddId::Iva, false, 332_000_000, VDD_IVA_OPPTURBO_UV),
    // IVA OPP4 - OPP-Nitro
    OppDef::new(HwModule::Iva, ClockId::DpllIvaM5x2, VddId::Iva, false, 430_000_000, VDD_IVA_OPPNITRO_UV),
    // IVA OPP5 - OPP-Nitro SpeedBin
    OppDef::new(HwModule::Iva, ClockId::DpllIvaM5x2, VddId::Iva, false, 500_000_000, VDD_IVA_OPPNITRO_UV),
    // SGX OPP1 - OPP50
    OppDef::new(HwModule::Gpu, ClockId::DpllPerM7x2, VddId::Core, true, 153_600_000, VDD_CORE_OPP50_UV),
    // SGX OPP2 - OPP100
    OppDef::new(HwModule::Gpu, ClockId::DpllPerM7x2, VddId::Core, true, 230_400_000, VDD_CORE_OPP100_UV),
    // SGX OPP3 - OPP-OV
    OppDef::new(HwModule::Gpu, ClockId::DpllPerM7x2, VddId::Core, true, 384_000_000, VDD_CORE_OPP100_OV_UV),
    // FDIF OPP1 - OPP25
    OppDef::new(HwModule::Fdif, ClockId::Fdif, VddId::Core, true, 32_000_000, VDD_CORE_OPP50_UV),
    // FDIF OPP2 - OPP50
    OppDef::new(HwModule::Fdif, ClockId::Fdif, VddId::Core, true, 64_000_000, VDD_CORE_OPP50_UV),
    // FDIF OPP3 - OPP100
    OppDef::new(HwModule::Fdif, ClockId::Fdif, VddId::Core, true, 128_000_000, VDD_CORE_OPP100_UV),
    // DSP OPP1 - OPP50
    OppDef::new(HwModule::Dsp, ClockId::DpllIvaM4x2, VddId::Iva, true, 232_750_000, VDD_IVA_OPP50_UV),
    // DSP OPP2 - OPP100
    OppDef::new(HwModule::Dsp, ClockId::DpllIvaM4x2, VddId::Iva, true, 465_500_000, VDD_IVA_OPP100_UV),
    // DSP OPP3 - OPPTB
    OppDef::new(HwModule::Dsp, ClockId::DpllIvaM4x2, VddId::Iva, false, 496_000_000, VDD_IVA_OPPTURBO_UV),
    // HSI OPP1 - OPP50
    OppDef::new(HwModule::Hsi, ClockId::Hsi, VddId::Core, true, 96_000_000, VDD_CORE_OPP50_UV),
    // HSI OPP2 - OPP100
    OppDef::new(HwModule::Hsi, ClockId::Hsi, VddId::Core, true, 96_000_000, VDD_CORE_OPP100_UV),
    // ABE OPP1 - OPP50
    OppDef::new(HwModule::Aess, ClockId::Abe, VddId::Iva, true, 98_304_000, VDD_IVA_OPP50_UV),
    // ABE OPP2 - OPP100
    OppDef::new(HwModule::Aess, ClockId::Abe, VddId::Iva, true, 196_608_000, VDD_IVA_OPP100_UV),
];

pub static OMAP446X_OPP_DATA: SocOppData = SocOppData {
    name: "omap4460",
    vdd_tables: &VDD_TABLES,
    dep_infos: &DEP_INFOS,
    opp_defs: &OPP_DEF_LIST,
};
