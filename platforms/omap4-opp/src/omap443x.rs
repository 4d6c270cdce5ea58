// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! OMAP4430 OPP data.

use kopp::{
    AbbMode, ClockId, DependencyEntry, DependencyTable, HwModule, OppDef, SocOppData, VddDepInfo,
    VddId, VoltageLevel, VoltageTable,
};

use crate::fuse::*;

pub const VDD_MPU_OPP50_UV: u32 = 1_025_000;
pub const VDD_MPU_OPP100_UV: u32 = 1_200_000;
pub const VDD_MPU_OPPTURBO_UV: u32 = 1_325_000;
pub const VDD_MPU_OPPNITRO_UV: u32 = 1_388_000;

pub const VDD_IVA_OPP50_UV: u32 = 950_000;
pub const VDD_IVA_OPP100_UV: u32 = 1_114_000;
pub const VDD_IVA_OPPTURBO_UV: u32 = 1_291_000;

pub const VDD_CORE_OPP50_UV: u32 = 962_000;
pub const VDD_CORE_OPP100_UV: u32 = 1_127_000;

#[rustfmt::skip]
static VDD_MPU_VOLT_DATA: [VoltageLevel; 4] = [
    VoltageLevel::new(VddId::Mpu, VDD_MPU_OPP50_UV, 0, FUSE_MPU_OPP50, 0xf4, 0x0c, AbbMode::Nominal),
    VoltageLevel::new(VddId::Mpu, VDD_MPU_OPP100_UV, 0, FUSE_MPU_OPP100, 0xf9, 0x16, AbbMode::Nominal),
    VoltageLevel::new(VddId::Mpu, VDD_MPU_OPPTURBO_UV, 0, FUSE_MPU_OPPTURBO, 0xfa, 0x23, AbbMode::Nominal),
    VoltageLevel::new(VddId::Mpu, VDD_MPU_OPPNITRO_UV, 0, FUSE_MPU_OPPNITRO, 0xfa, 0x27, AbbMode::Fast),
];

#[rustfmt::skip]
static VDD_IVA_VOLT_DATA: [VoltageLevel; 3] = [
    VoltageLevel::new(VddId::Iva, VDD_IVA_OPP50_UV, 0, FUSE_IVA_OPP50, 0xf4, 0x0c, AbbMode::Nominal),
    VoltageLevel::new(VddId::Iva, VDD_IVA_OPP100_UV, 0, FUSE_IVA_OPP100, 0xf9, 0x16, AbbMode::Nominal),
    VoltageLevel::new(VddId::Iva, VDD_IVA_OPPTURBO_UV, 0, FUSE_IVA_OPPTURBO, 0xfa, 0x23, AbbMode::Nominal),
];

#[rustfmt::skip]
static VDD_CORE_VOLT_DATA: [VoltageLevel; 2] = [
    VoltageLevel::new(VddId::Core, VDD_CORE_OPP50_UV, 0, FUSE_CORE_OPP50, 0xf4, 0x0c, AbbMode::None),
    VoltageLevel::new(VddId::Core, VDD_CORE_OPP100_UV, 0, FUSE_CORE_OPP100, 0xf9, 0x16, AbbMode::None),
];

static VDD_TABLES: [VoltageTable; 3] = [
    VoltageTable::new(VddId::Mpu, &VDD_MPU_VOLT_DATA),
    VoltageTable::new(VddId::Iva, &VDD_IVA_VOLT_DATA),
    VoltageTable::new(VddId::Core, &VDD_CORE_VOLT_DATA),
];

// Domain dependencies (OPP based):
//
//   MPU    IVA    CORE
//   50     50     50+
//   50     100+   100
//   100+   50     100
//   100+   100+   100

static VDD_MPU_CORE_DEP_DATA: [DependencyEntry; 4] = [
    DependencyEntry::new(VDD_MPU_OPP50_UV, VDD_CORE_OPP50_UV),
    DependencyEntry::new(VDD_MPU_OPP100_UV, VDD_CORE_OPP100_UV),
    DependencyEntry::new(VDD_MPU_OPPTURBO_UV, VDD_CORE_OPP100_UV),
    DependencyEntry::new(VDD_MPU_OPPNITRO_UV, VDD_CORE_OPP100_UV),
];

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
static OPP_DEF_LIST: [OppDef; 21] = [
    // MPU OPP1 - OPP50
    OppDef::new(HwModule::Mpu, ClockId::DpllMpu, VddId::Mpu, true, 300_000_000, VDD_MPU_OPP50_UV),
    // MPU OPP2 - OPP100
    OppDef::new(HwModule::Mpu, ClockId::DpllMpu, VddId::Mpu, true, 600_000_000, VDD_MPU_OPP100_UV),
    // MPU OPP3 - OPP-Turbo
    OppDef::new(HwModule::Mpu, ClockId::DpllMpu, VddId::Mpu, true, 800_000_000, VDD_MPU_OPPTURBO_UV),
    // MPU OPP4 - OPP-SB
    OppDef::new(HwModule::Mpu, ClockId::DpllMpu, VddId::Mpu, true, 1_008_000_000, VDD_MPU_OPPNITRO_UV),
    // L3 OPP1 - OPP50
    OppDef::new(HwModule::L3Main1, ClockId::VirtL3, VddId::Core, true, 100_000_000, VDD_CORE_OPP50_UV),
    // L3 OPP2 - OPP100, OPP-Turbo, OPP-SB
    OppDef::new(HwModule::L3Main1, ClockId::VirtL3, VddId::Core, true, 200_000_000, VDD_CORE_OPP100_UV),
    // IVA OPP1 - OPP50
    OppDef::new(HwModule::Iva, ClockId::DpllIvaM5x2, VddId::Iva, true, 133_000_000, VDD_IVA_OPP50_UV),
    // IVA OPP2 - OPP100
    OppDef::new(HwModule::Iva, ClockId::DpllIvaM5x2, VddId::Iva, true, 266_100_000, VDD_IVA_OPP100_UV),
    // IVA OPP3 - OPP-Turbo
    OppDef::new(HwModule::Iva, ClockId::DpllIvaM5x2, VddId::Iva, false, 332_000_000, VDD_IVA_OPPTURBO_UV),
    // SGX OPP1 - OPP50
    OppDef::new(HwModule::Gpu, ClockId::DpllPerM7x2, VddId::Core, true, 153_600_000, VDD_CORE_OPP50_UV),
    // SGX OPP2 - OPP100
    OppDef::new(HwModule::Gpu, ClockId::DpllPerM7x2, VddId::Core, true, 307_200_000, VDD_CORE_OPP100_UV),
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

pub static OMAP443X_OPP_DATA: SocOppData = SocOppData {
    name: "omap4430",
    vdd_tables: &VDD_TABLES,
    dep_infos: &DEP_INFOS,
    opp_defs: &OPP_DEF_LIST,
};
