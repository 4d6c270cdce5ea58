// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Control-module efuse registers holding the calibrated OPP voltages.

use kopp::FuseReg;

pub const FUSE_IVA_OPP50: FuseReg = FuseReg::new(0x22c);
pub const FUSE_IVA_OPP100: FuseReg = FuseReg::new(0x22f);
pub const FUSE_IVA_OPPTURBO: FuseReg = FuseReg::new(0x232);
pub const FUSE_IVA_OPPNITRO: FuseReg = FuseReg::new(0x235);
pub const FUSE_MPU_OPP50: FuseReg = FuseReg::new(0x240);
pub const FUSE_MPU_OPP100: FuseReg = FuseReg::new(0x243);
pub const FUSE_MPU_OPPTURBO: FuseReg = FuseReg::new(0x246);
pub const FUSE_MPU_OPPNITRO: FuseReg = FuseReg::new(0x249);
pub const FUSE_CORE_OPP50: FuseReg = FuseReg::new(0x254);
pub const FUSE_CORE_OPP100: FuseReg = FuseReg::new(0x257);
pub const FUSE_CORE_OPP100OV: FuseReg = FuseReg::new(0x25a);
