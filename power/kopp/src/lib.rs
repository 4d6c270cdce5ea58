// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Operating Performance Point (OPP) tables for x-kernel platforms.
//!
//! A chip describes, per voltage domain, the discrete voltage levels it can
//! run at together with their calibration data, which other domains must be
//! raised when a master domain changes level, and the flat list of
//! frequency/voltage pairs of each hardware module. This crate holds the
//! types for that data, the dependency lookup, and the boot-time registrar
//! that publishes an OPP list to an [`OppAuthority`].
//!
//! ```
//! use kopp::{DependencyEntry, DependencyTable, VddId};
//!
//! static MPU_CORE: [DependencyEntry; 2] = [
//!     DependencyEntry::new(1_025_000, 962_000),
//!     DependencyEntry::new(1_200_000, 1_127_000),
//! ];
//! let table = DependencyTable::new(VddId::Core, &MPU_CORE);
//! assert_eq!(table.lookup(1_200_000), Ok(1_127_000));
//! assert!(table.lookup(1_300_000).is_err());
//! ```

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;
extern crate alloc;

mod authority;
mod dep;
mod domain;
mod error;
mod opp;
mod registrar;
mod registry;
mod soc;
mod volt;

pub use authority::{DeviceHandle, OppAuthority};
pub use dep::{DependencyEntry, DependencyTable, VddDepInfo};
pub use domain::{ClockId, HwModule, VddId};
pub use error::{OppError, OppErrorKind, OppResult};
pub use opp::{Opp, OppDef};
pub use registrar::{
    RegistrationReport, enable_board_opps, init_opp_table, opp_enable, register_opps,
};
pub use registry::OppRegistry;
pub use soc::{SocOppData, active, set_active};
pub use volt::{AbbMode, FuseReg, VoltageLevel, VoltageTable, VpTrim};

#[doc(hidden)]
pub mod __priv {
    pub use log::warn;
}
