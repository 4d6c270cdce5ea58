// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Cross-domain voltage dependencies.
//!
//! When a master domain (MPU, IVA) moves to a new voltage, each domain it
//! depends on must first reach the voltage its dependency table names for
//! that master voltage.

use crate::{
    domain::VddId,
    error::{OppError, OppErrorKind, OppResult},
};

/// Minimum slave voltage required at one master voltage.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DependencyEntry {
    pub main_uv: u32,
    pub dep_uv: u32,
}

impl DependencyEntry {
    pub const fn new(main_uv: u32, dep_uv: u32) -> Self {
        Self { main_uv, dep_uv }
    }
}

/// Dependency of one master domain on one slave domain.
///
/// Entries are sorted by ascending `main_uv`.
#[derive(Clone, Copy, Debug)]
pub struct DependencyTable {
    pub dep_vdd: VddId,
    pub entries: &'static [DependencyEntry],
}

impl DependencyTable {
    pub const fn new(dep_vdd: VddId, entries: &'static [DependencyEntry]) -> Self {
        Self { dep_vdd, entries }
    }

    /// Returns the slave voltage required while the master runs at `uv`.
    ///
    /// Picks the first entry whose master voltage is not less than `uv`.
    /// Voltages below the lowest master OPP or above the highest one have no
    /// entry and fail with [`OppErrorKind::LookupMiss`].
    pub fn lookup(&self, uv: u32) -> OppResult<u32> {
        let miss = || {
            warn!("{}: no dependency entry for master uv={uv}", self.dep_vdd);
            Err(OppError::new(OppErrorKind::LookupMiss).with_uv(uv))
        };
        match self.entries.first() {
            Some(first) if uv >= first.main_uv => {}
            _ => return miss(),
        }
        match self.entries.iter().find(|e| e.main_uv >= uv) {
            Some(e) => Ok(e.dep_uv),
            None => miss(),
        }
    }

    /// Whether the master voltages never decrease.
    pub fn is_sorted(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].main_uv <= w[1].main_uv)
    }
}

/// All dependency tables of one master domain.
#[derive(Clone, Copy, Debug)]
pub struct VddDepInfo {
    pub vdd: VddId,
    pub deps: &'static [DependencyTable],
}

impl VddDepInfo {
    pub const fn new(vdd: VddId, deps: &'static [DependencyTable]) -> Self {
        Self { vdd, deps }
    }

    /// Resolves the voltage every slave domain needs for master voltage `uv`.
    pub fn resolve(&self, uv: u32) -> impl Iterator<Item = OppResult<(VddId, u32)>> + 'static {
        let deps = self.deps;
        deps.iter()
            .map(move |t| t.lookup(uv).map(|dep_uv| (t.dep_vdd, dep_uv)))
    }
}
