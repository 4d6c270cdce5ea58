// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Complete OPP data set of one chip revision.

use spin::Once;

use crate::{
    dep::VddDepInfo,
    domain::VddId,
    error::{OppError, OppErrorKind, OppResult},
    opp::OppDef,
    volt::VoltageTable,
};

/// Voltage tables, dependencies and operating points of one chip revision.
#[derive(Debug)]
pub struct SocOppData {
    pub name: &'static str,
    pub vdd_tables: &'static [VoltageTable],
    pub dep_infos: &'static [VddDepInfo],
    pub opp_defs: &'static [OppDef],
}

impl SocOppData {
    /// Voltage table of `vdd`, if the chip has one.
    pub fn volt_table(&self, vdd: VddId) -> Option<&'static VoltageTable> {
        let tables = self.vdd_tables;
        tables.iter().find(|t| t.vdd == vdd)
    }

    /// Dependency tables of master domain `vdd`, if any.
    pub fn dep_info(&self, vdd: VddId) -> Option<&'static VddDepInfo> {
        let infos = self.dep_infos;
        infos.iter().find(|i| i.vdd == vdd)
    }

    /// Voltages the slave domains of `vdd` need while it runs at `uv`.
    ///
    /// A domain nobody depends on yields nothing.
    pub fn dependencies(
        &self,
        vdd: VddId,
        uv: u32,
    ) -> impl Iterator<Item = OppResult<(VddId, u32)>> + 'static {
        self.dep_info(vdd).into_iter().flat_map(move |i| i.resolve(uv))
    }

    /// Operating points defined on `vdd`.
    pub fn opps_on(&self, vdd: VddId) -> impl Iterator<Item = &'static OppDef> + 'static {
        let defs = self.opp_defs;
        defs.iter().filter(move |d| d.vdd == vdd)
    }

    /// Checks the invariants the lookup and the registrar rely on.
    ///
    /// - voltage levels of each domain are distinct and ascending;
    /// - dependency tables are sorted, name master voltages present in the
    ///   master domain and slave voltages present in the slave domain;
    /// - every operating point names a level of its own domain.
    pub fn validate(&self) -> OppResult {
        for table in self.vdd_tables {
            if !table.is_strictly_ascending() {
                error!("{}: {} voltage levels not ascending", self.name, table.vdd);
                return Err(OppError::new(OppErrorKind::InvalidInput));
            }
        }

        for info in self.dep_infos {
            let master = self.volt_table(info.vdd).ok_or_else(|| {
                error!("{}: no voltage table for master {}", self.name, info.vdd);
                OppError::new(OppErrorKind::InvalidInput)
            })?;
            for dep in info.deps {
                if !dep.is_sorted() {
                    error!("{}: {}->{} dependencies not sorted", self.name, info.vdd, dep.dep_vdd);
                    return Err(OppError::new(OppErrorKind::InvalidInput));
                }
                let slave = self.volt_table(dep.dep_vdd).ok_or_else(|| {
                    error!("{}: no voltage table for slave {}", self.name, dep.dep_vdd);
                    OppError::new(OppErrorKind::InvalidInput)
                })?;
                for e in dep.entries {
                    if master.find(e.main_uv).is_none() || slave.find(e.dep_uv).is_none() {
                        error!(
                            "{}: {}->{} entry {}->{} names unknown level",
                            self.name, info.vdd, dep.dep_vdd, e.main_uv, e.dep_uv
                        );
                        return Err(OppError::new(OppErrorKind::InvalidInput).with_uv(e.main_uv));
                    }
                }
            }
        }

        for def in self.opp_defs {
            let known = self
                .volt_table(def.vdd)
                .is_some_and(|t| t.find(def.uv).is_some());
            if !known {
                error!(
                    "{}: {} f={} names unknown {} level uv={}",
                    self.name, def.hwmod, def.freq_hz, def.vdd, def.uv
                );
                return Err(OppError::new(OppErrorKind::InvalidInput)
                    .with_hwmod(def.hwmod)
                    .with_freq(def.freq_hz)
                    .with_uv(def.uv));
            }
        }
        Ok(())
    }
}

static ACTIVE: Once<&'static SocOppData> = Once::new();

/// Publishes `data` as the OPP data of the running chip.
///
/// Only the first call takes effect; the data in use is returned.
pub fn set_active(data: &'static SocOppData) -> &'static SocOppData {
    let active = *ACTIVE.call_once(|| data);
    if !core::ptr::eq(active, data) {
        warn!("OPP data already set to {}, ignoring {}", active.name, data.name);
    }
    active
}

/// OPP data of the running chip, once published.
pub fn active() -> Option<&'static SocOppData> {
    ACTIVE.get().copied()
}
