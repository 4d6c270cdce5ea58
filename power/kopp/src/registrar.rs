// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Boot-time publication of OPP tables.
//!
//! A failing entry is logged and skipped; the rest of the table is still
//! registered.

use alloc::vec::Vec;

use crate::{
    authority::OppAuthority,
    domain::HwModule,
    error::{OppError, OppErrorKind, OppResult},
    opp::OppDef,
    soc::SocOppData,
    volt::{VoltageLevel, VoltageTable},
};

/// Outcome of registering one OPP list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistrationReport {
    pub total: usize,
    pub registered: usize,
    /// Index into the OPP list and the error of each failed entry.
    pub failures: Vec<(usize, OppError)>,
}

impl RegistrationReport {
    /// Whether every entry was registered.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Error recorded for entry `index`, if it failed.
    pub fn failure(&self, index: usize) -> Option<&OppError> {
        self.failures
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, e)| e)
    }
}

fn level_of(tables: &[VoltageTable], def: &OppDef) -> Option<&'static VoltageLevel> {
    tables
        .iter()
        .find(|t| t.vdd == def.vdd)
        .and_then(|t| t.find(def.uv))
}

fn register_one<A: OppAuthority + ?Sized>(
    authority: &mut A,
    tables: &[VoltageTable],
    def: &OppDef,
) -> OppResult {
    let err = |kind| {
        OppError::new(kind)
            .with_hwmod(def.hwmod)
            .with_freq(def.freq_hz)
            .with_uv(def.uv)
    };

    let dev = authority
        .device(def.hwmod)
        .ok_or(err(OppErrorKind::DeviceNotFound))?;
    let level = level_of(tables, def).ok_or(err(OppErrorKind::RegistrationRejected))?;
    authority
        .add_opp(dev, def.freq_hz, def.uv, def.default_available)
        .map_err(|e| err(e.kind()))?;

    debug!(
        "{}: OPP f={} uv={} ({}, abb={:?}){}",
        def.hwmod,
        def.freq_hz,
        def.uv,
        def.clock,
        level.abb,
        if def.default_available { "" } else { " disabled" }
    );
    Ok(())
}

/// Registers `defs` with `authority`, checking each voltage against `tables`.
///
/// Every entry is attempted; failures are logged and collected in the
/// report. An empty list is rejected outright.
pub fn register_opps<A: OppAuthority + ?Sized>(
    authority: &mut A,
    defs: &[OppDef],
    tables: &[VoltageTable],
) -> OppResult<RegistrationReport> {
    crate::ensure!(!defs.is_empty(), crate::opp_err!(InvalidInput, "OPP table is empty"));

    let mut report = RegistrationReport {
        total: defs.len(),
        ..Default::default()
    };
    for (index, def) in defs.iter().enumerate() {
        match register_one(authority, tables, def) {
            Ok(()) => report.registered += 1,
            Err(e) => {
                error!("unable to add OPP #{index}: {e}");
                report.failures.push((index, e));
            }
        }
    }
    Ok(report)
}

/// Registers the complete OPP list of one chip revision.
pub fn init_opp_table<A: OppAuthority + ?Sized>(
    authority: &mut A,
    data: &SocOppData,
) -> OppResult<RegistrationReport> {
    let report = register_opps(authority, data.opp_defs, data.vdd_tables)?;
    info!(
        "{}: registered {}/{} OPPs",
        data.name, report.registered, report.total
    );
    Ok(report)
}

/// Enables the operating point of `hwmod` at `freq_hz`.
///
/// Used by boards to unlock OPPs registered disabled once they know the
/// supply can sustain them.
pub fn opp_enable<A: OppAuthority + ?Sized>(
    authority: &mut A,
    hwmod: HwModule,
    freq_hz: u64,
) -> OppResult {
    let Some(dev) = authority.device(hwmod) else {
        error!("no {hwmod} device, did not enable f={freq_hz}");
        return Err(OppError::new(OppErrorKind::DeviceNotFound)
            .with_hwmod(hwmod)
            .with_freq(freq_hz));
    };
    authority.enable_opp(dev, freq_hz).map_err(|e| {
        error!("{hwmod}: opp_enable failed({}) f={freq_hz}", e.code());
        OppError::new(e.kind()).with_hwmod(hwmod).with_freq(freq_hz)
    })
}

/// Enables a board's list of `(hwmod, freq_hz)` OPPs.
///
/// Returns how many were enabled; failures are only logged.
pub fn enable_board_opps<A: OppAuthority + ?Sized>(
    authority: &mut A,
    unlocks: &[(HwModule, u64)],
) -> usize {
    unlocks
        .iter()
        .filter(|&&(hwmod, freq)| opp_enable(authority, hwmod, freq).is_ok())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ClockId, VddId},
        registry::OppRegistry,
        volt::{AbbMode, FuseReg},
    };

    const fn level(vdd: VddId, uv: u32) -> VoltageLevel {
        VoltageLevel::new(vdd, uv, 0, FuseReg::new(0), 0xf9, 0x16, AbbMode::None)
    }

    static CORE: [VoltageLevel; 2] = [level(VddId::Core, 962_000), level(VddId::Core, 1_127_000)];
    static IVA: [VoltageLevel; 2] = [level(VddId::Iva, 950_000), level(VddId::Iva, 1_114_000)];
    static TABLES: [VoltageTable; 2] = [
        VoltageTable::new(VddId::Core, &CORE),
        VoltageTable::new(VddId::Iva, &IVA),
    ];

    static DEFS: [OppDef; 5] = [
        OppDef::new(HwModule::L3Main1, ClockId::VirtL3, VddId::Core, true, 100_000_000, 962_000),
        OppDef::new(HwModule::L3Main1, ClockId::VirtL3, VddId::Core, true, 200_000_000, 1_127_000),
        OppDef::new(HwModule::Fdif, ClockId::Fdif, VddId::Core, true, 32_000_000, 962_000),
        OppDef::new(HwModule::Iva, ClockId::DpllIvaM5x2, VddId::Iva, true, 133_000_000, 950_000),
        OppDef::new(HwModule::Iva, ClockId::DpllIvaM5x2, VddId::Iva, false, 266_100_000, 1_114_000),
    ];

    fn chip_without_fdif() -> OppRegistry {
        OppRegistry::new(&[HwModule::L3Main1, HwModule::Iva])
    }

    #[test]
    fn missing_device_does_not_stop_registration() {
        let mut reg = chip_without_fdif();
        let report = register_opps(&mut reg, &DEFS, &TABLES).unwrap();

        assert_eq!(report.total, 5);
        assert_eq!(report.registered, 4);
        assert!(!report.is_complete());
        assert_eq!(report.failures.len(), 1);
        let err = report.failure(2).unwrap();
        assert_eq!(err.kind(), OppErrorKind::DeviceNotFound);
        assert_eq!(err.hwmod(), Some(HwModule::Fdif));
        assert_eq!(err.freq_hz(), Some(32_000_000));

        assert_eq!(reg.opps(HwModule::L3Main1).len(), 2);
        assert_eq!(reg.opps(HwModule::Iva).len(), 2);
    }

    #[test]
    fn unknown_voltage_is_rejected() {
        #[rustfmt::skip]
        static BAD: [OppDef; 2] = [
            OppDef::new(HwModule::Iva, ClockId::DpllIvaM5x2, VddId::Iva, true, 133_000_000, 950_000),
            OppDef::new(HwModule::Iva, ClockId::DpllIvaM5x2, VddId::Iva, true, 332_000_000, 1_291_000),
        ];
        let mut reg = OppRegistry::with_all_modules();
        let report = register_opps(&mut reg, &BAD, &TABLES).unwrap();
        assert_eq!(report.registered, 1);
        assert_eq!(
            report.failure(1).map(|e| e.kind()),
            Some(OppErrorKind::RegistrationRejected)
        );
    }

    #[test]
    fn empty_list_is_invalid() {
        let mut reg = OppRegistry::with_all_modules();
        assert_eq!(
            register_opps(&mut reg, &[], &TABLES).unwrap_err(),
            OppErrorKind::InvalidInput
        );
    }

    #[test]
    fn registering_twice_is_idempotent() {
        let mut once = chip_without_fdif();
        register_opps(&mut once, &DEFS, &TABLES).unwrap();

        let mut twice = chip_without_fdif();
        register_opps(&mut twice, &DEFS, &TABLES).unwrap();
        let second = register_opps(&mut twice, &DEFS, &TABLES).unwrap();
        assert_eq!(second.registered, 4);

        for hwmod in [HwModule::L3Main1, HwModule::Iva, HwModule::Fdif] {
            assert_eq!(once.opps(hwmod), twice.opps(hwmod));
        }
    }

    #[test]
    fn board_unlocks_disabled_opp() {
        let mut reg = chip_without_fdif();
        register_opps(&mut reg, &DEFS, &TABLES).unwrap();
        assert_eq!(reg.available_opps(HwModule::Iva).count(), 1);

        let enabled = enable_board_opps(
            &mut reg,
            &[
                (HwModule::Iva, 266_100_000),
                (HwModule::Fdif, 32_000_000),
                (HwModule::Iva, 500_000_000),
            ],
        );
        assert_eq!(enabled, 1);
        assert_eq!(reg.available_opps(HwModule::Iva).count(), 2);

        let err = opp_enable(&mut reg, HwModule::Iva, 500_000_000).unwrap_err();
        assert_eq!(err.kind(), OppErrorKind::NotFound);
        assert_eq!(err.hwmod(), Some(HwModule::Iva));
        assert_eq!(
            opp_enable(&mut reg, HwModule::Fdif, 32_000_000).unwrap_err(),
            OppErrorKind::DeviceNotFound
        );
    }
}
