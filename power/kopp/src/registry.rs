// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! In-memory OPP authority.

use alloc::vec::Vec;

use strum::IntoEnumIterator;

use crate::{
    authority::{DeviceHandle, OppAuthority},
    domain::HwModule,
    error::{OppError, OppErrorKind, OppResult},
    opp::Opp,
};

struct DeviceOpps {
    hwmod: HwModule,
    /// Sorted by frequency, then voltage.
    opps: Vec<Opp>,
}

/// Per-device operating-point lists of the devices present on a chip.
pub struct OppRegistry {
    devices: Vec<DeviceOpps>,
}

impl OppRegistry {
    /// Creates a registry knowing only the given modules.
    pub fn new(present: &[HwModule]) -> Self {
        let mut devices: Vec<DeviceOpps> = Vec::with_capacity(present.len());
        for &hwmod in present {
            if devices.iter().all(|d| d.hwmod != hwmod) {
                devices.push(DeviceOpps {
                    hwmod,
                    opps: Vec::new(),
                });
            }
        }
        Self { devices }
    }

    /// Creates a registry knowing every module.
    pub fn with_all_modules() -> Self {
        let all: Vec<HwModule> = HwModule::iter().collect();
        Self::new(&all)
    }

    fn entry(&self, hwmod: HwModule) -> Option<&DeviceOpps> {
        self.devices.iter().find(|d| d.hwmod == hwmod)
    }

    /// All operating points of `hwmod`, in ascending frequency.
    pub fn opps(&self, hwmod: HwModule) -> &[Opp] {
        self.entry(hwmod).map(|d| d.opps.as_slice()).unwrap_or(&[])
    }

    /// Operating points of `hwmod` currently available.
    pub fn available_opps(&self, hwmod: HwModule) -> impl Iterator<Item = &Opp> {
        self.opps(hwmod).iter().filter(|o| o.available)
    }

    /// Lowest available operating point of `hwmod` at or above `freq_hz`.
    pub fn find_ceil(&self, hwmod: HwModule, freq_hz: u64) -> Option<Opp> {
        self.available_opps(hwmod)
            .find(|o| o.freq_hz >= freq_hz)
            .copied()
    }

    /// Number of operating points over all devices.
    pub fn opp_count(&self) -> usize {
        self.devices.iter().map(|d| d.opps.len()).sum()
    }
}

impl OppAuthority for OppRegistry {
    fn device(&self, hwmod: HwModule) -> Option<DeviceHandle> {
        self.devices
            .iter()
            .position(|d| d.hwmod == hwmod)
            .map(DeviceHandle::new)
    }

    fn add_opp(&mut self, dev: DeviceHandle, freq_hz: u64, uv: u32, available: bool) -> OppResult {
        let device = self
            .devices
            .get_mut(dev.as_usize())
            .ok_or(OppError::new(OppErrorKind::DeviceNotFound))?;
        if freq_hz == 0 || uv == 0 {
            return Err(OppError::new(OppErrorKind::RegistrationRejected)
                .with_hwmod(device.hwmod)
                .with_freq(freq_hz)
                .with_uv(uv));
        }

        let pos = device
            .opps
            .binary_search_by(|o| (o.freq_hz, o.uv).cmp(&(freq_hz, uv)));
        match pos {
            // Same pair registered again: keep the existing state.
            Ok(_) => {
                debug!("{}: duplicate OPP f={freq_hz} uv={uv}", device.hwmod);
            }
            Err(idx) => device.opps.insert(
                idx,
                Opp {
                    freq_hz,
                    uv,
                    available,
                },
            ),
        }
        Ok(())
    }

    fn enable_opp(&mut self, dev: DeviceHandle, freq_hz: u64) -> OppResult {
        let device = self
            .devices
            .get_mut(dev.as_usize())
            .ok_or(OppError::new(OppErrorKind::DeviceNotFound))?;
        let mut found = false;
        for opp in device.opps.iter_mut().filter(|o| o.freq_hz == freq_hz) {
            opp.available = true;
            found = true;
        }
        if found {
            Ok(())
        } else {
            Err(OppError::new(OppErrorKind::NotFound)
                .with_hwmod(device.hwmod)
                .with_freq(freq_hz))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_module_has_no_handle() {
        let reg = OppRegistry::new(&[HwModule::Mpu, HwModule::Iva, HwModule::Mpu]);
        assert!(reg.device(HwModule::Mpu).is_some());
        assert!(reg.device(HwModule::Fdif).is_none());
        assert!(reg.opps(HwModule::Fdif).is_empty());
        assert_eq!(reg.device(HwModule::Iva), Some(DeviceHandle::new(1)));
    }

    #[test]
    fn add_keeps_order_and_dedups() {
        let mut reg = OppRegistry::with_all_modules();
        let hsi = reg.device(HwModule::Hsi).unwrap();
        reg.add_opp(hsi, 96_000_000, 1_127_000, true).unwrap();
        reg.add_opp(hsi, 96_000_000, 962_000, true).unwrap();
        reg.add_opp(hsi, 48_000_000, 962_000, false).unwrap();
        reg.add_opp(hsi, 96_000_000, 962_000, false).unwrap();

        let freqs: Vec<_> = reg.opps(HwModule::Hsi).iter().map(|o| (o.freq_hz, o.uv)).collect();
        assert_eq!(
            freqs,
            vec![(48_000_000, 962_000), (96_000_000, 962_000), (96_000_000, 1_127_000)]
        );
        assert!(reg.opps(HwModule::Hsi)[1].available);
        assert_eq!(reg.opp_count(), 3);
    }

    #[test]
    fn rejects_zero_pairs() {
        let mut reg = OppRegistry::with_all_modules();
        let mpu = reg.device(HwModule::Mpu).unwrap();
        let err = reg.add_opp(mpu, 0, 1_025_000, true).unwrap_err();
        assert_eq!(err.kind(), OppErrorKind::RegistrationRejected);
        assert_eq!(err.hwmod(), Some(HwModule::Mpu));
        assert_eq!(
            reg.add_opp(mpu, 300_000_000, 0, true).unwrap_err(),
            OppErrorKind::RegistrationRejected
        );
        assert_eq!(
            reg.add_opp(DeviceHandle::new(99), 300_000_000, 1_025_000, true)
                .unwrap_err(),
            OppErrorKind::DeviceNotFound
        );
    }

    #[test]
    fn enable_and_find_ceil() {
        let mut reg = OppRegistry::with_all_modules();
        let iva = reg.device(HwModule::Iva).unwrap();
        reg.add_opp(iva, 133_000_000, 950_000, true).unwrap();
        reg.add_opp(iva, 266_100_000, 1_114_000, true).unwrap();
        reg.add_opp(iva, 332_000_000, 1_291_000, false).unwrap();

        assert_eq!(reg.available_opps(HwModule::Iva).count(), 2);
        assert_eq!(reg.find_ceil(HwModule::Iva, 300_000_000), None);
        assert_eq!(
            reg.find_ceil(HwModule::Iva, 200_000_000).map(|o| o.freq_hz),
            Some(266_100_000)
        );

        reg.enable_opp(iva, 332_000_000).unwrap();
        assert_eq!(
            reg.find_ceil(HwModule::Iva, 300_000_000).map(|o| o.uv),
            Some(1_291_000)
        );
        assert_eq!(
            reg.enable_opp(iva, 400_000_000).unwrap_err(),
            OppErrorKind::NotFound
        );
    }
}
