// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Board hooks and the boot-time entry points.

use kopp::{HwModule, OppAuthority, OppError, OppErrorKind, OppResult, RegistrationReport};

use crate::{ChipRevision, opp_data};

/// Interface the board crate implements.
#[crate_interface::def_interface]
pub trait Omap4BoardIf {
    /// Silicon revision of the running chip.
    fn chip_revision() -> ChipRevision;
}

/// Registers the OPP table of the running chip.
///
/// The revision is taken from the board through [`Omap4BoardIf`].
pub fn omap4_opp_init<A: OppAuthority + ?Sized>(
    authority: &mut A,
) -> OppResult<RegistrationReport> {
    let rev = crate_interface::call_interface!(crate::board::Omap4BoardIf::chip_revision);
    omap4_opp_init_for(rev, authority)
}

/// Registers the OPP table of `rev` and publishes it as the active data.
///
/// Once one revision is active, registering another one fails with
/// [`OppErrorKind::InvalidInput`] and leaves `authority` untouched.
pub fn omap4_opp_init_for<A: OppAuthority + ?Sized>(
    rev: ChipRevision,
    authority: &mut A,
) -> OppResult<RegistrationReport> {
    let Some(data) = opp_data(rev) else {
        error!("{}: OPP data not built in", rev.name());
        return Err(OppError::new(OppErrorKind::NotFound));
    };
    if let Err(e) = data.validate() {
        warn!("{}: inconsistent OPP data: {e}", data.name);
    }
    let active = kopp::set_active(data);
    if !core::ptr::eq(active, data) {
        error!("{}: not registered, {} is already active", data.name, active.name);
        return Err(OppError::new(OppErrorKind::InvalidInput));
    }
    kopp::init_opp_table(authority, data)
}

/// Enables the MPU operating point at `freq_hz`.
///
/// Failures are logged and returned; the board carries on with the OPPs
/// enabled by default.
pub fn omap4_mpu_opp_enable<A: OppAuthority + ?Sized>(
    authority: &mut A,
    freq_hz: u64,
) -> OppResult {
    kopp::opp_enable(authority, HwModule::Mpu, freq_hz)
}
