//! Boot path: the board names the revision, the table becomes active.

use kopp::{HwModule, OppErrorKind, OppRegistry};
use omap4_opp::{ChipRevision, Omap4BoardIf, omap4_opp_init, omap4_opp_init_for};

struct Panda;

#[crate_interface::impl_interface]
impl Omap4BoardIf for Panda {
    fn chip_revision() -> ChipRevision {
        ChipRevision::Omap4460
    }
}

#[test]
fn test_boot_registers_board_revision() {
    let mut reg = OppRegistry::with_all_modules();
    let report = omap4_opp_init(&mut reg).unwrap();
    assert!(report.is_complete());
    assert_eq!(report.registered, 26);
    assert_eq!(reg.opps(HwModule::Mpu).len(), 5);

    let active = kopp::active().unwrap();
    assert_eq!(active.name, "omap4460");
    assert!(active.volt_table(kopp::VddId::Core).is_some());
}

#[test]
fn test_other_revision_is_refused_once_active() {
    // Same revision as the board: safe whichever test publishes first.
    let mut first = OppRegistry::with_all_modules();
    let report = omap4_opp_init_for(ChipRevision::Omap4460, &mut first).unwrap();
    assert_eq!(report.registered, 26);

    let mut second = OppRegistry::with_all_modules();
    assert_eq!(
        omap4_opp_init_for(ChipRevision::Omap4430, &mut second).unwrap_err(),
        OppErrorKind::InvalidInput
    );
    assert_eq!(second.opp_count(), 0);
    assert_eq!(kopp::active().map(|d| d.name), Some("omap4460"));

    let mut again = OppRegistry::with_all_modules();
    assert_eq!(
        omap4_opp_init_for(ChipRevision::Omap4460, &mut again).map(|r| r.registered),
        Ok(26)
    );
}
