//! Property-based tests for the watchdog register contract.

use pca_watchdog::mock::MockRegisters;
use pca_watchdog::regs::ModeControl;
use pca_watchdog::wdt::Wdt;
use pca_watchdog::Register;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_only_exact_pattern_means_watchdog(rstsrc in any::<u8>()) {
        let wdt = Wdt::new(MockRegisters::new().with_reset_source(rstsrc));
        prop_assert_eq!(wdt.reset_by_watchdog(), rstsrc == 0x08);
    }

    #[test]
    fn prop_start_ors_enable_bit(mode in any::<u8>()) {
        let mut wdt = Wdt::new(MockRegisters::new().with_mode_control(mode));
        wdt.start(10);
        let after = wdt.registers().value(Register::ModeControl);
        prop_assert_eq!(after, mode | ModeControl::WDTE.bits());
        prop_assert_eq!(after & mode, mode);
    }

    #[test]
    fn prop_timeout_count_is_ignored(a in any::<u32>(), b in any::<u32>()) {
        let mut first = Wdt::new(MockRegisters::new());
        let mut second = Wdt::new(MockRegisters::new());
        first.start(a);
        second.start(b);
        prop_assert_eq!(first.release(), second.release());
    }

    #[test]
    fn prop_reload_count_tracks_feeds(feeds in 0u32..200) {
        let mut wdt = Wdt::new(MockRegisters::new());
        wdt.start(10);
        for _ in 0..feeds {
            wdt.feed();
        }
        let regs = wdt.release();
        prop_assert_eq!(regs.writes(Register::Reload), u64::from(feeds) + 1);
        prop_assert_eq!(regs.value(Register::Reload), 0x00);
        prop_assert_eq!(regs.writes(Register::TimeoutLoad), 1);
        prop_assert_eq!(regs.writes(Register::ModeControl), 1);
    }
}
