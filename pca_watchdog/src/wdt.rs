//! Watchdog timer on PCA module 4
//!
//! The watchdog is clocked from the PCA, and on this part the PCA runs from an
//! internal RC oscillator whose frequency moves a long way with temperature
//! (datasheet: 17 kHz min, 32 kHz typ, 47 kHz max). Pick a timeout with at
//! least a 2x margin over the longest interval between feeds.

use crate::regs::{
    ModeControl, Register, RegisterAccess, ResetSource, RELOAD_VALUE, TIMEOUT_LOAD_VALUE,
    WATCHDOG_RESET_CAUSE,
};
use embedded_hal::watchdog;

/// Watchdog driver.
///
/// Holds nothing but the register access, every call goes straight to the
/// hardware. Once started the watchdog cannot be stopped again.
pub struct Wdt<R> {
    regs: R,
}

impl<R: RegisterAccess> Wdt<R> {
    /// Wrap the registers. Touches no hardware.
    pub fn new(regs: R) -> Wdt<R> {
        Wdt { regs }
    }

    /// Load the timeout, enable the watchdog and give it a first feed.
    ///
    /// Call once, before the first [`feed`](Wdt::feed), while the watchdog is
    /// still disabled.
    ///
    /// # Note
    /// `_timeout_count` is not used. The timeout register is always loaded with
    /// [`TIMEOUT_LOAD_VALUE`] (0xFF, the longest timeout) whatever is passed.
    pub fn start(&mut self, _timeout_count: u32) {
        self.regs.write(Register::TimeoutLoad, TIMEOUT_LOAD_VALUE);
        // other PCA0MD bits belong to the PCA, keep them
        self.regs
            .modify(Register::ModeControl, |v| v | ModeControl::WDTE.bits());
        self.feed();
    }

    /// Restart the countdown.
    pub fn feed(&mut self) {
        self.regs.write(Register::Reload, RELOAD_VALUE);
    }

    /// true only if the watchdog alone caused the last reset
    pub fn reset_by_watchdog(&self) -> bool {
        self.regs.read(Register::ResetSource) == WATCHDOG_RESET_CAUSE
    }

    /// decoded reset-source register
    pub fn reset_source(&self) -> ResetSource {
        ResetSource::from_bits_truncate(self.regs.read(Register::ResetSource))
    }

    pub fn is_enabled(&self) -> bool {
        ModeControl::from_bits_truncate(self.regs.read(Register::ModeControl))
            .contains(ModeControl::WDTE)
    }

    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Give back the registers. The watchdog keeps running.
    pub fn release(self) -> R {
        self.regs
    }
}

impl<R: RegisterAccess> watchdog::WatchdogEnable for Wdt<R> {
    type Time = u32;

    fn start<T>(&mut self, period: T)
    where
        T: Into<Self::Time>,
    {
        Wdt::start(self, period.into())
    }
}

impl<R: RegisterAccess> watchdog::Watchdog for Wdt<R> {
    fn feed(&mut self) {
        Wdt::feed(self)
    }
}

//==========================================================
