//! volatile access to the watchdog registers through a pointer

use crate::regs::{Register, RegisterAccess};
use core::ptr;

/// The watchdog registers, seen through a base pointer.
///
/// Each [`Register`] lives at `base + register.address()`. This is for ports
/// that expose the register contract as memory-mapped bytes (a simulator, a
/// bus bridge, a core with memory-mapped peripherals). On the 8051 itself the
/// SFRs are only reachable by direct addressing; a pointer into
/// `0x80..=0xFF` lands in upper IRAM, so that port needs its own
/// [`RegisterAccess`] impl.
pub struct Sfr {
    base: *mut u8,
}

impl Sfr {
    /// # Safety
    /// `base` must point to a region at least 256 bytes long that stays valid
    /// for the lifetime of the returned value, and nothing else may access the
    /// watchdog registers within it while this value exists.
    pub const unsafe fn new(base: *mut u8) -> Sfr {
        Sfr { base }
    }

    fn ptr(&self, reg: Register) -> *mut u8 {
        // address() is a u8, so the offset is always inside the 256 byte block
        unsafe { self.base.add(reg.address() as usize) }
    }
}

impl RegisterAccess for Sfr {
    fn read(&self, reg: Register) -> u8 {
        unsafe { ptr::read_volatile(self.ptr(reg)) }
    }

    fn write(&mut self, reg: Register, value: u8) {
        unsafe { ptr::write_volatile(self.ptr(reg), value) }
    }
}

//==========================================================
