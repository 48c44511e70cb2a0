//! Watchdog driver for the PCA watchdog of the C8051F38x (and the C8051F32x /
//! C8051F34x, which share its register map).
//!
//! On these parts the watchdog is module 4 of the Programmable Counter Array.
//! It is set up through four special function registers:
//!
//! | Register | SFR | Use |
//! | --- | --- | --- |
//! | `PCA0CPL4` | `0xFD` | timeout offset, loaded with `0xFF` |
//! | `PCA0MD` | `0xD9` | `WDTE` (bit 6) enables the watchdog |
//! | `PCA0CPH4` | `0xFE` | any write reloads the countdown |
//! | `RSTSRC` | `0xEF` | reads `0x08` after a watchdog reset |
//!
//! The driver reaches the registers through the [`RegisterAccess`] trait, so it
//! runs the same against memory-mapped registers ([`sfr::Sfr`]) and against a simulated
//! register file ([`mock::MockRegisters`]).
//!
//! # Example
//! Memory-mapped registers come from [`sfr::Sfr::new`] with the base address
//! of the block. Off target, the simulated register file shows what the
//! driver wrote:
//!
//! ```
//! use pca_watchdog::mock::MockRegisters;
//! use pca_watchdog::wdt::Wdt;
//! use pca_watchdog::Register;
//!
//! let mut watchdog = Wdt::new(MockRegisters::new().with_reset_source(0x08));
//! assert!(watchdog.reset_by_watchdog());
//!
//! watchdog.start(10);
//! for _ in 0..3 {
//!     watchdog.feed();
//! }
//!
//! let regs = watchdog.release();
//! assert_eq!(regs.value(Register::TimeoutLoad), 0xFF);
//! assert_eq!(regs.writes(Register::Reload), 4);
//! ```
//!
//! Feeding the watchdog is the caller's job: the interval between feeds must
//! stay well inside the timeout, or the chip resets.

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate bitflags;

pub mod mock;
pub mod regs;
pub mod sfr;
pub mod wdt;

pub use crate::regs::{Register, RegisterAccess};

pub mod prelude {
    pub use crate::regs::RegisterAccess as _;
    pub use embedded_hal::watchdog::Watchdog as _;
    pub use embedded_hal::watchdog::WatchdogEnable as _;
}
