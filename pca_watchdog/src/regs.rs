//! register names, addresses and bit layouts for the PCA watchdog

//==========================================================
// SFR addresses (C8051F38x, same on C8051F32x / C8051F34x)

/// PCA module 4 capture/compare low byte, the watchdog offset
pub const PCA0CPL4: u8 = 0xFD;
/// PCA mode register
pub const PCA0MD: u8 = 0xD9;
/// PCA module 4 capture/compare high byte, written to reload the watchdog
pub const PCA0CPH4: u8 = 0xFE;
/// reset source register
pub const RSTSRC: u8 = 0xEF;

//==========================================================

/// value loaded into the timeout register by [`Wdt::start`](crate::wdt::Wdt::start)
pub const TIMEOUT_LOAD_VALUE: u8 = 0xFF;
/// value written to the reload register on every feed
pub const RELOAD_VALUE: u8 = 0x00;
/// reset source pattern left behind by a watchdog reset
pub const WATCHDOG_RESET_CAUSE: u8 = 0x08;

//==========================================================
// PCA0MD

bitflags! {
    pub struct ModeControl: u8 {
    const CIDL = 0b1000_0000;
    const WDTE = 0b0100_0000;
    const WDLCK = 0b0010_0000;
    const CPS2 = 0b0000_1000;
    const CPS1 = 0b0000_0100;
    const CPS0 = 0b0000_0010;
    const ECF = 0b0000_0001;
    }
}

//==========================================================
// RSTSRC

bitflags! {
    pub struct ResetSource: u8 {
    const USBRSF = 0b1000_0000;
    const FERROR = 0b0100_0000;
    const C0RSEF = 0b0010_0000;
    const SWRSF = 0b0001_0000;
    const WDTRSF = 0b0000_1000;
    const MCDRSF = 0b0000_0100;
    const PORSF = 0b0000_0010;
    const PINRSF = 0b0000_0001;
    }
}

impl From<ResetSource> for u8 {
    fn from(original: ResetSource) -> u8 {
        original.bits
    }
}

const RESET_SOURCE_NAMES: [(ResetSource, &str); 8] = [
    (ResetSource::USBRSF, "USBRSF"),
    (ResetSource::FERROR, "FERROR"),
    (ResetSource::C0RSEF, "C0RSEF"),
    (ResetSource::SWRSF, "SWRSF"),
    (ResetSource::WDTRSF, "WDTRSF"),
    (ResetSource::MCDRSF, "MCDRSF"),
    (ResetSource::PORSF, "PORSF"),
    (ResetSource::PINRSF, "PINRSF"),
];

impl ufmt::uDebug for ResetSource {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        if self.is_empty() {
            return f.write_str("(empty)");
        }
        let mut first = true;
        for (flag, name) in RESET_SOURCE_NAMES.iter() {
            if self.contains(*flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

//==========================================================

/// the registers the watchdog driver touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    /// timeout-load, write only
    TimeoutLoad,
    /// mode/control, read-modify-write
    ModeControl,
    /// reload, write only
    Reload,
    /// reset-source, read only
    ResetSource,
}

impl Register {
    pub const ALL: [Register; 4] = [
        Register::TimeoutLoad,
        Register::ModeControl,
        Register::Reload,
        Register::ResetSource,
    ];

    /// SFR address of the register
    pub const fn address(self) -> u8 {
        match self {
            Register::TimeoutLoad => PCA0CPL4,
            Register::ModeControl => PCA0MD,
            Register::Reload => PCA0CPH4,
            Register::ResetSource => RSTSRC,
        }
    }

    /// datasheet mnemonic
    pub const fn name(self) -> &'static str {
        match self {
            Register::TimeoutLoad => "PCA0CPL4",
            Register::ModeControl => "PCA0MD",
            Register::Reload => "PCA0CPH4",
            Register::ResetSource => "RSTSRC",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl ufmt::uDebug for Register {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        f.write_str(self.name())
    }
}

//==========================================================

/// Byte-wide access to the watchdog registers.
///
/// This is the seam between the driver and the hardware. [`Sfr`](crate::sfr::Sfr)
/// implements it over memory-mapped registers and
/// [`MockRegisters`](crate::mock::MockRegisters) over a simulated register file.
pub trait RegisterAccess {
    fn read(&self, reg: Register) -> u8;

    fn write(&mut self, reg: Register, value: u8);

    /// read the register, pass the value through `f`, write the result back
    fn modify<F>(&mut self, reg: Register, f: F)
    where
        F: FnOnce(u8) -> u8,
    {
        let value = self.read(reg);
        self.write(reg, f(value));
    }
}

impl<T: RegisterAccess + ?Sized> RegisterAccess for &mut T {
    fn read(&self, reg: Register) -> u8 {
        (**self).read(reg)
    }

    fn write(&mut self, reg: Register, value: u8) {
        (**self).write(reg, value)
    }

    fn modify<F>(&mut self, reg: Register, f: F)
    where
        F: FnOnce(u8) -> u8,
    {
        (**self).modify(reg, f)
    }
}

//==========================================================
