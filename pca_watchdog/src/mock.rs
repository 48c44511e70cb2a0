//! simulated register file for running the driver off target

use crate::regs::{Register, RegisterAccess};

/// Register file that keeps one byte per [`Register`] and counts the writes
/// made to each.
///
/// Reads are never counted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MockRegisters {
    values: [u8; 4],
    writes: [u64; 4],
}

impl MockRegisters {
    /// all registers zero, no writes recorded
    pub fn new() -> MockRegisters {
        MockRegisters::default()
    }

    /// preset the reset-source register, as if the chip had just come out of reset
    pub fn with_reset_source(mut self, value: u8) -> MockRegisters {
        self.set(Register::ResetSource, value);
        self
    }

    /// preset mode/control bits owned by other PCA users
    pub fn with_mode_control(mut self, value: u8) -> MockRegisters {
        self.set(Register::ModeControl, value);
        self
    }

    /// change a register behind the driver's back, without counting a write
    pub fn set(&mut self, reg: Register, value: u8) {
        self.values[reg.index()] = value;
    }

    pub fn value(&self, reg: Register) -> u8 {
        self.values[reg.index()]
    }

    /// number of writes made to `reg`
    pub fn writes(&self, reg: Register) -> u64 {
        self.writes[reg.index()]
    }

    pub fn total_writes(&self) -> u64 {
        self.writes.iter().sum()
    }
}

impl RegisterAccess for MockRegisters {
    fn read(&self, reg: Register) -> u8 {
        self.value(reg)
    }

    fn write(&mut self, reg: Register, value: u8) {
        self.values[reg.index()] = value;
        self.writes[reg.index()] += 1;
    }
}

//==========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_counts_and_stores() {
        let mut regs = MockRegisters::new();
        regs.write(Register::Reload, 0x00);
        regs.write(Register::Reload, 0x00);
        regs.write(Register::TimeoutLoad, 0x7F);
        assert_eq!(regs.writes(Register::Reload), 2);
        assert_eq!(regs.writes(Register::TimeoutLoad), 1);
        assert_eq!(regs.value(Register::TimeoutLoad), 0x7F);
        assert_eq!(regs.total_writes(), 3);
    }

    #[test]
    fn write_count_goes_past_u32() {
        let mut regs = MockRegisters::new();
        regs.writes[Register::Reload.index()] = u64::from(u32::MAX);
        regs.write(Register::Reload, 0x00);
        regs.write(Register::TimeoutLoad, 0xFF);
        assert_eq!(regs.writes(Register::Reload), u64::from(u32::MAX) + 1);
        assert_eq!(regs.total_writes(), u64::from(u32::MAX) + 2);
    }

    #[test]
    fn presets_are_not_writes() {
        let regs = MockRegisters::new()
            .with_reset_source(0x08)
            .with_mode_control(0x02);
        assert_eq!(regs.read(Register::ResetSource), 0x08);
        assert_eq!(regs.read(Register::ModeControl), 0x02);
        assert_eq!(regs.total_writes(), 0);
    }

    #[test]
    fn modify_is_one_write() {
        let mut regs = MockRegisters::new().with_mode_control(0x81);
        regs.modify(Register::ModeControl, |v| v | 0x40);
        assert_eq!(regs.value(Register::ModeControl), 0xC1);
        assert_eq!(regs.writes(Register::ModeControl), 1);
    }

    #[test]
    fn borrowed_mock_records_writes() {
        fn reload<R: RegisterAccess>(mut regs: R) {
            regs.write(Register::Reload, 0x00);
        }

        let mut regs = MockRegisters::new();
        reload(&mut regs);
        reload(&mut regs);
        assert_eq!(regs.writes(Register::Reload), 2);
    }
}
