//! BPI (byte-programmable-interface) flash driver stub
//!
//! Parallel-bus NOR flash addressed through a dedicated address register
//! and data register rather than a bit-banged command stream. This crate's
//! targets are all SPI parts; BPI support is carried only far enough to let
//! [`crate::flash::FlashDevice::open_bpi`] stand up a real register view,
//! not to move data.

use crate::error::{Error, Result};
use crate::reg_if::RegisterInterface;

/// BPI flash driver
///
/// `init` records the three register offsets a real implementation would
/// drive; every data-moving method returns [`Error::OpcodeNotSupported`]
/// rather than guessing at a command set this crate does not target.
#[derive(Debug, Clone, Copy)]
pub struct BpiFlashDriver {
    #[allow(dead_code)]
    data_width: u8,
    #[allow(dead_code)]
    ctrl_off: usize,
    #[allow(dead_code)]
    addr_off: usize,
    #[allow(dead_code)]
    data_off: usize,
}

impl BpiFlashDriver {
    /// Record register offsets; does not touch the device
    pub fn init(
        _regs: &dyn RegisterInterface,
        data_width: u8,
        ctrl_off: usize,
        addr_off: usize,
        data_off: usize,
    ) -> Result<Self> {
        Ok(Self {
            data_width,
            ctrl_off,
            addr_off,
            data_off,
        })
    }

    /// Unimplemented in this core
    pub fn read(&self, _regs: &dyn RegisterInterface, _addr: u32, _buf: &mut [u8]) -> Result<()> {
        Err(Error::OpcodeNotSupported)
    }

    /// Unimplemented in this core
    pub fn write(&self, _regs: &dyn RegisterInterface, _addr: u32, _data: &[u8]) -> Result<()> {
        Err(Error::OpcodeNotSupported)
    }

    /// Unimplemented in this core
    pub fn erase(&self, _regs: &dyn RegisterInterface, _addr: u32, _len: usize) -> Result<()> {
        Err(Error::OpcodeNotSupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg_if::RawRegisters;

    #[test]
    fn init_succeeds_and_records_offsets() {
        let mut backing = [0u8; 0x10];
        let regs = unsafe { RawRegisters::new(backing.as_mut_ptr(), backing.len()) };

        let driver = BpiFlashDriver::init(&regs, 1, 0x00, 0x04, 0x08).unwrap();
        assert_eq!(driver.ctrl_off, 0x00);
        assert_eq!(driver.addr_off, 0x04);
        assert_eq!(driver.data_off, 0x08);
    }

    #[test]
    fn data_operations_are_unsupported() {
        let mut backing = [0u8; 0x10];
        let regs = unsafe { RawRegisters::new(backing.as_mut_ptr(), backing.len()) };
        let driver = BpiFlashDriver::init(&regs, 1, 0x00, 0x04, 0x08).unwrap();

        let mut buf = [0u8; 4];
        assert_eq!(driver.read(&regs, 0, &mut buf), Err(Error::OpcodeNotSupported));
        assert_eq!(driver.write(&regs, 0, &buf), Err(Error::OpcodeNotSupported));
        assert_eq!(driver.erase(&regs, 0, 0x1000), Err(Error::OpcodeNotSupported));
    }
}
