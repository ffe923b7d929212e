//! Flash device façade
//!
//! [`FlashDevice`] borrows a register window and picks a driver (SPI or
//! BPI) at open time; callers thereafter see one `read`/`write`/`erase`
//! surface regardless of which bus is underneath.

pub mod geometry;

use crate::bpi::BpiFlashDriver;
use crate::error::Result;
use crate::reg_if::RegisterInterface;
use crate::spi::SpiFlashDriver;
use geometry::Geometry;

/// The active driver behind a [`FlashDevice`]
///
/// A closed enum rather than a second trait object: exactly two bus kinds
/// exist for this register-window family, and dispatch is a two-way match
/// rather than a vtable call.
#[derive(Debug, Clone)]
pub enum Driver {
    /// Bit-banged SPI NOR flash
    Spi(SpiFlashDriver),
    /// Parallel BPI NOR flash (stub; see [`crate::bpi`])
    Bpi(BpiFlashDriver),
}

/// A flash device reachable through a borrowed register window
///
/// Does not own the register transport; `'a` ties the device to the
/// lifetime of whatever [`RegisterInterface`] it was opened against (a
/// whole [`crate::reg_if::RawRegisters`] window, or an
/// [`crate::reg_if::OffsetRegisters`] view into a discovered register
/// block).
pub struct FlashDevice<'a> {
    regs: &'a dyn RegisterInterface,
    driver: Driver,
}

impl<'a> FlashDevice<'a> {
    /// Open a SPI NOR flash behind a single control register at `ctrl_off`
    pub fn open_spi(data_width: u8, regs: &'a dyn RegisterInterface, ctrl_off: usize) -> Result<Self> {
        let driver = SpiFlashDriver::init(regs, ctrl_off, data_width)?;
        Ok(Self {
            regs,
            driver: Driver::Spi(driver),
        })
    }

    /// Open a BPI NOR flash behind ctrl/addr/data registers
    ///
    /// Succeeds immediately; every data-moving call on the result returns
    /// [`crate::error::Error::OpcodeNotSupported`] (see [`crate::bpi`]).
    pub fn open_bpi(
        data_width: u8,
        regs: &'a dyn RegisterInterface,
        ctrl_off: usize,
        addr_off: usize,
        data_off: usize,
    ) -> Result<Self> {
        let driver = BpiFlashDriver::init(regs, data_width, ctrl_off, addr_off, data_off)?;
        Ok(Self {
            regs,
            driver: Driver::Bpi(driver),
        })
    }

    /// The driver behind this device
    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    /// Device geometry, if known (`None` for the BPI stub)
    pub fn geometry(&self) -> Option<&Geometry> {
        match &self.driver {
            Driver::Spi(d) => Some(d.geometry()),
            Driver::Bpi(_) => None,
        }
    }

    /// Read `buf.len()` bytes starting at `addr`
    pub fn read(&self, addr: u32, buf: &mut [u8]) -> Result<()> {
        match &self.driver {
            Driver::Spi(d) => d.read(self.regs, addr, buf),
            Driver::Bpi(d) => d.read(self.regs, addr, buf),
        }
    }

    /// Program `data` starting at `addr`
    pub fn write(&self, addr: u32, data: &[u8]) -> Result<()> {
        match &self.driver {
            Driver::Spi(d) => d.write(self.regs, addr, data),
            Driver::Bpi(d) => d.write(self.regs, addr, data),
        }
    }

    /// Erase `len` bytes starting at `addr`
    pub fn erase(&self, addr: u32, len: usize) -> Result<()> {
        match &self.driver {
            Driver::Spi(d) => d.erase(self.regs, addr, len),
            Driver::Bpi(d) => d.erase(self.regs, addr, len),
        }
    }
}
