//! SPI NOR flash driver: vendor-aware init, read, program, erase
//!
//! This is the bit-banged engine behind [`crate::flash::FlashDevice::open_spi`].
//! It owns no register window itself - every call takes the borrowed
//! [`RegisterInterface`] it should drive, so the same driver state can be
//! reused across calls without re-deriving offsets.

use crate::error::{Error, Result};
use crate::flash::geometry::{EraseRegionInfo, Geometry};
use crate::reg_if::RegisterInterface;
use crate::spi::ctrl;
use crate::spi::opcodes as op;
use crate::spi::protocol::ProtocolMode;

const PAGE_SIZE: usize = 0x100;
const SUBSECTOR_SIZE: usize = 0x1000;
const SECTOR_SIZE: usize = 0x10000;
const FOUR_BYTE_ADDR_THRESHOLD: usize = 0x1000_000;

/// Status register bit for Write In Progress
const SR_WIP: u8 = op::SR_WIP;
/// Status register bit for Write Enable Latch
const SR_WEL: u8 = op::SR_WEL;

/// Bit-banged SPI NOR flash driver
///
/// Built by [`SpiFlashDriver::init`], which probes the part and records the
/// dummy-cycle count and geometry that every later operation depends on.
/// `bulk_protocol` records the protocol negotiated for data phases during
/// init diagnostics; read and program opcode selection key off `data_width`
/// directly, matching the negotiation the vendor-specific setup already
/// performed.
#[derive(Debug, Clone)]
pub struct SpiFlashDriver {
    ctrl_off: usize,
    data_width: u8,
    bulk_protocol: ProtocolMode,
    read_dummy_cycles: u8,
    geometry: Geometry,
}

impl SpiFlashDriver {
    /// Reset the part, read its JEDEC ID, and configure protocol/geometry
    ///
    /// `data_width` of 4 requests quad I/O where the vendor supports it;
    /// any other value keeps the part in single-wire (`Str`) mode.
    pub fn init(regs: &dyn RegisterInterface, ctrl_off: usize, data_width: u8) -> Result<Self> {
        reset(regs, ctrl_off)?;

        ctrl::write_byte(regs, ctrl_off, op::READ_ID, ProtocolMode::Str)?;
        let mfr_id = ctrl::read_byte(regs, ctrl_off, ProtocolMode::Str)?;
        let mem_type = ctrl::read_byte(regs, ctrl_off, ProtocolMode::Str)?;
        let mem_capacity = ctrl::read_byte(regs, ctrl_off, ProtocolMode::Str)?;
        ctrl::deselect(regs, ctrl_off)?;

        log::debug!("manufacturer id: {mfr_id:#04x}");
        log::debug!("memory type: {mem_type:#04x}");
        log::debug!("memory capacity: {mem_capacity:#04x}");

        let size = decode_size(mfr_id, mem_capacity)?;
        log::info!("flash size: {} MiB", size / (1 << 20));

        let mut driver = Self {
            ctrl_off,
            data_width,
            bulk_protocol: ProtocolMode::Str,
            read_dummy_cycles: 0,
            geometry: Geometry {
                size,
                write_buffer_size: PAGE_SIZE,
                erase_block_size: SUBSECTOR_SIZE,
                erase_region: [
                    EraseRegionInfo {
                        block_count: size / SUBSECTOR_SIZE,
                        block_size: SUBSECTOR_SIZE,
                        region_start: 0,
                        region_end: size,
                    },
                    EraseRegionInfo::default(),
                ],
                erase_region_count: 1,
            },
        };

        log::debug!(
            "write buffer size: {} B, erase block size: {} B",
            driver.geometry.write_buffer_size,
            driver.geometry.erase_block_size
        );
        log::debug!(
            "status register: {:#04x}",
            read_status_reg(regs, ctrl_off)?
        );

        match mfr_id {
            0x20 => driver.configure_micron_quad(regs)?,
            0xC2 => driver.configure_macronix_quad(regs)?,
            _ => unreachable!("decode_size already rejected unknown vendors"),
        }

        ctrl::deselect(regs, ctrl_off)?;
        Ok(driver)
    }

    fn configure_micron_quad(&mut self, regs: &dyn RegisterInterface) -> Result<()> {
        if self.data_width == 4 {
            ctrl::write_byte(regs, self.ctrl_off, op::WRITE_V_CONFIG_REG, ProtocolMode::Str)?;
            ctrl::write_byte(regs, self.ctrl_off, 0xFB, ProtocolMode::Str)?;
            ctrl::deselect(regs, self.ctrl_off)?;
            self.bulk_protocol = ProtocolMode::QuadStr;
            self.read_dummy_cycles = 10;
        }
        Ok(())
    }

    fn configure_macronix_quad(&mut self, regs: &dyn RegisterInterface) -> Result<()> {
        if self.data_width == 4 {
            ctrl::write_byte(regs, self.ctrl_off, op::WRITE_STATUS_REG, ProtocolMode::Str)?;
            ctrl::write_byte(regs, self.ctrl_off, 0x40, ProtocolMode::Str)?;
            ctrl::write_byte(regs, self.ctrl_off, 0x07, ProtocolMode::Str)?;
            ctrl::deselect(regs, self.ctrl_off)?;
            self.bulk_protocol = ProtocolMode::QuadStr;
            self.read_dummy_cycles = 6;
        }
        Ok(())
    }

    /// Device geometry established during [`Self::init`]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Protocol negotiated for data phases during quad-mode setup
    pub fn bulk_protocol(&self) -> ProtocolMode {
        self.bulk_protocol
    }

    fn uses_4b_addr(&self) -> bool {
        self.geometry.size > FOUR_BYTE_ADDR_THRESHOLD
    }

    /// Read `buf.len()` bytes starting at `addr`
    pub fn read(&self, regs: &dyn RegisterInterface, addr: u32, buf: &mut [u8]) -> Result<()> {
        let result = self.read_inner(regs, addr, buf);
        ctrl::deselect(regs, self.ctrl_off)?;
        result
    }

    fn read_inner(&self, regs: &dyn RegisterInterface, addr: u32, buf: &mut [u8]) -> Result<()> {
        let protocol = if self.data_width == 4 {
            ProtocolMode::QuadStr
        } else {
            ProtocolMode::Str
        };

        if self.uses_4b_addr() {
            let opcode = if protocol == ProtocolMode::QuadStr {
                op::FAST_READ_QUAD_IO_4B
            } else {
                op::READ_4B
            };
            ctrl::write_byte(regs, self.ctrl_off, opcode, ProtocolMode::Str)?;
            ctrl::write_addr_4b(regs, self.ctrl_off, addr, protocol)?;
        } else {
            let opcode = if protocol == ProtocolMode::QuadStr {
                op::FAST_READ_QUAD_IO
            } else {
                op::READ
            };
            ctrl::write_byte(regs, self.ctrl_off, opcode, ProtocolMode::Str)?;
            ctrl::write_addr(regs, self.ctrl_off, addr, protocol)?;
        }

        if !protocol.is_str() {
            for _ in 0..self.read_dummy_cycles {
                ctrl::dummy_cycle(regs, self.ctrl_off)?;
            }
        }

        for byte in buf.iter_mut() {
            *byte = ctrl::read_byte(regs, self.ctrl_off, protocol)?;
        }

        Ok(())
    }

    /// Program `data` starting at `addr`, one page at a time
    ///
    /// `addr` must be 256-byte aligned; this matches the original
    /// protocol's per-page alignment check rather than silently rounding.
    pub fn write(&self, regs: &dyn RegisterInterface, addr: u32, data: &[u8]) -> Result<()> {
        let result = self.write_inner(regs, addr, data);
        ctrl::deselect(regs, self.ctrl_off)?;
        result
    }

    fn write_inner(&self, regs: &dyn RegisterInterface, mut addr: u32, data: &[u8]) -> Result<()> {
        let protocol = if self.data_width == 4 {
            ProtocolMode::QuadStr
        } else {
            ProtocolMode::Str
        };
        let mut rest = data;

        while !rest.is_empty() {
            if addr & (PAGE_SIZE as u32 - 1) != 0 {
                log::error!("write address {addr:#010x} is not page-aligned");
                return Err(Error::RequestError("invalid write request"));
            }

            if self.uses_4b_addr() {
                write_ext_addr_reg(regs, self.ctrl_off, (addr >> 24) as u8)?;
            }

            write_enable(regs, self.ctrl_off)?;
            require_wel(regs, self.ctrl_off)?;

            let opcode = if self.data_width == 4 {
                op::PAGE_PROGRAM_QUAD_IN
            } else {
                op::PAGE_PROGRAM
            };
            ctrl::write_byte(regs, self.ctrl_off, opcode, ProtocolMode::Str)?;
            ctrl::write_addr(regs, self.ctrl_off, addr, ProtocolMode::Str)?;

            let space_in_page = PAGE_SIZE - (addr as usize & (PAGE_SIZE - 1));
            let chunk_len = space_in_page.min(rest.len());
            let (chunk, remainder) = rest.split_at(chunk_len);

            for &byte in chunk {
                ctrl::write_byte(regs, self.ctrl_off, byte, protocol)?;
            }
            addr = addr.wrapping_add(chunk_len as u32);
            rest = remainder;

            ctrl::deselect(regs, self.ctrl_off)?;
            wait_wip(regs, self.ctrl_off)?;
        }

        Ok(())
    }

    /// Erase `len` bytes starting at `addr`, using the largest block size
    /// the current alignment and remaining length allow
    pub fn erase(&self, regs: &dyn RegisterInterface, addr: u32, len: usize) -> Result<()> {
        let result = self.erase_inner(regs, addr, len);
        ctrl::deselect(regs, self.ctrl_off)?;
        result
    }

    fn erase_inner(&self, regs: &dyn RegisterInterface, mut addr: u32, mut len: usize) -> Result<()> {
        while len > 0 {
            let (block_size, opcode) = if addr as usize & (SECTOR_SIZE - 1) == 0 && len >= SECTOR_SIZE {
                (SECTOR_SIZE, op::SECTOR_ERASE)
            } else if addr as usize & (SUBSECTOR_SIZE - 1) == 0 && len >= SUBSECTOR_SIZE {
                (SUBSECTOR_SIZE, op::SUBSECTOR_ERASE_4KB)
            } else {
                log::error!("erase range {addr:#010x}+{len:#x} is not block-aligned");
                return Err(Error::RequestError("invalid erase request"));
            };

            if self.uses_4b_addr() {
                write_ext_addr_reg(regs, self.ctrl_off, (addr >> 24) as u8)?;
            }

            write_enable(regs, self.ctrl_off)?;
            require_wel(regs, self.ctrl_off)?;

            ctrl::write_byte(regs, self.ctrl_off, opcode, ProtocolMode::Str)?;
            ctrl::write_addr(regs, self.ctrl_off, addr, ProtocolMode::Str)?;
            ctrl::deselect(regs, self.ctrl_off)?;

            wait_wip(regs, self.ctrl_off)?;

            addr = addr.wrapping_add(block_size as u32);
            len -= block_size.min(len);
        }

        Ok(())
    }
}

fn decode_size(mfr_id: u8, mem_capacity: u8) -> Result<usize> {
    match mfr_id {
        0x00 | 0xFF => {
            log::error!("manufacturer id {mfr_id:#04x} reads as a dead bus");
            Err(Error::HardwareError("dead bus"))
        }
        0x20 => {
            // Micron encodes capacity as BCD: tens nibble * 10 + ones nibble.
            let lo = (mem_capacity & 0xF) as u32;
            let hi = ((mem_capacity >> 4) & 0xF) as u32;
            let exponent = lo + hi * 10 + 6;
            1usize.checked_shl(exponent).ok_or_else(|| {
                log::error!("micron capacity byte {mem_capacity:#04x} decodes to an out-of-range shift");
                Error::HardwareError("malformed vendor id")
            })
        }
        0xC2 => {
            // Macronix encodes capacity directly; anything below 32 would
            // shift out of range rather than name a real part.
            if mem_capacity < 32 {
                log::error!("macronix capacity byte {mem_capacity:#04x} is below the valid range");
                return Err(Error::HardwareError("malformed vendor id"));
            }
            1usize.checked_shl((mem_capacity - 32) as u32).ok_or_else(|| {
                log::error!("macronix capacity byte {mem_capacity:#04x} decodes to an out-of-range shift");
                Error::HardwareError("malformed vendor id")
            })
        }
        _ => {
            log::error!("unrecognized manufacturer id {mfr_id:#04x}");
            Err(Error::HardwareError("unknown vendor id"))
        }
    }
}

fn reset(regs: &dyn RegisterInterface, ctrl_off: usize) -> Result<()> {
    ctrl::deselect(regs, ctrl_off)?;
    ctrl::write_byte(regs, ctrl_off, op::RESET_ENABLE, ProtocolMode::Str)?;
    ctrl::deselect(regs, ctrl_off)?;
    ctrl::dummy_cycle(regs, ctrl_off)?;
    ctrl::dummy_cycle(regs, ctrl_off)?;
    ctrl::write_byte(regs, ctrl_off, op::RESET_MEMORY, ProtocolMode::Str)?;
    ctrl::deselect(regs, ctrl_off)?;
    ctrl::dummy_cycle(regs, ctrl_off)?;
    ctrl::dummy_cycle(regs, ctrl_off)
}

fn read_status_reg(regs: &dyn RegisterInterface, ctrl_off: usize) -> Result<u8> {
    ctrl::write_byte(regs, ctrl_off, op::READ_STATUS_REG, ProtocolMode::Str)?;
    let val = ctrl::read_byte(regs, ctrl_off, ProtocolMode::Str)?;
    ctrl::deselect(regs, ctrl_off)?;
    Ok(val)
}

fn write_enable(regs: &dyn RegisterInterface, ctrl_off: usize) -> Result<()> {
    ctrl::write_byte(regs, ctrl_off, op::WRITE_ENABLE, ProtocolMode::Str)?;
    ctrl::deselect(regs, ctrl_off)
}

fn require_wel(regs: &dyn RegisterInterface, ctrl_off: usize) -> Result<()> {
    if read_status_reg(regs, ctrl_off)? & SR_WEL == 0 {
        log::error!("write enable latch did not set after WREN");
        return Err(Error::HardwareError("failed to enable writing"));
    }
    Ok(())
}

fn write_ext_addr_reg(regs: &dyn RegisterInterface, ctrl_off: usize, bank: u8) -> Result<()> {
    ctrl::write_byte(regs, ctrl_off, op::WRITE_EXT_ADDR_REG, ProtocolMode::Str)?;
    ctrl::write_byte(regs, ctrl_off, bank, ProtocolMode::Str)?;
    ctrl::deselect(regs, ctrl_off)
}

fn wait_wip(regs: &dyn RegisterInterface, ctrl_off: usize) -> Result<()> {
    while read_status_reg(regs, ctrl_off)? & SR_WIP != 0 {}
    Ok(())
}
