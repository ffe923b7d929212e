//! Bit-banged control-register line discipline
//!
//! The driver never sees the flash directly; it shapes CLK and CS# edges
//! through a single 32-bit control register. Every logical "clock" costs
//! two register writes (setup with CLK low, hold with CLK high) with a
//! dummy read between and after each — those reads are synchronization
//! fences across the underlying MMIO path. Without them, write-posting
//! reordering can cause the device to observe a shortened clock pulse; this
//! is a hardware contract carried over unchanged from the original bit-bang
//! engine, not a performance nicety to be trimmed.

use bitflags::bitflags;

use crate::error::Result;
use crate::reg_if::RegisterInterface;
use crate::spi::protocol::ProtocolMode;

bitflags! {
    /// Line state of the bit-banged control register
    ///
    /// Data and output-enable bits are grouped by lane (`D0`..`D3`,
    /// `OE0`..`OE3`); the composite constants (`D01`, `OE0123`, ...) name
    /// the groups actually asserted together for dual/quad I/O.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CtrlBits: u32 {
        /// D0 data line value
        const D0 = 1 << 0;
        /// D1 data line value
        const D1 = 1 << 1;
        /// D2 data line value
        const D2 = 1 << 2;
        /// D3 data line value
        const D3 = 1 << 3;
        /// D0 and D1 together, for dual-I/O framing
        const D01 = Self::D0.bits() | Self::D1.bits();
        /// D0..D3 together, for quad-I/O framing
        const D0123 = Self::D0.bits() | Self::D1.bits() | Self::D2.bits() | Self::D3.bits();

        /// Output-enable for D0
        const OE0 = 1 << 8;
        /// Output-enable for D1
        const OE1 = 1 << 9;
        /// Output-enable for D2
        const OE2 = 1 << 10;
        /// Output-enable for D3
        const OE3 = 1 << 11;
        /// OE0 and OE1 together
        const OE01 = Self::OE0.bits() | Self::OE1.bits();
        /// OE0..OE3 together
        const OE0123 = Self::OE0.bits() | Self::OE1.bits() | Self::OE2.bits() | Self::OE3.bits();

        /// Clock line
        const CLK = 1 << 16;
        /// Chip-select-not (1 = deselected)
        const CS_N = 1 << 17;
    }
}

fn ctrl_read(regs: &dyn RegisterInterface, ctrl_off: usize) -> Result<CtrlBits> {
    Ok(CtrlBits::from_bits_truncate(regs.read32(ctrl_off)?))
}

fn ctrl_write(regs: &dyn RegisterInterface, ctrl_off: usize, val: CtrlBits) -> Result<()> {
    regs.write32(ctrl_off, val.bits())
}

/// Assert CS# (select the flash) and park CLK low, OEs off
pub fn select(regs: &dyn RegisterInterface, ctrl_off: usize) -> Result<()> {
    ctrl_write(regs, ctrl_off, CtrlBits::empty())
}

/// Deassert CS#
pub fn deselect(regs: &dyn RegisterInterface, ctrl_off: usize) -> Result<()> {
    ctrl_write(regs, ctrl_off, CtrlBits::CS_N)
}

/// Output-enable bits to assert while driving data lines for `proto`
fn oe_bits(proto: ProtocolMode) -> Result<CtrlBits> {
    Ok(match proto {
        ProtocolMode::Str => CtrlBits::OE0,
        ProtocolMode::DualStr => CtrlBits::OE01,
        ProtocolMode::QuadStr => CtrlBits::OE0123,
        ProtocolMode::Dtr | ProtocolMode::DualDtr | ProtocolMode::QuadDtr => {
            return Err(crate::error::Error::ProtocolNotSupported)
        }
    })
}

/// Emit one byte, MSB-first, driving the data lines for `proto`
pub fn write_byte(regs: &dyn RegisterInterface, ctrl_off: usize, val: u8, proto: ProtocolMode) -> Result<()> {
    let oe = oe_bits(proto)?;
    let lanes = proto.lane_count()?;

    let mut shift = 8i32 - lanes as i32;
    while shift >= 0 {
        let bits = ((val as u32) >> shift) & ((1u32 << lanes) - 1);

        ctrl_write(regs, ctrl_off, CtrlBits::from_bits_truncate(bits) | oe)?;
        ctrl_read(regs, ctrl_off)?; // fence
        ctrl_write(regs, ctrl_off, CtrlBits::from_bits_truncate(bits) | oe | CtrlBits::CLK)?;
        ctrl_read(regs, ctrl_off)?; // fence

        shift -= lanes as i32;
    }

    ctrl_write(regs, ctrl_off, CtrlBits::empty())
}

/// Read one byte, MSB-first, sampling the data lines the flash drives
pub fn read_byte(regs: &dyn RegisterInterface, ctrl_off: usize, proto: ProtocolMode) -> Result<u8> {
    let lanes = proto.lane_count()?;
    // For single-wire reads the flash drives MISO on D1, not D0 (D0 is
    // host-driven MOSI even while reading); for dual/quad the same lines
    // used for output are reused for input.
    let sample_mask = match proto {
        ProtocolMode::Str => CtrlBits::D1,
        ProtocolMode::DualStr => CtrlBits::D01,
        ProtocolMode::QuadStr => CtrlBits::D0123,
        _ => unreachable!("lane_count already rejected DTR variants"),
    };

    let mut val: u32 = 0;
    let groups = 8 / lanes as u32;
    let shift_down = sample_mask.bits().trailing_zeros();

    for _ in 0..groups {
        ctrl_write(regs, ctrl_off, CtrlBits::empty())?;
        ctrl_read(regs, ctrl_off)?; // fence
        let sampled = (ctrl_read(regs, ctrl_off)? & sample_mask).bits() >> shift_down;
        val = (val << lanes) | sampled;
        ctrl_write(regs, ctrl_off, CtrlBits::CLK)?;
        ctrl_read(regs, ctrl_off)?; // fence
    }

    ctrl_write(regs, ctrl_off, CtrlBits::empty())?;

    Ok(val as u8)
}

/// Emit a 24-bit (3-byte) address, MSB-first
pub fn write_addr(regs: &dyn RegisterInterface, ctrl_off: usize, addr: u32, proto: ProtocolMode) -> Result<()> {
    write_byte(regs, ctrl_off, (addr >> 16) as u8, proto)?;
    write_byte(regs, ctrl_off, (addr >> 8) as u8, proto)?;
    write_byte(regs, ctrl_off, addr as u8, proto)
}

/// Emit a 32-bit (4-byte) address, MSB-first
pub fn write_addr_4b(regs: &dyn RegisterInterface, ctrl_off: usize, addr: u32, proto: ProtocolMode) -> Result<()> {
    write_byte(regs, ctrl_off, (addr >> 24) as u8, proto)?;
    write_byte(regs, ctrl_off, (addr >> 16) as u8, proto)?;
    write_byte(regs, ctrl_off, (addr >> 8) as u8, proto)?;
    write_byte(regs, ctrl_off, addr as u8, proto)
}

/// Emit one bare CLK toggle with no OE and no data sample (a dummy cycle)
pub fn dummy_cycle(regs: &dyn RegisterInterface, ctrl_off: usize) -> Result<()> {
    ctrl_write(regs, ctrl_off, CtrlBits::CLK)?;
    ctrl_write(regs, ctrl_off, CtrlBits::empty())
}
