//! SPI protocol mode — bits-per-clock and edge discipline

use crate::error::{Error, Result};

/// Bits-per-clock and edge discipline for a bit-banged SPI transaction
///
/// `Dtr`, `DualDtr`, and `QuadDtr` are represented so callers and match
/// arms are exhaustive, but this driver does not implement double transfer
/// rate: every primitive that receives one of these returns
/// [`Error::ProtocolNotSupported`] rather than silently doing nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolMode {
    /// Single Transfer Rate: 1 bit/clock on D0
    Str,
    /// Double Transfer Rate, single line - not implemented
    Dtr,
    /// Single Transfer Rate, dual I/O: 2 bits/clock on D0..D1
    DualStr,
    /// Double Transfer Rate, dual I/O - not implemented
    DualDtr,
    /// Single Transfer Rate, quad I/O: 4 bits/clock on D0..D3
    QuadStr,
    /// Double Transfer Rate, quad I/O - not implemented
    QuadDtr,
}

impl ProtocolMode {
    /// Number of data lines driven per clock in this mode
    pub const fn lane_count(self) -> Result<u8> {
        match self {
            Self::Str => Ok(1),
            Self::DualStr => Ok(2),
            Self::QuadStr => Ok(4),
            Self::Dtr | Self::DualDtr | Self::QuadDtr => Err(Error::ProtocolNotSupported),
        }
    }

    /// Whether this mode uses more than one data line
    pub const fn is_str(self) -> bool {
        matches!(self, Self::Str)
    }
}
