//! Error types for the FPGA register/flash engine

use thiserror::Error;

/// Errors returned by this crate's register and flash operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Null/invalid handle, or an operation unsupported by a transport
    #[error("config error: {0}")]
    ConfigError(&'static str),

    /// Offset (plus access width) falls outside the register window's size
    #[error("register access out of bounds")]
    BoundsError,

    /// Dead bus, unknown/malformed vendor ID, or WEL not set after WREN
    #[error("hardware error: {0}")]
    HardwareError(&'static str),

    /// Misaligned program/erase address or length
    #[error("invalid request: {0}")]
    RequestError(&'static str),

    /// Register-block chain forms a loop
    #[error("register block chain forms a loop")]
    StructureError,

    /// A DTR protocol variant was requested; this core does not implement one
    #[error("protocol not supported")]
    ProtocolNotSupported,

    /// Opcode/operation not implemented by the active driver (e.g. the BPI stub)
    #[error("opcode not supported by this driver")]
    OpcodeNotSupported,
}

/// Result type alias using this crate's [`Error`]
pub type Result<T> = core::result::Result<T, Error>;
