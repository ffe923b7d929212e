//! Bit-banged SPI NOR flash engine

pub mod ctrl;
pub mod driver;
pub mod opcodes;
pub mod protocol;

pub use driver::SpiFlashDriver;
pub use protocol::ProtocolMode;
