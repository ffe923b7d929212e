//! rflasher-fpga-reg - NOR flash engine for FPGA register-window transports
//!
//! This crate drives NOR flash chips that sit behind a memory-mapped
//! register window exposed by an FPGA design, rather than behind a
//! dedicated SPI/parallel bus controller. A single bit-banged control
//! register stands in for the SPI master; a self-describing chain of
//! register-block headers lets a caller locate that control register
//! inside a larger register window without hardcoding its offset.
//!
//! # Example
//!
//! ```ignore
//! use rflasher_fpga_reg::{flash::FlashDevice, reg_if::RawRegisters};
//!
//! let regs = unsafe { RawRegisters::new(base_ptr, window_len) };
//! let dev = FlashDevice::open_spi(1, &regs, ctrl_reg_offset)?;
//! let mut buf = [0u8; 256];
//! dev.read(0, &mut buf)?;
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod bpi;
pub mod error;
pub mod flash;
pub mod reg_block;
pub mod reg_if;
pub mod spi;

pub use error::{Error, Result};
pub use flash::FlashDevice;
