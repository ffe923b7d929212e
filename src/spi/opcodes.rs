//! SPI NOR flash command opcodes
//!
//! The full JEDEC-ish opcode set this driver's target parts expose,
//! covering every read/program addressing width (3B/4B), line width
//! (standard/dual/quad), and clock edge discipline (STR/DTR) those parts
//! publish. Only a subset is ever issued by [`super::driver::SpiFlashDriver`]
//! (see its read / program / erase flows, all STR); the rest are kept here
//! so a caller wiring up a new operation (dual/quad variants, DTR, OTP,
//! lock bits, password unlock) is not starting from zero.

// ============================================================================
// Reset / identification
// ============================================================================

/// Reset Enable
pub const RESET_ENABLE: u8 = 0x66;
/// Reset Memory
pub const RESET_MEMORY: u8 = 0x99;
/// Read JEDEC ID (manufacturer + memory type + capacity)
pub const READ_ID: u8 = 0x9F;

// ============================================================================
// Read - 3-byte address
// ============================================================================

/// Read (up to ~33 MHz, no dummy cycles)
pub const READ: u8 = 0x03;
/// Fast Read (single I/O, with dummy cycle)
pub const FAST_READ: u8 = 0x0B;
/// Fast Read Dual Output
pub const FAST_READ_DUAL_OUT: u8 = 0x3B;
/// Fast Read Dual I/O (1-2-2)
pub const FAST_READ_DUAL_IO: u8 = 0xBB;
/// Fast Read Quad Output
pub const FAST_READ_QUAD_OUT: u8 = 0x6B;
/// Fast Read Quad I/O (1-4-4)
pub const FAST_READ_QUAD_IO: u8 = 0xEB;
/// DTR Fast Read (single I/O)
pub const DTR_FAST_READ: u8 = 0x0D;
/// DTR Fast Read Dual Output
pub const DTR_FAST_READ_DUAL_OUT: u8 = 0x3D;
/// DTR Fast Read Dual I/O
pub const DTR_FAST_READ_DUAL_IO: u8 = 0xBD;
/// DTR Fast Read Quad Output
pub const DTR_FAST_READ_QUAD_OUT: u8 = 0x6D;
/// DTR Fast Read Quad I/O
pub const DTR_FAST_READ_QUAD_IO: u8 = 0xED;

// ============================================================================
// Read - 4-byte address
// ============================================================================

/// Read with 4-byte address
pub const READ_4B: u8 = 0x13;
/// Fast Read with 4-byte address
pub const FAST_READ_4B: u8 = 0x0C;
/// Fast Read Dual Output with 4-byte address
pub const FAST_READ_DUAL_OUT_4B: u8 = 0x3C;
/// Fast Read Dual I/O with 4-byte address
pub const FAST_READ_DUAL_IO_4B: u8 = 0xBC;
/// Fast Read Quad Output with 4-byte address
pub const FAST_READ_QUAD_OUT_4B: u8 = 0x6C;
/// Fast Read Quad I/O with 4-byte address
pub const FAST_READ_QUAD_IO_4B: u8 = 0xEC;
/// DTR Fast Read with 4-byte address
pub const DTR_FAST_READ_4B: u8 = 0x0E;
/// DTR Fast Read Dual I/O with 4-byte address
pub const DTR_FAST_READ_DUAL_IO_4B: u8 = 0xBE;
/// DTR Fast Read Quad I/O with 4-byte address
pub const DTR_FAST_READ_QUAD_IO_4B: u8 = 0xEE;

// ============================================================================
// Write control / status
// ============================================================================

/// Write Enable - required before any write/erase operation
pub const WRITE_ENABLE: u8 = 0x06;
/// Write Disable - clears the WEL bit
pub const WRITE_DISABLE: u8 = 0x04;
/// Read Status Register
pub const READ_STATUS_REG: u8 = 0x05;
/// Write Status Register
pub const WRITE_STATUS_REG: u8 = 0x01;
/// Read Flag Status Register (Micron)
pub const READ_FLAG_STATUS_REG: u8 = 0x70;
/// Clear Flag Status Register (Micron)
pub const CLEAR_FLAG_STATUS_REG: u8 = 0x50;

// ============================================================================
// Config registers (Micron)
// ============================================================================

/// Read Nonvolatile Configuration Register
pub const READ_NV_CONFIG_REG: u8 = 0xB5;
/// Write Nonvolatile Configuration Register
pub const WRITE_NV_CONFIG_REG: u8 = 0xB1;
/// Read Volatile Configuration Register
pub const READ_V_CONFIG_REG: u8 = 0x85;
/// Write Volatile Configuration Register
pub const WRITE_V_CONFIG_REG: u8 = 0x81;
/// Read Enhanced Volatile Configuration Register
pub const READ_EV_CONFIG_REG: u8 = 0x65;
/// Write Enhanced Volatile Configuration Register
pub const WRITE_EV_CONFIG_REG: u8 = 0x61;

// ============================================================================
// Extended address register (bank select for >16 MiB parts)
// ============================================================================

/// Read Extended Address Register
pub const READ_EXT_ADDR_REG: u8 = 0xC8;
/// Write Extended Address Register
pub const WRITE_EXT_ADDR_REG: u8 = 0xC5;

// ============================================================================
// Program
// ============================================================================

/// Page Program (3-byte address)
pub const PAGE_PROGRAM: u8 = 0x02;
/// Page Program Dual Input (3-byte address)
pub const PAGE_PROGRAM_DUAL_IN: u8 = 0xA2;
/// Page Program Dual Input, extended addressing variant (3-byte address)
pub const PAGE_PROGRAM_DUAL_IN_EXT: u8 = 0xD2;
/// Quad Page Program (3-byte address)
pub const PAGE_PROGRAM_QUAD_IN: u8 = 0x32;
/// Quad Page Program, extended addressing variant (3-byte address)
pub const PAGE_PROGRAM_QUAD_IN_EXT: u8 = 0x38;
/// Page Program with 4-byte address
pub const PAGE_PROGRAM_4B: u8 = 0x12;
/// Quad Page Program with 4-byte address
pub const PAGE_PROGRAM_QUAD_IN_4B: u8 = 0x34;
/// Quad Page Program, extended addressing variant, with 4-byte address
pub const PAGE_PROGRAM_QUAD_IN_EXT_4B: u8 = 0x3E;

// ============================================================================
// Erase
// ============================================================================

/// 32 KiB Subsector Erase (3-byte address)
pub const SUBSECTOR_ERASE_32KB: u8 = 0x52;
/// 4 KiB Subsector Erase (3-byte address)
pub const SUBSECTOR_ERASE_4KB: u8 = 0x20;
/// 64 KiB Sector Erase (3-byte address)
pub const SECTOR_ERASE: u8 = 0xD8;
/// Bulk (chip) Erase
pub const BULK_ERASE: u8 = 0xC7;
/// 4 KiB Subsector Erase with 4-byte address
pub const SUBSECTOR_ERASE_4KB_4B: u8 = 0x21;
/// 64 KiB Sector Erase with 4-byte address
pub const SECTOR_ERASE_4B: u8 = 0xDC;

// ============================================================================
// 4-byte address mode control
// ============================================================================

/// Enter 4-Byte Address Mode
pub const ENTER_4B_ADDR_MODE: u8 = 0xB7;
/// Exit 4-Byte Address Mode
pub const EXIT_4B_ADDR_MODE: u8 = 0xE9;

// ============================================================================
// Quad I/O mode control, deep power-down
// ============================================================================

/// Enter Quad I/O Mode
pub const ENTER_QUAD_IO_MODE: u8 = 0x35;
/// Exit Quad I/O Mode
pub const EXIT_QUAD_IO_MODE: u8 = 0xF5;
/// Enter Deep Power-Down
pub const ENTER_DEEP_POWER_DOWN: u8 = 0xB9;
/// Exit (Release from) Deep Power-Down
pub const EXIT_DEEP_POWER_DOWN: u8 = 0xAB;

// ============================================================================
// Suspend / resume
// ============================================================================

/// Program/Erase Suspend
pub const PROGRAM_SUSPEND: u8 = 0x75;
/// Program/Erase Resume
pub const PROGRAM_RESUME: u8 = 0x7A;

// ============================================================================
// OTP
// ============================================================================

/// Read OTP Array
pub const READ_OTP_ARRAY: u8 = 0x4B;
/// Program OTP Array
pub const PROGRAM_OTP_ARRAY: u8 = 0x42;

// ============================================================================
// Lock bits / sector protection / password
// ============================================================================

/// Read Sector Protection Register
pub const READ_SECTOR_PROTECTION: u8 = 0x2D;
/// Program Sector Protection Register
pub const PROGRAM_SECTOR_PROTECTION: u8 = 0x2C;
/// Read Volatile Lock Bits
pub const READ_V_LOCK_BITS: u8 = 0xE8;
/// Write Volatile Lock Bits
pub const WRITE_V_LOCK_BITS: u8 = 0xE5;
/// Read Volatile Lock Bits with 4-byte address
pub const READ_V_LOCK_BITS_4B: u8 = 0xE0;
/// Write Volatile Lock Bits with 4-byte address
pub const WRITE_V_LOCK_BITS_4B: u8 = 0xE1;
/// Read Nonvolatile Lock Bits
pub const READ_NV_LOCK_BITS: u8 = 0xE2;
/// Program Nonvolatile Lock Bits
pub const PROGRAM_NV_LOCK_BITS: u8 = 0xE3;
/// Erase Nonvolatile Lock Bits
pub const ERASE_NV_LOCK_BITS: u8 = 0xE4;
/// Read Global Freeze Bit
pub const READ_GLOBAL_FREEZE_BIT: u8 = 0xA7;
/// Write Global Freeze Bit
pub const WRITE_GLOBAL_FREEZE_BIT: u8 = 0xA6;
/// Read Password
pub const READ_PASSWORD: u8 = 0x27;
/// Write Password
pub const WRITE_PASSWORD: u8 = 0x28;
/// Unlock Password
pub const UNLOCK_PASSWORD: u8 = 0x29;

// ============================================================================
// Status register bit definitions
// ============================================================================

/// Status Register: Write In Progress
pub const SR_WIP: u8 = 0x01;
/// Status Register: Write Enable Latch
pub const SR_WEL: u8 = 0x02;

/// Macronix-specific opcodes, disjoint from the common JEDEC set above
///
/// Several of these reuse opcode values from the JEDEC lock-bit set above
/// under a different name and meaning (e.g. `WRLR`/`RDLR` vs.
/// `PROGRAM_SECTOR_PROTECTION`/`READ_SECTOR_PROTECTION`); that overlap is
/// real, not a typo - Macronix parts interpret those bytes as lock-register
/// access rather than generic sector protection.
pub mod mxic {
    /// Read Configuration Register
    pub const READ_CR: u8 = 0x15;
    /// Read Security Register
    pub const READ_SECURITY_REG: u8 = 0x2B;
    /// Write Security Register
    pub const WRITE_SECURITY_REG: u8 = 0x2F;
    /// Gang Block Lock (lock entire chip)
    pub const GANG_BLOCK_LOCK: u8 = 0x7E;
    /// Gang Block Unlock (unlock entire chip)
    pub const GANG_BLOCK_UNLOCK: u8 = 0x98;
    /// Write Lock Register
    pub const WRLR: u8 = 0x2C;
    /// Read Lock Register
    pub const RDLR: u8 = 0x2D;
    /// Write Security Protect Bit register
    pub const WRSPB: u8 = 0xE3;
    /// Erase Security Protect Bit register
    pub const ESSPB: u8 = 0xE4;
    /// Read Security Protect Bit register
    pub const RDSPB: u8 = 0xE2;
    /// Write Dynamic Protect Bit register
    pub const WRDPB: u8 = 0xE1;
    /// Read Dynamic Protect Bit register
    pub const RDDPB: u8 = 0xE0;
}
