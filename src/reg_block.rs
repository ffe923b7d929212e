//! Register-block enumerator
//!
//! Walks a self-describing chain of `(type, version, next_offset)` headers
//! embedded in a register window, discovering the sub-windows ("register
//! blocks") behind each header. This is used once at setup to locate the
//! flash control register block within a larger FPGA register window;
//! thereafter the flash driver holds a view into that one block.

use crate::error::{Error, Result};
use crate::reg_if::{OffsetRegisters, RegisterInterface};

/// One entry in an enumerated register-block chain
pub struct RegBlock<'a> {
    /// Block type identifier
    pub block_type: u32,
    /// Block version
    pub version: u32,
    /// Absolute offset of this block's header within `regs`
    pub offset: usize,
    /// Child view bounded to this block's remaining space
    pub view: OffsetRegisters<'a>,
}

/// Walk the register-block chain starting at `offset` within `regs`
///
/// `base` is the absolute offset at which the block chain starts in the
/// transport's coordinate space; `size` bounds the walk. Terminates
/// normally when `next_offset == 0` is read after at least one block, or
/// when `offset >= size`. Returns [`Error::StructureError`] if the chain
/// revisits a previously-seen absolute offset (a loop).
pub fn enumerate<'a>(
    regs: &'a dyn RegisterInterface,
    base: usize,
    mut offset: usize,
    size: usize,
) -> Result<Vec<RegBlock<'a>>> {
    let mut blocks = Vec::new();

    loop {
        if (offset == 0 && !blocks.is_empty()) || offset >= size {
            break;
        }

        let ptr = base + offset;

        if blocks.iter().any(|b: &RegBlock<'_>| b.offset == ptr) {
            log::error!("register block chain revisits offset {ptr:#x}, forming a loop");
            return Err(Error::StructureError);
        }

        let block_type = regs.read32(ptr)?;
        let version = regs.read32(ptr + 0x04)?;
        let next = regs.read32(ptr + 0x08)? as usize;

        let view = OffsetRegisters::new(regs, ptr, size - offset)
            .ok_or(Error::ConfigError("register block view out of bounds"))?;

        blocks.push(RegBlock {
            block_type,
            version,
            offset: ptr,
            view,
        });

        offset = next;
    }

    Ok(blocks)
}

/// Find the `index`-th (0-based) block matching `block_type` and `version`
///
/// `version == 0` acts as a wildcard, matching any version.
pub fn find<'a, 'b>(
    list: &'b [RegBlock<'a>],
    block_type: u32,
    version: u32,
    mut index: usize,
) -> Option<&'b RegBlock<'a>> {
    for block in list {
        if block.block_type == block_type && (version == 0 || block.version == version) {
            if index == 0 {
                return Some(block);
            }
            index -= 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg_if::RawRegisters;

    /// Write a block header (`type`, `version`, `next`) at `ptr`
    fn write_header(regs: &dyn RegisterInterface, ptr: usize, ty: u32, version: u32, next: u32) {
        regs.write32(ptr, ty).unwrap();
        regs.write32(ptr + 0x04, version).unwrap();
        regs.write32(ptr + 0x08, next).unwrap();
    }

    #[test]
    fn walks_chain_to_terminator() {
        let mut backing = [0u8; 0x100];
        let regs = unsafe { RawRegisters::new(backing.as_mut_ptr(), backing.len()) };

        write_header(&regs, 0x00, 0x1111, 1, 0x20);
        write_header(&regs, 0x20, 0x2222, 1, 0x40);
        write_header(&regs, 0x40, 0x3333, 1, 0); // terminator

        let blocks = enumerate(&regs, 0, 0, backing.len()).unwrap();

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].block_type, 0x1111);
        assert_eq!(blocks[1].offset, 0x20);
        assert_eq!(blocks[2].block_type, 0x3333);
    }

    #[test]
    fn terminates_when_offset_reaches_size() {
        let mut backing = [0u8; 0x30];
        let regs = unsafe { RawRegisters::new(backing.as_mut_ptr(), backing.len()) };

        // next points past `size`, not to 0 - still terminates normally.
        write_header(&regs, 0x00, 0xaaaa, 1, 0x1000);

        let blocks = enumerate(&regs, 0, 0, backing.len()).unwrap();
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn detects_loop() {
        let mut backing = [0u8; 0x100];
        let regs = unsafe { RawRegisters::new(backing.as_mut_ptr(), backing.len()) };

        // A(next=B), B(next=A); start at a nonzero offset so the A<-B link
        // is a genuine revisit rather than the `next_offset == 0` terminator.
        write_header(&regs, 0x20, 0xaaaa, 1, 0x40);
        write_header(&regs, 0x40, 0xbbbb, 1, 0x20);

        let err = enumerate(&regs, 0, 0x20, backing.len()).unwrap_err();
        assert_eq!(err, Error::StructureError);
    }

    #[test]
    fn find_supports_wildcard_version_and_index() {
        let mut backing = [0u8; 0x100];
        let regs = unsafe { RawRegisters::new(backing.as_mut_ptr(), backing.len()) };

        write_header(&regs, 0x00, 0x10, 1, 0x20);
        write_header(&regs, 0x20, 0x10, 2, 0x40);
        write_header(&regs, 0x40, 0x20, 1, 0);

        let blocks = enumerate(&regs, 0, 0, backing.len()).unwrap();

        assert_eq!(find(&blocks, 0x10, 0, 0).unwrap().offset, 0x00);
        assert_eq!(find(&blocks, 0x10, 0, 1).unwrap().offset, 0x20);
        assert_eq!(find(&blocks, 0x10, 2, 0).unwrap().offset, 0x20);
        assert!(find(&blocks, 0x10, 2, 1).is_none());
        assert!(find(&blocks, 0x99, 0, 0).is_none());
    }
}
