//! The memory control unit: routes physical addresses to ROM or RAM.

use crate::error::MemoryError;

use super::ram::{Ram, RAM_SIZE};
use super::rom::{Rom, ROM_SIZE};

const ROM_BASE: u32 = 0x0000_0000;
const RAM_BASE: u32 = 0x8000_0000;

/// Sits in front of [`Rom`] and [`Ram`], dispatching `read`/`write` by
/// physical address. An access whose `[addr, addr+len)` range does not
/// fit entirely inside one region, including straddling the boundary
/// between the two, is an access fault.
#[derive(Clone, Default)]
pub struct Mcu {
    pub rom: Rom,
    pub ram: Ram,
}

/// A region's base address and size, used to check whether an access
/// fits entirely within it.
struct Span {
    base: u32,
    size: u32,
}

impl Span {
    /// `None` if `addr` isn't in this span at all. `Some(Ok(offset))`
    /// if the whole `[addr, addr+len)` access fits. `Some(Err(()))` if
    /// `addr` is in this span but the access runs past its end
    /// (straddles a region boundary).
    fn offset_for(&self, addr: u32, len: u32) -> Option<Result<u32, ()>> {
        if addr < self.base || addr >= self.base + self.size {
            return None;
        }
        let offset = addr - self.base;
        if u64::from(offset) + u64::from(len) <= u64::from(self.size) {
            Some(Ok(offset))
        } else {
            Some(Err(()))
        }
    }
}

impl Mcu {
    pub fn new() -> Self {
        Self::default()
    }

    fn rom_span(&self) -> Span {
        Span { base: ROM_BASE, size: ROM_SIZE as u32 }
    }

    fn ram_span(&self) -> Span {
        Span { base: RAM_BASE, size: RAM_SIZE as u32 }
    }

    /// Read `len` (1, 2, or 4) little-endian bytes at physical address
    /// `addr`.
    pub fn read(&self, addr: u32, len: u32) -> Result<u32, MemoryError> {
        if let Some(result) = self.rom_span().offset_for(addr, len) {
            return match result {
                Ok(offset) => Ok(self.rom.read(offset, len)),
                Err(()) => Err(MemoryError::AccessFault { addr, len }),
            };
        }
        if let Some(result) = self.ram_span().offset_for(addr, len) {
            return match result {
                Ok(offset) => Ok(self.ram.read(offset, len)),
                Err(()) => Err(MemoryError::AccessFault { addr, len }),
            };
        }
        Err(MemoryError::AccessFault { addr, len })
    }

    /// Write the low `8*len` bits of `value` at physical address
    /// `addr`. Any access to ROM, even a valid in-range one, fails
    /// with a write-protect fault.
    pub fn write(&mut self, addr: u32, value: u32, len: u32) -> Result<(), MemoryError> {
        if self.rom_span().offset_for(addr, len).is_some() {
            return Err(MemoryError::WriteProtect { addr, len });
        }
        if let Some(result) = self.ram_span().offset_for(addr, len) {
            return match result {
                Ok(offset) => {
                    self.ram.write(offset, value, len);
                    Ok(())
                }
                Err(()) => Err(MemoryError::AccessFault { addr, len }),
            };
        }
        Err(MemoryError::AccessFault { addr, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_route_to_rom() {
        let mut mcu = Mcu::new();
        mcu.rom.load(&[0xEF, 0xBE, 0xAD, 0xDE]).unwrap();
        assert_eq!(mcu.read(0, 4).unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn reads_and_writes_route_to_ram() {
        let mut mcu = Mcu::new();
        mcu.write(RAM_BASE + 0x10, 0xDEAD_BEEF, 4).unwrap();
        assert_eq!(mcu.read(RAM_BASE + 0x10, 4).unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn writes_to_rom_are_write_protect_faults() {
        let mut mcu = Mcu::new();
        let result = mcu.write(0, 1, 1);
        assert_eq!(
            result,
            Err(MemoryError::WriteProtect { addr: 0, len: 1 })
        );
    }

    #[test]
    fn address_between_regions_is_an_access_fault() {
        let mcu = Mcu::new();
        let gap_addr = ROM_BASE + ROM_SIZE as u32; // just past ROM, before RAM
        assert_eq!(
            mcu.read(gap_addr, 4),
            Err(MemoryError::AccessFault { addr: gap_addr, len: 4 })
        );
    }

    #[test]
    fn straddling_the_top_of_rom_is_an_access_fault() {
        let mcu = Mcu::new();
        let addr = ROM_SIZE as u32 - 2;
        assert_eq!(
            mcu.read(addr, 4),
            Err(MemoryError::AccessFault { addr, len: 4 })
        );
    }

    #[test]
    fn straddling_the_top_of_ram_is_an_access_fault() {
        let mcu = Mcu::new();
        let addr = RAM_BASE + RAM_SIZE as u32 - 2;
        assert_eq!(
            mcu.read(addr, 4),
            Err(MemoryError::AccessFault { addr, len: 4 })
        );
    }

    #[test]
    fn misaligned_but_in_region_access_is_allowed() {
        let mut mcu = Mcu::new();
        mcu.write(RAM_BASE + 1, 0x0102_0304, 4).unwrap();
        assert_eq!(mcu.read(RAM_BASE + 1, 4).unwrap(), 0x0102_0304);
    }
}
