//! Read-only code storage: 64 KiB, byte-addressable.

use super::read_le;

pub const ROM_SIZE: usize = 0x0001_0000;

/// Read-only program storage. There is no public `write`: the only way
/// to put bytes into ROM is [`Rom::load`], which is meant to be called
/// once before execution starts (see [`crate::loader`]). Attempting a
/// store to this region at runtime is rejected by the memory control
/// unit before it ever reaches here.
#[derive(Clone)]
pub struct Rom {
    data: Box<[u8; ROM_SIZE]>,
}

impl Default for Rom {
    fn default() -> Self {
        Self {
            data: Box::new([0u8; ROM_SIZE]),
        }
    }
}

impl Rom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `image` into the start of ROM. Any capacity beyond
    /// `image.len()` is left (or reset to) zero. `image` must not
    /// exceed [`ROM_SIZE`] bytes.
    pub fn load(&mut self, image: &[u8]) -> Result<(), ImageTooLarge> {
        if image.len() > ROM_SIZE {
            return Err(ImageTooLarge {
                len: image.len(),
                capacity: ROM_SIZE,
            });
        }
        self.data.fill(0);
        self.data[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Read `len` (1, 2, or 4) little-endian bytes starting at the
    /// local offset `offset`. `offset + len` must be `<= ROM_SIZE`;
    /// the memory control unit is responsible for enforcing this
    /// before calling in.
    pub fn read(&self, offset: u32, len: u32) -> u32 {
        debug_assert!((offset as usize) + (len as usize) <= ROM_SIZE);
        read_le(self.data.as_ref(), offset as usize, len as usize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("program image of {len} bytes does not fit in {capacity}-byte ROM")]
pub struct ImageTooLarge {
    pub len: usize,
    pub capacity: usize,
}
