//! Flat binary image loading into ROM.
//!
//! Images here are raw machine code with no header or relocation
//! table; ELF and other object-file formats are out of scope, see
//! `DESIGN.md` for why the `elf` dependency was dropped.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::cpu::Cpu;
use crate::memory::rom::ImageTooLarge;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read program image: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    TooLarge(#[from] ImageTooLarge),
}

/// Load a flat binary image from `bytes` into `cpu`'s ROM.
pub fn load_image(cpu: &mut Cpu, bytes: &[u8]) -> Result<(), ImageTooLarge> {
    cpu.load_rom(bytes)
}

/// Read `path` from disk and load it into `cpu`'s ROM.
pub fn load_file(cpu: &mut Cpu, path: impl AsRef<Path>) -> Result<(), LoadError> {
    let bytes = fs::read(path)?;
    load_image(cpu, &bytes)?;
    Ok(())
}
