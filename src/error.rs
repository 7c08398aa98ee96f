//! Error types surfaced by the register file, memory control unit,
//! decoder, and CPU driver.
//!
//! Each layer defines its own narrow error type; [`Fault`] is the
//! union returned by [`crate::cpu::Cpu::step`], composed from the
//! narrower types via `#[from]`.

use thiserror::Error;

/// Error from the register file's own bounds-checked API.
///
/// Never reachable through [`crate::cpu::Cpu::step`]: decoded register
/// indices are 5-bit fields and always fall in `0..32`. Only reachable
/// through [`crate::cpu::Cpu::read_reg`]/`write_reg` when a host passes
/// an out-of-range index directly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    #[error("register index {0} is out of range (must be 0..32)")]
    IndexOutOfRange(u8),
}

/// Error from a memory region or the memory control unit.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    #[error("access fault: address 0x{addr:08x} (len {len}) is outside any mapped region")]
    AccessFault { addr: u32, len: u32 },
    #[error("write-protect fault: address 0x{addr:08x} (len {len}) targets read-only memory")]
    WriteProtect { addr: u32, len: u32 },
}

/// Terminal condition raised by [`crate::cpu::Cpu::step`].
///
/// All variants are terminal for the step in which they occur; the
/// host decides whether to resume, reset, or halt. Architectural
/// state changes that logically precede the fault (e.g. the link
/// register write in a misaligned `jal`) are retained.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    #[error("illegal instruction 0x{word:08x} at pc 0x{pc:08x}")]
    IllegalInstruction { word: u32, pc: u32 },
    #[error("instruction address misaligned: target 0x{pc:08x} is not 4-byte aligned")]
    InstructionAddressMisaligned { pc: u32 },
    #[error("{0}")]
    Memory(#[from] MemoryError),
    #[error("environment call at pc 0x{pc:08x}")]
    EnvironmentCall { pc: u32 },
    #[error("breakpoint at pc 0x{pc:08x}")]
    Breakpoint { pc: u32 },
}
