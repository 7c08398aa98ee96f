//! The CPU driver: wires decode to execute and exposes [`Cpu::step`].

use crate::decode::decode;
use crate::error::{Fault, MemoryError, RegisterError};
use crate::exec;
use crate::memory::Mcu;
use crate::pc::ProgramCounter;
use crate::registers::RegisterFile;

/// One RV32I hardware thread: 32 registers, a program counter, and a
/// memory control unit in front of ROM and RAM.
///
/// `step()` advances by exactly one instruction. On success,
/// architectural state (registers, PC, memory) reflects having
/// executed that one instruction. On [`Fault`], state changes that
/// logically precede the fault are retained; the host decides whether
/// to resume, reset, or halt.
#[derive(Clone, Default)]
pub struct Cpu {
    pub(crate) registers: RegisterFile,
    pub(crate) pc: ProgramCounter,
    pub(crate) mcu: Mcu,
}

impl Cpu {
    /// A fresh CPU: all registers, PC, and memory zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh CPU with non-zero registers and RAM filled with
    /// pseudo-random bytes derived from `seed`. ROM and the PC are
    /// still zero; `x0` still reads zero. Useful for shaking out
    /// guest programs that depend on uninitialized state.
    pub fn new_randomized(seed: u64) -> Self {
        Self {
            registers: RegisterFile::new_randomized(seed),
            pc: ProgramCounter::default(),
            mcu: Mcu {
                rom: Default::default(),
                ram: crate::memory::Ram::new_randomized(seed),
            },
        }
    }

    /// Copy `image` into ROM starting at its base address. Excess ROM
    /// capacity is zero-filled. Fails if `image` is larger than ROM.
    pub fn load_rom(&mut self, image: &[u8]) -> Result<(), crate::memory::rom::ImageTooLarge> {
        self.mcu.rom.load(image)
    }

    pub fn pc(&self) -> u32 {
        self.pc.get()
    }

    pub fn set_pc(&mut self, value: u32) {
        self.pc.set(value);
    }

    pub fn read_reg(&self, index: u8) -> Result<u32, RegisterError> {
        self.registers.read(index)
    }

    pub fn write_reg(&mut self, index: u8, value: u32) -> Result<(), RegisterError> {
        self.registers.write(index, value)
    }

    pub fn mem_read(&self, addr: u32, len: u32) -> Result<u32, MemoryError> {
        self.mcu.read(addr, len)
    }

    pub fn mem_write(&mut self, addr: u32, value: u32, len: u32) -> Result<(), MemoryError> {
        self.mcu.write(addr, value, len)
    }

    /// Execute exactly one instruction: fetch the word at `pc` from
    /// ROM (via the MCU so an invalid `pc` still reports a normal
    /// access fault rather than panicking), decode it, execute it,
    /// and, unless the instruction itself assigned the PC (a taken
    /// branch, `jal`, or `jalr`), advance `pc` by 4.
    pub fn step(&mut self) -> Result<(), Fault> {
        let pc = self.pc.get();
        let word = self.mcu.read(pc, 4)?;
        let instr = decode(word).map_err(|e| Fault::IllegalInstruction { word: e.word, pc })?;
        exec::execute(self, instr, pc)
    }
}
