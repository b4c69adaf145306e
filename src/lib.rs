//! A cycle-counted functional interpreter for the MOS 6502: flat 64 KiB
//! memory, the architectural register file, and the documented subset of
//! load/store/logical/stack/control-transfer opcodes, each billed to the
//! cycle against the real part's timing.
//!
//! The crate performs no I/O. Callers populate `Cpu::memory` (including
//! the reset vector at `0xFFFC`/`0xFFFD`) directly, then drive execution
//! with `reset()` and `execute(n)`.

mod constants;
mod cpu;
mod memory;
mod opcodes;

pub use cpu::{Cpu, StatusFlag};
pub use memory::Memory;
pub use opcodes::{Mode, OpCode};
