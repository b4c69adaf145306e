//! Loads, stores, and the stack/register-transfer opcodes that move bytes
//! around without combining them.

use super::Cpu;
use crate::opcodes::Mode;

pub fn lda(cpu: &mut Cpu, mode: Mode) {
    let value = cpu.operand_for_read(mode);
    cpu.a = value;
    cpu.update_zero_and_negative(value);
}

pub fn ldx(cpu: &mut Cpu, mode: Mode) {
    let value = cpu.operand_for_read(mode);
    cpu.x = value;
    cpu.update_zero_and_negative(value);
}

pub fn ldy(cpu: &mut Cpu, mode: Mode) {
    let value = cpu.operand_for_read(mode);
    cpu.y = value;
    cpu.update_zero_and_negative(value);
}

pub fn sta(cpu: &mut Cpu, mode: Mode) {
    let addr = cpu.operand_addr_for_write(mode);
    cpu.write_u8(addr, cpu.a);
}

pub fn stx(cpu: &mut Cpu, mode: Mode) {
    let addr = cpu.operand_addr_for_write(mode);
    cpu.write_u8(addr, cpu.x);
}

pub fn sty(cpu: &mut Cpu, mode: Mode) {
    let addr = cpu.operand_addr_for_write(mode);
    cpu.write_u8(addr, cpu.y);
}

/// Dummy read (not advancing PC — see the module-level note below), then
/// push. 3 cycles total with the opcode fetch.
pub fn pha(cpu: &mut Cpu) {
    cpu.dummy_read_at_pc();
    cpu.push_u8(cpu.a);
}

/// The "unused" bit of the pushed byte is whatever happens to be set in
/// `P`, which this core never sets — so it reads back as 0, a deliberate
/// deviation from hardware (which always pushes it as 1).
pub fn php(cpu: &mut Cpu) {
    cpu.dummy_read_at_pc();
    cpu.push_u8(cpu.p);
}

/// Dummy read, bill the SP pre-increment, pull into A, set Z/N. 4 cycles.
pub fn pla(cpu: &mut Cpu) {
    cpu.dummy_read_at_pc();
    cpu.cycles += 1;
    let value = cpu.pull_u8();
    cpu.a = value;
    cpu.update_zero_and_negative(value);
}

/// Same stack discipline as `pla`, restoring the packed `P` byte verbatim.
pub fn plp(cpu: &mut Cpu) {
    cpu.dummy_read_at_pc();
    cpu.cycles += 1;
    cpu.p = cpu.pull_u8();
}

pub fn tsx(cpu: &mut Cpu) {
    cpu.dummy_read_at_pc();
    cpu.x = cpu.sp;
    cpu.update_zero_and_negative(cpu.x);
}

/// Flag-pure: SP takes whatever is in X, full stop. (One lineage of this
/// interpreter called `update_zero_and_negative` here; that is wrong — TXS
/// does not touch any flag on real hardware.)
pub fn txs(cpu: &mut Cpu) {
    cpu.dummy_read_at_pc();
    cpu.sp = cpu.x;
}

// The dummy reads above read `mem[PC]` and bill their cycle without
// advancing `PC` past it, unlike a literal port of the reference
// interpreter's `fetchByte()`-based dummy read (which does advance PC —
// a bug this core does not reproduce).
