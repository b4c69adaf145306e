//! Shared assertion helpers for the opcode test suites, in the same
//! diagnostic style as this lineage's assembler error reporting: build a
//! readable message, then panic with it.

use colored::*;

use super::{Cpu, StatusFlag};

pub fn assert_register_a(cpu: &Cpu, expected: u8) {
    assert_register(cpu, "A", cpu.a, expected);
}

pub fn assert_register_x(cpu: &Cpu, expected: u8) {
    assert_register(cpu, "X", cpu.x, expected);
}

pub fn assert_register_y(cpu: &Cpu, expected: u8) {
    assert_register(cpu, "Y", cpu.y, expected);
}

fn assert_register(cpu: &Cpu, name: &str, actual: u8, expected: u8) {
    if actual != expected {
        panic!(
            "{}",
            format!(
                "register {} mismatch: expected {:#04X}, got {:#04X} (PC={:#06X}, cycles={})",
                name, expected, actual, cpu.pc, cpu.cycles
            )
            .bright_red()
        );
    }
}

/// Checks every flag bit individually so a failure names the specific flag
/// that's wrong rather than printing two opaque packed bytes.
pub fn assert_status(cpu: &Cpu, expected: &[(StatusFlag, bool)]) {
    let mut mismatches = Vec::new();
    for &(flag, expected_value) in expected {
        let actual_value = cpu.get_flag(flag);
        if actual_value != expected_value {
            mismatches.push(format!(
                "{:?}: expected {}, got {}",
                flag, expected_value, actual_value
            ));
        }
    }
    if !mismatches.is_empty() {
        panic!(
            "{}",
            format!(
                "status flag mismatch (P={:#010b}):\n  {}",
                cpu.p,
                mismatches.join("\n  ")
            )
            .bright_red()
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn assert_register_a_passes_on_match() {
        let mut cpu = Cpu::new();
        cpu.a = 0x42;
        assert_register_a(&cpu, 0x42);
    }

    #[test]
    #[should_panic]
    fn assert_register_a_panics_on_mismatch() {
        let mut cpu = Cpu::new();
        cpu.a = 0x42;
        assert_register_a(&cpu, 0x43);
    }

    #[test]
    fn assert_status_passes_when_every_listed_flag_matches() {
        let mut cpu = Cpu::new();
        cpu.set_flag(StatusFlag::Carry, true);
        cpu.set_flag(StatusFlag::Zero, false);
        assert_status(&cpu, &[(StatusFlag::Carry, true), (StatusFlag::Zero, false)]);
    }

    #[test]
    #[should_panic]
    fn assert_status_panics_when_a_flag_is_wrong() {
        let cpu = Cpu::new();
        assert_status(&cpu, &[(StatusFlag::Carry, true)]);
    }
}
