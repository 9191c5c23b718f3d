use crate::cpu::decode::Target8;
use crate::cpu::{Bus, Cpu, Reg16};

impl Cpu {
    pub(super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, target: Target8) -> u32 {
        let value = self.read_target8(bus, target);
        let result = self.alu_inc8(value);
        self.write_target8(bus, target, result);
        0
    }

    pub(super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, target: Target8) -> u32 {
        let value = self.read_target8(bus, target);
        let result = self.alu_dec8(value);
        self.write_target8(bus, target, result);
        0
    }

    /// INC rr: 16-bit increment, no flags.
    pub(super) fn exec_inc16(&mut self, rr: Reg16) -> u32 {
        let value = self.regs.read16(rr).wrapping_add(1);
        self.regs.write16(rr, value);
        0
    }

    /// DEC rr: 16-bit decrement, no flags.
    pub(super) fn exec_dec16(&mut self, rr: Reg16) -> u32 {
        let value = self.regs.read16(rr).wrapping_sub(1);
        self.regs.write16(rr, value);
        0
    }
}
