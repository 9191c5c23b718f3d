use crate::cpu::decode::Cond;
use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    #[inline]
    fn cond_met(&self, cc: Cond) -> bool {
        match cc {
            Cond::Nz => !self.get_flag(Flag::Z),
            Cond::Z => self.get_flag(Flag::Z),
            Cond::Nc => !self.get_flag(Flag::C),
            Cond::C => self.get_flag(Flag::C),
        }
    }

    pub(super) fn exec_jp_a16<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        self.regs.pc = addr;
        0
    }

    /// JP cc,a16: +4 T-cycles when taken.
    pub(super) fn exec_jp_cc<B: Bus>(&mut self, bus: &mut B, cc: Cond) -> u32 {
        let addr = self.fetch16(bus);
        if self.cond_met(cc) {
            self.regs.pc = addr;
            4
        } else {
            0
        }
    }

    pub(super) fn exec_jp_hl(&mut self) -> u32 {
        self.regs.pc = self.regs.hl();
        0
    }

    /// JR r8: the signed displacement is relative to the address after the
    /// operand, so it is applied to the already-advanced PC.
    pub(super) fn exec_jr_e<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let offset = self.fetch8(bus) as i8;
        self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
        0
    }

    /// JR cc,r8: +4 T-cycles when taken.
    pub(super) fn exec_jr_cc<B: Bus>(&mut self, bus: &mut B, cc: Cond) -> u32 {
        let offset = self.fetch8(bus) as i8;
        if self.cond_met(cc) {
            self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
            4
        } else {
            0
        }
    }

    /// CALL cc,a16: +12 T-cycles when taken.
    pub(super) fn exec_call_cc<B: Bus>(&mut self, bus: &mut B, cc: Cond) -> u32 {
        let addr = self.fetch16(bus);
        if self.cond_met(cc) {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = addr;
            12
        } else {
            0
        }
    }

    /// RET cc: +12 T-cycles when taken.
    pub(super) fn exec_ret_cc<B: Bus>(&mut self, bus: &mut B, cc: Cond) -> u32 {
        if self.cond_met(cc) {
            let addr = self.pop_u16(bus);
            self.regs.pc = addr;
            12
        } else {
            0
        }
    }
}
