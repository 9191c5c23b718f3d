use crate::cpu::decode::Target8;
use crate::cpu::{Bus, Cpu, Reg16};

impl Cpu {
    pub(super) fn exec_ld_r_r<B: Bus>(&mut self, bus: &mut B, dst: Target8, src: Target8) -> u32 {
        let value = self.read_target8(bus, src);
        self.write_target8(bus, dst, value);
        0
    }

    pub(super) fn exec_ld_r_d8<B: Bus>(&mut self, bus: &mut B, target: Target8) -> u32 {
        let value = self.fetch8(bus);
        self.write_target8(bus, target, value);
        0
    }

    pub(super) fn exec_ld_a_from_bc<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.regs.a = bus.read8(self.regs.bc());
        0
    }

    pub(super) fn exec_ld_a_from_de<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.regs.a = bus.read8(self.regs.de());
        0
    }

    pub(super) fn exec_ld_a_to_bc<B: Bus>(&mut self, bus: &mut B) -> u32 {
        bus.write8(self.regs.bc(), self.regs.a);
        0
    }

    pub(super) fn exec_ld_a_to_de<B: Bus>(&mut self, bus: &mut B) -> u32 {
        bus.write8(self.regs.de(), self.regs.a);
        0
    }

    pub(super) fn exec_ld_a_from_a16<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        self.regs.a = bus.read8(addr);
        0
    }

    pub(super) fn exec_ld_a_to_a16<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        bus.write8(addr, self.regs.a);
        0
    }

    /// LDH A,(a8): read from the high page 0xFF00 + imm8 into A.
    pub(super) fn exec_ldh_a_from_a8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let offset = self.fetch8(bus) as u16;
        self.regs.a = bus.read8(0xFF00u16.wrapping_add(offset));
        0
    }

    /// LDH (a8),A: write A to the high page 0xFF00 + imm8.
    pub(super) fn exec_ldh_a_to_a8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let offset = self.fetch8(bus) as u16;
        bus.write8(0xFF00u16.wrapping_add(offset), self.regs.a);
        0
    }

    pub(super) fn exec_ldh_a_from_c<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = 0xFF00u16.wrapping_add(self.regs.c as u16);
        self.regs.a = bus.read8(addr);
        0
    }

    pub(super) fn exec_ldh_a_to_c<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = 0xFF00u16.wrapping_add(self.regs.c as u16);
        bus.write8(addr, self.regs.a);
        0
    }

    /// LD A,(HL+): a single byte read, then HL post-increments.
    pub(super) fn exec_ld_a_from_hl_inc<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.regs.hl();
        self.regs.a = bus.read8(addr);
        self.regs.set_hl(addr.wrapping_add(1));
        0
    }

    pub(super) fn exec_ld_a_from_hl_dec<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.regs.hl();
        self.regs.a = bus.read8(addr);
        self.regs.set_hl(addr.wrapping_sub(1));
        0
    }

    /// LD (HL+),A: a single byte store, then HL post-increments.
    pub(super) fn exec_ld_a_to_hl_inc<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.regs.hl();
        bus.write8(addr, self.regs.a);
        self.regs.set_hl(addr.wrapping_add(1));
        0
    }

    pub(super) fn exec_ld_a_to_hl_dec<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.regs.hl();
        bus.write8(addr, self.regs.a);
        self.regs.set_hl(addr.wrapping_sub(1));
        0
    }

    pub(super) fn exec_ld_rr_d16<B: Bus>(&mut self, bus: &mut B, rr: Reg16) -> u32 {
        let value = self.fetch16(bus);
        self.regs.write16(rr, value);
        0
    }

    pub(super) fn exec_ld_sp_hl(&mut self) -> u32 {
        self.regs.sp = self.regs.hl();
        0
    }

    /// LD (a16),SP: 16-bit little-endian store of the stack pointer.
    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        bus.write16(addr, self.regs.sp);
        0
    }

    /// LD HL,SP+r8: signed offset add into HL, flags from the low byte.
    pub(super) fn exec_ld_hl_sp_e<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let imm = self.fetch8(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        0
    }
}
