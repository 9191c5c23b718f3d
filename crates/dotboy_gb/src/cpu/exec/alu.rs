use crate::cpu::decode::{AluOp, RotOp, Target8};
use crate::cpu::{Bus, Cpu, Flag, Reg16};

impl Cpu {
    pub(super) fn exec_alu_reg<B: Bus>(&mut self, bus: &mut B, operator: AluOp, src: Target8) -> u32 {
        let value = self.read_target8(bus, src);
        self.alu8(operator, value);
        0
    }

    pub(super) fn exec_alu_d8<B: Bus>(&mut self, bus: &mut B, operator: AluOp) -> u32 {
        let value = self.fetch8(bus);
        self.alu8(operator, value);
        0
    }

    pub(super) fn exec_add_hl_rr(&mut self, rr: Reg16) -> u32 {
        let value = self.regs.read16(rr);
        self.alu_add16_hl(value);
        0
    }

    pub(super) fn exec_add_sp_e<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let imm = self.fetch8(bus);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        0
    }

    /// The unprefixed rotates RLCA/RRCA/RLA/RRA.
    ///
    /// Same data path as the CB forms, but Z is always forced to zero.
    pub(super) fn exec_rotate_a(&mut self, rot: RotOp) -> u32 {
        let result = self.rotate(rot, self.regs.a);
        self.regs.a = result;
        self.set_flag(Flag::Z, false);
        0
    }

    pub(super) fn exec_daa(&mut self) -> u32 {
        self.alu_daa();
        0
    }

    pub(super) fn exec_cpl(&mut self) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        0
    }

    pub(super) fn exec_scf(&mut self) -> u32 {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        0
    }

    pub(super) fn exec_ccf(&mut self) -> u32 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::C, !carry);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        0
    }
}
