mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::decode::Op;
use super::{Bus, Cpu};

impl Cpu {
    /// Execute one decoded instruction.
    ///
    /// Returns the conditional penalty in T-cycles on top of the
    /// descriptor's base cost: +4 for a taken JR/JP, +12 for a taken
    /// CALL/RET, 0 for everything else. The match is exhaustive over [`Op`],
    /// so a table entry without semantics cannot exist.
    pub(super) fn exec_op<B: Bus>(&mut self, bus: &mut B, op: Op) -> u32 {
        match op {
            Op::Nop => 0,
            Op::Stop => self.exec_stop(bus),
            Op::Halt => self.exec_halt(),
            Op::Di => self.exec_di(),
            Op::Ei => self.exec_ei(),
            // The 0xCB escape is consumed by `step` before execution.
            Op::Prefix => 0,

            Op::LdRR(dst, src) => self.exec_ld_r_r(bus, dst, src),
            Op::LdRD8(target) => self.exec_ld_r_d8(bus, target),
            Op::LdAFromBc => self.exec_ld_a_from_bc(bus),
            Op::LdAFromDe => self.exec_ld_a_from_de(bus),
            Op::LdAToBc => self.exec_ld_a_to_bc(bus),
            Op::LdAToDe => self.exec_ld_a_to_de(bus),
            Op::LdAFromA16 => self.exec_ld_a_from_a16(bus),
            Op::LdAToA16 => self.exec_ld_a_to_a16(bus),
            Op::LdhAFromA8 => self.exec_ldh_a_from_a8(bus),
            Op::LdhAToA8 => self.exec_ldh_a_to_a8(bus),
            Op::LdhAFromC => self.exec_ldh_a_from_c(bus),
            Op::LdhAToC => self.exec_ldh_a_to_c(bus),
            Op::LdAFromHlInc => self.exec_ld_a_from_hl_inc(bus),
            Op::LdAFromHlDec => self.exec_ld_a_from_hl_dec(bus),
            Op::LdAToHlInc => self.exec_ld_a_to_hl_inc(bus),
            Op::LdAToHlDec => self.exec_ld_a_to_hl_dec(bus),

            Op::LdRrD16(rr) => self.exec_ld_rr_d16(bus, rr),
            Op::LdSpHl => self.exec_ld_sp_hl(),
            Op::LdA16Sp => self.exec_ld_a16_sp(bus),
            Op::LdHlSpE => self.exec_ld_hl_sp_e(bus),
            Op::Push(rr) => self.exec_push_rr(bus, rr),
            Op::Pop(rr) => self.exec_pop_rr(bus, rr),

            Op::Alu(operator, src) => self.exec_alu_reg(bus, operator, src),
            Op::AluD8(operator) => self.exec_alu_d8(bus, operator),
            Op::Inc8(target) => self.exec_inc8(bus, target),
            Op::Dec8(target) => self.exec_dec8(bus, target),

            Op::Inc16(rr) => self.exec_inc16(rr),
            Op::Dec16(rr) => self.exec_dec16(rr),
            Op::AddHlRr(rr) => self.exec_add_hl_rr(rr),
            Op::AddSpE => self.exec_add_sp_e(bus),

            Op::RotA(rot) => self.exec_rotate_a(rot),
            Op::Daa => self.exec_daa(),
            Op::Cpl => self.exec_cpl(),
            Op::Scf => self.exec_scf(),
            Op::Ccf => self.exec_ccf(),

            Op::JpA16 => self.exec_jp_a16(bus),
            Op::JpCcA16(cc) => self.exec_jp_cc(bus, cc),
            Op::JpHl => self.exec_jp_hl(),
            Op::JrE => self.exec_jr_e(bus),
            Op::JrCcE(cc) => self.exec_jr_cc(bus, cc),
            Op::CallA16 => self.exec_call_a16(bus),
            Op::CallCcA16(cc) => self.exec_call_cc(bus, cc),
            Op::Ret => self.exec_ret(bus),
            Op::RetCc(cc) => self.exec_ret_cc(bus, cc),
            Op::Reti => self.exec_reti(bus),
            Op::Rst(vector) => self.exec_rst(bus, vector),
        }
    }
}
