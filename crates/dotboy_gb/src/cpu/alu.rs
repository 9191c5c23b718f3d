use super::decode::AluOp;
use super::{Cpu, Flag};

impl Cpu {
    /// Assemble F from the four condition bits; the low nibble stays zero.
    #[inline]
    pub(super) fn set_flags(&mut self, zero: bool, subtract: bool, half: bool, carry: bool) {
        self.regs.f = (u8::from(zero) << 7)
            | (u8::from(subtract) << 6)
            | (u8::from(half) << 5)
            | (u8::from(carry) << 4);
    }

    /// 8-bit accumulator ALU, shared by the register, (HL) and immediate
    /// operand forms.
    ///
    /// ADC/SBC fold the incoming carry into both the half-carry and carry
    /// computations; CP runs the subtraction path but discards the result.
    pub(super) fn alu8(&mut self, operator: AluOp, value: u8) {
        let a = self.regs.a;
        match operator {
            AluOp::Add | AluOp::Adc => {
                let carry_in = u8::from(operator == AluOp::Adc && self.get_flag(Flag::C));
                let sum = u16::from(a) + u16::from(value) + u16::from(carry_in);
                let result = sum as u8;
                let half = (a & 0x0F) + (value & 0x0F) + carry_in > 0x0F;
                self.set_flags(result == 0, false, half, sum > 0xFF);
                self.regs.a = result;
            }
            AluOp::Sub | AluOp::Sbc | AluOp::Cp => {
                let borrow = u8::from(operator == AluOp::Sbc && self.get_flag(Flag::C));
                let result = a.wrapping_sub(value).wrapping_sub(borrow);
                let half = (a & 0x0F) < (value & 0x0F) + borrow;
                let carry = u16::from(a) < u16::from(value) + u16::from(borrow);
                self.set_flags(result == 0, true, half, carry);
                if operator != AluOp::Cp {
                    self.regs.a = result;
                }
            }
            AluOp::And => {
                let result = a & value;
                self.set_flags(result == 0, false, true, false);
                self.regs.a = result;
            }
            AluOp::Xor => {
                let result = a ^ value;
                self.set_flags(result == 0, false, false, false);
                self.regs.a = result;
            }
            AluOp::Or => {
                let result = a | value;
                self.set_flags(result == 0, false, false, false);
                self.regs.a = result;
            }
        }
    }

    /// Decimal adjust after BCD arithmetic.
    ///
    /// The correction depends on N (which direction the last operation
    /// went), on the nibble/byte overflows it recorded in H and C, and on
    /// the current digits of A. Produces new C and Z, clears H, leaves N
    /// alone.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut carry = self.get_flag(Flag::C);

        if self.get_flag(Flag::N) {
            // After a subtraction only the recorded borrows are undone.
            if carry {
                a = a.wrapping_sub(0x60);
            }
            if self.get_flag(Flag::H) {
                a = a.wrapping_sub(0x06);
            }
        } else {
            if carry || a > 0x99 {
                a = a.wrapping_add(0x60);
                carry = true;
            }
            if self.get_flag(Flag::H) || a & 0x0F > 0x09 {
                a = a.wrapping_add(0x06);
            }
        }

        self.set_flag(Flag::Z, a == 0);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, carry);
        self.regs.a = a;
    }

    /// INC r/(HL): Z, N, H update; C stays untouched.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, value & 0x0F == 0x0F);
        result
    }

    /// DEC r/(HL): Z, N, H update; C stays untouched.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, value & 0x0F == 0x00);
        result
    }

    /// ADD HL,rr: Z is untouched, N clears, H comes from the carry into
    /// bit 12 and C from the carry out of bit 15.
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let (result, carry) = hl.overflowing_add(value);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl ^ value ^ result) & 0x1000 != 0);
        self.set_flag(Flag::C, carry);
        self.regs.set_hl(result);
    }

    /// Signed-offset add shared by ADD SP,e and LD HL,SP+e.
    ///
    /// The offset sign-extends into the full 16-bit result, but H and C are
    /// defined by the unsigned addition of the low bytes alone; Z and N are
    /// always cleared.
    pub(super) fn alu_add16_signed(&mut self, base: u16, offset: u8) -> u16 {
        let low = base as u8;
        let half = (low & 0x0F) + (offset & 0x0F) > 0x0F;
        let (_, carry) = low.overflowing_add(offset);
        self.set_flags(false, false, half, carry);
        base.wrapping_add(offset as i8 as u16)
    }
}
