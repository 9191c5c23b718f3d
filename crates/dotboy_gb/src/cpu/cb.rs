use super::decode::{CbOp, RotOp};
use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Rotate/shift data path shared by the CB block and the unprefixed A
    /// forms. Sets Z from the result and C from the bit shifted out; N and H
    /// are cleared (SWAP also clears C).
    pub(super) fn rotate(&mut self, rot: RotOp, value: u8) -> u8 {
        let carry_in = u8::from(self.get_flag(Flag::C));
        let (result, carry_out) = match rot {
            RotOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            RotOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            RotOp::Rl => ((value << 1) | carry_in, value & 0x80 != 0),
            RotOp::Rr => ((value >> 1) | (carry_in << 7), value & 0x01 != 0),
            RotOp::Sla => (value << 1, value & 0x80 != 0),
            // Arithmetic shift: bit 7 is replicated.
            RotOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            RotOp::Swap => (value.rotate_left(4), false),
            RotOp::Srl => (value >> 1, value & 0x01 != 0),
        };
        self.set_flags(result == 0, false, false, carry_out);
        result
    }

    /// Execute one CB-prefixed instruction. Timing comes entirely from the
    /// descriptor table.
    pub(super) fn exec_cb<B: Bus>(&mut self, bus: &mut B, op: CbOp) {
        match op {
            CbOp::Rotate(rot, target) => {
                let value = self.read_target8(bus, target);
                let result = self.rotate(rot, value);
                self.write_target8(bus, target, result);
            }
            CbOp::Bit(bit, target) => {
                let value = self.read_target8(bus, target);
                // C is preserved; only Z/N/H change.
                self.set_flag(Flag::Z, value & (1 << bit) == 0);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, true);
            }
            CbOp::Res(bit, target) => {
                let value = self.read_target8(bus, target);
                self.write_target8(bus, target, value & !(1 << bit));
            }
            CbOp::Set(bit, target) => {
                let value = self.read_target8(bus, target);
                self.write_target8(bus, target, value | (1 << bit));
            }
        }
    }
}
