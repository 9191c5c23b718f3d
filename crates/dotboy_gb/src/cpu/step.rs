use crate::error::Error;

use super::decode::{Op, CB_OPCODE_TABLE, OPCODE_TABLE};
use super::{Bus, Cpu};

impl Cpu {
    /// Execute a single instruction (or service one interrupt) and return
    /// the number of T-cycles consumed.
    ///
    /// Per tick: pending interrupts are serviced first, a halted or stopped
    /// CPU burns 4 idle cycles, and otherwise one opcode is fetched, decoded
    /// through the descriptor tables and executed. The returned cycle count
    /// is what an outer loop feeds to the PPU/timer collaborators; the same
    /// amount accumulates on the monotonic cycle clock.
    ///
    /// Decoding one of the eleven opcode holes is fatal: the error carries
    /// the faulting address and byte, and the session is not expected to
    /// continue.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, Error> {
        if let Some(cycles) = self.service_interrupts(bus) {
            self.cycles += u64::from(cycles);
            return Ok(cycles);
        }

        if self.halted || self.stopped {
            self.cycles += 4;
            return Ok(4);
        }

        let addr = self.regs.pc;
        let opcode = self.fetch8(bus);
        let Some(instr) = OPCODE_TABLE[opcode as usize] else {
            log::error!("invalid opcode 0x{opcode:02X} at 0x{addr:04X} ({})", self.regs);
            return Err(Error::InvalidOpcode { addr, opcode });
        };

        let cycles = if let Op::Prefix = instr.op {
            // Second fetch indexes the dense CB table; its descriptor costs
            // cover the whole prefixed instruction.
            let subop = self.fetch8(bus);
            let cb_instr = &CB_OPCODE_TABLE[subop as usize];
            log::trace!("0x{addr:04X}: {}", cb_instr.mnemonic);
            self.exec_cb(bus, cb_instr.op);
            u32::from(cb_instr.cycles)
        } else {
            log::trace!("0x{addr:04X}: {}", instr.mnemonic);
            u32::from(instr.cycles) + self.exec_op(bus, instr.op)
        };

        self.apply_ime_delay();
        self.cycles += u64::from(cycles);
        Ok(cycles)
    }
}
