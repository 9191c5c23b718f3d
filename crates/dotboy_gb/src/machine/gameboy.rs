use crate::cpu::{Bus, Cpu};
use crate::error::Error;

use super::mapper::Mapper;
use super::{DmgBus, Rom};

/// High-level Game Boy machine.
///
/// Holds the CPU core and the DMG bus. The bus is exclusively owned by the
/// session; collaborators (PPU, timer, joypad) act on it between steps,
/// driven by the cycle counts [`GameBoy::step`] returns.
pub struct GameBoy {
    pub cpu: Cpu,
    pub bus: DmgBus,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoy {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            bus: DmgBus::new(),
        }
    }

    pub fn reset(&mut self) {
        self.cpu.reset();
        self.bus = DmgBus::new();
    }

    /// Load a ROM image into the cartridge ROM area.
    ///
    /// PC is already at 0x0100 from the simulated boot state, so execution
    /// starts at the cartridge entry point.
    pub fn load_rom(&mut self, rom: &Rom) {
        self.bus.load_rom(rom.data());
    }

    /// Attach a cartridge mapper for banked ROM/RAM access.
    pub fn attach_mapper(&mut self, mapper: Box<dyn Mapper>) {
        self.bus.attach_mapper(mapper);
    }

    /// Execute one instruction and return the T-cycles it consumed.
    pub fn step(&mut self) -> Result<u32, Error> {
        self.cpu.step(&mut self.bus)
    }

    /// Run until the session ends.
    ///
    /// A halted CPU with every interrupt source disabled can never resume;
    /// that state ends the loop cleanly. Any fault (an opcode hole) ends it
    /// with the error.
    pub fn run(&mut self) -> Result<(), Error> {
        loop {
            self.step()?;
            if (self.cpu.halted || self.cpu.is_stopped()) && self.bus.read8(0xFFFF) & 0x1F == 0 {
                return Ok(());
            }
        }
    }
}
