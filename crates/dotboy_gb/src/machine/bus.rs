use crate::cpu::{Bus, Irq};

use super::mapper::Mapper;
use super::MEMORY_SIZE;

/// One named range of the DMG address space, used for trace output.
struct Region {
    begin: u16,
    end: u16,
    name: &'static str,
}

const REGIONS: [Region; 12] = [
    Region { begin: 0x0000, end: 0x3FFF, name: "ROM0" },
    Region { begin: 0x4000, end: 0x7FFF, name: "ROMX" },
    Region { begin: 0x8000, end: 0x9FFF, name: "VRAM" },
    Region { begin: 0xA000, end: 0xBFFF, name: "SRAM" },
    Region { begin: 0xC000, end: 0xCFFF, name: "WRAM0" },
    Region { begin: 0xD000, end: 0xDFFF, name: "WRAMX" },
    Region { begin: 0xE000, end: 0xFDFF, name: "ECHO" },
    Region { begin: 0xFE00, end: 0xFE9F, name: "OAM" },
    Region { begin: 0xFEA0, end: 0xFEFF, name: "UNUSED" },
    Region { begin: 0xFF00, end: 0xFF7F, name: "IOREG" },
    Region { begin: 0xFF80, end: 0xFFFE, name: "HRAM" },
    Region { begin: 0xFFFF, end: 0xFFFF, name: "IEREG" },
];

/// The DMG memory-mapped bus.
///
/// Backed by a flat 64 KiB array with per-region dispatch on top: cartridge
/// space routes through an optional [`Mapper`], echo RAM mirrors work RAM,
/// the unused strip reads 0xFF, and the IF register reads with its unused
/// upper bits set. Everything else (VRAM, WRAM, OAM, IO registers, HRAM, IE)
/// is plain backing memory that collaborators access through the outer loop.
pub struct DmgBus {
    pub(crate) memory: [u8; MEMORY_SIZE],
    mapper: Option<Box<dyn Mapper>>,
}

impl Default for DmgBus {
    fn default() -> Self {
        Self::new()
    }
}

impl DmgBus {
    pub fn new() -> Self {
        Self {
            memory: [0; MEMORY_SIZE],
            mapper: None,
        }
    }

    /// Copy a ROM image into the fixed cartridge area 0x0000-0x7FFF.
    ///
    /// Anything beyond 32 KiB only exists through a mapper's banking, so
    /// without one the excess is unreachable.
    pub(super) fn load_rom(&mut self, rom: &[u8]) {
        let len = rom.len().min(0x8000);
        self.memory[..len].copy_from_slice(&rom[..len]);
        if rom.len() > 0x8000 && self.mapper.is_none() {
            log::warn!(
                "ROM image is {} bytes; banks past 32 KiB need a cartridge mapper",
                rom.len()
            );
        }
    }

    /// Attach a cartridge mapper. All cartridge-space traffic (0x0000-0x7FFF
    /// and 0xA000-0xBFFF) is routed through it from then on.
    pub fn attach_mapper(&mut self, mapper: Box<dyn Mapper>) {
        self.mapper = Some(mapper);
    }

    /// Raise an interrupt line in IF on behalf of a collaborator
    /// (PPU, timer, joypad, serial).
    pub fn request_interrupt(&mut self, irq: Irq) {
        self.memory[0xFF0F] |= irq.bit();
    }

    /// Name of the region owning `addr`, for trace output.
    pub fn region_name(addr: u16) -> &'static str {
        REGIONS
            .iter()
            .find(|region| region.begin <= addr && addr <= region.end)
            .map(|region| region.name)
            .unwrap_or("???")
    }

    fn read8_impl(&self, addr: u16) -> u8 {
        match addr {
            // Cartridge ROM: routed through the mapper when one is attached.
            0x0000..=0x7FFF => match &self.mapper {
                Some(mapper) => mapper.rom_read(addr),
                None => self.memory[addr as usize],
            },

            // Cartridge RAM.
            0xA000..=0xBFFF => match &self.mapper {
                Some(mapper) => mapper.ram_read(addr),
                None => self.memory[addr as usize],
            },

            // Echo RAM mirrors 0xC000-0xDDFF.
            0xE000..=0xFDFF => self.memory[(addr - 0x2000) as usize],

            // Unusable strip behind OAM.
            0xFEA0..=0xFEFF => 0xFF,

            // IF: the upper three bits are not wired and read as 1.
            0xFF0F => self.memory[addr as usize] | 0b1110_0000,

            _ => self.memory[addr as usize],
        }
    }

    fn write8_impl(&mut self, addr: u16, value: u8) {
        match addr {
            // ROM is not writable; with a mapper attached the write becomes
            // a banking command, otherwise it is silently discarded.
            0x0000..=0x7FFF => {
                if let Some(mapper) = &mut self.mapper {
                    mapper.rom_write(addr, value);
                }
            }

            0xA000..=0xBFFF => match &mut self.mapper {
                Some(mapper) => mapper.ram_write(addr, value),
                None => self.memory[addr as usize] = value,
            },

            0xE000..=0xFDFF => self.memory[(addr - 0x2000) as usize] = value,

            // Writes to the unusable strip are dropped.
            0xFEA0..=0xFEFF => {}

            _ => self.memory[addr as usize] = value,
        }
    }
}

impl Bus for DmgBus {
    fn read8(&mut self, addr: u16) -> u8 {
        let value = self.read8_impl(addr);
        log::trace!(
            "READ  [0x{addr:04X}] -> 0x{value:02X} ({})",
            Self::region_name(addr)
        );
        value
    }

    fn write8(&mut self, addr: u16, value: u8) {
        log::trace!(
            "WRITE [0x{addr:04X}] <- 0x{value:02X} ({})",
            Self::region_name(addr)
        );
        self.write8_impl(addr, value);
    }
}
