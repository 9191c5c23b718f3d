use super::rom::LOGO;
use super::*;
use crate::cpu::{Bus, Irq};
use crate::error::Error;

use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn echo_ram_mirrors_wram_both_ways() {
    let mut bus = DmgBus::new();

    bus.write8(0xC000, 0xAA);
    assert_eq!(bus.read8(0xE000), 0xAA);

    bus.write8(0xFDFF, 0x55);
    assert_eq!(bus.read8(0xDDFF), 0x55);
}

#[test]
fn unused_region_reads_ff_and_ignores_writes() {
    let mut bus = DmgBus::new();
    for addr in 0xFEA0u16..=0xFEFF {
        bus.write8(addr, 0x12);
        assert_eq!(bus.read8(addr), 0xFF);
    }
}

#[test]
fn rom_writes_are_discarded_without_a_mapper() {
    let mut bus = DmgBus::new();
    bus.load_rom(&[0x11, 0x22, 0x33]);

    bus.write8(0x0000, 0xFF);
    bus.write8(0x7FFF, 0xFF);
    assert_eq!(bus.read8(0x0000), 0x11);
    assert_eq!(bus.read8(0x7FFF), 0x00);
}

#[test]
fn if_register_reads_with_upper_bits_set() {
    let mut bus = DmgBus::new();
    bus.write8(0xFF0F, 0x01);
    assert_eq!(bus.read8(0xFF0F), 0xE1);
}

#[test]
fn request_interrupt_raises_if_bits() {
    let mut bus = DmgBus::new();
    bus.request_interrupt(Irq::Timer);
    bus.request_interrupt(Irq::Joypad);
    assert_eq!(bus.read8(0xFF0F) & 0x1F, 0x14);
}

#[test]
fn word_accesses_are_little_endian() {
    let mut bus = DmgBus::new();
    bus.write16(0xC100, 0xBEEF);
    assert_eq!(bus.read8(0xC100), 0xEF);
    assert_eq!(bus.read8(0xC101), 0xBE);
    assert_eq!(bus.read16(0xC100), 0xBEEF);
}

#[test]
fn region_names_cover_the_address_space() {
    assert_eq!(DmgBus::region_name(0x0000), "ROM0");
    assert_eq!(DmgBus::region_name(0x4000), "ROMX");
    assert_eq!(DmgBus::region_name(0x9FFF), "VRAM");
    assert_eq!(DmgBus::region_name(0xB000), "SRAM");
    assert_eq!(DmgBus::region_name(0xC123), "WRAM0");
    assert_eq!(DmgBus::region_name(0xDFFF), "WRAMX");
    assert_eq!(DmgBus::region_name(0xE000), "ECHO");
    assert_eq!(DmgBus::region_name(0xFE00), "OAM");
    assert_eq!(DmgBus::region_name(0xFEA0), "UNUSED");
    assert_eq!(DmgBus::region_name(0xFF40), "IOREG");
    assert_eq!(DmgBus::region_name(0xFF80), "HRAM");
    assert_eq!(DmgBus::region_name(0xFFFF), "IEREG");
}

/// Mapper stand-in that records the traffic the bus routes to it.
#[derive(Default)]
struct RecordingMapper {
    rom_writes: Rc<RefCell<Vec<(u16, u8)>>>,
    ram: Rc<RefCell<Vec<(u16, u8)>>>,
}

impl Mapper for RecordingMapper {
    fn rom_read(&self, addr: u16) -> u8 {
        (addr >> 8) as u8
    }

    fn rom_write(&mut self, addr: u16, value: u8) {
        self.rom_writes.borrow_mut().push((addr, value));
    }

    fn ram_read(&self, _addr: u16) -> u8 {
        0x7E
    }

    fn ram_write(&mut self, addr: u16, value: u8) {
        self.ram.borrow_mut().push((addr, value));
    }
}

#[test]
fn mapper_receives_cartridge_space_traffic() {
    let mapper = RecordingMapper::default();
    let rom_writes = Rc::clone(&mapper.rom_writes);
    let ram_writes = Rc::clone(&mapper.ram);

    let mut bus = DmgBus::new();
    bus.attach_mapper(Box::new(mapper));

    assert_eq!(bus.read8(0x4123), 0x41);
    bus.write8(0x2000, 0x05); // bank-select style command
    assert_eq!(rom_writes.borrow().as_slice(), &[(0x2000, 0x05)]);

    assert_eq!(bus.read8(0xA000), 0x7E);
    bus.write8(0xA010, 0x99);
    assert_eq!(ram_writes.borrow().as_slice(), &[(0xA010, 0x99)]);

    // Non-cartridge regions stay on the internal memory.
    bus.write8(0xC000, 0x42);
    assert_eq!(bus.read8(0xC000), 0x42);
}

#[test]
fn load_rom_fills_at_most_32k() {
    let mut bus = DmgBus::new();
    let rom = vec![0xAB; 0x9000];
    bus.load_rom(&rom);

    assert_eq!(bus.read8(0x7FFF), 0xAB);
    // VRAM starts clean even though the image was larger.
    assert_eq!(bus.read8(0x8000), 0x00);
}

fn rom_with_logo() -> Vec<u8> {
    let mut data = vec![0u8; 0x8000];
    data[0x0104..0x0104 + LOGO.len()].copy_from_slice(&LOGO);
    data
}

#[test]
fn logo_signature_check() {
    let rom = Rom::from_bytes(rom_with_logo());
    assert!(rom.has_valid_logo());

    let mut tampered = rom_with_logo();
    tampered[0x0110] ^= 0xFF;
    assert!(!Rom::from_bytes(tampered).has_valid_logo());

    // Too short to even hold the header.
    assert!(!Rom::from_bytes(vec![0; 0x100]).has_valid_logo());
}

#[test]
fn rom_from_missing_file_reports_load_failure() {
    let err = Rom::from_file("/nonexistent/dotboy-test.gb").unwrap_err();
    assert!(matches!(err, Error::RomLoad(_)));
}

#[test]
fn machine_runs_a_program_to_quiescent_halt() {
    // 0x0100: LD A,0x42; LD (0xC000),A; HALT.
    let mut image = rom_with_logo();
    image[0x0100..0x0106].copy_from_slice(&[0x3E, 0x42, 0xEA, 0x00, 0xC0, 0x76]);

    let mut gb = GameBoy::new();
    gb.load_rom(&Rom::from_bytes(image));
    // IE is zero, so the HALT can never wake: run() ends cleanly.
    gb.run().unwrap();

    assert_eq!(gb.bus.read8(0xC000), 0x42);
    assert!(gb.cpu.halted);
    assert_eq!(gb.cpu.cycles(), 8 + 16 + 4);
}

#[test]
fn machine_faults_on_an_opcode_hole() {
    let mut image = rom_with_logo();
    image[0x0100] = 0xD3;

    let mut gb = GameBoy::new();
    gb.load_rom(&Rom::from_bytes(image));
    let err = gb.run().unwrap_err();
    assert_eq!(
        err,
        Error::InvalidOpcode {
            addr: 0x0100,
            opcode: 0xD3
        }
    );
}

#[test]
fn machine_services_a_requested_interrupt() {
    // The idle loop at 0x0100 spins until the requested VBlank vectors to
    // 0x0040, where the handler stores A and halts.
    let mut image = rom_with_logo();
    image[0x0040..0x0044].copy_from_slice(&[0xEA, 0x00, 0xC0, 0x76]); // LD (0xC000),A; HALT
    image[0x0100] = 0xFB; // EI
    image[0x0101..0x0103].copy_from_slice(&[0x18, 0xFE]); // JR -2

    let mut gb = GameBoy::new();
    gb.load_rom(&Rom::from_bytes(image));
    gb.cpu.regs.a = 0x99;
    gb.bus.write8(0xFFFF, 0x01); // enable VBlank in IE

    gb.step().unwrap(); // EI
    gb.step().unwrap(); // JR (IME becomes effective after this one)
    gb.bus.request_interrupt(Irq::VBlank);

    let cycles = gb.step().unwrap();
    assert_eq!(cycles, 20);
    assert_eq!(gb.cpu.regs.pc, 0x0040);

    gb.step().unwrap(); // LD (0xC000),A
    assert_eq!(gb.bus.read8(0xC000), 0x99);
}

#[test]
fn reset_restores_boot_state() {
    let mut image = rom_with_logo();
    image[0x0100] = 0x3C; // INC A

    let mut gb = GameBoy::new();
    gb.load_rom(&Rom::from_bytes(image));
    gb.step().unwrap();
    assert_ne!(gb.cpu.regs.pc, 0x0100);

    gb.reset();
    assert_eq!(gb.cpu.regs.pc, 0x0100);
    assert_eq!(gb.cpu.cycles(), 0);
    // The bus is fresh as well; the ROM must be reloaded.
    assert_eq!(gb.bus.read8(0x0100), 0x00);
}
