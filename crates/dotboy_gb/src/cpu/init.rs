use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
            ime_enable_pending: false,
            ime_enable_delay: false,
            cycles: 0,
        };
        cpu.apply_dmg_boot_state();
        cpu
    }

    /// Reset the CPU to its power-on state, including the cycle clock.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.ime = false;
        self.halted = false;
        self.stopped = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        self.cycles = 0;
        self.apply_dmg_boot_state();
    }

    /// Initialize registers to match the DMG boot ROM's state after it hands
    /// control to cartridge code at 0x0100.
    ///
    /// These values follow common emulator conventions and are based on
    /// hardware tests as documented in Pan Docs.
    fn apply_dmg_boot_state(&mut self) {
        self.regs.a = 0x01;
        self.regs.f = 0xB0; // Z, N, H, C = 1,0,1,1 (upper nibble 1011_0000)
        self.regs.b = 0x00;
        self.regs.c = 0x13;
        self.regs.d = 0x00;
        self.regs.e = 0xD8;
        self.regs.h = 0x01;
        self.regs.l = 0x4D;
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;

        // Per Pan Docs, IME is clear when control is handed to the cartridge
        // at 0x0100. The game is responsible for enabling interrupts via
        // EI/RETI as needed.
        self.ime = false;
    }
}
