use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// HALT: suspend instruction fetch until an enabled interrupt line is
    /// pending (IE & IF != 0). The wake-up itself happens in the step loop.
    pub(super) fn exec_halt(&mut self) -> u32 {
        self.halted = true;
        0
    }

    /// STOP: officially a 2-byte instruction; the padding byte is fetched
    /// and discarded so that PC matches hardware. Within this core's scope
    /// the stopped state behaves like HALT.
    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let _padding = self.fetch8(bus);
        self.stopped = true;
        self.halted = false;
        0
    }

    pub(super) fn exec_di(&mut self) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        0
    }

    pub(super) fn exec_ei(&mut self) -> u32 {
        // IME becomes 1 only after the *next* instruction completes.
        self.ime_enable_pending = true;
        0
    }
}
