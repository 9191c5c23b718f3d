mod bus;
mod gameboy;
mod mapper;
mod rom;

pub use bus::DmgBus;
pub use gameboy::GameBoy;
pub use mapper::Mapper;
pub use rom::Rom;

/// Total addressable memory for the Game Boy (64 KiB).
const MEMORY_SIZE: usize = 0x10000;

#[cfg(test)]
mod tests;
