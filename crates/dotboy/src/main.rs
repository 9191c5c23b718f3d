use std::path::PathBuf;

use anyhow::Context;
use dotboy_gb::{GameBoy, Rom};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rom_path: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("Usage: dotboy <rom_path>");
        std::process::exit(1);
    });
    if args.next().is_some() {
        eprintln!("Usage: dotboy <rom_path>");
        std::process::exit(1);
    }

    let rom = Rom::from_file(&rom_path)
        .with_context(|| format!("cannot load ROM '{}'", rom_path.display()))?;
    log::info!("ROM size: {} bytes", rom.len());
    if !rom.has_valid_logo() {
        // The boot ROM would refuse this cartridge; we only note it.
        log::warn!("ROM logo signature mismatch at 0x0104");
    }

    let mut gb = GameBoy::new();
    gb.load_rom(&rom);

    if let Err(err) = gb.run() {
        log::error!("emulation aborted: {err} ({})", gb.cpu.regs);
        return Err(err).context("emulation session failed");
    }

    log::info!(
        "CPU halted with interrupts disabled after {} cycles ({})",
        gb.cpu.cycles(),
        gb.cpu.regs
    );
    Ok(())
}
