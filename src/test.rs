//! Test and benchmark harness helpers.
//!
//! Not `#[cfg(test)]`-gated: `benches/` depends on this crate as a
//! normal dependency, so these helpers need to be part of the public
//! API surface to be reachable from there.

use crate::{
    data::BootRom,
    error::Error,
    gb::{GameBoy, GameBoyMode},
    ppu::FRAME_BUFFER_SIZE,
};

#[derive(Default)]
pub struct TestOptions {
    pub mode: Option<GameBoyMode>,
    pub ppu_enabled: Option<bool>,
    pub dma_enabled: Option<bool>,
    pub timer_enabled: Option<bool>,
    pub boot_rom: Option<BootRom>,
}

/// Builds a [`GameBoy`] already past the boot sequence (post-boot
/// register state, §3), with the components named in `options`
/// selectively disabled. Used by benchmarks and integration tests
/// that want to isolate one component's cost.
pub fn build_test(options: TestOptions) -> Box<GameBoy> {
    let mut game_boy = Box::new(GameBoy::new(options.mode));
    game_boy.set_ppu_enabled(options.ppu_enabled.unwrap_or(true));
    game_boy.set_dma_enabled(options.dma_enabled.unwrap_or(true));
    game_boy.set_timer_enabled(options.timer_enabled.unwrap_or(true));
    if let Some(boot_rom) = options.boot_rom {
        game_boy.set_boot_rom(boot_rom);
    }
    game_boy.load(false).unwrap();
    game_boy
}

/// Loads `rom_path` into a freshly built test machine and clocks it
/// for up to `max_cycles` T-cycles (unbounded if `None`).
pub fn run_test(
    rom_path: &str,
    max_cycles: Option<u64>,
    options: TestOptions,
) -> Result<Box<GameBoy>, Error> {
    let max_cycles = max_cycles.unwrap_or(u64::MAX);
    let mut game_boy = build_test(options);
    game_boy.load_rom_file(rom_path, None)?;
    game_boy.clocks_cycles(max_cycles as usize);
    Ok(game_boy)
}

/// Like [`run_test`] but stops as soon as the CPU reaches `addr`
/// instead of running a fixed cycle budget.
pub fn run_step_test(
    rom_path: &str,
    addr: u16,
    options: TestOptions,
) -> Result<Box<GameBoy>, Error> {
    let mut game_boy = build_test(options);
    game_boy.load_rom_file(rom_path, None)?;
    game_boy.step_to(addr);
    Ok(game_boy)
}

/// Like [`run_test`] but also returns the final framebuffer, for
/// test ROMs that signal completion through rendered output.
pub fn run_image_test(
    rom_path: &str,
    max_cycles: Option<u64>,
    options: TestOptions,
) -> Result<([u8; FRAME_BUFFER_SIZE], Box<GameBoy>), Error> {
    let mut game_boy = run_test(rom_path, max_cycles, options)?;
    Ok((*game_boy.frame_buffer(), game_boy))
}
