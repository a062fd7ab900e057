//! Boot ROM identification.
//!
//! The core never embeds boot ROM binaries: a boot ROM is copyrighted
//! firmware that a frontend supplies at runtime via
//! [`crate::gb::GameBoy::load_boot`]. `BootRom` is only a hint the
//! frontend can attach to a loaded boot image, used to pick sensible
//! defaults (e.g. which hardware mode to assume).

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BootRom {
    Dmg,
    Sgb,
    DmgBootix,
    MgbBootix,
    Cgb,
    CgbBoytacean,
    Other,
    #[default]
    None,
}

impl BootRom {
    pub fn description(&self) -> &'static str {
        match self {
            BootRom::Dmg => "DMG",
            BootRom::Sgb => "SGB",
            BootRom::DmgBootix => "DMG Bootix",
            BootRom::MgbBootix => "MGB Bootix",
            BootRom::Cgb => "CGB",
            BootRom::CgbBoytacean => "CGB Boytacean",
            BootRom::Other => "Other",
            BootRom::None => "None",
        }
    }

    pub fn is_cgb(&self) -> bool {
        matches!(self, BootRom::Cgb | BootRom::CgbBoytacean)
    }
}
