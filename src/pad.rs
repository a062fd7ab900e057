//! Joypad (P1 register) functions and structures.

use crate::{consts::P1_ADDR, mmu::BusComponent, warnln};

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

pub struct Pad {
    down: bool,
    up: bool,
    left: bool,
    right: bool,
    start: bool,
    select: bool,
    b: bool,
    a: bool,
    selection: PadSelection,
    int_pad: bool,
}

#[derive(Clone, Copy, PartialEq)]
pub enum PadSelection {
    Action,
    Direction,
    Both,
    None,
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PadKey {
    Up,
    Down,
    Left,
    Right,
    Start,
    Select,
    A,
    B,
}

impl Pad {
    pub fn new() -> Self {
        Self {
            down: false,
            up: false,
            left: false,
            right: false,
            start: false,
            select: false,
            b: false,
            a: false,
            selection: PadSelection::None,
            int_pad: false,
        }
    }

    pub fn reset(&mut self) {
        self.down = false;
        self.up = false;
        self.left = false;
        self.right = false;
        self.start = false;
        self.select = false;
        self.b = false;
        self.a = false;
        self.selection = PadSelection::None;
        self.int_pad = false;
    }

    pub fn read(&self, addr: u16) -> u8 {
        match addr {
            P1_ADDR => {
                let direction_bits = (if self.right { 0x00 } else { 0x01 })
                    | (if self.left { 0x00 } else { 0x02 })
                    | (if self.up { 0x00 } else { 0x04 })
                    | (if self.down { 0x00 } else { 0x08 });
                let action_bits = (if self.a { 0x00 } else { 0x01 })
                    | (if self.b { 0x00 } else { 0x02 })
                    | (if self.select { 0x00 } else { 0x04 })
                    | (if self.start { 0x00 } else { 0x08 });
                let (bits, selection_bits) = match self.selection {
                    PadSelection::Direction => (direction_bits, 0x20),
                    PadSelection::Action => (action_bits, 0x10),
                    PadSelection::Both => (direction_bits & action_bits, 0x00),
                    PadSelection::None => (0x0f, 0x30),
                };
                0xc0 | selection_bits | bits
            }
            _ => {
                warnln!("Reading from unknown Pad location 0x{:04x}", addr);
                0xff
            }
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            P1_ADDR => {
                // bit 4 = 0 selects the direction row, bit 5 = 0
                // selects the action row; either, both or neither
                // may be selected at once
                self.selection = match value & 0x30 {
                    0x00 => PadSelection::Both,
                    0x10 => PadSelection::Action,
                    0x20 => PadSelection::Direction,
                    _ => PadSelection::None,
                };
            }
            _ => warnln!("Writing to unknown Pad location 0x{:04x}", addr),
        }
    }

    /// Marks `key` as pressed, requesting the joypad interrupt on the
    /// 1→0 transition of the corresponding readable bit, but only when
    /// the key's row is currently selected (Pan Docs: the interrupt
    /// fires on a readable-bit falling edge, not on the raw button
    /// state).
    pub fn key_press(&mut self, key: PadKey) {
        let was_released = self.is_released(key);
        match key {
            PadKey::Up => self.up = true,
            PadKey::Down => self.down = true,
            PadKey::Left => self.left = true,
            PadKey::Right => self.right = true,
            PadKey::Start => self.start = true,
            PadKey::Select => self.select = true,
            PadKey::A => self.a = true,
            PadKey::B => self.b = true,
        }
        if was_released && self.key_row_selected(key) {
            self.int_pad = true;
        }
    }

    pub fn key_lift(&mut self, key: PadKey) {
        match key {
            PadKey::Up => self.up = false,
            PadKey::Down => self.down = false,
            PadKey::Left => self.left = false,
            PadKey::Right => self.right = false,
            PadKey::Start => self.start = false,
            PadKey::Select => self.select = false,
            PadKey::A => self.a = false,
            PadKey::B => self.b = false,
        }
    }

    fn key_row_selected(&self, key: PadKey) -> bool {
        match key {
            PadKey::Up | PadKey::Down | PadKey::Left | PadKey::Right => {
                matches!(self.selection, PadSelection::Direction | PadSelection::Both)
            }
            PadKey::Start | PadKey::Select | PadKey::A | PadKey::B => {
                matches!(self.selection, PadSelection::Action | PadSelection::Both)
            }
        }
    }

    fn is_released(&self, key: PadKey) -> bool {
        match key {
            PadKey::Up => !self.up,
            PadKey::Down => !self.down,
            PadKey::Left => !self.left,
            PadKey::Right => !self.right,
            PadKey::Start => !self.start,
            PadKey::Select => !self.select,
            PadKey::A => !self.a,
            PadKey::B => !self.b,
        }
    }

    #[inline(always)]
    pub fn int_pad(&self) -> bool {
        self.int_pad
    }

    #[inline(always)]
    pub fn set_int_pad(&mut self, value: bool) {
        self.int_pad = value;
    }

    #[inline(always)]
    pub fn ack_pad(&mut self) {
        self.set_int_pad(false);
    }
}

impl BusComponent for Pad {
    fn read(&self, addr: u16) -> u8 {
        self.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.write(addr, value);
    }
}

impl Default for Pad {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Pad, PadKey};
    use crate::consts::P1_ADDR;

    #[test]
    fn test_press_requests_interrupt_when_row_selected() {
        let mut pad = Pad::new();
        pad.write(P1_ADDR, 0x20); // select direction row
        assert!(!pad.int_pad());
        pad.key_press(PadKey::Up);
        assert!(pad.int_pad());
    }

    #[test]
    fn test_press_on_unselected_row_requests_nothing() {
        let mut pad = Pad::new();
        pad.write(P1_ADDR, 0x10); // select action row only
        pad.key_press(PadKey::Up);
        assert!(!pad.int_pad());
    }

    #[test]
    fn test_release_never_requests_interrupt() {
        let mut pad = Pad::new();
        pad.write(P1_ADDR, 0x20);
        pad.key_press(PadKey::Up);
        pad.ack_pad();
        pad.key_lift(PadKey::Up);
        assert!(!pad.int_pad());
    }

    #[test]
    fn test_read_reflects_pressed_bit_low() {
        let mut pad = Pad::new();
        pad.write(P1_ADDR, 0x20);
        pad.key_press(PadKey::Right);
        assert_eq!(pad.read(P1_ADDR) & 0x01, 0x00);
    }
}
