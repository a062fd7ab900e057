//! Serial port (link cable) register plumbing.
//!
//! The link-cable transfer protocol itself is out of scope here: this
//! component only owns SB/SC as addressable registers and the
//! `int_serial` bit so the MMU's IF synthesis is uniform across all
//! five interrupt sources. There is no attached device and no
//! byte-shifting state machine.

use crate::{
    consts::{SB_ADDR, SC_ADDR},
    mmu::BusComponent,
    warnln,
};

pub struct Serial {
    data: u8,
    shift_clock: bool,
    clock_speed: bool,
    transfer_enabled: bool,
    int_serial: bool,
}

impl Serial {
    pub fn new() -> Self {
        Self {
            data: 0x00,
            shift_clock: false,
            clock_speed: false,
            transfer_enabled: false,
            int_serial: false,
        }
    }

    pub fn reset(&mut self) {
        self.data = 0x00;
        self.shift_clock = false;
        self.clock_speed = false;
        self.transfer_enabled = false;
        self.int_serial = false;
    }

    pub fn read(&self, addr: u16) -> u8 {
        match addr {
            // 0xFF01 — SB: Serial transfer data
            SB_ADDR => self.data,
            // 0xFF02 — SC: Serial transfer control
            SC_ADDR => {
                0x7e | (if self.shift_clock { 0x01 } else { 0x00 })
                    | (if self.clock_speed { 0x02 } else { 0x00 })
                    | (if self.transfer_enabled { 0x80 } else { 0x00 })
            }
            _ => {
                warnln!("Reading from unknown Serial location 0x{:04x}", addr);
                0xff
            }
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            // 0xFF01 — SB: Serial transfer data
            SB_ADDR => self.data = value,
            // 0xFF02 — SC: Serial transfer control. No device is ever
            // attached, so a transfer enabled here simply never
            // completes and never raises the interrupt, mirroring
            // real hardware with nothing plugged into the port.
            SC_ADDR => {
                self.shift_clock = value & 0x01 != 0;
                self.clock_speed = value & 0x02 != 0;
                self.transfer_enabled = value & 0x80 != 0;
            }
            _ => warnln!("Writing to unknown Serial location 0x{:04x}", addr),
        }
    }

    #[inline(always)]
    pub fn int_serial(&self) -> bool {
        self.int_serial
    }

    #[inline(always)]
    pub fn set_int_serial(&mut self, value: bool) {
        self.int_serial = value;
    }

    #[inline(always)]
    pub fn ack_serial(&mut self) {
        self.set_int_serial(false);
    }
}

impl BusComponent for Serial {
    fn read(&self, addr: u16) -> u8 {
        self.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.write(addr, value);
    }
}

impl Default for Serial {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Serial;
    use crate::consts::{SB_ADDR, SC_ADDR};

    #[test]
    fn test_sb_round_trip() {
        let mut serial = Serial::new();
        serial.write(SB_ADDR, 0x42);
        assert_eq!(serial.read(SB_ADDR), 0x42);
    }

    #[test]
    fn test_sc_bits_round_trip() {
        let mut serial = Serial::new();
        serial.write(SC_ADDR, 0x81);
        assert_eq!(serial.read(SC_ADDR) & 0x81, 0x81);
        assert!(!serial.int_serial());
    }
}
