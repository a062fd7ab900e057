//! Implementation of the core CPU ([Sharp LR35902](https://en.wikipedia.org/wiki/Game_Boy)) logic for the Game Boy.
//!
//! Does not include the instruction set implementation, only the core
//! CPU logic and the CPU struct definition.
//!
//! Most of the core CPU logic is implemented in the [`Cpu::clock`] method.

use std::{
    fmt::{self, Display, Formatter},
    sync::Mutex,
};

use crate::{
    assert_pedantic_gb,
    consts::{IF_ADDR, LCDC_ADDR},
    debugln,
    dma::Dma,
    gb::GameBoyConfig,
    inst::{EXTENDED, INSTRUCTIONS},
    mmu::Mmu,
    pad::Pad,
    ppu::Ppu,
    serial::Serial,
    timer::Timer,
    util::SharedThread,
};

pub const PREFIX: u8 = 0xcb;

pub type Instruction = &'static (fn(&mut Cpu), u8, &'static str);

pub struct Cpu {
    pub pc: u16,
    pub sp: u16,
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,

    ime: bool,

    /// Staged EI delay: 0 = inactive, 1 = `EI` armed this instruction
    /// (not yet visible), 2 = armed on the *previous* instruction, so
    /// `ime` becomes true at the top of this `clock()` call, before
    /// the interrupt check. See §4.1 EI delay.
    ime_pending: u8,

    zero: bool,
    sub: bool,
    half_carry: bool,
    carry: bool,
    halted: bool,

    /// Set by [`Cpu::halt`] when `HALT` executes with `IME` disabled and
    /// an interrupt is already pending: the CPU does not actually halt,
    /// and the next opcode fetch does not advance `pc`, so the byte
    /// following `HALT` is fetched and executed twice.
    halt_bug: bool,

    /// Set when an undefined opcode is dispatched (§7): the CPU is
    /// parked and every subsequent `clock()` call is a 1-cycle no-op.
    locked: bool,

    /// Reference to the MMU (Memory Management Unit) to be used
    /// for memory bus access operations.
    pub mmu: Mmu,

    /// Temporary counter used to control the number of cycles
    /// taken by the current or last CPU operation.
    pub cycles: u8,

    /// Reference to the PC (Program Counter) of the previous executed
    /// instruction, used to provide a reference to the instruction
    /// so that it can be logged or used for debugging purposes.
    pub ppc: u16,

    /// The pointer to the parent configuration of the running
    /// Game Boy emulator, that can be used to control the behaviour
    /// of Game Boy emulation.
    gbc: SharedThread<GameBoyConfig>,
}

impl Cpu {
    pub fn new(mmu: Mmu, gbc: SharedThread<GameBoyConfig>) -> Self {
        Self {
            pc: 0x0,
            sp: 0x0,
            a: 0x0,
            b: 0x0,
            c: 0x0,
            d: 0x0,
            e: 0x0,
            h: 0x0,
            l: 0x0,
            ime: false,
            ime_pending: 0,
            zero: false,
            sub: false,
            half_carry: false,
            carry: false,
            halted: false,
            halt_bug: false,
            locked: false,
            mmu,
            cycles: 0,
            ppc: 0x0,
            gbc,
        }
    }

    pub fn reset(&mut self) {
        self.pc = 0x0;
        self.sp = 0x0;
        self.a = 0x0;
        self.b = 0x0;
        self.c = 0x0;
        self.d = 0x0;
        self.e = 0x0;
        self.h = 0x0;
        self.l = 0x0;
        self.ime = false;
        self.ime_pending = 0;
        self.zero = false;
        self.sub = false;
        self.half_carry = false;
        self.carry = false;
        self.halted = false;
        self.halt_bug = false;
        self.locked = false;
        self.cycles = 0;
    }

    /// Sets the CPU registers and some of the memory space to the
    /// expected state after a typical Game Boy boot ROM finishes.
    ///
    /// Using this strategy it's possible to skip the "normal" boot
    /// loading process. Register values follow the documented DMG
    /// post-boot state (§3); CGB post-boot differs and is applied by
    /// the caller when the hardware mode is CGB.
    pub fn boot(&mut self) {
        self.pc = 0x0100;
        self.sp = 0xfffe;
        self.set_af(0x01b0);
        self.set_bc(0x0013);
        self.set_de(0x00d8);
        self.set_hl(0x014d);

        // updates part of the MMU state, disabling the
        // boot memory overlap and setting the LCD control
        // register to enabled (required by some ROMs)
        self.mmu.set_boot_active(false);
        self.mmu.write(LCDC_ADDR, 0x91);
    }

    /// Same as [`Cpu::boot`] but applies the CGB post-boot register
    /// values instead of the DMG ones (§3).
    pub fn boot_cgb(&mut self) {
        self.pc = 0x0100;
        self.sp = 0xfffe;
        self.set_af(0x1180);
        self.set_bc(0x0000);
        self.set_de(0xff56);
        self.set_hl(0x000d);

        self.mmu.set_boot_active(false);
        self.mmu.write(LCDC_ADDR, 0x91);
    }

    /// Returns the 5-bit mask of interrupts that are both requested
    /// (IF) and enabled (IE), the value the interrupt-service logic
    /// and the HALT bug check both key off of.
    #[inline(always)]
    fn pending_interrupts(&self) -> u8 {
        // interrupt latching is independent of the CPU's own bus access,
        // so this reads past the OAM DMA lockout applied by `Mmu::read`
        self.mmu.read_unchecked(IF_ADDR) & self.mmu.ie & 0x1f
    }

    pub fn clock(&mut self) -> u8 {
        // an undefined opcode has locked the CPU in place (§7); it
        // never recovers and simply burns one cycle per call forever
        if self.locked {
            return 4;
        }

        // resolves the staged EI delay (§4.1): a pending value of 2
        // means EI armed IME two calls ago, so IME becomes visible now,
        // before this instruction's interrupt check and fetch.
        if self.ime_pending == 2 {
            self.ime = true;
            self.ime_pending = 0;
        }

        // snapshot taken before this call's own instruction runs, so an
        // EI executed *this* call only starts aging next call instead of
        // being promoted by the check at the bottom of this same call
        let ime_pending_before = self.ime_pending;

        // gathers the PC (program counter) reference that
        // is going to be used in the fetching phase
        let pc = self.pc;

        // runs a series of assertions to guarantee CPU execution
        // state, only if pedantic mode is set
        assert_pedantic_gb!(
            !(0x8000..=0x9fff).contains(&pc),
            "Invalid PC area at 0x{:04x}",
            pc
        );
        assert_pedantic_gb!(
            !self.mmu.boot_active() || pc <= 0x08ff,
            "Invalid boot address: {:04x}",
            pc
        );

        // prefetch the pending interrupt flags so we can quickly check
        // if any enabled interrupt is waiting to be served. This is used
        // both to release the CPU from a halted state and to execute the
        // correct handler when IME is enabled.
        let pending = self.pending_interrupts();

        // in case the CPU execution halted and there's a pending interrupt,
        // release the CPU from the halted state so execution can continue
        // until the interrupt is serviced — this happens even when IME=0,
        // the HALT bug notwithstanding (§4.1)
        if self.halted && pending != 0 {
            self.halted = false;
        }

        // checks the IME (interrupt master enable) is enabled and then checks
        // if there's any interrupt to be handled, in case there's one, tries
        // to check which one should be handled and then handles it, in
        // priority order VBlank < STAT < Timer < Serial < Joypad (§4.1)
        if self.ime && pending != 0 {
            self.disable_int();
            self.push_word(pc);

            if pending & 0x01 == 0x01 {
                debugln!("Going to run V-Blank interrupt handler (0x40)");
                self.pc = 0x40;
                self.mmu.ppu().ack_vblank();
            } else if pending & 0x02 == 0x02 {
                debugln!("Going to run LCD STAT interrupt handler (0x48)");
                self.pc = 0x48;
                self.mmu.ppu().ack_stat();
            } else if pending & 0x04 == 0x04 {
                debugln!("Going to run Timer interrupt handler (0x50)");
                self.pc = 0x50;
                self.mmu.timer().ack_tima();
            } else if pending & 0x08 == 0x08 {
                debugln!("Going to run Serial interrupt handler (0x58)");
                self.pc = 0x58;
                self.mmu.serial().ack_serial();
            } else {
                debugln!("Going to run JoyPad interrupt handler (0x60)");
                self.pc = 0x60;
                self.mmu.pad().ack_pad();
            }

            return 20;
        }

        // in case the CPU is currently in the halted state
        // returns the control flow immediately with the associated
        // number of cycles estimated for the halted execution
        if self.halted {
            return 4;
        }

        // fetches the current instruction and updates the PC
        // (Program Counter) according to the final value returned
        // by the fetch operation (we may need to fetch instruction
        // more than one byte of length). The HALT bug suppresses the
        // PC advance across the opcode byte exactly once.
        let (inst, pc) = self.fetch(self.pc);
        self.ppc = self.pc;
        self.pc = pc;

        #[allow(unused_variables)]
        let (inst_fn, inst_time, inst_str) = inst;

        #[cfg(feature = "cpulog")]
        {
            println!("{}", self.description(inst, self.ppc));
        }

        // calls the current instruction and increments the number of
        // cycles executed by the instruction time of the instruction
        // that has just been executed
        self.cycles = 0;
        inst_fn(self);
        self.cycles = self.cycles.wrapping_add(*inst_time);

        // ages a delay that was already pending *before* this call's
        // instruction ran, and only if that instruction left it
        // untouched (DI/RETI cancel it outright, which must stick)
        if ime_pending_before == 1 && self.ime_pending == 1 {
            self.ime_pending = 2;
        }

        // returns the number of cycles that the operation
        // that has been executed has taken
        self.cycles
    }

    #[inline(always)]
    fn fetch(&mut self, pc: u16) -> (Instruction, u16) {
        let mut pc = pc;

        // fetches the current instruction; normally this advances the
        // PC (program counter), but the HALT bug (§4.1) suppresses
        // that single advance so the same byte is fetched again next
        // time, causing it to execute twice
        let mut opcode = self.mmu.read(pc);
        if self.halt_bug {
            self.halt_bug = false;
        } else {
            pc = pc.wrapping_add(1);
        }

        // checks if the current instruction is a prefix
        // instruction, in case it is, fetches the next
        // instruction and increments the PC accordingly
        let inst: Instruction;
        let is_prefix = opcode == PREFIX;
        if is_prefix {
            opcode = self.mmu.read(pc);
            pc = pc.wrapping_add(1);
            inst = &EXTENDED[opcode as usize];
        } else {
            inst = &INSTRUCTIONS[opcode as usize];
        }

        // returns both the fetched instruction and the
        // updated PC (Program Counter) value
        (inst, pc)
    }

    #[inline(always)]
    pub fn mmu(&mut self) -> &mut Mmu {
        &mut self.mmu
    }

    #[inline(always)]
    pub fn mmu_i(&self) -> &Mmu {
        &self.mmu
    }

    #[inline(always)]
    pub fn ppu(&mut self) -> &mut Ppu {
        self.mmu().ppu()
    }

    #[inline(always)]
    pub fn ppu_i(&self) -> &Ppu {
        self.mmu_i().ppu_i()
    }

    #[inline(always)]
    pub fn dma(&mut self) -> &mut Dma {
        self.mmu().dma()
    }

    #[inline(always)]
    pub fn dma_i(&self) -> &Dma {
        self.mmu_i().dma_i()
    }

    #[inline(always)]
    pub fn pad(&mut self) -> &mut Pad {
        self.mmu().pad()
    }

    #[inline(always)]
    pub fn pad_i(&self) -> &Pad {
        self.mmu_i().pad_i()
    }

    #[inline(always)]
    pub fn timer(&mut self) -> &mut Timer {
        self.mmu().timer()
    }

    #[inline(always)]
    pub fn timer_i(&self) -> &Timer {
        self.mmu_i().timer_i()
    }

    #[inline(always)]
    pub fn serial(&mut self) -> &mut Serial {
        self.mmu().serial()
    }

    #[inline(always)]
    pub fn serial_i(&self) -> &Serial {
        self.mmu_i().serial_i()
    }

    #[inline(always)]
    pub fn halted(&self) -> bool {
        self.halted
    }

    #[inline(always)]
    pub fn set_halted(&mut self, value: bool) {
        self.halted = value
    }

    #[inline(always)]
    pub fn locked(&self) -> bool {
        self.locked
    }

    #[inline(always)]
    pub fn cycles(&self) -> u8 {
        self.cycles
    }

    #[inline(always)]
    pub fn pc(&self) -> u16 {
        self.pc
    }

    #[inline(always)]
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    #[inline(always)]
    pub fn sp(&self) -> u16 {
        self.sp
    }

    #[inline(always)]
    pub fn set_sp(&mut self, value: u16) {
        self.sp = value;
    }

    #[inline(always)]
    pub fn af(&self) -> u16 {
        ((self.a as u16) << 8) | self.f() as u16
    }

    #[inline(always)]
    pub fn bc(&self) -> u16 {
        ((self.b as u16) << 8) | self.c as u16
    }

    #[inline(always)]
    pub fn f(&self) -> u8 {
        let mut f = 0x0u8;
        if self.zero {
            f |= 0x80;
        }
        if self.sub {
            f |= 0x40;
        }
        if self.half_carry {
            f |= 0x20;
        }
        if self.carry {
            f |= 0x10;
        }
        f
    }

    #[inline(always)]
    pub fn set_f(&mut self, value: u8) {
        self.zero = value & 0x80 == 0x80;
        self.sub = value & 0x40 == 0x40;
        self.half_carry = value & 0x20 == 0x20;
        self.carry = value & 0x10 == 0x10;
    }

    #[inline(always)]
    pub fn set_af(&mut self, value: u16) {
        self.a = (value >> 8) as u8;
        self.set_f(value as u8);
    }

    #[inline(always)]
    pub fn set_bc(&mut self, value: u16) {
        self.b = (value >> 8) as u8;
        self.c = value as u8;
    }

    #[inline(always)]
    pub fn de(&self) -> u16 {
        ((self.d as u16) << 8) | self.e as u16
    }

    #[inline(always)]
    pub fn set_de(&mut self, value: u16) {
        self.d = (value >> 8) as u8;
        self.e = value as u8;
    }

    #[inline(always)]
    pub fn hl(&self) -> u16 {
        ((self.h as u16) << 8) | self.l as u16
    }

    #[inline(always)]
    pub fn set_hl(&mut self, value: u16) {
        self.h = (value >> 8) as u8;
        self.l = value as u8;
    }

    #[inline(always)]
    pub fn ime(&self) -> bool {
        self.ime
    }

    #[inline(always)]
    pub fn set_ime(&mut self, value: bool) {
        self.ime = value;
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> u8 {
        let byte = self.mmu.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    #[inline(always)]
    pub fn read_u16(&mut self) -> u16 {
        let byte1 = self.read_u8();
        let byte2 = self.read_u8();

        byte1 as u16 | ((byte2 as u16) << 8)
    }

    #[inline(always)]
    pub fn push_byte(&mut self, byte: u8) {
        self.sp = self.sp.wrapping_sub(1);
        self.mmu.write(self.sp, byte);
    }

    #[inline(always)]
    pub fn push_word(&mut self, word: u16) {
        self.push_byte((word >> 8) as u8);
        self.push_byte(word as u8);
    }

    #[inline(always)]
    pub fn pop_byte(&mut self) -> u8 {
        let byte = self.mmu.read(self.sp);
        self.sp = self.sp.wrapping_add(1);
        byte
    }

    #[inline(always)]
    pub fn pop_word(&mut self) -> u16 {
        self.pop_byte() as u16 | ((self.pop_byte() as u16) << 8)
    }

    #[inline(always)]
    pub fn zero(&self) -> bool {
        self.zero
    }

    #[inline(always)]
    pub fn set_zero(&mut self, value: bool) {
        self.zero = value
    }

    #[inline(always)]
    pub fn sub(&self) -> bool {
        self.sub
    }

    #[inline(always)]
    pub fn set_sub(&mut self, value: bool) {
        self.sub = value;
    }

    #[inline(always)]
    pub fn half_carry(&self) -> bool {
        self.half_carry
    }

    #[inline(always)]
    pub fn set_half_carry(&mut self, value: bool) {
        self.half_carry = value
    }

    #[inline(always)]
    pub fn carry(&self) -> bool {
        self.carry
    }

    #[inline(always)]
    pub fn set_carry(&mut self, value: bool) {
        self.carry = value;
    }

    /// Executes the `HALT` opcode. Reproduces the HALT bug (§4.1): when
    /// IME is disabled and an interrupt is already pending, the CPU
    /// does not actually stop, and the next opcode fetch re-executes
    /// the byte following `HALT`.
    #[inline(always)]
    pub fn halt(&mut self) {
        if !self.ime && self.pending_interrupts() != 0 {
            self.halt_bug = true;
        } else {
            self.halted = true;
        }
    }

    /// Executes the `STOP` opcode. On CGB, if a speed switch was armed
    /// by a prior `KEY1` write, performs it here; the minimal contract
    /// otherwise (§5, §9) is to behave like `HALT`.
    #[inline(always)]
    pub fn stop(&mut self) {
        let mmu = self.mmu();
        if mmu.switching {
            mmu.switch_speed();
        }
        self.halted = true;
    }

    /// Executes the `EI` opcode: arms the staged EI delay rather than
    /// setting `ime` directly (§4.1).
    #[inline(always)]
    pub fn enable_int(&mut self) {
        if self.ime_pending == 0 {
            self.ime_pending = 1;
        }
    }

    /// Executes the `DI` opcode: clears `ime` immediately and cancels
    /// any EI delay still in flight (§4.1).
    #[inline(always)]
    pub fn disable_int(&mut self) {
        self.ime = false;
        self.ime_pending = 0;
    }

    /// Executes the `RETI` opcode: enables `ime` immediately, with no
    /// delay (§4.1).
    #[inline(always)]
    pub fn enable_int_immediate(&mut self) {
        self.ime = true;
        self.ime_pending = 0;
    }

    /// Called by the `illegal` instruction handler: locks the CPU per
    /// §7 instead of panicking.
    #[inline(always)]
    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn set_gbc(&mut self, value: SharedThread<GameBoyConfig>) {
        self.gbc = value;
    }

    pub fn description(&self, inst: Instruction, inst_pc: u16) -> String {
        let (_, inst_time, inst_str) = inst;
        let title_str: String = format!("[0x{inst_pc:04x}] {inst_str}");
        let inst_time_str = format!("({inst_time} cycles)");
        let registers_str = format!("[PC=0x{:04x} SP=0x{:04x}] [A=0x{:02x} B=0x{:02x} C=0x{:02x} D=0x{:02x} E=0x{:02x} H=0x{:02x} L=0x{:02x}]",
        self.pc, self.sp, self.a, self.b, self.c, self.d, self.e, self.h, self.l);
        format!("{title_str: <24} {inst_time_str: <11} {registers_str: <10}")
    }

    pub fn description_default(&mut self) -> String {
        let (inst, _) = self.fetch(self.ppc);
        self.description(inst, self.ppc)
    }
}

impl Default for Cpu {
    fn default() -> Self {
        let gbc = SharedThread::new(Mutex::new(GameBoyConfig::default()));
        Cpu::new(Mmu::default(), gbc)
    }
}

impl Display for Cpu {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (inst, _) = self.fetch(self.ppc);
        write!(f, "{}", self.description(inst, self.ppc))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        consts::{IE_ADDR, IF_ADDR},
        mmu::Mmu,
    };

    use super::Cpu;

    fn booted_cpu() -> Cpu {
        let mut cpu = Cpu::default();
        cpu.mmu.allocate_default();
        cpu.boot();
        cpu
    }

    #[test]
    fn test_cpu_clock() {
        let mut cpu = booted_cpu();

        // test NOP instruction
        cpu.pc = 0xc000;
        cpu.mmu.write(0xc000, 0x00);
        let cycles = cpu.clock();
        assert_eq!(cycles, 4);
        assert_eq!(cpu.pc, 0xc001);

        // test LD A, d8 instruction
        cpu.pc = 0xc000;
        cpu.mmu.write(0xc000, 0x3e);
        cpu.mmu.write(0xc001, 0x42);
        let cycles = cpu.clock();
        assert_eq!(cycles, 8);
        assert_eq!(cpu.pc, 0xc002);
        assert_eq!(cpu.a, 0x42);

        // test LD (HL+), A instruction
        cpu.pc = 0xc000;
        cpu.mmu.write(0xc000, 0x22);
        cpu.set_hl(0xc000);
        let cycles = cpu.clock();
        assert_eq!(cycles, 8);
        assert_eq!(cpu.pc, 0xc001);
        assert_eq!(cpu.hl(), 0xc001);
        assert_eq!(cpu.mmu.read(cpu.hl()), 0x42);

        // test INC A instruction
        cpu.pc = 0xc000;
        cpu.mmu.write(0xc000, 0x3c);
        cpu.a = 0x42;
        let cycles = cpu.clock();
        assert_eq!(cycles, 4);
        assert_eq!(cpu.pc, 0xc001);
        assert_eq!(cpu.a, 0x43);
    }

    #[test]
    fn test_f_low_nibble_always_zero() {
        let mut cpu = Cpu::default();
        cpu.set_f(0xff);
        assert_eq!(cpu.f() & 0x0f, 0x00);
        cpu.set_af(0x12ff);
        assert_eq!(cpu.af() & 0x000f, 0x0000);
    }

    #[test]
    fn test_ei_delay_ei_di_leaves_ime_disabled() {
        let mut cpu = booted_cpu();
        cpu.pc = 0xc000;
        // EI; DI
        cpu.mmu.write(0xc000, 0xfb);
        cpu.mmu.write(0xc001, 0xf3);
        cpu.clock(); // executes EI
        assert!(!cpu.ime());
        cpu.clock(); // executes DI, cancels the pending enable
        assert!(!cpu.ime());
    }

    #[test]
    fn test_ei_delay_takes_effect_after_next_instruction() {
        let mut cpu = booted_cpu();
        cpu.pc = 0xc000;
        // EI; NOP; NOP
        cpu.mmu.write(0xc000, 0xfb);
        cpu.mmu.write(0xc001, 0x00);
        cpu.mmu.write(0xc002, 0x00);
        cpu.clock(); // EI executes, IME not yet visible
        assert!(!cpu.ime());
        cpu.clock(); // the instruction right after EI executes
        assert!(!cpu.ime());
        cpu.clock(); // only now does IME become visible
        assert!(cpu.ime());
    }

    #[test]
    fn test_halt_bug_executes_following_byte_twice() {
        let mut cpu = booted_cpu();
        cpu.set_ime(false);
        cpu.mmu.write(IE_ADDR, 0x01);
        cpu.mmu.write(IF_ADDR, 0x01);
        cpu.pc = 0xc000;
        cpu.mmu.write(0xc000, 0x76); // HALT
        cpu.mmu.write(0xc001, 0x3c); // INC A
        cpu.a = 0x00;

        cpu.clock(); // HALT triggers the bug instead of halting
        assert!(!cpu.halted());
        assert_eq!(cpu.pc, 0xc001);

        cpu.clock(); // INC A executes once, PC does not advance past it
        assert_eq!(cpu.a, 0x01);
        assert_eq!(cpu.pc, 0xc001);

        cpu.clock(); // INC A executes a second time, PC now advances normally
        assert_eq!(cpu.a, 0x02);
        assert_eq!(cpu.pc, 0xc002);
    }

    #[test]
    fn test_halt_without_pending_interrupt_actually_halts() {
        let mut cpu = booted_cpu();
        cpu.set_ime(true);
        cpu.mmu.write(IE_ADDR, 0x00);
        cpu.pc = 0xc000;
        cpu.mmu.write(0xc000, 0x76); // HALT
        cpu.clock();
        assert!(cpu.halted());
    }

    #[test]
    fn test_illegal_opcode_locks_cpu() {
        let mut cpu = booted_cpu();
        cpu.pc = 0xc000;
        cpu.mmu.write(0xc000, 0xd3); // undefined opcode
        cpu.clock();
        assert!(cpu.locked());
        let pc_after_lock = cpu.pc;
        cpu.clock();
        assert_eq!(cpu.pc, pc_after_lock);
    }

    #[test]
    fn test_push_pop_round_trip() {
        let mut cpu = booted_cpu();
        cpu.set_bc(0x1234);
        cpu.sp = 0xd000;
        cpu.push_word(cpu.bc());
        cpu.set_bc(0x0000);
        let value = cpu.pop_word();
        cpu.set_bc(value);
        assert_eq!(cpu.bc(), 0x1234);
    }
}
