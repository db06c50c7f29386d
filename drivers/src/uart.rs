/*++

Licensed under the Apache-2.0 license.

File Name:

    uart.rs

Abstract:

    File contains API for accessing the Murax/Briey UART

References:
    https://os.phil-opp.com/vga-text-mode for output functionality.

--*/

use core::fmt;

/// UART register block base address
const UART_BASE: usize = 0xF001_0000;

/// Data register: a write pushes one byte into the TX FIFO
const UART_DATA: *mut u32 = UART_BASE as *mut u32;

/// Status register: bits 16..24 hold the free space of the TX FIFO
const UART_STATUS: *const u32 = (UART_BASE + 0x04) as *const u32;

/// VexRiscv SoC UART
#[derive(Default, Debug)]
pub struct Uart {}

impl Uart {
    /// Create an instance of the UART
    pub fn new() -> Self {
        Self {}
    }

    /// Write the string to UART
    ///
    /// # Arguments
    ///
    /// `str` - String to write to UART
    pub fn write(&mut self, str: &str) {
        for byte in str.bytes() {
            match byte {
                0x20..=0x7e | b'\r' | b'\n' | b'\t' => self.write_byte(byte),
                _ => self.write_byte(0xfe),
            }
        }
    }

    /// Write the byte to UART
    ///
    /// # Arguments
    ///
    /// `byte` - Byte to write to UART
    pub fn write_byte(&mut self, byte: u8) {
        crate::wait::until(|| Self::tx_availability() > 0);
        // SAFETY: UART_DATA is the memory mapped data register of the SoC UART.
        unsafe { core::ptr::write_volatile(UART_DATA, byte as u32) };
    }

    fn tx_availability() -> u32 {
        // SAFETY: UART_STATUS is the memory mapped status register of the SoC UART.
        let status = unsafe { core::ptr::read_volatile(UART_STATUS) };
        (status >> 16) & 0xff
    }
}

impl fmt::Write for Uart {
    /// Writes a [`char`] into this writer, returning whether the write succeeded.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write(s);
        Ok(())
    }
}
