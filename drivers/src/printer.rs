/*++

Licensed under the Apache-2.0 license.

File Name:

    printer.rs

Abstract:

    File contains support routines and macros to print to UART

--*/
use core::convert::Infallible;
use ufmt::{uDisplay, uWrite};

/// Line terminator expected by the serial console
pub const EOL: &str = "\r\n";

#[derive(Default)]
pub struct Printer;

impl uWrite for Printer {
    type Error = Infallible;

    /// Writes a string slice into this writer, returning whether the write succeeded.
    #[cfg(not(feature = "std"))]
    #[inline(never)]
    fn write_str(&mut self, _str: &str) -> Result<(), Self::Error> {
        #[cfg(target_arch = "riscv32")]
        crate::Uart::default().write(_str);
        Ok(())
    }

    /// Writes a string slice into this writer, returning whether the write succeeded.
    #[cfg(feature = "std")]
    fn write_str(&mut self, str: &str) -> Result<(), Self::Error> {
        print!("{str}");
        Ok(())
    }
}

#[macro_export]
macro_rules! cprint {
    ($($tt:tt)*) => {{
        let _ = ufmt::uwrite!(&mut $crate::printer::Printer::default(), $($tt)*);
    }}
}

/// Like [`cprint!`], terminating the line with `\r\n`
#[macro_export]
macro_rules! cprintln {
    () => {{
        $crate::cprint!("{}", $crate::printer::EOL);
    }};
    ($($tt:tt)*) => {{
        $crate::cprint!($($tt)*);
        $crate::cprint!("{}", $crate::printer::EOL);
    }};
}

/// Lowercase hex rendering of a byte slice
pub struct HexBytes<'a>(pub &'a [u8]);
impl uDisplay for HexBytes<'_> {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        for &x in self.0.iter() {
            f.write_char(hex_digit(x >> 4))?;
            f.write_char(hex_digit(x & 0xf))?;
        }
        Ok(())
    }
}

/// Eight-digit lowercase hex rendering of a word
pub struct HexWord(pub u32);
impl uDisplay for HexWord {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        uDisplay::fmt(&HexBytes(&self.0.to_be_bytes()), f)
    }
}

/// String right-aligned in a field of the given width
pub struct RightAlign<'a>(pub &'a str, pub usize);
impl uDisplay for RightAlign<'_> {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        for _ in self.0.len()..self.1 {
            f.write_char(' ')?;
        }
        f.write_str(self.0)
    }
}

fn hex_digit(nibble: u8) -> char {
    match nibble {
        0..=9 => (nibble + b'0') as char,
        _ => (nibble - 10 + b'a') as char,
    }
}

/// Write `prefix: <hex>` with the prefix right-aligned to 8 columns.
///
/// # Arguments
///
/// * `w` - Destination writer
/// * `prefix` - Label printed before the colon
/// * `buf` - Bytes to render in hex
pub fn format_buffer<W: uWrite + ?Sized>(
    w: &mut W,
    prefix: &str,
    buf: &[u8],
) -> Result<(), W::Error> {
    ufmt::uwrite!(w, "{}: {}{}", RightAlign(prefix, 8), HexBytes(buf), EOL)
}

/// Print `prefix: <hex>` to the console
pub fn print_buffer(prefix: &str, buf: &[u8]) {
    let _ = format_buffer(&mut Printer, prefix, buf);
}
