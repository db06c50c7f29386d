/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains Macros and API for the VexRiscv firmware Test Harness

References:
    https://os.phil-opp.com/vga-text-mode for print functionality.

--*/
#![no_std]

use core::fmt;
use core::format_args;
use core::ops::Fn;

#[cfg(feature = "riscv")]
core::arch::global_asm!(include_str!("start.S"));

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ($crate::_print(format_args!($($arg)*)));
}

#[macro_export]
macro_rules! println {
    () => ($crate::print!("\r\n"));
    ($($arg:tt)*) => ($crate::print!("{}\r\n", format_args!($($arg)*)));
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    cfg_if::cfg_if! {
        if #[cfg(feature = "riscv")] {
            use vexcrypto_drivers::Uart;
            use core::fmt::Write;
            let _ = Uart::new().write_fmt(args);
        }
        else {
            let _ = args;
        }
    }
}

#[macro_export]
macro_rules! test_suite {
    ($($test_case: ident,)*) => {
        use core::panic::PanicInfo;
        use vexcrypto_test_harness::{println, Testable};

        #[panic_handler]
        pub fn panic(info: &PanicInfo) -> ! {
            println!("[failed]");
            println!("Error: {}", info);
            vexcrypto_drivers::ExitCtrl::halt();
        }

        #[no_mangle]
        pub extern "C" fn main() {
            $(
                $test_case.run();
            )*
        }

        #[no_mangle]
        pub extern "C" fn entry_point() -> ! {
            main();
            println!("DONE");
            vexcrypto_drivers::ExitCtrl::halt();
        }
    };
}

pub trait Testable {
    fn run(&self);
}

impl<T> Testable for T
where
    T: Fn(),
{
    fn run(&self) {
        print!("{}...\t", core::any::type_name::<T>());
        self();
        println!("[ok]");
    }
}
