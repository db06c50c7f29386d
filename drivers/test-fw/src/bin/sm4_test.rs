/*++

Licensed under the Apache-2.0 license.

File Name:

    sm4_test.rs

Abstract:

    File contains the SM4 block conformance test. Prints the plaintext, key
    and result, then whether the result matched the reference ciphertext.

--*/

#![no_std]
#![no_main]

use vexcrypto_drivers::printer::Printer;
use vexcrypto_drivers::{cprintln, ExitCtrl, Sm4, Sm4Mode, VexRiscv};
use vexcrypto_drivers_test_bin::{
    sm4_report, DONE, SM4_BANNER, SM4_TEST_CIPHERTEXT, SM4_TEST_KEY, SM4_TEST_PLAINTEXT,
};
// Needed to bring in startup code
#[allow(unused)]
use vexcrypto_test_harness;

#[panic_handler]
pub fn panic(_info: &core::panic::PanicInfo) -> ! {
    ExitCtrl::halt()
}

#[no_mangle]
pub extern "C" fn entry_point() -> ! {
    cprintln!("{}", SM4_BANNER);

    let mut sm4 = Sm4::new(VexRiscv::new());
    let rk = sm4.set_key(&SM4_TEST_KEY, Sm4Mode::Encrypt);
    let result = sm4.crypt_block(&SM4_TEST_PLAINTEXT, &rk);

    let _ = sm4_report(
        &mut Printer,
        &SM4_TEST_PLAINTEXT,
        &SM4_TEST_KEY,
        &result,
        &SM4_TEST_CIPHERTEXT,
    );

    cprintln!("{}", DONE);
    ExitCtrl::halt()
}
