/*++

Licensed under the Apache-2.0 license.

File Name:

    sm4_kat.rs

Abstract:

    File contains the Known Answer Tests (KAT) for SM4 cryptography operations.

--*/

use vexcrypto_drivers::{
    Sm4, Sm4Block, Sm4Isa, Sm4Key, Sm4Mode, VexCryptoError, VexCryptoResult,
};

// GB/T 32907-2016 Appendix A, example 1
const KEY: Sm4Key = [
    0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54, 0x32, 0x10,
];
const PT: Sm4Block = KEY;
const CT: Sm4Block = [
    0x68, 0x1e, 0xdf, 0x34, 0xd2, 0x06, 0x96, 0x5e, 0x86, 0xb3, 0xe9, 0x4f, 0x53, 0x6e, 0x42, 0x46,
];

#[derive(Default, Debug)]
pub struct Sm4Kat {}

impl Sm4Kat {
    /// This function executes the Known Answer Tests (aka KAT) for SM4.
    ///
    /// # Arguments
    ///
    /// * `sm4` - SM4 driver
    ///
    /// # Returns
    ///
    /// * `VexCryptoResult` - Result denoting the KAT outcome.
    pub fn execute<I: Sm4Isa>(&self, sm4: &mut Sm4<I>) -> VexCryptoResult<()> {
        self.encrypt_decrypt(sm4)
    }

    fn encrypt_decrypt<I: Sm4Isa>(&self, sm4: &mut Sm4<I>) -> VexCryptoResult<()> {
        let rk = sm4.set_key(&KEY, Sm4Mode::Encrypt);
        if sm4.crypt_block(&PT, &rk) != CT {
            Err(VexCryptoError::KAT_SM4_CIPHERTEXT_MISMATCH)?;
        }

        let rk = sm4.set_key(&KEY, Sm4Mode::Decrypt);
        if sm4.crypt_block(&CT, &rk) != PT {
            Err(VexCryptoError::KAT_SM4_PLAINTEXT_MISMATCH)?;
        }

        Ok(())
    }
}
