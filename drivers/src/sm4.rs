/*++

Licensed under the Apache-2.0 license.

File Name:

    sm4.rs

Abstract:

    File contains API for SM4 block cipher operations on the SM4 plugin.

--*/

use crate::array::{LEArray4x32, LEArray4x4};
use crate::isa::Sm4Isa;
use vexcrypto_error::{VexCryptoError, VexCryptoResult};

pub const SM4_BLOCK_SIZE: usize = 16;
pub const SM4_KEY_SIZE: usize = 16;
pub const SM4_ROUNDS: usize = 32;

pub type Sm4Key = [u8; SM4_KEY_SIZE];
pub type Sm4Block = [u8; SM4_BLOCK_SIZE];

/// Round keys `rk(0)..rk(31)`, in the order they are consumed
pub type Sm4KeySchedule = LEArray4x32;

// FK and CK in the little-endian word order of the plugin
const FK: [u32; 4] = [0xc6bab1a3, 0x5033aa56, 0x97917d67, 0xdc2270b2];

#[cfg_attr(rustfmt, rustfmt_skip)]
const CK: [u32; SM4_ROUNDS] = [
    0x150e0700, 0x312a231c, 0x4d463f38, 0x69625b54,
    0x857e7770, 0xa19a938c, 0xbdb6afa8, 0xd9d2cbc4,
    0xf5eee7e0, 0x110a03fc, 0x2d261f18, 0x49423b34,
    0x655e5750, 0x817a736c, 0x9d968f88, 0xb9b2aba4,
    0xd5cec7c0, 0xf1eae3dc, 0x0d06fff8, 0x29221b14,
    0x453e3730, 0x615a534c, 0x7d766f68, 0x99928b84,
    0xb5aea7a0, 0xd1cac3bc, 0xede6dfd8, 0x0902fbf4,
    0x251e1710, 0x413a332c, 0x5d564f48, 0x79726b64,
];

/// Direction a key schedule is generated for
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u32)]
pub enum Sm4Mode {
    Encrypt = 0,
    Decrypt = 1,
}

impl TryFrom<u32> for Sm4Mode {
    type Error = VexCryptoError;

    fn try_from(val: u32) -> VexCryptoResult<Self> {
        match val {
            0 => Ok(Sm4Mode::Encrypt),
            1 => Ok(Sm4Mode::Decrypt),
            _ => Err(VexCryptoError::DRIVER_SM4_INVALID_MODE),
        }
    }
}

/// SM4 driver
pub struct Sm4<I> {
    isa: I,
}

impl<I: Sm4Isa> Sm4<I> {
    pub fn new(isa: I) -> Self {
        Self { isa }
    }

    /// Release the backend
    pub fn into_inner(self) -> I {
        self.isa
    }

    /// Expand a key into round keys with 32 `sm4ks` instructions.
    ///
    /// # Arguments
    ///
    /// * `key` - Cipher key
    /// * `mode` - Encrypt keeps the schedule order, decrypt reverses it
    ///
    /// # Returns
    ///
    /// * `Sm4KeySchedule` - Round keys
    pub fn set_key(&mut self, key: &Sm4Key, mode: Sm4Mode) -> Sm4KeySchedule {
        let mk = LEArray4x4::from(key);
        let mut k = [0u32; SM4_ROUNDS + 4];

        for i in 0..4 {
            k[i] = mk.0[i] ^ FK[i];
        }

        for i in 0..SM4_ROUNDS {
            k[i + 4] = self
                .isa
                .sm4ks(k[i], k[i + 1] ^ k[i + 2] ^ k[i + 3] ^ CK[i]);
        }

        let mut rk = Sm4KeySchedule::default();
        match mode {
            Sm4Mode::Encrypt => rk.0.copy_from_slice(&k[4..]),
            Sm4Mode::Decrypt => {
                for (i, word) in rk.0.iter_mut().enumerate() {
                    *word = k[SM4_ROUNDS + 3 - i];
                }
            }
        }
        rk
    }

    /// Run one block through the 32 rounds with `sm4ed`.
    ///
    /// Encryption and decryption differ only in the key schedule passed in.
    ///
    /// # Arguments
    ///
    /// * `input` - Input block
    /// * `rk` - Round keys from [`Sm4::set_key`]
    ///
    /// # Returns
    ///
    /// * `Sm4Block` - Output block
    pub fn crypt_block(&mut self, input: &Sm4Block, rk: &Sm4KeySchedule) -> Sm4Block {
        let [mut x0, mut x1, mut x2, mut x3] = LEArray4x4::from(input).0;

        for rk in rk.0.chunks_exact(4) {
            x0 = self.isa.sm4ed(x0, x1 ^ x2 ^ x3 ^ rk[0]);
            x1 = self.isa.sm4ed(x1, x2 ^ x3 ^ x0 ^ rk[1]);
            x2 = self.isa.sm4ed(x2, x3 ^ x0 ^ x1 ^ rk[2]);
            x3 = self.isa.sm4ed(x3, x0 ^ x1 ^ x2 ^ rk[3]);
        }

        LEArray4x4::new([x3, x2, x1, x0]).into()
    }

    /// Run each 16-byte block of `input` through [`Sm4::crypt_block`].
    ///
    /// # Arguments
    ///
    /// * `rk` - Round keys from [`Sm4::set_key`]
    /// * `input` - Input data, a whole number of blocks
    /// * `output` - Output buffer, at least as long as `input`
    pub fn crypt_ecb(
        &mut self,
        rk: &Sm4KeySchedule,
        input: &[u8],
        output: &mut [u8],
    ) -> VexCryptoResult<()> {
        if input.len() % SM4_BLOCK_SIZE != 0 {
            return Err(VexCryptoError::DRIVER_SM4_INVALID_DATA_LEN);
        }
        if output.len() < input.len() {
            return Err(VexCryptoError::DRIVER_SM4_OUTPUT_TOO_SMALL);
        }

        for (src, dst) in input
            .chunks_exact(SM4_BLOCK_SIZE)
            .zip(output.chunks_exact_mut(SM4_BLOCK_SIZE))
        {
            let block = <&Sm4Block>::try_from(src)
                .map_err(|_| VexCryptoError::DRIVER_SM4_INVALID_SLICE)?;
            dst.copy_from_slice(&self.crypt_block(block, rk));
        }
        Ok(())
    }
}
