/*++

Licensed under the Apache-2.0 license.

File Name:

    zuc.rs

Abstract:

    File contains API for ZUC keystream generation on the ZUC plugin.

--*/

use crate::array::LEArray4x4;
use crate::isa::{ZucIsa, ZucSlot};
use vexcrypto_error::{VexCryptoError, VexCryptoResult};

pub const ZUC_KEY_SIZE: usize = 16;
pub const ZUC_IV_SIZE: usize = 16;

/// Number of `zucinit` clocks before the first keystream word
pub const ZUC_INIT_ROUNDS: usize = 32;

/// Words produced by one [`Zuc::keystream_burst`]
pub const ZUC_BURST_WORDS: usize = 32;

pub type ZucKey = [u8; ZUC_KEY_SIZE];
pub type ZucIv = [u8; ZUC_IV_SIZE];

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum ZucState {
    Idle,
    Loaded,
    Ready,
}

/// ZUC driver
pub struct Zuc<I> {
    isa: I,
    state: ZucState,
}

impl<I: ZucIsa> Zuc<I> {
    pub fn new(isa: I) -> Self {
        Self {
            isa,
            state: ZucState::Idle,
        }
    }

    /// Release the backend
    pub fn into_inner(self) -> I {
        self.isa
    }

    /// Load the key and IV into the LFSR with four `zucset` instructions.
    ///
    /// # Arguments
    ///
    /// * `key` - Cipher key
    /// * `iv` - Initialization vector
    pub fn set(&mut self, key: &ZucKey, iv: &ZucIv) {
        let key = LEArray4x4::from(key);
        let iv = LEArray4x4::from(iv);
        for slot in ZucSlot::ALL {
            let i = slot as usize;
            self.isa.zucset(key.0[i], iv.0[i], slot);
        }
        self.state = ZucState::Loaded;
    }

    /// Run the initialization clocks and discard the first working word.
    ///
    /// Requires a freshly loaded key and IV; a running generator must be
    /// reloaded with [`Zuc::set`] first.
    pub fn init(&mut self) -> VexCryptoResult<()> {
        if self.state != ZucState::Loaded {
            return Err(VexCryptoError::DRIVER_ZUC_NOT_LOADED);
        }
        for _ in 0..ZUC_INIT_ROUNDS {
            self.isa.zucinit();
        }
        self.isa.zucwork();
        self.isa.bubble();
        self.state = ZucState::Ready;
        Ok(())
    }

    /// Load a key and IV and initialize the generator.
    ///
    /// # Arguments
    ///
    /// * `key` - Cipher key
    /// * `iv` - Initialization vector
    pub fn start(&mut self, key: &ZucKey, iv: &ZucIv) -> VexCryptoResult<()> {
        self.set(key, iv);
        self.init()
    }

    /// Clock out one keystream word as returned by `zucwork` (byte-swapped).
    pub fn work(&mut self) -> VexCryptoResult<u32> {
        self.check_ready()?;
        Ok(self.isa.zucwork())
    }

    /// Clock out one keystream word in standard order.
    pub fn next_word(&mut self) -> VexCryptoResult<u32> {
        Ok(self.work()?.swap_bytes())
    }

    /// Fill `out` with raw keystream words.
    pub fn keystream(&mut self, out: &mut [u32]) -> VexCryptoResult<()> {
        self.check_ready()?;
        for word in out.iter_mut() {
            *word = self.isa.zucwork();
        }
        Ok(())
    }

    /// Fill `out` with 32 raw keystream words using back-to-back `zucwork`
    /// issues.
    ///
    /// Each group of eight alternates between two results so the store of one
    /// word trails the issue of the next.
    pub fn keystream_burst(&mut self, out: &mut [u32; ZUC_BURST_WORDS]) -> VexCryptoResult<()> {
        self.check_ready()?;
        for group in out.chunks_exact_mut(8) {
            let mut rd1 = self.isa.zucwork();
            self.isa.bubble();
            let mut rd2 = self.isa.zucwork();
            for pair in group[..6].chunks_exact_mut(2) {
                pair[0] = rd1;
                rd1 = self.isa.zucwork();
                pair[1] = rd2;
                rd2 = self.isa.zucwork();
            }
            group[6] = rd1;
            group[7] = rd2;
        }
        Ok(())
    }

    /// XOR the keystream into `data`.
    ///
    /// Raw words are stored little-endian, which lays out the keystream in
    /// stream order. A trailing partial word still consumes one full word.
    pub fn apply_keystream(&mut self, data: &mut [u8]) -> VexCryptoResult<()> {
        self.check_ready()?;
        for chunk in data.chunks_mut(4) {
            let ks = self.isa.zucwork().to_le_bytes();
            for (byte, k) in chunk.iter_mut().zip(ks.iter()) {
                *byte ^= k;
            }
        }
        Ok(())
    }

    fn check_ready(&self) -> VexCryptoResult<()> {
        if self.state != ZucState::Ready {
            return Err(VexCryptoError::DRIVER_ZUC_NOT_INITIALIZED);
        }
        Ok(())
    }
}
