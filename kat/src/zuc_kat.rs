/*++

Licensed under the Apache-2.0 license.

File Name:

    zuc_kat.rs

Abstract:

    File contains the Known Answer Tests (KAT) for ZUC keystream generation.

--*/

use vexcrypto_drivers::{VexCryptoError, VexCryptoResult, Zuc, ZucIsa, ZucIv, ZucKey};

struct ZucVector {
    key: ZucKey,
    iv: ZucIv,
    keystream: [u32; 2],
}

// ZUC specification v1.6, test sets 1-3
const VECTORS: [ZucVector; 3] = [
    ZucVector {
        key: [0x00; 16],
        iv: [0x00; 16],
        keystream: [0x27bede74, 0x018082da],
    },
    ZucVector {
        key: [0xff; 16],
        iv: [0xff; 16],
        keystream: [0x0657cfa0, 0x7096398b],
    },
    ZucVector {
        key: [
            0x3d, 0x4c, 0x4b, 0xe9, 0x6a, 0x82, 0xfd, 0xae, 0xb5, 0x8f, 0x64, 0x1d, 0xb1, 0x7b,
            0x45, 0x5b,
        ],
        iv: [
            0x84, 0x31, 0x9a, 0xa8, 0xde, 0x69, 0x15, 0xca, 0x1f, 0x6b, 0xda, 0x6b, 0xfb, 0xd8,
            0xc7, 0x66,
        ],
        keystream: [0x14f1c272, 0x3279c419],
    },
];

#[derive(Default, Debug)]
pub struct ZucKat {}

impl ZucKat {
    /// This function executes the Known Answer Tests (aka KAT) for ZUC.
    ///
    /// # Arguments
    ///
    /// * `zuc` - ZUC driver
    ///
    /// # Returns
    ///
    /// * `VexCryptoResult` - Result denoting the KAT outcome.
    pub fn execute<I: ZucIsa>(&self, zuc: &mut Zuc<I>) -> VexCryptoResult<()> {
        for vector in VECTORS.iter() {
            self.keystream(zuc, vector)?;
        }
        Ok(())
    }

    fn keystream<I: ZucIsa>(&self, zuc: &mut Zuc<I>, vector: &ZucVector) -> VexCryptoResult<()> {
        zuc.start(&vector.key, &vector.iv)?;
        for &expected in vector.keystream.iter() {
            if zuc.next_word()? != expected {
                Err(VexCryptoError::KAT_ZUC_KEYSTREAM_MISMATCH)?;
            }
        }
        Ok(())
    }
}
