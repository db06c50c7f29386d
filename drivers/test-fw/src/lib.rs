// Licensed under the Apache-2.0 license

#![cfg_attr(not(test), no_std)]

//! Code shared between the host emulator (running the software model) and the
//! test binaries (running on the VexRiscv SoC).

use ufmt::uWrite;
use vexcrypto_drivers::printer::{format_buffer, HexWord, EOL};
use vexcrypto_drivers::{
    Sm4Block, Sm4Key, VexCryptoResult, Zuc, ZucIsa, ZucIv, ZucKey,
};

pub const SM4_BANNER: &str = "Welcome SM4 Test!";
pub const ZUC_BANNER: &str = "TEST FOR ZUC";
pub const DONE: &str = "DONE";

pub const SM4_TEST_KEY: Sm4Key = [
    0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54, 0x32, 0x10,
];

pub const SM4_TEST_PLAINTEXT: Sm4Block = SM4_TEST_KEY;

pub const SM4_TEST_CIPHERTEXT: Sm4Block = [
    0x68, 0x1e, 0xdf, 0x34, 0xd2, 0x06, 0x96, 0x5e, 0x86, 0xb3, 0xe9, 0x4f, 0x53, 0x6e, 0x42, 0x46,
];

pub struct ZucTestVector {
    pub key: ZucKey,
    pub iv: ZucIv,
    pub keystream: [u32; 2],
}

pub const ZUC_TEST_VECTORS: [ZucTestVector; 3] = [
    ZucTestVector {
        key: [0x00; 16],
        iv: [0x00; 16],
        keystream: [0x27bede74, 0x018082da],
    },
    ZucTestVector {
        key: [0xff; 16],
        iv: [0xff; 16],
        keystream: [0x0657cfa0, 0x7096398b],
    },
    ZucTestVector {
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

/// Key/IV reloads performed by the burst benchmark
pub const ZUC_BURST_ITERATIONS: usize = 100_000;

/// 32-word bursts generated after each reload
pub const ZUC_BURSTS_PER_KEY: usize = 64;

fn verdict<W: uWrite + ?Sized>(w: &mut W, matched: bool) -> Result<bool, W::Error> {
    w.write_str(if matched { "Matched!" } else { "Mismatch!" })?;
    w.write_str(EOL)?;
    Ok(matched)
}

/// Print the SM4 block test report.
///
/// # Returns
///
/// * `bool` - Whether `result` equals `expected`
pub fn sm4_report<W: uWrite + ?Sized>(
    w: &mut W,
    plain: &[u8],
    key: &[u8],
    result: &[u8],
    expected: &[u8],
) -> Result<bool, W::Error> {
    format_buffer(w, "Plain", plain)?;
    format_buffer(w, "Key", key)?;
    format_buffer(w, "Result", result)?;
    verdict(w, result == expected)
}

/// Print ZUC keystream words, one per line, followed by the verdict.
///
/// # Returns
///
/// * `bool` - Whether `words` equals `expected`
pub fn zuc_report<W: uWrite + ?Sized>(
    w: &mut W,
    words: &[u32],
    expected: &[u32],
) -> Result<bool, W::Error> {
    for &word in words {
        ufmt::uwrite!(w, "{}{}", HexWord(word), EOL)?;
    }
    verdict(w, words == expected)
}

/// Generate the first two keystream words for `vector`.
pub fn zuc_vector_words<I: ZucIsa>(
    zuc: &mut Zuc<I>,
    vector: &ZucTestVector,
) -> VexCryptoResult<[u32; 2]> {
    zuc.start(&vector.key, &vector.iv)?;
    Ok([zuc.next_word()?, zuc.next_word()?])
}

/// Print the report for one ZUC vector, or the driver error code if the
/// keystream could not be generated.
///
/// # Returns
///
/// * `bool` - Whether the keystream was generated and matched
pub fn zuc_vector_report<W: uWrite + ?Sized>(
    w: &mut W,
    words: VexCryptoResult<[u32; 2]>,
    vector: &ZucTestVector,
) -> Result<bool, W::Error> {
    match words {
        Ok(words) => zuc_report(w, &words, &vector.keystream),
        Err(err) => {
            ufmt::uwrite!(w, "ZUC error: {}{}", HexWord(u32::from(err)), EOL)?;
            verdict(w, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use vexcrypto_drivers::{Sm4, Sm4Mode, SwModel, VexCryptoError};

    #[derive(Default)]
    struct Console(String);

    impl uWrite for Console {
        type Error = Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
            self.0.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn test_sm4_report() {
        let mut sm4 = Sm4::new(SwModel::new());
        let rk = sm4.set_key(&SM4_TEST_KEY, Sm4Mode::Encrypt);
        let result = sm4.crypt_block(&SM4_TEST_PLAINTEXT, &rk);

        let mut out = Console::default();
        let matched = sm4_report(
            &mut out,
            &SM4_TEST_PLAINTEXT,
            &SM4_TEST_KEY,
            &result,
            &SM4_TEST_CIPHERTEXT,
        );
        assert_eq!(matched, Ok(true));
        assert_eq!(
            out.0,
            "   Plain: 0123456789abcdeffedcba9876543210\r\n\
             \x20    Key: 0123456789abcdeffedcba9876543210\r\n\
             \x20 Result: 681edf34d206965e86b3e94f536e4246\r\n\
             Matched!\r\n"
        );
    }

    #[test]
    fn test_sm4_report_mismatch() {
        let mut out = Console::default();
        let matched = sm4_report(&mut out, &[0; 16], &[0; 16], &[0; 16], &SM4_TEST_CIPHERTEXT);
        assert_eq!(matched, Ok(false));
        assert!(out.0.ends_with("Mismatch!\r\n"));
    }

    #[test]
    fn test_zuc_report() {
        let mut out = Console::default();
        for vector in ZUC_TEST_VECTORS.iter() {
            let mut zuc = Zuc::new(SwModel::new());
            zuc.start(&vector.key, &vector.iv).unwrap();
            let words = [zuc.next_word().unwrap(), zuc.next_word().unwrap()];
            assert_eq!(zuc_report(&mut out, &words, &vector.keystream), Ok(true));
        }
        assert_eq!(
            out.0,
            "27bede74\r\n018082da\r\nMatched!\r\n\
             0657cfa0\r\n7096398b\r\nMatched!\r\n\
             14f1c272\r\n3279c419\r\nMatched!\r\n"
        );
    }

    #[test]
    fn test_zuc_vector_report() {
        let mut zuc = Zuc::new(SwModel::new());
        let mut out = Console::default();
        let vector = &ZUC_TEST_VECTORS[1];
        let words = zuc_vector_words(&mut zuc, vector);
        assert_eq!(words, Ok(vector.keystream));
        assert_eq!(zuc_vector_report(&mut out, words, vector), Ok(true));
        assert_eq!(out.0, "0657cfa0\r\n7096398b\r\nMatched!\r\n");
    }

    #[test]
    fn test_zuc_vector_report_driver_error() {
        let mut out = Console::default();
        let matched = zuc_vector_report(
            &mut out,
            Err(VexCryptoError::DRIVER_ZUC_NOT_INITIALIZED),
            &ZUC_TEST_VECTORS[0],
        );
        assert_eq!(matched, Ok(false));
        assert_eq!(out.0, "ZUC error: 00020002\r\nMismatch!\r\n");
    }
}
