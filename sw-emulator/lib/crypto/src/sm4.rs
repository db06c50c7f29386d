/*++

Licensed under the Apache-2.0 license.

File Name:

    sm4.rs

Abstract:

    File contains the software model of the SM4 plugin (`sm4ed` / `sm4ks`).

--*/

/// SM4 S-box (GB/T 32907-2016)
#[cfg_attr(rustfmt, rustfmt_skip)]
const SBOX: [u8; 256] = [
    0xd6, 0x90, 0xe9, 0xfe, 0xcc, 0xe1, 0x3d, 0xb7, 0x16, 0xb6, 0x14, 0xc2, 0x28, 0xfb, 0x2c, 0x05,
    0x2b, 0x67, 0x9a, 0x76, 0x2a, 0xbe, 0x04, 0xc3, 0xaa, 0x44, 0x13, 0x26, 0x49, 0x86, 0x06, 0x99,
    0x9c, 0x42, 0x50, 0xf4, 0x91, 0xef, 0x98, 0x7a, 0x33, 0x54, 0x0b, 0x43, 0xed, 0xcf, 0xac, 0x62,
    0xe4, 0xb3, 0x1c, 0xa9, 0xc9, 0x08, 0xe8, 0x95, 0x80, 0xdf, 0x94, 0xfa, 0x75, 0x8f, 0x3f, 0xa6,
    0x47, 0x07, 0xa7, 0xfc, 0xf3, 0x73, 0x17, 0xba, 0x83, 0x59, 0x3c, 0x19, 0xe6, 0x85, 0x4f, 0xa8,
    0x68, 0x6b, 0x81, 0xb2, 0x71, 0x64, 0xda, 0x8b, 0xf8, 0xeb, 0x0f, 0x4b, 0x70, 0x56, 0x9d, 0x35,
    0x1e, 0x24, 0x0e, 0x5e, 0x63, 0x58, 0xd1, 0xa2, 0x25, 0x22, 0x7c, 0x3b, 0x01, 0x21, 0x78, 0x87,
    0xd4, 0x00, 0x46, 0x57, 0x9f, 0xd3, 0x27, 0x52, 0x4c, 0x36, 0x02, 0xe7, 0xa0, 0xc4, 0xc8, 0x9e,
    0xea, 0xbf, 0x8a, 0xd2, 0x40, 0xc7, 0x38, 0xb5, 0xa3, 0xf7, 0xf2, 0xce, 0xf9, 0x61, 0x15, 0xa1,
    0xe0, 0xae, 0x5d, 0xa4, 0x9b, 0x34, 0x1a, 0x55, 0xad, 0x93, 0x32, 0x30, 0xf5, 0x8c, 0xb1, 0xe3,
    0x1d, 0xf6, 0xe2, 0x2e, 0x82, 0x66, 0xca, 0x60, 0xc0, 0x29, 0x23, 0xab, 0x0d, 0x53, 0x4e, 0x6f,
    0xd5, 0xdb, 0x37, 0x45, 0xde, 0xfd, 0x8e, 0x2f, 0x03, 0xff, 0x6a, 0x72, 0x6d, 0x6c, 0x5b, 0x51,
    0x8d, 0x1b, 0xaf, 0x92, 0xbb, 0xdd, 0xbc, 0x7f, 0x11, 0xd9, 0x5c, 0x41, 0x1f, 0x10, 0x5a, 0xd8,
    0x0a, 0xc1, 0x31, 0x88, 0xa5, 0xcd, 0x7b, 0xbd, 0x2d, 0x74, 0xd0, 0x12, 0xb8, 0xe5, 0xb4, 0xb0,
    0x89, 0x69, 0x97, 0x4a, 0x0c, 0x96, 0x77, 0x7e, 0x65, 0xb9, 0xf1, 0x09, 0xc5, 0x6e, 0xc6, 0x84,
    0x18, 0xf0, 0x7d, 0xec, 0x3a, 0xdc, 0x4d, 0x20, 0x79, 0xee, 0x5f, 0x3e, 0xd7, 0xcb, 0x39, 0x48,
];

/// SM4 plugin
///
/// The plugin works on register values loaded from memory by a little-endian
/// core, so both operands and the result are byte-swapped relative to the
/// big-endian words of the SM4 standard.
#[derive(Debug, Default, Copy, Clone)]
pub struct Sm4Plugin;

impl Sm4Plugin {
    /// Create a new instance of the SM4 plugin
    pub fn new() -> Self {
        Self
    }

    /// Execute `sm4ed`: one cipher round.
    ///
    /// # Arguments
    ///
    /// * `x` - State word `X(i)`
    /// * `t` - `X(i+1) ^ X(i+2) ^ X(i+3) ^ rk(i)`
    ///
    /// # Returns
    ///
    /// * `u32` - State word `X(i+4)`
    pub fn round(&self, x: u32, t: u32) -> u32 {
        x ^ Self::round_transform(t.swap_bytes()).swap_bytes()
    }

    /// Execute `sm4ks`: one key expansion step.
    ///
    /// # Arguments
    ///
    /// * `k` - Key word `K(i)`
    /// * `t` - `K(i+1) ^ K(i+2) ^ K(i+3) ^ CK(i)`
    ///
    /// # Returns
    ///
    /// * `u32` - Key word `K(i+4)`, which is round key `rk(i)`
    pub fn key_step(&self, k: u32, t: u32) -> u32 {
        k ^ Self::key_transform(t.swap_bytes()).swap_bytes()
    }

    /// Non-linear transform: S-box applied to each byte
    fn tau(a: u32) -> u32 {
        u32::from_be_bytes(a.to_be_bytes().map(|b| SBOX[b as usize]))
    }

    /// Round transform `T = L(tau(.))`
    fn round_transform(a: u32) -> u32 {
        let b = Self::tau(a);
        b ^ b.rotate_left(2) ^ b.rotate_left(10) ^ b.rotate_left(18) ^ b.rotate_left(24)
    }

    /// Key expansion transform `T' = L'(tau(.))`
    fn key_transform(a: u32) -> u32 {
        let b = Self::tau(a);
        b ^ b.rotate_left(13) ^ b.rotate_left(23)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::sm4::cipher::generic_array::GenericArray;
    use ::sm4::cipher::{BlockEncrypt, KeyInit};

    const FK: [u32; 4] = [0xc6bab1a3, 0x5033aa56, 0x97917d67, 0xdc2270b2];

    fn ck(i: usize) -> u32 {
        let mut bytes = [0u8; 4];
        for (j, b) in bytes.iter_mut().enumerate() {
            *b = (((4 * i + j) * 7) % 256) as u8;
        }
        u32::from_le_bytes(bytes)
    }

    fn words(bytes: &[u8; 16]) -> [u32; 4] {
        let mut w = [0u32; 4];
        for (i, word) in w.iter_mut().enumerate() {
            *word = u32::from_le_bytes(bytes[i * 4..][..4].try_into().unwrap());
        }
        w
    }

    fn encrypt(plugin: &Sm4Plugin, key: &[u8; 16], block: &[u8; 16]) -> [u8; 16] {
        let mk = words(key);
        let mut k = [0u32; 36];
        for i in 0..4 {
            k[i] = mk[i] ^ FK[i];
        }
        for i in 0..32 {
            k[i + 4] = plugin.key_step(k[i], k[i + 1] ^ k[i + 2] ^ k[i + 3] ^ ck(i));
        }

        let mut x = [0u32; 36];
        x[..4].copy_from_slice(&words(block));
        for i in 0..32 {
            x[i + 4] = plugin.round(x[i], x[i + 1] ^ x[i + 2] ^ x[i + 3] ^ k[i + 4]);
        }

        let mut out = [0u8; 16];
        for (i, chunk) in out.chunks_exact_mut(4).enumerate() {
            chunk.copy_from_slice(&x[35 - i].to_le_bytes());
        }
        out
    }

    #[cfg_attr(rustfmt, rustfmt_skip)]
    const KEY: [u8; 16] = [
        0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54, 0x32, 0x10,
    ];

    #[test]
    fn test_ck_matches_firmware_table() {
        assert_eq!(ck(0), 0x150e0700);
        assert_eq!(ck(9), 0x110a03fc);
        assert_eq!(ck(31), 0x79726b64);
    }

    #[test]
    fn test_first_round_key() {
        let plugin = Sm4Plugin::new();
        let mk = words(&KEY);
        let k: [u32; 4] = core::array::from_fn(|i| mk[i] ^ FK[i]);
        assert_eq!(k, [0xa1ff92a2, 0xbffe01df, 0x0f2ba199, 0xcc1024c4]);

        // rk0 = 0xf12186f9 in the byte order of the standard
        let rk0 = plugin.key_step(k[0], k[1] ^ k[2] ^ k[3] ^ ck(0));
        assert_eq!(rk0, 0xf98621f1);
    }

    #[test]
    fn test_first_round() {
        let plugin = Sm4Plugin::new();
        let x = words(&KEY);

        // X4 = 0x27fad345 in the byte order of the standard
        let x4 = plugin.round(x[0], x[1] ^ x[2] ^ x[3] ^ 0xf98621f1);
        assert_eq!(x4, 0x45d3fa27);
    }

    #[test]
    fn test_standard_vector() {
        #[cfg_attr(rustfmt, rustfmt_skip)]
        let expected: [u8; 16] = [
            0x68, 0x1e, 0xdf, 0x34, 0xd2, 0x06, 0x96, 0x5e, 0x86, 0xb3, 0xe9, 0x4f, 0x53, 0x6e, 0x42, 0x46,
        ];
        assert_eq!(encrypt(&Sm4Plugin::new(), &KEY, &KEY), expected);
    }

    #[test]
    fn test_against_reference_cipher() {
        let plugin = Sm4Plugin::new();
        let mut seed = 0x1234_5678u32;
        let mut next = || {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (seed >> 24) as u8
        };

        for _ in 0..64 {
            let key: [u8; 16] = core::array::from_fn(|_| next());
            let block: [u8; 16] = core::array::from_fn(|_| next());

            let cipher = ::sm4::Sm4::new(GenericArray::from_slice(&key));
            let mut expected = GenericArray::clone_from_slice(&block);
            cipher.encrypt_block(&mut expected);

            assert_eq!(&encrypt(&plugin, &key, &block)[..], expected.as_slice());
        }
    }
}
