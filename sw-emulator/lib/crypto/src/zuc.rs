/*++

Licensed under the Apache-2.0 license.

File Name:

    zuc.rs

Abstract:

    File contains the software model of the ZUC plugin (`zucset` / `zucinit` /
    `zucwork`).

--*/

/// S-box S0
#[cfg_attr(rustfmt, rustfmt_skip)]
const S0: [u8; 256] = [
    0x3e, 0x72, 0x5b, 0x47, 0xca, 0xe0, 0x00, 0x33, 0x04, 0xd1, 0x54, 0x98, 0x09, 0xb9, 0x6d, 0xcb,
    0x7b, 0x1b, 0xf9, 0x32, 0xaf, 0x9d, 0x6a, 0xa5, 0xb8, 0x2d, 0xfc, 0x1d, 0x08, 0x53, 0x03, 0x90,
    0x4d, 0x4e, 0x84, 0x99, 0xe4, 0xce, 0xd9, 0x91, 0xdd, 0xb6, 0x85, 0x48, 0x8b, 0x29, 0x6e, 0xac,
    0xcd, 0xc1, 0xf8, 0x1e, 0x73, 0x43, 0x69, 0xc6, 0xb5, 0xbd, 0xfd, 0x39, 0x63, 0x20, 0xd4, 0x38,
    0x76, 0x7d, 0xb2, 0xa7, 0xcf, 0xed, 0x57, 0xc5, 0xf3, 0x2c, 0xbb, 0x14, 0x21, 0x06, 0x55, 0x9b,
    0xe3, 0xef, 0x5e, 0x31, 0x4f, 0x7f, 0x5a, 0xa4, 0x0d, 0x82, 0x51, 0x49, 0x5f, 0xba, 0x58, 0x1c,
    0x4a, 0x16, 0xd5, 0x17, 0xa8, 0x92, 0x24, 0x1f, 0x8c, 0xff, 0xd8, 0xae, 0x2e, 0x01, 0xd3, 0xad,
    0x3b, 0x4b, 0xda, 0x46, 0xeb, 0xc9, 0xde, 0x9a, 0x8f, 0x87, 0xd7, 0x3a, 0x80, 0x6f, 0x2f, 0xc8,
    0xb1, 0xb4, 0x37, 0xf7, 0x0a, 0x22, 0x13, 0x28, 0x7c, 0xcc, 0x3c, 0x89, 0xc7, 0xc3, 0x96, 0x56,
    0x07, 0xbf, 0x7e, 0xf0, 0x0b, 0x2b, 0x97, 0x52, 0x35, 0x41, 0x79, 0x61, 0xa6, 0x4c, 0x10, 0xfe,
    0xbc, 0x26, 0x95, 0x88, 0x8a, 0xb0, 0xa3, 0xfb, 0xc0, 0x18, 0x94, 0xf2, 0xe1, 0xe5, 0xe9, 0x5d,
    0xd0, 0xdc, 0x11, 0x66, 0x64, 0x5c, 0xec, 0x59, 0x42, 0x75, 0x12, 0xf5, 0x74, 0x9c, 0xaa, 0x23,
    0x0e, 0x86, 0xab, 0xbe, 0x2a, 0x02, 0xe7, 0x67, 0xe6, 0x44, 0xa2, 0x6c, 0xc2, 0x93, 0x9f, 0xf1,
    0xf6, 0xfa, 0x36, 0xd2, 0x50, 0x68, 0x9e, 0x62, 0x71, 0x15, 0x3d, 0xd6, 0x40, 0xc4, 0xe2, 0x0f,
    0x8e, 0x83, 0x77, 0x6b, 0x25, 0x05, 0x3f, 0x0c, 0x30, 0xea, 0x70, 0xb7, 0xa1, 0xe8, 0xa9, 0x65,
    0x8d, 0x27, 0x1a, 0xdb, 0x81, 0xb3, 0xa0, 0xf4, 0x45, 0x7a, 0x19, 0xdf, 0xee, 0x78, 0x34, 0x60,
];

/// S-box S1
#[cfg_attr(rustfmt, rustfmt_skip)]
const S1: [u8; 256] = [
    0x55, 0xc2, 0x63, 0x71, 0x3b, 0xc8, 0x47, 0x86, 0x9f, 0x3c, 0xda, 0x5b, 0x29, 0xaa, 0xfd, 0x77,
    0x8c, 0xc5, 0x94, 0x0c, 0xa6, 0x1a, 0x13, 0x00, 0xe3, 0xa8, 0x16, 0x72, 0x40, 0xf9, 0xf8, 0x42,
    0x44, 0x26, 0x68, 0x96, 0x81, 0xd9, 0x45, 0x3e, 0x10, 0x76, 0xc6, 0xa7, 0x8b, 0x39, 0x43, 0xe1,
    0x3a, 0xb5, 0x56, 0x2a, 0xc0, 0x6d, 0xb3, 0x05, 0x22, 0x66, 0xbf, 0xdc, 0x0b, 0xfa, 0x62, 0x48,
    0xdd, 0x20, 0x11, 0x06, 0x36, 0xc9, 0xc1, 0xcf, 0xf6, 0x27, 0x52, 0xbb, 0x69, 0xf5, 0xd4, 0x87,
    0x7f, 0x84, 0x4c, 0xd2, 0x9c, 0x57, 0xa4, 0xbc, 0x4f, 0x9a, 0xdf, 0xfe, 0xd6, 0x8d, 0x7a, 0xeb,
    0x2b, 0x53, 0xd8, 0x5c, 0xa1, 0x14, 0x17, 0xfb, 0x23, 0xd5, 0x7d, 0x30, 0x67, 0x73, 0x08, 0x09,
    0xee, 0xb7, 0x70, 0x3f, 0x61, 0xb2, 0x19, 0x8e, 0x4e, 0xe5, 0x4b, 0x93, 0x8f, 0x5d, 0xdb, 0xa9,
    0xad, 0xf1, 0xae, 0x2e, 0xcb, 0x0d, 0xfc, 0xf4, 0x2d, 0x46, 0x6e, 0x1d, 0x97, 0xe8, 0xd1, 0xe9,
    0x4d, 0x37, 0xa5, 0x75, 0x5e, 0x83, 0x9e, 0xab, 0x82, 0x9d, 0xb9, 0x1c, 0xe0, 0xcd, 0x49, 0x89,
    0x01, 0xb6, 0xbd, 0x58, 0x24, 0xa2, 0x5f, 0x38, 0x78, 0x99, 0x15, 0x90, 0x50, 0xb8, 0x95, 0xe4,
    0xd0, 0x91, 0xc7, 0xce, 0xed, 0x0f, 0xb4, 0x6f, 0xa0, 0xcc, 0xf0, 0x02, 0x4a, 0x79, 0xc3, 0xde,
    0xa3, 0xef, 0xea, 0x51, 0xe6, 0x6b, 0x18, 0xec, 0x1b, 0x2c, 0x80, 0xf7, 0x74, 0xe7, 0xff, 0x21,
    0x5a, 0x6a, 0x54, 0x1e, 0x41, 0x31, 0x92, 0x35, 0xc4, 0x33, 0x07, 0x0a, 0xba, 0x7e, 0x0e, 0x34,
    0x88, 0xb1, 0x98, 0x7c, 0xf3, 0x3d, 0x60, 0x6c, 0x7b, 0xca, 0xd3, 0x1f, 0x32, 0x65, 0x04, 0x28,
    0x64, 0xbe, 0x85, 0x9b, 0x2f, 0x59, 0x8a, 0xd7, 0xb0, 0x25, 0xac, 0xaf, 0x12, 0x03, 0xe2, 0xf2,
];

/// Key loading constants `d(i)`
#[cfg_attr(rustfmt, rustfmt_skip)]
const EK_D: [u32; 16] = [
    0x44d7, 0x26bc, 0x626b, 0x135e, 0x5789, 0x35e2, 0x7135, 0x09af,
    0x4d78, 0x2f13, 0x6bc4, 0x1af1, 0x5e26, 0x3c4d, 0x789a, 0x47ac,
];

/// Modulus of the LFSR cells, `2^31 - 1`
const MOD_P: u32 = 0x7fff_ffff;

/// ZUC plugin
///
/// Holds the LFSR and the two memory cells of the nonlinear function between
/// instructions. Keystream words are returned byte-swapped, so storing them
/// from a little-endian core lays the keystream out in stream order.
#[derive(Debug, Default, Clone)]
pub struct ZucPlugin {
    /// LFSR cells `s0..s15`, each 31 bits wide
    lfsr: [u32; 16],

    /// Memory cell R1
    r1: u32,

    /// Memory cell R2
    r2: u32,
}

impl ZucPlugin {
    /// Number of key/IV slots loaded by `zucset`
    pub const SLOTS: usize = 4;

    /// Create a new instance of the ZUC plugin
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `zucset`: load one quarter of the key and IV.
    ///
    /// # Arguments
    ///
    /// * `key` - Key word, bytes in memory order
    /// * `iv` - IV word, bytes in memory order
    /// * `slot` - Quarter index, 0..=3; fills cells `4 * slot .. 4 * slot + 4`
    pub fn load(&mut self, key: u32, iv: u32, slot: usize) {
        let key = key.to_le_bytes();
        let iv = iv.to_le_bytes();
        for j in 0..4 {
            let i = (slot % Self::SLOTS) * 4 + j;
            self.lfsr[i] = ((key[j] as u32) << 23) | (EK_D[i] << 8) | iv[j] as u32;
        }
        self.r1 = 0;
        self.r2 = 0;
    }

    /// Execute `zucinit`: one clock in initialisation mode.
    pub fn init_clock(&mut self) {
        let x = self.bit_reorganization();
        let w = self.nonlinear(&x);
        self.lfsr_clock(Some(w >> 1));
    }

    /// Execute `zucwork`: one clock in working mode.
    ///
    /// # Returns
    ///
    /// * `u32` - Keystream word, byte-swapped
    pub fn work_clock(&mut self) -> u32 {
        let x = self.bit_reorganization();
        let z = self.nonlinear(&x) ^ x[3];
        self.lfsr_clock(None);
        z.swap_bytes()
    }

    fn bit_reorganization(&self) -> [u32; 4] {
        let s = &self.lfsr;
        [
            ((s[15] & 0x7fff_8000) << 1) | (s[14] & 0xffff),
            ((s[11] & 0xffff) << 16) | (s[9] >> 15),
            ((s[7] & 0xffff) << 16) | (s[5] >> 15),
            ((s[2] & 0xffff) << 16) | (s[0] >> 15),
        ]
    }

    fn nonlinear(&mut self, x: &[u32; 4]) -> u32 {
        let w = (x[0] ^ self.r1).wrapping_add(self.r2);
        let w1 = self.r1.wrapping_add(x[1]);
        let w2 = self.r2 ^ x[2];
        self.r1 = sbox(l1((w1 << 16) | (w2 >> 16)));
        self.r2 = sbox(l2((w2 << 16) | (w1 >> 16)));
        w
    }

    fn lfsr_clock(&mut self, u: Option<u32>) {
        let s = &self.lfsr;
        let mut v = s[0];
        v = add_mod(v, rotl31(s[0], 8));
        v = add_mod(v, rotl31(s[4], 20));
        v = add_mod(v, rotl31(s[10], 21));
        v = add_mod(v, rotl31(s[13], 17));
        v = add_mod(v, rotl31(s[15], 15));
        if let Some(u) = u {
            v = add_mod(v, u);
        }
        if v == 0 {
            v = MOD_P;
        }
        self.lfsr.copy_within(1.., 0);
        self.lfsr[15] = v;
    }
}

fn add_mod(a: u32, b: u32) -> u32 {
    let c = a + b;
    (c & MOD_P) + (c >> 31)
}

fn rotl31(x: u32, k: u32) -> u32 {
    ((x << k) | (x >> (31 - k))) & MOD_P
}

fn l1(x: u32) -> u32 {
    x ^ x.rotate_left(2) ^ x.rotate_left(10) ^ x.rotate_left(18) ^ x.rotate_left(24)
}

fn l2(x: u32) -> u32 {
    x ^ x.rotate_left(8) ^ x.rotate_left(14) ^ x.rotate_left(22) ^ x.rotate_left(30)
}

fn sbox(x: u32) -> u32 {
    let b = x.to_be_bytes();
    u32::from_be_bytes([
        S0[b[0] as usize],
        S1[b[1] as usize],
        S0[b[2] as usize],
        S1[b[3] as usize],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(key: &[u8; 16], iv: &[u8; 16]) -> ZucPlugin {
        let mut zuc = ZucPlugin::new();
        for slot in 0..ZucPlugin::SLOTS {
            zuc.load(
                u32::from_le_bytes(key[slot * 4..][..4].try_into().unwrap()),
                u32::from_le_bytes(iv[slot * 4..][..4].try_into().unwrap()),
                slot,
            );
        }
        for _ in 0..32 {
            zuc.init_clock();
        }
        zuc.work_clock();
        zuc
    }

    #[test]
    fn test_all_zero() {
        let mut zuc = start(&[0u8; 16], &[0u8; 16]);
        assert_eq!(zuc.work_clock().swap_bytes(), 0x27bede74);
        assert_eq!(zuc.work_clock().swap_bytes(), 0x018082da);
    }

    #[test]
    fn test_all_ones() {
        let mut zuc = start(&[0xff; 16], &[0xff; 16]);
        assert_eq!(zuc.work_clock().swap_bytes(), 0x0657cfa0);
        assert_eq!(zuc.work_clock().swap_bytes(), 0x7096398b);
    }

    #[test]
    fn test_random_key_iv() {
        #[cfg_attr(rustfmt, rustfmt_skip)]
        let key = [
            0x3d, 0x4c, 0x4b, 0xe9, 0x6a, 0x82, 0xfd, 0xae, 0xb5, 0x8f, 0x64, 0x1d, 0xb1, 0x7b, 0x45, 0x5b,
        ];
        #[cfg_attr(rustfmt, rustfmt_skip)]
        let iv = [
            0x84, 0x31, 0x9a, 0xa8, 0xde, 0x69, 0x15, 0xca, 0x1f, 0x6b, 0xda, 0x6b, 0xfb, 0xd8, 0xc7, 0x66,
        ];
        let mut zuc = start(&key, &iv);
        assert_eq!(zuc.work_clock().swap_bytes(), 0x14f1c272);
        assert_eq!(zuc.work_clock().swap_bytes(), 0x3279c419);
    }

    #[test]
    fn test_load_clears_memory_cells() {
        let mut zuc = start(&[0xff; 16], &[0xff; 16]);
        zuc.work_clock();
        zuc.load(0, 0, 0);
        assert_eq!(zuc.r1, 0);
        assert_eq!(zuc.r2, 0);
        assert_eq!(zuc.lfsr[0], 0x44d7 << 8);
    }

    #[test]
    fn test_reload_restarts_keystream() {
        let mut first = start(&[0u8; 16], &[0u8; 16]);
        let a = first.work_clock();
        let mut second = first.clone();
        for slot in 0..ZucPlugin::SLOTS {
            second.load(0, 0, slot);
        }
        for _ in 0..32 {
            second.init_clock();
        }
        second.work_clock();
        assert_eq!(second.work_clock(), a);
    }

    #[test]
    fn test_lfsr_cells_stay_31_bit() {
        let mut zuc = start(&[0xff; 16], &[0xff; 16]);
        for _ in 0..64 {
            zuc.work_clock();
            assert!(zuc.lfsr.iter().all(|&s| s != 0 && s <= MOD_P));
        }
    }
}
