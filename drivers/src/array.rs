/*++

Licensed under the Apache-2.0 license.

File Name:

    array.rs

Abstract:

    File contains word array definitions for data exchanged with the custom
    instructions. Words are little-endian: the byte order the core uses when
    it loads a buffer into registers.

--*/

use zerocopy::{AsBytes, FromBytes};

macro_rules! le_array4 {
    ($dim: literal) => {
        paste::paste! {
            pub const [<LE_ARRAY_4X $dim _BYTE_SIZE>]: usize = $dim * core::mem::size_of::<u32>();
            pub const [<LE_ARRAY_4X $dim _WORD_SIZE>]: usize = $dim;

            #[repr(C)]
            #[derive(AsBytes, FromBytes, Debug, Copy, Clone, Eq, PartialEq)]
            pub struct [<LEArray4x $dim>](pub [u32; [<LE_ARRAY_4X $dim _WORD_SIZE>]]);

            impl [<LEArray4x $dim>] {
                pub const fn new(val: [u32; [<LE_ARRAY_4X $dim _WORD_SIZE>]]) -> Self {
                    Self(val)
                }
            }

            impl Default for [<LEArray4x $dim>] {
                fn default() -> Self {
                    Self([0u32; [<LE_ARRAY_4X $dim _WORD_SIZE>]])
                }
            }

            impl<'a> From<&'a [u8; [<LE_ARRAY_4X $dim _BYTE_SIZE>]]> for [<LEArray4x $dim>] {
                #[inline(never)]
                fn from(value: &'a [u8; [<LE_ARRAY_4X $dim _BYTE_SIZE>]]) -> Self {
                    let mut result = Self::default();
                    for (word, bytes) in result.0.iter_mut().zip(value.chunks_exact(4)) {
                        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
                    }
                    result
                }
            }

            impl From<[u8; [<LE_ARRAY_4X $dim _BYTE_SIZE>]]> for [<LEArray4x $dim>] {
                fn from(value: [u8; [<LE_ARRAY_4X $dim _BYTE_SIZE>]]) -> Self {
                    Self::from(&value)
                }
            }

            impl From<[<LEArray4x $dim>]> for [u8; [<LE_ARRAY_4X $dim _BYTE_SIZE>]] {
                #[inline(never)]
                fn from(value: [<LEArray4x $dim>]) -> Self {
                    let mut result = [0u8; [<LE_ARRAY_4X $dim _BYTE_SIZE>]];
                    for (bytes, word) in result.chunks_exact_mut(4).zip(value.0.iter()) {
                        bytes.copy_from_slice(&word.to_le_bytes());
                    }
                    result
                }
            }

            impl From<[u32; [<LE_ARRAY_4X $dim _WORD_SIZE>]]> for [<LEArray4x $dim>] {
                fn from(value: [u32; [<LE_ARRAY_4X $dim _WORD_SIZE>]]) -> Self {
                    Self(value)
                }
            }

            impl From<[<LEArray4x $dim>]> for [u32; [<LE_ARRAY_4X $dim _WORD_SIZE>]] {
                fn from(value: [<LEArray4x $dim>]) -> Self {
                    value.0
                }
            }
        }
    };
}

le_array4!(4);
le_array4!(32);
