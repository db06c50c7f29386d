/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains the error codes reported by the VexRiscv crypto drivers and
    known answer tests.

--*/
#![cfg_attr(not(any(feature = "std", test)), no_std)]
use core::convert::From;
use core::num::{NonZeroU32, TryFromIntError};

/// VexRiscv crypto error type
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VexCryptoError(pub NonZeroU32);

/// Macro to define error constants ensuring uniqueness
///
/// This macro takes a list of (name, value, doc) tuples and generates
/// constant definitions for each error code.
#[macro_export]
macro_rules! define_error_constants {
    ($(($name:ident, $value:expr, $doc:expr)),* $(,)?) => {
        $(
            #[doc = $doc]
            pub const $name: VexCryptoError = VexCryptoError::new_const($value);
        )*

        #[cfg(test)]
        /// Returns a vector of all defined error constants for testing uniqueness
        pub fn all_constants() -> Vec<(&'static str, u32)> {
            vec![
                $(
                    (stringify!($name), $value),
                )*
            ]
        }
    };
}

impl VexCryptoError {
    /// Create an error; intended to only be used from const contexts, as we
    /// don't want runtime panics if val is zero. Use `VexCryptoError::try_from()`
    /// to convert a runtime `u32`.
    const fn new_const(val: u32) -> Self {
        match NonZeroU32::new(val) {
            Some(val) => Self(val),
            None => panic!("VexCryptoError cannot be 0"),
        }
    }

    define_error_constants![
        (
            DRIVER_SM4_INVALID_MODE,
            0x0001_0001,
            "SM4 key schedule mode is neither encrypt nor decrypt"
        ),
        (
            DRIVER_SM4_INVALID_DATA_LEN,
            0x0001_0002,
            "SM4 data length is not a multiple of the block size"
        ),
        (
            DRIVER_SM4_OUTPUT_TOO_SMALL,
            0x0001_0003,
            "SM4 output buffer is smaller than the input"
        ),
        (
            DRIVER_SM4_INVALID_SLICE,
            0x0001_0004,
            "SM4 invalid slice"
        ),
        (
            DRIVER_ZUC_NOT_LOADED,
            0x0002_0001,
            "ZUC initialisation requested before key and IV were loaded"
        ),
        (
            DRIVER_ZUC_NOT_INITIALIZED,
            0x0002_0002,
            "ZUC keystream requested before initialisation"
        ),
        (
            KAT_SM4_CIPHERTEXT_MISMATCH,
            0x9001_0001,
            "KAT Error: SM4 ciphertext mismatch"
        ),
        (
            KAT_SM4_PLAINTEXT_MISMATCH,
            0x9001_0002,
            "KAT Error: SM4 plaintext mismatch"
        ),
        (
            KAT_ZUC_KEYSTREAM_MISMATCH,
            0x9002_0001,
            "KAT Error: ZUC keystream mismatch"
        ),
    ];
}

impl From<core::num::NonZeroU32> for crate::VexCryptoError {
    fn from(val: core::num::NonZeroU32) -> Self {
        crate::VexCryptoError(val)
    }
}

impl From<VexCryptoError> for core::num::NonZeroU32 {
    fn from(val: VexCryptoError) -> Self {
        val.0
    }
}

impl From<VexCryptoError> for u32 {
    fn from(val: VexCryptoError) -> Self {
        core::num::NonZeroU32::from(val).get()
    }
}

impl TryFrom<u32> for VexCryptoError {
    type Error = TryFromIntError;
    fn try_from(val: u32) -> Result<Self, TryFromIntError> {
        match NonZeroU32::try_from(val) {
            Ok(val) => Ok(VexCryptoError(val)),
            Err(err) => Err(err),
        }
    }
}

pub type VexCryptoResult<T> = Result<T, VexCryptoError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_try_from() {
        assert!(VexCryptoError::try_from(0).is_err());
        assert_eq!(
            Ok(VexCryptoError::DRIVER_ZUC_NOT_INITIALIZED),
            VexCryptoError::try_from(0x0002_0002)
        );
    }

    #[test]
    fn test_into_u32() {
        assert_eq!(u32::from(VexCryptoError::KAT_SM4_CIPHERTEXT_MISMATCH), 0x9001_0001);
    }

    #[test]
    fn test_error_constants_uniqueness() {
        let constants = VexCryptoError::all_constants();
        let mut error_values = HashSet::new();
        let mut duplicates = Vec::new();

        for (name, value) in constants {
            if !error_values.insert(value) {
                duplicates.push((name, value));
            }
        }

        assert!(
            duplicates.is_empty(),
            "Found duplicate error codes: {:?}",
            duplicates
        );
    }
}
