/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the SM4 and ZUC Known Answer Tests.

--*/

#![no_std]

mod kats_env;
mod sm4_kat;
mod zuc_kat;

pub use kats_env::KatsEnv;
pub use sm4_kat::Sm4Kat;
pub use vexcrypto_drivers::{VexCryptoError, VexCryptoResult};
pub use zuc_kat::ZucKat;

use vexcrypto_drivers::{Sm4Isa, ZucIsa};

/// Execute all the Known Answer Tests (KAT).
///
/// # Arguments
///
/// * `env` - Drivers under test
///
/// # Returns
///
/// * `VexCryptoResult` - Result denoting the KAT outcome.
pub fn execute_kat<S: Sm4Isa, Z: ZucIsa>(env: &mut KatsEnv<S, Z>) -> VexCryptoResult<()> {
    Sm4Kat::default().execute(env.sm4)?;
    ZucKat::default().execute(env.zuc)?;
    Ok(())
}
