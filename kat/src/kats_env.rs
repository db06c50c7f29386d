/*++

Licensed under the Apache-2.0 license.

File Name:

    kats_env.rs

Abstract:

    File contains the set of drivers exercised by the Known Answer Tests.

--*/

use vexcrypto_drivers::{Sm4, Zuc};

pub struct KatsEnv<'a, S, Z> {
    /// SM4 plugin
    pub sm4: &'a mut Sm4<S>,

    /// ZUC plugin
    pub zuc: &'a mut Zuc<Z>,
}
