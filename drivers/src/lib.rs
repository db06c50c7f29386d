/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the VexRiscv SM4/ZUC custom instruction drivers.

--*/

#![cfg_attr(not(feature = "std"), no_std)]

mod array;
mod exit_ctrl;
mod isa;
pub mod printer;
mod sm4;
mod zuc;

pub use array::{LEArray4x32, LEArray4x4};
pub use exit_ctrl::ExitCtrl;
pub use isa::{
    encode_r, reg, zucset_funct7, Sm4Isa, ZucIsa, ZucSlot, SM4ED_FUNCT7, SM4KS_FUNCT7,
    SM4_CUSTOM_OPCODE, ZUCINIT_FUNCT7, ZUCWORK_FUNCT7, ZUC_CUSTOM_OPCODE,
};
pub use sm4::{
    Sm4, Sm4Block, Sm4Key, Sm4KeySchedule, Sm4Mode, SM4_BLOCK_SIZE, SM4_KEY_SIZE, SM4_ROUNDS,
};
pub use vexcrypto_error::{VexCryptoError, VexCryptoResult};
pub use zuc::{Zuc, ZucIv, ZucKey, ZUC_BURST_WORDS, ZUC_INIT_ROUNDS};

cfg_if::cfg_if! {
    if #[cfg(target_arch = "riscv32")] {
        mod uart;
        mod vexriscv;
        mod wait;

        pub use uart::Uart;
        pub use vexriscv::VexRiscv;
    }
}

#[cfg(any(test, feature = "sw-model"))]
mod sw_model;
#[cfg(any(test, feature = "sw-model"))]
pub use sw_model::{SwModel, TraceFn};
