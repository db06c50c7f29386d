/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the VexRiscv SM4/ZUC plugin software model.

--*/

#![no_std]

mod instr;
mod sm4;
mod zuc;

pub use instr::{CustomInstrUnit, PluginOp, RvInstr32Custom, CUSTOM_0_OPCODE, CUSTOM_1_OPCODE};
pub use sm4::Sm4Plugin;
pub use zuc::ZucPlugin;
