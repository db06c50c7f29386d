/*++

Licensed under the Apache-2.0 license.

File Name:

    vexriscv.rs

Abstract:

    File contains the hardware backend issuing the SM4 and ZUC custom
    instructions on a VexRiscv core.

--*/

use crate::isa::{
    encode_r, reg, zucset_funct7, Sm4Isa, ZucIsa, ZucSlot, SM4ED_FUNCT7, SM4KS_FUNCT7,
    SM4_CUSTOM_OPCODE, ZUCINIT_FUNCT7, ZUCWORK_FUNCT7, ZUC_CUSTOM_OPCODE,
};

// The assembler has no mnemonics for the plugin instructions, so each one is
// emitted as a raw word with its operands pinned to a0/a1.
macro_rules! custom_insn_r {
    ($opcode:expr, $funct7:expr, $rs1:expr, $rs2:expr) => {{
        let rd: u32;
        // SAFETY: the instruction only reads a0/a1 and writes a0.
        unsafe {
            core::arch::asm!(
                ".word {insn}",
                insn = const encode_r($opcode, 0, $funct7, reg::A0, reg::A0, reg::A1),
                inlateout("a0") $rs1 => rd,
                in("a1") $rs2,
                options(nomem, nostack),
            );
        }
        rd
    }};
    ($opcode:expr, $funct7:expr) => {{
        let rd: u32;
        // SAFETY: the instruction only writes a0.
        unsafe {
            core::arch::asm!(
                ".word {insn}",
                insn = const encode_r($opcode, 0, $funct7, reg::A0, reg::ZERO, reg::ZERO),
                lateout("a0") rd,
                options(nomem, nostack),
            );
        }
        rd
    }};
}

/// VexRiscv core with the SM4 and ZUC plugins
#[derive(Default, Debug)]
pub struct VexRiscv {}

impl VexRiscv {
    /// Create an instance of the hardware backend
    pub fn new() -> Self {
        Self {}
    }
}

impl Sm4Isa for VexRiscv {
    #[inline(always)]
    fn sm4ed(&mut self, rs1: u32, rs2: u32) -> u32 {
        custom_insn_r!(SM4_CUSTOM_OPCODE, SM4ED_FUNCT7, rs1, rs2)
    }

    #[inline(always)]
    fn sm4ks(&mut self, rs1: u32, rs2: u32) -> u32 {
        custom_insn_r!(SM4_CUSTOM_OPCODE, SM4KS_FUNCT7, rs1, rs2)
    }
}

impl ZucIsa for VexRiscv {
    #[inline(always)]
    fn zucset(&mut self, key: u32, iv: u32, slot: ZucSlot) -> u32 {
        // The slot is part of the encoding, so every value needs its own word.
        match slot {
            ZucSlot::Slot0 => {
                custom_insn_r!(ZUC_CUSTOM_OPCODE, zucset_funct7(ZucSlot::Slot0), key, iv)
            }
            ZucSlot::Slot1 => {
                custom_insn_r!(ZUC_CUSTOM_OPCODE, zucset_funct7(ZucSlot::Slot1), key, iv)
            }
            ZucSlot::Slot2 => {
                custom_insn_r!(ZUC_CUSTOM_OPCODE, zucset_funct7(ZucSlot::Slot2), key, iv)
            }
            ZucSlot::Slot3 => {
                custom_insn_r!(ZUC_CUSTOM_OPCODE, zucset_funct7(ZucSlot::Slot3), key, iv)
            }
        }
    }

    #[inline(always)]
    fn zucinit(&mut self) -> u32 {
        let rd = custom_insn_r!(ZUC_CUSTOM_OPCODE, ZUCINIT_FUNCT7);
        self.bubble();
        rd
    }

    #[inline(always)]
    fn zucwork(&mut self) -> u32 {
        custom_insn_r!(ZUC_CUSTOM_OPCODE, ZUCWORK_FUNCT7)
    }

    #[inline(always)]
    fn bubble(&mut self) {
        // SAFETY: `nop` has no effect on architectural state.
        unsafe { core::arch::asm!("nop", options(nomem, nostack)) };
    }
}
