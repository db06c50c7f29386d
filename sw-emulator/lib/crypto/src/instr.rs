/*++

Licensed under the Apache-2.0 license.

File Name:

    instr.rs

Abstract:

    File contains the decoder and execution unit for the SM4 and ZUC custom
    instructions.

--*/

#![allow(clippy::unusual_byte_groupings)]

use crate::{Sm4Plugin, ZucPlugin};
use bitfield::bitfield;

/// `custom-0` major opcode, used by the SM4 plugin
pub const CUSTOM_0_OPCODE: u32 = 0b000_1011;

/// `custom-1` major opcode, used by the ZUC plugin
pub const CUSTOM_1_OPCODE: u32 = 0b010_1011;

bitfield! {
    /// RISCV 32-bit R-Type custom instruction
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    pub struct RvInstr32Custom(u32);

    /// Opcode
    pub u32, opcode, set_opcode: 6, 0;

    /// Destination Register
    pub u32, rd, set_rd: 11, 7;

    /// Opcode function
    pub u32, funct3, set_funct3: 14, 12;

    /// Source Register 1
    pub u32, rs1, set_rs1: 19, 15;

    /// Source Register 2
    pub u32, rs2, set_rs2: 24, 20;

    /// Opcode function
    pub u32, funct7, set_funct7: 31, 25;
}

/// Plugin operation selected by an instruction word
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PluginOp {
    /// SM4 cipher round
    Sm4Ed,

    /// SM4 key expansion step
    Sm4Ks,

    /// ZUC key/IV load into the given slot
    ZucSet(usize),

    /// ZUC initialisation clock
    ZucInit,

    /// ZUC working clock
    ZucWork,
}

impl PluginOp {
    /// Decode an instruction word
    ///
    /// # Returns
    ///
    /// * `Option<PluginOp>` - `None` if the word is not one of the plugin instructions
    pub fn decode(instr: u32) -> Option<Self> {
        let instr = RvInstr32Custom(instr);
        if instr.funct3() != 0 {
            return None;
        }

        match (instr.opcode(), instr.funct7()) {
            (CUSTOM_0_OPCODE, 0b001_1000) => Some(PluginOp::Sm4Ed),
            (CUSTOM_0_OPCODE, 0b001_1010) => Some(PluginOp::Sm4Ks),
            (CUSTOM_1_OPCODE, 0b000_0111) => Some(PluginOp::ZucWork),
            (CUSTOM_1_OPCODE, 0b000_1111) => Some(PluginOp::ZucInit),
            (CUSTOM_1_OPCODE, funct7) if funct7 & 0b110_0111 == 0b010_0111 => {
                Some(PluginOp::ZucSet(((funct7 >> 3) & 0b11) as usize))
            }
            _ => None,
        }
    }
}

/// Execution unit holding both plugins
#[derive(Debug, Default, Clone)]
pub struct CustomInstrUnit {
    sm4: Sm4Plugin,
    zuc: ZucPlugin,
}

impl CustomInstrUnit {
    /// Create a new execution unit with both plugins in reset state
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a custom instruction
    ///
    /// # Arguments
    ///
    /// * `instr` - Instruction word
    /// * `rs1` - Value of source register 1
    /// * `rs2` - Value of source register 2
    ///
    /// # Returns
    ///
    /// * `Option<u32>` - Value written to `rd`, or `None` for an illegal instruction
    pub fn execute(&mut self, instr: u32, rs1: u32, rs2: u32) -> Option<u32> {
        let rd = match PluginOp::decode(instr)? {
            PluginOp::Sm4Ed => self.sm4.round(rs1, rs2),
            PluginOp::Sm4Ks => self.sm4.key_step(rs1, rs2),
            PluginOp::ZucSet(slot) => {
                self.zuc.load(rs1, rs2, slot);
                0
            }
            PluginOp::ZucInit => {
                self.zuc.init_clock();
                0
            }
            PluginOp::ZucWork => self.zuc.work_clock(),
        };
        Some(rd)
    }
}
