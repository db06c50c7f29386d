/*++

Licensed under the Apache-2.0 license.

File Name:

    sw_model.rs

Abstract:

    File contains the host backend that runs the SM4 and ZUC custom
    instructions on the plugin software model.

--*/

use crate::isa::{
    encode_r, reg, zucset_funct7, Sm4Isa, ZucIsa, ZucSlot, SM4ED_FUNCT7, SM4KS_FUNCT7,
    SM4_CUSTOM_OPCODE, ZUCINIT_FUNCT7, ZUCWORK_FUNCT7, ZUC_CUSTOM_OPCODE,
};
use vexcrypto_emu_crypto::CustomInstrUnit;

/// Callback receiving `(instr, rs1, rs2, rd)` for every executed instruction
pub type TraceFn<'a> = &'a mut dyn FnMut(u32, u32, u32, u32);

/// Software model of a VexRiscv core with the SM4 and ZUC plugins
///
/// Every call is encoded exactly as the hardware backend encodes it and then
/// decoded by the model, so an encoding mistake shows up as an illegal
/// instruction.
#[derive(Default)]
pub struct SwModel<'a> {
    unit: CustomInstrUnit,
    retired: u64,
    trace: Option<TraceFn<'a>>,
}

impl SwModel<'static> {
    /// Create a model with both plugins in reset state
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> SwModel<'a> {
    /// Create a model that reports every executed instruction to `trace`
    pub fn with_trace(trace: TraceFn<'a>) -> Self {
        Self {
            unit: CustomInstrUnit::new(),
            retired: 0,
            trace: Some(trace),
        }
    }

    /// Number of custom instructions executed so far
    pub fn retired(&self) -> u64 {
        self.retired
    }

    fn exec(&mut self, instr: u32, rs1: u32, rs2: u32) -> u32 {
        self.retired += 1;
        let rd = match self.unit.execute(instr, rs1, rs2) {
            Some(rd) => rd,
            None => panic!("illegal instruction 0x{instr:08x}"),
        };
        if let Some(trace) = self.trace.as_mut() {
            trace(instr, rs1, rs2, rd);
        }
        rd
    }

    fn exec_r(&mut self, opcode: u32, funct7: u32, rs1: u32, rs2: u32) -> u32 {
        let instr = encode_r(opcode, 0, funct7, reg::A0, reg::A0, reg::A1);
        self.exec(instr, rs1, rs2)
    }

    fn exec_rd(&mut self, opcode: u32, funct7: u32) -> u32 {
        let instr = encode_r(opcode, 0, funct7, reg::A0, reg::ZERO, reg::ZERO);
        self.exec(instr, 0, 0)
    }
}

impl Sm4Isa for SwModel<'_> {
    fn sm4ed(&mut self, rs1: u32, rs2: u32) -> u32 {
        self.exec_r(SM4_CUSTOM_OPCODE, SM4ED_FUNCT7, rs1, rs2)
    }

    fn sm4ks(&mut self, rs1: u32, rs2: u32) -> u32 {
        self.exec_r(SM4_CUSTOM_OPCODE, SM4KS_FUNCT7, rs1, rs2)
    }
}

impl ZucIsa for SwModel<'_> {
    fn zucset(&mut self, key: u32, iv: u32, slot: ZucSlot) -> u32 {
        self.exec_r(ZUC_CUSTOM_OPCODE, zucset_funct7(slot), key, iv)
    }

    fn zucinit(&mut self) -> u32 {
        self.exec_rd(ZUC_CUSTOM_OPCODE, ZUCINIT_FUNCT7)
    }

    fn zucwork(&mut self) -> u32 {
        self.exec_rd(ZUC_CUSTOM_OPCODE, ZUCWORK_FUNCT7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_retired_instructions() {
        let mut model = SwModel::new();
        model.sm4ed(0, 0);
        model.zucwork();
        assert_eq!(model.retired(), 2);
    }

    #[test]
    fn test_trace() {
        let mut lines = [(0u32, 0u32, 0u32, 0u32); 2];
        let mut count = 0;
        let mut trace = |instr, rs1, rs2, rd| {
            lines[count] = (instr, rs1, rs2, rd);
            count += 1;
        };
        let mut model = SwModel::with_trace(&mut trace);
        model.zucset(0, 0, ZucSlot::Slot1);
        model.zucinit();
        drop(model);

        assert_eq!(count, 2);
        assert_eq!(lines[0], (0x5eb5052b, 0, 0, 0));
        assert_eq!(lines[1].0, 0x1e00052b);
    }

    #[test]
    fn test_zucset_returns_zero() {
        let mut model = SwModel::new();
        for slot in ZucSlot::ALL {
            assert_eq!(model.zucset(0xffff_ffff, 0xffff_ffff, slot), 0);
        }
    }
}
