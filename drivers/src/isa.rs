/*++

Licensed under the Apache-2.0 license.

File Name:

    isa.rs

Abstract:

    File contains the encodings of the SM4 and ZUC custom instructions and the
    traits implemented by every backend that can execute them.

--*/


/// Major opcode of the SM4 plugin (`custom-0`)
pub const SM4_CUSTOM_OPCODE: u32 = 0b000_1011;

/// Major opcode of the ZUC plugin (`custom-1`)
pub const ZUC_CUSTOM_OPCODE: u32 = 0b010_1011;

/// `sm4ed`: SM4 cipher round
pub const SM4ED_FUNCT7: u32 = 0x18;

/// `sm4ks`: SM4 key expansion step
pub const SM4KS_FUNCT7: u32 = 0x1a;

/// `zucwork`: ZUC working clock
pub const ZUCWORK_FUNCT7: u32 = 7;

/// `zucinit`: ZUC initialisation clock
pub const ZUCINIT_FUNCT7: u32 = (1 << 3) | 7;

/// Integer register numbers used by the fixed-register encodings
pub mod reg {
    pub const ZERO: u32 = 0;
    pub const A0: u32 = 10;
    pub const A1: u32 = 11;
}

/// `zucset` function code for the given slot
pub const fn zucset_funct7(slot: ZucSlot) -> u32 {
    ((slot as u32) << 3) | 7 | (1 << 5)
}

/// Encode an R-type instruction
///
/// # Arguments
///
/// * `opcode` - Major opcode
/// * `funct3` - Minor function code
/// * `funct7` - Function code selecting the plugin operation
/// * `rd` - Destination register number
/// * `rs1` - Source register 1 number
/// * `rs2` - Source register 2 number
pub const fn encode_r(opcode: u32, funct3: u32, funct7: u32, rd: u32, rs1: u32, rs2: u32) -> u32 {
    (opcode & 0x7f)
        | ((rd & 0x1f) << 7)
        | ((funct3 & 0x7) << 12)
        | ((rs1 & 0x1f) << 15)
        | ((rs2 & 0x1f) << 20)
        | ((funct7 & 0x7f) << 25)
}

/// Quarter of the ZUC key/IV loaded by one `zucset`
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u32)]
pub enum ZucSlot {
    Slot0 = 0,
    Slot1 = 1,
    Slot2 = 2,
    Slot3 = 3,
}

impl ZucSlot {
    pub const ALL: [ZucSlot; 4] = [Self::Slot0, Self::Slot1, Self::Slot2, Self::Slot3];
}

/// Backend executing the SM4 plugin instructions
pub trait Sm4Isa {
    /// `sm4ed rd, rs1, rs2`
    fn sm4ed(&mut self, rs1: u32, rs2: u32) -> u32;

    /// `sm4ks rd, rs1, rs2`
    fn sm4ks(&mut self, rs1: u32, rs2: u32) -> u32;
}

/// Backend executing the ZUC plugin instructions
pub trait ZucIsa {
    /// `zucset rd, key, iv` for one quarter of the key and IV
    fn zucset(&mut self, key: u32, iv: u32, slot: ZucSlot) -> u32;

    /// `zucinit rd`
    fn zucinit(&mut self) -> u32;

    /// `zucwork rd`
    fn zucwork(&mut self) -> u32;

    /// Pipeline bubble required by the hardware between back-to-back ZUC
    /// instructions at the start of a sequence.
    fn bubble(&mut self) {}
}

impl<T: Sm4Isa + ?Sized> Sm4Isa for &mut T {
    fn sm4ed(&mut self, rs1: u32, rs2: u32) -> u32 {
        (**self).sm4ed(rs1, rs2)
    }

    fn sm4ks(&mut self, rs1: u32, rs2: u32) -> u32 {
        (**self).sm4ks(rs1, rs2)
    }
}

impl<T: ZucIsa + ?Sized> ZucIsa for &mut T {
    fn zucset(&mut self, key: u32, iv: u32, slot: ZucSlot) -> u32 {
        (**self).zucset(key, iv, slot)
    }

    fn zucinit(&mut self) -> u32 {
        (**self).zucinit()
    }

    fn zucwork(&mut self) -> u32 {
        (**self).zucwork()
    }

    fn bubble(&mut self) {
        (**self).bubble()
    }
}
