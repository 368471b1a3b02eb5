// ntag5-bridge/src/registers.rs
//! NTAG5 session register and configuration memory map.
//!
//! The descriptor tables are the only place addresses, offsets and masks
//! are written down. Every readable bit is a [`Field`] taken from a table
//! entry at compile time, and the tables are indexed by enum discriminant,
//! so a lookup cannot miss.

use derive_more::Display;

/// Location of one byte inside a 4-byte block, plus its named masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub name: &'static str,
    pub address: u8,
    /// Byte offset inside the block (0..=3).
    pub byte: u8,
    pub masks: &'static [(&'static str, u8)],
}

/// Volatile session registers (0xA0..=0xA8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Register {
    #[display(fmt = "STATUS_0_REG")]
    Status0,
    #[display(fmt = "STATUS_1_REG")]
    Status1,
    #[display(fmt = "CONFIG_1_REG")]
    Config1,
    #[display(fmt = "EH_CONFIG_REG")]
    EhConfig,
    #[display(fmt = "ED_CONFIG_REG")]
    EdConfig,
}

/// Persistent configuration memory blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ConfigBlock {
    #[display(fmt = "CONFIG_1")]
    Config1,
    #[display(fmt = "EH_CONFIG")]
    EhConfig,
    #[display(fmt = "SRAM_PROT_CONFIG")]
    SramProt,
}

/// Order must follow the `Register` discriminants.
pub const REGISTERS: [Descriptor; 5] = [
    Descriptor {
        name: "STATUS_0_REG",
        address: 0xA0,
        byte: 0,
        masks: &[("SRAM_DATA_RDY", 0x20)],
    },
    Descriptor {
        name: "STATUS_1_REG",
        address: 0xA0,
        byte: 1,
        masks: &[("I2C_IF_LOCKED", 0x02), ("NFC_IF_LOCKED", 0x01)],
    },
    Descriptor {
        name: "CONFIG_1_REG",
        address: 0xA1,
        byte: 1,
        masks: &[("PT_TRANSFER_DIR", 0x01), ("SRAM_ENABLED", 0x02)],
    },
    Descriptor {
        name: "EH_CONFIG_REG",
        address: 0xA7,
        byte: 0,
        masks: &[("EH_LOAD_OK", 0x80), ("EH_TRIGGER", 0x08), ("EH_ENABLE", 0x01)],
    },
    Descriptor {
        name: "ED_CONFIG_REG",
        address: 0xA8,
        byte: 0,
        masks: &[("ED_CONFIG", 0x0F)],
    },
];

/// Order must follow the `ConfigBlock` discriminants.
pub const CONFIGS: [Descriptor; 3] = [
    Descriptor {
        name: "CONFIG_1",
        address: 0x37,
        byte: 1,
        masks: &[("PT_TRANSFER_DIR", 0x01), ("SRAM_ENABLE", 0x02)],
    },
    Descriptor {
        name: "EH_CONFIG",
        address: 0x3D,
        byte: 0,
        masks: &[("EH_ENABLE", 0x01)],
    },
    Descriptor {
        name: "SRAM_PROT_CONFIG",
        address: 0x3F,
        byte: 1,
        masks: &[("SRAM_PROT", 0x01)],
    },
];

impl Register {
    pub const ALL: [Register; 5] = [
        Register::Status0,
        Register::Status1,
        Register::Config1,
        Register::EhConfig,
        Register::EdConfig,
    ];

    pub fn descriptor(self) -> &'static Descriptor {
        &REGISTERS[self as usize]
    }
}

impl ConfigBlock {
    pub const ALL: [ConfigBlock; 3] = [
        ConfigBlock::Config1,
        ConfigBlock::EhConfig,
        ConfigBlock::SramProt,
    ];

    pub fn descriptor(self) -> &'static Descriptor {
        &CONFIGS[self as usize]
    }
}

/// A named mask inside a register (`Field<Register>`) or a configuration
/// block (`Field<ConfigBlock>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<B> {
    pub block: B,
    pub name: &'static str,
    pub mask: u8,
}

// An out-of-range mask index fails const evaluation.
const fn register_field(block: Register, index: usize) -> Field<Register> {
    let (name, mask) = REGISTERS[block as usize].masks[index];
    Field { block, name, mask }
}

const fn config_field(block: ConfigBlock, index: usize) -> Field<ConfigBlock> {
    let (name, mask) = CONFIGS[block as usize].masks[index];
    Field { block, name, mask }
}

pub const SRAM_DATA_RDY: Field<Register> = register_field(Register::Status0, 0);
pub const I2C_IF_LOCKED: Field<Register> = register_field(Register::Status1, 0);
pub const NFC_IF_LOCKED: Field<Register> = register_field(Register::Status1, 1);
pub const PT_TRANSFER_DIR: Field<Register> = register_field(Register::Config1, 0);
pub const SRAM_ENABLED: Field<Register> = register_field(Register::Config1, 1);
pub const EH_LOAD_OK: Field<Register> = register_field(Register::EhConfig, 0);
pub const EH_TRIGGER: Field<Register> = register_field(Register::EhConfig, 1);
pub const EH_ENABLE: Field<Register> = register_field(Register::EhConfig, 2);
pub const ED_CONFIG: Field<Register> = register_field(Register::EdConfig, 0);

pub const CONFIG_PT_TRANSFER_DIR: Field<ConfigBlock> = config_field(ConfigBlock::Config1, 0);
pub const CONFIG_EH_ENABLE: Field<ConfigBlock> = config_field(ConfigBlock::EhConfig, 0);
pub const CONFIG_SRAM_PROT: Field<ConfigBlock> = config_field(ConfigBlock::SramProt, 0);
