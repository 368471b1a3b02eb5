// ntag5-bridge/src/protocol/commands.rs

use crate::constants::{
    CMD_READ_CONFIG, CMD_READ_SRAM, CMD_SELECT, CMD_WRITE_CONFIG, CMD_WRITE_SRAM,
    NXP_MANUFACTURER_CODE,
};
use crate::types::{Block, Uid};

/// Tunneled tag commands. New commands should be added here together with
/// their code and payload layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select {
        uid: Uid,
    },
    ReadConfig {
        address: u8,
        blocks: u8,
    },
    WriteConfig {
        address: u8,
        block: Block,
    },
    ReadSram {
        address: u8,
        blocks: u8,
    },
    /// `data` must hold whole blocks.
    WriteSram {
        address: u8,
        data: Vec<u8>,
    },
}

impl Command {
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Select { .. } => CMD_SELECT,
            Self::ReadConfig { .. } => CMD_READ_CONFIG,
            Self::WriteConfig { .. } => CMD_WRITE_CONFIG,
            Self::ReadSram { .. } => CMD_READ_SRAM,
            Self::WriteSram { .. } => CMD_WRITE_SRAM,
        }
    }

    /// Block address the command targets, if any.
    pub fn address(&self) -> Option<u8> {
        match self {
            Self::Select { .. } => None,
            Self::ReadConfig { address, .. }
            | Self::WriteConfig { address, .. }
            | Self::ReadSram { address, .. }
            | Self::WriteSram { address, .. } => Some(*address),
        }
    }

    /// Encode the command parameters (everything after the command code).
    ///
    /// Block counts go on the wire as `count - 1`.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Select { uid } => uid.to_bytes(),
            Self::ReadConfig { address, blocks } | Self::ReadSram { address, blocks } => {
                vec![NXP_MANUFACTURER_CODE, *address, blocks.saturating_sub(1)]
            }
            Self::WriteConfig { address, block } => {
                let mut buf = vec![NXP_MANUFACTURER_CODE, *address];
                buf.extend_from_slice(block.as_bytes());
                buf
            }
            Self::WriteSram { address, data } => {
                let blocks = data.len().div_ceil(crate::constants::BLOCK_SIZE);
                let mut buf = vec![
                    NXP_MANUFACTURER_CODE,
                    *address,
                    (blocks as u8).saturating_sub(1),
                ];
                buf.extend_from_slice(data);
                buf
            }
        }
    }

    pub fn encode_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.encode())
    }
}
