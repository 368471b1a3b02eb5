// ntag5-bridge/src/types.rs

use crate::constants::BLOCK_SIZE;
use crate::{Error, Result};
use derive_more::Display;
use std::convert::TryFrom;

/// Tag UID as reported by inventory - Newtype Pattern
///
/// Stored as uppercase hex exactly as the transport reported it; select
/// sends it back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct Uid(String);

impl Uid {
    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes = crate::utils::parse_hex(hex)?;
        if bytes.is_empty() {
            return Err(Error::InvalidLength {
                expected: 8,
                actual: 0,
            });
        }
        Ok(Self(crate::utils::bytes_to_hex(&bytes)))
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        // validated on construction
        crate::utils::parse_hex(&self.0).unwrap_or_default()
    }
}

impl TryFrom<&str> for Uid {
    type Error = Error;

    fn try_from(hex: &str) -> Result<Self> {
        Self::from_hex(hex)
    }
}

/// One tag memory block (4 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Block([u8; BLOCK_SIZE]);

impl Block {
    pub fn from_bytes(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    /// Block holding a 32-bit register value in device order: the value's
    /// big-endian bytes reversed, i.e. little-endian.
    pub fn from_register_value(value: u32) -> Self {
        Self(value.to_le_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }

    /// Byte `offset` (0..=3) of the block.
    pub fn byte(&self, offset: u8) -> Result<u8> {
        self.0
            .get(offset as usize)
            .copied()
            .ok_or(Error::InvalidOffset(offset))
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

impl TryFrom<&[u8]> for Block {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != BLOCK_SIZE {
            return Err(Error::InvalidLength {
                expected: BLOCK_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; BLOCK_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Which side currently owns the right to write the SRAM mailbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Direction {
    /// Microcontroller writes, NFC reads
    #[display(fmt = "I2C_NFC")]
    I2cToNfc,
    /// NFC writes, microcontroller reads
    #[display(fmt = "NFC_I2C")]
    NfcToI2c,
    #[display(fmt = "UNKNOWN")]
    Unknown,
}

impl Direction {
    /// Decode the pass-through direction from the masked `PT_TRANSFER_DIR`
    /// and `ED_CONFIG` values.
    pub fn decode(pt_transfer_dir: u8, ed_config: u8) -> Self {
        match (pt_transfer_dir, ed_config) {
            (0x00, 0x03) => Direction::I2cToNfc,
            (0x01, 0x04) => Direction::NfcToI2c,
            _ => Direction::Unknown,
        }
    }
}
