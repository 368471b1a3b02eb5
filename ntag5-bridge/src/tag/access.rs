// ntag5-bridge/src/tag/access.rs
//! Block-level register and configuration access.

use log::warn;

use crate::constants::{BLOCK_SIZE, REGISTER_END, REGISTER_START, SRAM_END};
use crate::protocol::response::{check_ack, read_data};
use crate::protocol::Command;
use crate::registers::{ConfigBlock, Descriptor, Field, Register};
use crate::transport::Transport;
use crate::types::Block;
use crate::{Error, Result};

use super::Tag;

/// Block addresses the tag answers READ_CONFIG/WRITE_CONFIG for.
pub fn is_valid_block_address(address: u8) -> bool {
    address <= SRAM_END || (REGISTER_START..=REGISTER_END).contains(&address)
}

impl<T: Transport> Tag<T> {
    /// Read one 4-byte block.
    pub fn read_block(&mut self, address: u8) -> Result<Block> {
        if !is_valid_block_address(address) {
            return Err(Error::InvalidAddress(address));
        }

        let frames = self.execute(&Command::ReadConfig { address, blocks: 1 })?;
        let data = read_data(&frames, address, BLOCK_SIZE)?;
        Block::try_from(&data[..BLOCK_SIZE])
    }

    /// Read byte `offset` (0..=3) of the block at `address`.
    pub fn read_byte(&mut self, address: u8, offset: u8) -> Result<u8> {
        if offset as usize >= BLOCK_SIZE {
            return Err(Error::InvalidOffset(offset));
        }
        self.read_block(address)?.byte(offset)
    }

    /// Whole byte of a session register.
    pub fn read_register(&mut self, register: Register) -> Result<u8> {
        self.read_descriptor(register.descriptor())
    }

    /// `byte & mask` for a register field. Not normalized to 0/1.
    pub fn read_register_bit(&mut self, field: Field<Register>) -> Result<u8> {
        Ok(self.read_register(field.block)? & field.mask)
    }

    /// `byte & mask` for a configuration memory field.
    pub fn read_config_bit(&mut self, field: Field<ConfigBlock>) -> Result<u8> {
        Ok(self.read_descriptor(field.block.descriptor())? & field.mask)
    }

    /// Write a 32-bit value to a block, least significant byte first.
    ///
    /// Fire-and-forget: returns whether the tag acknowledged. Callers
    /// verify the effect by reading the register back.
    pub fn write_block(&mut self, address: u8, value: u32) -> bool {
        if !is_valid_block_address(address) {
            warn!("write refused: {}", Error::InvalidAddress(address));
            return false;
        }

        let block = Block::from_register_value(value);
        let result = self
            .execute(&Command::WriteConfig { address, block })
            .and_then(|frames| check_ack(&frames, address));

        match result {
            Ok(()) => true,
            Err(e) => {
                warn!("write of {} to block {:#04x} failed: {}", block.to_hex(), address, e);
                false
            }
        }
    }

    fn read_descriptor(&mut self, d: &Descriptor) -> Result<u8> {
        self.read_byte(d.address, d.byte)
    }
}
