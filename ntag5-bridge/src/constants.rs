// ntag5-bridge/src/constants.rs
//! Wire-level constants shared across the crate

/// Size of one tag memory block in bytes
pub const BLOCK_SIZE: usize = 4;

/// First SRAM block (holds the mailbox length header)
pub const SRAM_START: u8 = 0x00;

/// Last SRAM block, reserved for the end-of-message terminator
pub const SRAM_END: u8 = 0x3F;

/// Number of SRAM blocks between the header block and the terminator block
pub const MAILBOX_PAYLOAD_BLOCKS: usize = (SRAM_END - SRAM_START - 1) as usize;

/// Hard transport limit: blocks returned by a single read request
pub const MAX_BLOCKS_PER_READ: usize = 15;

/// Terminator block written to `SRAM_END` after every mailbox write
pub const TERMINATOR_BLOCK: [u8; BLOCK_SIZE] = [0xFF; BLOCK_SIZE];

/// First and last address of the volatile session register range
pub const REGISTER_START: u8 = 0xA0;
pub const REGISTER_END: u8 = 0xA8;

/// NXP IC manufacturer code, first payload byte of every custom command
pub const NXP_MANUFACTURER_CODE: u8 = 0x04;

/// ISO15693 SELECT command code
pub const CMD_SELECT: u8 = 0x25;

/// NTAG5 custom command codes
pub const CMD_READ_CONFIG: u8 = 0xC0;
pub const CMD_WRITE_CONFIG: u8 = 0xC1;
pub const CMD_READ_SRAM: u8 = 0xD2;
pub const CMD_WRITE_SRAM: u8 = 0xD3;

/// Response frame a tag returns for a successful select
pub const SELECT_SUCCESS: &str = "00";

/// Bit 0 of an ISO15693 response flags byte: the tag reported an error
pub const RESPONSE_ERROR_FLAG: u8 = 0x01;

/// Length in bytes of the response flags header preceding response data
pub const RESPONSE_HEADER_LEN: usize = 1;
