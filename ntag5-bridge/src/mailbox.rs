// ntag5-bridge/src/mailbox.rs
//! Chunked access to the SRAM mailbox.
//!
//! Layout: byte 0 of block 0x00 holds the message length in bytes, the
//! payload starts at block 0x01 and block 0x3F is the terminator. The
//! reader returns at most 15 blocks per request, so payload reads are split
//! into consecutive windows.

use log::{debug, warn};

use crate::constants::{
    BLOCK_SIZE, MAILBOX_PAYLOAD_BLOCKS, MAX_BLOCKS_PER_READ, SRAM_END, SRAM_START,
    TERMINATOR_BLOCK,
};
use crate::protocol::Command;
use crate::protocol::response::{ResponseFrame, check_ack, read_data};
use crate::tag::Tag;
use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// One payload read request: `blocks` blocks starting at `address`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub address: u8,
    pub blocks: u8,
}

impl Chunk {
    pub fn byte_len(&self) -> usize {
        self.blocks as usize * BLOCK_SIZE
    }
}

/// Number of whole blocks needed for `len` bytes.
pub fn blocks_for_len(len: usize) -> usize {
    len.div_ceil(BLOCK_SIZE)
}

/// Split a payload of `blocks` blocks into reads of at most
/// `MAX_BLOCKS_PER_READ`, starting right after the header block. The count
/// is clamped to the blocks available before the terminator.
pub fn plan_chunks(blocks: usize) -> Vec<Chunk> {
    let blocks = blocks.min(MAILBOX_PAYLOAD_BLOCKS);
    let first = SRAM_START as usize + 1;

    (0..blocks)
        .step_by(MAX_BLOCKS_PER_READ)
        .map(|done| Chunk {
            address: (first + done) as u8,
            blocks: (blocks - done).min(MAX_BLOCKS_PER_READ) as u8,
        })
        .collect()
}

/// Message fetched from the mailbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailboxMessage {
    /// Length header as written by the microcontroller
    pub declared_len: u8,
    /// Payload blocks requested
    pub blocks: usize,
    /// Concatenated chunk data in address order
    pub payload: Vec<u8>,
    /// Chunks that came back empty or short
    pub short_chunks: Vec<Chunk>,
}

impl MailboxMessage {
    pub fn is_complete(&self) -> bool {
        self.short_chunks.is_empty()
    }

    /// Payload cut to the declared length.
    pub fn message(&self) -> &[u8] {
        let len = (self.declared_len as usize).min(self.payload.len());
        &self.payload[..len]
    }
}

/// Read the mailbox.
///
/// The header block is always probed; `total_blocks` overrides the block
/// count derived from it. A chunk that returns no frames contributes no
/// bytes and is listed in `short_chunks`.
pub fn read<T: Transport>(tag: &mut Tag<T>, total_blocks: Option<usize>) -> Result<MailboxMessage> {
    let probe = tag.execute(&Command::ReadSram {
        address: SRAM_START,
        blocks: 1,
    })?;
    if probe.is_empty() {
        return Err(Error::HeaderReadError);
    }
    let declared_len = read_data(&probe, SRAM_START, 1)?[0];

    let blocks = total_blocks
        .unwrap_or_else(|| blocks_for_len(declared_len as usize))
        .min(MAILBOX_PAYLOAD_BLOCKS);
    debug!("mailbox declares {} bytes, reading {} blocks", declared_len, blocks);

    let mut payload = Vec::with_capacity(blocks * BLOCK_SIZE);
    let mut short_chunks = Vec::new();

    for chunk in plan_chunks(blocks) {
        let frames = tag.execute(&Command::ReadSram {
            address: chunk.address,
            blocks: chunk.blocks,
        })?;

        let Some(frame) = frames.first() else {
            warn!(
                "mailbox chunk at {:#04x} ({} blocks) returned no frames",
                chunk.address, chunk.blocks
            );
            short_chunks.push(chunk);
            continue;
        };

        let mut data = ResponseFrame::parse(frame)?.data;
        if data.len() < chunk.byte_len() {
            warn!(
                "mailbox chunk at {:#04x} returned {} of {} bytes",
                chunk.address,
                data.len(),
                chunk.byte_len()
            );
            short_chunks.push(chunk);
        }
        data.truncate(chunk.byte_len());
        payload.extend_from_slice(&data);
    }

    Ok(MailboxMessage {
        declared_len,
        blocks,
        payload,
        short_chunks,
    })
}

/// Write `payload` to the mailbox, then mark the end of the message.
///
/// The payload goes to block 0x00 padded to whole blocks; the terminator
/// is only written once the payload write was acknowledged.
pub fn write<T: Transport>(tag: &mut Tag<T>, payload: &[u8]) -> Result<()> {
    let blocks = blocks_for_len(payload.len());
    let max_blocks = MAILBOX_PAYLOAD_BLOCKS + 1;
    if blocks == 0 || blocks > max_blocks {
        return Err(Error::InvalidLength {
            expected: max_blocks * BLOCK_SIZE,
            actual: payload.len(),
        });
    }

    let mut data = payload.to_vec();
    data.resize(blocks * BLOCK_SIZE, 0x00);
    debug!("mailbox write {} blocks: {}", blocks, bytes_to_hex_spaced(&data));

    let frames = tag.execute(&Command::WriteSram {
        address: SRAM_START,
        data,
    })?;
    check_ack(&frames, SRAM_START)?;

    let frames = tag.execute(&Command::WriteSram {
        address: SRAM_END,
        data: TERMINATOR_BLOCK.to_vec(),
    })?;
    check_ack(&frames, SRAM_END)
}
