// ntag5-bridge/src/transport/mock.rs

use std::collections::BTreeMap;

use crate::constants::{
    BLOCK_SIZE, CMD_READ_CONFIG, CMD_READ_SRAM, CMD_SELECT, CMD_WRITE_CONFIG, CMD_WRITE_SRAM,
    SRAM_END,
};
use crate::registers::{self, Field, Register};
use crate::transport::traits::Transport;
use crate::types::{Block, Direction, Uid};
use crate::utils::{bytes_to_hex, parse_hex};
use crate::{Error, Result};

/// One command seen by the mock, in the order it was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCommand {
    pub flags: u8,
    pub command_code: u8,
    pub payload: String,
}

impl IssuedCommand {
    /// Block address of a tunneled NXP command (second payload byte).
    pub fn address(&self) -> Option<u8> {
        parse_hex(&self.payload).ok()?.get(1).copied()
    }
}

/// Mock transport for unit tests. It records issued commands and answers
/// them from a small simulated tag (registers plus SRAM). Queued responses
/// take precedence over the simulation.
#[derive(Debug)]
pub struct MockTransport {
    pub issued: Vec<IssuedCommand>,
    pub responses: Vec<Result<Vec<String>>>,
    pub inventory_results: Vec<Result<Option<Uid>>>,
    /// Returned by `inventory` once `inventory_results` is drained
    pub default_uid: Option<Uid>,
    pub select_response: Vec<String>,
    pub registers: BTreeMap<u8, Block>,
    pub sram: Vec<u8>,
    /// Clear SRAM_DATA_RDY whenever the SRAM is read, like the tag does
    /// once the NFC side has fetched the message
    pub auto_clear_data_ready: bool,
    /// Testing hook: per command code, number of calls answered with no frames
    pub silent: BTreeMap<u8, usize>,
    /// Record bootstrap calls: "init", "enable_antenna", "set_protocol"
    pub bootstrap_calls: Vec<&'static str>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            issued: Vec::new(),
            responses: Vec::new(),
            inventory_results: Vec::new(),
            default_uid: None,
            select_response: vec![crate::constants::SELECT_SUCCESS.to_string()],
            registers: BTreeMap::new(),
            sram: vec![0; (SRAM_END as usize + 1) * BLOCK_SIZE],
            auto_clear_data_ready: true,
            silent: BTreeMap::new(),
            bootstrap_calls: Vec::new(),
        }
    }

    /// Mock with a tag in the field that accepts select.
    pub fn with_tag(uid: &str) -> Self {
        let mut m = Self::new();
        m.default_uid = Uid::from_hex(uid).ok();
        m
    }

    pub fn push_response(&mut self, resp: Result<Vec<String>>) {
        self.responses.push(resp);
    }

    pub fn push_inventory(&mut self, uid: Option<Uid>) {
        self.inventory_results.push(Ok(uid));
    }

    pub fn push_inventory_error(&mut self, err: Error) {
        self.inventory_results.push(Err(err));
    }

    /// Answer the next `n` commands with `command_code` with no frames.
    pub fn set_silent(&mut self, command_code: u8, n: usize) {
        self.silent.insert(command_code, n);
    }

    /// Set or clear the bits of `field` in the simulated register.
    pub fn set_field(&mut self, field: Field<Register>, on: bool) {
        let d = field.block.descriptor();
        let block = self.registers.entry(d.address).or_default();
        let mut bytes = *block.as_bytes();
        if on {
            bytes[d.byte as usize] |= field.mask;
        } else {
            bytes[d.byte as usize] &= !field.mask;
        }
        *block = Block::from_bytes(bytes);
    }

    /// Overwrite the whole byte a register lives in.
    pub fn set_register(&mut self, register: Register, value: u8) {
        let d = register.descriptor();
        let block = self.registers.entry(d.address).or_default();
        let mut bytes = *block.as_bytes();
        bytes[d.byte as usize] = value;
        *block = Block::from_bytes(bytes);
    }

    pub fn register_block(&self, address: u8) -> Block {
        self.registers.get(&address).copied().unwrap_or_default()
    }

    /// Drive PT_TRANSFER_DIR and ED_CONFIG to the pattern of `direction`.
    pub fn set_direction(&mut self, direction: Direction) {
        let (pt, ed) = match direction {
            Direction::I2cToNfc => (false, 0x03),
            Direction::NfcToI2c => (true, 0x04),
            Direction::Unknown => (true, 0x00),
        };
        self.set_field(registers::PT_TRANSFER_DIR, pt);
        self.set_register(Register::EdConfig, ed);
    }

    /// Place a message in SRAM as the microcontroller would: length header
    /// in byte 0, payload from block 1, data-ready flag set.
    pub fn load_mailbox(&mut self, payload: &[u8]) {
        self.sram.iter_mut().for_each(|b| *b = 0);
        self.sram[0] = payload.len() as u8;
        let start = BLOCK_SIZE;
        let end = (start + payload.len()).min(self.sram.len());
        self.sram[start..end].copy_from_slice(&payload[..end - start]);
        self.set_field(registers::SRAM_DATA_RDY, true);
    }

    pub fn sram_block(&self, address: u8) -> [u8; BLOCK_SIZE] {
        let start = address as usize * BLOCK_SIZE;
        let mut out = [0u8; BLOCK_SIZE];
        out.copy_from_slice(&self.sram[start..start + BLOCK_SIZE]);
        out
    }

    pub fn issued_with_code(&self, command_code: u8) -> Vec<&IssuedCommand> {
        self.issued
            .iter()
            .filter(|c| c.command_code == command_code)
            .collect()
    }

    fn simulate(&mut self, command_code: u8, payload: &[u8]) -> Result<Vec<String>> {
        let address = payload.get(1).copied().unwrap_or(0);
        let count = payload.get(2).map(|c| *c as usize + 1).unwrap_or(1);

        match command_code {
            CMD_SELECT => Ok(self.select_response.clone()),
            CMD_READ_CONFIG => {
                let mut data = Vec::with_capacity(count * BLOCK_SIZE);
                for i in 0..count {
                    let addr = address.wrapping_add(i as u8);
                    data.extend_from_slice(self.register_block(addr).as_bytes());
                }
                Ok(vec![format!("00{}", bytes_to_hex(&data))])
            }
            CMD_WRITE_CONFIG => {
                let block = Block::try_from(payload.get(2..).unwrap_or(&[]))?;
                self.registers.insert(address, block);
                Ok(vec!["00".to_string()])
            }
            CMD_READ_SRAM => {
                let start = address as usize * BLOCK_SIZE;
                let end = ((address as usize + count) * BLOCK_SIZE).min(self.sram.len());
                let data = self.sram.get(start..end).unwrap_or(&[]).to_vec();
                if self.auto_clear_data_ready {
                    self.set_field(registers::SRAM_DATA_RDY, false);
                }
                Ok(vec![format!("00{}", bytes_to_hex(&data))])
            }
            CMD_WRITE_SRAM => {
                let data = payload.get(3..).unwrap_or(&[]);
                let start = address as usize * BLOCK_SIZE;
                let end = (start + data.len()).min(self.sram.len());
                self.sram[start..end].copy_from_slice(&data[..end - start]);
                Ok(vec!["00".to_string()])
            }
            _ => Ok(Vec::new()),
        }
    }
}

impl Transport for MockTransport {
    fn issue(&mut self, flags: u8, command_code: u8, payload_hex: &str) -> Result<Vec<String>> {
        self.issued.push(IssuedCommand {
            flags,
            command_code,
            payload: payload_hex.to_string(),
        });

        if !self.responses.is_empty() {
            return self.responses.remove(0);
        }

        if let Some(n) = self.silent.get_mut(&command_code) {
            if *n > 0 {
                *n -= 1;
                return Ok(Vec::new());
            }
        }

        let payload = parse_hex(payload_hex).map_err(|e| Error::Transport(e.to_string()))?;
        self.simulate(command_code, &payload)
    }

    fn inventory(&mut self) -> Result<Option<Uid>> {
        if self.inventory_results.is_empty() {
            Ok(self.default_uid.clone())
        } else {
            self.inventory_results.remove(0)
        }
    }

    fn init(&mut self) -> Result<()> {
        self.bootstrap_calls.push("init");
        Ok(())
    }

    fn enable_antenna(&mut self) -> Result<()> {
        self.bootstrap_calls.push("enable_antenna");
        Ok(())
    }

    fn set_protocol(&mut self) -> Result<()> {
        self.bootstrap_calls.push("set_protocol");
        Ok(())
    }
}
