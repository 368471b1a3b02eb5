// ntag5-bridge/src/config.rs
//! Bridge configuration.

use std::time::Duration;

use crate::constants::{BLOCK_SIZE, MAILBOX_PAYLOAD_BLOCKS};
use crate::protocol::RequestFlags;
use crate::utils::{default_tick_interval, default_watchdog};
use crate::{Error, Result};

/// Payload written to the mailbox on every NFC -> I2C turn unless the
/// application replaces it.
pub const DEFAULT_OUTBOUND: [u8; 4] = [0x00, 0x00, 0xFF, 0xFF];

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BridgeConfig {
    /// Sleep between two state machine ticks
    pub tick_interval: Duration,
    /// Maximum time without mailbox progress in the I2C -> NFC state
    pub watchdog: Duration,
    /// Run the energy-harvest bootstrap before the first exchange
    pub energy_harvest: bool,
    /// Only accept a known direction while the I2C side does not hold the
    /// interface lock
    pub require_unlocked_i2c: bool,
    /// Payload written on every NFC -> I2C turn
    pub outbound: Vec<u8>,
    /// Request flags for tunneled commands
    pub request_flags: RequestFlags,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            tick_interval: default_tick_interval(),
            watchdog: default_watchdog(),
            energy_harvest: true,
            require_unlocked_i2c: false,
            outbound: DEFAULT_OUTBOUND.to_vec(),
            request_flags: RequestFlags::default(),
        }
    }
}

impl BridgeConfig {
    pub fn with_tick_interval(mut self, d: Duration) -> Self {
        self.tick_interval = d;
        self
    }

    pub fn with_watchdog(mut self, d: Duration) -> Self {
        self.watchdog = d;
        self
    }

    pub fn with_energy_harvest(mut self, enabled: bool) -> Self {
        self.energy_harvest = enabled;
        self
    }

    pub fn with_require_unlocked_i2c(mut self, strict: bool) -> Self {
        self.require_unlocked_i2c = strict;
        self
    }

    pub fn with_outbound(mut self, payload: Vec<u8>) -> Self {
        self.outbound = payload;
        self
    }

    pub fn with_request_flags(mut self, flags: RequestFlags) -> Self {
        self.request_flags = flags;
        self
    }

    /// Reject settings the bridge loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval.is_zero() {
            return Err(Error::InvalidSettings(
                "tick interval must be non-zero".into(),
            ));
        }
        if self.watchdog <= self.tick_interval {
            return Err(Error::InvalidSettings(format!(
                "watchdog {:?} must exceed tick interval {:?}",
                self.watchdog, self.tick_interval
            )));
        }
        validate_outbound(&self.outbound)
    }
}

/// Outbound payloads must fit between block 0x00 and the terminator.
pub fn validate_outbound(payload: &[u8]) -> Result<()> {
    let max = (MAILBOX_PAYLOAD_BLOCKS + 1) * BLOCK_SIZE;
    if payload.is_empty() || payload.len() > max {
        return Err(Error::InvalidLength {
            expected: max,
            actual: payload.len(),
        });
    }
    Ok(())
}
