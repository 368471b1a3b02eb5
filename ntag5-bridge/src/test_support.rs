//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::bridge::{Bridge, BridgeState};
use crate::config::BridgeConfig;
use crate::registers;
use crate::transport::mock::MockTransport;
use crate::types::Direction;
use crate::utils::ManualClock;
use crate::Result;

/// Build a MockTransport with a selectable tag, energy harvesting already
/// reporting EH_LOAD_OK and the mailbox owned by the microcontroller.
#[doc(hidden)]
pub fn powered_tag(uid: &str) -> MockTransport {
    let mut mock = MockTransport::with_tag(uid);
    mock.set_field(registers::EH_LOAD_OK, true);
    mock.set_direction(Direction::I2cToNfc);
    mock
}

/// Convenience: bridge on a manual clock, stepped until it waits for the
/// first I2C -> NFC message.
#[doc(hidden)]
pub fn bridge_waiting_for_i2c(
    mock: MockTransport,
    config: BridgeConfig,
) -> Result<Bridge<MockTransport, ManualClock>> {
    let mut bridge = Bridge::with_clock(mock, config, ManualClock::new())?;
    for _ in 0..4 {
        if bridge.step()? == BridgeState::WaitI2cToNfc {
            break;
        }
    }
    Ok(bridge)
}

/// Put a message in the mock's mailbox and hand the turn to the NFC side
/// for reading.
#[doc(hidden)]
pub fn seed_i2c_message(mock: &mut MockTransport, payload: &[u8]) {
    mock.set_direction(Direction::I2cToNfc);
    mock.load_mailbox(payload);
}
