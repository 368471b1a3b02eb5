#[path = "../common/mod.rs"]
mod common;

use common::fixtures::SAMPLE_UID;
use common::helpers;
use ntag5_bridge::Error;
use ntag5_bridge::bridge::{Bridge, BridgeState};
use ntag5_bridge::config::BridgeConfig;
use ntag5_bridge::transport::MockTransport;
use ntag5_bridge::types::Direction;
use ntag5_bridge::utils::{ManualClock, ms};

#[test]
fn silent_microcontroller_trips_watchdog() {
    common::init_logging();
    let mock = helpers::powered_tag(SAMPLE_UID);
    let mut bridge = helpers::bridge_waiting_for_i2c(mock, BridgeConfig::default()).unwrap();

    bridge.clock_mut().advance(ms(5000));
    assert_eq!(bridge.step().unwrap(), BridgeState::WaitI2cToNfc);

    bridge.clock_mut().advance(ms(1));
    let err = bridge.step().unwrap_err();
    assert!(matches!(err, Error::Timeout { elapsed_ms: 5001 }));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(bridge.state(), BridgeState::Fatal);
}

#[test]
fn completed_exchange_rearms_watchdog() {
    let mock = helpers::powered_tag(SAMPLE_UID);
    let mut bridge = helpers::bridge_waiting_for_i2c(mock, BridgeConfig::default()).unwrap();

    bridge.clock_mut().advance(ms(4000));
    helpers::seed_i2c_message(bridge.transport_mut(), &[1, 2, 3, 4]);
    bridge.step().unwrap();
    bridge.transport_mut().set_direction(Direction::NfcToI2c);
    assert_eq!(bridge.step().unwrap(), BridgeState::WaitI2cToNfc);

    bridge.clock_mut().advance(ms(4000));
    assert_eq!(bridge.step().unwrap(), BridgeState::WaitI2cToNfc);
}

#[test]
fn run_ends_with_timeout_when_nothing_arrives() {
    let mut mock = MockTransport::with_tag(SAMPLE_UID);
    mock.set_direction(Direction::I2cToNfc);
    let config = BridgeConfig::default()
        .with_energy_harvest(false)
        .with_tick_interval(ms(100))
        .with_watchdog(ms(1000));
    let mut bridge = Bridge::with_clock(mock, config, ManualClock::new()).unwrap();

    let err = bridge.run().unwrap_err();
    assert!(matches!(err, Error::Timeout { .. }));
    assert_ne!(err.exit_code(), 0);
    assert_eq!(bridge.state(), BridgeState::Fatal);
}

#[test]
fn fatal_state_refuses_to_step() {
    let mock = helpers::powered_tag(SAMPLE_UID);
    let mut bridge = helpers::bridge_waiting_for_i2c(mock, BridgeConfig::default()).unwrap();
    bridge.clock_mut().advance(ms(6000));
    assert!(bridge.step().is_err());

    assert!(matches!(bridge.step(), Err(Error::Fatal(_))));
}
