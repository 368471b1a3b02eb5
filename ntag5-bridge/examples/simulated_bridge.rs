// Simulated mailbox exchange for the NTAG5 bridge.

// Runs the bridge against the in-memory mock tag: the "microcontroller"
// posts a few messages, the bridge answers each one, then the
// microcontroller goes quiet and the watchdog ends the loop. Set
// RUST_LOG=debug to see every register read.

use ntag5_bridge::prelude::*;
use ntag5_bridge::test_support;
use ntag5_bridge::transport::MockTransport;

const UID: &str = "E007046558F6AB1100";

fn main() {
    env_logger::init();

    let mut mock = MockTransport::with_tag(UID);
    mock.set_direction(Direction::I2cToNfc);
    mock.set_field(ntag5_bridge::registers::EH_LOAD_OK, true);

    let config = BridgeConfig::default().with_watchdog(ms(2000));
    let mut bridge = match Bridge::with_clock(mock, config, ManualClock::new()) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("bad configuration: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    for round in 1..=3u8 {
        let message = [round, 0x10, 0x20, 0x30, 0x40];
        let mut sent = false;

        loop {
            let state = match bridge.step() {
                Ok(state) => state,
                Err(e) => {
                    eprintln!("bridge stopped: {}", e);
                    std::process::exit(e.exit_code());
                }
            };

            match state {
                BridgeState::WaitI2cToNfc if !sent => {
                    test_support::seed_i2c_message(bridge.transport_mut(), &message);
                    sent = true;
                }
                BridgeState::WaitNfcToI2c => {
                    if let Some(msg) = bridge.take_inbound() {
                        println!("round {}: got {}", round, bytes_to_hex_spaced(msg.message()));
                    }
                    bridge.transport_mut().set_direction(Direction::NfcToI2c);
                }
                BridgeState::WaitI2cToNfc if bridge.exchanges() == round as u64 => break,
                _ => {}
            }
            bridge.clock_mut().advance(ms(300));
        }

        let reply = bridge.transport().sram_block(0x00);
        println!("round {}: replied {}", round, bytes_to_hex_spaced(&reply));
    }

    println!("microcontroller goes quiet, waiting for the watchdog");
    match bridge.run() {
        Ok(never) => match never {},
        Err(e) => {
            eprintln!("bridge stopped: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
