#[path = "../common/mod.rs"]
mod common;

use ntag5_bridge::protocol::Command;
use ntag5_bridge::types::Block;

#[test]
fn custom_commands_start_with_manufacturer_code() {
    let cmds = [
        Command::ReadConfig {
            address: 0xA0,
            blocks: 1,
        },
        Command::WriteConfig {
            address: 0xA7,
            block: Block::from_register_value(0x09),
        },
        Command::ReadSram {
            address: 0x00,
            blocks: 1,
        },
        Command::WriteSram {
            address: 0x3F,
            data: vec![0xFF; 4],
        },
    ];

    for cmd in &cmds {
        let payload = cmd.encode();
        assert_eq!(payload[0], 0x04, "{:?}", cmd);
        assert_eq!(Some(payload[1]), cmd.address(), "{:?}", cmd);
    }
}

#[test]
fn command_codes() {
    let select = Command::Select {
        uid: common::fixtures::sample_uid(),
    };
    assert_eq!(select.command_code(), 0x25);
    assert_eq!(select.encode_hex(), common::fixtures::SAMPLE_UID);

    assert_eq!(
        Command::ReadConfig {
            address: 0xA0,
            blocks: 1
        }
        .command_code(),
        0xC0
    );
    assert_eq!(
        Command::ReadSram {
            address: 0x01,
            blocks: 15
        }
        .command_code(),
        0xD2
    );
}

#[test]
fn trigger_value_goes_out_little_endian() {
    let cmd = Command::WriteConfig {
        address: 0xA7,
        block: Block::from_register_value(0x0000_0009),
    };
    assert_eq!(hex::encode_upper(cmd.encode()), "04A709000000");
}

#[test]
fn sram_chunk_counts_are_minus_one() {
    let cmd = Command::ReadSram {
        address: 0x2E,
        blocks: 15,
    };
    assert_eq!(cmd.encode(), vec![0x04, 0x2E, 0x0E]);

    let write = Command::WriteSram {
        address: 0x00,
        data: common::fixtures::default_outbound(),
    };
    assert_eq!(write.encode_hex(), "0400000000FFFF");
}
