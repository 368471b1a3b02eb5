#[path = "../common/mod.rs"]
mod common;

use ntag5_bridge::constants::{CMD_READ_CONFIG, CMD_WRITE_CONFIG};
use ntag5_bridge::registers::{self, Register};
use ntag5_bridge::tag::Tag;
use ntag5_bridge::transport::MockTransport;
use ntag5_bridge::Error;

#[test]
fn register_bits_are_masked_not_normalized() {
    common::init_logging();
    let mut mock = MockTransport::new();
    mock.set_field(registers::EH_LOAD_OK, true);
    mock.set_field(registers::SRAM_DATA_RDY, true);
    let mut tag = Tag::new(mock);

    assert_eq!(tag.read_register_bit(registers::EH_LOAD_OK).unwrap(), 0x80);
    assert_eq!(tag.read_register_bit(registers::SRAM_DATA_RDY).unwrap(), 0x20);
    assert_eq!(tag.read_register_bit(registers::EH_TRIGGER).unwrap(), 0x00);
}

#[test]
fn status_bytes_share_one_block() {
    let mut mock = MockTransport::new();
    mock.set_field(registers::I2C_IF_LOCKED, true);
    let mut tag = Tag::new(mock);

    assert_eq!(tag.read_register(Register::Status0).unwrap(), 0x00);
    assert_eq!(tag.read_register(Register::Status1).unwrap(), 0x02);

    let reads = tag.transport().issued_with_code(CMD_READ_CONFIG);
    assert!(reads.iter().all(|c| c.address() == Some(0xA0)));
}

#[test]
fn out_of_range_address_is_rejected_before_io() {
    let mut tag = Tag::new(MockTransport::new());
    assert_eq!(tag.read_block(0x50), Err(Error::InvalidAddress(0x50)));
    assert_eq!(tag.read_byte(0xA0, 4), Err(Error::InvalidOffset(4)));
    assert!(tag.transport().issued.is_empty());
}

#[test]
fn write_to_unmapped_address_is_never_sent() {
    let mut tag = Tag::new(MockTransport::new());
    assert!(!tag.write_block(0x50, 0x01));
    assert!(tag.transport().issued_with_code(CMD_WRITE_CONFIG).is_empty());
    assert_eq!(tag.transport().register_block(0x50).as_bytes(), &[0; 4]);
}

#[test]
fn tag_error_frame_propagates() {
    let mut mock = MockTransport::new();
    mock.push_response(Ok(vec![common::fixtures::error_frame(0x0F)]));
    let mut tag = Tag::new(mock);
    assert_eq!(
        tag.read_register(Register::EhConfig),
        Err(Error::TagError { code: 0x0F })
    );
}

#[test]
fn write_block_reports_ack() {
    let mut mock = MockTransport::new();
    mock.push_response(Ok(Vec::new()));
    let mut tag = Tag::new(mock);

    assert!(!tag.write_block(0xA7, 0x09));
    assert!(tag.write_block(0xA7, 0x09));
    assert_eq!(tag.transport().register_block(0xA7).as_bytes(), &[0x09, 0, 0, 0]);
}
