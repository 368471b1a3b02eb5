#[path = "../common/mod.rs"]
mod common;

use common::fixtures::counting_payload;
use ntag5_bridge::constants::{CMD_READ_SRAM, CMD_WRITE_SRAM};
use ntag5_bridge::mailbox;
use ntag5_bridge::tag::Tag;
use ntag5_bridge::transport::MockTransport;
use ntag5_bridge::Error;

fn chunk_reads(tag: &Tag<MockTransport>) -> Vec<(u8, String)> {
    tag.transport()
        .issued_with_code(CMD_READ_SRAM)
        .into_iter()
        .skip(1) // header probe
        .map(|c| (c.address().unwrap(), c.payload.clone()))
        .collect()
}

#[test]
fn chunk_layout_for_typical_sizes() {
    let cases: Vec<(usize, Vec<(u8, u8)>)> = vec![
        (1, vec![(0x01, 1)]),
        (15, vec![(0x01, 15)]),
        (16, vec![(0x01, 15), (0x10, 1)]),
        (45, vec![(0x01, 15), (0x10, 15), (0x1F, 15)]),
        (60, vec![(0x01, 15), (0x10, 15), (0x1F, 15), (0x2E, 15)]),
    ];

    for (blocks, expected) in &cases {
        let mut mock = MockTransport::new();
        mock.load_mailbox(&counting_payload(*blocks));
        let mut tag = Tag::new(mock);

        let msg = mailbox::read(&mut tag, None).unwrap();
        assert!(msg.is_complete(), "{} blocks", blocks);
        assert_eq!(msg.payload.len(), blocks * 4);

        let reads = chunk_reads(&tag);
        assert_eq!(reads.len(), expected.len(), "{} blocks", blocks);
        for ((addr, payload), (want_addr, want_blocks)) in reads.iter().zip(expected.iter()) {
            assert_eq!(addr, want_addr);
            assert_eq!(payload, &format!("04{:02X}{:02X}", want_addr, want_blocks - 1));
        }
    }
}

#[test]
fn payload_is_concatenated_in_address_order() {
    let data = counting_payload(20);
    let mut mock = MockTransport::new();
    mock.load_mailbox(&data);
    let mut tag = Tag::new(mock);

    let msg = mailbox::read(&mut tag, None).unwrap();
    assert_eq!(msg.declared_len, 80);
    assert_eq!(msg.message(), &data[..]);
}

#[test]
fn silent_chunk_is_reported_not_fatal() {
    let mut mock = MockTransport::new();
    mock.load_mailbox(&counting_payload(30));
    // header probe answers, first payload chunk stays silent
    mock.push_response(Ok(vec![common::fixtures::ok_frame(&[120, 0, 0, 0])]));
    mock.push_response(Ok(Vec::new()));
    let mut tag = Tag::new(mock);

    let msg = mailbox::read(&mut tag, None).unwrap();
    assert!(!msg.is_complete());
    assert_eq!(msg.short_chunks.len(), 1);
    assert_eq!(msg.short_chunks[0].address, 0x01);
    assert_eq!(msg.payload.len(), 15 * 4);
}

#[test]
fn empty_header_probe_fails() {
    let mut mock = MockTransport::new();
    mock.set_silent(CMD_READ_SRAM, 1);
    let mut tag = Tag::new(mock);
    assert_eq!(mailbox::read(&mut tag, None), Err(Error::HeaderReadError));
}

#[test]
fn write_sends_payload_then_terminator() {
    let mut tag = Tag::new(MockTransport::new());
    mailbox::write(&mut tag, &common::fixtures::default_outbound()).unwrap();

    let writes = tag.transport().issued_with_code(CMD_WRITE_SRAM);
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0].payload, "0400000000FFFF");
    assert_eq!(writes[1].payload, "043F00FFFFFFFF");
    assert_eq!(tag.transport().sram_block(0x3F), [0xFF; 4]);
}

#[test]
fn terminator_skipped_when_payload_write_fails() {
    let mut mock = MockTransport::new();
    mock.set_silent(CMD_WRITE_SRAM, 1);
    let mut tag = Tag::new(mock);

    assert_eq!(
        mailbox::write(&mut tag, &[0x01, 0x02]),
        Err(Error::WriteError { address: 0x00 })
    );
    assert_eq!(tag.transport().issued_with_code(CMD_WRITE_SRAM).len(), 1);
}
