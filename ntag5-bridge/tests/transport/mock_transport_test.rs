#[path = "../common/mod.rs"]
mod common;

use ntag5_bridge::Error;
use ntag5_bridge::constants::{CMD_READ_CONFIG, CMD_SELECT};
use ntag5_bridge::transport::{MockTransport, Transport};

#[test]
fn queued_responses_take_precedence() {
    let mut m = MockTransport::with_tag(common::fixtures::SAMPLE_UID);
    m.push_response(Ok(vec!["0102".into()]));

    assert_eq!(m.issue(0x20, CMD_SELECT, "AA").unwrap(), vec!["0102"]);
    assert_eq!(m.issue(0x20, CMD_SELECT, "AA").unwrap(), vec!["00"]);
    assert_eq!(m.issued.len(), 2);
    assert_eq!(m.issued[0].flags, 0x20);
}

#[test]
fn inventory_script_then_default() {
    let mut m = MockTransport::with_tag(common::fixtures::SAMPLE_UID);
    m.push_inventory_error(Error::Transport("no field".into()));
    m.push_inventory(None);

    assert!(m.inventory().is_err());
    assert_eq!(m.inventory().unwrap(), None);
    assert_eq!(m.inventory().unwrap(), Some(common::fixtures::sample_uid()));
}

#[test]
fn boxed_transport_forwards() {
    let mut boxed: Box<dyn Transport> = Box::new(MockTransport::new());
    let frames = boxed.issue(0x00, CMD_READ_CONFIG, "04A000").unwrap();
    assert_eq!(frames, vec!["0000000000"]);
    assert!(boxed.init().is_ok());
}

#[test]
fn malformed_payload_is_a_transport_error() {
    let mut m = MockTransport::new();
    assert!(matches!(
        m.issue(0x00, CMD_READ_CONFIG, "ZZ"),
        Err(Error::Transport(_))
    ));
}
