// fixtures.rs: commonly used UIDs, payloads and response frames

use ntag5_bridge::types::Uid;

pub const SAMPLE_UID: &str = "E007046558F6AB1100";

pub fn sample_uid() -> Uid {
    Uid::from_hex(SAMPLE_UID).unwrap()
}

/// Outbound payload the bridge writes unless told otherwise.
pub fn default_outbound() -> Vec<u8> {
    hex::decode("0000FFFF").unwrap()
}

/// `blocks` whole blocks of counting bytes, as a microcontroller test
/// firmware would leave them in SRAM.
pub fn counting_payload(blocks: usize) -> Vec<u8> {
    (0..blocks * 4).map(|i| (i % 251) as u8).collect()
}

/// Successful read response: flags byte 0x00 followed by `data`.
pub fn ok_frame(data: &[u8]) -> String {
    format!("00{}", hex::encode_upper(data))
}

/// Error response carrying an ISO15693 error code.
pub fn error_frame(code: u8) -> String {
    format!("01{:02X}", code)
}
