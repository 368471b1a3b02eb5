// ntag5-bridge/src/protocol/response.rs

use crate::constants::{RESPONSE_ERROR_FLAG, RESPONSE_HEADER_LEN};
use crate::utils::parse_hex;
use crate::{Error, Result};

/// Decoded response frame: the flags byte and the data that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFrame {
    pub flags: u8,
    pub data: Vec<u8>,
}

impl ResponseFrame {
    /// Parse one hex response frame. A frame with the error flag set is
    /// turned into `Error::TagError` carrying the tag's error code.
    pub fn parse(frame: &str) -> Result<Self> {
        let bytes = parse_hex(frame)?;
        let (&flags, data) = bytes.split_first().ok_or(Error::InvalidLength {
            expected: RESPONSE_HEADER_LEN,
            actual: 0,
        })?;

        if flags & RESPONSE_ERROR_FLAG != 0 {
            return Err(Error::TagError {
                code: data.first().copied().unwrap_or(0),
            });
        }

        Ok(Self {
            flags,
            data: data.to_vec(),
        })
    }
}

/// Parse the first frame of a read response and require at least
/// `expected` data bytes after the header.
pub fn read_data(frames: &[String], address: u8, expected: usize) -> Result<Vec<u8>> {
    let frame = frames.first().ok_or(Error::ReadError {
        address,
        expected: RESPONSE_HEADER_LEN + expected,
        actual: 0,
    })?;

    let parsed = ResponseFrame::parse(frame)?;
    if parsed.data.len() < expected {
        return Err(Error::ReadError {
            address,
            expected: RESPONSE_HEADER_LEN + expected,
            actual: RESPONSE_HEADER_LEN + parsed.data.len(),
        });
    }
    Ok(parsed.data)
}

/// Check a write acknowledgement: at least one frame, no error flag.
pub fn check_ack(frames: &[String], address: u8) -> Result<()> {
    let frame = frames.first().ok_or(Error::WriteError { address })?;
    ResponseFrame::parse(frame).map(|_| ())
}
