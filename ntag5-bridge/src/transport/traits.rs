// ntag5-bridge/src/transport/traits.rs

use crate::Result;
use crate::types::Uid;

/// Transport trait abstracts the RF reader away from tag/mailbox logic.
///
/// Framing, CRC and retries belong to the implementation; the bridge only
/// sees hex strings.
pub trait Transport {
    /// Send one tunneled command and return the response frames as hex
    /// strings. An empty vector means the tag did not answer.
    fn issue(&mut self, flags: u8, command_code: u8, payload_hex: &str) -> Result<Vec<String>>;

    /// Single-tag inventory. `Ok(None)` when no tag is in the field.
    fn inventory(&mut self) -> Result<Option<Uid>>;

    /// Reader bootstrap. Default implementation does nothing so
    /// transports without a separate init step keep working.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Switch the RF field on.
    fn enable_antenna(&mut self) -> Result<()> {
        Ok(())
    }

    /// Put the reader into ISO15693 mode.
    fn set_protocol(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn issue(&mut self, flags: u8, command_code: u8, payload_hex: &str) -> Result<Vec<String>> {
        (**self).issue(flags, command_code, payload_hex)
    }

    fn inventory(&mut self) -> Result<Option<Uid>> {
        (**self).inventory()
    }

    fn init(&mut self) -> Result<()> {
        (**self).init()
    }

    fn enable_antenna(&mut self) -> Result<()> {
        (**self).enable_antenna()
    }

    fn set_protocol(&mut self) -> Result<()> {
        (**self).set_protocol()
    }
}
