// ntag5-bridge/src/tag/mod.rs

use log::debug;

use crate::Result;
use crate::protocol::{Command, RequestFlags};
use crate::transport::Transport;

mod access;

pub use access::is_valid_block_address;

/// Handle to the NTAG5 in the field. Owns the transport and the request
/// flags used for tunneled commands.
pub struct Tag<T: Transport> {
    transport: T,
    flags: RequestFlags,
}

impl<T: Transport> Tag<T> {
    pub fn new(transport: T) -> Self {
        Self::with_flags(transport, RequestFlags::default())
    }

    pub fn with_flags(transport: T, flags: RequestFlags) -> Self {
        Self { transport, flags }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Issue a command with the tag's request flags. SELECT always goes out
    /// in addressed mode since the UID is its payload.
    pub fn execute(&mut self, cmd: &Command) -> Result<Vec<String>> {
        let flags = match cmd {
            Command::Select { .. } => self.flags.addressed(),
            _ => self.flags,
        };
        self.execute_with_flags(flags, cmd)
    }

    pub fn execute_with_flags(&mut self, flags: RequestFlags, cmd: &Command) -> Result<Vec<String>> {
        let code = cmd.command_code();
        let payload = cmd.encode_hex();
        debug!(
            "-> cmd={:#04x} flags={:#04x} payload={}",
            code,
            flags.encode(),
            payload
        );

        let frames = self.transport.issue(flags.encode(), code, &payload)?;
        debug!("<- cmd={:#04x} frames={:?}", code, frames);
        Ok(frames)
    }
}
