// ntag5-bridge/src/prelude.rs

pub use crate::bridge::{Bridge, BridgeState};
pub use crate::config::BridgeConfig;
pub use crate::mailbox::MailboxMessage;
pub use crate::protocol::{Command, RequestFlags};
pub use crate::session::Session;
pub use crate::tag::Tag;
pub use crate::transport::Transport;
pub use crate::{Block, Direction, Error, Result, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{
    Clock, ManualClock, SystemClock, bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex,
};
