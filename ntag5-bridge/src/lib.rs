// ntag5-bridge/src/lib.rs

//! ntag5-bridge
//!
//! NFC-side driver for the NTAG5 SRAM mailbox. The tag's SRAM is shared
//! between an ISO15693 reader and a microcontroller on I2C; this crate
//! polls the tag's session registers over the reader, decides whose turn
//! it is and moves messages through the mailbox in 15-block chunks.
#![warn(missing_docs)]

pub mod bridge;
pub mod config;
pub mod constants;
pub mod error;
pub mod mailbox;
pub mod prelude;
pub mod protocol;
pub mod registers;
pub mod session;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
