//! Utilities for ntag5-bridge: small, reusable helpers used across the crate.
//!
//! Hex conversion for the string transport contract, timing defaults and the
//! clock abstraction the scheduler runs on.

pub mod clock;
pub mod hex;
pub mod timeout;

// Re-export the most common helpers at the `utils` module level so callers can
// use `crate::utils::bytes_to_hex(...)` etc if they prefer.
pub use self::clock::*;
pub use self::hex::*;
pub use self::timeout::*;
