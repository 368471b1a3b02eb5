// ntag5-bridge/src/error.rs

use thiserror::Error;

/// Common error type for every tag, mailbox and bridge operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no tag found in the field")]
    NoTagFound,

    #[error("select failed: {0}")]
    SelectFailure(String),

    #[error("read error at block {address:#04x}: expected {expected} bytes, got {actual}")]
    ReadError {
        address: u8,
        expected: usize,
        actual: usize,
    },

    #[error("mailbox header read returned no frames")]
    HeaderReadError,

    #[error("write to block {address:#04x} was not acknowledged")]
    WriteError { address: u8 },

    #[error("tag reported error code {code:#04x}")]
    TagError { code: u8 },

    #[error("invalid byte offset {0} (expected 0..=3)")]
    InvalidOffset(u8),

    #[error("invalid block address {0:#04x}")]
    InvalidAddress(u8),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error(
        "invalid data direction configuration: PT_TRANSFER_DIR={pt_transfer_dir:#04x}, ED_CONFIG={ed_config:#04x}"
    )]
    InvalidConfiguration { pt_transfer_dir: u8, ed_config: u8 },

    #[error("invalid bridge settings: {0}")]
    InvalidSettings(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("watchdog expired after {elapsed_ms} ms without mailbox progress")]
    Timeout { elapsed_ms: u64 },

    #[error("fatal: {0}")]
    Fatal(String),
}

impl Error {
    /// Conditions that end the bridge loop.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Error::Timeout { .. } | Error::Fatal(_))
    }

    /// Caller errors that indicate a bug in this crate rather than a tag
    /// that is not ready yet.
    pub fn is_bug(&self) -> bool {
        matches!(self, Error::InvalidOffset(_) | Error::InvalidAddress(_))
    }

    /// Process exit status an embedding binary should use for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Timeout { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
