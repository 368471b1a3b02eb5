// ntag5-bridge/src/protocol/mod.rs

pub mod commands;
pub mod flags;
pub mod response;

pub use commands::Command;
pub use flags::RequestFlags;
pub use response::ResponseFrame;
