// ntag5-bridge/src/transport/mod.rs

pub mod mock;
pub mod traits;

pub use mock::{IssuedCommand, MockTransport};
pub use traits::Transport;
