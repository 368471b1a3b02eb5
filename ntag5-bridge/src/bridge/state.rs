// ntag5-bridge/src/bridge/state.rs

use derive_more::Display;

/// Bridge state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum BridgeState {
    /// Waiting for a tag to discover and select
    #[default]
    #[display(fmt = "INIT")]
    Init,
    /// Waiting for the harvested supply to come up
    #[display(fmt = "TRIGGER_EH")]
    TriggerEnergyHarvest,
    /// Microcontroller owns the mailbox; read its message when ready
    #[display(fmt = "WAIT_I2C_TO_NFC")]
    WaitI2cToNfc,
    /// NFC side owns the mailbox; write the outbound message
    #[display(fmt = "WAIT_NFC_TO_I2C")]
    WaitNfcToI2c,
    #[display(fmt = "FATAL")]
    Fatal,
}

impl BridgeState {
    pub fn is_terminal(self) -> bool {
        self == BridgeState::Fatal
    }
}
