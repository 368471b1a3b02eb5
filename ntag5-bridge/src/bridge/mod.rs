// ntag5-bridge/src/bridge/mod.rs
//! Mailbox arbitration state machine.
//!
//! One state is evaluated per tick. A state never blocks waiting for the
//! tag: it either moves on or stays, and the loop sleeps before the next
//! tick. Error policy lives in [`Bridge::step`] only: transient failures keep
//! the current state, watchdog expiry and fatal conditions end the loop.

use std::convert::Infallible;
use std::time::Duration;

use log::{debug, error, info, warn};

use crate::config::{BridgeConfig, validate_outbound};
use crate::mailbox::{self, MailboxMessage};
use crate::registers::{
    self, ED_CONFIG, EH_LOAD_OK, I2C_IF_LOCKED, PT_TRANSFER_DIR, Register, SRAM_DATA_RDY,
};
use crate::session::{self, Session};
use crate::tag::Tag;
use crate::transport::Transport;
use crate::types::Direction;
use crate::utils::{Clock, SystemClock, as_millis_u64};
use crate::{Error, Result};

mod state;

pub use state::BridgeState;

/// Value written to EH_CONFIG_REG to start energy harvesting.
pub const EH_TRIGGER_VALUE: u32 =
    (registers::EH_ENABLE.mask | registers::EH_TRIGGER.mask) as u32;

pub struct Bridge<T: Transport, C: Clock = SystemClock> {
    tag: Tag<T>,
    clock: C,
    config: BridgeConfig,
    state: BridgeState,
    session: Option<Session>,
    watchdog_armed_at: Duration,
    eh_triggered: bool,
    last_inbound: Option<MailboxMessage>,
    exchanges: u64,
}

impl<T: Transport> Bridge<T, SystemClock> {
    pub fn new(transport: T, config: BridgeConfig) -> Result<Self> {
        Self::with_clock(transport, config, SystemClock::new())
    }
}

impl<T: Transport, C: Clock> Bridge<T, C> {
    pub fn with_clock(transport: T, config: BridgeConfig, clock: C) -> Result<Self> {
        config.validate()?;
        let watchdog_armed_at = clock.now();
        Ok(Self {
            tag: Tag::with_flags(transport, config.request_flags),
            clock,
            config,
            state: BridgeState::Init,
            session: None,
            watchdog_armed_at,
            eh_triggered: false,
            last_inbound: None,
            exchanges: 0,
        })
    }

    pub fn state(&self) -> BridgeState {
        self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        self.tag.transport()
    }

    pub fn transport_mut(&mut self) -> &mut T {
        self.tag.transport_mut()
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Completed NFC -> I2C writes since the bridge started.
    pub fn exchanges(&self) -> u64 {
        self.exchanges
    }

    /// Message read on the last I2C -> NFC turn.
    pub fn last_inbound(&self) -> Option<&MailboxMessage> {
        self.last_inbound.as_ref()
    }

    pub fn take_inbound(&mut self) -> Option<MailboxMessage> {
        self.last_inbound.take()
    }

    /// Replace the payload written on the next NFC -> I2C turns.
    pub fn set_outbound(&mut self, payload: Vec<u8>) -> Result<()> {
        validate_outbound(&payload)?;
        self.config.outbound = payload;
        Ok(())
    }

    pub fn into_inner(self) -> T {
        self.tag.into_inner()
    }

    /// Reader bootstrap, once before the first tick.
    pub fn bootstrap(&mut self) -> Result<()> {
        let transport = self.tag.transport_mut();
        transport.init()?;
        transport.enable_antenna()?;
        transport.set_protocol()?;
        debug!("reader bootstrapped");
        Ok(())
    }

    /// Bootstrap, then tick until a terminal error.
    pub fn run(&mut self) -> Result<Infallible> {
        self.bootstrap()?;
        loop {
            self.step()?;
            self.clock.sleep(self.config.tick_interval);
        }
    }

    /// Evaluate the current state once.
    ///
    /// Returns the new state, or the error that ended the loop: watchdog
    /// expiry and fatal conditions (state becomes `Fatal`) and internal
    /// address/offset bugs (state unchanged).
    pub fn step(&mut self) -> Result<BridgeState> {
        let current = self.state;
        match self.transition(current) {
            Ok(next) => {
                if next != current {
                    info!("{} -> {}", current, next);
                }
                self.state = next;
                Ok(next)
            }
            Err(e) if e.is_terminal() => {
                error!("{}: {}", current, e);
                self.state = BridgeState::Fatal;
                Err(e)
            }
            Err(e) if e.is_bug() => {
                error!("{}: internal error: {}", current, e);
                Err(e)
            }
            Err(e) => {
                warn!("{}: {}; retrying next tick", current, e);
                Ok(current)
            }
        }
    }

    /// Current owner of the mailbox.
    pub fn data_direction(&mut self) -> Result<Direction> {
        let pt_transfer_dir = self.tag.read_register_bit(PT_TRANSFER_DIR)?;
        let ed_config = self.tag.read_register_bit(ED_CONFIG)?;

        let direction = Direction::decode(pt_transfer_dir, ed_config);
        if direction == Direction::Unknown {
            warn!(
                "{}",
                Error::InvalidConfiguration {
                    pt_transfer_dir,
                    ed_config
                }
            );
            return Ok(direction);
        }

        if self.config.require_unlocked_i2c && self.tag.read_register_bit(I2C_IF_LOCKED)? != 0 {
            debug!("{} pending: I2C interface still locked", direction);
            return Ok(Direction::Unknown);
        }
        Ok(direction)
    }

    fn transition(&mut self, state: BridgeState) -> Result<BridgeState> {
        match state {
            BridgeState::Init => self.on_init(),
            BridgeState::TriggerEnergyHarvest => self.on_trigger_energy_harvest(),
            BridgeState::WaitI2cToNfc => self.on_wait_i2c_to_nfc(),
            BridgeState::WaitNfcToI2c => self.on_wait_nfc_to_i2c(),
            BridgeState::Fatal => Err(Error::Fatal(format!("stepped in {} state", state))),
        }
    }

    fn on_init(&mut self) -> Result<BridgeState> {
        self.session = Some(session::establish(&mut self.tag)?);
        self.eh_triggered = false;
        self.arm_watchdog();

        Ok(if self.config.energy_harvest {
            BridgeState::TriggerEnergyHarvest
        } else {
            BridgeState::WaitI2cToNfc
        })
    }

    fn on_trigger_energy_harvest(&mut self) -> Result<BridgeState> {
        if self.tag.read_register_bit(EH_LOAD_OK)? == EH_LOAD_OK.mask {
            self.arm_watchdog();
            return Ok(BridgeState::WaitI2cToNfc);
        }

        if !self.eh_triggered {
            let address = Register::EhConfig.descriptor().address;
            self.eh_triggered = self.tag.write_block(address, EH_TRIGGER_VALUE);
            debug!("energy harvest trigger sent: {}", self.eh_triggered);
        }
        Ok(BridgeState::TriggerEnergyHarvest)
    }

    fn on_wait_i2c_to_nfc(&mut self) -> Result<BridgeState> {
        let elapsed = self.clock.now().saturating_sub(self.watchdog_armed_at);
        if elapsed > self.config.watchdog {
            return Err(Error::Timeout {
                elapsed_ms: as_millis_u64(elapsed),
            });
        }

        if self.data_direction()? != Direction::I2cToNfc {
            return Ok(BridgeState::WaitI2cToNfc);
        }
        if self.tag.read_register_bit(SRAM_DATA_RDY)? != SRAM_DATA_RDY.mask {
            return Ok(BridgeState::WaitI2cToNfc);
        }

        let msg = mailbox::read(&mut self.tag, None)?;
        if !msg.is_complete() {
            warn!(
                "incomplete mailbox read: {} of {} bytes",
                msg.payload.len(),
                msg.blocks * crate::constants::BLOCK_SIZE
            );
        }
        self.last_inbound = Some(msg);

        if self.tag.read_register_bit(SRAM_DATA_RDY)? != 0 {
            debug!("SRAM_DATA_RDY still set after read");
            return Ok(BridgeState::WaitI2cToNfc);
        }
        Ok(BridgeState::WaitNfcToI2c)
    }

    fn on_wait_nfc_to_i2c(&mut self) -> Result<BridgeState> {
        if self.data_direction()? != Direction::NfcToI2c {
            return Ok(BridgeState::WaitNfcToI2c);
        }

        mailbox::write(&mut self.tag, &self.config.outbound)?;
        self.exchanges += 1;
        self.arm_watchdog();
        Ok(BridgeState::WaitI2cToNfc)
    }

    fn arm_watchdog(&mut self) {
        self.watchdog_armed_at = self.clock.now();
    }
}
