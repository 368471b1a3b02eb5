// ntag5-bridge/src/session.rs
//! Tag discovery and selection.

use log::{debug, info, warn};

use crate::constants::SELECT_SUCCESS;
use crate::protocol::Command;
use crate::tag::Tag;
use crate::transport::Transport;
use crate::types::Uid;
use crate::{Error, Result};

/// The selected tag. Only ever constructed by a successful `establish`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    uid: Uid,
    selected: bool,
}

impl Session {
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// One inventory round. Transport errors count as "no tag".
pub fn discover<T: Transport>(tag: &mut Tag<T>) -> Result<Uid> {
    match tag.transport_mut().inventory() {
        Ok(Some(uid)) => {
            debug!("inventory found {}", uid);
            Ok(uid)
        }
        Ok(None) => Err(Error::NoTagFound),
        Err(e) => {
            warn!("inventory failed: {}", e);
            Err(Error::NoTagFound)
        }
    }
}

/// Select `uid`. Succeeds only for a single `"00"` response frame.
pub fn select<T: Transport>(tag: &mut Tag<T>, uid: &Uid) -> Result<()> {
    let frames = tag
        .execute(&Command::Select { uid: uid.clone() })
        .map_err(|e| Error::SelectFailure(e.to_string()))?;

    match frames.as_slice() {
        [only] if only.as_str() == SELECT_SUCCESS => Ok(()),
        other => Err(Error::SelectFailure(format!(
            "unexpected select response {:?}",
            other
        ))),
    }
}

/// Discover and select the tag in the field.
pub fn establish<T: Transport>(tag: &mut Tag<T>) -> Result<Session> {
    let uid = discover(tag)?;
    select(tag, &uid)?;
    info!("selected tag {}", uid);
    Ok(Session {
        uid,
        selected: true,
    })
}
