//! Wire format shared by the HTTP routes and the reaction listener.
//!
//! Messages are positional JSON arrays, and ids arrive either as strings or
//! as integers depending on the producing service.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{EventId, UserId, ValidationError};

/// An identifier as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Integer(i64),
}

impl WireId {
    pub fn to_user_id(&self) -> Result<UserId, ValidationError> {
        UserId::new(self.to_string())
    }

    pub fn to_event_id(&self) -> Result<EventId, ValidationError> {
        EventId::new(self.to_string())
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireId::Text(s) => write!(f, "{}", s),
            WireId::Integer(n) => write!(f, "{}", n),
        }
    }
}

/// `[user_id, event_id]`
pub type ReactionMessage = (WireId, WireId);

/// `[user_id, [tag, ...]]`
pub type QuestionnaireMessage = (WireId, Vec<String>);

/// `[user_id, [flag, ...]]`
pub type FlagsMessage = (WireId, Vec<bool>);
