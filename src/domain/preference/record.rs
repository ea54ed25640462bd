//! BoolPreferenceRecord - an ordered list of flags replaced wholesale on write.

use crate::domain::foundation::UserId;

/// Boolean preference flags of one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolPreferenceRecord {
    user_id: UserId,
    flags: Vec<bool>,
}

impl BoolPreferenceRecord {
    pub fn new(user_id: UserId, flags: Vec<bool>) -> Self {
        Self { user_id, flags }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    pub fn into_flags(self) -> Vec<bool> {
        self.flags
    }
}
