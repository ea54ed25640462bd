//! SaveFlags - Command handler replacing a user's preference flags.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::preference::BoolPreferenceRecord;
use crate::ports::PreferenceRepository;

/// Command carrying the full flag list; any previous list is replaced.
#[derive(Debug, Clone)]
pub struct SaveFlagsCommand {
    pub user_id: UserId,
    pub flags: Vec<bool>,
}

pub struct SaveFlagsHandler {
    repository: Arc<dyn PreferenceRepository>,
}

impl SaveFlagsHandler {
    pub fn new(repository: Arc<dyn PreferenceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SaveFlagsCommand) -> Result<(), DomainError> {
        let flag_count = cmd.flags.len();
        let record = BoolPreferenceRecord::new(cmd.user_id, cmd.flags);
        self.repository.upsert(&record).await?;
        debug!(user_id = %record.user_id(), flag_count, "Preference flags saved");
        Ok(())
    }
}
