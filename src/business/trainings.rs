//! Training operations

use crate::database::{NewTraining, Training, queries};
use crate::error::Result;
use super::desk::GymDesk;

impl GymDesk {
    /// Assign a training plan to a member, returning its id
    ///
    /// Fails with `MemberNotFound` if the member does not exist.
    pub fn create_training(&self, training: &NewTraining) -> Result<i64> {
        training.validate()?;
        let id = self.with_connection(|conn| queries::insert_training(conn, training))?;
        log::info!("Training {} created for member {}", id, training.member_id);
        Ok(id)
    }

    /// Trainings, newest start date first; all members when `member_id` is None
    pub fn list_trainings(&self, member_id: Option<i64>) -> Result<Vec<Training>> {
        self.with_connection(|conn| queries::list_trainings(conn, member_id))
    }

    /// Get a training by id
    pub fn get_training(&self, id: i64) -> Result<Option<Training>> {
        self.with_connection(|conn| queries::get_training(conn, id))
    }

    /// Overwrite every field of a training; false when the id is unknown
    pub fn update_training(&self, id: i64, training: &NewTraining) -> Result<bool> {
        training.validate()?;
        let changed = self.with_connection(|conn| queries::update_training(conn, id, training))?;
        if changed == 0 {
            log::debug!("update_training: no training with id {}", id);
        } else {
            log::info!("Training {} updated", id);
        }
        Ok(changed > 0)
    }

    /// Delete a training; false when the id is unknown
    pub fn delete_training(&self, id: i64) -> Result<bool> {
        let removed = self.with_connection(|conn| queries::delete_training(conn, id))?;
        if removed > 0 {
            log::info!("Training {} deleted", id);
        }
        Ok(removed > 0)
    }
}
