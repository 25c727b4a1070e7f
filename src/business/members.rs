//! Member operations
//!
//! This module provides member management operations for the GymDesk.

use crate::database::{Member, MemberUpdate, NewMember, queries};
use crate::error::Result;
use super::desk::GymDesk;

impl GymDesk {
    /// Register a new member, returning its id
    ///
    /// Fails with `DuplicateKey` if the document id is already registered.
    pub fn create_member(&self, member: &NewMember) -> Result<i64> {
        member.validate()?;
        let id = self.with_connection(|conn| queries::insert_member(conn, member))?;
        log::info!("Member {} registered (id {})", member.name, id);
        Ok(id)
    }

    /// All members ordered by name
    pub fn list_members(&self) -> Result<Vec<Member>> {
        self.with_connection(queries::list_members)
    }

    /// Get a member by id
    pub fn get_member(&self, id: i64) -> Result<Option<Member>> {
        self.with_connection(|conn| queries::get_member(conn, id))
    }

    /// Overwrite a member's name, document, phone and address
    ///
    /// Returns false when no member has this id; nothing is created.
    pub fn update_member(&self, id: i64, update: &MemberUpdate) -> Result<bool> {
        update.validate()?;
        let changed = self.with_connection(|conn| queries::update_member(conn, id, update))?;
        if changed == 0 {
            log::debug!("update_member: no member with id {}", id);
        } else {
            log::info!("Member {} updated", id);
        }
        Ok(changed > 0)
    }

    /// Delete a member together with its trainings, payments and activity history
    ///
    /// Returns false when no member has this id.
    pub fn delete_member(&self, id: i64) -> Result<bool> {
        let removed = self.with_connection(|conn| queries::delete_member(conn, id))?;
        if removed == 0 {
            log::debug!("delete_member: no member with id {}", id);
        } else {
            log::info!("Member {} deleted", id);
        }
        Ok(removed > 0)
    }

    /// Number of registered members
    pub fn count_members(&self) -> Result<usize> {
        self.with_connection(queries::count_members)
    }
}
