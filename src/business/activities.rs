//! Activity history operations
//!
//! The history is a log: records are appended and listed, never changed.

use crate::database::{ActivityRecord, NewActivity, queries};
use crate::error::Result;
use super::desk::GymDesk;

impl GymDesk {
    /// Append an activity to a member's history, returning its id
    pub fn record_activity(&self, activity: &NewActivity) -> Result<i64> {
        activity.validate()?;
        let id = self.with_connection(|conn| queries::insert_activity(conn, activity))?;
        log::debug!("Activity {} logged for member {}", id, activity.member_id);
        Ok(id)
    }

    /// Activity history, most recent first; all members when `member_id` is None
    pub fn list_activities(&self, member_id: Option<i64>) -> Result<Vec<ActivityRecord>> {
        self.with_connection(|conn| queries::list_activities(conn, member_id))
    }
}

#[cfg(test)]
mod tests {
    use crate::business::GymDesk;
    use crate::database::{NewActivity, NewMember};
    use crate::error::DeskError;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn member(desk: &GymDesk, name: &str, document: &str) -> i64 {
        desk.create_member(&NewMember {
            name: name.to_string(),
            document: document.to_string(),
            phone: String::new(),
            address: String::new(),
            registration_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }).unwrap()
    }

    #[test]
    fn test_history_per_member() {
        let temp_dir = TempDir::new().unwrap();
        let desk = GymDesk::open_path(&temp_dir.path().join("academia.db")).unwrap();
        let ana = member(&desk, "Ana", "1");
        let bruno = member(&desk, "Bruno", "2");

        for (member_id, activity, day) in [(ana, "Treadmill", 1), (bruno, "Rowing", 2), (ana, "Squats", 3)] {
            desk.record_activity(&NewActivity {
                member_id,
                activity: activity.to_string(),
                date: NaiveDate::from_ymd_opt(2024, 7, day).unwrap(),
                execution_time: 20,
            }).unwrap();
        }

        let history = desk.list_activities(Some(ana)).unwrap();
        let names: Vec<&str> = history.iter().map(|a| a.activity.as_str()).collect();
        assert_eq!(names, vec!["Squats", "Treadmill"]);

        assert_eq!(desk.list_activities(None).unwrap().len(), 3);
    }

    #[test]
    fn test_blank_activity_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let desk = GymDesk::open_path(&temp_dir.path().join("academia.db")).unwrap();
        let ana = member(&desk, "Ana", "1");

        let err = desk.record_activity(&NewActivity {
            member_id: ana,
            activity: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            execution_time: 10,
        }).unwrap_err();
        assert!(matches!(err, DeskError::InvalidInput { field: "activity", .. }));
        assert!(desk.list_activities(Some(ana)).unwrap().is_empty());
    }

    #[test]
    fn test_activity_for_unknown_member() {
        let temp_dir = TempDir::new().unwrap();
        let desk = GymDesk::open_path(&temp_dir.path().join("academia.db")).unwrap();

        let err = desk.record_activity(&NewActivity {
            member_id: 5,
            activity: "Yoga".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            execution_time: 50,
        }).unwrap_err();
        assert!(matches!(err, DeskError::MemberNotFound(5)));
    }
}
