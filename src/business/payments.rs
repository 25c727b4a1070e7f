//! Payment operations
//!
//! Payments are append-only: there is no update or delete.

use crate::database::{NewPayment, Payment, queries};
use crate::error::Result;
use super::desk::GymDesk;

impl GymDesk {
    /// Record a payment, returning its id
    ///
    /// Fails with `InvalidInput` for a negative or non-finite amount.
    pub fn create_payment(&self, payment: &NewPayment) -> Result<i64> {
        payment.validate()?;
        let id = self.with_connection(|conn| queries::insert_payment(conn, payment))?;
        log::info!("Payment {} of {:.2} recorded for member {}", id, payment.amount, payment.member_id);
        Ok(id)
    }

    /// Payments, most recent first; all members when `member_id` is None
    pub fn list_payments(&self, member_id: Option<i64>) -> Result<Vec<Payment>> {
        self.with_connection(|conn| queries::list_payments(conn, member_id))
    }
}

#[cfg(test)]
mod tests {
    use crate::business::GymDesk;
    use crate::database::{NewMember, NewPayment};
    use crate::error::DeskError;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup() -> (GymDesk, i64, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let desk = GymDesk::open_path(&temp_dir.path().join("academia.db")).unwrap();
        let member_id = desk.create_member(&NewMember {
            name: "Ana".to_string(),
            document: "111".to_string(),
            phone: String::new(),
            address: String::new(),
            registration_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }).unwrap();
        (desk, member_id, temp_dir)
    }

    fn payment(member_id: i64, amount: f64) -> NewPayment {
        NewPayment {
            member_id,
            amount,
            payment_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            status: "paid".to_string(),
        }
    }

    #[test]
    fn test_payments_newest_first() {
        let (desk, member_id, _temp_dir) = setup();

        for (month, status) in [(1, "paid"), (3, "pending"), (2, "paid")] {
            desk.create_payment(&NewPayment {
                member_id,
                amount: 99.9,
                payment_date: NaiveDate::from_ymd_opt(2024, month, 5).unwrap(),
                status: status.to_string(),
            }).unwrap();
        }

        let payments = desk.list_payments(Some(member_id)).unwrap();
        let months: Vec<u32> = payments.iter().map(|p| chrono::Datelike::month(&p.payment_date)).collect();
        assert_eq!(months, vec![3, 2, 1]);
        assert_eq!(payments[0].status, "pending");
        assert_eq!(payments[0].amount, 99.9);
    }

    #[test]
    fn test_invalid_amounts_rejected_and_listing_survives() {
        let (desk, member_id, _temp_dir) = setup();
        desk.create_payment(&payment(member_id, 80.0)).unwrap();

        for amount in [f64::NAN, f64::INFINITY, -5.0] {
            let err = desk.create_payment(&payment(member_id, amount)).unwrap_err();
            assert!(
                matches!(err, DeskError::InvalidInput { field: "amount", .. }),
                "amount {amount} gave {err:?}"
            );
        }

        let payments = desk.list_payments(None).unwrap();
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].amount, 80.0);
    }

    #[test]
    fn test_schema_rejects_negative_amount() {
        let (desk, member_id, _temp_dir) = setup();

        let result = desk.with_connection(|conn| {
            crate::database::queries::insert_payment(conn, &payment(member_id, -1.0))
        });
        assert!(result.is_err());
        assert!(desk.list_payments(None).unwrap().is_empty());
    }
}
