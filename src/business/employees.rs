//! Employee accounts and login

use crate::crypto;
use crate::database::{Employee, NewEmployee, queries};
use crate::error::Result;
use super::desk::GymDesk;

impl GymDesk {
    /// Add a staff account, returning its id
    ///
    /// The password is stored hashed. Fails with `DuplicateKey` if the login
    /// is taken.
    pub fn create_employee(&self, employee: &NewEmployee) -> Result<i64> {
        employee.validate()?;
        let password_hash = crypto::hash_password(&employee.password);
        let id = self.with_connection(|conn| {
            queries::insert_employee(conn, &employee.name, &employee.role, &employee.login, &password_hash)
        })?;
        log::info!("Employee {} created (id {})", employee.login, id);
        Ok(id)
    }

    /// Look up an employee by login
    pub fn find_employee_by_login(&self, login: &str) -> Result<Option<Employee>> {
        self.with_connection(|conn| queries::find_employee_by_login(conn, login))
    }

    /// Number of staff accounts
    pub fn count_employees(&self) -> Result<usize> {
        self.with_connection(queries::count_employees)
    }

    /// Check credentials and return the matching employee
    pub fn login(&self, login: &str, password: &str) -> Result<Option<Employee>> {
        let employee = self.find_employee_by_login(login)?;
        match employee {
            Some(e) if crypto::verify_password(password, &e.password_hash) => {
                log::info!("Employee {} logged in", login);
                Ok(Some(e))
            }
            _ => {
                log::warn!("Failed login for {}", login);
                Ok(None)
            }
        }
    }

    /// True when `login` exists and `password` matches its stored hash
    pub fn authenticate(&self, login: &str, password: &str) -> Result<bool> {
        Ok(self.login(login, password)?.is_some())
    }
}
