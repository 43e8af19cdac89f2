use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::dates;

/// A row of the `employee` table.
///
/// `id` belongs to the database and never leaves the server; clients only
/// ever see `public_id`.
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
pub struct Employee {
    #[serde(skip_serializing)]
    pub id: i32,
    pub public_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub home_address: String,
    #[serde(with = "dates")]
    pub date_of_birth: NaiveDateTime,
    #[serde(with = "dates")]
    pub date_of_employment: NaiveDateTime,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub home_address: String,
    #[serde(with = "dates")]
    pub date_of_birth: NaiveDateTime,
    #[serde(with = "dates")]
    pub date_of_employment: NaiveDateTime,
}

/// The fields an edit overwrites. Anything else in the body, dates
/// included, is accepted and ignored.
#[derive(Deserialize, Debug)]
pub struct EmployeeUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub home_address: String,
}

#[derive(Serialize, Debug)]
pub struct EmployeeView {
    pub public_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub home_address: String,
    #[serde(with = "dates")]
    pub date_of_birth: NaiveDateTime,
    #[serde(with = "dates")]
    pub date_of_employment: NaiveDateTime,
}

impl Employee {
    /// Build a not-yet-persisted record; `id` is assigned by the store.
    pub fn new(public_id: String, new_employee: NewEmployee) -> Self {
        Self {
            id: 0,
            public_id,
            first_name: new_employee.first_name,
            last_name: new_employee.last_name,
            email: new_employee.email,
            home_address: new_employee.home_address,
            date_of_birth: new_employee.date_of_birth,
            date_of_employment: new_employee.date_of_employment,
        }
    }

    pub fn apply(&mut self, update: &EmployeeUpdate) {
        self.first_name = update.first_name.clone();
        self.last_name = update.last_name.clone();
        self.email = update.email.clone();
        self.home_address = update.home_address.clone();
    }
}

impl From<Employee> for EmployeeView {
    fn from(employee: Employee) -> Self {
        Self {
            public_id: employee.public_id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            home_address: employee.home_address,
            date_of_birth: employee.date_of_birth,
            date_of_employment: employee.date_of_employment,
        }
    }
}
