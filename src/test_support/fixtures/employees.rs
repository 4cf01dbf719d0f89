// Employee records with fixed timestamps for reducer, selector, and validation tests.

use crate::core::employee::model::{Department, Employee, Position};
use chrono::{NaiveDate, TimeZone, Utc};

pub fn make_employee(id: &str, email: &str) -> Employee {
    let created_at = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
    Employee {
        id: id.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        phone: "+90 532 123 45 67".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        date_of_employment: NaiveDate::from_ymd_opt(2020, 1, 6).unwrap(),
        department: Department::Tech,
        position: Position::Senior,
        created_at,
        updated_at: created_at,
    }
}

/// `count` employees with ids `0..count` and emails `employee{i}@x.com`.
pub fn make_employees(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| make_employee(&i.to_string(), &format!("employee{i}@x.com")))
        .collect()
}
